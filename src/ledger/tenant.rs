//! Tenant entity and management operations

use uuid::Uuid;

use crate::traits::TenantRepository;
use crate::types::{DomainError, InvalidOperation, LedgerResult, NonBlankString};

/// An isolation boundary owning a chart of accounts and its journal
///
/// Immutable after construction; updates replace the whole value through
/// the repository rather than mutating in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Tenant {
    id: Uuid,
    name: NonBlankString,
    code: String,
    fiscal_year_end_month: u32,
    reporting_currency: String,
    is_active: bool,
}

impl Tenant {
    /// Creates a tenant. The name must be non-blank and the fiscal year end
    /// month must fall in 1..=12.
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        code: impl Into<String>,
        fiscal_year_end_month: u32,
        reporting_currency: impl Into<String>,
        is_active: bool,
    ) -> Result<Self, DomainError> {
        let name =
            NonBlankString::new(name).map_err(|_| DomainError::EmptyName("Tenant"))?;

        if !(1..=12).contains(&fiscal_year_end_month) {
            return Err(DomainError::FiscalMonthOutOfRange);
        }

        Ok(Self {
            id,
            name,
            code: code.into(),
            fiscal_year_end_month,
            reporting_currency: reporting_currency.into(),
            is_active,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn fiscal_year_end_month(&self) -> u32 {
        self.fiscal_year_end_month
    }

    pub fn reporting_currency(&self) -> &str {
        &self.reporting_currency
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Tenant manager for registration and lookup
pub struct TenantManager<R: TenantRepository> {
    repository: R,
}

impl<R: TenantRepository> TenantManager<R> {
    /// Create a new tenant manager over the given repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Register a new tenant
    pub async fn create_tenant(
        &mut self,
        name: impl Into<String>,
        code: impl Into<String>,
        fiscal_year_end_month: u32,
        reporting_currency: impl Into<String>,
    ) -> LedgerResult<Tenant> {
        let tenant = Tenant::new(
            Uuid::new_v4(),
            name,
            code,
            fiscal_year_end_month,
            reporting_currency,
            true,
        )?;

        self.repository.add_tenant(&tenant).await?;
        tracing::info!(tenant_id = %tenant.id(), name = tenant.name(), "tenant created");

        Ok(tenant)
    }

    /// Get a tenant by id
    pub async fn get_tenant(&self, id: Uuid) -> LedgerResult<Option<Tenant>> {
        self.repository.get_tenant(id).await
    }

    /// List all tenants, ordered by name ascending
    pub async fn list_tenants(&self) -> LedgerResult<Vec<Tenant>> {
        self.repository.get_all_tenants().await
    }

    /// Replace a stored tenant with a new value, failing if it is unknown
    pub async fn update_tenant(&mut self, tenant: &Tenant) -> LedgerResult<()> {
        if self.repository.get_tenant(tenant.id()).await?.is_none() {
            return Err(InvalidOperation::TenantNotFound(tenant.id()).into());
        }

        self.repository.update_tenant(tenant).await
    }
}
