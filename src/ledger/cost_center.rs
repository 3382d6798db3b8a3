//! Cost center entity and management operations

use uuid::Uuid;

use crate::traits::CostCenterRepository;
use crate::types::{DomainError, InvalidOperation, LedgerResult, NonBlankString};

/// An auxiliary reporting dimension owned by a tenant
///
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CostCenter {
    id: Uuid,
    tenant_id: Uuid,
    code: NonBlankString,
    name: NonBlankString,
    is_active: bool,
}

impl CostCenter {
    /// Creates a cost center; code and name must both be non-blank.
    pub fn new(
        id: Uuid,
        tenant_id: Uuid,
        code: impl Into<String>,
        name: impl Into<String>,
        is_active: bool,
    ) -> Result<Self, DomainError> {
        let code =
            NonBlankString::new(code).map_err(|_| DomainError::EmptyCode("CostCenter"))?;
        let name =
            NonBlankString::new(name).map_err(|_| DomainError::EmptyName("CostCenter"))?;

        Ok(Self {
            id,
            tenant_id,
            code,
            name,
            is_active,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn tenant_id(&self) -> Uuid {
        self.tenant_id
    }

    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Cost center manager for registration and lookup
pub struct CostCenterManager<R: CostCenterRepository> {
    repository: R,
}

impl<R: CostCenterRepository> CostCenterManager<R> {
    /// Create a new cost center manager over the given repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Register a new cost center for a tenant
    pub async fn create_cost_center(
        &mut self,
        tenant_id: Uuid,
        code: impl Into<String>,
        name: impl Into<String>,
    ) -> LedgerResult<CostCenter> {
        let cost_center = CostCenter::new(Uuid::new_v4(), tenant_id, code, name, true)?;

        self.repository.add_cost_center(&cost_center).await?;
        tracing::debug!(
            cost_center_id = %cost_center.id(),
            tenant_id = %tenant_id,
            "cost center created"
        );

        Ok(cost_center)
    }

    /// Get a cost center by id
    pub async fn get_cost_center(&self, id: Uuid) -> LedgerResult<Option<CostCenter>> {
        self.repository.get_cost_center(id).await
    }

    /// List all cost centers belonging to a tenant
    pub async fn list_cost_centers(&self, tenant_id: Uuid) -> LedgerResult<Vec<CostCenter>> {
        self.repository.get_cost_centers_by_tenant(tenant_id).await
    }

    /// Replace a stored cost center, failing if it is unknown
    pub async fn update_cost_center(&mut self, cost_center: &CostCenter) -> LedgerResult<()> {
        if self
            .repository
            .get_cost_center(cost_center.id())
            .await?
            .is_none()
        {
            return Err(InvalidOperation::CostCenterNotFound(cost_center.id()).into());
        }

        self.repository.update_cost_center(cost_center).await
    }
}
