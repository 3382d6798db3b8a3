//! Journal entry use cases and the ledger facade

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ledger::{
    Account, AccountManager, CostCenter, CostCenterManager, JournalEntry, JournalEntryLine,
    Tenant, TenantManager,
};
use crate::traits::{
    AccountRepository, CostCenterRepository, JournalEntryRepository, TenantRepository,
};
use crate::types::{AccountType, Direction, InvalidOperation, LedgerError, LedgerResult};

/// One requested line of a new journal entry
///
/// Identity and amount fields are primitive strings; the use case parses
/// them into value objects and rejects malformed input before anything is
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJournalEntryLineRequest {
    pub account_id: String,
    /// Decimal text, e.g. `"100.00"`
    pub amount: String,
    /// `"Debit"` or `"Credit"`
    pub direction: String,
    pub description: String,
    pub cost_center_id: Option<String>,
}

/// Request to create a draft journal entry with its lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJournalEntryRequest {
    pub tenant_id: String,
    pub posting_date: NaiveDate,
    pub lines: Vec<CreateJournalEntryLineRequest>,
}

/// Read-only projection of one journal entry line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalEntryLineView {
    pub account_id: String,
    pub cost_center_id: Option<String>,
    pub direction: String,
    pub amount: BigDecimal,
    pub description: String,
}

/// Read-only projection of a journal entry with computed totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalEntryView {
    pub id: String,
    pub status: String,
    pub posting_date: NaiveDate,
    pub total_debits: BigDecimal,
    pub total_credits: BigDecimal,
    pub lines: Vec<JournalEntryLineView>,
}

impl JournalEntryView {
    fn project(entry: &JournalEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            status: entry.status().to_string(),
            posting_date: entry.posting_date(),
            total_debits: entry.total_debits(),
            total_credits: entry.total_credits(),
            lines: entry
                .lines()
                .iter()
                .map(|line| JournalEntryLineView {
                    account_id: line.account_id().to_string(),
                    cost_center_id: line.cost_center_id().map(|id| id.to_string()),
                    direction: line.direction().to_string(),
                    amount: line.amount().clone(),
                    description: line.description().to_string(),
                })
                .collect(),
        }
    }
}

/// Journal entry manager driving the create/post/read use cases
pub struct JournalEntryManager<R: JournalEntryRepository> {
    repository: R,
}

impl<R: JournalEntryRepository> JournalEntryManager<R> {
    /// Create a new journal entry manager over the given repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Build a draft entry from the request and persist it atomically
    /// (header and all lines, or nothing). Returns the new entry's id.
    pub async fn create_entry(
        &mut self,
        request: CreateJournalEntryRequest,
    ) -> LedgerResult<Uuid> {
        let tenant_id = parse_id(&request.tenant_id, "tenant id")?;
        let mut entry = JournalEntry::new(Uuid::new_v4(), tenant_id, request.posting_date);

        for line_request in &request.lines {
            let direction = match line_request.direction.as_str() {
                "Debit" => Direction::Debit,
                "Credit" => Direction::Credit,
                other => {
                    return Err(InvalidOperation::InvalidDirection(other.to_string()).into())
                }
            };

            let account_id = parse_id(&line_request.account_id, "account id")?;
            let amount = parse_amount(&line_request.amount)?;
            let cost_center_id = match line_request.cost_center_id.as_deref() {
                Some(raw) => Some(parse_id(raw, "cost center id")?),
                None => None,
            };

            let line = JournalEntryLine::new(
                Uuid::new_v4(),
                account_id,
                direction,
                amount,
                line_request.description.clone(),
                cost_center_id,
            )?;

            entry.add_line(line)?;
        }

        self.repository.add_entry(&entry).await?;
        tracing::info!(
            entry_id = %entry.id(),
            tenant_id = %tenant_id,
            lines = entry.lines().len(),
            "journal entry created"
        );

        Ok(entry.id())
    }

    /// Load an entry by id, post it, and persist the header change.
    ///
    /// Posting failures propagate unchanged and nothing is written.
    pub async fn post_entry(&mut self, id: &str) -> LedgerResult<()> {
        let id = parse_id(id, "entry id")?;
        let mut entry = self
            .repository
            .get_entry(id)
            .await?
            .ok_or(InvalidOperation::EntryNotFound(id))?;

        entry.post()?;

        self.repository.update_entry(&entry).await?;
        tracing::info!(entry_id = %id, "journal entry posted");

        Ok(())
    }

    /// Project an entry into its read-only view, or `None` when absent
    pub async fn get_entry(&self, id: &str) -> LedgerResult<Option<JournalEntryView>> {
        let id = parse_id(id, "entry id")?;
        let entry = self.repository.get_entry(id).await?;
        Ok(entry.as_ref().map(JournalEntryView::project))
    }

    /// Project all entries belonging to a tenant
    pub async fn entries_for_tenant(
        &self,
        tenant_id: Uuid,
    ) -> LedgerResult<Vec<JournalEntryView>> {
        let entries = self.repository.get_entries_by_tenant(tenant_id).await?;
        Ok(entries.iter().map(JournalEntryView::project).collect())
    }
}

fn parse_id(raw: &str, what: &'static str) -> LedgerResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| LedgerError::Parse {
        what,
        value: raw.to_string(),
    })
}

fn parse_amount(raw: &str) -> LedgerResult<BigDecimal> {
    BigDecimal::from_str(raw).map_err(|_| LedgerError::Parse {
        what: "amount",
        value: raw.to_string(),
    })
}

/// Facade coordinating all managers over one storage backend
pub struct Ledger<S>
where
    S: TenantRepository
        + AccountRepository
        + CostCenterRepository
        + JournalEntryRepository
        + Clone,
{
    tenants: TenantManager<S>,
    accounts: AccountManager<S>,
    cost_centers: CostCenterManager<S>,
    journal: JournalEntryManager<S>,
}

impl<S> Ledger<S>
where
    S: TenantRepository
        + AccountRepository
        + CostCenterRepository
        + JournalEntryRepository
        + Clone,
{
    /// Create a new ledger with the given storage backend
    pub fn new(storage: S) -> Self {
        Self {
            tenants: TenantManager::new(storage.clone()),
            accounts: AccountManager::new(storage.clone()),
            cost_centers: CostCenterManager::new(storage.clone()),
            journal: JournalEntryManager::new(storage),
        }
    }

    // Tenant operations
    /// Register a new tenant
    pub async fn create_tenant(
        &mut self,
        name: impl Into<String>,
        code: impl Into<String>,
        fiscal_year_end_month: u32,
        reporting_currency: impl Into<String>,
    ) -> LedgerResult<Tenant> {
        self.tenants
            .create_tenant(name, code, fiscal_year_end_month, reporting_currency)
            .await
    }

    /// Get a tenant by id
    pub async fn get_tenant(&self, id: Uuid) -> LedgerResult<Option<Tenant>> {
        self.tenants.get_tenant(id).await
    }

    /// List all tenants, ordered by name ascending
    pub async fn list_tenants(&self) -> LedgerResult<Vec<Tenant>> {
        self.tenants.list_tenants().await
    }

    /// Replace a stored tenant with a new value
    pub async fn update_tenant(&mut self, tenant: &Tenant) -> LedgerResult<()> {
        self.tenants.update_tenant(tenant).await
    }

    // Account operations
    /// Create a new account for a tenant
    pub async fn create_account(
        &mut self,
        tenant_id: Uuid,
        code: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
        parent_id: Option<Uuid>,
    ) -> LedgerResult<Account> {
        self.accounts
            .create_account(tenant_id, code, name, account_type, parent_id)
            .await
    }

    /// Get an account by id
    pub async fn get_account(&self, id: Uuid) -> LedgerResult<Option<Account>> {
        self.accounts.get_account(id).await
    }

    /// List all accounts belonging to a tenant
    pub async fn list_accounts(&self, tenant_id: Uuid) -> LedgerResult<Vec<Account>> {
        self.accounts.list_accounts(tenant_id).await
    }

    /// Load the stored direct children of `parent` and link them in place
    pub async fn load_children(&self, parent: &mut Account) -> LedgerResult<usize> {
        self.accounts.load_children(parent).await
    }

    // Cost center operations
    /// Register a new cost center for a tenant
    pub async fn create_cost_center(
        &mut self,
        tenant_id: Uuid,
        code: impl Into<String>,
        name: impl Into<String>,
    ) -> LedgerResult<CostCenter> {
        self.cost_centers
            .create_cost_center(tenant_id, code, name)
            .await
    }

    /// Get a cost center by id
    pub async fn get_cost_center(&self, id: Uuid) -> LedgerResult<Option<CostCenter>> {
        self.cost_centers.get_cost_center(id).await
    }

    /// List all cost centers belonging to a tenant
    pub async fn list_cost_centers(&self, tenant_id: Uuid) -> LedgerResult<Vec<CostCenter>> {
        self.cost_centers.list_cost_centers(tenant_id).await
    }

    // Journal entry operations
    /// Create a draft journal entry from a request; returns the new id
    pub async fn create_journal_entry(
        &mut self,
        request: CreateJournalEntryRequest,
    ) -> LedgerResult<Uuid> {
        self.journal.create_entry(request).await
    }

    /// Post a draft journal entry
    pub async fn post_journal_entry(&mut self, id: &str) -> LedgerResult<()> {
        self.journal.post_entry(id).await
    }

    /// Get a journal entry projection by id
    pub async fn get_journal_entry(&self, id: &str) -> LedgerResult<Option<JournalEntryView>> {
        self.journal.get_entry(id).await
    }

    /// List all journal entry projections for a tenant
    pub async fn journal_entries_for_tenant(
        &self,
        tenant_id: Uuid,
    ) -> LedgerResult<Vec<JournalEntryView>> {
        self.journal.entries_for_tenant(tenant_id).await
    }
}
