//! Repository traits for storage abstraction
//!
//! The journal core never talks to a database directly; it consumes these
//! contracts. Implementations (PostgreSQL, SQLite, in-memory, etc.) own
//! schema, transactions, and write serialization for concurrent updates to
//! the same entity.

use async_trait::async_trait;
use uuid::Uuid;

use crate::ledger::{Account, CostCenter, JournalEntry, Tenant};
use crate::types::LedgerResult;

/// Storage contract for tenants
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Get a tenant by id
    async fn get_tenant(&self, id: Uuid) -> LedgerResult<Option<Tenant>>;

    /// List all tenants, ordered by name ascending
    async fn get_all_tenants(&self) -> LedgerResult<Vec<Tenant>>;

    /// Persist a new tenant
    async fn add_tenant(&mut self, tenant: &Tenant) -> LedgerResult<()>;

    /// Replace a stored tenant with a new whole value
    async fn update_tenant(&mut self, tenant: &Tenant) -> LedgerResult<()>;
}

/// Storage contract for accounts
///
/// Hierarchy is derived from the stored `parent_id` column; the in-memory
/// `children` list on [`Account`] is never persisted.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Get an account by id
    async fn get_account(&self, id: Uuid) -> LedgerResult<Option<Account>>;

    /// List all accounts belonging to a tenant
    async fn get_accounts_by_tenant(&self, tenant_id: Uuid) -> LedgerResult<Vec<Account>>;

    /// Persist a new account
    async fn add_account(&mut self, account: &Account) -> LedgerResult<()>;

    /// Replace a stored account
    async fn update_account(&mut self, account: &Account) -> LedgerResult<()>;
}

/// Storage contract for cost centers
#[async_trait]
pub trait CostCenterRepository: Send + Sync {
    /// Get a cost center by id
    async fn get_cost_center(&self, id: Uuid) -> LedgerResult<Option<CostCenter>>;

    /// List all cost centers belonging to a tenant
    async fn get_cost_centers_by_tenant(&self, tenant_id: Uuid) -> LedgerResult<Vec<CostCenter>>;

    /// Persist a new cost center
    async fn add_cost_center(&mut self, cost_center: &CostCenter) -> LedgerResult<()>;

    /// Replace a stored cost center
    async fn update_cost_center(&mut self, cost_center: &CostCenter) -> LedgerResult<()>;
}

/// Storage contract for journal entries
#[async_trait]
pub trait JournalEntryRepository: Send + Sync {
    /// Get an entry by id, lines included
    async fn get_entry(&self, id: Uuid) -> LedgerResult<Option<JournalEntry>>;

    /// List all entries belonging to a tenant, lines included
    async fn get_entries_by_tenant(&self, tenant_id: Uuid) -> LedgerResult<Vec<JournalEntry>>;

    /// Persist a new entry atomically: the header and all lines land in one
    /// durable operation, or nothing does.
    async fn add_entry(&mut self, entry: &JournalEntry) -> LedgerResult<()>;

    /// Update header fields only (status, posted-at). Lines are write-once
    /// at creation and must never be rewritten or deleted here.
    async fn update_entry(&mut self, entry: &JournalEntry) -> LedgerResult<()>;
}
