//! In-memory storage implementation for testing and demos

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use crate::ledger::{Account, CostCenter, JournalEntry, Tenant};
use crate::mapping::{AccountRecord, CostCenterRecord, JournalEntryRecord, TenantRecord};
use crate::traits::{
    AccountRepository, CostCenterRepository, JournalEntryRepository, TenantRepository,
};
use crate::types::{InvalidOperation, LedgerResult};

/// In-memory backend implementing every repository trait
///
/// Stores persisted records, not domain values, so every read and write
/// goes through the same mapping layer a database-backed implementation
/// would use. Individual operations are serialized by the inner locks;
/// nothing stronger is promised for concurrent writers of one entity.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    tenants: Arc<RwLock<HashMap<Uuid, TenantRecord>>>,
    accounts: Arc<RwLock<HashMap<Uuid, AccountRecord>>>,
    cost_centers: Arc<RwLock<HashMap<Uuid, CostCenterRecord>>>,
    entries: Arc<RwLock<HashMap<Uuid, JournalEntryRecord>>>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            tenants: Arc::new(RwLock::new(HashMap::new())),
            accounts: Arc::new(RwLock::new(HashMap::new())),
            cost_centers: Arc::new(RwLock::new(HashMap::new())),
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.tenants.write().unwrap().clear();
        self.accounts.write().unwrap().clear();
        self.cost_centers.write().unwrap().clear();
        self.entries.write().unwrap().clear();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TenantRepository for MemoryStore {
    async fn get_tenant(&self, id: Uuid) -> LedgerResult<Option<Tenant>> {
        let record = self.tenants.read().unwrap().get(&id).cloned();
        record.map(TenantRecord::into_domain).transpose()
    }

    async fn get_all_tenants(&self) -> LedgerResult<Vec<Tenant>> {
        let records: Vec<TenantRecord> =
            self.tenants.read().unwrap().values().cloned().collect();

        let mut tenants = Vec::with_capacity(records.len());
        for record in records {
            tenants.push(record.into_domain()?);
        }
        tenants.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(tenants)
    }

    async fn add_tenant(&mut self, tenant: &Tenant) -> LedgerResult<()> {
        self.tenants
            .write()
            .unwrap()
            .insert(tenant.id(), TenantRecord::from_domain(tenant));
        Ok(())
    }

    async fn update_tenant(&mut self, tenant: &Tenant) -> LedgerResult<()> {
        let mut tenants = self.tenants.write().unwrap();
        if !tenants.contains_key(&tenant.id()) {
            return Err(InvalidOperation::TenantNotFound(tenant.id()).into());
        }
        tenants.insert(tenant.id(), TenantRecord::from_domain(tenant));
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for MemoryStore {
    async fn get_account(&self, id: Uuid) -> LedgerResult<Option<Account>> {
        let record = self.accounts.read().unwrap().get(&id).cloned();
        record.map(AccountRecord::into_domain).transpose()
    }

    async fn get_accounts_by_tenant(&self, tenant_id: Uuid) -> LedgerResult<Vec<Account>> {
        let records: Vec<AccountRecord> = self
            .accounts
            .read()
            .unwrap()
            .values()
            .filter(|record| record.tenant_id == tenant_id)
            .cloned()
            .collect();

        let mut accounts = Vec::with_capacity(records.len());
        for record in records {
            accounts.push(record.into_domain()?);
        }
        Ok(accounts)
    }

    async fn add_account(&mut self, account: &Account) -> LedgerResult<()> {
        self.accounts
            .write()
            .unwrap()
            .insert(account.id(), AccountRecord::from_domain(account));
        Ok(())
    }

    async fn update_account(&mut self, account: &Account) -> LedgerResult<()> {
        let mut accounts = self.accounts.write().unwrap();
        if !accounts.contains_key(&account.id()) {
            return Err(InvalidOperation::AccountNotFound(account.id()).into());
        }
        accounts.insert(account.id(), AccountRecord::from_domain(account));
        Ok(())
    }
}

#[async_trait]
impl CostCenterRepository for MemoryStore {
    async fn get_cost_center(&self, id: Uuid) -> LedgerResult<Option<CostCenter>> {
        let record = self.cost_centers.read().unwrap().get(&id).cloned();
        record.map(CostCenterRecord::into_domain).transpose()
    }

    async fn get_cost_centers_by_tenant(
        &self,
        tenant_id: Uuid,
    ) -> LedgerResult<Vec<CostCenter>> {
        let records: Vec<CostCenterRecord> = self
            .cost_centers
            .read()
            .unwrap()
            .values()
            .filter(|record| record.tenant_id == tenant_id)
            .cloned()
            .collect();

        let mut cost_centers = Vec::with_capacity(records.len());
        for record in records {
            cost_centers.push(record.into_domain()?);
        }
        Ok(cost_centers)
    }

    async fn add_cost_center(&mut self, cost_center: &CostCenter) -> LedgerResult<()> {
        self.cost_centers
            .write()
            .unwrap()
            .insert(cost_center.id(), CostCenterRecord::from_domain(cost_center));
        Ok(())
    }

    async fn update_cost_center(&mut self, cost_center: &CostCenter) -> LedgerResult<()> {
        let mut cost_centers = self.cost_centers.write().unwrap();
        if !cost_centers.contains_key(&cost_center.id()) {
            return Err(InvalidOperation::CostCenterNotFound(cost_center.id()).into());
        }
        cost_centers.insert(cost_center.id(), CostCenterRecord::from_domain(cost_center));
        Ok(())
    }
}

#[async_trait]
impl JournalEntryRepository for MemoryStore {
    async fn get_entry(&self, id: Uuid) -> LedgerResult<Option<JournalEntry>> {
        let record = self.entries.read().unwrap().get(&id).cloned();
        record.map(JournalEntryRecord::into_domain).transpose()
    }

    async fn get_entries_by_tenant(&self, tenant_id: Uuid) -> LedgerResult<Vec<JournalEntry>> {
        let records: Vec<JournalEntryRecord> = self
            .entries
            .read()
            .unwrap()
            .values()
            .filter(|record| record.tenant_id == tenant_id)
            .cloned()
            .collect();

        let mut entries = Vec::with_capacity(records.len());
        for record in records {
            entries.push(record.into_domain()?);
        }
        Ok(entries)
    }

    async fn add_entry(&mut self, entry: &JournalEntry) -> LedgerResult<()> {
        // One insert carries the header and every line together.
        self.entries
            .write()
            .unwrap()
            .insert(entry.id(), JournalEntryRecord::from_domain(entry));
        Ok(())
    }

    async fn update_entry(&mut self, entry: &JournalEntry) -> LedgerResult<()> {
        let mut entries = self.entries.write().unwrap();
        let record = entries
            .get_mut(&entry.id())
            .ok_or(InvalidOperation::EntryNotFound(entry.id()))?;

        // Header fields only; the stored lines stay as written at creation.
        record.status = entry.status().as_token().to_string();
        record.posted_at = entry.posted_at();
        Ok(())
    }
}
