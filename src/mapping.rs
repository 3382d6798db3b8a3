//! Persisted records and the mapping between storage and domain shapes
//!
//! Storage backends deal in these serde-friendly records, never in domain
//! entities. Enumerations travel as fixed uppercase tokens, monetary
//! amounts as exact decimal text, and absent optional references as `None`;
//! reconstruction must lose nothing across a round trip.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ledger::{Account, CostCenter, JournalEntry, JournalEntryLine, Tenant};
use crate::types::{AccountType, Direction, EntryStatus, LedgerError, LedgerResult};

/// Stored form of a tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantRecord {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub fiscal_year_end_month: u32,
    pub reporting_currency: String,
    pub is_active: bool,
}

impl TenantRecord {
    pub fn from_domain(tenant: &Tenant) -> Self {
        Self {
            id: tenant.id(),
            name: tenant.name().to_string(),
            code: tenant.code().to_string(),
            fiscal_year_end_month: tenant.fiscal_year_end_month(),
            reporting_currency: tenant.reporting_currency().to_string(),
            is_active: tenant.is_active(),
        }
    }

    pub fn into_domain(self) -> LedgerResult<Tenant> {
        Ok(Tenant::new(
            self.id,
            self.name,
            self.code,
            self.fiscal_year_end_month,
            self.reporting_currency,
            self.is_active,
        )?)
    }
}

/// Stored form of a cost center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostCenterRecord {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub code: String,
    pub name: String,
    pub is_active: bool,
}

impl CostCenterRecord {
    pub fn from_domain(cost_center: &CostCenter) -> Self {
        Self {
            id: cost_center.id(),
            tenant_id: cost_center.tenant_id(),
            code: cost_center.code().to_string(),
            name: cost_center.name().to_string(),
            is_active: cost_center.is_active(),
        }
    }

    pub fn into_domain(self) -> LedgerResult<CostCenter> {
        Ok(CostCenter::new(
            self.id,
            self.tenant_id,
            self.code,
            self.name,
            self.is_active,
        )?)
    }
}

/// Stored form of an account
///
/// Hierarchy lives in `parent_id` alone; the in-memory children list is
/// never persisted and reconstructs empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub code: String,
    pub name: String,
    pub account_type: String,
}

impl AccountRecord {
    pub fn from_domain(account: &Account) -> Self {
        Self {
            id: account.id(),
            tenant_id: account.tenant_id(),
            parent_id: account.parent_id(),
            code: account.code().to_string(),
            name: account.name().to_string(),
            account_type: account.account_type().as_token().to_string(),
        }
    }

    pub fn into_domain(self) -> LedgerResult<Account> {
        let account_type = AccountType::from_token(&self.account_type)?;
        Ok(Account::new(
            self.id,
            self.tenant_id,
            self.code,
            self.name,
            account_type,
            self.parent_id,
        )?)
    }
}

/// Stored form of one journal entry line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntryLineRecord {
    pub id: Uuid,
    pub account_id: Uuid,
    pub cost_center_id: Option<Uuid>,
    pub direction: String,
    /// Exact decimal text; never a binary float
    pub amount: String,
    pub description: String,
}

impl JournalEntryLineRecord {
    pub fn from_domain(line: &JournalEntryLine) -> Self {
        Self {
            id: line.id(),
            account_id: line.account_id(),
            cost_center_id: line.cost_center_id(),
            direction: line.direction().as_token().to_string(),
            amount: line.amount().to_string(),
            description: line.description().to_string(),
        }
    }

    pub fn into_domain(self) -> LedgerResult<JournalEntryLine> {
        let direction = Direction::from_token(&self.direction)?;
        let amount = BigDecimal::from_str(&self.amount).map_err(|_| LedgerError::Parse {
            what: "line amount",
            value: self.amount.clone(),
        })?;

        Ok(JournalEntryLine::new(
            self.id,
            self.account_id,
            direction,
            amount,
            self.description,
            self.cost_center_id,
        )?)
    }
}

/// Stored form of a journal entry, lines included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntryRecord {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub posting_date: NaiveDate,
    pub status: String,
    pub posted_at: Option<NaiveDateTime>,
    pub lines: Vec<JournalEntryLineRecord>,
}

impl JournalEntryRecord {
    pub fn from_domain(entry: &JournalEntry) -> Self {
        Self {
            id: entry.id(),
            tenant_id: entry.tenant_id(),
            posting_date: entry.posting_date(),
            status: entry.status().as_token().to_string(),
            posted_at: entry.posted_at(),
            lines: entry
                .lines()
                .iter()
                .map(JournalEntryLineRecord::from_domain)
                .collect(),
        }
    }

    /// Rebuilds the aggregate. Lines are reconstructed through their
    /// validating constructor; the stored status and posted-at stamp go in
    /// through [`JournalEntry::restore`] rather than by replaying
    /// transitions.
    pub fn into_domain(self) -> LedgerResult<JournalEntry> {
        let mut lines = Vec::with_capacity(self.lines.len());
        for raw in self.lines {
            lines.push(raw.into_domain()?);
        }

        let status = EntryStatus::from_token(&self.status)?;

        Ok(JournalEntry::restore(
            self.id,
            self.tenant_id,
            self.posting_date,
            lines,
            status,
            self.posted_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InvalidOperation;

    fn sample_entry() -> JournalEntry {
        let mut entry = JournalEntry::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        );
        entry
            .add_line(
                JournalEntryLine::new(
                    Uuid::new_v4(),
                    Uuid::new_v4(),
                    Direction::Debit,
                    BigDecimal::from_str("100.10").unwrap(),
                    "Cash received",
                    Some(Uuid::new_v4()),
                )
                .unwrap(),
            )
            .unwrap();
        entry
            .add_line(
                JournalEntryLine::new(
                    Uuid::new_v4(),
                    Uuid::new_v4(),
                    Direction::Credit,
                    BigDecimal::from_str("100.10").unwrap(),
                    "Revenue",
                    None,
                )
                .unwrap(),
            )
            .unwrap();
        entry
    }

    #[test]
    fn journal_entry_round_trip_preserves_identity_status_and_totals() {
        let mut entry = sample_entry();
        entry.post().unwrap();

        let record = JournalEntryRecord::from_domain(&entry);
        assert_eq!(record.status, "POSTED");
        assert_eq!(record.lines[0].direction, "DEBIT");
        assert_eq!(record.lines[0].amount, "100.10");

        let rebuilt = record.into_domain().unwrap();
        assert_eq!(rebuilt.id(), entry.id());
        assert_eq!(rebuilt.tenant_id(), entry.tenant_id());
        assert_eq!(rebuilt.status(), EntryStatus::Posted);
        assert_eq!(rebuilt.posted_at(), entry.posted_at());
        assert_eq!(rebuilt.lines().len(), 2);
        assert_eq!(rebuilt.total_debits(), entry.total_debits());
        assert_eq!(rebuilt.total_credits(), entry.total_credits());
    }

    #[test]
    fn draft_round_trip_keeps_posted_at_absent() {
        let entry = sample_entry();
        let rebuilt = JournalEntryRecord::from_domain(&entry).into_domain().unwrap();
        assert_eq!(rebuilt.status(), EntryStatus::Draft);
        assert!(rebuilt.posted_at().is_none());
    }

    #[test]
    fn record_serializes_amounts_as_decimal_text() {
        let entry = sample_entry();
        let json = serde_json::to_string(&JournalEntryRecord::from_domain(&entry)).unwrap();
        assert!(json.contains("\"amount\":\"100.10\""));
        assert!(json.contains("\"direction\":\"DEBIT\""));
        assert!(json.contains("\"status\":\"DRAFT\""));
    }

    #[test]
    fn unknown_status_token_fails_on_read() {
        let mut record = JournalEntryRecord::from_domain(&sample_entry());
        record.status = "PENDING".to_string();

        let err = record.into_domain().unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InvalidOperation(InvalidOperation::UnknownEnumValue { kind: "EntryStatus", .. })
        ));
    }

    #[test]
    fn corrupt_amount_text_fails_on_read() {
        let mut record = JournalEntryRecord::from_domain(&sample_entry());
        record.lines[0].amount = "one hundred".to_string();

        let err = record.into_domain().unwrap_err();
        assert!(matches!(err, LedgerError::Parse { what: "line amount", .. }));
    }

    #[test]
    fn absent_optional_references_reconstruct_as_none() {
        let tenant_id = Uuid::new_v4();
        let account =
            Account::new(Uuid::new_v4(), tenant_id, "1000", "Cash", AccountType::Asset, None)
                .unwrap();

        let record = AccountRecord::from_domain(&account);
        assert_eq!(record.parent_id, None);
        assert_eq!(record.account_type, "ASSET");

        let rebuilt = record.into_domain().unwrap();
        assert_eq!(rebuilt.parent_id(), None);
        assert!(rebuilt.children().is_empty());

        let entry_record = JournalEntryRecord::from_domain(&sample_entry());
        let rebuilt_entry = entry_record.into_domain().unwrap();
        assert_eq!(rebuilt_entry.lines()[1].cost_center_id(), None);
    }

    #[test]
    fn tenant_and_cost_center_round_trip() {
        let tenant = Tenant::new(Uuid::new_v4(), "Acme Corp", "ACME", 3, "EUR", true).unwrap();
        let rebuilt = TenantRecord::from_domain(&tenant).into_domain().unwrap();
        assert_eq!(rebuilt, tenant);

        let cc =
            CostCenter::new(Uuid::new_v4(), tenant.id(), "CC-1", "Operations", false).unwrap();
        let rebuilt = CostCenterRecord::from_domain(&cc).into_domain().unwrap();
        assert_eq!(rebuilt, cc);
    }
}
