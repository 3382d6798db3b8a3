//! Journal entry aggregate and its line value object

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::types::{Direction, DomainError, EntryStatus, InvalidOperation};

/// One debit or credit movement within a journal entry
///
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntryLine {
    id: Uuid,
    account_id: Uuid,
    cost_center_id: Option<Uuid>,
    direction: Direction,
    amount: BigDecimal,
    description: String,
}

impl JournalEntryLine {
    /// Creates a line; the amount must be strictly greater than zero.
    pub fn new(
        id: Uuid,
        account_id: Uuid,
        direction: Direction,
        amount: BigDecimal,
        description: impl Into<String>,
        cost_center_id: Option<Uuid>,
    ) -> Result<Self, DomainError> {
        if amount <= BigDecimal::from(0) {
            return Err(DomainError::NonPositiveAmount);
        }

        Ok(Self {
            id,
            account_id,
            cost_center_id,
            direction,
            amount,
            description: description.into(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn account_id(&self) -> Uuid {
        self.account_id
    }

    pub fn cost_center_id(&self) -> Option<Uuid> {
        self.cost_center_id
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Aggregate root for one balanced transaction
///
/// Owns its lines: all mutation routes through [`JournalEntry::add_line`]
/// and [`JournalEntry::post`]. A new entry starts in `Draft` with no lines;
/// posting is irreversible.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    id: Uuid,
    tenant_id: Uuid,
    posting_date: NaiveDate,
    lines: Vec<JournalEntryLine>,
    status: EntryStatus,
    posted_at: Option<NaiveDateTime>,
}

impl JournalEntry {
    /// Creates a new draft entry with no lines.
    pub fn new(id: Uuid, tenant_id: Uuid, posting_date: NaiveDate) -> Self {
        Self {
            id,
            tenant_id,
            posting_date,
            lines: Vec::new(),
            status: EntryStatus::Draft,
            posted_at: None,
        }
    }

    /// Rebuilds an entry from persisted state, taking the stored status and
    /// posted-at stamp directly. For use by mapping layers only; new entries
    /// go through [`JournalEntry::new`].
    pub fn restore(
        id: Uuid,
        tenant_id: Uuid,
        posting_date: NaiveDate,
        lines: Vec<JournalEntryLine>,
        status: EntryStatus,
        posted_at: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id,
            tenant_id,
            posting_date,
            lines,
            status,
            posted_at,
        }
    }

    /// Appends a line, preserving insertion order. Allowed only in `Draft`.
    pub fn add_line(&mut self, line: JournalEntryLine) -> Result<(), InvalidOperation> {
        if self.status != EntryStatus::Draft {
            return Err(InvalidOperation::EntryAlreadyPosted);
        }
        self.lines.push(line);
        Ok(())
    }

    /// Transitions the entry from `Draft` to `Posted`.
    ///
    /// The entry must be in `Draft`, have at least one line, and be balanced
    /// (total debits equal total credits, compared exactly). On failure the
    /// entry is left untouched.
    pub fn post(&mut self) -> Result<(), InvalidOperation> {
        if self.status != EntryStatus::Draft {
            return Err(InvalidOperation::NotDraft);
        }

        if self.lines.is_empty() {
            return Err(InvalidOperation::NoLines);
        }

        if self.total_debits() != self.total_credits() {
            return Err(InvalidOperation::Unbalanced);
        }

        self.status = EntryStatus::Posted;
        self.posted_at = Some(chrono::Utc::now().naive_utc());
        Ok(())
    }

    /// Sum of all debit-direction line amounts, recomputed on every call
    pub fn total_debits(&self) -> BigDecimal {
        self.lines
            .iter()
            .filter(|line| line.direction() == Direction::Debit)
            .map(JournalEntryLine::amount)
            .sum()
    }

    /// Sum of all credit-direction line amounts, recomputed on every call
    pub fn total_credits(&self) -> BigDecimal {
        self.lines
            .iter()
            .filter(|line| line.direction() == Direction::Credit)
            .map(JournalEntryLine::amount)
            .sum()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn tenant_id(&self) -> Uuid {
        self.tenant_id
    }

    pub fn posting_date(&self) -> NaiveDate {
        self.posting_date
    }

    pub fn lines(&self) -> &[JournalEntryLine] {
        &self.lines
    }

    pub fn status(&self) -> EntryStatus {
        self.status
    }

    pub fn posted_at(&self) -> Option<NaiveDateTime> {
        self.posted_at
    }
}
