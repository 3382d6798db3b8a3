//! Core value objects, enumerations, and error types for the journal system

use std::fmt;

use uuid::Uuid;

/// Account classification following standard accounting principles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    /// Assets - what the business owns (Cash, Inventory, Equipment, etc.)
    Asset,
    /// Liabilities - what the business owes (Loans, Accounts Payable, etc.)
    Liability,
    /// Equity - owner's interest in the business (Capital, Retained Earnings, etc.)
    Equity,
    /// Revenue - money earned by the business
    Revenue,
    /// Expenses - costs incurred by the business
    Expense,
}

impl AccountType {
    /// Returns the side that increases an account of this type.
    /// Assets and Expenses normally carry debit balances;
    /// Liabilities, Equity, and Revenue normally carry credit balances.
    pub fn normal_balance(&self) -> Direction {
        match self {
            AccountType::Asset | AccountType::Expense => Direction::Debit,
            AccountType::Liability | AccountType::Equity | AccountType::Revenue => {
                Direction::Credit
            }
        }
    }

    /// Fixed storage token for this account type.
    pub fn as_token(&self) -> &'static str {
        match self {
            AccountType::Asset => "ASSET",
            AccountType::Liability => "LIABILITY",
            AccountType::Equity => "EQUITY",
            AccountType::Revenue => "REVENUE",
            AccountType::Expense => "EXPENSE",
        }
    }

    /// Resolves a storage token back into an account type.
    pub fn from_token(token: &str) -> Result<Self, InvalidOperation> {
        match token {
            "ASSET" => Ok(AccountType::Asset),
            "LIABILITY" => Ok(AccountType::Liability),
            "EQUITY" => Ok(AccountType::Equity),
            "REVENUE" => Ok(AccountType::Revenue),
            "EXPENSE" => Ok(AccountType::Expense),
            other => Err(InvalidOperation::UnknownEnumValue {
                kind: "AccountType",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccountType::Asset => "Asset",
            AccountType::Liability => "Liability",
            AccountType::Equity => "Equity",
            AccountType::Revenue => "Revenue",
            AccountType::Expense => "Expense",
        })
    }
}

/// Which side of a transaction a journal line moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Debit side - increases Assets and Expenses
    Debit,
    /// Credit side - increases Liabilities, Equity, and Revenue
    Credit,
}

impl Direction {
    /// Fixed storage token for this direction.
    pub fn as_token(&self) -> &'static str {
        match self {
            Direction::Debit => "DEBIT",
            Direction::Credit => "CREDIT",
        }
    }

    /// Resolves a storage token back into a direction.
    pub fn from_token(token: &str) -> Result<Self, InvalidOperation> {
        match token {
            "DEBIT" => Ok(Direction::Debit),
            "CREDIT" => Ok(Direction::Credit),
            other => Err(InvalidOperation::UnknownEnumValue {
                kind: "Direction",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Debit => "Debit",
            Direction::Credit => "Credit",
        })
    }
}

/// Lifecycle state of a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryStatus {
    /// Mutable working state; lines may still be added
    Draft,
    /// Balance-final state reached through posting
    Posted,
    /// Cancellation state; persisted but not produced by any operation yet
    Voided,
}

impl EntryStatus {
    /// Fixed storage token for this status.
    pub fn as_token(&self) -> &'static str {
        match self {
            EntryStatus::Draft => "DRAFT",
            EntryStatus::Posted => "POSTED",
            EntryStatus::Voided => "VOIDED",
        }
    }

    /// Resolves a storage token back into a status.
    pub fn from_token(token: &str) -> Result<Self, InvalidOperation> {
        match token {
            "DRAFT" => Ok(EntryStatus::Draft),
            "POSTED" => Ok(EntryStatus::Posted),
            "VOIDED" => Ok(EntryStatus::Voided),
            other => Err(InvalidOperation::UnknownEnumValue {
                kind: "EntryStatus",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntryStatus::Draft => "Draft",
            EntryStatus::Posted => "Posted",
            EntryStatus::Voided => "Voided",
        })
    }
}

/// String wrapper that rejects empty or whitespace-only content at construction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonBlankString(String);

impl NonBlankString {
    /// Wraps `value`, failing if it is empty or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Blank);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NonBlankString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonBlankString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Invariant violated while constructing a value object or entity
///
/// Raised synchronously from constructors; the object is never partially
/// built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Value cannot be empty or whitespace.")]
    Blank,
    #[error("{0} Name cannot be empty.")]
    EmptyName(&'static str),
    #[error("{0} Code cannot be empty.")]
    EmptyCode(&'static str),
    #[error("Line amount must be greater than zero.")]
    NonPositiveAmount,
    #[error("Fiscal Year End Month must be between 1 and 12.")]
    FiscalMonthOutOfRange,
}

/// Invariant violated by an attempted state transition or cross-entity rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidOperation {
    #[error("Cannot add child account from a different tenant.")]
    CrossTenantChild,
    #[error("Child account must be created with this account as its Parent.")]
    WrongParentLink,
    #[error("Cannot add parent account as a child (circular reference).")]
    CircularReference,
    #[error("Cannot add lines to a posted entry.")]
    EntryAlreadyPosted,
    #[error("Entry is not in Draft status.")]
    NotDraft,
    #[error("Entry must have at least one line.")]
    NoLines,
    #[error("Entry is not balanced (Debits != Credits).")]
    Unbalanced,
    #[error("Journal entry with id {0} not found.")]
    EntryNotFound(Uuid),
    #[error("Account with id {0} not found.")]
    AccountNotFound(Uuid),
    #[error("Tenant with id {0} not found.")]
    TenantNotFound(Uuid),
    #[error("Cost center with id {0} not found.")]
    CostCenterNotFound(Uuid),
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),
    #[error("Unknown {kind}: {value}")]
    UnknownEnumValue {
        kind: &'static str,
        value: String,
    },
}

/// Errors that can cross the journal system's outer boundary
///
/// Domain and transition failures propagate unchanged; the remaining
/// variants belong to the input and storage boundaries.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    InvalidOperation(#[from] InvalidOperation),
    /// Malformed primitive input (identity or decimal text)
    #[error("Invalid {what}: {value}")]
    Parse { what: &'static str, value: String },
    /// Failure reported by a storage collaborator
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for journal operations
pub type LedgerResult<T> = Result<T, LedgerError>;
