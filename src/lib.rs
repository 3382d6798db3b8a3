//! # Ledger Core
//!
//! A multi-tenant double-entry journal library built around a small,
//! invariant-carrying domain model.
//!
//! ## Features
//!
//! - **Balanced journal entries**: draft entries accumulate debit/credit
//!   lines and post only when totals match exactly
//! - **Chart of accounts**: tenant-scoped account hierarchies with safe
//!   parent/child linkage
//! - **Tenants and cost centers**: isolation boundary and auxiliary
//!   reporting dimensions
//! - **Exact decimal arithmetic**: `BigDecimal` amounts end to end, never
//!   binary floats
//! - **Storage abstraction**: async repository traits plus a lossless
//!   record mapping layer; an in-memory backend ships for tests and demos
//!
//! ## Quick Start
//!
//! ```rust
//! use ledger_core::{AccountType, Ledger};
//! use ledger_core::utils::memory::MemoryStore;
//!
//! # async fn run() -> ledger_core::LedgerResult<()> {
//! let mut ledger = Ledger::new(MemoryStore::new());
//! let tenant = ledger.create_tenant("Acme Corp", "ACME", 12, "USD").await?;
//! let cash = ledger
//!     .create_account(tenant.id(), "1010", "Cash", AccountType::Asset, None)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod ledger;
pub mod mapping;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use ledger::*;
pub use traits::*;
pub use types::*;
