//! # Banco
//!
//! An in-memory retail-banking ledger driven by an interactive text menu:
//! customers, accounts, deposits, withdrawals and an append-only
//! statement history.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: amounts carry exactly 2 decimal places via `rust_decimal`
//! - **Every attempt is recorded**: refused operations land in the history too
//! - **Variant dispatch**: checking accounts layer their withdrawal rules over the base policy, no inheritance
//! - **Arena-style ownership**: the registry owns customers and accounts; associations are stable keys
//!
//! ## Example
//!
//! ```
//! use banco::{Account, Money, TaxId};
//! use std::str::FromStr;
//!
//! let mut account = Account::open(TaxId::new("111.444.777-35"), 1, "0001");
//! let tx = account.deposit(Money::from_str("100.00").unwrap());
//! assert!(tx.succeeded());
//! assert_eq!(account.balance().to_string(), "100.00");
//! ```

pub mod account;
pub mod bank;
pub mod customer;
pub mod error;
pub mod history;
pub mod menu;
pub mod money;
pub mod transaction;

pub use account::{Account, AccountKind, CheckingLimits, DEFAULT_BRANCH};
pub use bank::{Bank, Registration};
pub use customer::{BirthDate, Customer, Individual, TaxId};
pub use error::{BankError, Result};
pub use history::History;
pub use money::Money;
pub use transaction::{FailureReason, Transaction, TxKind};
