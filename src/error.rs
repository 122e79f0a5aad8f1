//! Error types for the registry and menu boundary.
//!
//! Refused deposits and withdrawals are not errors: they are recorded in
//! the account history as failed transactions. The variants here cover
//! only lookups and terminal I/O.

use crate::customer::TaxId;
use thiserror::Error;

/// Result type alias for bank operations
pub type Result<T> = std::result::Result<T, BankError>;

/// Errors that can occur at the registry and menu boundary.
#[derive(Error, Debug)]
pub enum BankError {
    /// Failed to read from or write to the terminal
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No customer registered under the given tax id
    #[error("no customer registered under tax id {tax_id}")]
    UnknownCustomer { tax_id: TaxId },

    /// No account with the given number
    #[error("no account with number {number}")]
    UnknownAccount { number: u32 },
}
