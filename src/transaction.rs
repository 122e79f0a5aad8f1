//! Transaction records: one immutable entry per attempted operation.
//!
//! A [`Transaction`] is created for every deposit or withdrawal attempt,
//! successful or not, and appended to the owning account's history. It
//! records the attempt, not a validated state change, so construction is
//! total and never fails.

use crate::money::Money;
use serde::Serialize;
use std::fmt;

/// The two monetary operations an account supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TxKind {
    /// Credit funds to the account.
    Deposit,

    /// Debit funds from the account.
    Withdrawal,
}

/// Why an attempted operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureReason {
    /// The amount was zero or negative.
    InvalidAmount,

    /// The amount exceeds the current balance.
    InsufficientBalance,

    /// The amount exceeds the per-withdrawal ceiling of a checking account.
    LimitExceeded {
        /// The ceiling that was exceeded, echoed in the statement line.
        limit: Money,
    },

    /// The checking account has spent its withdrawal allowance.
    DailyLimitReached,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::InvalidAmount => write!(f, "valor inválido"),
            FailureReason::InsufficientBalance => write!(f, "saldo insuficiente"),
            FailureReason::LimitExceeded { limit } => {
                write!(f, "valor acima do limite de R$ {}", limit)
            }
            FailureReason::DailyLimitReached => write!(f, "limite diário atingido"),
        }
    }
}

/// An immutable record of one deposit or withdrawal attempt.
///
/// The statement line is derived deterministically from the kind, the
/// amount (two decimal places) and, for refused attempts, the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    kind: TxKind,
    amount: Money,
    reason: Option<FailureReason>,
}

impl Transaction {
    /// Records a successful operation.
    pub fn successful(kind: TxKind, amount: Money) -> Self {
        Transaction {
            kind,
            amount,
            reason: None,
        }
    }

    /// Records a refused operation and why it was refused.
    pub fn failed(kind: TxKind, amount: Money, reason: FailureReason) -> Self {
        Transaction {
            kind,
            amount,
            reason: Some(reason),
        }
    }

    /// The operation that was attempted.
    pub fn kind(&self) -> TxKind {
        self.kind
    }

    /// The amount that was attempted, whether or not it was applied.
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// `true` when the operation mutated the balance.
    pub fn succeeded(&self) -> bool {
        self.reason.is_none()
    }

    /// The refusal reason, present only for failed attempts.
    pub fn reason(&self) -> Option<FailureReason> {
        self.reason
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.reason) {
            (TxKind::Deposit, None) => write!(f, "Depósito: R$ {}", self.amount),
            (TxKind::Deposit, Some(reason)) => {
                write!(f, "Depósito falhado: {} R$ {}", reason, self.amount)
            }
            (TxKind::Withdrawal, None) => write!(f, "Saque: R$ {}", self.amount),
            (TxKind::Withdrawal, Some(reason)) => {
                write!(f, "Saque falhado: {} para R$ {}", reason, self.amount)
            }
        }
    }
}
