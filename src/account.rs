//! Account state and the deposit/withdraw policies.
//!
//! Maintains the invariants: `balance` equals the sum of successful
//! deposits minus successful withdrawals in the history, and never goes
//! negative. Every attempted operation, refused or not, appends exactly
//! one history entry.

use crate::customer::TaxId;
use crate::history::History;
use crate::money::Money;
use crate::transaction::{FailureReason, Transaction, TxKind};
use serde::Serialize;

/// Branch code stamped on accounts opened without an explicit one.
pub const DEFAULT_BRANCH: &str = "0001";

/// Withdrawal rules of a checking account.
///
/// `withdrawals_used` is monotonic for the account's lifetime; the count
/// limit is never reset.
#[derive(Debug, Clone, Serialize)]
pub struct CheckingLimits {
    withdrawal_ceiling: Money,
    max_withdrawals: u32,
    withdrawals_used: u32,
}

impl CheckingLimits {
    /// Creates limits with the given per-withdrawal ceiling and count cap.
    pub fn new(withdrawal_ceiling: Money, max_withdrawals: u32) -> Self {
        CheckingLimits {
            withdrawal_ceiling,
            max_withdrawals,
            withdrawals_used: 0,
        }
    }

    /// Largest amount a single withdrawal may move.
    pub fn withdrawal_ceiling(&self) -> Money {
        self.withdrawal_ceiling
    }

    /// How many withdrawals the account allows in total.
    pub fn max_withdrawals(&self) -> u32 {
        self.max_withdrawals
    }

    /// Withdrawals spent so far.
    pub fn withdrawals_used(&self) -> u32 {
        self.withdrawals_used
    }

    /// Runs the checking validation chain in order; the first failing
    /// rule determines the recorded reason.
    fn check(&self, balance: Money, amount: Money) -> Result<(), FailureReason> {
        if self.withdrawals_used >= self.max_withdrawals {
            return Err(FailureReason::DailyLimitReached);
        }
        if amount > self.withdrawal_ceiling {
            return Err(FailureReason::LimitExceeded {
                limit: self.withdrawal_ceiling,
            });
        }
        if amount > balance {
            return Err(FailureReason::InsufficientBalance);
        }
        if !amount.is_positive() {
            return Err(FailureReason::InvalidAmount);
        }
        Ok(())
    }
}

impl Default for CheckingLimits {
    /// The stock checking limits: R$ 500.00 per withdrawal, 3 withdrawals.
    fn default() -> Self {
        CheckingLimits::new(Money::from_cents(50_000), 3)
    }
}

/// Which withdrawal policy an account runs.
///
/// Variant dispatch in place of inheritance: deposits behave identically
/// for every kind, withdrawals go through the kind's own rule chain.
#[derive(Debug, Clone, Serialize)]
pub enum AccountKind {
    /// Plain account: a withdrawal only needs a positive amount covered
    /// by the balance.
    Standard,

    /// Checking account: layers a per-withdrawal ceiling and a withdrawal
    /// count cap over the standard rules.
    Checking(CheckingLimits),
}

/// One bank account: identity, balance and its owned history.
///
/// The owner is referenced by [`TaxId`] rather than held directly; the
/// registry owns both sides of the association.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    number: u32,
    branch: String,
    owner: TaxId,
    balance: Money,
    history: History,
    kind: AccountKind,
}

impl Account {
    /// Opens a standard account with zero balance and empty history.
    pub fn open(owner: TaxId, number: u32, branch: impl Into<String>) -> Self {
        Account {
            number,
            branch: branch.into(),
            owner,
            balance: Money::ZERO,
            history: History::new(),
            kind: AccountKind::Standard,
        }
    }

    /// Opens a checking account with the given withdrawal limits.
    pub fn open_checking(
        owner: TaxId,
        number: u32,
        branch: impl Into<String>,
        limits: CheckingLimits,
    ) -> Self {
        Account {
            kind: AccountKind::Checking(limits),
            ..Account::open(owner, number, branch)
        }
    }

    /// Unique account number assigned at creation.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Issuing branch code.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Tax id of the holder.
    pub fn owner(&self) -> &TaxId {
        &self.owner
    }

    /// Current balance.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// The account's transaction log.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The withdrawal policy this account runs.
    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Deposits `amount` when it is positive; records the attempt either way.
    ///
    /// Returns the recorded transaction, which carries the outcome. Never
    /// panics and never errors: a refused deposit is a failed history
    /// entry, not an exception.
    pub fn deposit(&mut self, amount: Money) -> &Transaction {
        if amount.is_positive() {
            self.balance += amount;
            self.history
                .append(Transaction::successful(TxKind::Deposit, amount))
        } else {
            self.history.append(Transaction::failed(
                TxKind::Deposit,
                amount,
                FailureReason::InvalidAmount,
            ))
        }
    }

    /// Withdraws `amount` when the account's rule chain allows it;
    /// records the attempt either way.
    ///
    /// Standard accounts require a positive amount covered by the
    /// balance. Checking accounts evaluate, in order: withdrawal count
    /// cap, per-withdrawal ceiling, balance coverage, amount sign. The
    /// first failing rule wins and becomes the recorded reason.
    pub fn withdraw(&mut self, amount: Money) -> &Transaction {
        let verdict = match &self.kind {
            AccountKind::Standard => Self::check_standard(self.balance, amount),
            AccountKind::Checking(limits) => limits.check(self.balance, amount),
        };

        match verdict {
            Ok(()) => {
                self.balance -= amount;
                if let AccountKind::Checking(limits) = &mut self.kind {
                    limits.withdrawals_used += 1;
                }
                self.history
                    .append(Transaction::successful(TxKind::Withdrawal, amount))
            }
            Err(reason) => {
                self.history
                    .append(Transaction::failed(TxKind::Withdrawal, amount, reason))
            }
        }
    }

    /// Standard withdrawal rules: positive amount, covered by the balance.
    fn check_standard(balance: Money, amount: Money) -> Result<(), FailureReason> {
        if amount.is_positive() && amount <= balance {
            Ok(())
        } else if !amount.is_positive() {
            Err(FailureReason::InvalidAmount)
        } else {
            Err(FailureReason::InsufficientBalance)
        }
    }
}
