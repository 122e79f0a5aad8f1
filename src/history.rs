//! Append-only transaction log, one per account.
//!
//! Insertion order is chronological and significant; entries are never
//! reordered, mutated or pruned.

use crate::transaction::Transaction;
use serde::Serialize;

/// Statement header line: 32 `=`, the title, 32 `=`.
const STATEMENT_HEADER: &str =
    "================================ Extrato ================================";

/// Statement footer line: 71 `=`.
const STATEMENT_FOOTER: &str =
    "=======================================================================";

/// Sentinel printed instead of entries when the history is empty.
const NO_TRANSACTIONS: &str = "Nenhuma transação realizada.";

/// The chronological log of every operation attempted on one account.
#[derive(Debug, Clone, Default, Serialize)]
pub struct History {
    transactions: Vec<Transaction>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        History {
            transactions: Vec::new(),
        }
    }

    /// Appends a transaction and returns a reference to the stored entry.
    ///
    /// No validation and no deduplication: the log records attempts as-is.
    pub fn append(&mut self, transaction: Transaction) -> &Transaction {
        self.transactions.push(transaction);

        // Safety: the vector is non-empty right after a push
        self.transactions.last().expect("history entry just pushed")
    }

    /// Number of recorded attempts, successful or not.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// `true` when no operation was ever attempted.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// The most recently recorded entry.
    pub fn last(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    /// Renders the statement as a lazy sequence of display lines.
    ///
    /// A header, one line per transaction in insertion order (or a
    /// sentinel line when empty), then a footer. Pure read: calling it
    /// again without intervening appends yields the same lines.
    pub fn render(&self) -> impl Iterator<Item = String> + '_ {
        let body: Box<dyn Iterator<Item = String> + '_> = if self.transactions.is_empty() {
            Box::new(std::iter::once(NO_TRANSACTIONS.to_string()))
        } else {
            Box::new(self.transactions.iter().map(ToString::to_string))
        };

        std::iter::once(STATEMENT_HEADER.to_string())
            .chain(body)
            .chain(std::iter::once(STATEMENT_FOOTER.to_string()))
    }
}
