//! The bank registry: owns every customer and account and routes
//! operations to the right one.
//!
//! Accounts reference their owner by tax id and customers reference
//! their accounts by number; the registry is the arena holding both
//! sides, so there is no ownership cycle.

use crate::account::{Account, CheckingLimits, DEFAULT_BRANCH};
use crate::customer::{BirthDate, Customer, TaxId};
use crate::error::{BankError, Result};
use crate::money::Money;
use crate::transaction::Transaction;
use log::{debug, warn};
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// Outcome of a registration attempt.
pub struct Registration<'a> {
    /// The newly registered customer, or the pre-existing one.
    pub customer: &'a Customer,

    /// `false` when the tax id was already registered.
    pub created: bool,
}

/// The in-memory bank: customers, accounts and the number sequence.
///
/// Account numbers are assigned from a counter starting at 1 and are
/// never reused. Accounts live in an ordered map so listings come out
/// ascending by number.
pub struct Bank {
    customers: HashMap<TaxId, Customer>,
    accounts: BTreeMap<u32, Account>,
    next_number: u32,
}

impl Bank {
    /// Creates an empty bank.
    pub fn new() -> Self {
        Bank {
            customers: HashMap::new(),
            accounts: BTreeMap::new(),
            next_number: 1,
        }
    }

    /// Registers a physical-person customer under the normalized tax id.
    ///
    /// When the id is already registered the existing customer is
    /// returned untouched and `created` is `false`; nothing is
    /// overwritten.
    pub fn register_customer(
        &mut self,
        name: &str,
        birth_date: BirthDate,
        raw_tax_id: &str,
        address: &str,
    ) -> Registration<'_> {
        let tax_id = TaxId::new(raw_tax_id);

        match self.customers.entry(tax_id.clone()) {
            Entry::Occupied(entry) => {
                debug!("Tax id {} already registered, reusing customer", tax_id);
                Registration {
                    customer: entry.into_mut(),
                    created: false,
                }
            }
            Entry::Vacant(entry) => {
                debug!("Registered customer under tax id {}", tax_id);
                Registration {
                    customer: entry.insert(Customer::individual(name, birth_date, tax_id, address)),
                    created: true,
                }
            }
        }
    }

    /// Opens a checking account with the stock limits for a registered
    /// customer and links it into the owner's account set.
    pub fn open_checking(&mut self, tax_id: &TaxId) -> Result<&Account> {
        let customer = self
            .customers
            .get_mut(tax_id)
            .ok_or_else(|| BankError::UnknownCustomer {
                tax_id: tax_id.clone(),
            })?;

        let number = self.next_number;
        self.next_number += 1;
        customer.link_account(number);

        let account = Account::open_checking(
            tax_id.clone(),
            number,
            DEFAULT_BRANCH,
            CheckingLimits::default(),
        );
        debug!("Opened checking account {} for tax id {}", number, tax_id);

        Ok(self.accounts.entry(number).or_insert(account))
    }

    /// Deposits into the numbered account; the attempt is recorded in
    /// its history whatever the outcome.
    pub fn deposit(&mut self, number: u32, amount: Money) -> Result<&Transaction> {
        let account = self
            .accounts
            .get_mut(&number)
            .ok_or(BankError::UnknownAccount { number })?;

        let tx = account.deposit(amount);
        match tx.reason() {
            None => debug!("Account {}: deposited {}", number, amount),
            Some(reason) => warn!("Account {}: deposit of {} refused ({:?})", number, amount, reason),
        }
        Ok(tx)
    }

    /// Withdraws from the numbered account; the attempt is recorded in
    /// its history whatever the outcome.
    pub fn withdraw(&mut self, number: u32, amount: Money) -> Result<&Transaction> {
        let account = self
            .accounts
            .get_mut(&number)
            .ok_or(BankError::UnknownAccount { number })?;

        let tx = account.withdraw(amount);
        match tx.reason() {
            None => debug!("Account {}: withdrew {}", number, amount),
            Some(reason) => warn!(
                "Account {}: withdrawal of {} refused ({:?})",
                number, amount, reason
            ),
        }
        Ok(tx)
    }

    /// The numbered account's rendered statement lines.
    pub fn statement(&self, number: u32) -> Result<impl Iterator<Item = String> + '_> {
        let account = self
            .accounts
            .get(&number)
            .ok_or(BankError::UnknownAccount { number })?;
        Ok(account.history().render())
    }

    /// Looks up a customer by tax id.
    pub fn find_customer(&self, tax_id: &TaxId) -> Option<&Customer> {
        self.customers.get(tax_id)
    }

    /// Looks up an account by number.
    pub fn account(&self, number: u32) -> Option<&Account> {
        self.accounts.get(&number)
    }

    /// Accounts held by the given customer, ascending by number.
    pub fn accounts_of(&self, tax_id: &TaxId) -> Vec<&Account> {
        self.accounts
            .values()
            .filter(|account| account.owner() == tax_id)
            .collect()
    }

    /// All accounts, ascending by number.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// `true` when at least one customer is registered.
    pub fn has_customers(&self) -> bool {
        !self.customers.is_empty()
    }

    /// `true` when at least one account exists.
    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}
