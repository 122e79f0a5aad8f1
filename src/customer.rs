//! Customers and their identifying data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A CPF normalized to its digits, the unique customer lookup key.
///
/// Construction strips every non-digit character, so formatted input like
/// `123.456.789-09` and the bare digit string compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaxId(String);

impl TaxId {
    /// Normalizes raw input into a tax id, keeping only ASCII digits.
    pub fn new(raw: &str) -> Self {
        TaxId(raw.chars().filter(char::is_ascii_digit).collect())
    }

    /// The normalized digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birth date, or the raw input when it does not parse.
///
/// Unparseable input is kept verbatim instead of being rejected, so a
/// registration never fails on a malformed date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BirthDate {
    /// A date that parsed in the `DD/MM/AAAA` format.
    Date(NaiveDate),

    /// The original input, preserved as typed.
    Raw(String),
}

impl BirthDate {
    /// The accepted input and display format.
    pub const FORMAT: &'static str = "%d/%m/%Y";

    /// Parses `DD/MM/AAAA` input, falling back to the raw string.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match NaiveDate::parse_from_str(trimmed, Self::FORMAT) {
            Ok(date) => BirthDate::Date(date),
            Err(_) => BirthDate::Raw(trimmed.to_string()),
        }
    }

    /// `true` when the input parsed as a calendar date.
    pub fn is_date(&self) -> bool {
        matches!(self, BirthDate::Date(_))
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BirthDate::Date(date) => write!(f, "{}", date.format(Self::FORMAT)),
            BirthDate::Raw(raw) => f.write_str(raw),
        }
    }
}

/// A bank customer.
///
/// Physical persons are the only variant today; the enum leaves room for
/// other holder kinds without touching the accounts that reference them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Customer {
    /// A physical person.
    Individual(Individual),
}

impl Customer {
    /// Creates a physical-person customer with no accounts.
    pub fn individual(
        name: impl Into<String>,
        birth_date: BirthDate,
        tax_id: TaxId,
        address: impl Into<String>,
    ) -> Self {
        Customer::Individual(Individual {
            name: name.into(),
            birth_date,
            tax_id,
            address: address.into(),
            accounts: BTreeSet::new(),
        })
    }

    /// Display name of the holder.
    pub fn name(&self) -> &str {
        match self {
            Customer::Individual(person) => &person.name,
        }
    }

    /// The unique lookup key.
    pub fn tax_id(&self) -> &TaxId {
        match self {
            Customer::Individual(person) => &person.tax_id,
        }
    }

    /// Birth date as registered (parsed or raw).
    pub fn birth_date(&self) -> &BirthDate {
        match self {
            Customer::Individual(person) => &person.birth_date,
        }
    }

    /// Registered address, free text.
    pub fn address(&self) -> &str {
        match self {
            Customer::Individual(person) => &person.address,
        }
    }

    /// Numbers of the accounts held by this customer, ascending.
    pub fn accounts(&self) -> impl Iterator<Item = u32> + '_ {
        match self {
            Customer::Individual(person) => person.accounts.iter().copied(),
        }
    }

    /// Associates an account number with this customer.
    ///
    /// Set semantics: linking an already-linked number is a no-op.
    pub fn link_account(&mut self, number: u32) {
        match self {
            Customer::Individual(person) => {
                person.accounts.insert(number);
            }
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - CPF: {}", self.name(), self.tax_id())
    }
}

/// The physical-person customer data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Individual {
    name: String,
    birth_date: BirthDate,
    tax_id: TaxId,
    address: String,
    accounts: BTreeSet<u32>,
}
