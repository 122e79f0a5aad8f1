//! Behavior tests for the ledger core through the library API.
//!
//! Exercises the bookkeeping invariants and the account-type rule chains
//! end to end, without the menu layer.

use banco::{
    Account, AccountKind, Bank, BankError, BirthDate, CheckingLimits, FailureReason, Money, TaxId,
    TxKind, DEFAULT_BRANCH,
};
use std::str::FromStr;

fn money(s: &str) -> Money {
    Money::from_str(s).unwrap()
}

fn standard_account() -> Account {
    Account::open(TaxId::new("11144477735"), 1, DEFAULT_BRANCH)
}

fn checking_account() -> Account {
    Account::open_checking(
        TaxId::new("11144477735"),
        1,
        DEFAULT_BRANCH,
        CheckingLimits::default(),
    )
}

/// Recomputes the balance from the history: successful deposits minus
/// successful withdrawals.
fn replayed_balance(account: &Account) -> Money {
    let mut balance = Money::ZERO;
    for tx in account.history().iter().filter(|tx| tx.succeeded()) {
        match tx.kind() {
            TxKind::Deposit => balance += tx.amount(),
            TxKind::Withdrawal => balance -= tx.amount(),
        }
    }
    balance
}

// ==================== OPERATION SCENARIOS ====================

#[test]
fn test_scenario_a_simple_deposit() {
    let mut account = standard_account();

    let tx = account.deposit(money("100.00"));
    assert!(tx.succeeded());
    assert_eq!(account.balance().to_string(), "100.00");
    assert_eq!(account.history().len(), 1);
    assert_eq!(
        account.history().last().unwrap().to_string(),
        "Depósito: R$ 100.00"
    );
}

#[test]
fn test_scenario_b_withdrawal_over_balance() {
    let mut account = standard_account();
    account.deposit(money("50.00"));

    let tx = account.withdraw(money("100.00"));
    assert!(!tx.succeeded());
    assert_eq!(tx.reason(), Some(FailureReason::InsufficientBalance));
    assert_eq!(account.balance().to_string(), "50.00");
    assert!(account
        .history()
        .last()
        .unwrap()
        .to_string()
        .contains("saldo insuficiente"));
}

#[test]
fn test_scenario_c_withdrawal_over_ceiling() {
    let mut account = checking_account();
    account.deposit(money("1000.00"));

    let tx = account.withdraw(money("600.00"));
    assert!(!tx.succeeded());
    assert_eq!(account.balance().to_string(), "1000.00");
    assert_eq!(
        account.history().last().unwrap().to_string(),
        "Saque falhado: valor acima do limite de R$ 500.00 para R$ 600.00"
    );
}

#[test]
fn test_scenario_d_withdrawal_count_exhausted() {
    let mut account = checking_account();
    account.deposit(money("30.00"));

    for _ in 0..3 {
        assert!(account.withdraw(money("10.00")).succeeded());
    }

    let tx = account.withdraw(money("10.00"));
    assert!(!tx.succeeded());
    assert_eq!(tx.reason(), Some(FailureReason::DailyLimitReached));
    match account.kind() {
        AccountKind::Checking(limits) => assert_eq!(limits.withdrawals_used(), 3),
        AccountKind::Standard => unreachable!(),
    }
    assert!(account
        .history()
        .last()
        .unwrap()
        .to_string()
        .contains("limite diário atingido"));
}

#[test]
fn test_scenario_e_negative_deposit() {
    let mut account = standard_account();

    let tx = account.deposit(money("-5.00"));
    assert!(!tx.succeeded());
    assert_eq!(tx.reason(), Some(FailureReason::InvalidAmount));
    assert_eq!(account.balance(), Money::ZERO);
    assert_eq!(account.history().len(), 1);
}

// ==================== INVARIANTS ====================

#[test]
fn test_balance_always_replayable_from_history() {
    let mut account = checking_account();
    let amounts = [
        "100.00", "-1.00", "0", "250.50", "30.00", "600.00", "10.00", "10.00", "10.00", "10.00",
    ];

    for (i, raw) in amounts.iter().enumerate() {
        if i % 2 == 0 {
            account.deposit(money(raw));
        } else {
            account.withdraw(money(raw));
        }
        assert_eq!(account.balance(), replayed_balance(&account));
        assert!(account.balance() >= Money::ZERO);
    }
}

#[test]
fn test_balance_never_negative_for_standard_account() {
    let mut account = standard_account();
    account.deposit(money("10.00"));

    account.withdraw(money("10.01"));
    account.withdraw(money("1000.00"));
    assert_eq!(account.balance().to_string(), "10.00");
    assert!(account.balance() >= Money::ZERO);
}

#[test]
fn test_withdrawals_used_never_exceeds_cap() {
    let mut account = checking_account();
    account.deposit(money("1000.00"));

    for _ in 0..10 {
        account.withdraw(money("1.00"));
        match account.kind() {
            AccountKind::Checking(limits) => {
                assert!(limits.withdrawals_used() <= limits.max_withdrawals());
            }
            AccountKind::Standard => unreachable!(),
        }
    }
}

#[test]
fn test_failed_attempts_do_not_consume_withdrawal_allowance() {
    let mut account = checking_account();
    account.deposit(money("100.00"));

    account.withdraw(money("600.00"));
    account.withdraw(money("-1.00"));
    account.withdraw(money("500.00"));

    match account.kind() {
        AccountKind::Checking(limits) => assert_eq!(limits.withdrawals_used(), 0),
        AccountKind::Standard => unreachable!(),
    }
}

#[test]
fn test_every_attempt_is_recorded() {
    let mut account = checking_account();

    account.deposit(money("10.00"));
    account.deposit(money("0"));
    account.withdraw(money("5.00"));
    account.withdraw(money("500.00"));
    account.withdraw(money("-2.00"));

    assert_eq!(account.history().len(), 5);
}

#[test]
fn test_reads_are_idempotent() {
    let mut account = standard_account();
    account.deposit(money("42.00"));

    assert_eq!(account.balance(), account.balance());
    let first: Vec<String> = account.history().render().collect();
    let second: Vec<String> = account.history().render().collect();
    assert_eq!(first, second);
}

// ==================== STATEMENT RENDERING ====================

#[test]
fn test_statement_shape() {
    let mut account = standard_account();
    account.deposit(money("100.00"));
    account.withdraw(money("200.00"));

    let lines: Vec<String> = account.history().render().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "================================ Extrato ================================"
    );
    assert_eq!(lines[1], "Depósito: R$ 100.00");
    assert_eq!(
        lines[2],
        "Saque falhado: saldo insuficiente para R$ 200.00"
    );
    assert_eq!(lines[3], "=".repeat(71));
}

#[test]
fn test_statement_of_untouched_account() {
    let account = standard_account();
    let lines: Vec<String> = account.history().render().collect();
    assert_eq!(lines[1], "Nenhuma transação realizada.");
}

// ==================== REGISTRY ====================

#[test]
fn test_full_registry_flow() {
    let mut bank = Bank::new();
    let registration = bank.register_customer(
        "Ana Lima",
        BirthDate::parse("05/06/1992"),
        "111.444.777-35",
        "Rua das Flores, 10, Centro, Recife/PE",
    );
    assert!(registration.created);

    let tax_id = TaxId::new("11144477735");
    let number = bank.open_checking(&tax_id).unwrap().number();
    assert_eq!(number, 1);

    assert!(bank.deposit(number, money("200.00")).unwrap().succeeded());
    assert!(bank.withdraw(number, money("50.00")).unwrap().succeeded());
    assert!(!bank.withdraw(number, money("600.00")).unwrap().succeeded());

    let account = bank.account(number).unwrap();
    assert_eq!(account.balance().to_string(), "150.00");
    assert_eq!(account.history().len(), 3);
    assert_eq!(account.owner(), &tax_id);
}

#[test]
fn test_registry_rejects_unknown_lookups() {
    let mut bank = Bank::new();

    assert!(matches!(
        bank.open_checking(&TaxId::new("123")).unwrap_err(),
        BankError::UnknownCustomer { .. }
    ));
    assert!(matches!(
        bank.deposit(1, money("1.00")).unwrap_err(),
        BankError::UnknownAccount { number: 1 }
    ));
}

#[test]
fn test_account_numbers_are_unique_across_customers() {
    let mut bank = Bank::new();
    bank.register_customer("A", BirthDate::parse("01/01/1990"), "111", "end. A");
    bank.register_customer("B", BirthDate::parse("02/02/1991"), "222", "end. B");

    let mut numbers = Vec::new();
    for cpf in ["111", "222", "111", "222"] {
        numbers.push(bank.open_checking(&TaxId::new(cpf)).unwrap().number());
    }
    numbers.sort_unstable();
    numbers.dedup();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
}
