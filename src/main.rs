//! Banco CLI
//!
//! An interactive, in-memory retail-banking ledger: register customers,
//! open checking accounts, deposit, withdraw and print statements from a
//! numbered text menu.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use banco::{menu, Bank, Result};
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut bank = Bank::new();
    menu::run(&mut bank, stdin.lock(), stdout.lock())
}
