//! Interactive text menu driving a [`Bank`].
//!
//! Thin I/O glue over the core: it parses input, routes to the registry
//! and prints outcomes. The loop is generic over its input and output
//! streams so whole sessions can be scripted in tests; end of input ends
//! the session cleanly.

use crate::bank::Bank;
use crate::customer::{BirthDate, TaxId};
use crate::error::Result;
use crate::money::Money;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Runs the menu loop over the given streams until the user quits or
/// the input is exhausted.
pub fn run<R: BufRead, W: Write>(bank: &mut Bank, input: R, output: W) -> Result<()> {
    Menu {
        bank,
        input,
        output,
    }
    .run()
}

struct Menu<'a, R, W> {
    bank: &'a mut Bank,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(option) = self.prompt("Escolha uma opção: ")? else {
                break;
            };

            match option.as_str() {
                "1" => self.deposit()?,
                "2" => self.withdraw()?,
                "3" => self.statement()?,
                "4" => self.register_customer()?,
                "5" => self.open_checking()?,
                "6" => self.list_accounts()?,
                "7" => {
                    writeln!(self.output, "Obrigado por utilizar o sistema. Até logo!")?;
                    break;
                }
                _ => writeln!(self.output, "Opção inválida. Tente novamente.")?,
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{} MENU {}", "=".repeat(16), "=".repeat(16))?;
        writeln!(self.output, "1. Depositar")?;
        writeln!(self.output, "2. Sacar")?;
        writeln!(self.output, "3. Extrato")?;
        writeln!(self.output, "4. Cadastrar Usuário")?;
        writeln!(self.output, "5. Criar Conta Corrente")?;
        writeln!(self.output, "6. Listar Contas")?;
        writeln!(self.output, "7. Sair")?;
        Ok(())
    }

    /// Prints a prompt and reads one trimmed line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts for an amount; `None` on end of input or unparseable text.
    fn prompt_amount(&mut self, message: &str) -> Result<Option<Money>> {
        let Some(raw) = self.prompt(message)? else {
            return Ok(None);
        };
        match Money::from_str(&raw) {
            Ok(amount) => Ok(Some(amount)),
            Err(_) => {
                writeln!(self.output, "Valor inválido.")?;
                Ok(None)
            }
        }
    }

    /// Selects one of the customer's accounts by CPF, disambiguating by
    /// account number when there is more than one.
    fn select_account(&mut self) -> Result<Option<u32>> {
        let Some(raw_cpf) = self.prompt("Informe o CPF: ")? else {
            return Ok(None);
        };
        let tax_id = TaxId::new(&raw_cpf);

        let accounts: Vec<(u32, String)> = self
            .bank
            .accounts_of(&tax_id)
            .into_iter()
            .map(|account| (account.number(), account.branch().to_string()))
            .collect();

        match accounts.as_slice() {
            [] => {
                writeln!(self.output, "Nenhuma conta encontrada para o CPF informado.")?;
                Ok(None)
            }
            [(number, _)] => Ok(Some(*number)),
            _ => {
                writeln!(
                    self.output,
                    "Mais de uma conta encontrada para o CPF informado:"
                )?;
                for (number, branch) in &accounts {
                    writeln!(self.output, "Conta: {}, Agência: {}", number, branch)?;
                }

                let Some(raw) = self.prompt("Informe o número da conta desejada: ")? else {
                    return Ok(None);
                };
                let chosen = raw
                    .parse::<u32>()
                    .ok()
                    .filter(|n| accounts.iter().any(|(number, _)| number == n));
                if chosen.is_none() {
                    writeln!(self.output, "Conta não encontrada.")?;
                }
                Ok(chosen)
            }
        }
    }

    fn deposit(&mut self) -> Result<()> {
        if !self.bank.has_accounts() {
            writeln!(self.output, "Nenhuma conta criada. Crie uma conta primeiro.")?;
            return Ok(());
        }
        let Some(number) = self.select_account()? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Informe o valor do depósito: R$ ")? else {
            return Ok(());
        };

        if self.bank.deposit(number, amount)?.succeeded() {
            writeln!(
                self.output,
                "Depósito de R$ {} realizado com sucesso!",
                amount
            )?;
        } else {
            writeln!(self.output, "Operação falhou! Valor inválido.")?;
        }
        Ok(())
    }

    fn withdraw(&mut self) -> Result<()> {
        if !self.bank.has_accounts() {
            writeln!(self.output, "Nenhuma conta criada. Crie uma conta primeiro.")?;
            return Ok(());
        }
        let Some(number) = self.select_account()? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Informe o valor do saque: R$ ")? else {
            return Ok(());
        };

        if self.bank.withdraw(number, amount)?.succeeded() {
            writeln!(self.output, "Saque de R$ {} realizado com sucesso!", amount)?;
        } else {
            writeln!(self.output, "Operação de saque falhou.")?;
        }
        Ok(())
    }

    fn statement(&mut self) -> Result<()> {
        if !self.bank.has_accounts() {
            writeln!(self.output, "Nenhuma conta criada. Crie uma conta primeiro.")?;
            return Ok(());
        }
        let Some(number) = self.select_account()? else {
            return Ok(());
        };

        for line in self.bank.statement(number)? {
            writeln!(self.output, "{line}")?;
        }
        if let Some(account) = self.bank.account(number) {
            writeln!(self.output, "Saldo: R$ {}", account.balance())?;
        }
        Ok(())
    }

    fn register_customer(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\n{} Cadastro de Usuário (Cliente/Pessoa Física) {}",
            "=".repeat(16),
            "=".repeat(16)
        )?;
        let Some(raw_cpf) = self.prompt("CPF (apenas números serão armazenados): ")? else {
            return Ok(());
        };
        let tax_id = TaxId::new(&raw_cpf);

        if let Some(existing) = self.bank.find_customer(&tax_id) {
            let name = existing.name().to_string();
            writeln!(
                self.output,
                "Aviso: CPF encontrado. Usuário vinculado à conta existente."
            )?;
            writeln!(self.output, "Usuário {} cadastrado/selecionado.", name)?;
            return Ok(());
        }

        let Some(name) = self.prompt("Nome: ")? else {
            return Ok(());
        };
        let Some(raw_date) = self.prompt("Data de Nascimento (DD/MM/AAAA): ")? else {
            return Ok(());
        };
        let birth_date = BirthDate::parse(&raw_date);
        if !birth_date.is_date() {
            writeln!(
                self.output,
                "Data de nascimento inválida. Usando string original."
            )?;
        }
        let Some(address) =
            self.prompt("Endereço (formato: logradouro, nro, bairro, cidade/sigla estado): ")?
        else {
            return Ok(());
        };

        self.bank
            .register_customer(&name, birth_date, &raw_cpf, &address);
        writeln!(self.output, "Usuário cadastrado com sucesso!")?;
        writeln!(self.output, "Usuário {} cadastrado/selecionado.", name)?;
        Ok(())
    }

    fn open_checking(&mut self) -> Result<()> {
        if !self.bank.has_customers() {
            writeln!(
                self.output,
                "Nenhum usuário cadastrado. Cadastre um usuário primeiro."
            )?;
            return Ok(());
        }
        let Some(raw_cpf) = self.prompt("Informe o CPF para selecionar o usuário: ")? else {
            return Ok(());
        };
        let tax_id = TaxId::new(&raw_cpf);

        if self.bank.find_customer(&tax_id).is_none() {
            writeln!(
                self.output,
                "Usuário não encontrado. Cadastre um usuário primeiro."
            )?;
            return Ok(());
        }

        self.bank.open_checking(&tax_id)?;
        writeln!(self.output, "Conta corrente criada com sucesso!")?;
        Ok(())
    }

    fn list_accounts(&mut self) -> Result<()> {
        if !self.bank.has_accounts() {
            writeln!(self.output, "Nenhuma conta cadastrada.")?;
            return Ok(());
        }

        for account in self.bank.accounts() {
            let holder = self
                .bank
                .find_customer(account.owner())
                .map(|customer| customer.name())
                .unwrap_or("desconhecido");
            writeln!(self.output, "Agência: {}", account.branch())?;
            writeln!(self.output, "Conta: {}", account.number())?;
            writeln!(self.output, "Titular: {}", holder)?;
            writeln!(self.output, "{}", "=".repeat(72))?;
        }
        Ok(())
    }
}
