use serde::{Deserialize, Serialize};

use crate::engine::{Ledger, RandomSource, Wagers};

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_history_item;

/// Команда верхнего уровня: всё, что меняет состояние леджера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Пополнить баланс.
    Deposit(DepositCommand),

    /// Вывести с баланса.
    Withdraw(WithdrawCommand),

    /// Сделать ставки и крутить колесо.
    Spin(SpinCommand),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepositCommand {
    pub amount: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WithdrawCommand {
    pub amount: i64,
}

/// Спин с набором ставок: метка → сумма.
/// Пустой набор означает бесплатный спин.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpinCommand {
    #[serde(default)]
    pub wagers: Wagers,
}

/// Выполнить команду над леджером.
pub fn execute<R: RandomSource>(
    ledger: &Ledger<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::Deposit(cmd) => {
            ledger.deposit(cmd.amount)?;
            Ok(CommandResponse::BalanceChanged {
                balance: ledger.balance(),
            })
        }
        Command::Withdraw(cmd) => {
            ledger.withdraw(cmd.amount)?;
            Ok(CommandResponse::BalanceChanged {
                balance: ledger.balance(),
            })
        }
        Command::Spin(cmd) => {
            let record = ledger.spin(&cmd.wagers)?;
            Ok(CommandResponse::Spun(build_history_item(&record)))
        }
    }
}
