use crate::domain::Chips;

use thiserror::Error;

pub use crate::domain::wheel::WheelError;

/// Ошибки валидации ставок на один спин.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BetError {
    #[error("Некорректная сумма ставки на {0}")]
    InvalidAmount(String),

    #[error("Неизвестная категория ставки: {0}")]
    UnknownCategory(String),

    #[error("Недостаточно средств: нужно {required}, доступно {available}")]
    InsufficientBalance { required: Chips, available: Chips },
}

/// Ошибки операций с балансом (депозит / вывод).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Некорректная сумма: {0}")]
    InvalidAmount(i64),

    #[error("Недостаточно средств: нужно {required}, доступно {available}")]
    InsufficientBalance { required: Chips, available: Chips },
}

/// Ошибки спина.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SpinError {
    #[error(transparent)]
    Bet(#[from] BetError),

    #[error("Колесо уже крутится")]
    SpinInProgress,
}
