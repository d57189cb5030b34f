use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Chips;
use crate::engine::{BetError, LedgerError, SpinError};

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Сумма не подходит (отрицательная, нулевая там, где нужна положительная).
    #[error("Некорректная сумма: {0}")]
    InvalidAmount(String),

    /// Ставка на категорию, которой нет на колесе.
    #[error("Неизвестная категория ставки: {0}")]
    UnknownCategory(String),

    /// Не хватает баланса на ставку или вывод.
    #[error("Недостаточно средств: нужно {required}, доступно {available}")]
    InsufficientBalance { required: Chips, available: Chips },

    /// Колесо уже крутится.
    #[error("Колесо уже крутится")]
    SpinInProgress,
}

impl From<BetError> for ApiError {
    fn from(err: BetError) -> Self {
        match err {
            BetError::InvalidAmount(label) => ApiError::InvalidAmount(label),
            BetError::UnknownCategory(label) => ApiError::UnknownCategory(label),
            BetError::InsufficientBalance {
                required,
                available,
            } => ApiError::InsufficientBalance {
                required,
                available,
            },
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidAmount(amount) => ApiError::InvalidAmount(amount.to_string()),
            LedgerError::InsufficientBalance {
                required,
                available,
            } => ApiError::InsufficientBalance {
                required,
                available,
            },
        }
    }
}

impl From<SpinError> for ApiError {
    fn from(err: SpinError) -> Self {
        match err {
            SpinError::Bet(e) => e.into(),
            SpinError::SpinInProgress => ApiError::SpinInProgress,
        }
    }
}
