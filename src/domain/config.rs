use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;

/// Стартовый баланс сессии по умолчанию.
pub const DEFAULT_INITIAL_BALANCE: Chips = Chips(100);

/// Сколько полных оборотов делает анимация до остановки.
pub const DEFAULT_SPIN_ROUNDS: u32 = 3;

/// Ошибки загрузки конфигурации сессии.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("Некорректный JSON конфига: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Недопустимое значение в конфиге: {0}")]
    Invalid(&'static str),
}

/// Параметры игровой сессии.
///
/// Таблица выплат сюда намеренно не входит: она фиксирована.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Баланс на старте.
    pub initial_balance: Chips,
    /// Seed для воспроизводимых сессий. `None`: системный RNG.
    pub rng_seed: Option<u64>,
    /// Полных оборотов в анимации (только для отображения).
    pub spin_rounds: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_balance: DEFAULT_INITIAL_BALANCE,
            rng_seed: None,
            spin_rounds: DEFAULT_SPIN_ROUNDS,
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let cfg: SessionConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spin_rounds == 0 {
            return Err(ConfigError::Invalid("spin_rounds должен быть >= 1"));
        }
        Ok(())
    }
}
