//! Движок спина и расчёта колеса Big Six.
//!
//! Высокоуровневый объект: `Ledger`
//! Основные операции:
//!   - `BetSlip::validate` – проверка ставок против баланса
//!   - `OutcomeSelector::draw` – равномерный выбор сектора
//!   - `settle` – чистый расчёт выплат
//!   - `Ledger::spin` – весь цикл как одна транзакция

pub mod animation;
pub mod bet_slip;
pub mod errors;
pub mod history;
pub mod ledger;
pub mod selector;
pub mod settlement;

pub use animation::{AnimationFrame, SpinAnimation};
pub use bet_slip::{BetLine, BetSlip, Wagers};
pub use errors::{BetError, LedgerError, SpinError, WheelError};
pub use history::HistoryRecord;
pub use ledger::Ledger;
pub use selector::{OutcomeSelector, SpinOutcome};
pub use settlement::{settle, SettlementLine, SettlementResult};

/// RNG интерфейс для движка.
/// Реализации лежат в infra (обёртки над `rand`); в тестах можно подставить свою.
pub trait RandomSource {
    /// Равномерно выбрать индекс из `[0, upper)`. Вызывается только с `upper > 0`.
    fn pick_index(&mut self, upper: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick_index(&mut self, upper: usize) -> usize {
        (**self).pick_index(upper)
    }
}
