use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::SpinSeq;

/// DTO сектора (для отрисовки колеса).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SegmentDto {
    pub position: usize,
    pub label: String,
    pub color: String,
}

/// DTO категории ставки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryDto {
    pub name: String,
    pub multiplier: u32,
    /// Сколько секторов на колесе несут эту метку.
    pub member_count: usize,
    pub color: String,
    pub win_probability: f64,
    /// Ожидаемый возврат на 1 фишку ставки.
    pub expected_return: f64,
}

/// DTO колеса целиком.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WheelViewDto {
    pub segment_count: usize,
    pub segments: Vec<SegmentDto>,
    pub categories: Vec<CategoryDto>,
}

/// Сумма по категории (ставка, выигрыш или проигрыш).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelAmountDto {
    pub label: String,
    pub amount: Chips,
}

/// DTO одной записи истории, плоское представление для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryRecordDto {
    pub seq: SpinSeq,
    pub bets: Vec<LabelAmountDto>,
    pub outcome_label: String,
    pub outcome_position: usize,
    /// Выигравшие строки: чистый выигрыш (stake * multiplier).
    pub won: Vec<LabelAmountDto>,
    /// Проигравшие строки: потерянная ставка.
    pub lost: Vec<LabelAmountDto>,
    pub total_staked: Chips,
    pub total_returned: Chips,
    pub net_delta: i64,
    pub balance_after: Chips,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Баланс изменился (депозит / вывод).
    BalanceChanged { balance: Chips },

    /// Спин завершён.
    Spun(HistoryRecordDto),
}
