use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::segment::Segment;
use crate::domain::SpinSeq;
use crate::engine::bet_slip::BetLine;
use crate::engine::settlement::SettlementResult;

/// Запись истории о завершённом спине.
///
/// Создаётся ровно один раз на спин и больше не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryRecord {
    /// Номер спина, с 1, без пропусков.
    pub seq: SpinSeq,
    /// Снимок купона (только ставки > 0).
    pub bets: Vec<BetLine>,
    /// Выпавший сектор: метка + позиция (позиция нужна анимации).
    pub outcome: Segment,
    pub settlement: SettlementResult,
    /// Баланс после зачисления выигрыша.
    pub balance_after: Chips,
}

impl HistoryRecord {
    pub fn outcome_label(&self) -> &str {
        &self.outcome.label
    }

    pub fn net_delta(&self) -> i64 {
        self.settlement.total_delta
    }
}
