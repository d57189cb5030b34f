use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::bet_slip::BetSlip;
use crate::engine::selector::SpinOutcome;

/// Результат расчёта одной строки купона.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementLine {
    pub label: String,
    pub staked: Chips,
    /// Сколько возвращается на баланс: 0 при проигрыше,
    /// stake + stake * multiplier при выигрыше.
    pub returned: Chips,
}

impl SettlementLine {
    pub fn is_win(&self) -> bool {
        !self.returned.is_zero()
    }

    /// Чистый выигрыш строки (без возврата самой ставки).
    pub fn net_win(&self) -> Chips {
        self.returned.saturating_sub(self.staked)
    }
}

/// Итог расчёта спина.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementResult {
    pub lines: Vec<SettlementLine>,
    /// Сумма всех возвратов (то, что зачисляется после спина).
    pub total_returned: Chips,
    /// Сумма всех ставок (уже списана до выбора исхода).
    pub total_staked: Chips,
    /// Чистое изменение баланса за спин: total_returned - total_staked.
    pub total_delta: i64,
}

impl SettlementResult {
    pub fn winning_lines(&self) -> impl Iterator<Item = &SettlementLine> {
        self.lines.iter().filter(|l| l.is_win())
    }

    pub fn losing_lines(&self) -> impl Iterator<Item = &SettlementLine> {
        self.lines.iter().filter(|l| !l.is_win())
    }
}

/// Расчёт купона по исходу.
///
/// Чистая функция: без RNG, без I/O, без внешнего состояния.
/// Каждая строка считается независимо.
pub fn settle(slip: &BetSlip, outcome: &SpinOutcome) -> SettlementResult {
    let mut lines = Vec::with_capacity(slip.lines().len());
    let mut total_returned = Chips::ZERO;
    let mut total_staked = Chips::ZERO;

    for bet in slip.lines() {
        let returned = if bet.label == outcome.label() {
            bet.stake + bet.stake.times(bet.multiplier)
        } else {
            Chips::ZERO
        };

        total_returned += returned;
        total_staked += bet.stake;

        lines.push(SettlementLine {
            label: bet.label.clone(),
            staked: bet.stake,
            returned,
        });
    }

    SettlementResult {
        lines,
        total_returned,
        total_staked,
        total_delta: total_returned.signed_diff(total_staked),
    }
}
