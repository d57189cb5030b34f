use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::chips::Chips;
use crate::domain::wheel::WheelLayout;
use crate::engine::errors::BetError;

/// Сырые ставки из UI: метка → сумма.
/// Сумма знаковая, чтобы отрицательный ввод дошёл до валидации и был отвергнут.
pub type Wagers = BTreeMap<String, i64>;

/// Одна строка купона: ставка на категорию.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetLine {
    pub label: String,
    pub stake: Chips,
    /// Множитель категории на момент валидации.
    pub multiplier: u32,
}

impl BetLine {
    /// Полный возврат при выигрыше: ставка плюс `stake * multiplier`.
    /// `None`, если не помещается в `u64`.
    pub fn payout(&self) -> Option<Chips> {
        self.stake
            .checked_times(self.multiplier)
            .and_then(|win| win.checked_add(self.stake))
    }
}

/// Проверенный купон на один спин.
///
/// Содержит только строки со ставкой > 0, в порядке категорий колеса.
/// Пустой купон допустим: "бесплатный" спин без выигрыша и проигрыша.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetSlip {
    lines: Vec<BetLine>,
}

impl BetSlip {
    /// Проверка ставок против баланса.
    ///
    /// Правила применяются по порядку, каждое даёт отдельную ошибку:
    ///   1. сумма < 0 → `InvalidAmount`;
    ///   2. метки нет в таблице выплат → `UnknownCategory`;
    ///   3. сумма ставок > баланса → `InsufficientBalance`;
    ///   4. выигрыш строки не помещается в баланс → `InvalidAmount`.
    ///
    /// Исход у спина один, поэтому выигрывает не больше одной строки:
    /// после четвёртого правила зачисление в `spin` не переполняется.
    pub fn validate(
        wagers: &Wagers,
        layout: &WheelLayout,
        balance: Chips,
    ) -> Result<BetSlip, BetError> {
        if let Some((label, amount)) = wagers.iter().find(|(_, amount)| **amount < 0) {
            debug!(label = %label, amount, "rejected wager: negative amount");
            return Err(BetError::InvalidAmount(label.clone()));
        }

        if let Some(label) = wagers.keys().find(|label| !layout.has_category(label)) {
            debug!(label = %label, "rejected wager: unknown category");
            return Err(BetError::UnknownCategory(label.clone()));
        }

        // Суммируем в u128: отдельные ставки влезают в i64, но их сумма может не влезть.
        let total: u128 = wagers.values().map(|a| *a as u128).sum();
        if total > u128::from(balance.0) {
            let required = Chips(u64::try_from(total).unwrap_or(u64::MAX));
            debug!(%required, available = %balance, "rejected wagers: insufficient balance");
            return Err(BetError::InsufficientBalance {
                required,
                available: balance,
            });
        }

        let lines: Vec<BetLine> = layout
            .categories()
            .iter()
            .filter_map(|category| {
                let amount = *wagers.get(&category.name)?;
                if amount == 0 {
                    return None;
                }
                Some(BetLine {
                    label: category.name.clone(),
                    stake: Chips(amount as u64),
                    multiplier: category.multiplier,
                })
            })
            .collect();

        // total <= balance уже проверено выше.
        let after_debit = Chips(balance.0 - total as u64);
        if let Some(line) = lines
            .iter()
            .find(|line| line.payout().and_then(|p| after_debit.checked_add(p)).is_none())
        {
            debug!(label = %line.label, stake = %line.stake, "rejected wager: payout overflows balance");
            return Err(BetError::InvalidAmount(line.label.clone()));
        }

        Ok(BetSlip { lines })
    }

    pub fn lines(&self) -> &[BetLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Суммарная ставка по купону.
    pub fn total_stake(&self) -> Chips {
        self.lines.iter().map(|l| l.stake).sum()
    }

    pub fn stake_on(&self, label: &str) -> Chips {
        self.lines
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.stake)
            .unwrap_or(Chips::ZERO)
    }
}
