use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::wheel::WheelLayout;
use crate::engine::{HistoryRecord, Ledger, RandomSource};

use super::dto::{CategoryDto, HistoryRecordDto, LabelAmountDto, SegmentDto, WheelViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Текущий баланс.
    Balance,

    /// Вся история спинов по порядку.
    History,

    /// Раскладка колеса и таблица выплат.
    Wheel,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Balance(Chips),
    History(Vec<HistoryRecordDto>),
    Wheel(WheelViewDto),
}

/// Выполнить запрос над леджером.
pub fn query<R: RandomSource>(ledger: &Ledger<R>, query: Query) -> QueryResponse {
    match query {
        Query::Balance => QueryResponse::Balance(ledger.balance()),
        Query::History => QueryResponse::History(
            ledger.history().iter().map(build_history_item).collect(),
        ),
        Query::Wheel => QueryResponse::Wheel(build_wheel_view(ledger.layout())),
    }
}

/// Сформировать DTO колеса. Цвет сектора берём из его категории.
pub fn build_wheel_view(layout: &WheelLayout) -> WheelViewDto {
    let segments = layout
        .segments()
        .iter()
        .map(|s| SegmentDto {
            position: s.position,
            label: s.label.clone(),
            color: layout
                .category(&s.label)
                .map(|c| c.color.clone())
                .unwrap_or_default(),
        })
        .collect();

    let categories = layout
        .categories()
        .iter()
        .map(|c| CategoryDto {
            name: c.name.clone(),
            multiplier: c.multiplier,
            member_count: c.member_count,
            color: c.color.clone(),
            win_probability: c.win_probability(layout.len()),
            expected_return: layout.expected_return(&c.name).unwrap_or(0.0),
        })
        .collect();

    WheelViewDto {
        segment_count: layout.len(),
        segments,
        categories,
    }
}

/// Плоское представление записи истории.
pub fn build_history_item(record: &HistoryRecord) -> HistoryRecordDto {
    let bets = record
        .bets
        .iter()
        .map(|b| LabelAmountDto {
            label: b.label.clone(),
            amount: b.stake,
        })
        .collect();

    let won = record
        .settlement
        .winning_lines()
        .map(|l| LabelAmountDto {
            label: l.label.clone(),
            amount: l.net_win(),
        })
        .collect();

    let lost = record
        .settlement
        .losing_lines()
        .map(|l| LabelAmountDto {
            label: l.label.clone(),
            amount: l.staked,
        })
        .collect();

    HistoryRecordDto {
        seq: record.seq,
        bets,
        outcome_label: record.outcome.label.clone(),
        outcome_position: record.outcome.position,
        won,
        lost,
        total_staked: record.settlement.total_staked,
        total_returned: record.settlement.total_returned,
        net_delta: record.settlement.total_delta,
        balance_after: record.balance_after,
    }
}
