// src/bin/big_six_sim.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use big_six_wheel::domain::{Chips, WheelLayout};
use big_six_wheel::engine::{Ledger, OutcomeSelector, Wagers};
use big_six_wheel::infra::{init_logging, DeterministicRng};

fn main() {
    init_logging();

    println!("big_six_sim: стартуем симуляцию колеса…");

    // Параметры нагрузки, можно смело крутить.
    const SEED: u64 = 0xB16_5;
    const DRAWS: usize = 100_000; // чистые выборы сектора (частоты)
    const SPINS: usize = 20_000; // спины через леджер (возврат по категориям)
    const STAKE_PER_CATEGORY: i64 = 1;

    let layout = WheelLayout::standard();
    let n = layout.len();

    // 1. Частоты по секторам: должны быть ~1/N каждая.
    let mut selector =
        OutcomeSelector::new(Arc::new(layout.clone()), DeterministicRng::from_seed(SEED));
    let mut hits = vec![0usize; n];
    for _ in 0..DRAWS {
        hits[selector.draw().position()] += 1;
    }

    let expected = DRAWS as f64 / n as f64;
    let max_dev = hits
        .iter()
        .map(|&h| (h as f64 - expected).abs() / expected)
        .fold(0.0_f64, f64::max);

    println!(
        "[SIM] {} выборов по {} секторам: ожидание {:.1} на сектор, макс. отклонение {:.2}%",
        DRAWS,
        n,
        expected,
        max_dev * 100.0
    );

    // 2. Спины через леджер: по 1 фишке на каждую категорию.
    let wagers: Wagers = layout
        .categories()
        .iter()
        .map(|c| (c.name.clone(), STAKE_PER_CATEGORY))
        .collect();

    let per_spin = STAKE_PER_CATEGORY as u64 * layout.categories().len() as u64;
    let bankroll = Chips(per_spin * SPINS as u64);
    let ledger = Ledger::new(layout.clone(), DeterministicRng::from_seed(SEED + 1), bankroll);

    let mut returned: BTreeMap<String, u64> = BTreeMap::new();
    let mut staked: BTreeMap<String, u64> = BTreeMap::new();

    for _ in 0..SPINS {
        let record = match ledger.spin(&wagers) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("[SIM] ОШИБКА в spin: {e}");
                break;
            }
        };
        for line in &record.settlement.lines {
            *staked.entry(line.label.clone()).or_default() += line.staked.0;
            *returned.entry(line.label.clone()).or_default() += line.returned.0;
        }
    }

    println!();
    println!(
        "{:<10} {:>6} {:>10} {:>10} {:>10}",
        "категория", "x", "теория", "факт", "edge"
    );
    for c in layout.categories() {
        let theory = layout.expected_return(&c.name).unwrap_or(0.0);
        let s = staked.get(&c.name).copied().unwrap_or(0);
        let r = returned.get(&c.name).copied().unwrap_or(0);
        let actual = if s == 0 { 0.0 } else { r as f64 / s as f64 };
        println!(
            "{:<10} {:>6} {:>10.4} {:>10.4} {:>9.2}%",
            c.name,
            c.multiplier,
            theory,
            actual,
            (1.0 - theory) * 100.0
        );
    }

    println!();
    println!(
        "[SIM] Сыграно спинов: {}, стартовый баланс {}, итоговый {}",
        ledger.spins_played(),
        bankroll,
        ledger.balance()
    );
    println!("big_six_sim: готово.");
}
