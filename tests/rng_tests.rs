//! RNG tests for big-six-wheel
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - равномерность выбора по физическим секторам (не по меткам)
//! - ScriptedRng и границы индексов
//! - SessionRng по конфигу

use std::sync::Arc;

use big_six_wheel::domain::WheelLayout;
use big_six_wheel::engine::{OutcomeSelector, RandomSource};
use big_six_wheel::infra::{DeterministicRng, ScriptedRng, SessionRng, SystemRng};

fn standard_selector<R: RandomSource>(rng: R) -> OutcomeSelector<R> {
    OutcomeSelector::new(Arc::new(WheelLayout::standard()), rng)
}

//
// TEST 1 — одинаковый seed → одинаковые исходы
//
#[test]
fn deterministic_rng_same_seed_same_outcomes() {
    let mut a = standard_selector(DeterministicRng::from_seed(123));
    let mut b = standard_selector(DeterministicRng::from_seed(123));

    let xs: Vec<usize> = (0..200).map(|_| a.draw().position()).collect();
    let ys: Vec<usize> = (0..200).map(|_| b.draw().position()).collect();

    assert_eq!(xs, ys, "Same seed must produce identical outcomes");
}

//
// TEST 2 — разные seed → разные последовательности
//
#[test]
fn deterministic_rng_different_seeds_differ() {
    let mut a = standard_selector(DeterministicRng::from_seed(111));
    let mut b = standard_selector(DeterministicRng::from_seed(222));

    let xs: Vec<usize> = (0..200).map(|_| a.draw().position()).collect();
    let ys: Vec<usize> = (0..200).map(|_| b.draw().position()).collect();

    assert_ne!(xs, ys, "Different seeds must produce different outcomes");
}

//
// TEST 3 — 100k выборов: каждый сектор ~1/N
//
#[test]
fn draw_is_uniform_over_physical_segments() {
    const TRIALS: usize = 100_000;

    let mut selector = standard_selector(DeterministicRng::from_seed(2024));
    let n = selector.layout().len();
    let mut hits = vec![0usize; n];

    for _ in 0..TRIALS {
        let outcome = selector.draw();
        assert!(outcome.position() < n);
        assert_eq!(
            selector.layout().segments()[outcome.position()].label,
            outcome.label()
        );
        hits[outcome.position()] += 1;
    }

    // Ожидание ~1852 на сектор, sigma ~42. Допуск 15% ≈ 6.5 sigma.
    let expected = TRIALS as f64 / n as f64;
    for (i, &h) in hits.iter().enumerate() {
        let dev = (h as f64 - expected).abs() / expected;
        assert!(dev < 0.15, "segment {} hit {} times, expected ~{:.0}", i, h, expected);
    }
}

//
// TEST 4 — частота метки пропорциональна числу её секторов
//
#[test]
fn label_frequency_follows_member_count() {
    const TRIALS: usize = 100_000;

    let mut selector = standard_selector(DeterministicRng::from_seed(7));
    let mut ones = 0usize;
    let mut fifties = 0usize;

    for _ in 0..TRIALS {
        match selector.draw().label() {
            "1" => ones += 1,
            "50 Joker" | "50 Flag" => fifties += 1,
            _ => {}
        }
    }

    let p_one = ones as f64 / TRIALS as f64;
    let p_fifty = fifties as f64 / TRIALS as f64;

    assert!((p_one - 26.0 / 54.0).abs() < 0.01, "p(1) = {}", p_one);
    assert!((p_fifty - 2.0 / 54.0).abs() < 0.005, "p(50s) = {}", p_fifty);
}

//
// TEST 5 — ScriptedRng идёт по кругу и считает обращения
//
#[test]
fn scripted_rng_cycles_through_script() {
    let mut rng = ScriptedRng::new(vec![0, 26, 53]);

    assert_eq!(rng.pick_index(54), 0);
    assert_eq!(rng.pick_index(54), 26);
    assert_eq!(rng.pick_index(54), 53);
    assert_eq!(rng.pick_index(54), 0);
    assert_eq!(rng.draws(), 4);

    // Индекс за границей заворачивается.
    let mut rng = ScriptedRng::new(vec![60]);
    assert_eq!(rng.pick_index(54), 6);
}

//
// TEST 6 — системный RNG всегда в пределах
//
#[test]
fn system_rng_stays_in_range() {
    let mut rng = SystemRng;
    for _ in 0..10_000 {
        assert!(rng.pick_index(54) < 54);
    }
    assert_eq!(rng.pick_index(1), 0);
}

//
// TEST 7 — SessionRng::seeded ведёт себя как DeterministicRng с тем же seed
//
#[test]
fn session_rng_seeded_matches_deterministic() {
    let mut a = SessionRng::seeded(99);
    let mut b = DeterministicRng::from_seed(99);

    for _ in 0..100 {
        assert_eq!(a.pick_index(54), b.pick_index(54));
    }

    let mut sys = SessionRng::system();
    assert!(sys.pick_index(54) < 54);
}
