//! Тесты леджера: баланс, история, атомарность спина, защита от повторного входа.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use big_six_wheel::domain::{Chips, SessionConfig, WheelLayout};
use big_six_wheel::engine::{
    BetError, Ledger, LedgerError, RandomSource, SpinError, Wagers,
};
use big_six_wheel::infra::{DeterministicRng, ScriptedRng};

// Индексы стандартного колеса.
const POS_ONE: usize = 0;
const POS_THREE: usize = 1;
const POS_TWELVE: usize = 7;
const POS_JOKER: usize = 26;

fn wagers(pairs: &[(&str, i64)]) -> Wagers {
    pairs.iter().map(|(l, a)| (l.to_string(), *a)).collect()
}

fn scripted_ledger(balance: u64, script: Vec<usize>) -> Ledger<ScriptedRng> {
    Ledger::new(WheelLayout::standard(), ScriptedRng::new(script), Chips(balance))
}

//
// ---------- сценарии ----------
//

#[test]
fn winning_spin_on_one() {
    let ledger = scripted_ledger(100, vec![POS_ONE]);

    let record = ledger.spin(&wagers(&[("1", 10)])).unwrap();

    assert_eq!(record.seq, 1);
    assert_eq!(record.outcome_label(), "1");
    assert_eq!(record.settlement.total_returned, Chips(20));
    assert_eq!(record.net_delta(), 10);
    assert_eq!(record.balance_after, Chips(110));
    assert_eq!(ledger.balance(), Chips(110));
}

#[test]
fn losing_spin_on_joker_bet() {
    let ledger = scripted_ledger(100, vec![POS_ONE]);

    let record = ledger.spin(&wagers(&[("50 Joker", 10)])).unwrap();

    assert_eq!(record.settlement.total_returned, Chips::ZERO);
    assert_eq!(record.balance_after, Chips(90));
    assert_eq!(ledger.balance(), Chips(90));
}

#[test]
fn insufficient_balance_leaves_state_untouched() {
    let ledger = scripted_ledger(50, vec![POS_THREE]);

    let err = ledger.spin(&wagers(&[("3", 60)])).unwrap_err();

    assert_eq!(
        err,
        SpinError::Bet(BetError::InsufficientBalance {
            required: Chips(60),
            available: Chips(50),
        })
    );
    assert_eq!(ledger.balance(), Chips(50));
    assert!(ledger.history().is_empty());

    // Повторная ошибка даёт то же самое.
    assert!(ledger.spin(&wagers(&[("3", 60)])).is_err());
    assert_eq!(ledger.balance(), Chips(50));
    assert_eq!(ledger.spins_played(), 0);
}

#[test]
fn empty_wagers_spin_is_recorded() {
    let ledger = scripted_ledger(100, vec![POS_JOKER]);

    let record = ledger.spin(&Wagers::new()).unwrap();

    assert_eq!(record.seq, 1);
    assert!(record.bets.is_empty());
    assert!(record.settlement.lines.is_empty());
    assert_eq!(record.net_delta(), 0);
    assert_eq!(record.outcome_label(), "50 Joker");
    assert_eq!(record.outcome.position, POS_JOKER);
    assert_eq!(ledger.balance(), Chips(100));
    assert_eq!(ledger.history().len(), 1);
}

#[test]
fn failed_validation_does_not_consume_randomness() {
    // Первый (и единственный успешный) спин должен получить первый индекс скрипта.
    let ledger = scripted_ledger(10, vec![POS_TWELVE, POS_ONE]);

    assert!(ledger.spin(&wagers(&[("1", -1)])).is_err());
    assert!(ledger.spin(&wagers(&[("bogus", 1)])).is_err());
    assert!(ledger.spin(&wagers(&[("1", 11)])).is_err());

    let record = ledger.spin(&wagers(&[("12", 1)])).unwrap();
    assert_eq!(record.outcome_label(), "12");
    assert_eq!(record.balance_after, Chips(22));
}

#[test]
fn zero_entries_are_not_in_history_snapshot() {
    let ledger = scripted_ledger(100, vec![POS_ONE]);

    let record = ledger.spin(&wagers(&[("1", 5), ("3", 0), ("6", 0)])).unwrap();

    assert_eq!(record.bets.len(), 1);
    assert_eq!(record.bets[0].label, "1");
    assert_eq!(record.bets[0].stake, Chips(5));
}

//
// ---------- свойства ----------
//

#[test]
fn balance_identity_holds_across_many_spins() {
    let ledger = Ledger::new(
        WheelLayout::standard(),
        DeterministicRng::from_seed(31337),
        Chips(10_000),
    );
    let w = wagers(&[("1", 3), ("3", 2), ("6", 1), ("25", 1), ("50 Flag", 1)]);

    for _ in 0..500 {
        let before = ledger.balance();
        let record = ledger.spin(&w).unwrap();

        let stake = record.settlement.total_staked;
        assert_eq!(stake, Chips(8));
        assert_eq!(
            record.balance_after,
            before - stake + record.settlement.total_returned
        );
        assert_eq!(ledger.balance(), record.balance_after);
    }
}

#[test]
fn history_sequence_is_gapless_from_one() {
    let ledger = Ledger::new(
        WheelLayout::standard(),
        DeterministicRng::from_seed(5),
        Chips(100),
    );

    for i in 0..30 {
        // Чередуем удачные и неудачные вызовы, неудачные номер не занимают.
        if i % 3 == 0 {
            let _ = ledger.spin(&wagers(&[("1", 1_000_000)]));
        }
        ledger.spin(&Wagers::new()).unwrap();
        let _ = ledger.deposit(0);
    }

    let seqs: Vec<u64> = ledger.history().iter().map(|r| r.seq).collect();
    let expected: Vec<u64> = (1..=30).collect();
    assert_eq!(seqs, expected);
    assert_eq!(ledger.last_record().map(|r| r.seq), Some(30));
}

#[test]
fn winning_spin_near_u64_max_keeps_balance_identity() {
    let start = u64::MAX - 60;
    let ledger = scripted_ledger(start, vec![POS_JOKER]);

    let record = ledger.spin(&wagers(&[("50 Joker", 1)])).unwrap();

    assert_eq!(record.settlement.total_returned, Chips(51));
    assert_eq!(record.net_delta(), 50);
    assert_eq!(record.balance_after, Chips(start - 1 + 51));
    assert_eq!(record.balance_after, Chips(u64::MAX - 10));
    assert_eq!(ledger.balance(), record.balance_after);
}

#[test]
fn payout_past_u64_max_is_rejected_before_debit() {
    let start = u64::MAX - 10;
    let ledger = scripted_ledger(start, vec![POS_JOKER, POS_ONE]);

    let err = ledger.spin(&wagers(&[("50 Joker", 1)])).unwrap_err();
    assert_eq!(
        err,
        SpinError::Bet(BetError::InvalidAmount("50 Joker".to_string()))
    );
    assert_eq!(ledger.balance(), Chips(start));
    assert!(ledger.history().is_empty());

    // Огромная ставка, у которой переполняется уже само произведение.
    let ledger = scripted_ledger(u64::MAX, vec![POS_JOKER]);
    assert_eq!(
        ledger.spin(&wagers(&[("50 Joker", i64::MAX)])),
        Err(SpinError::Bet(BetError::InvalidAmount("50 Joker".to_string())))
    );
    assert_eq!(ledger.balance(), Chips(u64::MAX));

    // Отклонённый спин не тратит исход: следующий получает первый индекс скрипта.
    let ledger = scripted_ledger(start, vec![POS_JOKER, POS_ONE]);
    let _ = ledger.spin(&wagers(&[("50 Joker", 1)]));
    let record = ledger.spin(&Wagers::new()).unwrap();
    assert_eq!(record.outcome.position, POS_JOKER);
}

//
// ---------- депозит / вывод ----------
//

#[test]
fn deposit_and_withdraw() {
    let ledger = scripted_ledger(100, vec![POS_ONE]);

    ledger.deposit(50).unwrap();
    assert_eq!(ledger.balance(), Chips(150));

    ledger.withdraw(150).unwrap();
    assert_eq!(ledger.balance(), Chips::ZERO);

    // Депозит/вывод в историю спинов не пишутся.
    assert!(ledger.history().is_empty());
}

#[test]
fn deposit_rejects_non_positive_amounts() {
    let ledger = scripted_ledger(100, vec![POS_ONE]);

    assert_eq!(ledger.deposit(0), Err(LedgerError::InvalidAmount(0)));
    assert_eq!(ledger.deposit(-5), Err(LedgerError::InvalidAmount(-5)));
    assert_eq!(ledger.balance(), Chips(100));
}

#[test]
fn deposit_overflow_is_rejected() {
    let ledger = scripted_ledger(u64::MAX - 1, vec![POS_ONE]);

    assert_eq!(ledger.deposit(2), Err(LedgerError::InvalidAmount(2)));
    assert_eq!(ledger.balance(), Chips(u64::MAX - 1));
}

#[test]
fn withdraw_rejects_bad_amounts() {
    let ledger = scripted_ledger(100, vec![POS_ONE]);

    assert_eq!(ledger.withdraw(0), Err(LedgerError::InvalidAmount(0)));
    assert_eq!(ledger.withdraw(-1), Err(LedgerError::InvalidAmount(-1)));
    assert_eq!(
        ledger.withdraw(101),
        Err(LedgerError::InsufficientBalance {
            required: Chips(101),
            available: Chips(100),
        })
    );
    assert_eq!(ledger.balance(), Chips(100));
}

#[test]
fn from_config_uses_initial_balance_and_seed() {
    let cfg = SessionConfig {
        initial_balance: Chips(250),
        rng_seed: Some(77),
        spin_rounds: 3,
    };

    let a = Ledger::from_config(&cfg);
    let b = Ledger::from_config(&cfg);
    assert_eq!(a.balance(), Chips(250));

    let xs: Vec<String> = (0..20)
        .map(|_| a.spin(&Wagers::new()).unwrap().outcome.label)
        .collect();
    let ys: Vec<String> = (0..20)
        .map(|_| b.spin(&Wagers::new()).unwrap().outcome.label)
        .collect();
    assert_eq!(xs, ys);
}

//
// ---------- повторный вход ----------
//

/// RNG, который "зависает" внутри спина, пока тест его не отпустит.
struct BlockingRng {
    entered: mpsc::Sender<()>,
    release: mpsc::Receiver<()>,
}

impl RandomSource for BlockingRng {
    fn pick_index(&mut self, _upper: usize) -> usize {
        let _ = self.entered.send(());
        let _ = self.release.recv();
        POS_ONE
    }
}

#[test]
fn concurrent_spin_fails_fast_with_spin_in_progress() {
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();

    let ledger = Arc::new(Ledger::new(
        WheelLayout::standard(),
        BlockingRng {
            entered: entered_tx,
            release: release_rx,
        },
        Chips(100),
    ));

    let worker = {
        let ledger = Arc::clone(&ledger);
        thread::spawn(move || ledger.spin(&wagers(&[("1", 10)])))
    };

    // Ждём, пока первый спин окажется внутри выбора исхода.
    entered_rx.recv().unwrap();
    assert!(ledger.is_spinning());

    let second = ledger.spin(&wagers(&[("3", 1)]));
    assert_eq!(second, Err(SpinError::SpinInProgress));

    release_tx.send(()).unwrap();
    let first = worker.join().unwrap().unwrap();

    assert_eq!(first.seq, 1);
    assert_eq!(ledger.balance(), Chips(110));
    assert_eq!(ledger.history().len(), 1);
    assert!(!ledger.is_spinning());
}
