// src/engine/ledger.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::domain::chips::Chips;
use crate::domain::config::SessionConfig;
use crate::domain::wheel::WheelLayout;
use crate::engine::bet_slip::{BetSlip, Wagers};
use crate::engine::errors::{LedgerError, SpinError};
use crate::engine::history::HistoryRecord;
use crate::engine::selector::OutcomeSelector;
use crate::engine::settlement::settle;
use crate::engine::RandomSource;
use crate::infra::rng::SessionRng;

/// Внутреннее изменяемое состояние под одним мьютексом:
/// баланс и история всегда меняются вместе.
struct LedgerInner<R> {
    selector: OutcomeSelector<R>,
    balance: Chips,
    history: Vec<HistoryRecord>,
}

/// Флаг "спин в процессе". Снимается при drop, в том числе на ошибках.
struct SpinGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SpinGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SpinGuard { flag })
    }
}

impl Drop for SpinGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Леджер сессии: владеет балансом, историей спинов и RNG.
///
/// - все методы берут `&self`, леджер можно делить между потоками через `Arc`;
/// - каждая мутация атомарна (нет видимого состояния "списали, но не зачислили");
/// - параллельный `spin` не ждёт в очереди, а сразу получает `SpinInProgress`.
pub struct Ledger<R> {
    layout: Arc<WheelLayout>,
    inner: Mutex<LedgerInner<R>>,
    spinning: AtomicBool,
}

impl Ledger<SessionRng> {
    /// Леджер стандартного колеса по конфигу сессии.
    pub fn from_config(config: &SessionConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => SessionRng::seeded(seed),
            None => SessionRng::system(),
        };
        Ledger::new(WheelLayout::standard(), rng, config.initial_balance)
    }
}

impl<R: RandomSource> Ledger<R> {
    pub fn new(layout: WheelLayout, rng: R, initial_balance: Chips) -> Self {
        let layout = Arc::new(layout);
        Self {
            inner: Mutex::new(LedgerInner {
                selector: OutcomeSelector::new(Arc::clone(&layout), rng),
                balance: initial_balance,
                history: Vec::new(),
            }),
            layout,
            spinning: AtomicBool::new(false),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LedgerInner<R>> {
        // Внутри критической секции нет паник, состояние всегда целое.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    pub fn balance(&self) -> Chips {
        self.lock().balance
    }

    /// Снимок истории в порядке спинов.
    pub fn history(&self) -> Vec<HistoryRecord> {
        self.lock().history.clone()
    }

    pub fn last_record(&self) -> Option<HistoryRecord> {
        self.lock().history.last().cloned()
    }

    pub fn spins_played(&self) -> usize {
        self.lock().history.len()
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning.load(Ordering::Acquire)
    }

    /// Пополнить баланс. В историю спинов не попадает.
    pub fn deposit(&self, amount: i64) -> Result<(), LedgerError> {
        if amount <= 0 {
            debug!(amount, "rejected deposit");
            return Err(LedgerError::InvalidAmount(amount));
        }

        let mut inner = self.lock();
        inner.balance = inner
            .balance
            .checked_add(Chips(amount as u64))
            .ok_or(LedgerError::InvalidAmount(amount))?;

        info!(amount, balance = %inner.balance, "deposit");
        Ok(())
    }

    /// Вывести с баланса. В историю спинов не попадает.
    pub fn withdraw(&self, amount: i64) -> Result<(), LedgerError> {
        if amount <= 0 {
            debug!(amount, "rejected withdraw");
            return Err(LedgerError::InvalidAmount(amount));
        }

        let mut inner = self.lock();
        let requested = Chips(amount as u64);
        let available = inner.balance;
        inner.balance = available
            .checked_sub(requested)
            .ok_or(LedgerError::InsufficientBalance {
                required: requested,
                available,
            })?;

        info!(amount, balance = %inner.balance, "withdraw");
        Ok(())
    }

    /// Полный цикл спина как одна транзакция:
    ///   1. валидация купона против текущего баланса;
    ///   2. списание всей ставки (до выбора исхода);
    ///   3. выбор сектора;
    ///   4. расчёт;
    ///   5. зачисление выигрышей;
    ///   6. запись в историю.
    ///
    /// При ошибке валидации ничего не списывается, RNG не трогается,
    /// история не растёт.
    pub fn spin(&self, wagers: &Wagers) -> Result<HistoryRecord, SpinError> {
        let _guard = match SpinGuard::acquire(&self.spinning) {
            Some(guard) => guard,
            None => {
                warn!("spin rejected: another spin is in progress");
                return Err(SpinError::SpinInProgress);
            }
        };

        let mut inner = self.lock();

        let slip = BetSlip::validate(wagers, &self.layout, inner.balance)?;
        let stake = slip.total_stake();

        // Ставка уже провалидирована против баланса.
        inner.balance = inner.balance - stake;

        let outcome = inner.selector.draw();
        let settlement = settle(&slip, &outcome);

        // Выигрыш проверен на переполнение в BetSlip::validate.
        inner.balance += settlement.total_returned;

        let seq = inner.history.len() as u64 + 1;
        let record = HistoryRecord {
            seq,
            bets: slip.lines().to_vec(),
            outcome: outcome.segment,
            settlement,
            balance_after: inner.balance,
        };
        inner.history.push(record.clone());

        debug!(
            seq,
            outcome = %record.outcome.label,
            position = record.outcome.position,
            stake = %stake,
            delta = record.settlement.total_delta,
            balance = %record.balance_after,
            "spin settled"
        );

        Ok(record)
    }
}
