use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::RandomSource;

/// Системный RNG (thread_rng). Для реальной игры.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn pick_index(&mut self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed даёт одинаковую последовательность исходов.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn pick_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }
}

/// RNG сессии: выбирается по конфигу (есть seed или нет).
#[derive(Clone, Debug)]
pub enum SessionRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl SessionRng {
    pub fn system() -> Self {
        SessionRng::System(SystemRng)
    }

    pub fn seeded(seed: u64) -> Self {
        SessionRng::Seeded(DeterministicRng::from_seed(seed))
    }
}

impl RandomSource for SessionRng {
    fn pick_index(&mut self, upper: usize) -> usize {
        match self {
            SessionRng::System(rng) => rng.pick_index(upper),
            SessionRng::Seeded(rng) => rng.pick_index(upper),
        }
    }
}

/// Заранее заданная последовательность индексов (по кругу).
/// Удобно, когда исход спина нужно задать руками.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    indices: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, cursor: 0 }
    }

    /// Сколько раз к RNG уже обращались.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn pick_index(&mut self, upper: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let idx = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        idx % upper
    }
}
