use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::segment::{Segment, SegmentIndex};
use crate::domain::wheel::WheelLayout;
use crate::engine::RandomSource;

/// Исход одного спина: выигравший сектор (по значению).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpinOutcome {
    pub segment: Segment,
}

impl SpinOutcome {
    pub fn label(&self) -> &str {
        &self.segment.label
    }

    pub fn position(&self) -> SegmentIndex {
        self.segment.position
    }
}

/// Выбор исхода: равномерно по физическим секторам, не по меткам.
/// Именно поэтому "1" (26 секторов) выпадает чаще, чем "50 Flag" (1 сектор).
#[derive(Debug)]
pub struct OutcomeSelector<R> {
    layout: Arc<WheelLayout>,
    rng: R,
}

impl<R: RandomSource> OutcomeSelector<R> {
    pub fn new(layout: Arc<WheelLayout>, rng: R) -> Self {
        Self { layout, rng }
    }

    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    pub fn draw(&mut self) -> SpinOutcome {
        let n = self.layout.len();
        // Защита от RNG, вернувшего индекс за границей.
        let index = self.rng.pick_index(n) % n;
        let segment = self.layout.segments()[index].clone();
        SpinOutcome { segment }
    }
}
