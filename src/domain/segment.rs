use serde::{Deserialize, Serialize};

/// Индекс сектора на колесе (0..N-1), задаёт угловое положение.
pub type SegmentIndex = usize;

/// Один физический сектор колеса.
///
/// Сектора неизменяемы: колесо собирается один раз при старте
/// и живёт до конца процесса.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Метка категории ("1", "3", ..., "50 Joker").
    pub label: String,
    /// Позиция по кругу, уникальна в пределах колеса.
    pub position: SegmentIndex,
}

impl Segment {
    pub fn new(label: impl Into<String>, position: SegmentIndex) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}
