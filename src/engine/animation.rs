//! План анимации спина.
//!
//! Анимация только "доводит" колесо до уже выбранного сектора:
//! исход известен заранее и от таймингов не зависит.

use serde::{Deserialize, Serialize};

use crate::domain::segment::SegmentIndex;

/// Задержка первого кадра, мс.
pub const INITIAL_FRAME_DELAY_MS: f64 = 20.0;

/// Во сколько раз растёт задержка на каждом шаге (плавное замедление).
pub const FRAME_DELAY_GROWTH: f64 = 1.03;

/// Один кадр: какой сектор подсветить и сколько ждать после него.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnimationFrame {
    pub highlight: SegmentIndex,
    pub delay_ms: f64,
}

/// Детерминированный план анимации для известного исхода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpinAnimation {
    /// Где колесо должно остановиться.
    pub target: SegmentIndex,
    pub segment_count: usize,
    pub rounds: u32,
}

impl SpinAnimation {
    pub fn plan(target: SegmentIndex, segment_count: usize, rounds: u32) -> Self {
        Self {
            target,
            segment_count,
            rounds,
        }
    }

    /// Шагов до остановки: rounds полных оборотов + позиция исхода.
    pub fn total_steps(&self) -> usize {
        self.rounds as usize * self.segment_count + self.target
    }

    /// Все кадры по порядку. Последний кадр всегда стоит на `target`.
    pub fn frames(&self) -> Vec<AnimationFrame> {
        if self.segment_count == 0 {
            return Vec::new();
        }

        let steps = self.total_steps();
        let mut frames = Vec::with_capacity(steps + 1);
        let mut delay = INITIAL_FRAME_DELAY_MS;

        for i in 0..steps {
            frames.push(AnimationFrame {
                highlight: i % self.segment_count,
                delay_ms: delay,
            });
            delay *= FRAME_DELAY_GROWTH;
        }

        frames.push(AnimationFrame {
            highlight: self.target,
            delay_ms: 0.0,
        });
        frames
    }

    /// Суммарная длительность анимации, мс.
    pub fn total_duration_ms(&self) -> f64 {
        self.frames().iter().map(|f| f.delay_ms).sum()
    }
}
