//! Доменная модель колеса Big Six: фишки, сектора, таблица выплат, конфиг сессии.

pub mod chips;
pub mod config;
pub mod segment;
pub mod wheel;

/// Порядковый номер спина в истории (с 1).
pub type SpinSeq = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Chips и т.п.
pub use chips::*;
pub use config::*;
pub use segment::*;
pub use wheel::*;
