//! Колесо Big Six: движок спина и расчёта.
//!
//! Слои:
//! - `domain` — фишки, сектора, таблица выплат, конфиг сессии;
//! - `engine` — купон, выбор исхода, расчёт, леджер, план анимации;
//! - `infra` — RNG-реализации и логирование;
//! - `api` — команды / запросы / DTO для слоя отображения.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use domain::{Chips, SessionConfig, WheelLayout};
pub use engine::{HistoryRecord, Ledger, RandomSource, Wagers};
