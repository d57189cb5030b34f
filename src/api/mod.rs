//! Внешний API колеса для слоя отображения (UI / CLI / анимация).
//!
//! Здесь описываются:
//! - команды (commands.rs) — депозит, вывод, спин;
//! - запросы (queries.rs) — баланс, история, раскладка колеса;
//! - DTO (dto.rs) — удобные структуры для фронта;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
