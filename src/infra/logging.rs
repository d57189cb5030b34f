use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Фильтр по умолчанию, если RUST_LOG не задан.
pub const DEFAULT_LOG_FILTER: &str = "warn,big_six_wheel=info";

/// Установить глобальный subscriber для бинарников.
///
/// Пишем в stderr, чтобы не мешать выводу сессии в stdout.
/// Повторный вызов тихо ничего не делает.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true));

    let _ = tracing::subscriber::set_global_default(subscriber);
}
