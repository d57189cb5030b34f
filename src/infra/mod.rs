//! Инфраструктурный слой вокруг движка колеса:
//! - RNG-реализации для `RandomSource` (системная, по seed, по сценарию);
//! - установка логирования для бинарников.

pub mod logging;
pub mod rng;

pub use logging::init_logging;
pub use rng::*;
