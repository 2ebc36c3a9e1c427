pub mod config;
mod filters;
mod formatter;

pub use self::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{HarnessError, HarnessResult};

/// Устанавливает глобальный subscriber по конфигурации.
///
/// Повторная инициализация возвращает [`HarnessError::Logging`].
pub fn init_logging(config: &LoggingConfig) -> HarnessResult<()> {
    config.validate()?;

    let env_filter = filters::build_filter_from_config(config);
    let layer = formatter::build_layer(config);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init()
        .map_err(|e| HarnessError::Logging(e.to_string()))?;

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.level,
        format = ?config.format,
        "Logging initialized"
    );

    Ok(())
}
