use std::io;

use tracing_subscriber::{fmt, layer::Layer, registry::LookupSpan};

use crate::logging::config::{LogFormat, LoggingConfig};

/// Строит fmt-слой для выбранного формата.
///
/// Тип слоя стирается в `Box<dyn Layer>`, так как у json/pretty/compact он
/// разный.
pub fn build_layer<S>(config: &LoggingConfig) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    match config.format {
        LogFormat::Json => Box::new(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(io::stderr)
                .with_ansi(false)
                .with_target(config.with_target),
        ),
        LogFormat::Pretty => Box::new(
            fmt::layer()
                .pretty()
                .with_writer(io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target),
        ),
        LogFormat::Compact => Box::new(
            fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target),
        ),
    }
}

#[cfg(test)]
mod tests {
    use tracing::info;
    use tracing_subscriber::{prelude::*, registry::Registry};

    use super::*;

    /// Тест проверяет, что слой каждого формата регистрируется и логирует
    /// без паники.
    #[test]
    fn test_every_format_builds_and_logs() {
        for format in [LogFormat::Pretty, LogFormat::Compact, LogFormat::Json] {
            let cfg = LoggingConfig {
                format,
                with_ansi: false,
                ..Default::default()
            };
            let subscriber = Registry::default().with(build_layer::<Registry>(&cfg));

            tracing::subscriber::with_default(subscriber, || {
                info!(?format, "formatter smoke test");
            });
        }
    }
}
