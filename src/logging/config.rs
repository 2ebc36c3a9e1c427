use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, HarnessResult};

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Формат вывода событий.
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    #[default]
    Compact,
    Json,
}

/// Конфигурация логирования.
///
/// События пишутся в stderr, чтобы не смешиваться с отчётом на stdout.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень для целей `seglist*` (trace/debug/info/warn/error)
    pub level: String,
    /// Формат вывода
    pub format: LogFormat,
    /// ANSI-цвета
    pub with_ansi: bool,
    /// Печатать target события
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            with_ansi: true,
            with_target: false,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> HarnessResult<()> {
        if !LEVELS.contains(&self.level.as_str()) {
            return Err(HarnessError::InvalidSetting {
                name: "logging.level",
                reason: format!("unknown level '{}'", self.level),
            });
        }
        Ok(())
    }

    /// Директива фильтра: сторонние крейты на warn, наши цели на `level`.
    pub fn build_filter_directive(&self) -> String {
        format!(
            "warn,seglist={level},seglist_bench={level}",
            level = self.level
        )
    }
}
