use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::{
    error::{HarnessError, HarnessResult},
    list::DEFAULT_FRAGMENT,
    logging::LoggingConfig,
};

/// Префикс переменных окружения (`SEGLIST_ROUNDS`, `SEGLIST_LOGGING__LEVEL`).
pub const ENV_PREFIX: &str = "SEGLIST";

/// Настройки замерного стенда.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HarnessSettings {
    /// Размер фрагмента для `SegmentedList`
    pub fragment: usize,
    /// Число элементов, которым заполняется список перед фазами remove/get
    pub test_size: usize,
    /// Число позиционных вставок за раунд фазы add
    pub add_size: usize,
    /// Шаг по длине списка для фазы remove
    pub remove_step: usize,
    /// Шаг по длине списка для фазы get
    pub get_step: usize,
    /// Число раундов каждой фазы
    pub rounds: usize,
    /// Зерно генератора; `None` берёт случайное
    pub seed: Option<u64>,
    pub logging: LoggingConfig,
}

impl Default for HarnessSettings {
    fn default() -> Self {
        Self {
            fragment: DEFAULT_FRAGMENT,
            test_size: 200_000,
            add_size: 10_000,
            remove_step: 50_000,
            get_step: 50_000,
            rounds: 50,
            seed: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl HarnessSettings {
    /// Загружает настройки: значения по умолчанию, затем необязательный
    /// файл, затем переменные окружения с префиксом [`ENV_PREFIX`].
    pub fn load(path: Option<&Path>) -> HarnessResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let cfg = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = cfg.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> HarnessResult<()> {
        let positive = [
            ("rounds", self.rounds),
            ("add_size", self.add_size),
            ("remove_step", self.remove_step),
            ("get_step", self.get_step),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(HarnessError::InvalidSetting {
                    name,
                    reason: "must be positive".to_string(),
                });
            }
        }

        self.logging.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::logging::LogFormat;

    fn write_toml(body: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_match_reference_benchmark() {
        let s = HarnessSettings::default();
        assert_eq!(s.fragment, 1000);
        assert_eq!(s.test_size, 200_000);
        assert_eq!(s.add_size, 10_000);
        assert_eq!(s.remove_step, 50_000);
        assert_eq!(s.get_step, 50_000);
        assert_eq!(s.rounds, 50);
        assert!(s.seed.is_none());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let file = write_toml(
            r#"
            fragment = 64
            rounds = 3
            seed = 7

            [logging]
            level = "debug"
            format = "json"
            "#,
        );

        let s = HarnessSettings::load(Some(file.path())).unwrap();
        assert_eq!(s.fragment, 64);
        assert_eq!(s.rounds, 3);
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.test_size, 200_000);
        assert_eq!(s.logging.level, "debug");
        assert_eq!(s.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_rejects_zero_rounds() {
        let file = write_toml("rounds = 0\n");
        let err = HarnessSettings::load(Some(file.path())).unwrap_err();
        assert!(matches!(
            err,
            HarnessError::InvalidSetting { name: "rounds", .. }
        ));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = HarnessSettings::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, HarnessError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_zero_step_and_bad_level() {
        let s = HarnessSettings {
            get_step: 0,
            ..Default::default()
        };
        assert!(matches!(
            s.validate(),
            Err(HarnessError::InvalidSetting {
                name: "get_step",
                ..
            })
        ));

        let mut s = HarnessSettings::default();
        s.logging.level = "chatty".into();
        assert!(s.validate().is_err());
    }
}
