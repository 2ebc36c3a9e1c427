//! Замерный стенд seglist
//!
//! Прогоняет фазы add/remove/get на `Vec`, `VecDeque`, `LinkedList` и
//! `SegmentedList` с одинаковой последовательностью случайных индексов и
//! печатает сводную таблицу или JSON.

use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use seglist::{
    config::HarnessSettings,
    harness::{all_implementations, BenchReport, BenchRow, TimingHarness},
    logging::init_logging,
};
use tracing::{debug, info};

/// Аргументы командной строки. Заданные флаги перекрывают файл настроек и
/// переменные окружения `SEGLIST_*`.
#[derive(Parser, Debug)]
#[command(name = "seglist-bench")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compare SegmentedList with std collections on add/remove/get workloads", long_about = None)]
struct Cli {
    /// Файл настроек (toml, json, yaml)
    #[arg(short, long, env = "SEGLIST_CONFIG", help = "Путь к файлу настроек")]
    config: Option<PathBuf>,
    /// Размер фрагмента SegmentedList
    #[arg(short, long, help = "Размер фрагмента SegmentedList")]
    fragment: Option<usize>,
    /// Число элементов перед фазами remove/get
    #[arg(short = 'n', long, help = "Размер заполняемого списка")]
    size: Option<usize>,
    /// Число раундов каждой фазы
    #[arg(short, long, help = "Число раундов каждой фазы")]
    rounds: Option<usize>,
    /// Зерно генератора индексов
    #[arg(short, long, help = "Зерно генератора случайных индексов")]
    seed: Option<u64>,
    /// Формат отчёта
    #[arg(
        short,
        long,
        value_enum,
        default_value = "table",
        help = "Формат вывода отчёта"
    )]
    output: OutputFormat,
    /// Подробное логирование (debug)
    #[arg(short, long, help = "Включить подробный вывод для отладки")]
    verbose: bool,
    /// Только предупреждения и ошибки
    #[arg(short, long, conflicts_with = "verbose", help = "Подавить логирование (только warn/error)")]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// Выровненная таблица
    Table,
    /// JSON
    Json,
}

impl Cli {
    fn apply_overrides(
        &self,
        settings: &mut HarnessSettings,
    ) {
        if let Some(fragment) = self.fragment {
            settings.fragment = fragment;
        }
        if let Some(size) = self.size {
            settings.test_size = size;
        }
        if let Some(rounds) = self.rounds {
            settings.rounds = rounds;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if self.verbose {
            settings.logging.level = "debug".to_string();
        } else if self.quiet {
            settings.logging.level = "warn".to_string();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings =
        HarnessSettings::load(cli.config.as_deref()).context("Failed to load settings")?;
    cli.apply_overrides(&mut settings);
    settings.validate().context("Invalid settings")?;

    init_logging(&settings.logging).context("Failed to initialize logging")?;
    debug!(?settings, "settings resolved");

    let harness = TimingHarness::new(&settings);
    let mut report = BenchReport::new(
        harness.seed(),
        settings.fragment,
        settings.test_size,
        settings.rounds,
    );

    let started = Instant::now();
    for mut list in all_implementations::<u64>(settings.fragment)? {
        let name = list.name();
        info!(implementation = name, "benchmark started");

        let timings = harness
            .run(list.as_mut())
            .with_context(|| format!("Benchmark failed for {name}"))?;
        report.push_row(BenchRow::new(name, &timings));
    }
    report.set_wall_time(started.elapsed());

    match cli.output {
        OutputFormat::Table => print!("{}", report.render_table()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if let Some(fastest) = report.fastest() {
        info!(
            implementation = %fastest.implementation,
            total_ms = fastest.total_ms,
            "fastest implementation"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_replace_loaded_values() {
        let cli = Cli::parse_from([
            "seglist-bench",
            "--fragment",
            "64",
            "-n",
            "1000",
            "--seed",
            "9",
            "-v",
        ]);
        let mut settings = HarnessSettings::default();
        cli.apply_overrides(&mut settings);

        assert_eq!(settings.fragment, 64);
        assert_eq!(settings.test_size, 1000);
        assert_eq!(settings.rounds, 50);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["seglist-bench", "-v", "-q"]).is_err());
    }
}
