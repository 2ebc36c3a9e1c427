use std::{fmt::Write, time::Duration};

use serde::Serialize;

use super::timing::{millis, PhaseTimings};
use crate::error::HarnessResult;

/// Строка отчёта: времена фаз одной реализации в миллисекундах.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchRow {
    pub implementation: String,
    pub add_ms: u64,
    pub remove_ms: u64,
    pub get_ms: u64,
    pub total_ms: u64,
}

impl BenchRow {
    pub fn new(
        implementation: impl Into<String>,
        timings: &PhaseTimings,
    ) -> Self {
        Self {
            implementation: implementation.into(),
            add_ms: millis(timings.add),
            remove_ms: millis(timings.remove),
            get_ms: millis(timings.get),
            total_ms: millis(timings.total()),
        }
    }
}

/// Итог прогона стенда по всем реализациям.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BenchReport {
    pub seed: u64,
    pub fragment: usize,
    pub test_size: usize,
    pub rounds: usize,
    pub wall_ms: u64,
    pub rows: Vec<BenchRow>,
}

impl BenchReport {
    pub fn new(
        seed: u64,
        fragment: usize,
        test_size: usize,
        rounds: usize,
    ) -> Self {
        Self {
            seed,
            fragment,
            test_size,
            rounds,
            ..Default::default()
        }
    }

    pub fn push_row(
        &mut self,
        row: BenchRow,
    ) {
        self.rows.push(row);
    }

    pub fn set_wall_time(
        &mut self,
        elapsed: Duration,
    ) {
        self.wall_ms = millis(elapsed);
    }

    /// Самая быстрая по сумме фаз реализация.
    pub fn fastest(&self) -> Option<&BenchRow> {
        self.rows.iter().min_by_key(|r| r.total_ms)
    }

    /// Выровненная текстовая таблица.
    pub fn render_table(&self) -> String {
        let name_width = self
            .rows
            .iter()
            .map(|r| r.implementation.len())
            .max()
            .unwrap_or(0)
            .max("implementation".len());

        let mut out = String::new();
        let _ = writeln!(
            out,
            "seed={} fragment={} test_size={} rounds={} wall={}ms",
            self.seed, self.fragment, self.test_size, self.rounds, self.wall_ms
        );
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>10}  {:>10}  {:>10}  {:>10}",
            "implementation", "add ms", "remove ms", "get ms", "total ms"
        );
        let _ = writeln!(out, "{}", "-".repeat(name_width + 4 * 12));

        for row in &self.rows {
            let _ = writeln!(
                out,
                "{:<name_width$}  {:>10}  {:>10}  {:>10}  {:>10}",
                row.implementation, row.add_ms, row.remove_ms, row.get_ms, row.total_ms
            );
        }
        out
    }

    pub fn to_json(&self) -> HarnessResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timings(
        add: u64,
        remove: u64,
        get: u64,
    ) -> PhaseTimings {
        PhaseTimings {
            add: Duration::from_millis(add),
            remove: Duration::from_millis(remove),
            get: Duration::from_millis(get),
        }
    }

    fn sample() -> BenchReport {
        let mut report = BenchReport::new(7, 1000, 200_000, 50);
        report.push_row(BenchRow::new("Vec", &timings(120, 30, 0)));
        report.push_row(BenchRow::new("SegmentedList", &timings(15, 4, 2)));
        report.set_wall_time(Duration::from_millis(300));
        report
    }

    #[test]
    fn test_row_clamps_zero_to_one_ms() {
        let row = BenchRow::new("Vec", &timings(120, 30, 0));
        assert_eq!(row.get_ms, 1);
        assert_eq!(row.total_ms, 150);
    }

    #[test]
    fn test_fastest() {
        let report = sample();
        assert_eq!(report.fastest().map(|r| r.implementation.as_str()), Some("SegmentedList"));
        assert!(BenchReport::default().fastest().is_none());
    }

    #[test]
    fn test_table_is_aligned() {
        let table = sample().render_table();
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].contains("seed=7"));
        assert!(lines[1].starts_with("implementation"));
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3].len(), lines[4].len());
        assert!(lines[4].starts_with("SegmentedList"));
    }

    #[test]
    fn test_json_has_rows() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["seed"], 7);
        assert_eq!(value["rows"][1]["implementation"], "SegmentedList");
        assert_eq!(value["rows"][1]["add_ms"], 15);
    }
}
