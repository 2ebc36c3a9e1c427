use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use rand::{rngs::StdRng, Rng, SeedableRng};
use seglist_error::{ResultExt, SegResult};
use tracing::{debug, info, info_span};

use super::reference::ListOps;
use crate::config::HarnessSettings;

/// Время трёх фаз замера для одной реализации.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTimings {
    pub add: Duration,
    pub remove: Duration,
    pub get: Duration,
}

impl PhaseTimings {
    pub fn total(&self) -> Duration {
        self.add + self.remove + self.get
    }
}

/// Замер фазы в миллисекундах; нулевое время округляется до 1 мс.
pub fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX).max(1)
}

/// Воспроизводит фазы add/remove/get на любой реализации [`ListOps`].
///
/// Каждая фаза начинается с генератора, засеянного одним и тем же зерном,
/// поэтому все реализации получают одинаковую последовательность индексов.
#[derive(Debug, Clone)]
pub struct TimingHarness {
    test_size: usize,
    add_size: usize,
    remove_step: usize,
    get_step: usize,
    rounds: usize,
    seed: u64,
}

impl TimingHarness {
    /// Без зерна в настройках берётся случайное; узнать его можно через
    /// [`seed`](Self::seed).
    pub fn new(settings: &HarnessSettings) -> Self {
        Self {
            test_size: settings.test_size,
            add_size: settings.add_size,
            remove_step: settings.remove_step,
            get_step: settings.get_step,
            rounds: settings.rounds,
            seed: settings.seed.unwrap_or_else(rand::random),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    /// Прогоняет все три фазы. Список очищается после каждой фазы.
    pub fn run(
        &self,
        list: &mut dyn ListOps<u64>,
    ) -> SegResult<PhaseTimings> {
        let span = info_span!("bench", implementation = list.name());
        let _guard = span.enter();

        let add = self.phase_add(list).context("add phase")?;
        info!(phase = "add", elapsed_ms = millis(add), "phase finished");

        let remove = self.phase_remove(list).context("remove phase")?;
        info!(
            phase = "remove",
            elapsed_ms = millis(remove),
            "phase finished"
        );

        let get = self.phase_get(list).context("get phase")?;
        info!(phase = "get", elapsed_ms = millis(get), "phase finished");

        Ok(PhaseTimings { add, remove, get })
    }

    fn fill(
        &self,
        list: &mut dyn ListOps<u64>,
    ) {
        for v in 0..self.test_size as u64 {
            list.push(v);
        }
    }

    /// `add_size` вставок в случайную позицию из `0..=len`, затем очистка;
    /// повторяется `rounds` раз.
    fn phase_add(
        &self,
        list: &mut dyn ListOps<u64>,
    ) -> SegResult<Duration> {
        let mut rng = self.rng();
        let start = Instant::now();

        for _ in 0..self.rounds {
            for v in 0..self.add_size as u64 {
                let index = rng.gen_range(0..=list.len());
                list.insert_at(index, v)?;
            }
            list.clear();
        }

        Ok(start.elapsed())
    }

    /// На каждый `remove_step` текущей длины удаляется элемент в случайной
    /// позиции из `0..len`.
    fn phase_remove(
        &self,
        list: &mut dyn ListOps<u64>,
    ) -> SegResult<Duration> {
        self.fill(list);
        let mut rng = self.rng();
        let start = Instant::now();

        for _ in 0..self.rounds {
            let mut j = 0;
            while j < list.len() {
                let index = rng.gen_range(0..list.len());
                list.remove_at(index)?;
                j += self.remove_step;
            }
        }

        let elapsed = start.elapsed();
        debug!(remaining = list.len(), "remove phase drained");
        list.clear();
        Ok(elapsed)
    }

    fn phase_get(
        &self,
        list: &mut dyn ListOps<u64>,
    ) -> SegResult<Duration> {
        self.fill(list);
        let mut rng = self.rng();
        let start = Instant::now();

        for _ in 0..self.rounds {
            let mut j = 0;
            while j < list.len() {
                let index = rng.gen_range(0..list.len());
                black_box(list.get_at(index)?);
                j += self.get_step;
            }
        }

        let elapsed = start.elapsed();
        list.clear();
        Ok(elapsed)
    }
}
