//! Стенды для сравнения `SegmentedList` с коллекциями стандартной
//! библиотеки: общий контракт операций, перекрёстная проверка результатов
//! и замер времени по фазам.

pub mod accuracy;
pub mod reference;
pub mod report;
pub mod timing;

pub use accuracy::{cross_check, Divergence};
pub use reference::{all_implementations, apply, ListOps, Op, Outcome};
pub use report::{BenchReport, BenchRow};
pub use timing::{millis, PhaseTimings, TimingHarness};
