/// Benchmark settings loading.
pub mod config;
/// Error types of the harness; list errors live in `seglist-error`.
pub mod error;
/// Cross-checking and timing harnesses over a common list contract.
pub mod harness;
/// The segmented list itself.
pub mod list;
/// Logging setup (formats, filters).
pub mod logging;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Harness configuration.
pub use crate::config::HarnessSettings;
/// Error and result types.
pub use error::{HarnessError, HarnessResult, ListError, ListResult, SegResult, StackError, StatusCode};
/// Harness API.
pub use harness::{BenchReport, ListOps, TimingHarness};
/// Segmented list, its iterators and diagnostics.
pub use list::{
    IntoIter, Iter, IterMut, SegmentStatistics, SegmentedList, ValidationError, DEFAULT_FRAGMENT,
};
/// Logging.
pub use logging::{init_logging, LogFormat, LoggingConfig};
