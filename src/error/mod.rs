pub mod harness;

pub use harness::{HarnessError, HarnessResult};
pub use seglist_error::{ListError, ListResult, SegResult, StackError, StatusCode};
