pub mod ext;
pub mod macros;
pub mod stack;
pub mod status_code;
pub mod types;

// Публичный реэкспорт, чтобы внешний код не зависел от раскладки модулей.
pub use ext::*;
pub use macros::*;
pub use stack::*;
pub use status_code::*;
pub use types::*;

pub type SegResult<T> = Result<T, StackError>;
