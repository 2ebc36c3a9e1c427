use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

pub type ListResult<T> = Result<T, ListError>;

/// Ошибки сегментированного списка.
///
/// Все ошибки синхронные и возникают до любой мутации: проверка границ и
/// аргументов выполняется первой.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// Недопустимый аргумент (например, отрицательный размер фрагмента).
    #[error("Invalid argument '{name}': {value}")]
    InvalidArgument { name: &'static str, value: i64 },
    /// Источник элементов отсутствует.
    #[error("Missing source sequence for {operation}")]
    NullInput { operation: &'static str },
    /// Индекс вне допустимого диапазона.
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl ErrorExt for ListError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument { .. } => StatusCode::InvalidArgs,
            Self::NullInput { .. } => StatusCode::MissingInput,
            Self::IndexOutOfRange { .. } => StatusCode::IndexOutOfBounds,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
