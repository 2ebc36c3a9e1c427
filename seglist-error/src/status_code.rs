use std::fmt;

use num_enum::TryFromPrimitive;
#[cfg(feature = "serde_repr")]
use serde_repr::{Deserialize_repr, Serialize_repr};
#[cfg(feature = "strum")]
use strum_macros::{AsRefStr, EnumIter};

/// Коды статуса для категоризации ошибок.
///
/// # Диапазоны:
/// - 0xxx: Успех
/// - 1xxx: Общие ошибки и ошибки аргументов
/// - 2xxx: Ошибки данных (индексы, отсутствующий ввод, инварианты)
/// - 6xxx: Ввод-вывод
///
/// `num_enum::TryFromPrimitive` даёт `TryFrom<u32>`, поэтому код можно
/// передавать числом (например, в JSON-отчёте бенчмарка) и восстанавливать
/// обратно.
#[cfg_attr(feature = "strum", derive(AsRefStr, EnumIter))]
#[cfg_attr(feature = "serde_repr", derive(Serialize_repr, Deserialize_repr))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u32)]
#[non_exhaustive]
pub enum StatusCode {
    // === 0xxx: Успех ===
    Success = 0,

    // === 1xxx: Общие ошибки ===
    Unknown = 1000,
    Unexpected = 1002,
    Internal = 1003,
    InvalidArgs = 1004,
    NotImplemented = 1005,
    InvalidConfig = 1006,

    // === 2xxx: Ошибки данных ===
    NotFound = 2000,
    InvalidValue = 2004,
    IndexOutOfBounds = 2006,
    MissingInput = 2010,
    InvariantViolation = 2011,

    // === 6xxx: IO ===
    Io = 6000,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl StatusCode {
    /// Числовое представление кода статуса.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Пытается получить вариант `StatusCode` из `u32`.
    pub fn from_u32(v: u32) -> Option<Self> {
        Self::try_from(v).ok()
    }

    /// Вернёт `true`, если переданный `code` означает успешный результат.
    pub fn is_success(code: u32) -> bool {
        Self::Success as u32 == code
    }

    /// Ошибка вызывающей стороны: неверный аргумент, индекс или пустой ввод.
    ///
    /// Такие ошибки предотвращаются проверкой предусловий до вызова.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgs
                | Self::InvalidValue
                | Self::IndexOutOfBounds
                | Self::MissingInput
                | Self::NotFound
                | Self::InvalidConfig
        )
    }

    /// Внутренняя ошибка: нарушение инварианта или сбой окружения.
    pub fn is_internal_error(&self) -> bool {
        matches!(
            self,
            Self::Unknown
                | Self::Unexpected
                | Self::Internal
                | Self::InvariantViolation
                | Self::Io
        )
    }

    /// Требуется ли логировать как критическую ошибку.
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Internal | Self::InvariantViolation)
    }

    /// Рекомендуемый уровень логирования для данного кода.
    pub fn log_level(&self) -> LogLevel {
        match self {
            Self::Success => LogLevel::Trace,
            Self::NotFound => LogLevel::Debug,
            Self::InvalidArgs
            | Self::InvalidValue
            | Self::IndexOutOfBounds
            | Self::MissingInput
            | Self::InvalidConfig => LogLevel::Info,
            Self::Internal | Self::InvariantViolation => LogLevel::Error,
            _ => LogLevel::Warn,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для StatusCode
////////////////////////////////////////////////////////////////////////////////

impl From<StatusCode> for u32 {
    fn from(c: StatusCode) -> Self {
        c.code()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        #[cfg(feature = "strum")]
        {
            write!(f, "{} ({})", self.as_ref(), self.code())
        }
        #[cfg(not(feature = "strum"))]
        {
            write!(f, "{:?} ({})", self, self.code())
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
