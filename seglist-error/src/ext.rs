use std::{any::Any, error::Error};

use crate::StatusCode;

/// Общий интерфейс ошибок seglist (object-safe).
///
/// Любая ошибка, реализующая этот трейт, может быть поднята в
/// [`StackError`](crate::StackError) через `?` и получить код статуса,
/// короткое сообщение для вывода пользователю и подробное для логов.
pub trait ErrorExt: Error + Send + Sync + 'static {
    /// Код статуса. По умолчанию [`StatusCode::Internal`].
    fn status_code(&self) -> StatusCode {
        StatusCode::Internal
    }

    /// Возвращает ошибку как [`Any`] для downcast к конкретному типу.
    fn as_any(&self) -> &dyn Any;

    /// Короткое сообщение для вывода пользователю.
    ///
    /// Для внутренних ошибок детали скрываются.
    fn client_message(&self) -> String {
        if self.status_code().is_internal_error() {
            "Internal error".to_string()
        } else {
            self.to_string()
        }
    }

    /// Подробное сообщение для логов (`Debug`-представление).
    fn log_message(&self) -> String {
        format!("{self:?}")
    }

    /// Короткое имя типа ошибки, без пути модулей.
    fn type_name(&self) -> String {
        std::any::type_name::<Self>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown")
            .to_string()
    }
}
