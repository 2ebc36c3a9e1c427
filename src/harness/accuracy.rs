use std::{any::Any, fmt};

use seglist_error::{ErrorExt, StatusCode};
use thiserror::Error;
use tracing::warn;

use super::reference::{apply, ListOps, Op};

/// Расхождение проверяемой реализации с эталоном.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{subject} diverged from {model} at step {step} ({op}): expected {expected}, got {actual}")]
pub struct Divergence {
    pub model: &'static str,
    pub subject: &'static str,
    pub step: usize,
    pub op: String,
    pub expected: String,
    pub actual: String,
}

impl ErrorExt for Divergence {
    fn status_code(&self) -> StatusCode {
        StatusCode::InvariantViolation
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Применяет операции к эталону и проверяемому списку и сравнивает
/// каждый результат, длину после каждого шага и итоговое содержимое.
///
/// Возвращает число выполненных шагов.
pub fn cross_check<T>(
    ops: &[Op<T>],
    model: &mut dyn ListOps<T>,
    subject: &mut dyn ListOps<T>,
) -> Result<usize, Divergence>
where
    T: Clone + PartialEq + fmt::Debug,
{
    let (model_name, subject_name) = (model.name(), subject.name());
    let diverged = |step: usize, op: String, expected: String, actual: String| {
        let d = Divergence {
            model: model_name,
            subject: subject_name,
            step,
            op,
            expected,
            actual,
        };
        warn!(%d, "cross-check failed");
        d
    };

    for (step, op) in ops.iter().enumerate() {
        let expected = apply(model, op);
        let actual = apply(subject, op);

        if expected != actual {
            return Err(diverged(
                step,
                format!("{op:?}"),
                format!("{expected:?}"),
                format!("{actual:?}"),
            ));
        }

        if model.len() != subject.len() {
            return Err(diverged(
                step,
                format!("{op:?}"),
                format!("len {}", model.len()),
                format!("len {}", subject.len()),
            ));
        }
    }

    let (expected, actual) = (model.to_vec(), subject.to_vec());
    if expected != actual {
        return Err(diverged(
            ops.len(),
            "final contents".to_string(),
            format!("{expected:?}"),
            format!("{actual:?}"),
        ));
    }

    Ok(ops.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::SegmentedList;

    #[test]
    fn test_agreeing_replay() {
        let ops = vec![
            Op::Push(1),
            Op::Push(2),
            Op::Insert(2, 3),
            Op::Insert(0, 0),
            Op::Rebalance(1),
            Op::Remove(1),
            Op::Set(0, 7),
            Op::Get(9),
            Op::IndexOf(3),
            Op::RemoveValue(2),
            Op::Clear,
            Op::Push(4),
        ];

        let mut model = Vec::new();
        let mut subject = SegmentedList::with_fragment(2).unwrap();

        assert_eq!(cross_check(&ops, &mut model, &mut subject), Ok(ops.len()));
        assert_eq!(subject.to_vec(), vec![4]);
    }

    /// Список, который молча теряет вставку в конец, должен быть пойман.
    #[test]
    fn test_detects_divergence() {
        struct DropsTail(Vec<i32>);

        impl ListOps<i32> for DropsTail {
            fn name(&self) -> &'static str {
                "DropsTail"
            }
            fn len(&self) -> usize {
                self.0.len()
            }
            fn push(
                &mut self,
                value: i32,
            ) {
                self.0.push(value)
            }
            fn insert_at(
                &mut self,
                index: usize,
                value: i32,
            ) -> seglist_error::ListResult<()> {
                if index < self.0.len() {
                    self.0.insert(index, value);
                }
                Ok(())
            }
            fn remove_at(
                &mut self,
                index: usize,
            ) -> seglist_error::ListResult<i32> {
                self.0.remove_at(index)
            }
            fn get_at(
                &self,
                index: usize,
            ) -> seglist_error::ListResult<&i32> {
                self.0.get_at(index)
            }
            fn set_at(
                &mut self,
                index: usize,
                value: i32,
            ) -> seglist_error::ListResult<i32> {
                self.0.set_at(index, value)
            }
            fn clear(&mut self) {
                self.0.clear()
            }
            fn index_of(
                &self,
                value: &i32,
            ) -> Option<usize> {
                ListOps::index_of(&self.0, value)
            }
            fn remove_value(
                &mut self,
                value: &i32,
            ) -> bool {
                self.0.remove_value(value)
            }
            fn to_vec(&self) -> Vec<i32> {
                self.0.clone()
            }
        }

        let ops = vec![Op::Push(1), Op::Insert(1, 2)];
        let err = cross_check(&ops, &mut Vec::new(), &mut DropsTail(Vec::new())).unwrap_err();

        assert_eq!(err.step, 1);
        assert_eq!(err.subject, "DropsTail");
        assert_eq!(err.status_code(), StatusCode::InvariantViolation);
        assert!(err.to_string().contains("len 2"));
    }
}
