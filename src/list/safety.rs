use std::any::Any;

use seglist_error::{ErrorExt, StatusCode};

/// Макрос для валидации условий с возвратом ошибки.
#[macro_export]
macro_rules! validate {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// Нарушение структурного инварианта списка.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Список не содержит ни одного сегмента
    EmptySegmentSequence,
    /// Кэшированная длина не совпадает с суммой длин сегментов
    LengthMismatch { expected: usize, actual: usize },
}

/// Статистика распределения элементов по сегментам.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentStatistics {
    /// Количество сегментов
    pub segment_count: usize,
    /// Количество элементов
    pub element_count: usize,
    /// Размер фрагмента
    pub fragment: usize,
    /// Длина самого короткого сегмента
    pub min_len: usize,
    /// Длина самого длинного сегмента
    pub max_len: usize,
    /// Средняя длина сегмента
    pub average_len: f64,
    /// Пустые сегменты
    pub empty_segments: usize,
    /// Сегменты длиннее фрагмента
    pub oversized_segments: usize,
}

impl SegmentStatistics {
    /// Строит статистику по длинам сегментов.
    pub fn from_lens(
        lens: &[usize],
        fragment: usize,
    ) -> Self {
        let element_count: usize = lens.iter().sum();
        let average_len = if lens.is_empty() {
            0.0
        } else {
            element_count as f64 / lens.len() as f64
        };

        Self {
            segment_count: lens.len(),
            element_count,
            fragment,
            min_len: lens.iter().copied().min().unwrap_or(0),
            max_len: lens.iter().copied().max().unwrap_or(0),
            average_len,
            empty_segments: lens.iter().filter(|&&l| l == 0).count(),
            oversized_segments: lens.iter().filter(|&&l| l > fragment).count(),
        }
    }

    /// Минимально возможное число сегментов для текущего числа элементов.
    pub fn ideal_segment_count(&self) -> usize {
        match self.fragment {
            0 => self.element_count + 1,
            f => self.element_count.div_ceil(f).max(1),
        }
    }

    /// Стоит ли вызвать `optimize`: есть сегменты длиннее фрагмента или
    /// сегментов больше идеального числа более чем на `tolerance` (доля).
    pub fn needs_rebalance(
        &self,
        tolerance: f64,
    ) -> bool {
        if self.oversized_segments > 0 {
            return true;
        }
        let ideal = self.ideal_segment_count() as f64;
        self.segment_count as f64 > ideal * (1.0 + tolerance)
    }

    /// Форматирует статистику для вывода.
    pub fn format_report(&self) -> String {
        let mut report = String::new();
        report.push_str("SegmentedList Statistics:\n");
        report.push_str(&format!("  Elements: {}\n", self.element_count));
        report.push_str(&format!(
            "  Segments: {} (ideal {})\n",
            self.segment_count,
            self.ideal_segment_count()
        ));
        report.push_str(&format!("  Fragment: {}\n", self.fragment));
        report.push_str(&format!(
            "  Segment length: min {}, max {}, avg {:.2}\n",
            self.min_len, self.max_len, self.average_len
        ));
        report.push_str(&format!(
            "  Empty segments: {}, oversized: {}\n",
            self.empty_segments, self.oversized_segments
        ));
        report
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ValidationError::EmptySegmentSequence => {
                write!(f, "Segment sequence is empty")
            }
            ValidationError::LengthMismatch { expected, actual } => {
                write!(f, "Length mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ErrorExt for ValidationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::InvariantViolation
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
