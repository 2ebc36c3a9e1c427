//! SegmentedList: упорядоченная последовательность из цепочки сегментов.
//!
//! # Модули
//!
//! - `seglist_base`: сам список и разрешение индексов.
//! - `segment`: непрерывный буфер одного сегмента.
//! - `iter`: итераторы.
//! - `safety`: валидация инвариантов и статистика.

pub mod iter;
pub mod safety;
pub mod seglist_base;
mod segment;

pub use iter::*;
pub use safety::*;
pub use seglist_base::*;
