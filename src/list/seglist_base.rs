use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
};

use seglist_error::{ListError, ListResult};
use tracing::debug;

use super::{segment::Segment, IntoIter, Iter, IterMut, SegmentStatistics, ValidationError};
use crate::validate;

/// Размер фрагмента по умолчанию.
pub const DEFAULT_FRAGMENT: usize = 1000;

/// Упорядоченная последовательность, хранящаяся как цепочка сегментов.
///
/// Каждый сегмент это непрерывный буфер примерно из `fragment` элементов.
/// Глобальный индекс разрешается проходом по сегментам с вычитанием их
/// длин, поэтому стоимость доступа пропорциональна числу сегментов, а
/// вставка и удаление сдвигают элементы только внутри одного сегмента.
///
/// Список всегда содержит хотя бы один сегмент. Недозаполненные сегменты
/// после удалений не сливаются автоматически; для выравнивания служит
/// [`SegmentedList::optimize`].
///
/// Не синхронизирован: для доступа из нескольких потоков нужна внешняя
/// блокировка.
#[derive(Clone)]
pub struct SegmentedList<T> {
    segments: Vec<Segment<T>>,
    len: usize,
    fragment: usize,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl<T> SegmentedList<T> {
    /// Создаёт пустой список с размером фрагмента [`DEFAULT_FRAGMENT`].
    pub fn new() -> Self {
        Self::empty(DEFAULT_FRAGMENT)
    }

    /// Создаёт пустой список с заданным размером фрагмента.
    ///
    /// Фрагмент `0` допустим: тогда каждое добавление в конец открывает
    /// новый сегмент.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidArgument`], если `fragment < 0`.
    pub fn with_fragment(fragment: i64) -> ListResult<Self> {
        let fragment = checked_fragment("fragment", fragment)?;
        Ok(Self::empty(fragment))
    }

    /// Создаёт список из элементов источника в порядке его обхода.
    ///
    /// # Errors
    ///
    /// [`ListError::NullInput`], если источник отсутствует.
    pub fn from_source<I>(source: Option<I>) -> ListResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let source = source.ok_or(ListError::NullInput {
            operation: "from_source",
        })?;

        let mut list = Self::new();
        list.extend(source);
        Ok(list)
    }

    /// То же, что [`from_source`](Self::from_source), но с заданным размером
    /// фрагмента. Отсутствие источника проверяется первым.
    pub fn from_source_with_fragment<I>(
        source: Option<I>,
        fragment: i64,
    ) -> ListResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let source = source.ok_or(ListError::NullInput {
            operation: "from_source_with_fragment",
        })?;

        let mut list = Self::with_fragment(fragment)?;
        list.extend(source);
        Ok(list)
    }

    fn empty(fragment: usize) -> Self {
        Self {
            segments: vec![Segment::with_fragment(fragment)],
            len: 0,
            fragment,
        }
    }

    /// Общее число элементов, O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Текущий размер фрагмента.
    #[inline]
    pub fn fragment(&self) -> usize {
        self.fragment
    }

    /// Число сегментов (всегда не меньше одного).
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Длины сегментов в порядке списка.
    pub fn segment_lens(&self) -> Vec<usize> {
        self.segments.iter().map(Segment::len).collect()
    }

    /// Разрешает глобальный индекс в пару (сегмент, локальный индекс).
    ///
    /// Сегмент, длина которого не больше остатка индекса, пропускается,
    /// поэтому пустые сегменты никогда не выбираются.
    fn locate(
        &self,
        index: usize,
    ) -> ListResult<(usize, usize)> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }

        let mut rest = index;
        for (seg, segment) in self.segments.iter().enumerate() {
            if segment.len() <= rest {
                rest -= segment.len();
            } else {
                return Ok((seg, rest));
            }
        }

        // Недостижимо, пока `len` равен сумме длин сегментов.
        Err(self.out_of_range(index))
    }

    fn out_of_range(
        &self,
        index: usize,
    ) -> ListError {
        ListError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }

    /// Возвращает ссылку на элемент по индексу.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`], если `index >= len()`.
    pub fn get(
        &self,
        index: usize,
    ) -> ListResult<&T> {
        let (seg, local) = self.locate(index)?;
        self.segments[seg]
            .get(local)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Возвращает изменяемую ссылку на элемент по индексу.
    pub fn get_mut(
        &mut self,
        index: usize,
    ) -> ListResult<&mut T> {
        let (seg, local) = self.locate(index)?;
        let len = self.len;
        self.segments[seg]
            .get_mut(local)
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Заменяет элемент по индексу и возвращает прежнее значение.
    pub fn set(
        &mut self,
        index: usize,
        value: T,
    ) -> ListResult<T> {
        let (seg, local) = self.locate(index)?;
        Ok(self.segments[seg].replace(local, value))
    }

    pub fn first(&self) -> Option<&T> {
        self.segments.iter().find_map(|s| s.as_slice().first())
    }

    pub fn last(&self) -> Option<&T> {
        self.segments.iter().rev().find_map(|s| s.as_slice().last())
    }

    /// Добавляет элемент в конец списка.
    ///
    /// Если последний сегмент заполнен до размера фрагмента, открывается
    /// новый сегмент.
    pub fn push(
        &mut self,
        value: T,
    ) {
        append_to(&mut self.segments, self.fragment, value);
        self.len += 1;
    }

    /// Вставляет элемент в позицию `index`, сдвигая последующие вправо.
    ///
    /// Вставка в позицию `len()` эквивалентна [`push`](Self::push).
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`], если `index > len()`.
    pub fn insert(
        &mut self,
        index: usize,
        value: T,
    ) -> ListResult<()> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }

        if index == self.len {
            self.push(value);
            return Ok(());
        }

        let (seg, local) = self.locate(index)?;
        self.segments[seg].insert(local, value);
        self.len += 1;

        Ok(())
    }

    /// Удаляет и возвращает элемент по индексу.
    ///
    /// Опустевший сегмент остаётся на месте.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`], если `index >= len()`.
    pub fn remove(
        &mut self,
        index: usize,
    ) -> ListResult<T> {
        let (seg, local) = self.locate(index)?;
        let value = self.segments[seg].remove(local);
        self.len -= 1;
        Ok(value)
    }

    /// Добавляет в конец все элементы источника.
    ///
    /// Возвращает `true`, если источник был непустым.
    ///
    /// # Errors
    ///
    /// [`ListError::NullInput`], если источник отсутствует.
    pub fn add_all<I>(
        &mut self,
        source: Option<I>,
    ) -> ListResult<bool>
    where
        I: IntoIterator<Item = T>,
    {
        let source = source.ok_or(ListError::NullInput {
            operation: "add_all",
        })?;

        let before = self.len;
        self.extend(source);
        Ok(self.len > before)
    }

    /// Удаляет все элементы; остаётся ровно один пустой сегмент.
    pub fn clear(&mut self) {
        self.segments = vec![Segment::with_fragment(self.fragment)];
        self.len = 0;
    }

    /// Перестраивает список с новым размером фрагмента.
    ///
    /// Элементы переносятся в новую цепочку сегментов по порядку; каждый
    /// сегмент принимает элементы, пока его длина меньше `new_fragment`.
    /// Старая цепочка заменяется целиком. O(n).
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidArgument`], если `new_fragment < 0`. Список при
    /// этом не меняется.
    pub fn optimize(
        &mut self,
        new_fragment: i64,
    ) -> ListResult<()> {
        let fragment = checked_fragment("new_fragment", new_fragment)?;
        let before = self.segments.len();

        let expected = match fragment {
            0 => self.len + 1,
            f => self.len.div_ceil(f).max(1),
        };
        let mut rebuilt = Vec::with_capacity(expected);
        rebuilt.push(Segment::with_fragment(fragment));

        let old = std::mem::take(&mut self.segments);
        for value in old.into_iter().flat_map(Segment::into_vec) {
            append_to(&mut rebuilt, fragment, value);
        }

        self.segments = rebuilt;
        self.fragment = fragment;

        debug!(
            len = self.len,
            fragment,
            segments_before = before,
            segments_after = self.segments.len(),
            "segmented list rebalanced"
        );

        Ok(())
    }

    /// Итератор по элементам в порядке списка.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.segments, self.len)
    }

    /// Итератор по изменяемым ссылкам в порядке списка.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.segments, self.len)
    }

    /// Переносит элементы в плоский `Vec`, потребляя список.
    pub fn into_vec(self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        for segment in self.segments {
            out.extend(segment.into_vec());
        }
        out
    }

    /// Проверяет структурные инварианты списка.
    pub fn validate_invariants(&self) -> Result<(), ValidationError> {
        validate!(
            !self.segments.is_empty(),
            ValidationError::EmptySegmentSequence
        );

        let actual: usize = self.segments.iter().map(Segment::len).sum();
        validate!(
            actual == self.len,
            ValidationError::LengthMismatch {
                expected: self.len,
                actual,
            }
        );

        Ok(())
    }

    /// Собирает статистику распределения элементов по сегментам.
    pub fn statistics(&self) -> SegmentStatistics {
        SegmentStatistics::from_lens(&self.segment_lens(), self.fragment)
    }
}

impl<T: Clone> SegmentedList<T> {
    /// Плоская копия элементов в порядке списка.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        for segment in &self.segments {
            out.extend_from_slice(segment.as_slice());
        }
        out
    }
}

impl<T: PartialEq> SegmentedList<T> {
    /// Глобальный индекс первого элемента, равного `value`.
    pub fn index_of(
        &self,
        value: &T,
    ) -> Option<usize> {
        let mut offset = 0;
        for segment in &self.segments {
            if let Some(local) = segment.position(value) {
                return Some(offset + local);
            }
            offset += segment.len();
        }
        None
    }

    /// Глобальный индекс последнего элемента, равного `value`.
    pub fn last_index_of(
        &self,
        value: &T,
    ) -> Option<usize> {
        let mut end = self.len;
        for segment in self.segments.iter().rev() {
            end -= segment.len();
            if let Some(local) = segment.rposition(value) {
                return Some(end + local);
            }
        }
        None
    }

    pub fn contains(
        &self,
        value: &T,
    ) -> bool {
        self.index_of(value).is_some()
    }

    /// Удаляет первое вхождение `value`. Возвращает `true`, если элемент
    /// найден.
    pub fn remove_item(
        &mut self,
        value: &T,
    ) -> bool {
        for segment in self.segments.iter_mut() {
            if let Some(local) = segment.position(value) {
                segment.remove(local);
                self.len -= 1;
                return true;
            }
        }
        false
    }
}

/// Дописывает элемент в хвост цепочки, открывая новый сегмент, если
/// последний уже набрал `fragment` элементов.
fn append_to<T>(
    segments: &mut Vec<Segment<T>>,
    fragment: usize,
    value: T,
) {
    match segments.last_mut() {
        Some(tail) if tail.len() < fragment => tail.push(value),
        _ => segments.push(Segment::singleton(fragment, value)),
    }
}

fn checked_fragment(
    name: &'static str,
    fragment: i64,
) -> ListResult<usize> {
    usize::try_from(fragment).map_err(|_| ListError::InvalidArgument {
        name,
        value: fragment,
    })
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для SegmentedList
////////////////////////////////////////////////////////////////////////////////

impl<T> Default for SegmentedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SegmentedList<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Равенство по значениям элементов; границы сегментов и размер фрагмента
/// не учитываются.
impl<T: PartialEq> PartialEq for SegmentedList<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SegmentedList<T> {}

impl<T: Hash> Hash for SegmentedList<T> {
    fn hash<H: Hasher>(
        &self,
        state: &mut H,
    ) {
        state.write_usize(self.len);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T> Index<usize> for SegmentedList<T> {
    type Output = T;

    fn index(
        &self,
        index: usize,
    ) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for SegmentedList<T> {
    fn index_mut(
        &mut self,
        index: usize,
    ) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> FromIterator<T> for SegmentedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SegmentedList<T> {
    fn extend<I: IntoIterator<Item = T>>(
        &mut self,
        iter: I,
    ) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> IntoIterator for SegmentedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.segments, self.len)
    }
}

impl<'a, T> IntoIterator for &'a SegmentedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SegmentedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
