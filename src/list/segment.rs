use std::slice;

/// Сегмент: непрерывный растущий буфер, хранящий подряд идущую часть
/// элементов списка.
///
/// Ёмкость фрагмента используется только для предварительного выделения
/// памяти. Сегмент может временно превышать её после позиционной вставки.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Segment<T> {
    items: Vec<T>,
}

impl<T> Segment<T> {
    /// Создаёт пустой сегмент с запасом в 10% сверх размера фрагмента.
    pub(crate) fn with_fragment(fragment: usize) -> Self {
        Self {
            items: Vec::with_capacity(fragment.saturating_add(fragment / 10)),
        }
    }

    /// Создаёт сегмент из одного элемента.
    pub(crate) fn singleton(
        fragment: usize,
        value: T,
    ) -> Self {
        let mut segment = Self::with_fragment(fragment);
        segment.items.push(value);
        segment
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn get(
        &self,
        local: usize,
    ) -> Option<&T> {
        self.items.get(local)
    }

    #[inline]
    pub(crate) fn get_mut(
        &mut self,
        local: usize,
    ) -> Option<&mut T> {
        self.items.get_mut(local)
    }

    #[inline]
    pub(crate) fn push(
        &mut self,
        value: T,
    ) {
        self.items.push(value);
    }

    /// Вставка со сдвигом хвоста сегмента. `local <= len()`.
    #[inline]
    pub(crate) fn insert(
        &mut self,
        local: usize,
        value: T,
    ) {
        self.items.insert(local, value);
    }

    /// Удаление со сдвигом хвоста сегмента. `local < len()`.
    #[inline]
    pub(crate) fn remove(
        &mut self,
        local: usize,
    ) -> T {
        self.items.remove(local)
    }

    /// Заменяет элемент и возвращает прежний. `local < len()`.
    #[inline]
    pub(crate) fn replace(
        &mut self,
        local: usize,
        value: T,
    ) -> T {
        std::mem::replace(&mut self.items[local], value)
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: PartialEq> Segment<T> {
    /// Локальный индекс первого вхождения `value`.
    pub(crate) fn position(
        &self,
        value: &T,
    ) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    /// Локальный индекс последнего вхождения `value`.
    pub(crate) fn rposition(
        &self,
        value: &T,
    ) -> Option<usize> {
        self.items.iter().rposition(|item| item == value)
    }
}
