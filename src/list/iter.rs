use std::{iter::FusedIterator, slice, vec};

use super::segment::Segment;

/// Итератор по ссылкам на элементы [`SegmentedList`](super::SegmentedList).
pub struct Iter<'a, T> {
    segments: slice::Iter<'a, Segment<T>>,
    current: slice::Iter<'a, T>,
    remaining: usize,
}

/// Итератор по изменяемым ссылкам на элементы.
pub struct IterMut<'a, T> {
    segments: slice::IterMut<'a, Segment<T>>,
    current: slice::IterMut<'a, T>,
    remaining: usize,
}

/// Потребляющий итератор: сегменты разбираются по одному.
pub struct IntoIter<T> {
    segments: vec::IntoIter<Segment<T>>,
    current: vec::IntoIter<T>,
    remaining: usize,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(
        segments: &'a [Segment<T>],
        len: usize,
    ) -> Self {
        Self {
            segments: segments.iter(),
            current: <&[T]>::default().iter(),
            remaining: len,
        }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(
        segments: &'a mut [Segment<T>],
        len: usize,
    ) -> Self {
        Self {
            segments: segments.iter_mut(),
            current: <&mut [T]>::default().iter_mut(),
            remaining: len,
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn new(
        segments: Vec<Segment<T>>,
        len: usize,
    ) -> Self {
        Self {
            segments: segments.into_iter(),
            current: Vec::new().into_iter(),
            remaining: len,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов
////////////////////////////////////////////////////////////////////////////////

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.next() {
                self.remaining -= 1;
                return Some(item);
            }
            self.current = self.segments.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.next() {
                self.remaining -= 1;
                return Some(item);
            }
            self.current = self.segments.next()?.iter_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.next() {
                self.remaining -= 1;
                return Some(item);
            }
            self.current = self.segments.next()?.into_vec().into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for Iter<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            segments: self.segments.clone(),
            current: self.current.clone(),
            remaining: self.remaining,
        }
    }
}
