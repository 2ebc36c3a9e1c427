use std::{
    collections::{LinkedList, VecDeque},
    fmt, mem,
};

use seglist_error::{ListError, ListResult};

use crate::list::SegmentedList;

/// Общий контракт списка, через который стенды гоняют одни и те же
/// операции над `SegmentedList` и эталонными коллекциями.
///
/// Выход за границы у всех реализаций сообщается как
/// [`ListError::IndexOutOfRange`], поэтому результаты можно сравнивать
/// напрямую.
pub trait ListOps<T: Clone + PartialEq> {
    fn name(&self) -> &'static str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(
        &mut self,
        value: T,
    );

    /// Вставка в `0..=len`.
    fn insert_at(
        &mut self,
        index: usize,
        value: T,
    ) -> ListResult<()>;

    fn remove_at(
        &mut self,
        index: usize,
    ) -> ListResult<T>;

    fn get_at(
        &self,
        index: usize,
    ) -> ListResult<&T>;

    fn set_at(
        &mut self,
        index: usize,
        value: T,
    ) -> ListResult<T>;

    fn clear(&mut self);

    fn index_of(
        &self,
        value: &T,
    ) -> Option<usize>;

    fn remove_value(
        &mut self,
        value: &T,
    ) -> bool;

    fn to_vec(&self) -> Vec<T>;

    /// Перестройка хранилища. Для эталонов ничего не делает.
    fn rebalance(
        &mut self,
        _fragment: usize,
    ) -> ListResult<()> {
        Ok(())
    }
}

fn out_of_range(
    index: usize,
    len: usize,
) -> ListError {
    ListError::IndexOutOfRange { index, len }
}

////////////////////////////////////////////////////////////////////////////////
// SegmentedList
////////////////////////////////////////////////////////////////////////////////

impl<T: Clone + PartialEq> ListOps<T> for SegmentedList<T> {
    fn name(&self) -> &'static str {
        "SegmentedList"
    }

    fn len(&self) -> usize {
        SegmentedList::len(self)
    }

    fn push(
        &mut self,
        value: T,
    ) {
        SegmentedList::push(self, value)
    }

    fn insert_at(
        &mut self,
        index: usize,
        value: T,
    ) -> ListResult<()> {
        self.insert(index, value)
    }

    fn remove_at(
        &mut self,
        index: usize,
    ) -> ListResult<T> {
        self.remove(index)
    }

    fn get_at(
        &self,
        index: usize,
    ) -> ListResult<&T> {
        self.get(index)
    }

    fn set_at(
        &mut self,
        index: usize,
        value: T,
    ) -> ListResult<T> {
        self.set(index, value)
    }

    fn clear(&mut self) {
        SegmentedList::clear(self)
    }

    fn index_of(
        &self,
        value: &T,
    ) -> Option<usize> {
        SegmentedList::index_of(self, value)
    }

    fn remove_value(
        &mut self,
        value: &T,
    ) -> bool {
        self.remove_item(value)
    }

    fn to_vec(&self) -> Vec<T> {
        SegmentedList::to_vec(self)
    }

    fn rebalance(
        &mut self,
        fragment: usize,
    ) -> ListResult<()> {
        let fragment = i64::try_from(fragment).map_err(|_| ListError::InvalidArgument {
            name: "new_fragment",
            value: i64::MAX,
        })?;
        self.optimize(fragment)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Vec
////////////////////////////////////////////////////////////////////////////////

impl<T: Clone + PartialEq> ListOps<T> for Vec<T> {
    fn name(&self) -> &'static str {
        "Vec"
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn push(
        &mut self,
        value: T,
    ) {
        Vec::push(self, value)
    }

    fn insert_at(
        &mut self,
        index: usize,
        value: T,
    ) -> ListResult<()> {
        if index > Vec::len(self) {
            return Err(out_of_range(index, Vec::len(self)));
        }
        self.insert(index, value);
        Ok(())
    }

    fn remove_at(
        &mut self,
        index: usize,
    ) -> ListResult<T> {
        if index >= Vec::len(self) {
            return Err(out_of_range(index, Vec::len(self)));
        }
        Ok(self.remove(index))
    }

    fn get_at(
        &self,
        index: usize,
    ) -> ListResult<&T> {
        self.get(index)
            .ok_or_else(|| out_of_range(index, Vec::len(self)))
    }

    fn set_at(
        &mut self,
        index: usize,
        value: T,
    ) -> ListResult<T> {
        let len = Vec::len(self);
        self.get_mut(index)
            .map(|slot| mem::replace(slot, value))
            .ok_or(out_of_range(index, len))
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    fn index_of(
        &self,
        value: &T,
    ) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    fn remove_value(
        &mut self,
        value: &T,
    ) -> bool {
        match ListOps::index_of(self, value) {
            Some(i) => {
                self.remove(i);
                true
            }
            None => false,
        }
    }

    fn to_vec(&self) -> Vec<T> {
        self.clone()
    }
}

////////////////////////////////////////////////////////////////////////////////
// VecDeque
////////////////////////////////////////////////////////////////////////////////

impl<T: Clone + PartialEq> ListOps<T> for VecDeque<T> {
    fn name(&self) -> &'static str {
        "VecDeque"
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn push(
        &mut self,
        value: T,
    ) {
        self.push_back(value)
    }

    fn insert_at(
        &mut self,
        index: usize,
        value: T,
    ) -> ListResult<()> {
        if index > VecDeque::len(self) {
            return Err(out_of_range(index, VecDeque::len(self)));
        }
        self.insert(index, value);
        Ok(())
    }

    fn remove_at(
        &mut self,
        index: usize,
    ) -> ListResult<T> {
        let len = VecDeque::len(self);
        self.remove(index).ok_or(out_of_range(index, len))
    }

    fn get_at(
        &self,
        index: usize,
    ) -> ListResult<&T> {
        self.get(index)
            .ok_or_else(|| out_of_range(index, VecDeque::len(self)))
    }

    fn set_at(
        &mut self,
        index: usize,
        value: T,
    ) -> ListResult<T> {
        let len = VecDeque::len(self);
        self.get_mut(index)
            .map(|slot| mem::replace(slot, value))
            .ok_or(out_of_range(index, len))
    }

    fn clear(&mut self) {
        VecDeque::clear(self)
    }

    fn index_of(
        &self,
        value: &T,
    ) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    fn remove_value(
        &mut self,
        value: &T,
    ) -> bool {
        match ListOps::index_of(self, value) {
            Some(i) => self.remove(i).is_some(),
            None => false,
        }
    }

    fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

////////////////////////////////////////////////////////////////////////////////
// LinkedList
////////////////////////////////////////////////////////////////////////////////

/// Позиционные операции двусвязного списка идут через `split_off` и
/// `append`, то есть стоят O(n) на проход до позиции.
impl<T: Clone + PartialEq> ListOps<T> for LinkedList<T> {
    fn name(&self) -> &'static str {
        "LinkedList"
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn push(
        &mut self,
        value: T,
    ) {
        self.push_back(value)
    }

    fn insert_at(
        &mut self,
        index: usize,
        value: T,
    ) -> ListResult<()> {
        if index > LinkedList::len(self) {
            return Err(out_of_range(index, LinkedList::len(self)));
        }
        let mut tail = self.split_off(index);
        self.push_back(value);
        self.append(&mut tail);
        Ok(())
    }

    fn remove_at(
        &mut self,
        index: usize,
    ) -> ListResult<T> {
        let len = LinkedList::len(self);
        if index >= len {
            return Err(out_of_range(index, len));
        }
        let mut tail = self.split_off(index);
        let value = tail.pop_front().ok_or(out_of_range(index, len))?;
        self.append(&mut tail);
        Ok(value)
    }

    fn get_at(
        &self,
        index: usize,
    ) -> ListResult<&T> {
        self.iter()
            .nth(index)
            .ok_or_else(|| out_of_range(index, LinkedList::len(self)))
    }

    fn set_at(
        &mut self,
        index: usize,
        value: T,
    ) -> ListResult<T> {
        let len = LinkedList::len(self);
        self.iter_mut()
            .nth(index)
            .map(|slot| mem::replace(slot, value))
            .ok_or(out_of_range(index, len))
    }

    fn clear(&mut self) {
        LinkedList::clear(self)
    }

    fn index_of(
        &self,
        value: &T,
    ) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    fn remove_value(
        &mut self,
        value: &T,
    ) -> bool {
        match ListOps::index_of(self, value) {
            Some(i) => self.remove_at(i).is_ok(),
            None => false,
        }
    }

    fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

/// Все реализации, которые сравнивает стенд, в фиксированном порядке.
///
/// # Errors
///
/// [`ListError::InvalidArgument`], если `fragment` не помещается в `i64`.
pub fn all_implementations<T>(fragment: usize) -> ListResult<Vec<Box<dyn ListOps<T>>>>
where
    T: Clone + PartialEq + 'static,
{
    let fragment = i64::try_from(fragment).map_err(|_| ListError::InvalidArgument {
        name: "fragment",
        value: i64::MAX,
    })?;

    let impls: Vec<Box<dyn ListOps<T>>> = vec![
        Box::new(Vec::new()),
        Box::new(VecDeque::new()),
        Box::new(LinkedList::new()),
        Box::new(SegmentedList::with_fragment(fragment)?),
    ];
    Ok(impls)
}

////////////////////////////////////////////////////////////////////////////////
// Операции и их результаты
////////////////////////////////////////////////////////////////////////////////

/// Одна операция над списком для воспроизведения сценариев.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum Op<T> {
    Push(T),
    Insert(usize, T),
    Remove(usize),
    Get(usize),
    Set(usize, T),
    IndexOf(T),
    RemoveValue(T),
    Clear,
    Rebalance(u8),
}

impl<T> Op<T> {
    /// Сворачивает индекс в `0..=len + 1`, чтобы сценарий попадал в
    /// список, на границу и на одну позицию за ней.
    pub fn fold_index(
        self,
        len: usize,
    ) -> Self {
        let fold = |i: usize| i % (len + 2);
        match self {
            Op::Insert(i, v) => Op::Insert(fold(i), v),
            Op::Remove(i) => Op::Remove(fold(i)),
            Op::Get(i) => Op::Get(fold(i)),
            Op::Set(i, v) => Op::Set(fold(i), v),
            other => other,
        }
    }
}

/// Наблюдаемый результат операции.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Done,
    Value(T),
    Position(Option<usize>),
    Removed(bool),
    Failed(ListError),
}

impl<T: fmt::Display> fmt::Display for Op<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Op::Push(v) => write!(f, "push({v})"),
            Op::Insert(i, v) => write!(f, "insert({i}, {v})"),
            Op::Remove(i) => write!(f, "remove({i})"),
            Op::Get(i) => write!(f, "get({i})"),
            Op::Set(i, v) => write!(f, "set({i}, {v})"),
            Op::IndexOf(v) => write!(f, "index_of({v})"),
            Op::RemoveValue(v) => write!(f, "remove_item({v})"),
            Op::Clear => write!(f, "clear()"),
            Op::Rebalance(fragment) => write!(f, "optimize({fragment})"),
        }
    }
}

/// Применяет операцию к списку и возвращает её результат.
pub fn apply<T, L>(
    list: &mut L,
    op: &Op<T>,
) -> Outcome<T>
where
    T: Clone + PartialEq,
    L: ListOps<T> + ?Sized,
{
    let done = |r: ListResult<()>| r.map_or_else(Outcome::Failed, |_| Outcome::Done);
    let value = |r: ListResult<T>| r.map_or_else(Outcome::Failed, Outcome::Value);

    match op {
        Op::Push(v) => {
            list.push(v.clone());
            Outcome::Done
        }
        Op::Insert(i, v) => done(list.insert_at(*i, v.clone())),
        Op::Remove(i) => value(list.remove_at(*i)),
        Op::Get(i) => value(list.get_at(*i).cloned()),
        Op::Set(i, v) => value(list.set_at(*i, v.clone())),
        Op::IndexOf(v) => Outcome::Position(list.index_of(v)),
        Op::RemoveValue(v) => Outcome::Removed(list.remove_value(v)),
        Op::Clear => {
            list.clear();
            Outcome::Done
        }
        Op::Rebalance(fragment) => done(list.rebalance(usize::from(*fragment))),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(list: &mut dyn ListOps<i32>) {
        for v in [1, 2, 3] {
            list.push(v);
        }
        list.insert_at(3, 4).unwrap();
        list.insert_at(0, 0).unwrap();
        assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4], "{}", list.name());

        assert_eq!(list.remove_at(2), Ok(2));
        assert_eq!(list.set_at(0, 9), Ok(0));
        assert_eq!(list.get_at(0), Ok(&9));
        assert_eq!(list.index_of(&4), Some(3));
        assert!(list.remove_value(&4));
        assert!(!list.remove_value(&4));

        assert_eq!(
            list.get_at(3),
            Err(ListError::IndexOutOfRange { index: 3, len: 3 }),
            "{}",
            list.name()
        );
        assert_eq!(
            list.insert_at(5, 0),
            Err(ListError::IndexOutOfRange { index: 5, len: 3 })
        );
        assert!(list.remove_at(3).is_err());
        assert!(list.set_at(3, 0).is_err());

        list.clear();
        assert!(list.is_empty());
    }

    /// Тест проверяет, что все реализации одинаково ведут себя на базовом
    /// сценарии, включая ошибки выхода за границы.
    #[test]
    fn test_all_implementations_agree() {
        let mut impls = all_implementations::<i32>(2).unwrap();
        let names: Vec<_> = impls.iter().map(|l| l.name()).collect();
        assert_eq!(names, ["Vec", "VecDeque", "LinkedList", "SegmentedList"]);

        for list in impls.iter_mut() {
            exercise(list.as_mut());
        }
    }

    #[test]
    fn test_apply_reports_outcomes() {
        let mut list = SegmentedList::with_fragment(2).unwrap();

        assert_eq!(apply(&mut list, &Op::Push(5)), Outcome::Done);
        assert_eq!(apply(&mut list, &Op::Get(0)), Outcome::Value(5));
        assert_eq!(apply(&mut list, &Op::IndexOf(5)), Outcome::Position(Some(0)));
        assert_eq!(
            apply(&mut list, &Op::Remove(4)),
            Outcome::Failed(ListError::IndexOutOfRange { index: 4, len: 1 })
        );
        assert_eq!(apply(&mut list, &Op::Rebalance(0)), Outcome::Done);
        assert_eq!(list.fragment(), 0);
        assert_eq!(apply(&mut list, &Op::RemoveValue(5)), Outcome::Removed(true));
    }

    #[test]
    fn test_fold_index() {
        assert_eq!(Op::Remove::<u8>(10).fold_index(3), Op::Remove(0));
        assert_eq!(Op::Insert(4, 1u8).fold_index(3), Op::Insert(4, 1));
        assert_eq!(Op::Push(1u8).fold_index(0), Op::Push(1));
    }

    #[test]
    fn test_op_display() {
        assert_eq!(Op::Insert(2, 7).to_string(), "insert(2, 7)");
        assert_eq!(Op::<i32>::Rebalance(3).to_string(), "optimize(3)");
    }
}
