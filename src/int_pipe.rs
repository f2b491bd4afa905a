use crate::cursor::{CursorIter, RangeCursor};
use crate::pipe::Pipe;
use crate::{Float, Integer, StreamRes};

/// 整数流水线。
///
/// 在[`Pipe<Integer>`]之上增加数值相关的终止操作，元素以`Integer`原样存储，不做额外装箱。
#[derive(Clone)]
pub struct IntPipe {
    pipe: Pipe<Integer>,
}

impl From<Pipe<Integer>> for IntPipe {
    fn from(pipe: Pipe<Integer>) -> Self {
        IntPipe { pipe }
    }
}

impl From<IntPipe> for Pipe<Integer> {
    fn from(ints: IntPipe) -> Self {
        ints.pipe
    }
}

impl IntPipe {
    /* **************************************** 源 **************************************** */

    pub fn of(values: impl Into<Vec<Integer>>) -> IntPipe {
        Pipe::of(values).into()
    }

    /// 半开区间`[start, end)`，`start >= end`时为空。
    pub fn range(start: Integer, end: Integer) -> IntPipe {
        Pipe::from_factory(move || Box::new(RangeCursor::new(start, end))).into()
    }

    /// 闭区间`[start, end]`。
    pub fn range_closed(start: Integer, end: Integer) -> IntPipe {
        match end.checked_add(1) {
            Some(end) => IntPipe::range(start, end),
            // end为Integer::MAX时无法转换为半开区间
            None => IntPipe::from_iter_fn(move || start..=end),
        }
    }

    pub fn empty() -> IntPipe {
        Pipe::empty().into()
    }

    pub fn iterate(seed: Integer, step: impl Fn(Integer) -> Integer + 'static) -> IntPipe {
        Pipe::iterate(seed, move |x: &Integer| step(*x)).into()
    }

    pub fn generate(supplier: impl Fn() -> Integer + 'static) -> IntPipe {
        Pipe::generate(supplier).into()
    }

    pub fn from_iter_fn<I>(factory: impl Fn() -> I + 'static) -> IntPipe
    where
        I: IntoIterator<Item = Integer>,
        I::IntoIter: 'static,
    {
        Pipe::from_iter_fn(factory).into()
    }

    /* **************************************** 中间操作 **************************************** */

    pub fn filter(&self, predicate: impl Fn(Integer) -> bool + 'static) -> IntPipe {
        self.pipe.filter(move |x| predicate(*x)).into()
    }

    pub fn map(&self, mapper: impl Fn(Integer) -> Integer + 'static) -> IntPipe {
        self.pipe.map(mapper).into()
    }

    pub fn peek(&self, action: impl Fn(Integer) + 'static) -> IntPipe {
        self.pipe.peek(move |x| action(*x)).into()
    }

    pub fn skip(&self, count: usize) -> IntPipe {
        self.pipe.skip(count).into()
    }

    pub fn limit(&self, count: usize) -> IntPipe {
        self.pipe.limit(count).into()
    }

    pub fn distinct(&self) -> IntPipe {
        self.pipe.distinct().into()
    }

    pub fn take_while(&self, predicate: impl Fn(Integer) -> bool + 'static) -> IntPipe {
        self.pipe.take_while(move |x| predicate(*x)).into()
    }

    pub fn drop_while(&self, predicate: impl Fn(Integer) -> bool + 'static) -> IntPipe {
        self.pipe.drop_while(move |x| predicate(*x)).into()
    }

    /* **************************************** 类型桥接 **************************************** */

    pub fn boxed(&self) -> Pipe<Integer> {
        self.pipe.clone()
    }

    pub fn map_to_obj<R: 'static>(&self, mapper: impl Fn(Integer) -> R + 'static) -> Pipe<R> {
        self.pipe.map(mapper)
    }

    /* **************************************** 终止操作 **************************************** */

    pub fn iter(&self) -> CursorIter<Integer> {
        self.pipe.iter()
    }

    pub fn fold(&self, identity: Integer, op: impl FnMut(Integer, Integer) -> Integer) -> StreamRes<Integer> {
        self.pipe.fold(identity, op)
    }

    pub fn reduce(&self, op: impl FnMut(Integer, Integer) -> Integer) -> StreamRes<Option<Integer>> {
        self.pipe.reduce(op)
    }

    /// 同[`Pipe::for_each`]，`action`必须是`'static`；需要借用局部变量时使用[`IntPipe::iter`]。
    pub fn for_each(&self, mut action: impl FnMut(Integer) + 'static) -> StreamRes<()> {
        self.pipe.for_each(move |x| action(*x))
    }

    /// 溢出时按补码回绕。
    pub fn sum(&self) -> StreamRes<Integer> {
        self.fold(0, Integer::wrapping_add)
    }

    /// 溢出时按补码回绕。
    pub fn product(&self) -> StreamRes<Integer> {
        self.fold(1, Integer::wrapping_mul)
    }

    pub fn count(&self) -> StreamRes<Integer> {
        self.map(|_| 1).sum()
    }

    /// 两次遍历：先计数，再求和。
    pub fn average(&self) -> StreamRes<Option<Float>> {
        let count = self.count()?;
        if count == 0 {
            return Ok(None);
        }
        Ok(Some(self.sum()? as Float / count as Float))
    }

    /// 一次遍历：每个元素先映射为`(和, 个数)`，再合并。
    pub fn average_single_pass(&self) -> StreamRes<Option<Float>> {
        let running = self.map_to_obj(RunningAverage::single).fold(RunningAverage::default(), RunningAverage::merge)?;
        Ok(running.average())
    }

    pub fn find_first(&self) -> StreamRes<Option<Integer>> {
        self.pipe.find_first()
    }

    pub fn to_vec(&self) -> StreamRes<Vec<Integer>> {
        self.pipe.to_vec()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RunningAverage {
    sum: Integer,
    count: Integer,
}

impl RunningAverage {
    fn single(value: Integer) -> Self {
        RunningAverage { sum: value, count: 1 }
    }

    fn merge(self, other: Self) -> Self {
        RunningAverage { sum: self.sum.wrapping_add(other.sum), count: self.count + other.count }
    }

    fn average(self) -> Option<Float> {
        (self.count != 0).then(|| self.sum as Float / self.count as Float)
    }
}
