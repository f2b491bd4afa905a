use crate::cursor::{
    BoxCursor, CursorIter, FilterCursor, GenerateCursor, IterCursor, IterateCursor, LimitCursor, MapCursor, OfCursor,
    SkipCursor,
};
use crate::gather::{Batch, Distinct, GatherCursor, Gatherer, Marked, PairUp, Paired, TakeDrop, TakeDropMode};
use crate::int_pipe::IntPipe;
use crate::{Integer, StreamRes};
use std::cell::RefCell;
use std::fmt::Debug;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::rc::Rc;

/// 通用元素流水线。
///
/// 只保存一个创建游标的工厂，本身不可变；克隆只是增加工厂的引用计数。
/// 中间操作返回新的流水线，不会修改自身，因此同一个流水线可以被多次求值。
pub struct Pipe<T> {
    factory: Rc<dyn Fn() -> BoxCursor<T>>,
}

impl<T> Clone for Pipe<T> {
    fn clone(&self) -> Self {
        Pipe { factory: self.factory.clone() }
    }
}

impl<T: 'static> Pipe<T> {
    /// 由游标工厂直接构造，工厂每次调用都必须返回全新的游标。
    pub fn from_factory(factory: impl Fn() -> BoxCursor<T> + 'static) -> Pipe<T> {
        Pipe { factory: Rc::new(factory) }
    }

    /// 创建一条全新的游标链。
    pub fn cursor(&self) -> BoxCursor<T> {
        (self.factory)()
    }

    pub fn iter(&self) -> CursorIter<T> {
        CursorIter::new(self.cursor())
    }

    /* **************************************** 源 **************************************** */

    pub fn of(values: impl Into<Vec<T>>) -> Pipe<T>
    where
        T: Clone,
    {
        let values: Rc<[T]> = Rc::from(values.into());
        Pipe::from_factory(move || Box::new(OfCursor::new(values.clone())))
    }

    pub fn empty() -> Pipe<T> {
        Pipe::from_factory(|| Box::new(IterCursor::new(std::iter::empty())))
    }

    /// 无限流：seed, f(seed), f(f(seed)), ...
    pub fn iterate(seed: T, step: impl Fn(&T) -> T + 'static) -> Pipe<T>
    where
        T: Clone,
    {
        let step: Rc<dyn Fn(&T) -> T> = Rc::new(step);
        Pipe::from_factory(move || Box::new(IterateCursor::new(seed.clone(), step.clone())))
    }

    /// 无限流：每次拉取都调用一次`supplier`。
    pub fn generate(supplier: impl Fn() -> T + 'static) -> Pipe<T> {
        let supplier: Rc<dyn Fn() -> T> = Rc::new(supplier);
        Pipe::from_factory(move || Box::new(GenerateCursor::new(supplier.clone())))
    }

    /// 每次遍历都通过`factory`重新创建标准迭代器。
    pub fn from_iter_fn<I>(factory: impl Fn() -> I + 'static) -> Pipe<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Pipe::from_factory(move || Box::new(IterCursor::new(factory().into_iter())))
    }

    /* **************************************** 中间操作 **************************************** */

    pub fn filter(&self, predicate: impl Fn(&T) -> bool + 'static) -> Pipe<T> {
        let upstream = self.factory.clone();
        let predicate: Rc<dyn Fn(&T) -> bool> = Rc::new(predicate);
        Pipe::from_factory(move || Box::new(FilterCursor::new(upstream(), predicate.clone())))
    }

    pub fn map<R: 'static>(&self, mapper: impl Fn(T) -> R + 'static) -> Pipe<R> {
        let upstream = self.factory.clone();
        let mapper: Rc<dyn Fn(T) -> R> = Rc::new(mapper);
        Pipe::from_factory(move || Box::new(MapCursor::new(upstream(), mapper.clone())))
    }

    /// 元素被下游真正拉取时才执行`action`，每个元素恰好一次。
    pub fn peek(&self, action: impl Fn(&T) + 'static) -> Pipe<T> {
        self.map(move |item| {
            action(&item);
            item
        })
    }

    /// 跳过前`count`个元素，跳过动作推迟到首次访问游标时。
    pub fn skip(&self, count: usize) -> Pipe<T> {
        let upstream = self.factory.clone();
        Pipe::from_factory(move || Box::new(SkipCursor::new(upstream(), count)))
    }

    /// 最多保留前`count`个元素，且最多只从上游拉取`count`个元素，可用于截断无限流。
    pub fn limit(&self, count: usize) -> Pipe<T> {
        let upstream = self.factory.clone();
        Pipe::from_factory(move || Box::new(LimitCursor::new(upstream(), count)))
    }

    /// 挂载自定义的有状态中间操作，每次遍历都会重新初始化状态。
    pub fn gather<G>(&self, gatherer: G) -> Pipe<G::Output>
    where
        G: Gatherer<T> + 'static,
        G::State: 'static,
        G::Output: 'static,
    {
        let upstream = self.factory.clone();
        let gatherer = Rc::new(gatherer);
        Pipe::from_factory(move || Box::new(GatherCursor::new(upstream(), gatherer.clone())))
    }

    pub fn take_while(&self, predicate: impl Fn(&T) -> bool + 'static) -> Pipe<T> {
        self.gather(TakeDrop::new(TakeDropMode::TakeWhile, predicate))
    }

    pub fn drop_while(&self, predicate: impl Fn(&T) -> bool + 'static) -> Pipe<T> {
        self.gather(TakeDrop::new(TakeDropMode::DropWhile, predicate))
    }

    /// 按`size`个元素分组，最后不足一组的元素也会输出。
    pub fn batch(&self, size: NonZeroUsize) -> Pipe<Vec<T>> {
        self.gather(Batch::new(size))
    }

    /* **************************************** 类型桥接 **************************************** */

    pub fn map_to_int(&self, mapper: impl Fn(T) -> Integer + 'static) -> IntPipe {
        IntPipe::from(self.map(mapper))
    }

    /* **************************************** 终止操作 **************************************** */

    /// 从`identity`开始从左到右归约，空流直接返回`identity`。
    pub fn fold(&self, identity: T, mut op: impl FnMut(T, T) -> T) -> StreamRes<T> {
        let mut cursor = self.cursor();
        let mut result = identity;
        while cursor.has_next()? {
            result = op(result, cursor.next_item()?);
        }
        Ok(result)
    }

    /// 以首个元素为初值从左到右归约，空流返回`None`。
    pub fn reduce(&self, mut op: impl FnMut(T, T) -> T) -> StreamRes<Option<T>> {
        let mut cursor = self.cursor();
        if !cursor.has_next()? {
            return Ok(None);
        }
        let mut result = cursor.next_item()?;
        while cursor.has_next()? {
            result = op(result, cursor.next_item()?);
        }
        Ok(Some(result))
    }

    /// 按遍历顺序对每个元素执行一次`action`。
    ///
    /// `action`经由`peek`保存在流水线中，因此必须是`'static`：不能借用调用方的局部变量，
    /// 需要累计结果时使用`Rc<Cell<_>>`等共享所有权的容器，或者直接使用[`Pipe::iter`]。
    pub fn for_each(&self, action: impl FnMut(&T) + 'static) -> StreamRes<()> {
        let action = RefCell::new(action);
        self.peek(move |item| (&mut *action.borrow_mut())(item)).reduce(|first, _| first).map(|_| ())
    }

    pub fn find_first(&self) -> StreamRes<Option<T>> {
        self.limit(1).reduce(|first, _| first)
    }

    pub fn count(&self) -> StreamRes<Integer> {
        self.map_to_int(|_| 1).sum()
    }

    pub fn to_vec(&self) -> StreamRes<Vec<T>> {
        self.iter().collect()
    }
}

impl<T: Hash + Eq + Clone + 'static> Pipe<T> {
    pub fn distinct(&self) -> Pipe<T> {
        self.gather(Distinct::<T, fn(&T) -> T>::new())
    }
}

impl Pipe<String> {
    /// 忽略大小写去重，保留首次出现的原始写法。
    pub fn distinct_nocase(&self) -> Pipe<String> {
        self.gather(Distinct::nocase())
    }
}

impl<T: Debug + 'static> Pipe<Marked<T>> {
    /// 两两配对普通值，布尔标记原样透传，参考[`PairUp`]。
    pub fn pair_up(&self) -> Pipe<Paired<T>> {
        self.gather(PairUp)
    }
}
