use crate::err::StreamErr;
use crate::{Integer, StreamRes};
use std::iter::Peekable;
use std::rc::Rc;

/// 单次使用、有状态的遍历游标。
///
/// 游标由流水线的工厂按需创建，只服务于一次求值，用完即丢弃，不能在两次求值之间共享。
/// `has_next`可能需要向上游预取元素（例如过滤），因此同样可能失败。
pub trait Cursor {
    type Item;

    /// 是否还有下一个元素。
    fn has_next(&mut self) -> StreamRes<bool>;

    /// 产出下一个元素，已耗尽时返回[`StreamErr::EndOfSequence`]。
    fn next_item(&mut self) -> StreamRes<Self::Item>;
}

pub type BoxCursor<T> = Box<dyn Cursor<Item = T>>;

/// 将游标适配为标准迭代器，遇到第一个错误后不再产出。
pub struct CursorIter<T> {
    cursor: BoxCursor<T>,
    failed: bool,
}

impl<T> CursorIter<T> {
    pub(crate) fn new(cursor: BoxCursor<T>) -> Self {
        CursorIter { cursor, failed: false }
    }
}

impl<T> Iterator for CursorIter<T> {
    type Item = StreamRes<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let res = match self.cursor.has_next() {
            Ok(true) => self.cursor.next_item(),
            Ok(false) => return None,
            Err(err) => Err(err),
        };
        self.failed = res.is_err();
        Some(res)
    }
}

/* **************************************** 源 **************************************** */

pub(crate) struct OfCursor<T> {
    values: Rc<[T]>,
    index: usize,
}

impl<T> OfCursor<T> {
    pub(crate) fn new(values: Rc<[T]>) -> Self {
        OfCursor { values, index: 0 }
    }
}

impl<T: Clone> Cursor for OfCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> StreamRes<bool> {
        Ok(self.index < self.values.len())
    }

    fn next_item(&mut self) -> StreamRes<T> {
        let value = self.values.get(self.index).cloned().ok_or(StreamErr::EndOfSequence)?;
        self.index += 1;
        Ok(value)
    }
}

/// 半开区间`[next, end)`
pub(crate) struct RangeCursor {
    next: Integer,
    end: Integer,
}

impl RangeCursor {
    pub(crate) fn new(start: Integer, end: Integer) -> Self {
        RangeCursor { next: start, end }
    }
}

impl Cursor for RangeCursor {
    type Item = Integer;

    fn has_next(&mut self) -> StreamRes<bool> {
        Ok(self.next < self.end)
    }

    fn next_item(&mut self) -> StreamRes<Integer> {
        if self.next < self.end {
            let value = self.next;
            self.next += 1;
            Ok(value)
        } else {
            Err(StreamErr::EndOfSequence)
        }
    }
}

/// 无限序列：seed, f(seed), f(f(seed)), ...
pub(crate) struct IterateCursor<T> {
    current: T,
    step: Rc<dyn Fn(&T) -> T>,
    started: bool,
}

impl<T> IterateCursor<T> {
    pub(crate) fn new(seed: T, step: Rc<dyn Fn(&T) -> T>) -> Self {
        IterateCursor { current: seed, step, started: false }
    }
}

impl<T: Clone> Cursor for IterateCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> StreamRes<bool> {
        Ok(true)
    }

    fn next_item(&mut self) -> StreamRes<T> {
        // 首个元素直接返回种子，之后才应用步进函数
        if self.started {
            self.current = (self.step)(&self.current);
        } else {
            self.started = true;
        }
        Ok(self.current.clone())
    }
}

pub(crate) struct GenerateCursor<T> {
    supplier: Rc<dyn Fn() -> T>,
}

impl<T> GenerateCursor<T> {
    pub(crate) fn new(supplier: Rc<dyn Fn() -> T>) -> Self {
        GenerateCursor { supplier }
    }
}

impl<T> Cursor for GenerateCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> StreamRes<bool> {
        Ok(true)
    }

    fn next_item(&mut self) -> StreamRes<T> {
        Ok((self.supplier)())
    }
}

/// 标准迭代器到游标的适配，借助`Peekable`实现`has_next`。
pub(crate) struct IterCursor<I: Iterator> {
    iter: Peekable<I>,
}

impl<I: Iterator> IterCursor<I> {
    pub(crate) fn new(iter: I) -> Self {
        IterCursor { iter: iter.peekable() }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> StreamRes<bool> {
        Ok(self.iter.peek().is_some())
    }

    fn next_item(&mut self) -> StreamRes<I::Item> {
        self.iter.next().ok_or(StreamErr::EndOfSequence)
    }
}

/* **************************************** 中间操作 **************************************** */

pub(crate) struct MapCursor<T, R> {
    upstream: BoxCursor<T>,
    mapper: Rc<dyn Fn(T) -> R>,
}

impl<T, R> MapCursor<T, R> {
    pub(crate) fn new(upstream: BoxCursor<T>, mapper: Rc<dyn Fn(T) -> R>) -> Self {
        MapCursor { upstream, mapper }
    }
}

impl<T, R> Cursor for MapCursor<T, R> {
    type Item = R;

    fn has_next(&mut self) -> StreamRes<bool> {
        self.upstream.has_next()
    }

    fn next_item(&mut self) -> StreamRes<R> {
        self.upstream.next_item().map(|item| (self.mapper)(item))
    }
}

/// 过滤，最多预取并缓存一个满足条件的元素。
pub(crate) struct FilterCursor<T> {
    upstream: BoxCursor<T>,
    predicate: Rc<dyn Fn(&T) -> bool>,
    pending: Option<T>,
}

impl<T> FilterCursor<T> {
    pub(crate) fn new(upstream: BoxCursor<T>, predicate: Rc<dyn Fn(&T) -> bool>) -> Self {
        FilterCursor { upstream, predicate, pending: None }
    }
}

impl<T> Cursor for FilterCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> StreamRes<bool> {
        if self.pending.is_none() {
            while self.upstream.has_next()? {
                let item = self.upstream.next_item()?;
                if (self.predicate)(&item) {
                    self.pending = Some(item);
                    break;
                }
            }
        }
        Ok(self.pending.is_some())
    }

    fn next_item(&mut self) -> StreamRes<T> {
        self.has_next()?;
        self.pending.take().ok_or(StreamErr::EndOfSequence)
    }
}

/// 跳过前N个元素，跳过动作在首次访问时执行且只执行一次。
pub(crate) struct SkipCursor<T> {
    upstream: BoxCursor<T>,
    remaining: usize,
    skipped: bool,
}

impl<T> SkipCursor<T> {
    pub(crate) fn new(upstream: BoxCursor<T>, count: usize) -> Self {
        SkipCursor { upstream, remaining: count, skipped: false }
    }

    fn skip_once(&mut self) -> StreamRes<()> {
        if !self.skipped {
            self.skipped = true;
            while self.remaining > 0 && self.upstream.has_next()? {
                self.upstream.next_item()?;
                self.remaining -= 1;
            }
        }
        Ok(())
    }
}

impl<T> Cursor for SkipCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> StreamRes<bool> {
        self.skip_once()?;
        self.upstream.has_next()
    }

    fn next_item(&mut self) -> StreamRes<T> {
        self.skip_once()?;
        self.upstream.next_item()
    }
}

/// 最多产出N个元素；达到上限后不再访问上游。
pub(crate) struct LimitCursor<T> {
    upstream: BoxCursor<T>,
    limit: usize,
    emitted: usize,
}

impl<T> LimitCursor<T> {
    pub(crate) fn new(upstream: BoxCursor<T>, limit: usize) -> Self {
        LimitCursor { upstream, limit, emitted: 0 }
    }
}

impl<T> Cursor for LimitCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> StreamRes<bool> {
        Ok(self.emitted < self.limit && self.upstream.has_next()?)
    }

    fn next_item(&mut self) -> StreamRes<T> {
        if self.emitted >= self.limit {
            return Err(StreamErr::EndOfSequence);
        }
        let item = self.upstream.next_item()?;
        self.emitted += 1;
        Ok(item)
    }
}
