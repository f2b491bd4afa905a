//! 有状态的中间操作（Gatherer）。
//!
//! 一个Gatherer由三部分组成：
//!
//! - `initialize`：每次遍历创建一份全新的状态；
//! - `integrate`：处理一个上游元素，向下游输出零个或多个元素，并返回是否继续拉取上游；
//! - `finish`：上游耗尽（或`integrate`要求停止）后调用且只调用一次，可以继续输出残留元素或报错。
//!
//! 状态只属于单次遍历，通过`&mut`在每次调用之间传递，遍历结束时随游标一起丢弃。

mod batch;
mod distinct;
mod pair;
mod take_drop;

pub use batch::Batch;
pub use distinct::Distinct;
pub use pair::{Marked, PairUp, Paired, Store};
pub use take_drop::{TakeDrop, TakeDropMode};

use crate::StreamRes;
use crate::cursor::{BoxCursor, Cursor};
use crate::err::StreamErr;
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::rc::Rc;

pub trait Gatherer<T> {
    /// 单次遍历的可变状态
    type State;
    /// 输出到下游的元素类型
    type Output;

    fn initialize(&self) -> Self::State;

    /// 返回`false`表示不再需要上游元素，随后会直接进入`finish`。
    fn integrate(&self, state: &mut Self::State, element: T, downstream: &mut Downstream<Self::Output>)
    -> StreamRes<bool>;

    fn finish(&self, _state: &mut Self::State, _downstream: &mut Downstream<Self::Output>) -> StreamRes<()> {
        Ok(())
    }
}

/// Gatherer向下游输出元素的通道，输出的元素按顺序等待下游拉取。
pub struct Downstream<R> {
    pending: VecDeque<R>,
}

impl<R> Downstream<R> {
    fn new() -> Self {
        Downstream { pending: VecDeque::new() }
    }

    pub fn push(&mut self, item: R) {
        self.pending.push_back(item);
    }

    fn pop(&mut self) -> Option<R> {
        self.pending.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Integrating,
    Stopped,
    Finished,
}

pub(crate) struct GatherCursor<T, G: Gatherer<T>> {
    upstream: BoxCursor<T>,
    gatherer: Rc<G>,
    state: G::State,
    downstream: Downstream<G::Output>,
    phase: Phase,
}

impl<T, G: Gatherer<T>> GatherCursor<T, G> {
    pub(crate) fn new(upstream: BoxCursor<T>, gatherer: Rc<G>) -> Self {
        let state = gatherer.initialize();
        GatherCursor { upstream, gatherer, state, downstream: Downstream::new(), phase: Phase::Integrating }
    }
}

impl<T, G: Gatherer<T>> Cursor for GatherCursor<T, G> {
    type Item = G::Output;

    fn has_next(&mut self) -> StreamRes<bool> {
        // 只拉取到下游至少有一个待输出元素为止
        while self.downstream.is_empty() {
            let phase = self.phase;
            match phase {
                Phase::Finished => return Ok(false),
                Phase::Integrating if self.upstream.has_next()? => {
                    let element = self.upstream.next_item()?;
                    if !self.gatherer.integrate(&mut self.state, element, &mut self.downstream)? {
                        self.phase = Phase::Stopped;
                    }
                }
                Phase::Integrating | Phase::Stopped => {
                    // 先标记结束，finish失败时也不会被再次调用
                    self.phase = Phase::Finished;
                    self.gatherer.finish(&mut self.state, &mut self.downstream)?;
                }
            }
        }
        Ok(true)
    }

    fn next_item(&mut self) -> StreamRes<G::Output> {
        self.has_next()?;
        self.downstream.pop().ok_or(StreamErr::EndOfSequence)
    }
}

/// 由三个闭包组成的Gatherer，参考[`from_fn`]。
pub struct FnGatherer<S, R, I, N, F> {
    initializer: I,
    integrator: N,
    finisher: F,
    _marker: PhantomData<fn() -> (S, R)>,
}

impl<T, S, R, I, N, F> Gatherer<T> for FnGatherer<S, R, I, N, F>
where
    I: Fn() -> S,
    N: Fn(&mut S, T, &mut Downstream<R>) -> StreamRes<bool>,
    F: Fn(&mut S, &mut Downstream<R>) -> StreamRes<()>,
{
    type State = S;
    type Output = R;

    fn initialize(&self) -> S {
        (self.initializer)()
    }

    fn integrate(&self, state: &mut S, element: T, downstream: &mut Downstream<R>) -> StreamRes<bool> {
        (self.integrator)(state, element, downstream)
    }

    fn finish(&self, state: &mut S, downstream: &mut Downstream<R>) -> StreamRes<()> {
        (self.finisher)(state, downstream)
    }
}

/// 用闭包快速定义一个Gatherer。
///
/// ```ignore
/// // 相邻差值：[1, 4, 9, 16] => [3, 5, 7]
/// let diffs = gather::from_fn(
///     || None,
///     |prev: &mut Option<i64>, x: i64, down: &mut Downstream<i64>| {
///         if let Some(p) = prev.replace(x) {
///             down.push(x - p);
///         }
///         Ok(true)
///     },
///     |_, _| Ok(()),
/// );
/// ```
pub fn from_fn<T, S, R, I, N, F>(initializer: I, integrator: N, finisher: F) -> FnGatherer<S, R, I, N, F>
where
    I: Fn() -> S,
    N: Fn(&mut S, T, &mut Downstream<R>) -> StreamRes<bool>,
    F: Fn(&mut S, &mut Downstream<R>) -> StreamRes<()>,
{
    FnGatherer { initializer, integrator, finisher, _marker: PhantomData }
}
