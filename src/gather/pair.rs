use crate::StreamRes;
use crate::err::StreamErr;
use crate::gather::{Downstream, Gatherer};
use std::fmt::Debug;

/// 配对的输入：布尔标记或普通值。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marked<T> {
    Marker(bool),
    Value(T),
}

/// 配对的输出：透传的布尔标记或相邻两个普通值组成的对。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paired<T> {
    Marker(bool),
    Pair(T, T),
}

/// 配对状态，最多暂存一个尚未配对的值。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Store<T> {
    Empty,
    Holding(T),
}

impl<T> Store<T> {
    fn take(&mut self) -> Store<T> {
        std::mem::replace(self, Store::Empty)
    }
}

/// 将普通值两两配对：
///
/// - 标记到达且没有暂存值：直接透传；
/// - 标记到达但有暂存值：报错，标记不能打断一个未完成的配对；
/// - 普通值到达且没有暂存值：暂存，不输出；
/// - 普通值到达且有暂存值：输出`(暂存值, 当前值)`并清空暂存；
/// - 上游结束时仍有暂存值：报错。
#[derive(Debug, Clone, Copy, Default)]
pub struct PairUp;

impl<T: Debug> Gatherer<Marked<T>> for PairUp {
    type State = Store<T>;
    type Output = Paired<T>;

    fn initialize(&self) -> Store<T> {
        Store::Empty
    }

    fn integrate(
        &self, store: &mut Store<T>, element: Marked<T>, downstream: &mut Downstream<Paired<T>>,
    ) -> StreamRes<bool> {
        match element {
            Marked::Marker(flag) => match store {
                Store::Empty => downstream.push(Paired::Marker(flag)),
                Store::Holding(pending) => return Err(unpaired(pending)),
            },
            Marked::Value(value) => match store.take() {
                Store::Empty => *store = Store::Holding(value),
                Store::Holding(prev) => downstream.push(Paired::Pair(prev, value)),
            },
        }
        Ok(true)
    }

    fn finish(&self, store: &mut Store<T>, _downstream: &mut Downstream<Paired<T>>) -> StreamRes<()> {
        match store {
            Store::Empty => Ok(()),
            Store::Holding(pending) => Err(unpaired(pending)),
        }
    }
}

fn unpaired<T: Debug>(element: &T) -> StreamErr {
    StreamErr::UnpairedElement { element: format!("{element:?}") }
}
