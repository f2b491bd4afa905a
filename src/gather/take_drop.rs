use crate::StreamRes;
use crate::gather::{Downstream, Gatherer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TakeDropMode {
    /// 持续保留，直到条件首次不满足，随后停止拉取上游
    TakeWhile,
    /// 持续丢弃，直到条件首次不满足，随后全部保留
    DropWhile,
}

pub struct TakeDrop<P> {
    mode: TakeDropMode,
    predicate: P,
}

impl<P> TakeDrop<P> {
    pub fn new(mode: TakeDropMode, predicate: P) -> Self {
        TakeDrop { mode, predicate }
    }
}

impl<T, P: Fn(&T) -> bool> Gatherer<T> for TakeDrop<P> {
    /// 是否仍处于开头满足条件的区间
    type State = bool;
    type Output = T;

    fn initialize(&self) -> bool {
        true
    }

    fn integrate(&self, leading: &mut bool, element: T, downstream: &mut Downstream<T>) -> StreamRes<bool> {
        match self.mode {
            TakeDropMode::TakeWhile => {
                if (self.predicate)(&element) {
                    downstream.push(element);
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            TakeDropMode::DropWhile => {
                if *leading && (self.predicate)(&element) {
                    return Ok(true);
                }
                *leading = false;
                downstream.push(element);
                Ok(true)
            }
        }
    }
}
