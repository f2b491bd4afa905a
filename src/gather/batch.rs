use crate::StreamRes;
use crate::gather::{Downstream, Gatherer};
use std::num::NonZeroUsize;

/// 按固定大小分组，上游结束时输出最后不足一组的元素。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    size: usize,
}

impl Batch {
    pub fn new(size: NonZeroUsize) -> Batch {
        Batch { size: size.get() }
    }

    /// `size`为0时返回`None`。
    pub fn try_new(size: usize) -> Option<Batch> {
        NonZeroUsize::new(size).map(Batch::new)
    }
}

impl<T> Gatherer<T> for Batch {
    type State = Vec<T>;
    type Output = Vec<T>;

    fn initialize(&self) -> Vec<T> {
        Vec::with_capacity(self.size)
    }

    fn integrate(&self, chunk: &mut Vec<T>, element: T, downstream: &mut Downstream<Vec<T>>) -> StreamRes<bool> {
        chunk.push(element);
        if chunk.len() == self.size {
            downstream.push(std::mem::replace(chunk, Vec::with_capacity(self.size)));
        }
        Ok(true)
    }

    fn finish(&self, chunk: &mut Vec<T>, downstream: &mut Downstream<Vec<T>>) -> StreamRes<()> {
        if !chunk.is_empty() {
            downstream.push(std::mem::take(chunk));
        }
        Ok(())
    }
}
