//! 基于整数流水线的冒泡排序演示。
//!
//! 每一趟用一次`reduce`完成相邻元素的比较交换，直到某一趟没有任何交换为止。

use crate::{IntPipe, StreamRes};

/// 一趟冒泡的结果。
#[derive(Clone)]
pub struct Pass {
    /// 本趟是否发生过交换
    pub changed: bool,
    pub ints: IntPipe,
}

/// 执行一趟冒泡：较大的元素被带向末尾，其余元素按顺序输出。
pub fn bubble(ints: &IntPipe) -> StreamRes<Pass> {
    let mut changed = false;
    let mut result = Vec::new();
    let last = ints.reduce(|x, y| {
        if x > y {
            changed = true;
            result.push(y);
            x
        } else {
            result.push(x);
            y
        }
    })?;
    result.extend(last);
    Ok(Pass { changed, ints: IntPipe::of(result) })
}

pub fn bubblesort(ints: &IntPipe) -> StreamRes<IntPipe> {
    let mut pass = Pass { changed: true, ints: ints.clone() };
    while pass.changed {
        pass = bubble(&pass.ints)?;
    }
    Ok(pass.ints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Integer;
    use itertools::Itertools;

    fn sorted(values: &[Integer]) -> Vec<Integer> {
        bubblesort(&IntPipe::of(values.to_vec())).and_then(|ints| ints.to_vec()).unwrap()
    }

    #[test]
    fn test_bubblesort_small() {
        assert_eq!(sorted(&[]), Vec::<Integer>::new());
        assert_eq!(sorted(&[1]), vec![1]);
        assert_eq!(sorted(&[1, 2]), vec![1, 2]);
        assert_eq!(sorted(&[2, 1]), vec![1, 2]);
    }

    #[test]
    fn test_bubblesort_permutations() {
        for perm in [1, 2, 3].into_iter().permutations(3) {
            assert_eq!(sorted(&perm), vec![1, 2, 3], "{perm:?}");
        }
        assert_eq!(sorted(&[3, 1, 2]), vec![1, 2, 3]);
    }

    #[test]
    fn test_bubblesort_duplicates_and_negatives() {
        let values = [5, -3, 5, 0, -3, 12, 7];
        assert_eq!(sorted(&values), values.iter().copied().sorted().collect_vec());
    }

    #[test]
    fn test_single_pass() {
        let pass = bubble(&IntPipe::of([3, 1, 2])).unwrap();
        assert!(pass.changed);
        assert_eq!(pass.ints.to_vec(), Ok(vec![1, 2, 3]));
        let pass = bubble(&pass.ints).unwrap();
        assert!(!pass.changed);

        let pass = bubble(&IntPipe::empty()).unwrap();
        assert!(!pass.changed);
        assert_eq!(pass.ints.count(), Ok(0));
    }

    #[test]
    fn test_sort_lazy_source() {
        let ints = IntPipe::iterate(7, |x| (x * 5 + 3) % 11).limit(6);
        let expected = ints.to_vec().unwrap().into_iter().sorted().collect_vec();
        assert_eq!(bubblesort(&ints).and_then(|ints| ints.to_vec()), Ok(expected));
    }
}
