use crate::arith::Arith;
use cmd_help::CmdHelp;
use rand::Rng;
use simple_stream::{IntPipe, Integer};
use std::cell::RefCell;

#[derive(Debug, Clone, Eq, PartialEq, CmdHelp)]
pub(crate) enum Input {
    /// :of         使用直接字面值作为输入。
    ///             :of <int>|[ <int>[ <int>][...] ]
    ///                 <int>   整数字面值，至少指定一个，多个时使用中括号包围。
    ///             例如：
    ///                 :of 3
    ///                 :of [ 3 1 2 ]
    Of { values: Vec<Integer> },
    /// :range      生成指定范围内的整数作为输入。
    ///             :range <start>,[=]<end>
    ///                 <start> 起始值，包含，必选。
    ///                 <end>   结束值，默认不包含，以'='开头时包含，必选。
    ///                         如果范围为空（起始值不小于结束值），则无数据生成。
    ///             例如：
    ///                 :range 0,10     生成：0 1 2 3 4 5 6 7 8 9
    ///                 :range 0,=10    生成：0 1 2 3 4 5 6 7 8 9 10
    ///                 :range 10,0     无数据生成
    Range { start: Integer, end: Integer, closed: bool },
    /// :iterate    从种子开始反复执行运算，生成无限序列。
    ///             :iterate <seed> <arith>
    ///                 <seed>  种子，即第一个值，必选。
    ///                 <arith> 每一步的运算，格式参考`-h`中的运算说明，必选。
    ///             例如：
    ///                 :iterate 1 *2   生成：1 2 4 8 16 ...
    ///                 :iterate 10 -3  生成：10 7 4 1 -2 ...
    Iterate { seed: Integer, step: Arith },
    /// :repeat     无限重复同一个值。
    ///             :repeat <int>
    Repeat { value: Integer },
    /// :random     无限生成闭区间内的随机整数。
    ///             :random <min>,<max>
    ///                 <min>   最小值，包含，必选。
    ///                 <max>   最大值，包含，必选，不能小于<min>。
    Random { min: Integer, max: Integer },
}

impl Input {
    pub(crate) fn new_of(values: Vec<Integer>) -> Input {
        Input::Of { values }
    }
    pub(crate) fn new_range(start: Integer, end: Integer, closed: bool) -> Input {
        Input::Range { start, end, closed }
    }
    pub(crate) fn new_iterate(seed: Integer, step: Arith) -> Input {
        Input::Iterate { seed, step }
    }
    pub(crate) fn new_repeat(value: Integer) -> Input {
        Input::Repeat { value }
    }
    pub(crate) fn new_random(min: Integer, max: Integer) -> Input {
        Input::Random { min, max }
    }

    pub(crate) fn pipe(&self) -> IntPipe {
        match self {
            Input::Of { values } => IntPipe::of(values.clone()),
            Input::Range { start, end, closed } => {
                if *closed {
                    IntPipe::range_closed(*start, *end)
                } else {
                    IntPipe::range(*start, *end)
                }
            }
            Input::Iterate { seed, step } => {
                let step = *step;
                IntPipe::iterate(*seed, move |x| step.apply(x))
            }
            Input::Repeat { value } => {
                let value = *value;
                IntPipe::generate(move || value)
            }
            Input::Random { min, max } => {
                let (min, max) = (*min, *max);
                let rng = RefCell::new(rand::rng());
                IntPipe::generate(move || rng.borrow_mut().random_range(min..=max))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_inputs() {
        assert_eq!(Input::new_of(vec![3, 1, 2]).pipe().to_vec(), Ok(vec![3, 1, 2]));
        assert_eq!(Input::new_range(0, 4, false).pipe().to_vec(), Ok(vec![0, 1, 2, 3]));
        assert_eq!(Input::new_range(0, 4, true).pipe().to_vec(), Ok(vec![0, 1, 2, 3, 4]));
        assert_eq!(Input::new_range(4, 0, true).pipe().count(), Ok(0));
    }

    #[test]
    fn test_infinite_inputs() {
        assert_eq!(Input::new_iterate(1, Arith::Mul(2)).pipe().limit(5).to_vec(), Ok(vec![1, 2, 4, 8, 16]));
        assert_eq!(Input::new_repeat(7).pipe().limit(3).to_vec(), Ok(vec![7, 7, 7]));
        let randoms = Input::new_random(-2, 2).pipe().limit(50).to_vec().unwrap();
        assert_eq!(randoms.len(), 50);
        assert!(randoms.iter().all(|x| (-2..=2).contains(x)));
        assert_eq!(Input::new_random(5, 5).pipe().limit(2).to_vec(), Ok(vec![5, 5]));
    }
}
