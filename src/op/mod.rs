use crate::arith::Arith;
use crate::condition::Condition;
use cmd_help::CmdHelp;
use simple_stream::IntPipe;

#[derive(Debug, Clone, PartialEq, CmdHelp)]
pub(crate) enum Op {
    /* **************************************** 访问 **************************************** */
    /// :peek       打印每个经过的值到标准输出。
    Peek,
    /* **************************************** 转换 **************************************** */
    /// :map        对每个值执行一次运算。
    ///             :map <arith>
    ///                 <arith> 运算，格式为运算符紧跟操作数，必选：
    ///                         +n  加    -n  减    *n  乘
    ///                         /n  整除  %n  取余  ^n  乘方
    ///                         其中除数不能为0，乘方的指数必须为非负数，溢出时回绕。
    ///             例如：
    ///                 :map *2
    ///                 :map ^2
    ///                 :map %7
    Map { arith: Arith },
    /* **************************************** 减少 **************************************** */
    /// :filter     保留满足条件的值。
    ///             :filter <cond>
    ///                 <cond>  条件，格式参考`-h`中的条件说明，必选。
    ///             例如：
    ///                 :filter even
    ///                 :filter !num 3,5
    ///                 :filter reg '1\d*'
    Filter { cond: Condition },
    /// :skip       丢弃前N个数据，保留后续的其他数据。
    ///             :skip <count>
    ///                 <count> 需要丢弃的数量，必须为非负整数，必选。
    Skip { count: usize },
    /// :limit      保留前N个数据，丢弃后续的其他数据，可用于截断无限输入。
    ///             :limit <count>
    ///                 <count> 需要保留的数量，必须为非负整数，必选。
    Limit { count: usize },
    /// :distinct   去重，保留首次出现的值。
    Distinct,
    /// :takewhile  保留开头连续满足条件的值，遇到第一个不满足条件的值后结束。
    ///             :takewhile <cond>
    TakeWhile { cond: Condition },
    /// :dropwhile  丢弃开头连续满足条件的值，保留之后的全部值。
    ///             :dropwhile <cond>
    DropWhile { cond: Condition },
}

impl Op {
    pub(crate) fn new_map(arith: Arith) -> Op {
        Op::Map { arith }
    }
    pub(crate) fn new_filter(cond: Condition) -> Op {
        Op::Filter { cond }
    }
    pub(crate) fn new_skip(count: usize) -> Op {
        Op::Skip { count }
    }
    pub(crate) fn new_limit(count: usize) -> Op {
        Op::Limit { count }
    }
    pub(crate) fn new_take_while(cond: Condition) -> Op {
        Op::TakeWhile { cond }
    }
    pub(crate) fn new_drop_while(cond: Condition) -> Op {
        Op::DropWhile { cond }
    }

    pub(crate) fn wrap(&self, ints: IntPipe) -> IntPipe {
        match self {
            Op::Peek => ints.peek(|x| println!("{x}")),
            Op::Map { arith } => {
                let arith = *arith;
                ints.map(move |x| arith.apply(x))
            }
            Op::Filter { cond } => {
                let cond = cond.clone();
                ints.filter(move |x| cond.test(x))
            }
            Op::Skip { count } => ints.skip(*count),
            Op::Limit { count } => ints.limit(*count),
            Op::Distinct => ints.distinct(),
            Op::TakeWhile { cond } => {
                let cond = cond.clone();
                ints.take_while(move |x| cond.test(x))
            }
            Op::DropWhile { cond } => {
                let cond = cond.clone();
                ints.drop_while(move |x| cond.test(x))
            }
        }
    }
}
