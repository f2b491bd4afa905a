use cmd_help::CmdHelp;
use simple_stream::bubble::bubblesort;
use simple_stream::{IntPipe, StreamRes};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Eq, PartialEq, CmdHelp)]
pub(crate) enum Output {
    /// to print    逐行打印每个值到标准输出。
    ///             未指定输出时的默认输出。
    Print,
    /// to sum      打印全部值的和，溢出时回绕。
    Sum,
    /// to product  打印全部值的积，溢出时回绕。
    Product,
    /// to count    打印值的个数。
    Count,
    /// to avg      打印全部值的平均值，没有任何值时不打印。
    ///             to avg[ once]
    ///                 once    只遍历一次输入，同时累计和与个数，可选。
    ///                         未指定时先计数再求和，共遍历两次。
    Average { single_pass: bool },
    /// to first    打印第一个值，没有任何值时不打印。
    First,
    /// to sort     冒泡排序后逐行打印，输入必须有限。
    Sort,
}

impl Output {
    pub(crate) fn new_average(single_pass: bool) -> Output {
        Output::Average { single_pass }
    }

    pub(crate) fn handle(self, ints: IntPipe) -> StreamRes<()> {
        self.render(ints, |line| println!("{line}"))
    }

    /// 求值并将结果逐行交给`line`，没有结果时不调用。
    fn render(self, ints: IntPipe, mut line: impl FnMut(&dyn Display)) -> StreamRes<()> {
        match self {
            Output::Print => render_all(&ints, line),
            Output::Sum => ints.sum().map(|sum| line(&sum)),
            Output::Product => ints.product().map(|product| line(&product)),
            Output::Count => ints.count().map(|count| line(&count)),
            Output::Average { single_pass } => {
                let average = if single_pass { ints.average_single_pass()? } else { ints.average()? };
                average.iter().for_each(|average| line(average));
                Ok(())
            }
            Output::First => ints.find_first().map(|first| first.iter().for_each(|first| line(first))),
            Output::Sort => render_all(&bubblesort(&ints)?, line),
        }
    }
}

fn render_all(ints: &IntPipe, mut line: impl FnMut(&dyn Display)) -> StreamRes<()> {
    for x in ints.iter() {
        line(&x?);
    }
    Ok(())
}
