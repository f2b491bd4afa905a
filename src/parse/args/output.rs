use crate::output::Output;
use crate::parse::args::consume_if;
use simple_stream::StreamErr;
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_output(
    args: &mut Peekable<impl Iterator<Item = String>>,
) -> Result<Output, StreamErr> {
    if consume_if(args, |s| s.eq_ignore_ascii_case("to")).is_none() {
        return Ok(Output::Print); // 默认打印
    }
    let value = args.next().ok_or(StreamErr::MissingArg { cmd: "to", arg: "output" })?;
    match value.to_ascii_lowercase().as_str() {
        "print" => Ok(Output::Print),
        "sum" => Ok(Output::Sum),
        "product" => Ok(Output::Product),
        "count" => Ok(Output::Count),
        "avg" => Ok(Output::new_average(consume_if(args, |s| s.eq_ignore_ascii_case("once")).is_some())),
        "first" => Ok(Output::First),
        "sort" => Ok(Output::Sort),
        _ => Err(StreamErr::ArgParseErr {
            cmd: "to",
            arg: "output",
            arg_value: value,
            error: "expected one of `print`, `sum`, `product`, `count`, `avg`, `first`, `sort`".to_string(),
        }),
    }
}
