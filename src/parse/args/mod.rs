use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use crate::parse::args::input::parse_input;
use crate::parse::args::op::parse_ops;
use crate::parse::args::output::parse_output;
use crate::parse::token::{ParserError, parse_whole};
use nom::Parser;
use simple_stream::StreamErr;
use std::iter::Peekable;

mod condition;
mod config;
mod input;
mod op;
mod output;

pub(crate) use config::parse_configs;

pub(crate) fn parse(mut args: Peekable<impl Iterator<Item = String>>) -> Result<(Input, Vec<Op>, Output), StreamErr> {
    let input = parse_input(&mut args)?;
    let ops = parse_ops(&mut args)?;
    let output = parse_output(&mut args)?;
    let remaining = args.collect::<Vec<_>>();
    if !remaining.is_empty() { Err(StreamErr::UnknownArgs { args: remaining }) } else { Ok((input, ops, output)) }
}

fn parse_arg_or_arg1(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<Vec<String>, StreamErr> {
    match args.next() {
        // 至少有一个值，直接消耗
        Some(value) => {
            if value == "[" {
                // 多值开始
                let mut values = Vec::new();
                for value in args.by_ref() {
                    if value == "]" {
                        // 多值结束
                        return if values.is_empty() { Err(StreamErr::ArgNotEnough { cmd, arg }) } else { Ok(values) };
                    } else {
                        values.push(value)
                    }
                }
                Err(StreamErr::UnclosingMultiArg { cmd, arg })
            } else if value == "]" {
                // 未开启的多值结束
                Err(StreamErr::UnexpectedClosingBracket { cmd, arg })
            } else {
                Ok(vec![value])
            }
        }
        None => Err(StreamErr::MissingArg { cmd, arg }),
    }
}

/// 消耗下一个参数并用nom解析器完整解析。
fn parse_next_with<O, P>(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str, parser: P,
) -> Result<O, StreamErr>
where
    P: for<'s> Parser<&'s str, Output = O, Error = ParserError<'s>>,
{
    let value = args.next().ok_or(StreamErr::MissingArg { cmd, arg })?;
    parse_value(cmd, arg, value, parser)
}

fn parse_value<O, P>(cmd: &'static str, arg: &'static str, value: String, parser: P) -> Result<O, StreamErr>
where
    P: for<'s> Parser<&'s str, Output = O, Error = ParserError<'s>>,
{
    match parse_whole(parser, &value) {
        Ok(output) => Ok(output),
        Err(error) => Err(StreamErr::ArgParseErr { cmd, arg, arg_value: value, error }),
    }
}

fn parse_count(args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str) -> Result<usize, StreamErr> {
    let value = args.next().ok_or(StreamErr::MissingArg { cmd, arg: "count" })?;
    value.parse::<usize>().map_err(|err| StreamErr::ArgParseErr {
        cmd,
        arg: "count",
        arg_value: value,
        error: err.to_string(),
    })
}

fn consume_if<F>(args: &mut Peekable<impl Iterator<Item = String>>, f: F) -> Option<String>
where
    F: FnOnce(&String) -> bool,
{
    args.next_if(f)
}

#[cfg(test)]
fn build_args(args_line: &'static str) -> Peekable<impl Iterator<Item = String>> {
    args_line.split(' ').filter(|s| !s.is_empty()).map(String::from).peekable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::Arith;
    use crate::condition::Select;

    #[test]
    fn test_parse_whole_line() {
        assert_eq!(
            parse(build_args(":range 0,=10 :filter even :map ^2 to sum")),
            Ok((
                Input::new_range(0, 10, true),
                vec![Op::new_filter(Select::Parity { even: true }.yes()), Op::new_map(Arith::Pow(2))],
                Output::Sum
            ))
        );
        assert_eq!(parse(build_args(":of 3")), Ok((Input::new_of(vec![3]), vec![], Output::Print)));
    }

    #[test]
    fn test_parse_unknown_remaining() {
        assert_eq!(
            parse(build_args(":of 3 to sum extra")),
            Err(StreamErr::UnknownArgs { args: vec!["extra".to_string()] })
        );
        assert_eq!(
            parse(build_args(":of 3 :upper")),
            Err(StreamErr::UnknownArgs { args: vec![":upper".to_string()] })
        );
    }

    #[test]
    fn test_parse_arg_or_arg1() {
        let mut args = build_args("1 [ 2 3 ] [ ] ]");
        assert_eq!(parse_arg_or_arg1(&mut args, ":of", "values"), Ok(vec!["1".to_string()]));
        assert_eq!(parse_arg_or_arg1(&mut args, ":of", "values"), Ok(vec!["2".to_string(), "3".to_string()]));
        assert_eq!(
            parse_arg_or_arg1(&mut args, ":of", "values"),
            Err(StreamErr::ArgNotEnough { cmd: ":of", arg: "values" })
        );
        assert_eq!(
            parse_arg_or_arg1(&mut args, ":of", "values"),
            Err(StreamErr::UnexpectedClosingBracket { cmd: ":of", arg: "values" })
        );
        assert_eq!(
            parse_arg_or_arg1(&mut args, ":of", "values"),
            Err(StreamErr::MissingArg { cmd: ":of", arg: "values" })
        );

        let mut args = build_args("[ 1 2");
        assert_eq!(
            parse_arg_or_arg1(&mut args, ":of", "values"),
            Err(StreamErr::UnclosingMultiArg { cmd: ":of", arg: "values" })
        );
    }

    #[test]
    fn test_parse_count() {
        let mut args = build_args("3 -1");
        assert_eq!(parse_count(&mut args, ":skip"), Ok(3));
        assert!(matches!(parse_count(&mut args, ":skip"), Err(StreamErr::ArgParseErr { cmd: ":skip", .. })));
        assert_eq!(parse_count(&mut args, ":skip"), Err(StreamErr::MissingArg { cmd: ":skip", arg: "count" }));
    }
}
