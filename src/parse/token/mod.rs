//! 基于nom的值解析器，以及`--eval`模式下的参数切分。

mod condition;
mod input;
mod op;

pub(crate) use condition::{parse_multiple, parse_num_select};
pub(crate) use input::{parse_bounds, parse_range};
pub(crate) use op::parse_arith;

use nom::branch::alt;
use nom::bytes::complete::{take_until, take_while1};
use nom::character::complete::{char, i64, space0, space1};
use nom::combinator::{eof, map, verify};
use nom::error::context;
use nom::multi::separated_list0;
use nom::sequence::{delimited, terminated};
use nom::{Err, IResult, Parser};
use nom_language::error::{VerboseError, convert_error};
use simple_stream::Integer;

pub(crate) type ParserError<'a> = VerboseError<&'a str>;

/// 单个参数：单引号或双引号包围的任意文本，或不含空白的连续文本。
pub(crate) fn arg(input: &str) -> IResult<&str, String, ParserError<'_>> {
    context(
        "arg",
        map(
            alt((
                delimited(char('"'), take_until("\""), char('"')),  // 双引号
                delimited(char('\''), take_until("'"), char('\'')), // 单引号
                take_while1(|c: char| !c.is_whitespace()),
            )),
            |arg: &str| arg.to_string(),
        ),
    )
    .parse(input)
}

pub(crate) fn parse_integer(input: &str) -> IResult<&str, Integer, ParserError<'_>> {
    context("integer", i64).parse(input)
}

/// 将`--eval`的整段文本切分为参数列表，参数之间以空白分隔。
pub(crate) fn split_args(input: &str) -> Result<Vec<String>, String> {
    parse_whole(delimited(space0, separated_list0(space1, arg), space0), input)
}

/// 要求解析器消耗全部输入，失败时给出带位置的错误说明。
pub(crate) fn parse_whole<'a, O, P>(parser: P, input: &'a str) -> Result<O, String>
where
    P: Parser<&'a str, Output = O, Error = ParserError<'a>>,
{
    match terminated(parser, eof).parse(input) {
        Ok((_, output)) => Ok(output),
        Err(Err::Error(err)) | Err(Err::Failure(err)) => Err(convert_error(input, err)),
        Err(Err::Incomplete(_)) => Err("incomplete input".to_string()),
    }
}

/// 非零整数，用于除数、取余和倍数。
pub(crate) fn non_zero_integer(input: &str) -> IResult<&str, Integer, ParserError<'_>> {
    context("non-zero integer", verify(parse_integer, |n: &Integer| *n != 0)).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg() {
        assert_eq!(arg("hello"), Ok(("", "hello".to_string())));
        assert_eq!(arg("hello world"), Ok((" world", "hello".to_string())));
        assert_eq!(arg(r#""a b" c"#), Ok((" c", "a b".to_string())));
        assert_eq!(arg("'1\\d*'"), Ok(("", "1\\d*".to_string())));
        assert!(arg(" x").is_err());
        assert!(arg("").is_err());
    }

    #[test]
    fn test_split_args() {
        assert_eq!(
            split_args(":range 0,10  :filter even to sum"),
            Ok(vec![":range", "0,10", ":filter", "even", "to", "sum"].into_iter().map(String::from).collect())
        );
        assert_eq!(
            split_args(r#" :of [ 1 2 ] :filter reg "1 2" "#),
            Ok(vec![":of", "[", "1", "2", "]", ":filter", "reg", "1 2"].into_iter().map(String::from).collect())
        );
        assert_eq!(split_args(""), Ok(vec![]));
        // 引号参数之后必须是空白
        assert!(split_args(":of '3'x").is_err());
    }

    #[test]
    fn test_parse_whole() {
        assert_eq!(parse_whole(parse_integer, "-42"), Ok(-42));
        assert!(parse_whole(parse_integer, "42x").is_err());
        assert!(parse_whole(parse_integer, "").is_err());
        assert!(parse_whole(non_zero_integer, "0").is_err());
        assert_eq!(parse_whole(non_zero_integer, "-1"), Ok(-1));
    }
}
