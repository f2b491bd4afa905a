use crate::condition::Select;
use crate::parse::token::{ParserError, non_zero_integer, parse_integer};
use nom::branch::alt;
use nom::character::complete::char;
use nom::combinator::{map, opt, verify};
use nom::error::context;
use nom::{IResult, Parser};
use simple_stream::Integer;

/// `num`的参数：`[<min>],[<max>]`范围（至少指定其一）或特定值`<spec>`。
pub(crate) fn parse_num_select(input: &str) -> IResult<&str, Select, ParserError<'_>> {
    alt((
        context(
            "Select::NumRange",
            map(
                verify(
                    (opt(parse_integer), char(','), opt(parse_integer)),
                    |(min, _, max): &(Option<Integer>, char, Option<Integer>)| min.is_some() || max.is_some(),
                ),
                |(min, _, max)| Select::NumRange { min, max },
            ),
        ),
        context("Select::NumSpec", map(parse_integer, |spec| Select::NumSpec { spec })),
    ))
    .parse(input)
}

/// `mul`的参数：非零整数。
pub(crate) fn parse_multiple(input: &str) -> IResult<&str, Select, ParserError<'_>> {
    context("Select::Multiple", map(non_zero_integer, |of| Select::Multiple { of })).parse(input)
}
