use crate::parse::token::{ParserError, parse_integer};
use nom::character::complete::char;
use nom::combinator::{map, opt, verify};
use nom::error::context;
use nom::sequence::separated_pair;
use nom::{IResult, Parser};
use simple_stream::Integer;

/// `<start>,[=]<end>`，输出`(start, end, closed)`。
pub(crate) fn parse_range(input: &str) -> IResult<&str, (Integer, Integer, bool), ParserError<'_>> {
    context(
        "range",
        map(
            (
                context("range::<start>", parse_integer),
                char(','),
                opt(char('=')),
                context("range::<end>", parse_integer),
            ),
            |(start, _, closed, end)| (start, end, closed.is_some()),
        ),
    )
    .parse(input)
}

/// `<min>,<max>`，要求`min <= max`。
pub(crate) fn parse_bounds(input: &str) -> IResult<&str, (Integer, Integer), ParserError<'_>> {
    context(
        "bounds",
        verify(separated_pair(parse_integer, char(','), parse_integer), |(min, max): &(Integer, Integer)| min <= max),
    )
    .parse(input)
}
