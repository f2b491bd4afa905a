use crate::arith::Arith;
use crate::parse::token::{ParserError, non_zero_integer, parse_integer};
use nom::branch::alt;
use nom::character::complete::{char, u32};
use nom::combinator::map;
use nom::error::context;
use nom::sequence::preceded;
use nom::{IResult, Parser};

/// 运算符紧跟操作数：`+n -n *n /n %n ^n`。
pub(crate) fn parse_arith(input: &str) -> IResult<&str, Arith, ParserError<'_>> {
    context(
        "arith",
        alt((
            context("arith::+", map(preceded(char('+'), parse_integer), Arith::Add)),
            context("arith::-", map(preceded(char('-'), parse_integer), Arith::Sub)),
            context("arith::*", map(preceded(char('*'), parse_integer), Arith::Mul)),
            context("arith::/", map(preceded(char('/'), non_zero_integer), Arith::Div)),
            context("arith::%", map(preceded(char('%'), non_zero_integer), Arith::Rem)),
            context("arith::^", map(preceded(char('^'), u32), Arith::Pow)),
        )),
    )
    .parse(input)
}
