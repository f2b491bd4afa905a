use crate::op::Op;
use crate::parse::args::condition::parse_cond;
use crate::parse::args::{parse_count, parse_next_with};
use crate::parse::token::parse_arith;
use simple_stream::StreamErr;
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_ops(
    args: &mut Peekable<impl Iterator<Item = String>>,
) -> Result<Vec<Op>, StreamErr> {
    let mut ops = vec![];
    while let Some(op) = parse_op(args)? {
        ops.push(op);
    }
    Ok(ops)
}

fn parse_op(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, StreamErr> {
    let Some(cmd) = args.peek() else {
        return Ok(None);
    };
    let cmd: &'static str = match cmd.to_ascii_lowercase().as_str() {
        ":peek" => ":peek",
        ":map" => ":map",
        ":filter" => ":filter",
        ":skip" => ":skip",
        ":limit" => ":limit",
        ":distinct" => ":distinct",
        ":takewhile" => ":takewhile",
        ":dropwhile" => ":dropwhile",
        _ => return Ok(None),
    };
    args.next(); // 消耗命令
    let op = match cmd {
        ":peek" => Op::Peek,
        ":map" => Op::new_map(parse_next_with(args, cmd, "arith", parse_arith)?),
        ":filter" => Op::new_filter(parse_cond(args, cmd)?),
        ":skip" => Op::new_skip(parse_count(args, cmd)?),
        ":limit" => Op::new_limit(parse_count(args, cmd)?),
        ":distinct" => Op::Distinct,
        ":takewhile" => Op::new_take_while(parse_cond(args, cmd)?),
        _ => Op::new_drop_while(parse_cond(args, cmd)?),
    };
    Ok(Some(op))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::Arith;
    use crate::condition::Select;
    use crate::parse::args::build_args;

    #[test]
    fn test_non_match() {
        let mut args = build_args("to sum");
        assert_eq!(Ok(None), parse_op(&mut args));
        assert_eq!(Some("to".to_string()), args.next());
    }

    #[test]
    fn test_parse_ops() {
        let mut args =
            build_args(":peek :map -1 :filter !mul 3 :skip 2 :limit 5 :distinct :TakeWhile odd :dropwhile num ,9");
        assert_eq!(
            parse_ops(&mut args),
            Ok(vec![
                Op::Peek,
                Op::new_map(Arith::Sub(1)),
                Op::new_filter(Select::Multiple { of: 3 }.no()),
                Op::new_skip(2),
                Op::new_limit(5),
                Op::Distinct,
                Op::new_take_while(Select::Parity { even: false }.yes()),
                Op::new_drop_while(Select::NumRange { min: None, max: Some(9) }.yes()),
            ])
        );
        assert!(args.next().is_none());
    }

    #[test]
    fn test_parse_op_errors() {
        assert_eq!(parse_op(&mut build_args(":map")), Err(StreamErr::MissingArg { cmd: ":map", arg: "arith" }));
        assert!(matches!(parse_op(&mut build_args(":map x2")), Err(StreamErr::ArgParseErr { cmd: ":map", .. })));
        assert_eq!(parse_op(&mut build_args(":limit")), Err(StreamErr::MissingArg { cmd: ":limit", arg: "count" }));
        assert_eq!(parse_op(&mut build_args(":filter")), Err(StreamErr::MissingArg { cmd: ":filter", arg: "cond" }));
    }
}
