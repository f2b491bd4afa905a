use crate::input::Input;
use crate::parse::args::{parse_arg_or_arg1, parse_next_with, parse_value};
use crate::parse::token::{parse_arith, parse_bounds, parse_integer, parse_range};
use simple_stream::StreamErr;
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_input(
    args: &mut Peekable<impl Iterator<Item = String>>,
) -> Result<Input, StreamErr> {
    let cmd: &'static str = match args.peek() {
        Some(cmd) => match cmd.to_ascii_lowercase().as_str() {
            ":of" => ":of",
            ":range" => ":range",
            ":iterate" => ":iterate",
            ":repeat" => ":repeat",
            ":random" => ":random",
            _ => return Err(StreamErr::MissingInput { found: Some(cmd.clone()) }),
        },
        None => return Err(StreamErr::MissingInput { found: None }),
    };
    args.next(); // 消耗命令
    match cmd {
        ":of" => parse_of(args),
        ":range" => parse_range_input(args),
        ":iterate" => parse_iterate(args),
        ":repeat" => parse_repeat(args),
        _ => parse_random(args),
    }
}

fn parse_of(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, StreamErr> {
    let values = parse_arg_or_arg1(args, ":of", "values")?
        .into_iter()
        .map(|value| parse_value(":of", "values", value, parse_integer))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Input::new_of(values))
}

fn parse_range_input(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, StreamErr> {
    let (start, end, closed) = parse_next_with(args, ":range", "range", parse_range)?;
    Ok(Input::new_range(start, end, closed))
}

fn parse_iterate(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, StreamErr> {
    let seed = parse_next_with(args, ":iterate", "seed", parse_integer)?;
    let step = parse_next_with(args, ":iterate", "arith", parse_arith)?;
    Ok(Input::new_iterate(seed, step))
}

fn parse_repeat(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, StreamErr> {
    Ok(Input::new_repeat(parse_next_with(args, ":repeat", "value", parse_integer)?))
}

fn parse_random(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, StreamErr> {
    let (min, max) = parse_next_with(args, ":random", "bounds", parse_bounds)?;
    Ok(Input::new_random(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::Arith;
    use crate::parse::args::build_args;

    #[test]
    fn test_parse_of() {
        let mut args = build_args(":of 3");
        assert_eq!(parse_input(&mut args), Ok(Input::new_of(vec![3])));
        assert!(args.next().is_none());

        let mut args = build_args(":OF [ 3 -1 2 ] to");
        assert_eq!(parse_input(&mut args), Ok(Input::new_of(vec![3, -1, 2])));
        assert_eq!(args.next(), Some("to".to_string()));

        let mut args = build_args(":of [ 3 x ]");
        assert!(matches!(
            parse_input(&mut args),
            Err(StreamErr::ArgParseErr { cmd: ":of", arg: "values", arg_value, .. }) if arg_value == "x"
        ));
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_input(&mut build_args(":range 0,10")), Ok(Input::new_range(0, 10, false)));
        assert_eq!(parse_input(&mut build_args(":range -3,=3")), Ok(Input::new_range(-3, 3, true)));
        assert_eq!(
            parse_input(&mut build_args(":range")),
            Err(StreamErr::MissingArg { cmd: ":range", arg: "range" })
        );
        assert!(parse_input(&mut build_args(":range 0")).is_err());
    }

    #[test]
    fn test_parse_generators() {
        assert_eq!(parse_input(&mut build_args(":iterate 1 *2")), Ok(Input::new_iterate(1, Arith::Mul(2))));
        assert_eq!(
            parse_input(&mut build_args(":iterate 1")),
            Err(StreamErr::MissingArg { cmd: ":iterate", arg: "arith" })
        );
        assert!(parse_input(&mut build_args(":iterate 1 /0")).is_err());
        assert_eq!(parse_input(&mut build_args(":repeat -7")), Ok(Input::new_repeat(-7)));
        assert_eq!(parse_input(&mut build_args(":random 1,6")), Ok(Input::new_random(1, 6)));
        assert!(parse_input(&mut build_args(":random 6,1")).is_err());
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(parse_input(&mut build_args("")), Err(StreamErr::MissingInput { found: None }));
        assert_eq!(
            parse_input(&mut build_args(":map +1")),
            Err(StreamErr::MissingInput { found: Some(":map".to_string()) })
        );
    }
}
