use crate::condition::{Condition, Select};
use crate::parse::args::parse_next_with;
use crate::parse::token::{parse_multiple, parse_num_select};
use simple_stream::StreamErr;
use std::iter::Peekable;

/// 解析条件：`[!]even`、`[!]odd`、`[!]num <arg>`、`[!]mul <n>`、`[!]reg <exp>`。
pub(in crate::parse::args) fn parse_cond(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str,
) -> Result<Condition, StreamErr> {
    let value = args.next().ok_or(StreamErr::MissingArg { cmd, arg: "cond" })?;
    let (not, name) = match value.strip_prefix('!') {
        Some(name) => (true, name.to_ascii_lowercase()),
        None => (false, value.to_ascii_lowercase()),
    };
    let select = match name.as_str() {
        "even" => Select::Parity { even: true },
        "odd" => Select::Parity { even: false },
        "num" => parse_next_with(args, cmd, "num", parse_num_select)?,
        "mul" => parse_next_with(args, cmd, "mul", parse_multiple)?,
        "reg" => Select::new_reg_match(&args.next().ok_or(StreamErr::MissingArg { cmd, arg: "reg" })?)?,
        _ => {
            return Err(StreamErr::ArgParseErr {
                cmd,
                arg: "cond",
                arg_value: value,
                error: "expected one of `even`, `odd`, `num`, `mul`, `reg`".to_string(),
            });
        }
    };
    Ok(if not { select.no() } else { select.yes() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::args::build_args;

    #[test]
    fn test_parse_parity() {
        assert_eq!(parse_cond(&mut build_args("even"), ":filter"), Ok(Select::Parity { even: true }.yes()));
        assert_eq!(parse_cond(&mut build_args("!odd"), ":filter"), Ok(Select::Parity { even: false }.no()));
        assert_eq!(parse_cond(&mut build_args("EVEN"), ":filter"), Ok(Select::Parity { even: true }.yes()));
    }

    #[test]
    fn test_parse_num_and_mul() {
        assert_eq!(
            parse_cond(&mut build_args("num 1,5"), ":filter"),
            Ok(Select::NumRange { min: Some(1), max: Some(5) }.yes())
        );
        assert_eq!(parse_cond(&mut build_args("!num -2"), ":filter"), Ok(Select::NumSpec { spec: -2 }.no()));
        assert_eq!(parse_cond(&mut build_args("mul 3"), ":takewhile"), Ok(Select::Multiple { of: 3 }.yes()));
        assert!(matches!(
            parse_cond(&mut build_args("mul 0"), ":filter"),
            Err(StreamErr::ArgParseErr { cmd: ":filter", arg: "mul", .. })
        ));
        assert_eq!(
            parse_cond(&mut build_args("num"), ":filter"),
            Err(StreamErr::MissingArg { cmd: ":filter", arg: "num" })
        );
    }

    #[test]
    fn test_parse_reg() {
        assert_eq!(
            parse_cond(&mut build_args(r"reg 1\d*"), ":filter"),
            Ok(Select::new_reg_match(r"1\d*").unwrap().yes())
        );
        assert!(matches!(parse_cond(&mut build_args("reg ("), ":filter"), Err(StreamErr::ParseRegexErr { .. })));
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            parse_cond(&mut build_args("upper"), ":filter"),
            Err(StreamErr::ArgParseErr { arg: "cond", .. })
        ));
        assert_eq!(
            parse_cond(&mut build_args(""), ":filter"),
            Err(StreamErr::MissingArg { cmd: ":filter", arg: "cond" })
        );
    }
}
