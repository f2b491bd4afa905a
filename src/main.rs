use crate::condition::Select;
use crate::config::Config;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use itertools::Itertools;
use simple_stream::{StreamErr, println_info, println_notice};

mod arith;
mod condition;
mod config;
mod input;
mod op;
mod output;
mod parse;

fn main() {
    if let Err(e) = run() {
        e.termination();
    }
}

fn run() -> Result<(), StreamErr> {
    let mut args = std::env::args().skip(1).peekable();
    let configs = parse::args::parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        print_help();
        return Ok(());
    }
    if configs.contains(&Config::Version) {
        println!("sst {} (built {})", env!("CARGO_PKG_VERSION"), env!("SST_BUILD_TIME"));
        return Ok(());
    }
    let (input, ops, output) =
        if configs.contains(&Config::Eval) { parse_eval_token(&mut args)? } else { parse::args::parse(args)? };
    let verbose = configs.contains(&Config::Verbose);
    if verbose {
        println_notice!("Input:\n    {:?}", input);
        println_notice!("Op:\n{}", ops.iter().map(|op| format!("    {:?}", op)).join("\n"));
        println_notice!("Output:\n    {:?}", output);
    }
    if configs.contains(&Config::DryRun) {
        return Ok(());
    }
    let mut ints = input.pipe();
    for (index, op) in ops.iter().enumerate() {
        ints = op.wrap(ints);
        if verbose {
            // 追踪每个操作输出的值
            let name = op.name();
            ints = ints.peek(move |x| println_notice!("[{index}] {name} -> {x}"));
        }
    }
    output.handle(ints)
}

/// `--eval`之后的整段文本按参数切分，再按参数模式解析。
fn parse_eval_token(args: &mut impl Iterator<Item = String>) -> Result<(Input, Vec<Op>, Output), StreamErr> {
    let token = args.next().ok_or(StreamErr::MissingArg { cmd: "--eval", arg: "tokens" })?;
    let remaining = args.collect::<Vec<_>>();
    if !remaining.is_empty() {
        return Err(StreamErr::UnknownArgs { args: remaining });
    }
    match parse::token::split_args(&token) {
        Ok(split) => parse::args::parse(split.into_iter().peekable()),
        Err(error) => Err(StreamErr::ArgParseErr { cmd: "--eval", arg: "tokens", arg_value: token, error }),
    }
}

fn print_help() {
    println_info!(r#"Usage: sst [-h|-V|-v|-d|--eval "<tokens>"] <input> [<op>...] [to <output>]"#);
    print_section("Input", Input::all_help());
    print_section("Op", Op::all_help());
    print_section("Output", Output::all_help());
    print_section("Condition", Select::all_help());
}

fn print_section(title: &str, helps: &[(&str, &str)]) {
    println_info!("\n{}:", title);
    for (_, help) in helps {
        for line in help.lines() {
            println!("    {line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::Arith;

    fn eval_args(args: &[&str]) -> std::vec::IntoIter<String> {
        args.iter().map(|arg| arg.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_eval_token() {
        assert_eq!(
            parse_eval_token(&mut eval_args(&[":of [ 3 1 ] :map +1 to sum"])),
            Ok((Input::new_of(vec![3, 1]), vec![Op::new_map(Arith::Add(1))], Output::Sum))
        );
        assert_eq!(
            parse_eval_token(&mut eval_args(&[r#" :range 0,10 :filter "!even" "#])),
            Ok((
                Input::new_range(0, 10, false),
                vec![Op::new_filter(Select::Parity { even: true }.no())],
                Output::Print
            ))
        );
    }

    #[test]
    fn test_eval_token_errors() {
        assert_eq!(
            parse_eval_token(&mut eval_args(&[])),
            Err(StreamErr::MissingArg { cmd: "--eval", arg: "tokens" })
        );
        assert_eq!(
            parse_eval_token(&mut eval_args(&[":of 1", "to", "sum"])),
            Err(StreamErr::UnknownArgs { args: vec!["to".to_string(), "sum".to_string()] })
        );
        assert!(matches!(
            parse_eval_token(&mut eval_args(&[":of '3'x"])),
            Err(StreamErr::ArgParseErr { cmd: "--eval", arg: "tokens", arg_value, .. }) if arg_value == ":of '3'x"
        ));
        // 切分成功后按参数模式解析
        assert_eq!(
            parse_eval_token(&mut eval_args(&[":map +1"])),
            Err(StreamErr::MissingInput { found: Some(":map".to_string()) })
        );
        assert_eq!(
            parse_eval_token(&mut eval_args(&[":of 1 extra"])),
            Err(StreamErr::UnknownArgs { args: vec!["extra".to_string()] })
        );
    }
}
