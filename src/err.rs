use crate::println_err;
use std::process::{ExitCode, Termination};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum StreamErr {
    #[error("[Cursor] No more elements available, check `has_next` before requesting the next element")]
    EndOfSequence,

    #[error("[Gather] Element `{element}` is left without a pairing partner")]
    UnpairedElement { element: String },

    #[error("[Arg Parse Err] Unable to parse `{arg_value}` in argument `{arg}` of cmd `{cmd}`, error: {error}")]
    ArgParseErr { cmd: &'static str, arg: &'static str, arg_value: String, error: String },

    #[error("[Missing Arg] Missing argument `{arg}` of cmd `{cmd}`")]
    MissingArg { cmd: &'static str, arg: &'static str },

    #[error("[Missing Arg] At least one value for argument `{arg}` is required for cmd `{cmd}`")]
    ArgNotEnough { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Closing bracket (`]`) for argument `{arg}` is required for cmd `{cmd}`")]
    UnclosingMultiArg { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unexpected closing bracket of argument `{arg}` for cmd `{cmd}`")]
    UnexpectedClosingBracket { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unknown arguments: {args:?}")]
    UnknownArgs { args: Vec<String> },

    #[error("[Missing Input] An input such as `:of`, `:range` or `:iterate` is required, found: {found:?}")]
    MissingInput { found: Option<String> },

    #[error("[Bad Regex] Invalid regular expression `{reg}`: {err}")]
    ParseRegexErr { reg: String, err: String },
}

impl Termination for StreamErr {
    fn report(self) -> ExitCode {
        println_err!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl StreamErr {
    pub fn termination(self) -> ! {
        let exit_code = self.exit_code();
        self.report();
        std::process::exit(exit_code as i32);
    }

    fn exit_code(&self) -> u8 {
        match self {
            StreamErr::EndOfSequence => 1,
            StreamErr::UnpairedElement { .. } => 2,
            StreamErr::ArgParseErr { .. } => 3,
            StreamErr::MissingArg { .. } => 4,
            StreamErr::ArgNotEnough { .. } => 5,
            StreamErr::UnclosingMultiArg { .. } => 6,
            StreamErr::UnexpectedClosingBracket { .. } => 7,
            StreamErr::UnknownArgs { .. } => 8,
            StreamErr::MissingInput { .. } => 9,
            StreamErr::ParseRegexErr { .. } => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_distinct() {
        let errs = [
            StreamErr::EndOfSequence,
            StreamErr::UnpairedElement { element: "1".to_string() },
            StreamErr::ArgParseErr { cmd: ":skip", arg: "count", arg_value: "x".to_string(), error: String::new() },
            StreamErr::MissingArg { cmd: ":skip", arg: "count" },
            StreamErr::ArgNotEnough { cmd: ":of", arg: "values" },
            StreamErr::UnclosingMultiArg { cmd: ":of", arg: "values" },
            StreamErr::UnexpectedClosingBracket { cmd: ":of", arg: "values" },
            StreamErr::UnknownArgs { args: vec![] },
            StreamErr::MissingInput { found: None },
            StreamErr::ParseRegexErr { reg: "(".to_string(), err: String::new() },
        ];
        let codes = errs.iter().map(StreamErr::exit_code).collect::<Vec<_>>();
        assert_eq!(codes, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            StreamErr::UnpairedElement { element: "3".to_string() }.to_string(),
            "[Gather] Element `3` is left without a pairing partner"
        );
        assert_eq!(
            StreamErr::MissingArg { cmd: ":limit", arg: "count" }.to_string(),
            "[Missing Arg] Missing argument `count` of cmd `:limit`"
        );
    }
}
