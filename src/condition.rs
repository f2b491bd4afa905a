use cmd_help::CmdHelp;
use regex::Regex;
use simple_stream::{Integer, StreamErr};

/// 条件
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Condition {
    Yes(Select),
    No(Select),
}

impl Condition {
    pub(crate) fn test(&self, input: Integer) -> bool {
        match self {
            Condition::Yes(select) => select.select(input),
            Condition::No(select) => !select.select(input),
        }
    }
}

/// 选择
#[derive(Debug, Clone, CmdHelp)]
pub(crate) enum Select {
    /// [!]even
    ///     选择偶数，支持可选否定。
    /// [!]odd
    ///     选择奇数，支持可选否定。
    Parity { even: bool },
    /// [!]num [<min>],[<max>]
    ///     按照数值范围选择，闭区间，最小值和最大值至少指定其一，支持可选否定。
    ///     例如：
    ///         num 2,5
    ///         num -2,
    ///         num ,5
    ///         !num 1,5
    NumRange { min: Option<Integer>, max: Option<Integer> },
    /// [!]num <spec>
    ///     按照特定值选择，支持可选否定。
    ///     例如：
    ///         num 3
    ///         !num -3
    NumSpec { spec: Integer },
    /// [!]mul <n>
    ///     选择<n>的倍数，<n>不能为0，支持可选否定。
    ///     例如：
    ///         mul 3
    ///         !mul 5
    Multiple { of: Integer },
    /// [!]reg <exp>
    ///     选择十进制形式完整匹配给定正则表达式的数据，支持可选否定。
    ///     <exp>   正则表达式，必选。
    ///     例如：
    ///         reg '1\d*'
    ///         !reg '.*7.*'
    RegMatch { regex: Regex },
}

impl PartialEq for Select {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Select::Parity { even: l }, Select::Parity { even: r }) => l == r,
            (Select::NumRange { min: l_min, max: l_max }, Select::NumRange { min: r_min, max: r_max }) => {
                l_min == r_min && l_max == r_max
            }
            (Select::NumSpec { spec: l }, Select::NumSpec { spec: r }) => l == r,
            (Select::Multiple { of: l }, Select::Multiple { of: r }) => l == r,
            // Regex 比较模式字符串
            (Select::RegMatch { regex: l }, Select::RegMatch { regex: r }) => l.as_str() == r.as_str(),
            _ => false,
        }
    }
}

impl Select {
    pub(crate) fn new_reg_match(regex: &str) -> Result<Select, StreamErr> {
        let reg = format!(r"\A(?:{})\z", regex);
        Regex::new(&reg)
            .map(|regex| Select::RegMatch { regex })
            .map_err(|err| StreamErr::ParseRegexErr { reg, err: err.to_string() })
    }

    pub(crate) fn yes(self) -> Condition {
        Condition::Yes(self)
    }

    pub(crate) fn no(self) -> Condition {
        Condition::No(self)
    }

    fn select(&self, input: Integer) -> bool {
        match self {
            Select::Parity { even } => (input % 2 == 0) == *even,
            Select::NumRange { min, max } => {
                min.map_or(true, |min| input >= min) && max.map_or(true, |max| input <= max)
            }
            Select::NumSpec { spec } => input == *spec,
            Select::Multiple { of } => input.wrapping_rem(*of) == 0,
            Select::RegMatch { regex } => regex.is_match(&input.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity() {
        let even = Select::Parity { even: true };
        assert!(even.clone().yes().test(4));
        assert!(even.clone().yes().test(0));
        assert!(!even.clone().yes().test(-3));
        assert!(even.no().test(-3));
        assert!(Select::Parity { even: false }.yes().test(-1));
    }

    #[test]
    fn test_num_range() {
        let range = Select::NumRange { min: Some(2), max: Some(5) };
        assert!(!range.clone().yes().test(1));
        assert!(range.clone().yes().test(2));
        assert!(range.clone().yes().test(5));
        assert!(!range.clone().yes().test(6));
        assert!(range.no().test(6));
        assert!(Select::NumRange { min: None, max: Some(0) }.yes().test(Integer::MIN));
        assert!(Select::NumRange { min: Some(0), max: None }.yes().test(Integer::MAX));
    }

    #[test]
    fn test_num_spec_and_multiple() {
        assert!(Select::NumSpec { spec: -3 }.yes().test(-3));
        assert!(Select::NumSpec { spec: -3 }.no().test(3));
        assert!(Select::Multiple { of: 3 }.yes().test(-9));
        assert!(!Select::Multiple { of: 3 }.yes().test(10));
        assert!(Select::Multiple { of: -1 }.yes().test(Integer::MIN));
    }

    #[test]
    fn test_reg_match() {
        let starts_with_one = Select::new_reg_match(r"1\d*").unwrap();
        assert!(starts_with_one.clone().yes().test(1));
        assert!(starts_with_one.clone().yes().test(123));
        assert!(!starts_with_one.clone().yes().test(21));
        assert!(!starts_with_one.yes().test(-1));
        // 完整匹配
        assert!(!Select::new_reg_match("2").unwrap().yes().test(22));
        assert!(matches!(Select::new_reg_match("("), Err(StreamErr::ParseRegexErr { .. })));
    }

    #[test]
    fn test_help() {
        assert_eq!(Select::all_help().len(), 5);
        assert!(Select::Parity { even: true }.help().starts_with("[!]even"));
        assert_eq!(Select::Multiple { of: 2 }.name(), "Multiple");
    }
}
