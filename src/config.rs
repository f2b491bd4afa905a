#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Config {
    /// 帮助 `-h`
    Help,
    /// 版本 `-V`
    Version,
    /// 打印流水线信息并追踪每个操作的输出 `-v`
    Verbose,
    /// 仅解析，不执行 `-d`
    DryRun,
    /// 以Token模式解析下一个参数 `--eval`
    Eval,
}
