//! # 命令执行模块
//!
//! 实现重命名流程的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `matcher/`, `utils/`
//! - 子模块: rename

pub mod rename;

use crate::cli::Cli;
use crate::error::Result;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// 运行期选项（输出详细程度与中断标志）
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub verbose: bool,
    pub quiet: bool,
    pub interrupted: Arc<AtomicBool>,
}

/// 执行命令
pub fn run(cli: Cli, interrupted: Arc<AtomicBool>) -> Result<()> {
    let opts = RunOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        interrupted,
    };
    rename::execute(cli.rename, &opts)
}
