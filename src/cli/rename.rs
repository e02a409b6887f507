//! # 重命名参数定义
//!
//! 四个位置参数：源目录、正则表达式、替换模板、目标目录。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use clap::Args;
use std::path::PathBuf;

/// 重命名参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Directory to scan recursively for matching files
    pub source: PathBuf,

    /// Regular expression matched (case-insensitively) against each file name
    pub pattern: String,

    /// Replacement template; back-references as \1, \g<1> or \g<name>; `$` is literal
    pub replacement: String,

    /// Directory receiving the renamed files (created if missing)
    pub destination: PathBuf,

    /// Apply without asking for confirmation
    #[arg(short = 'y', long, env = "RENMV_ASSUME_YES", default_value_t = false)]
    pub yes: bool,

    /// Only print the plan; never prompt or move anything
    #[arg(short = 'n', long, default_value_t = false)]
    pub dry_run: bool,

    /// Check collisions against the disk only, not against other files in the same batch
    #[arg(long, default_value_t = false)]
    pub allow_batch_collisions: bool,
}
