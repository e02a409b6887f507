//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! `renmv [OPTIONS] <SOURCE> <PATTERN> <REPLACEMENT> <DESTINATION>`
//!
//! 参数个数不对时由 `clap` 打印用法并以非零状态退出。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: rename

pub mod rename;

use clap::Parser;

/// renmv - 按正则表达式批量重命名并移动文件
#[derive(Parser, Debug)]
#[command(name = "renmv")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Rename files matching a regular expression and move them into a destination directory",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub rename: rename::RenameArgs,

    /// Print every move as it is applied
    #[arg(short, long, default_value_t = false, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Do not list the planned renames (the count and prompt are still shown)
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Disable coloured output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}
