//! # renmv - 按正则表达式批量重命名并移动文件
//!
//! 扫描源目录树，找出文件名匹配模式的文件，按替换模板计算新文件名，
//! 并移动到目标目录，自动避免重名。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/    (收集、规划、执行)
//!   │     ├── matcher/  (正则匹配与替换)
//!   │     └── models/   (数据模型)
//!   ├── utils/      (输出、进度条、确认提示)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod matcher;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let interrupted = Arc::new(AtomicBool::new(false));

    if let Err(e) = commands::run(cli, interrupted) {
        utils::output::print_error(&e.chain());
        std::process::exit(1);
    }
}
