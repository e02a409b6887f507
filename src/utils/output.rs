//! # 终端输出
//!
//! 所有面向用户的状态行都带一个彩色标签，例如 `[*]`、`[WARN]`；
//! 错误写到 stderr，其余写到 stdout。
//!
//! ## 依赖关系
//! - 被 `commands/`、`batch/runner.rs` 和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};
use std::path::Path;

/// 状态行种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Info,
    Warn,
    Error,
    Skip,
    Done,
    Moved,
}

impl Status {
    fn tag(self) -> ColoredString {
        match self {
            Status::Info => "[*]".blue().bold(),
            Status::Warn => "[WARN]".yellow().bold(),
            Status::Error => "[ERR]".red().bold(),
            Status::Skip => "[SKIP]".dimmed(),
            Status::Done => "[DONE]".green().bold(),
            Status::Moved => "[OK]".green(),
        }
    }
}

fn emit(status: Status, msg: &str) {
    if status == Status::Error {
        eprintln!("{} {}", status.tag(), msg);
    } else {
        println!("{} {}", status.tag(), msg);
    }
}

pub fn print_info(msg: &str) {
    emit(Status::Info, msg);
}

pub fn print_warning(msg: &str) {
    emit(Status::Warn, msg);
}

pub fn print_error(msg: &str) {
    emit(Status::Error, msg);
}

pub fn print_skip(msg: &str) {
    emit(Status::Skip, msg);
}

pub fn print_done(msg: &str) {
    emit(Status::Done, msg);
}

/// 已完成的移动（完整路径）
pub fn print_moved(from: &Path, to: &Path) {
    emit(
        Status::Moved,
        &format!("{} {} {}", from.display().to_string().dimmed(), "->".cyan(), to.display()),
    );
}

/// 预览中的一行：`[ 1/12] old -> new`
pub fn print_planned(index: usize, total: usize, from: &str, to: &str) {
    let width = total.to_string().len();
    println!(
        "  {} {}  {}  {}",
        format!("[{:>width$}/{}]", index, total, width = width).dimmed(),
        from,
        "->".cyan(),
        to.bold()
    );
}

/// 运行参数概览
pub fn print_banner(source: &Path, pattern: &str, replacement: &str, destination: &Path) {
    let rule = "─".repeat(60);
    println!("\n{}", rule.dimmed());
    println!("  {} {}", "from   ".dimmed(), source.display());
    println!("  {} {}", "match  ".dimmed(), pattern.bold());
    println!("  {} {}", "rename ".dimmed(), replacement.bold());
    println!("  {} {}", "into   ".dimmed(), destination.display());
    println!("{}\n", rule.dimmed());
}
