//! # 重命名命令实现
//!
//! 检查前置条件、规划、预览、确认并执行批量重命名与移动。
//!
//! ## 流程
//! 1. 检查源目录存在
//! 2. 编译模式（任何遍历之前）
//! 3. 规划并打印预览
//! 4. 请求确认（`--yes` 跳过，`--dry-run` 到此为止）
//! 5. 创建目标目录，逐个执行移动
//!
//! 确认之前不修改文件系统；目标目录也只在确认之后创建。
//! Ctrl-C 处理器在开始移动前才安装：此前 SIGINT 保持默认行为，直接终止进程。
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `batch/`, `matcher/`
//! - 使用 `utils/output.rs`, `utils/prompt.rs`

use super::RunOptions;
use crate::batch::{ApplyFailure, Executor, Planner};
use crate::cli::rename::RenameArgs;
use crate::error::{RenmvError, Result};
use crate::matcher::Matcher;
use crate::models::ActionList;
use crate::utils::{output, prompt};

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 执行重命名命令
pub fn execute(args: RenameArgs, opts: &RunOptions) -> Result<()> {
    output::print_banner(
        &args.source,
        &args.pattern,
        &args.replacement,
        &args.destination,
    );

    check_source(&args.source)?;
    check_destination(&args.destination)?;

    let matcher = Matcher::new(&args.pattern, &args.replacement)?;

    let actions = Planner::new(&args.source, &args.destination, &matcher)
        .reserve_in_batch(!args.allow_batch_collisions)
        .plan()?;

    output::print_info(&format!("{} file(s) matched", actions.len()));

    if actions.is_empty() {
        output::print_warning(&format!(
            "No files under '{}' match '{}'",
            args.source.display(),
            matcher.pattern()
        ));
        note_destination_not_created(&args.destination);
        return Ok(());
    }

    print_preview(&actions, opts.quiet);

    if args.dry_run {
        output::print_info("Dry run: no files were moved");
        note_destination_not_created(&args.destination);
        return Ok(());
    }

    if !args.yes && !prompt::confirm("Apply these changes?")? {
        output::print_info("Operation cancelled");
        note_destination_not_created(&args.destination);
        return Ok(());
    }

    fs::create_dir_all(&args.destination).map_err(|e| RenmvError::DirectoryCreateFailed {
        path: args.destination.display().to_string(),
        source: e,
    })?;

    install_interrupt_handler(&opts.interrupted);

    let executor = Executor::new()
        .with_interrupt(opts.interrupted.clone())
        .with_progress(true)
        .verbose(opts.verbose);

    match executor.apply(actions) {
        Ok(report) => {
            if report.copied() > 0 {
                output::print_info(&format!(
                    "{} file(s) were copied across devices and the originals removed",
                    report.copied()
                ));
            }
            output::print_done(&format!(
                "Renamed and moved {} file(s) into '{}'",
                report.moved(),
                args.destination.display()
            ));
            Ok(())
        }
        Err(failure) => {
            report_failure(&failure);
            Err(failure.into())
        }
    }
}

/// Ctrl-C 只设置标志，执行器在两次移动之间检查
fn install_interrupt_handler(flag: &Arc<AtomicBool>) {
    let flag = Arc::clone(flag);
    match ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
        Ok(()) | Err(ctrlc::Error::MultipleHandlers) => {}
        Err(e) => output::print_warning(&format!("Could not install Ctrl-C handler: {}", e)),
    }
}

/// 源目录必须存在且为目录
fn check_source(source: &Path) -> Result<()> {
    if !source.exists() {
        return Err(RenmvError::DirectoryNotFound {
            path: source.display().to_string(),
        });
    }
    if !source.is_dir() {
        return Err(RenmvError::NotADirectory {
            path: source.display().to_string(),
        });
    }
    Ok(())
}

/// 目标路径若已存在则必须是目录
fn check_destination(destination: &Path) -> Result<()> {
    if destination.exists() && !destination.is_dir() {
        return Err(RenmvError::NotADirectory {
            path: destination.display().to_string(),
        });
    }
    Ok(())
}

/// 提前退出时，若目标目录原本不存在，说明它没有被创建
fn note_destination_not_created(destination: &Path) {
    if !destination.exists() {
        output::print_info(&format!(
            "Destination '{}' does not exist and was not created",
            destination.display()
        ));
    }
}

fn print_preview(actions: &ActionList, quiet: bool) {
    if !quiet {
        println!();
        let total = actions.len();
        for (idx, action) in actions.iter().enumerate() {
            output::print_planned(
                idx + 1,
                total,
                &action.source_name(),
                &action.destination_name(),
            );
        }
        println!();
    }

    for dest in actions.batch_collisions() {
        output::print_warning(&format!(
            "Several files are planned to '{}'; only the first will be moved",
            dest.display()
        ));
    }
}

/// 区分“未做任何修改”与“部分文件已移动”
fn report_failure(failure: &ApplyFailure) {
    println!();
    if failure.nothing_changed() {
        output::print_error(&format!(
            "Nothing was changed: action 1 of {} failed",
            failure.total
        ));
    } else {
        output::print_warning(&format!(
            "{} of {} file(s) were moved before action {} failed:",
            failure.report.moved(),
            failure.total,
            failure.failed_at
        ));
        for applied in &failure.report.applied {
            output::print_moved(&applied.action.source, &applied.action.destination);
        }
    }

    output::print_skip(&format!(
        "{} -> {} and {} later action(s) were not applied",
        failure.action.source.display(),
        failure.action.destination.display(),
        failure.not_applied() - 1
    ));
}
