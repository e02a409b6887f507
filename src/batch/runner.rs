//! # 执行器
//!
//! 按顺序逐个应用计划中的移动。
//!
//! ## 功能
//! - 遇到第一个错误即中止，报告已完成的动作和失败位置
//! - 执行时目标已存在则拒绝覆盖（`DestinationExists`），不依赖平台的覆盖语义
//! - 中断标志只在两次移动之间检查，单个移动不会被打断
//! - 进度条显示
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `batch/relocate.rs` 迁移文件
//! - 使用 `utils/progress.rs`, `utils/output.rs`

use super::relocate::{relocate, RelocateKind};
use super::unique::is_occupied;
use crate::error::RenmvError;
use crate::models::{ActionList, PlannedAction};
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 已完成的单个移动
#[derive(Debug, Clone)]
pub struct AppliedMove {
    pub action: PlannedAction,
    pub kind: RelocateKind,
}

/// 执行结果统计
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// 按执行顺序记录的已完成移动
    pub applied: Vec<AppliedMove>,
}

impl ApplyReport {
    /// 成功数量
    pub fn moved(&self) -> usize {
        self.applied.len()
    }

    /// 跨设备复制的数量
    pub fn copied(&self) -> usize {
        self.applied
            .iter()
            .filter(|m| m.kind == RelocateKind::CopiedAndRemoved)
            .count()
    }
}

/// 中途失败：已完成部分 + 失败动作
#[derive(Debug)]
pub struct ApplyFailure {
    /// 失败前已完成的移动
    pub report: ApplyReport,
    /// 失败动作的序号（从 1 开始）
    pub failed_at: usize,
    /// 计划总数
    pub total: usize,
    /// 失败的动作
    pub action: PlannedAction,
    pub error: RenmvError,
}

impl ApplyFailure {
    /// 是否一个文件都没有移动
    pub fn nothing_changed(&self) -> bool {
        self.report.applied.is_empty()
    }

    /// 未执行（含失败那一个）的动作数
    pub fn not_applied(&self) -> usize {
        self.total - self.report.moved()
    }
}

impl From<ApplyFailure> for RenmvError {
    fn from(failure: ApplyFailure) -> Self {
        RenmvError::PartialApply {
            applied: failure.report.moved(),
            failed_at: failure.failed_at,
            total: failure.total,
            source: Box::new(failure.error),
        }
    }
}

/// 执行器
#[derive(Default)]
pub struct Executor {
    interrupt: Option<Arc<AtomicBool>>,
    progress: bool,
    verbose: bool,
}

impl Executor {
    /// 创建新的执行器（无进度条，无中断）
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置中断标志（例如 Ctrl-C）
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// 是否显示进度条
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// 是否逐条打印移动
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 依次应用所有动作
    pub fn apply(&self, actions: ActionList) -> Result<ApplyReport, ApplyFailure> {
        let total = actions.len();
        let pb = if self.progress && !self.verbose {
            progress::create_progress_bar(total as u64, "Moving")
        } else {
            ProgressBar::hidden()
        };

        let mut report = ApplyReport::default();

        for (idx, action) in actions.into_iter().enumerate() {
            match self.apply_one(&action) {
                Ok(kind) => {
                    if self.verbose {
                        pb.suspend(|| output::print_moved(&action.source, &action.destination));
                    }
                    report.applied.push(AppliedMove { action, kind });
                    pb.inc(1);
                }
                Err(error) => {
                    pb.abandon();
                    return Err(ApplyFailure {
                        report,
                        failed_at: idx + 1,
                        total,
                        action,
                        error,
                    });
                }
            }
        }

        pb.finish_and_clear();
        Ok(report)
    }

    fn apply_one(&self, action: &PlannedAction) -> Result<RelocateKind, RenmvError> {
        if let Some(flag) = &self.interrupt {
            if flag.load(Ordering::SeqCst) {
                return Err(RenmvError::Interrupted);
            }
        }

        if is_occupied(&action.destination) {
            return Err(RenmvError::DestinationExists {
                path: action.destination.display().to_string(),
            });
        }

        relocate(&action.source, &action.destination)
    }
}
