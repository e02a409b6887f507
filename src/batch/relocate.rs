//! # 文件迁移原语
//!
//! 同一文件系统内使用原子 `rename`；跨设备时退化为复制后删除。
//!
//! ## 注意
//! - 复制后删除不是原子操作，也没有回滚：若删除原文件失败，副本保留在目标处并报告错误
//! - 目标已存在时的覆盖语义由调用方负责检查（见 `batch/runner.rs`）
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 无外部模块依赖

use crate::error::{RenmvError, Result};

use std::fs;
use std::io;
use std::path::Path;

/// 实际采用的迁移方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelocateKind {
    /// 原子重命名
    Renamed,
    /// 跨设备：复制后删除原文件
    CopiedAndRemoved,
}

/// 将 `from` 迁移到 `to`
pub fn relocate(from: &Path, to: &Path) -> Result<RelocateKind> {
    match fs::rename(from, to) {
        Ok(()) => Ok(RelocateKind::Renamed),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => copy_then_remove(from, to),
        Err(e) => Err(relocate_error(from, to, e)),
    }
}

fn copy_then_remove(from: &Path, to: &Path) -> Result<RelocateKind> {
    fs::copy(from, to).map_err(|e| relocate_error(from, to, e))?;

    fs::remove_file(from).map_err(|e| RenmvError::RemoveAfterCopy {
        from: from.display().to_string(),
        to: to.display().to_string(),
        source: e,
    })?;

    Ok(RelocateKind::CopiedAndRemoved)
}

fn relocate_error(from: &Path, to: &Path, source: io::Error) -> RenmvError {
    RenmvError::Relocate {
        from: from.display().to_string(),
        to: to.display().to_string(),
        source,
    }
}
