//! # 动作规划器
//!
//! 组合收集器、模式替换与唯一名生成，得到有序的 (源, 目标) 列表。
//!
//! ## 功能
//! - 目录结构被展平：只保留基本名，源目录下的子目录层级丢弃
//! - 默认在内存中预留已规划的目标名，避免同批次冲突
//! - `reserve_in_batch(false)` 复现只检查磁盘的旧行为
//! - 规划过程不修改文件系统
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `batch/collector.rs`, `batch/unique.rs`, `matcher/`

use super::collector::FileCollector;
use super::unique::{is_occupied, unique_path, unique_path_with};
use crate::error::{RenmvError, Result};
use crate::matcher::Matcher;
use crate::models::{ActionList, PlannedAction};

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// 动作规划器
pub struct Planner<'a> {
    source: PathBuf,
    destination: PathBuf,
    matcher: &'a Matcher,
    reserve_in_batch: bool,
}

impl<'a> Planner<'a> {
    /// 创建规划器，默认启用批内预留
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        matcher: &'a Matcher,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            matcher,
            reserve_in_batch: true,
        }
    }

    /// 是否在批次内预留目标名
    pub fn reserve_in_batch(mut self, reserve: bool) -> Self {
        self.reserve_in_batch = reserve;
        self
    }

    /// 生成计划
    pub fn plan(&self) -> Result<ActionList> {
        let files = FileCollector::new(&self.source, self.matcher).collect();

        let mut reserved: HashSet<PathBuf> = HashSet::new();
        let mut actions = ActionList::new();

        for file in files {
            let new_name = self.matcher.substitute(file.name());
            validate_name(file.name(), &new_name)?;

            let destination = if self.reserve_in_batch {
                let destination = unique_path_with(&self.destination, &new_name, |candidate| {
                    is_occupied(candidate) || reserved.contains(candidate)
                });
                reserved.insert(destination.clone());
                destination
            } else {
                unique_path(&self.destination, &new_name)
            };

            actions.push(PlannedAction::new(file.path().to_path_buf(), destination));
        }

        Ok(actions)
    }
}

/// 新文件名必须是单个普通路径组件
fn validate_name(source_name: &str, name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("empty name")
    } else if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
        Some("contains a path separator")
    } else if !matches!(
        Path::new(name).components().next(),
        Some(Component::Normal(_))
    ) {
        Some("not a plain file name")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(RenmvError::InvalidTargetName {
            source_name: source_name.to_string(),
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
