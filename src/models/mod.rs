//! # 数据模型模块
//!
//! 定义文件条目、计划动作与动作列表。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: action

pub mod action;

pub use action::{ActionList, FileEntry, PlannedAction};
