//! # 批量重命名模块
//!
//! 收集、规划并执行批量重命名与移动。
//!
//! ## 功能
//! - 递归收集匹配文件
//! - 生成不冲突的目标文件名
//! - 计划与执行分离：规划阶段不修改文件系统
//! - 顺序执行，失败即中止并报告进度
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `matcher/`, `models/`
//! - 使用 `walkdir` 遍历目录，`indicatif` 显示进度

pub mod collector;
pub mod planner;
pub mod relocate;
pub mod runner;
pub mod unique;

pub use planner::Planner;
pub use runner::{ApplyFailure, Executor};
