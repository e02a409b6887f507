//! # 统一错误处理模块
//!
//! 定义 renmv 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 参数错误由 `clap` 处理（打印用法，退出码 2）
//! - 前置条件错误：源目录不存在
//! - 模式编译错误：正则表达式语法错误，在遍历之前检测
//! - 执行错误：移动中途失败，可能已有部分文件被移动
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// renmv 统一错误类型
#[derive(Error, Debug)]
pub enum RenmvError {
    // ─────────────────────────────────────────────────────────────
    // 前置条件错误
    // ─────────────────────────────────────────────────────────────
    #[error("Source directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Failed to create directory: {path}")]
    DirectoryCreateFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 模式错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid regular expression '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Renaming '{source_name}' gives an unusable name '{name}': {reason}")]
    InvalidTargetName {
        source_name: String,
        name: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 交互错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read confirmation")]
    PromptFailed(#[source] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 执行错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to move {from} -> {to}")]
    Relocate {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Copied {from} -> {to} across devices but could not remove the original")]
    RemoveAfterCopy {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Destination already exists, refusing to overwrite: {path}")]
    DestinationExists { path: String },

    #[error("Interrupted before all moves were applied")]
    Interrupted,

    #[error("{applied} of {total} file(s) moved; action {failed_at} failed")]
    PartialApply {
        applied: usize,
        failed_at: usize,
        total: usize,
        #[source]
        source: Box<RenmvError>,
    },
}

impl RenmvError {
    /// 格式化错误及其完整的 source 链
    pub fn chain(&self) -> String {
        use std::error::Error as _;

        let mut msg = self.to_string();
        let mut current = self.source();
        while let Some(cause) = current {
            msg.push_str(&format!("\n  caused by: {}", cause));
            current = cause.source();
        }
        msg
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, RenmvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_includes_nested_causes() {
        let err = RenmvError::PartialApply {
            applied: 2,
            failed_at: 3,
            total: 5,
            source: Box::new(RenmvError::DestinationExists {
                path: "out/a.txt".to_string(),
            }),
        };
        let text = err.chain();
        assert!(text.starts_with("2 of 5 file(s) moved; action 3 failed"));
        assert!(text.contains("caused by: Destination already exists"));
        assert!(text.contains("out/a.txt"));
    }

    #[test]
    fn test_pattern_error_is_distinct_from_missing_directory() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let err = RenmvError::InvalidPattern {
            pattern: "(".to_string(),
            source: regex_err,
        };
        assert!(err.to_string().starts_with("Invalid regular expression"));
        let missing = RenmvError::DirectoryNotFound {
            path: "nowhere".to_string(),
        };
        assert!(missing.to_string().starts_with("Source directory not found"));
    }
}
