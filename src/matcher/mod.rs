//! # 模式匹配器
//!
//! 封装正则表达式引擎：测试文件名是否匹配，并按替换模板生成新文件名。
//!
//! ## 功能
//! - 大小写不敏感（固定策略，不可配置）
//! - 匹配锚定在文件名开头，结尾不锚定（除非模式自带 `$`）
//! - 全局替换，支持捕获组反向引用
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs`, `batch/planner.rs` 使用
//! - 使用 `matcher/template.rs` 转换替换模板
//! - 使用 `regex` crate

pub mod template;

use crate::error::{RenmvError, Result};
use regex::{Regex, RegexBuilder};

/// 编译后的模式与替换模板，一次运行只编译一次
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
    /// 转换为 `${n}` 语法后的替换串
    replacement: String,
}

impl Matcher {
    /// 编译模式；语法错误在任何目录遍历之前返回
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| RenmvError::InvalidPattern {
                pattern: pattern.to_string(),
                source: e,
            })?;

        Ok(Self {
            regex,
            replacement: template::translate(replacement),
        })
    }

    /// 文件名是否在开头处匹配
    pub fn is_match(&self, name: &str) -> bool {
        // leftmost-first: 若开头可以匹配，最左匹配必然从 0 开始
        self.regex.find(name).is_some_and(|m| m.start() == 0)
    }

    /// 对文件名做全局替换，得到新文件名
    pub fn substitute(&self, name: &str) -> String {
        self.regex
            .replace_all(name, self.replacement.as_str())
            .into_owned()
    }

    /// 原始正则表达式
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_is_case_insensitive() {
        let m = Matcher::new(r"^img(\d+)\.jpg$", r"photo_\1.jpg").unwrap();
        assert!(m.is_match("IMG001.JPG"));
        assert!(m.is_match("img002.jpg"));
        assert!(!m.is_match("doc.txt"));
    }

    #[test]
    fn test_match_is_anchored_at_start_only() {
        let m = Matcher::new(r"img", "pic").unwrap();
        assert!(m.is_match("img_holiday.png"));
        assert!(!m.is_match("holiday_img.png"));
    }

    #[test]
    fn test_substitute_with_backreference() {
        let m = Matcher::new(r"^img(\d+)\.jpg$", r"photo_\1.jpg").unwrap();
        assert_eq!(m.substitute("IMG001.JPG"), "photo_001.jpg");
        assert_eq!(m.substitute("img002.jpg"), "photo_002.jpg");
    }

    #[test]
    fn test_substitute_replaces_every_occurrence() {
        let m = Matcher::new(r"a", "o").unwrap();
        assert_eq!(m.substitute("banana.txt"), "bonono.txt");
    }

    #[test]
    fn test_substitute_named_group() {
        let m = Matcher::new(r"^(?P<year>\d{4})-(?P<rest>.+)$", r"\g<rest>_\g<year>").unwrap();
        assert_eq!(m.substitute("2024-report.pdf"), "report.pdf_2024");
    }

    #[test]
    fn test_literal_dollar_survives_substitution() {
        let m = Matcher::new(r"^(\w+)\.txt$", r"cost$5_\1.txt").unwrap();
        assert_eq!(m.substitute("a.txt"), "cost$5_a.txt");

        let m = Matcher::new(r"^(\w+)\.log$", "${1}_old.log").unwrap();
        assert_eq!(m.substitute("server.log"), "${1}_old.log");
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = Matcher::new(r"img(\d+", "x").unwrap_err();
        assert!(matches!(err, RenmvError::InvalidPattern { .. }));
    }
}
