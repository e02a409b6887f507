//! # 确认提示
//!
//! 执行前向用户确认。只有 `y` / `yes`（不区分大小写）视为同意，其余输入（含空行、EOF）均视为取消。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 无外部模块依赖

use crate::error::{RenmvError, Result};

use std::io::{self, BufRead, Write};

/// 从标准输入读取确认
pub fn confirm(question: &str) -> Result<bool> {
    let stdin = io::stdin();
    confirm_with_input(question, &mut stdin.lock())
}

/// 从任意输入读取确认（便于测试）
pub fn confirm_with_input<R: BufRead>(question: &str, reader: &mut R) -> Result<bool> {
    print!("\n{} [y/N]: ", question);
    io::stdout().flush().map_err(RenmvError::PromptFailed)?;

    let mut input = String::new();
    reader
        .read_line(&mut input)
        .map_err(RenmvError::PromptFailed)?;

    Ok(is_affirmative(&input))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_affirmative_tokens() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative("YES"));
        assert!(is_affirmative("  Y  "));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("yep"));
    }

    #[test]
    fn test_confirm_with_input() {
        assert!(confirm_with_input("Apply?", &mut Cursor::new("y\n")).unwrap());
        assert!(!confirm_with_input("Apply?", &mut Cursor::new("no\n")).unwrap());
        assert!(!confirm_with_input("Apply?", &mut Cursor::new("")).unwrap());
    }
}
