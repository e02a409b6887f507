//! # 唯一文件名生成
//!
//! 目标目录中已存在同名文件时，在扩展名前追加 `_1`, `_2`, ... 直到找到空闲名字。
//!
//! ## 依赖关系
//! - 被 `batch/planner.rs` 调用
//! - 无外部模块依赖

use std::fs;
use std::path::{Path, PathBuf};

/// 路径上是否已有目录项（悬空符号链接也算占用）
pub fn is_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// 仅对照真实文件系统生成不冲突的路径
pub fn unique_path(dest_dir: &Path, name: &str) -> PathBuf {
    unique_path_with(dest_dir, name, is_occupied)
}

/// 由调用方决定一个路径是否已被占用
///
/// 计数器没有上限；`is_taken` 只要对某个候选返回 `false` 循环即终止。
pub fn unique_path_with<F>(dest_dir: &Path, name: &str, mut is_taken: F) -> PathBuf
where
    F: FnMut(&Path) -> bool,
{
    let candidate = dest_dir.join(name);
    if !is_taken(&candidate) {
        return candidate;
    }

    let (stem, ext) = split_name(name);
    let mut counter: u64 = 1;
    loop {
        let candidate = dest_dir.join(format!("{}_{}{}", stem, counter, ext));
        if !is_taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// 拆分为 (stem, ".ext")；`.bashrc` 这类点文件没有扩展名
fn split_name(name: &str) -> (String, String) {
    let path = Path::new(name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| name.to_string());
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    (stem, ext)
}
