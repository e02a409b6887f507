//! # 文件收集器
//!
//! 递归遍历源目录，收集基本名匹配模式的常规文件。
//!
//! ## 功能
//! - 递归深度不限
//! - 只收集常规文件；指向常规文件的符号链接也收集，但不进入符号链接目录
//! - 按文件名排序遍历，保证同一次运行内顺序确定
//! - 只读，无副作用
//!
//! ## 依赖关系
//! - 被 `batch/planner.rs` 调用
//! - 使用 `matcher/` 判断文件名
//! - 使用 `walkdir` 遍历目录

use crate::matcher::Matcher;
use crate::models::FileEntry;

use std::fs;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// 文件收集器
pub struct FileCollector<'a> {
    /// 根目录（调用方保证存在）
    root: PathBuf,
    /// 已编译的匹配器
    matcher: &'a Matcher,
}

impl<'a> FileCollector<'a> {
    /// 创建新的文件收集器
    pub fn new(root: impl Into<PathBuf>, matcher: &'a Matcher) -> Self {
        Self {
            root: root.into(),
            matcher,
        }
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Vec<FileEntry> {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(is_regular_file)
            .filter_map(|entry| {
                // 非 UTF-8 文件名无法交给正则匹配，跳过
                let name = entry.file_name().to_str()?.to_string();
                self.matcher
                    .is_match(&name)
                    .then(|| FileEntry::new(entry.into_path(), name))
            })
            .collect()
    }
}

/// 常规文件，或指向常规文件的符号链接
fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        fs::metadata(entry.path()).is_ok_and(|m| m.is_file())
    } else {
        entry.file_type().is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, rel).unwrap();
    }

    fn names(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    #[test]
    fn test_collects_exactly_the_matching_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "IMG001.JPG");
        touch(tmp.path(), "doc.txt");
        touch(tmp.path(), "img002.jpg");

        let matcher = Matcher::new(r"^img(\d+)\.jpg$", r"photo_\1.jpg").unwrap();
        let files = FileCollector::new(tmp.path(), &matcher).collect();

        assert_eq!(names(&files), vec!["IMG001.JPG", "img002.jpg"]);
    }

    #[test]
    fn test_recurses_without_depth_limit() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a/b/c/d/e/deep.log");
        touch(tmp.path(), "top.log");
        touch(tmp.path(), "a/skip.txt");

        let matcher = Matcher::new(r".*\.log$", "x").unwrap();
        let files = FileCollector::new(tmp.path(), &matcher).collect();

        assert_eq!(files.len(), 2);
        assert!(files
            .iter()
            .any(|f| f.path() == tmp.path().join("a/b/c/d/e/deep.log")));
    }

    #[test]
    fn test_directories_are_not_collected() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("report.d")).unwrap();
        touch(tmp.path(), "report.txt");

        let matcher = Matcher::new(r"^report", "x").unwrap();
        let files = FileCollector::new(tmp.path(), &matcher).collect();

        assert_eq!(names(&files), vec!["report.txt"]);
    }

    #[test]
    fn test_order_is_deterministic() {
        let tmp = TempDir::new().unwrap();
        for name in ["c.txt", "a.txt", "b/z.txt", "b/a.txt"] {
            touch(tmp.path(), name);
        }

        let matcher = Matcher::new(r".", "x").unwrap();
        let first = FileCollector::new(tmp.path(), &matcher).collect();
        let second = FileCollector::new(tmp.path(), &matcher).collect();

        assert_eq!(first, second);
        assert_eq!(names(&first), vec!["a.txt", "a.txt", "z.txt", "c.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_file_is_collected() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "real.jpg");
        let src = tmp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        std::os::unix::fs::symlink("../real.jpg", src.join("img001.jpg")).unwrap();
        std::os::unix::fs::symlink("../missing.jpg", src.join("img002.jpg")).unwrap();

        let matcher = Matcher::new(r"^img", "x").unwrap();
        let files = FileCollector::new(&src, &matcher).collect();

        assert_eq!(names(&files), vec!["img001.jpg"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_not_entered() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "elsewhere/img003.jpg");
        let src = tmp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        std::os::unix::fs::symlink("../elsewhere", src.join("img_dir")).unwrap();

        let matcher = Matcher::new(r"^img", "x").unwrap();
        let files = FileCollector::new(&src, &matcher).collect();

        assert!(files.is_empty());
    }
}
