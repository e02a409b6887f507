//! # 计划动作模型
//!
//! ## 生命周期
//! - `FileEntry` 每次运行重新发现，不做缓存
//! - `PlannedAction` 仅在计划与执行之间存在于内存中
//! - `ActionList` 每次调用生成一次，由执行器消费一次
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 无外部模块依赖

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 收集到的常规文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    name: String,
}

impl FileEntry {
    /// 由路径和（UTF-8）文件名构造
    pub fn new(path: PathBuf, name: String) -> Self {
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 文件基本名
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// 单个计划移动: (源路径, 目标路径)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAction {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl PlannedAction {
    pub fn new(source: PathBuf, destination: PathBuf) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// 源文件名（用于预览）
    pub fn source_name(&self) -> String {
        display_name(&self.source)
    }

    /// 目标文件名（用于预览）
    pub fn destination_name(&self) -> String {
        display_name(&self.destination)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// 有序的计划动作列表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionList {
    actions: Vec<PlannedAction>,
}

impl ActionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: PlannedAction) {
        self.actions.push(action);
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlannedAction> {
        self.actions.iter()
    }

    /// 在同一批次中出现多次的目标路径（按首次出现顺序）
    pub fn batch_collisions(&self) -> Vec<&Path> {
        let mut counts: HashMap<&Path, usize> = HashMap::new();
        for action in &self.actions {
            *counts.entry(action.destination.as_path()).or_insert(0) += 1;
        }

        let mut seen = Vec::new();
        for action in &self.actions {
            let dest = action.destination.as_path();
            if counts[dest] > 1 && !seen.contains(&dest) {
                seen.push(dest);
            }
        }
        seen
    }
}

impl IntoIterator for ActionList {
    type Item = PlannedAction;
    type IntoIter = std::vec::IntoIter<PlannedAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl<'a> IntoIterator for &'a ActionList {
    type Item = &'a PlannedAction;
    type IntoIter = std::slice::Iter<'a, PlannedAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

impl FromIterator<PlannedAction> for ActionList {
    fn from_iter<I: IntoIterator<Item = PlannedAction>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(from: &str, to: &str) -> PlannedAction {
        PlannedAction::new(PathBuf::from(from), PathBuf::from(to))
    }

    #[test]
    fn test_preview_names() {
        let a = action("src/sub/IMG001.JPG", "dst/photo_001.jpg");
        assert_eq!(a.source_name(), "IMG001.JPG");
        assert_eq!(a.destination_name(), "photo_001.jpg");
    }

    #[test]
    fn test_batch_collisions() {
        let list: ActionList = vec![
            action("a/x.txt", "out/y.txt"),
            action("b/x.txt", "out/z.txt"),
            action("c/x.txt", "out/y.txt"),
        ]
        .into_iter()
        .collect();
        assert_eq!(list.batch_collisions(), vec![Path::new("out/y.txt")]);
    }

    #[test]
    fn test_no_collisions_when_unique() {
        let list: ActionList = vec![action("a", "out/1"), action("b", "out/2")]
            .into_iter()
            .collect();
        assert!(list.batch_collisions().is_empty());
        assert_eq!(list.len(), 2);
    }
}
