//! Catalog - 読み取り専用のルックアップテーブル
//!
//! どちらのカタログも一度だけ構築する普通の値で、必要な側へ渡す（通常は `Arc` 越し）。
//! 構築後に変更されることはない。

mod parameters;
mod tasks;

pub use parameters::{EMAIL_PATTERN, YOUTUBE_PATTERN};

use std::collections::HashMap;

use crate::domain::{Difficulty, TaskCategory, TaskInfo, TaskParameter};

/// Maximum number of entries returned by [`TaskCatalog::popular_tasks`].
pub const POPULAR_TASK_LIMIT: usize = 6;

/// task_id -> ordered form descriptors.
#[derive(Debug, Clone, Default)]
pub struct ParameterCatalog {
    forms: HashMap<String, Vec<TaskParameter>>,
}

impl ParameterCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the forms of every built-in task.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (task_id, params) in parameters::builtin() {
            catalog.insert(task_id, params);
        }
        catalog
    }

    /// Add or replace the form of a task.
    pub fn insert(&mut self, task_id: impl Into<String>, params: Vec<TaskParameter>) {
        self.forms.insert(task_id.into(), params);
    }

    /// Descriptors for `task_id`, in display order.
    ///
    /// Unknown ids yield an empty slice: the task simply has no dynamic form.
    pub fn parameters_for(&self, task_id: &str) -> &[TaskParameter] {
        self.forms.get(task_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, task_id: &str) -> bool {
        self.forms.contains_key(task_id)
    }

    /// Task ids with a form, sorted.
    pub fn task_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.forms.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub(crate) fn all_parameters(&self) -> impl Iterator<Item = &TaskParameter> {
        self.forms.values().flatten()
    }
}

/// Filter for [`TaskCatalog::search`].
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    /// Case-insensitive substring over title, description and tags. Blank matches all.
    pub text: String,
    pub difficulty: Option<Difficulty>,
    pub category_id: Option<String>,
}

impl TaskQuery {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn in_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    fn matches(&self, category: &TaskCategory, task: &TaskInfo) -> bool {
        if let Some(difficulty) = self.difficulty
            && task.difficulty != difficulty
        {
            return false;
        }
        if let Some(category_id) = &self.category_id
            && &category.id != category_id
        {
            return false;
        }
        let needle = self.text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        task.title.to_lowercase().contains(&needle)
            || task.description.to_lowercase().contains(&needle)
            || task.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}

/// Categories of runnable tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskCatalog {
    categories: Vec<TaskCategory>,
}

impl TaskCatalog {
    pub fn new(categories: Vec<TaskCategory>) -> Self {
        Self { categories }
    }

    pub fn builtin() -> Self {
        Self::new(tasks::builtin())
    }

    pub fn categories(&self) -> &[TaskCategory] {
        &self.categories
    }

    pub fn tasks(&self) -> impl Iterator<Item = &TaskInfo> {
        self.categories.iter().flat_map(|c| c.tasks.iter())
    }

    pub fn find_task(&self, task_id: &str) -> Option<&TaskInfo> {
        self.tasks().find(|t| t.id == task_id)
    }

    /// Tasks of popular categories, at most [`POPULAR_TASK_LIMIT`].
    pub fn popular_tasks(&self) -> Vec<&TaskInfo> {
        self.categories
            .iter()
            .filter(|c| c.is_popular)
            .flat_map(|c| c.tasks.iter())
            .take(POPULAR_TASK_LIMIT)
            .collect()
    }

    pub fn search(&self, query: &TaskQuery) -> Vec<&TaskInfo> {
        self.categories
            .iter()
            .flat_map(|c| c.tasks.iter().map(move |t| (c, t)))
            .filter(|(c, t)| query.matches(c, t))
            .map(|(_, t)| t)
            .collect()
    }
}
