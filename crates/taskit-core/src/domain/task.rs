//! カタログモデル: 実行可能なタスクのカテゴリ

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Advanced",
        }
    }
}

/// A task the user can run. Each one triggers one remote workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub estimated_time: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,

    /// Remote workflow identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskCategory {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tasks: Vec<TaskInfo>,

    #[serde(default)]
    pub is_popular: bool,
}
