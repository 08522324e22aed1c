//! TaskType - エンドポイントのルーティングに使うタスク種別

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse category of a task.
///
/// The gateway routes on this after the exact task-id matches, and the generic
/// passthrough endpoint is named after its lower-cased form (`webhook/business`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    Email,
    Report,
    Summary,
    Translation,
    Content,
    DataAnalysis,
    Calendar,
    Reminder,
    FileProcessing,
    SocialMedia,
    Research,
    Automation,
    Optimization,
    Monitoring,
    Backup,
    Business,
    Design,
    Scheduling,
    Other,
}

impl TaskType {
    pub const ALL: [TaskType; 19] = [
        TaskType::Email,
        TaskType::Report,
        TaskType::Summary,
        TaskType::Translation,
        TaskType::Content,
        TaskType::DataAnalysis,
        TaskType::Calendar,
        TaskType::Reminder,
        TaskType::FileProcessing,
        TaskType::SocialMedia,
        TaskType::Research,
        TaskType::Automation,
        TaskType::Optimization,
        TaskType::Monitoring,
        TaskType::Backup,
        TaskType::Business,
        TaskType::Design,
        TaskType::Scheduling,
        TaskType::Other,
    ];

    /// Upper-case enum name, e.g. `DATA_ANALYSIS`.
    pub fn name(&self) -> &'static str {
        match self {
            TaskType::Email => "EMAIL",
            TaskType::Report => "REPORT",
            TaskType::Summary => "SUMMARY",
            TaskType::Translation => "TRANSLATION",
            TaskType::Content => "CONTENT",
            TaskType::DataAnalysis => "DATA_ANALYSIS",
            TaskType::Calendar => "CALENDAR",
            TaskType::Reminder => "REMINDER",
            TaskType::FileProcessing => "FILE_PROCESSING",
            TaskType::SocialMedia => "SOCIAL_MEDIA",
            TaskType::Research => "RESEARCH",
            TaskType::Automation => "AUTOMATION",
            TaskType::Optimization => "OPTIMIZATION",
            TaskType::Monitoring => "MONITORING",
            TaskType::Backup => "BACKUP",
            TaskType::Business => "BUSINESS",
            TaskType::Design => "DESIGN",
            TaskType::Scheduling => "SCHEDULING",
            TaskType::Other => "OTHER",
        }
    }

    /// Path segment of the generic webhook for this type.
    pub fn endpoint_segment(&self) -> String {
        self.name().to_lowercase()
    }

    /// Derive the task type from a catalog task id.
    ///
    /// Unknown ids map to [`TaskType::Other`].
    pub fn for_task_id(task_id: &str) -> Self {
        match task_id {
            "send_email" => TaskType::Email,
            "create_report" | "generate_report" => TaskType::Report,
            "market_analysis" | "business_plan" | "create_invoice" => TaskType::Business,
            "set_reminder" => TaskType::Reminder,
            "schedule_meeting" => TaskType::Calendar,
            "summarize_day" | "summarize_video" => TaskType::Summary,
            "research_topic" | "create_notes" => TaskType::Research,
            "create_presentation" | "write_blog" => TaskType::Content,
            "design_logo" => TaskType::Design,
            "social_media" => TaskType::SocialMedia,
            _ => TaskType::Other,
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("send_email", TaskType::Email)]
    #[case("generate_report", TaskType::Report)]
    #[case("create_invoice", TaskType::Business)]
    #[case("schedule_meeting", TaskType::Calendar)]
    #[case("summarize_video", TaskType::Summary)]
    #[case("write_blog", TaskType::Content)]
    #[case("scrape_url", TaskType::Other)]
    #[case("", TaskType::Other)]
    fn task_type_from_task_id(#[case] task_id: &str, #[case] expected: TaskType) {
        assert_eq!(TaskType::for_task_id(task_id), expected);
    }

    #[test]
    fn endpoint_segment_is_lowercased_name() {
        assert_eq!(TaskType::SocialMedia.endpoint_segment(), "social_media");
        assert_eq!(TaskType::Business.endpoint_segment(), "business");
    }

    #[test]
    fn serializes_as_screaming_snake_case() {
        for task_type in TaskType::ALL {
            let s = serde_json::to_string(&task_type).unwrap();
            assert_eq!(s, format!("\"{}\"", task_type.name()));
        }
    }
}
