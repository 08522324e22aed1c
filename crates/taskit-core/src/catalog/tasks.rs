//! 組み込みのタスクカテゴリ

use crate::domain::{Difficulty, TaskCategory, TaskInfo};

fn task(
    id: &str,
    title: &str,
    description: &str,
    estimated_time: &str,
    difficulty: Difficulty,
    tags: &[&str],
    workflow_id: &str,
) -> TaskInfo {
    TaskInfo {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        estimated_time: estimated_time.to_string(),
        difficulty,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        workflow_id: Some(workflow_id.to_string()),
    }
}

fn category(id: &str, title: &str, description: &str, tasks: Vec<TaskInfo>) -> TaskCategory {
    TaskCategory {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tasks,
        is_popular: false,
    }
}

pub(crate) fn builtin() -> Vec<TaskCategory> {
    use Difficulty::*;

    let mut everyday = category(
        "everyday",
        "Everyday Tasks",
        "Quick daily actions made simple",
        vec![
            task("send_email", "Send Email", "Compose and send professional emails", "2 min", Easy, &["communication", "productivity"], "email-task"),
            task("set_reminder", "Set Reminder", "Create smart reminders with context", "1 min", Easy, &["scheduling", "memory"], "set-reminder-task"),
            task("summarize_day", "Summarize My Day", "Get AI-generated daily summary", "3 min", Easy, &["analysis", "reflection"], "summarize-day-task"),
        ],
    );
    everyday.is_popular = true;

    vec![
        everyday,
        category(
            "office",
            "Office Work",
            "Professional productivity tools",
            vec![
                task("create_report", "Create Report", "Generate professional reports from data", "10 min", Medium, &["analysis", "documentation"], "report-task"),
                task("schedule_meeting", "Schedule Meeting", "Find optimal meeting times and send invites", "5 min", Easy, &["scheduling", "communication"], "schedule-meeting-task"),
                task("create_presentation", "Build Presentation", "Generate slides from your content", "15 min", Medium, &["design", "presentation"], "create-presentation-task"),
            ],
        ),
        category(
            "research",
            "Research & Study",
            "Learning and research assistance",
            vec![
                task("summarize_video", "Summarize YouTube Video", "Extract key points from any video", "5 min", Easy, &["learning", "summarization"], "summarize-video-task"),
                task("research_topic", "Research Topic", "Comprehensive research with sources", "20 min", Hard, &["research", "analysis"], "research-topic-task"),
                task("create_notes", "Generate Study Notes", "Transform content into study materials", "8 min", Medium, &["education", "organization"], "create-notes-task"),
                task("scrape_url", "Web Content Scraper", "Extract and analyze web content automatically", "10 min", Medium, &["scraping", "data", "research"], "web-scraper-task"),
            ],
        ),
        category(
            "creative",
            "Creative Tasks",
            "Design and content creation",
            vec![
                task("write_blog", "Write Blog Post", "Create engaging blog content", "25 min", Medium, &["writing", "content"], "write-blog-task"),
                task("design_logo", "Design Logo Concepts", "Generate logo ideas and descriptions", "15 min", Hard, &["design", "branding"], "design-logo-task"),
                task("social_media", "Social Media Posts", "Create engaging social content", "10 min", Easy, &["social", "marketing"], "social-media-task"),
            ],
        ),
        category(
            "business",
            "Business Tasks",
            "Entrepreneurial and freelance tools",
            vec![
                task("create_invoice", "Create Invoice", "Generate professional invoices", "5 min", Easy, &["finance", "business"], "create-invoice-task"),
                task("market_analysis", "Market Analysis", "Analyze market trends and competitors", "30 min", Hard, &["analysis", "strategy"], "market-analysis-task"),
                task("business_plan", "Business Plan Draft", "Create structured business plan", "45 min", Hard, &["planning", "strategy"], "business-plan-task"),
            ],
        ),
    ]
}
