//! TaskRequest - 1 回の呼び出しで送る型付きリクエスト
//!
//! `TaskFamily` はペイロードの形、`Route` は dispatch 戦略が選ぶもの、
//! `map_request` はルートと型のないフォーム値から送信可能な `TaskRequest` を作る。

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::params::Params;
use super::payload::WebhookPayload;
use super::payloads::*;
use crate::domain::{ParamMap, TaskExecutionRequest, TaskitError};

/// A group of task ids sharing one payload shape and one webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskFamily {
    Email,
    Report,
    Summary,
    Translation,
    Content,
    SetReminder,
    SummarizeDay,
    SummarizeVideo,
    ScheduleMeeting,
    CreatePresentation,
    ResearchTopic,
    CreateNotes,
    WriteBlog,
    DesignLogo,
    SocialMedia,
    CreateInvoice,
    MarketAnalysis,
    BusinessPlan,
    WebScraper,
}

impl TaskFamily {
    pub const ALL: [TaskFamily; 19] = [
        TaskFamily::Email,
        TaskFamily::Report,
        TaskFamily::Summary,
        TaskFamily::Translation,
        TaskFamily::Content,
        TaskFamily::SetReminder,
        TaskFamily::SummarizeDay,
        TaskFamily::SummarizeVideo,
        TaskFamily::ScheduleMeeting,
        TaskFamily::CreatePresentation,
        TaskFamily::ResearchTopic,
        TaskFamily::CreateNotes,
        TaskFamily::WriteBlog,
        TaskFamily::DesignLogo,
        TaskFamily::SocialMedia,
        TaskFamily::CreateInvoice,
        TaskFamily::MarketAnalysis,
        TaskFamily::BusinessPlan,
        TaskFamily::WebScraper,
    ];

    /// Webhook path under the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            TaskFamily::Email => EmailTaskRequest::PATH,
            TaskFamily::Report => ReportTaskRequest::PATH,
            TaskFamily::Summary => SummaryTaskRequest::PATH,
            TaskFamily::Translation => TranslationTaskRequest::PATH,
            TaskFamily::Content => ContentTaskRequest::PATH,
            TaskFamily::SetReminder => SetReminderRequest::PATH,
            TaskFamily::SummarizeDay => SummarizeDayRequest::PATH,
            TaskFamily::SummarizeVideo => SummarizeVideoRequest::PATH,
            TaskFamily::ScheduleMeeting => ScheduleMeetingRequest::PATH,
            TaskFamily::CreatePresentation => CreatePresentationRequest::PATH,
            TaskFamily::ResearchTopic => ResearchTopicRequest::PATH,
            TaskFamily::CreateNotes => CreateNotesRequest::PATH,
            TaskFamily::WriteBlog => WriteBlogRequest::PATH,
            TaskFamily::DesignLogo => DesignLogoRequest::PATH,
            TaskFamily::SocialMedia => SocialMediaPostRequest::PATH,
            TaskFamily::CreateInvoice => CreateInvoiceRequest::PATH,
            TaskFamily::MarketAnalysis => MarketAnalysisRequest::PATH,
            TaskFamily::BusinessPlan => BusinessPlanRequest::PATH,
            TaskFamily::WebScraper => WebScraperRequest::PATH,
        }
    }

    /// The family with a dedicated webhook for a catalog task id.
    pub fn for_task_id(task_id: &str) -> Option<Self> {
        let family = match task_id {
            "send_email" => TaskFamily::Email,
            "create_report" | "generate_report" => TaskFamily::Report,
            "set_reminder" => TaskFamily::SetReminder,
            "summarize_day" => TaskFamily::SummarizeDay,
            "summarize_video" => TaskFamily::SummarizeVideo,
            "schedule_meeting" => TaskFamily::ScheduleMeeting,
            "create_presentation" => TaskFamily::CreatePresentation,
            "research_topic" => TaskFamily::ResearchTopic,
            "create_notes" => TaskFamily::CreateNotes,
            "write_blog" => TaskFamily::WriteBlog,
            "design_logo" => TaskFamily::DesignLogo,
            "social_media" => TaskFamily::SocialMedia,
            "create_invoice" => TaskFamily::CreateInvoice,
            "market_analysis" => TaskFamily::MarketAnalysis,
            "business_plan" => TaskFamily::BusinessPlan,
            "scrape_url" => TaskFamily::WebScraper,
            _ => return None,
        };
        Some(family)
    }
}

impl fmt::Display for TaskFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "webhook/email-task" -> "email-task"
        let path = self.path();
        f.write_str(path.strip_prefix("webhook/").unwrap_or(path))
    }
}

/// Where one invocation goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Family(TaskFamily),
    /// Passthrough to `webhook/{segment}` with the raw form values as body.
    Generic(String),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Family(family) => write!(f, "{family}"),
            Route::Generic(segment) => write!(f, "generic:{segment}"),
        }
    }
}

/// Body of the generic passthrough.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenericRequest {
    #[serde(skip)]
    pub segment: String,
    #[serde(flatten)]
    pub body: ParamMap,
}

/// Typed request body, one variant per family plus the passthrough.
///
/// Serializes as the bare payload object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaskRequest {
    Email(EmailTaskRequest),
    Report(ReportTaskRequest),
    Summary(SummaryTaskRequest),
    Translation(TranslationTaskRequest),
    Content(ContentTaskRequest),
    SetReminder(SetReminderRequest),
    SummarizeDay(SummarizeDayRequest),
    SummarizeVideo(SummarizeVideoRequest),
    ScheduleMeeting(ScheduleMeetingRequest),
    CreatePresentation(CreatePresentationRequest),
    ResearchTopic(ResearchTopicRequest),
    CreateNotes(CreateNotesRequest),
    WriteBlog(WriteBlogRequest),
    DesignLogo(DesignLogoRequest),
    SocialMedia(SocialMediaPostRequest),
    CreateInvoice(CreateInvoiceRequest),
    MarketAnalysis(MarketAnalysisRequest),
    BusinessPlan(BusinessPlanRequest),
    WebScraper(WebScraperRequest),
    Generic(GenericRequest),
}

impl TaskRequest {
    pub fn for_family(family: TaskFamily, p: &Params<'_>) -> Self {
        match family {
            TaskFamily::Email => Self::Email(WebhookPayload::from_params(p)),
            TaskFamily::Report => Self::Report(WebhookPayload::from_params(p)),
            TaskFamily::Summary => Self::Summary(WebhookPayload::from_params(p)),
            TaskFamily::Translation => Self::Translation(WebhookPayload::from_params(p)),
            TaskFamily::Content => Self::Content(WebhookPayload::from_params(p)),
            TaskFamily::SetReminder => Self::SetReminder(WebhookPayload::from_params(p)),
            TaskFamily::SummarizeDay => Self::SummarizeDay(WebhookPayload::from_params(p)),
            TaskFamily::SummarizeVideo => Self::SummarizeVideo(WebhookPayload::from_params(p)),
            TaskFamily::ScheduleMeeting => Self::ScheduleMeeting(WebhookPayload::from_params(p)),
            TaskFamily::CreatePresentation => {
                Self::CreatePresentation(WebhookPayload::from_params(p))
            }
            TaskFamily::ResearchTopic => Self::ResearchTopic(WebhookPayload::from_params(p)),
            TaskFamily::CreateNotes => Self::CreateNotes(WebhookPayload::from_params(p)),
            TaskFamily::WriteBlog => Self::WriteBlog(WebhookPayload::from_params(p)),
            TaskFamily::DesignLogo => Self::DesignLogo(WebhookPayload::from_params(p)),
            TaskFamily::SocialMedia => Self::SocialMedia(WebhookPayload::from_params(p)),
            TaskFamily::CreateInvoice => Self::CreateInvoice(WebhookPayload::from_params(p)),
            TaskFamily::MarketAnalysis => Self::MarketAnalysis(WebhookPayload::from_params(p)),
            TaskFamily::BusinessPlan => Self::BusinessPlan(WebhookPayload::from_params(p)),
            TaskFamily::WebScraper => Self::WebScraper(WebhookPayload::from_params(p)),
        }
    }

    pub fn family(&self) -> Option<TaskFamily> {
        let family = match self {
            Self::Email(_) => TaskFamily::Email,
            Self::Report(_) => TaskFamily::Report,
            Self::Summary(_) => TaskFamily::Summary,
            Self::Translation(_) => TaskFamily::Translation,
            Self::Content(_) => TaskFamily::Content,
            Self::SetReminder(_) => TaskFamily::SetReminder,
            Self::SummarizeDay(_) => TaskFamily::SummarizeDay,
            Self::SummarizeVideo(_) => TaskFamily::SummarizeVideo,
            Self::ScheduleMeeting(_) => TaskFamily::ScheduleMeeting,
            Self::CreatePresentation(_) => TaskFamily::CreatePresentation,
            Self::ResearchTopic(_) => TaskFamily::ResearchTopic,
            Self::CreateNotes(_) => TaskFamily::CreateNotes,
            Self::WriteBlog(_) => TaskFamily::WriteBlog,
            Self::DesignLogo(_) => TaskFamily::DesignLogo,
            Self::SocialMedia(_) => TaskFamily::SocialMedia,
            Self::CreateInvoice(_) => TaskFamily::CreateInvoice,
            Self::MarketAnalysis(_) => TaskFamily::MarketAnalysis,
            Self::BusinessPlan(_) => TaskFamily::BusinessPlan,
            Self::WebScraper(_) => TaskFamily::WebScraper,
            Self::Generic(_) => return None,
        };
        Some(family)
    }

    /// Webhook path under the base URL.
    pub fn path(&self) -> String {
        match self {
            Self::Generic(g) => format!("webhook/{}", g.segment),
            typed => typed
                .family()
                .map(|family| family.path().to_string())
                .unwrap_or_default(),
        }
    }

    /// JSON body for the wire.
    pub fn body(&self) -> Result<serde_json::Value, TaskitError> {
        serde_json::to_value(self).map_err(|e| TaskitError::Encode(e.to_string()))
    }
}

/// Build the typed request for `route`.
///
/// Total over its inputs: missing or malformed form values fall back to the
/// family's defaults. `today` backs date fields.
pub fn map_request(route: &Route, request: &TaskExecutionRequest, today: NaiveDate) -> TaskRequest {
    match route {
        Route::Family(family) => {
            TaskRequest::for_family(*family, &Params::new(&request.parameters, today))
        }
        Route::Generic(segment) => TaskRequest::Generic(GenericRequest {
            segment: segment.clone(),
            body: request.parameters.clone(),
        }),
    }
}
