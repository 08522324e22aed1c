//! タスクファミリーごとのリクエストボディ
//!
//! フィールド名は camelCase で送信する。`from_params` が適用するデフォルトは
//! 各 struct に記載。

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use url::Url;

use super::params::Params;
use super::payload::WebhookPayload;

/// Defaults: tone = "professional".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTaskRequest {
    pub recipient_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub content: String,
    pub tone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
}

impl WebhookPayload for EmailTaskRequest {
    const PATH: &'static str = "webhook/email-task";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            recipient_email: p.string_or("recipientEmail", ""),
            subject: p.text("subject"),
            content: p.string_or("content", ""),
            tone: p.string_or("tone", "professional"),
            sender_name: p.text("senderName"),
        }
    }
}

/// Defaults: reportType = "analysis", includeCharts = true, format = "pdf".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTaskRequest {
    pub title: String,
    pub data_source: String,
    pub report_type: String,
    pub include_charts: bool,
    pub format: String,
}

impl WebhookPayload for ReportTaskRequest {
    const PATH: &'static str = "webhook/report-task";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            title: p.string_or("title", ""),
            data_source: p.string_or("dataSource", ""),
            report_type: p.string_or("reportType", "analysis"),
            include_charts: p.bool_or("includeCharts", true),
            format: p.string_or("format", "pdf"),
        }
    }
}

/// Defaults: contentType = "text", summaryLength = "medium".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryTaskRequest {
    pub content: String,
    pub content_type: String,
    pub summary_length: String,
}

impl WebhookPayload for SummaryTaskRequest {
    const PATH: &'static str = "webhook/summary-task";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            content: p.string_or("content", ""),
            content_type: p.string_or("contentType", "text"),
            summary_length: p.string_or("summaryLength", "medium"),
        }
    }
}

/// Defaults: targetLanguage = "english", sourceLanguage = "auto-detect".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationTaskRequest {
    pub text: String,
    pub target_language: String,
    pub source_language: String,
}

impl WebhookPayload for TranslationTaskRequest {
    const PATH: &'static str = "webhook/translation-task";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            text: p.string_or("text", ""),
            target_language: p.string_or("targetLanguage", "english"),
            source_language: p.string_or("sourceLanguage", "auto-detect"),
        }
    }
}

/// Defaults: contentType = "blog", tone = "professional", length = "medium",
/// targetAudience = "general".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTaskRequest {
    pub topic: String,
    pub content_type: String,
    pub tone: String,
    pub length: String,
    pub target_audience: String,
}

impl WebhookPayload for ContentTaskRequest {
    const PATH: &'static str = "webhook/content-task";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            topic: p.string_or("topic", ""),
            content_type: p.string_or("contentType", "blog"),
            tone: p.string_or("tone", "professional"),
            length: p.string_or("length", "medium"),
            target_audience: p.string_or("targetAudience", "general"),
        }
    }
}

/// Defaults: priority = "medium", category = "general".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetReminderRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO 8601.
    pub reminder_time: String,
    pub priority: String,
    pub category: String,
}

impl WebhookPayload for SetReminderRequest {
    const PATH: &'static str = "webhook/set-reminder-task";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            title: p.string_or("title", ""),
            description: p.text("description"),
            reminder_time: p.string_or("reminderTime", ""),
            priority: p.string_or("priority", "medium"),
            category: p.string_or("category", "general"),
        }
    }
}

/// Defaults: date = today, includeSchedule = true, includeTasks = true,
/// includeEmails = false, detailLevel = "medium".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeDayRequest {
    pub user_email: String,
    /// YYYY-MM-DD.
    pub date: String,
    pub include_schedule: bool,
    pub include_tasks: bool,
    pub include_emails: bool,
    pub detail_level: String,
}

impl WebhookPayload for SummarizeDayRequest {
    const PATH: &'static str = "webhook/summarize-day-task";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            user_email: p.string_or("userEmail", ""),
            date: p.date_or_today("date"),
            include_schedule: p.bool_or("includeSchedule", true),
            include_tasks: p.bool_or("includeTasks", true),
            include_emails: p.bool_or("includeEmails", false),
            detail_level: p.string_or("detailLevel", "medium"),
        }
    }
}

/// Defaults: summaryType = "detailed", includeTimestamps = false,
/// language = "english".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeVideoRequest {
    pub youtube_url: String,
    pub summary_type: String,
    pub include_timestamps: bool,
    pub language: String,
}

impl WebhookPayload for SummarizeVideoRequest {
    const PATH: &'static str = "webhook/youtube-summary";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            youtube_url: p.string_or("youtubeUrl", ""),
            summary_type: p.string_or("summaryType", "detailed"),
            include_timestamps: p.bool_or("includeTimestamps", false),
            language: p.string_or("language", "english"),
        }
    }
}

/// Defaults: duration = 60, meetingType = "virtual".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMeetingRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub attendees: Vec<String>,
    /// Minutes.
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_times: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub meeting_type: String,
}

impl WebhookPayload for ScheduleMeetingRequest {
    const PATH: &'static str = "webhook/schedule-meeting-task";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            title: p.string_or("title", ""),
            description: p.text("description"),
            attendees: p.list("attendees"),
            duration: p.int_or("duration", 60),
            preferred_times: p.opt_list("preferredTimes"),
            location: p.text("location"),
            meeting_type: p.string_or("meetingType", "virtual"),
        }
    }
}

/// Defaults: slideCount = 10, audience = "professional", style = "business",
/// includeImages = true, templatePreference = "modern".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePresentationRequest {
    pub title: String,
    pub topic: String,
    pub slide_count: i64,
    pub audience: String,
    pub style: String,
    pub include_images: bool,
    pub template_preference: String,
}

impl WebhookPayload for CreatePresentationRequest {
    const PATH: &'static str = "webhook/create-presentation-task";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            title: p.string_or("title", ""),
            topic: p.string_or("topic", ""),
            slide_count: p.int_or("slideCount", 10),
            audience: p.string_or("audience", "professional"),
            style: p.string_or("style", "business"),
            include_images: p.bool_or("includeImages", true),
            template_preference: p.string_or("templatePreference", "modern"),
        }
    }
}

/// Defaults: researchDepth = "comprehensive", sourcesRequired = 5,
/// includeStats = true, includeCitations = true, academicLevel = "general".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchTopicRequest {
    pub topic: String,
    pub research_depth: String,
    pub sources_required: i64,
    pub include_stats: bool,
    pub include_citations: bool,
    pub academic_level: String,
}

impl WebhookPayload for ResearchTopicRequest {
    const PATH: &'static str = "webhook/research-topic-task";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            topic: p.string_or("topic", ""),
            research_depth: p.string_or("researchDepth", "comprehensive"),
            sources_required: p.int_or("sourcesRequired", 5),
            include_stats: p.bool_or("includeStats", true),
            include_citations: p.bool_or("includeCitations", true),
            academic_level: p.string_or("academicLevel", "general"),
        }
    }
}

/// Defaults: contentType = "text", noteStyle = "structured",
/// includeQuestions = true, includeKeyTerms = true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotesRequest {
    pub source_content: String,
    pub content_type: String,
    pub note_style: String,
    pub include_questions: bool,
    pub include_key_terms: bool,
}

impl WebhookPayload for CreateNotesRequest {
    const PATH: &'static str = "webhook/create-notes-task";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            source_content: p.string_or("sourceContent", ""),
            content_type: p.string_or("contentType", "text"),
            note_style: p.string_or("noteStyle", "structured"),
            include_questions: p.bool_or("includeQuestions", true),
            include_key_terms: p.bool_or("includeKeyTerms", true),
        }
    }
}

/// Defaults: audience = "general", tone = "informative", wordCount = 800,
/// includeOutline = true, seoOptimized = true, includeImages = false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteBlogRequest {
    pub topic: String,
    pub audience: String,
    pub tone: String,
    pub word_count: i64,
    pub include_outline: bool,
    pub seo_optimized: bool,
    pub include_images: bool,
}

impl WebhookPayload for WriteBlogRequest {
    const PATH: &'static str = "webhook/write-blog-task";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            topic: p.string_or("topic", ""),
            audience: p.string_or("audience", "general"),
            tone: p.string_or("tone", "informative"),
            word_count: p.int_or("wordCount", 800),
            include_outline: p.bool_or("includeOutline", true),
            seo_optimized: p.bool_or("seoOptimized", true),
            include_images: p.bool_or("includeImages", false),
        }
    }
}

/// Defaults: style = "modern", includeText = true, conceptCount = 3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignLogoRequest {
    pub company_name: String,
    pub industry: String,
    pub style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    pub include_text: bool,
    pub concept_count: i64,
}

impl WebhookPayload for DesignLogoRequest {
    const PATH: &'static str = "webhook/design-logo-task";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            company_name: p.string_or("companyName", ""),
            industry: p.string_or("industry", ""),
            style: p.string_or("style", "modern"),
            colors: p.opt_list("colors"),
            include_text: p.bool_or("includeText", true),
            concept_count: p.int_or("conceptCount", 3),
        }
    }
}

/// Defaults: tone = "engaging", includeHashtags = true, includeEmojis = true,
/// postType = "text".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaPostRequest {
    pub platform: String,
    pub topic: String,
    pub tone: String,
    pub include_hashtags: bool,
    pub include_emojis: bool,
    pub post_type: String,
}

impl WebhookPayload for SocialMediaPostRequest {
    const PATH: &'static str = "webhook/social-media-task";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            platform: p.string_or("platform", ""),
            topic: p.string_or("topic", ""),
            tone: p.string_or("tone", "engaging"),
            include_hashtags: p.bool_or("includeHashtags", true),
            include_emojis: p.bool_or("includeEmojis", true),
            post_type: p.string_or("postType", "text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: i64,
    pub unit_price: f64,
}

impl InvoiceItem {
    /// A free-text line item: quantity 1, price left for the backend to fill.
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            quantity: 1,
            unit_price: 0.0,
        }
    }
}

/// Defaults: currency = "USD", taxRate = 0.0.
///
/// `items` accepts a JSON array of items or free text, one item per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    pub client_name: String,
    pub client_email: String,
    pub items: Vec<InvoiceItem>,
    /// YYYY-MM-DD.
    pub due_date: String,
    pub currency: String,
    pub tax_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WebhookPayload for CreateInvoiceRequest {
    const PATH: &'static str = "webhook/create-invoice-task";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            client_name: p.string_or("clientName", ""),
            client_email: p.string_or("clientEmail", ""),
            items: invoice_items(p),
            due_date: p.string_or("dueDate", ""),
            currency: p.string_or("currency", "USD"),
            tax_rate: p.float_or("taxRate", 0.0),
            notes: p.text("notes"),
        }
    }
}

fn invoice_items(p: &Params<'_>) -> Vec<InvoiceItem> {
    if let Some(value @ serde_json::Value::Array(_)) = p.raw().get("items")
        && let Ok(items) = serde_json::from_value::<Vec<InvoiceItem>>(value.clone())
    {
        return items;
    }
    let Some(text) = p.text("items") else {
        return Vec::new();
    };
    if let Ok(items) = serde_json::from_str::<Vec<InvoiceItem>>(text.trim()) {
        return items;
    }
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(InvoiceItem::described)
        .collect()
}

/// Defaults: analysisType = "comprehensive", includeSwot = true,
/// includeTrends = true, region = "global".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysisRequest {
    pub industry: String,
    pub target_market: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitors: Option<Vec<String>>,
    pub analysis_type: String,
    pub include_swot: bool,
    pub include_trends: bool,
    pub region: String,
}

impl WebhookPayload for MarketAnalysisRequest {
    const PATH: &'static str = "webhook/market-analysis-task";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            industry: p.string_or("industry", ""),
            target_market: p.string_or("targetMarket", ""),
            competitors: p.opt_list("competitors"),
            analysis_type: p.string_or("analysisType", "comprehensive"),
            include_swot: p.bool_or("includeSwot", true),
            include_trends: p.bool_or("includeTrends", true),
            region: p.string_or("region", "global"),
        }
    }
}

/// Defaults: businessType = "startup", timeframe = "5_years",
/// includeFinancials = true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPlanRequest {
    pub business_name: String,
    pub industry: String,
    pub business_type: String,
    pub target_market: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_needed: Option<f64>,
    pub timeframe: String,
    pub include_financials: bool,
}

impl WebhookPayload for BusinessPlanRequest {
    const PATH: &'static str = "webhook/business-plan-task";

    fn from_params(p: &Params<'_>) -> Self {
        Self {
            business_name: p.string_or("businessName", ""),
            industry: p.string_or("industry", ""),
            business_type: p.string_or("businessType", "startup"),
            target_market: p.string_or("targetMarket", ""),
            funding_needed: p.float("fundingNeeded"),
            timeframe: p.string_or("timeframe", "5_years"),
            include_financials: p.bool_or("includeFinancials", true),
        }
    }
}

pub const SAFE_MODE_JOB_NAME: &str = "Web Scrape Job (Safe Mode)";

/// Why a set of form values could not be turned into a payload.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Defaults: jobName = "Web Scrape Job", category = "general",
/// extractionType = "general". All values are trimmed.
///
/// A missing or unusable `url` yields the safe-mode payload (empty url,
/// [`SAFE_MODE_JOB_NAME`]) instead of an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebScraperRequest {
    pub url: String,
    pub job_name: String,
    pub category: String,
    pub extraction_type: String,
}

impl WebScraperRequest {
    /// Strict mapping. A url without a scheme gets `https://`.
    pub fn try_from_params(p: &Params<'_>) -> Result<Self, MappingError> {
        let raw = p.trimmed("url").ok_or(MappingError::MissingField("url"))?;
        Ok(Self {
            url: normalize_url(&raw)?,
            job_name: p
                .trimmed("jobName")
                .unwrap_or_else(|| "Web Scrape Job".to_string()),
            category: p.trimmed("category").unwrap_or_else(|| "general".to_string()),
            extraction_type: p
                .trimmed("extractionType")
                .unwrap_or_else(|| "general".to_string()),
        })
    }

    pub fn safe_mode() -> Self {
        Self {
            url: String::new(),
            job_name: SAFE_MODE_JOB_NAME.to_string(),
            category: "general".to_string(),
            extraction_type: "general".to_string(),
        }
    }

    pub fn is_safe_mode(&self) -> bool {
        self.job_name == SAFE_MODE_JOB_NAME
    }
}

impl WebhookPayload for WebScraperRequest {
    const PATH: &'static str = "webhook/web-scraper";

    fn from_params(p: &Params<'_>) -> Self {
        Self::try_from_params(p).unwrap_or_else(|err| {
            warn!(error = %err, "scraper parameters unusable, sending safe mode payload");
            Self::safe_mode()
        })
    }
}

fn normalize_url(raw: &str) -> Result<String, MappingError> {
    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };
    let invalid = |reason: String| MappingError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let parsed = Url::parse(&candidate).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", parsed.scheme())));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("no host".to_string()));
    }
    Ok(candidate)
}
