//! 組み込みのパラメータ表（カタログのタスクごとに 1 フォーム）

use crate::domain::{ParameterType as T, ParameterValidation as V, TaskParameter as P};

pub const EMAIL_PATTERN: &str = "^[A-Za-z0-9+_.-]+@(.+)$";
pub const YOUTUBE_PATTERN: &str = r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+";

fn email_rule() -> V {
    V::pattern(EMAIL_PATTERN).with_message("Please enter a valid email address")
}

/// `(task_id, parameters)` for every task that has a form.
pub(crate) fn builtin() -> Vec<(&'static str, Vec<P>)> {
    vec![
        ("send_email", send_email()),
        ("set_reminder", set_reminder()),
        ("summarize_day", summarize_day()),
        ("create_report", create_report()),
        ("schedule_meeting", schedule_meeting()),
        ("create_presentation", create_presentation()),
        ("summarize_video", summarize_video()),
        ("research_topic", research_topic()),
        ("create_notes", create_notes()),
        ("write_blog", write_blog()),
        ("design_logo", design_logo()),
        ("social_media", social_media()),
        ("create_invoice", create_invoice()),
        ("market_analysis", market_analysis()),
        ("business_plan", business_plan()),
        ("scrape_url", scrape_url()),
    ]
}

// everyday

fn send_email() -> Vec<P> {
    vec![
        P::required("recipientEmail", "Recipient Email", T::Email)
            .with_placeholder("john@example.com")
            .with_validation(email_rule()),
        P::optional("subject", "Subject", T::Text).with_placeholder("Meeting follow-up"),
        P::required("content", "Email Content", T::MultilineText)
            .with_placeholder("Hi, I wanted to follow up on our meeting today...")
            .with_validation(
                V::length(Some(10), Some(2000))
                    .with_message("Content must be between 10 and 2000 characters"),
            ),
        P::optional("tone", "Tone", T::Select)
            .with_options(&["professional", "friendly", "formal", "casual"]),
        P::optional("senderName", "Your Name", T::Text).with_placeholder("Your full name"),
    ]
}

fn set_reminder() -> Vec<P> {
    vec![
        P::required("title", "Reminder Title", T::Text)
            .with_placeholder("Team meeting at 2 PM")
            .with_validation(
                V::length(Some(3), Some(100))
                    .with_message("Title must be between 3 and 100 characters"),
            ),
        P::optional("description", "Description", T::MultilineText)
            .with_placeholder("Don't forget to prepare the quarterly report"),
        P::required("reminderTime", "Reminder Date & Time", T::Date),
        P::optional("priority", "Priority", T::Select)
            .with_options(&["low", "medium", "high", "urgent"]),
        P::optional("category", "Category", T::Select).with_options(&[
            "work", "personal", "health", "finance", "social", "general",
        ]),
    ]
}

fn summarize_day() -> Vec<P> {
    vec![
        P::required("userEmail", "Your Email (for summary delivery)", T::Email)
            .with_placeholder("your.email@example.com")
            .with_validation(email_rule()),
        P::required("date", "Date to Summarize", T::Date),
        P::optional("includeSchedule", "Include Schedule", T::Boolean),
        P::optional("includeTasks", "Include Completed Tasks", T::Boolean),
        P::optional("includeEmails", "Include Email Summary", T::Boolean),
        P::optional("detailLevel", "Detail Level", T::Select)
            .with_options(&["brief", "medium", "detailed"]),
    ]
}

// office

fn create_report() -> Vec<P> {
    vec![
        P::required("title", "Report Title", T::Text)
            .with_placeholder("Q4 Sales Analysis Report")
            .with_validation(
                V::length(Some(5), Some(100))
                    .with_message("Title must be between 5 and 100 characters"),
            ),
        P::required("dataSource", "Data Source", T::MultilineText)
            .with_placeholder("Paste your data or describe the data source...")
            .with_validation(
                V::length(Some(20), None)
                    .with_message("Please provide sufficient data or description"),
            ),
        P::optional("reportType", "Report Type", T::Select).with_options(&[
            "analysis",
            "summary",
            "comparison",
            "trend",
            "performance",
        ]),
        P::optional("includeCharts", "Include Charts", T::Boolean),
        P::optional("format", "Output Format", T::Select)
            .with_options(&["pdf", "docx", "html", "markdown"]),
    ]
}

fn schedule_meeting() -> Vec<P> {
    vec![
        P::required("title", "Meeting Title", T::Text)
            .with_placeholder("Project Review Meeting")
            .with_validation(
                V::length(Some(3), Some(100))
                    .with_message("Title must be between 3 and 100 characters"),
            ),
        P::optional("description", "Meeting Description", T::MultilineText)
            .with_placeholder("Agenda and meeting objectives"),
        P::required("attendees", "Attendee Emails (one per line)", T::MultilineText)
            .with_placeholder("john@company.com\nmary@company.com\nteam@company.com"),
        P::required("duration", "Duration (minutes)", T::Number)
            .with_placeholder("60")
            .with_validation(
                V::range(15.0, 480.0).with_message("Duration must be between 15 and 480 minutes"),
            ),
        P::optional("location", "Location", T::Text)
            .with_placeholder("Conference Room A or Zoom link"),
        P::optional("meetingType", "Meeting Type", T::Select)
            .with_options(&["virtual", "in-person", "hybrid"]),
    ]
}

fn create_presentation() -> Vec<P> {
    vec![
        P::required("title", "Presentation Title", T::Text)
            .with_placeholder("AI in Modern Business")
            .with_validation(
                V::length(Some(5), Some(100))
                    .with_message("Title must be between 5 and 100 characters"),
            ),
        P::required("topic", "Topic Description", T::MultilineText)
            .with_placeholder("Describe the main topic and key points to cover...")
            .with_validation(
                V::length(Some(20), None).with_message("Please provide a detailed topic description"),
            ),
        P::optional("slideCount", "Number of Slides", T::Number).with_placeholder("10"),
        P::optional("audience", "Target Audience", T::Select).with_options(&[
            "executives",
            "professionals",
            "students",
            "general",
            "technical",
        ]),
        P::optional("style", "Presentation Style", T::Select).with_options(&[
            "business",
            "academic",
            "creative",
            "minimal",
            "corporate",
        ]),
        P::optional("includeImages", "Include Image Suggestions", T::Boolean),
    ]
}

// research & study

fn summarize_video() -> Vec<P> {
    vec![
        P::required("youtubeUrl", "YouTube URL", T::Url)
            .with_placeholder("https://www.youtube.com/watch?v=...")
            .with_validation(
                V::pattern(YOUTUBE_PATTERN).with_message("Please enter a valid YouTube URL"),
            ),
        P::optional("summaryType", "Summary Type", T::Select).with_options(&[
            "detailed",
            "key_points",
            "transcript",
            "chapter_summary",
        ]),
        P::optional("includeTimestamps", "Include Timestamps", T::Boolean),
        P::optional("language", "Language", T::Select).with_options(&[
            "english",
            "spanish",
            "french",
            "german",
            "italian",
            "portuguese",
            "hindi",
            "chinese",
            "japanese",
            "auto-detect",
        ]),
    ]
}

fn research_topic() -> Vec<P> {
    vec![
        P::required("topic", "Research Topic", T::Text)
            .with_placeholder("Climate change impact on agriculture")
            .with_validation(
                V::length(Some(5), Some(200))
                    .with_message("Topic must be between 5 and 200 characters"),
            ),
        P::optional("researchDepth", "Research Depth", T::Select).with_options(&[
            "basic",
            "detailed",
            "comprehensive",
            "academic",
        ]),
        P::optional("sourcesRequired", "Number of Sources", T::Number).with_placeholder("5"),
        P::optional("includeStats", "Include Statistics", T::Boolean),
        P::optional("includeCitations", "Include Citations", T::Boolean),
        P::optional("academicLevel", "Academic Level", T::Select).with_options(&[
            "general",
            "high_school",
            "undergraduate",
            "graduate",
            "professional",
        ]),
    ]
}

fn create_notes() -> Vec<P> {
    vec![
        P::required("sourceContent", "Source Content", T::MultilineText)
            .with_placeholder("Paste text, URL, or describe the content to create notes from...")
            .with_validation(
                V::length(Some(50), None)
                    .with_message("Please provide sufficient content (minimum 50 characters)"),
            ),
        P::optional("contentType", "Content Type", T::Select).with_options(&[
            "text", "url", "pdf", "article", "lecture", "book",
        ]),
        P::optional("noteStyle", "Note Style", T::Select).with_options(&[
            "bullet_points",
            "structured",
            "mind_map",
            "cornell",
            "outline",
        ]),
        P::optional("includeQuestions", "Include Study Questions", T::Boolean),
        P::optional("includeKeyTerms", "Include Key Terms", T::Boolean),
    ]
}

// creative

fn write_blog() -> Vec<P> {
    vec![
        P::required("topic", "Blog Topic", T::Text)
            .with_placeholder("10 Tips for Remote Work Productivity")
            .with_validation(
                V::length(Some(10), Some(200))
                    .with_message("Topic must be between 10 and 200 characters"),
            ),
        P::optional("audience", "Target Audience", T::Select).with_options(&[
            "general",
            "professionals",
            "beginners",
            "experts",
            "students",
            "entrepreneurs",
        ]),
        P::optional("tone", "Writing Tone", T::Select).with_options(&[
            "informative",
            "conversational",
            "professional",
            "humorous",
            "inspirational",
        ]),
        P::optional("wordCount", "Word Count", T::Number).with_placeholder("800"),
        P::optional("includeOutline", "Include Outline", T::Boolean),
        P::optional("seoOptimized", "SEO Optimized", T::Boolean),
    ]
}

fn design_logo() -> Vec<P> {
    vec![
        P::required("companyName", "Company Name", T::Text)
            .with_placeholder("TechStart Inc.")
            .with_validation(
                V::length(Some(2), Some(50))
                    .with_message("Company name must be between 2 and 50 characters"),
            ),
        P::required("industry", "Industry", T::Select).with_options(&[
            "technology",
            "healthcare",
            "finance",
            "education",
            "retail",
            "food",
            "consulting",
            "creative",
            "manufacturing",
            "other",
        ]),
        P::optional("style", "Logo Style", T::Select).with_options(&[
            "modern",
            "classic",
            "minimalist",
            "bold",
            "playful",
            "elegant",
            "tech",
        ]),
        P::optional("colors", "Preferred Colors (comma-separated)", T::Text)
            .with_placeholder("blue, white, gray"),
        P::optional("includeText", "Include Company Name in Logo", T::Boolean),
        P::optional("conceptCount", "Number of Concepts", T::Number).with_placeholder("3"),
    ]
}

fn social_media() -> Vec<P> {
    vec![
        P::required("platform", "Platform", T::Select).with_options(&[
            "instagram",
            "twitter",
            "linkedin",
            "facebook",
            "tiktok",
            "youtube",
        ]),
        P::required("topic", "Post Topic", T::Text)
            .with_placeholder("Monday motivation for entrepreneurs")
            .with_validation(
                V::length(Some(5), Some(200))
                    .with_message("Topic must be between 5 and 200 characters"),
            ),
        P::optional("tone", "Tone", T::Select).with_options(&[
            "engaging",
            "professional",
            "casual",
            "humorous",
            "inspirational",
            "educational",
        ]),
        P::optional("includeHashtags", "Include Hashtags", T::Boolean),
        P::optional("includeEmojis", "Include Emojis", T::Boolean),
        P::optional("postType", "Post Type", T::Select).with_options(&[
            "text", "image", "video", "carousel", "story", "reel",
        ]),
    ]
}

// business

fn create_invoice() -> Vec<P> {
    vec![
        P::required("clientName", "Client Name", T::Text)
            .with_placeholder("Acme Corporation")
            .with_validation(
                V::length(Some(2), Some(100))
                    .with_message("Client name must be between 2 and 100 characters"),
            ),
        P::required("clientEmail", "Client Email", T::Email)
            .with_placeholder("billing@acme.com")
            .with_validation(email_rule()),
        P::required("items", "Invoice Items (JSON format or description)", T::MultilineText)
            .with_placeholder(
                "Web Development - 40 hours at $75/hour\nConsulting - 10 hours at $100/hour",
            ),
        P::required("dueDate", "Due Date", T::Date),
        P::optional("currency", "Currency", T::Select)
            .with_options(&["USD", "EUR", "GBP", "INR", "CAD", "AUD", "JPY"]),
        P::optional("taxRate", "Tax Rate (%)", T::Number).with_placeholder("0"),
        P::optional("notes", "Additional Notes", T::MultilineText)
            .with_placeholder("Payment terms, special instructions, etc."),
    ]
}

fn market_analysis() -> Vec<P> {
    vec![
        P::required("industry", "Industry", T::Text)
            .with_placeholder("E-commerce software")
            .with_validation(
                V::length(Some(3), Some(100))
                    .with_message("Industry must be between 3 and 100 characters"),
            ),
        P::required("targetMarket", "Target Market", T::Text)
            .with_placeholder("Small to medium businesses")
            .with_validation(
                V::length(Some(5), Some(200))
                    .with_message("Target market must be between 5 and 200 characters"),
            ),
        P::optional("competitors", "Known Competitors (one per line)", T::MultilineText)
            .with_placeholder("Shopify\nWooCommerce\nBigCommerce"),
        P::optional("analysisType", "Analysis Type", T::Select).with_options(&[
            "basic",
            "detailed",
            "comprehensive",
            "competitive",
        ]),
        P::optional("includeSwot", "Include SWOT Analysis", T::Boolean),
        P::optional("includeTrends", "Include Market Trends", T::Boolean),
        P::optional("region", "Geographic Region", T::Select).with_options(&[
            "global",
            "north_america",
            "europe",
            "asia_pacific",
            "india",
            "local",
        ]),
    ]
}

fn business_plan() -> Vec<P> {
    vec![
        P::required("businessName", "Business Name", T::Text)
            .with_placeholder("InnovateTech Solutions")
            .with_validation(
                V::length(Some(2), Some(100))
                    .with_message("Business name must be between 2 and 100 characters"),
            ),
        P::required("industry", "Industry", T::Text)
            .with_placeholder("Software Development")
            .with_validation(
                V::length(Some(3), Some(100))
                    .with_message("Industry must be between 3 and 100 characters"),
            ),
        P::required("businessType", "Business Type", T::Select).with_options(&[
            "startup",
            "expansion",
            "acquisition",
            "franchise",
            "partnership",
        ]),
        P::required("targetMarket", "Target Market", T::MultilineText)
            .with_placeholder("Describe your target customers, market size, demographics...")
            .with_validation(
                V::length(Some(20), None)
                    .with_message("Please provide a detailed target market description"),
            ),
        P::optional("fundingNeeded", "Funding Needed ($)", T::Number).with_placeholder("100000"),
        P::optional("timeframe", "Planning Timeframe", T::Select)
            .with_options(&["1_year", "3_years", "5_years", "10_years"]),
        P::optional("includeFinancials", "Include Financial Projections", T::Boolean),
    ]
}

// web scraper

fn scrape_url() -> Vec<P> {
    vec![
        P::required("url", "Website URL", T::Text).with_placeholder("https://example.com"),
        P::required("jobName", "Job Name", T::Text).with_placeholder("Product Analysis Job"),
        P::optional("category", "Content Category", T::Select)
            .with_options(&["general", "news", "ecommerce", "research", "social", "monitoring"])
            .with_default("general"),
        P::optional("extractionType", "Extraction Type", T::Select)
            .with_options(&["general", "news", "product", "research"])
            .with_default("general"),
    ]
}
