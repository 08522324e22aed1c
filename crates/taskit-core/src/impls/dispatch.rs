//! Dispatch 戦略
//!
//! # v2 デフォルト実装
//! `PriorityDispatch` がデフォルト。`PerTaskDispatch` はタスクごとの webhook に送る。

use tracing::debug;

use crate::domain::{TaskExecutionRequest, TaskType};
use crate::ports::DispatchStrategy;
use crate::typed::{Route, TaskFamily};

/// Default routing.
///
/// 1. exact task ids: `summarize_day`, `summarize_video`, `scrape_url`
/// 2. task types with a dedicated webhook: email, report, summary,
///    translation, content
/// 3. everything else: `webhook/{task type, lower-cased}`
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityDispatch;

impl PriorityDispatch {
    pub fn new() -> Self {
        Self
    }
}

impl DispatchStrategy for PriorityDispatch {
    fn select(&self, request: &TaskExecutionRequest) -> Route {
        let route = match (request.task_id.as_str(), request.task_type) {
            ("summarize_day", _) => Route::Family(TaskFamily::SummarizeDay),
            ("summarize_video", _) => Route::Family(TaskFamily::SummarizeVideo),
            ("scrape_url", _) => Route::Family(TaskFamily::WebScraper),
            (_, TaskType::Email) => Route::Family(TaskFamily::Email),
            (_, TaskType::Report) => Route::Family(TaskFamily::Report),
            (_, TaskType::Summary) => Route::Family(TaskFamily::Summary),
            (_, TaskType::Translation) => Route::Family(TaskFamily::Translation),
            (_, TaskType::Content) => Route::Family(TaskFamily::Content),
            (_, other) => Route::Generic(other.endpoint_segment()),
        };
        debug!(task_id = %request.task_id, task_type = %request.task_type, %route, "route selected");
        route
    }
}

/// Sends every catalog task to its own webhook; other ids fall back to
/// [`PriorityDispatch`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PerTaskDispatch {
    fallback: PriorityDispatch,
}

impl PerTaskDispatch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DispatchStrategy for PerTaskDispatch {
    fn select(&self, request: &TaskExecutionRequest) -> Route {
        match TaskFamily::for_task_id(&request.task_id) {
            Some(family) => {
                debug!(task_id = %request.task_id, %family, "route selected");
                Route::Family(family)
            }
            None => self.fallback.select(request),
        }
    }
}
