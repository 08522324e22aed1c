//! DispatchStrategy ポート - リクエストからルートを決める

use crate::domain::TaskExecutionRequest;
use crate::typed::Route;

/// Picks the webhook for one invocation.
///
/// # Implementations
/// - `PriorityDispatch`: exact task-id matches, then task type, then generic
/// - `PerTaskDispatch`: a dedicated webhook for every catalog task
pub trait DispatchStrategy: Send + Sync {
    fn select(&self, request: &TaskExecutionRequest) -> Route;
}
