//! WebhookPayload trait - リクエストボディの型を webhook に結びつける

use serde::Serialize;

use super::params::Params;

/// A typed request body for one task family.
///
/// # Example
/// ```ignore
/// #[derive(Serialize)]
/// struct PingRequest { message: String }
///
/// impl WebhookPayload for PingRequest {
///     const PATH: &'static str = "webhook/ping-task";
///
///     fn from_params(params: &Params<'_>) -> Self {
///         Self { message: params.string_or("message", "hello") }
///     }
/// }
/// ```
///
/// `from_params` is total: missing or malformed values fall back to the
/// family's defaults instead of failing.
pub trait WebhookPayload: Serialize + Send + Sync + 'static {
    /// Path under the base URL, without a leading slash.
    const PATH: &'static str;

    fn from_params(params: &Params<'_>) -> Self;
}
