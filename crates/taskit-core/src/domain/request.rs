//! ゲートウェイに渡す実行リクエスト

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::task_type::TaskType;

/// Untyped form values, keyed by parameter key.
///
/// This is the only stringly-typed representation in the pipeline; the mapper
/// turns it into a typed payload before anything goes on the wire.
pub type ParamMap = BTreeMap<String, serde_json::Value>;

/// One task invocation. Built fresh per call and dropped afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskExecutionRequest {
    pub task_id: String,
    pub task_type: TaskType,
    pub parameters: ParamMap,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl TaskExecutionRequest {
    pub fn new(task_id: impl Into<String>, task_type: TaskType, parameters: ParamMap) -> Self {
        Self {
            task_id: task_id.into(),
            task_type,
            parameters,
            user_id: None,
        }
    }

    /// Build a request whose task type is derived from the task id.
    pub fn for_task(task_id: impl Into<String>, parameters: ParamMap) -> Self {
        let task_id = task_id.into();
        let task_type = TaskType::for_task_id(&task_id);
        Self::new(task_id, task_type, parameters)
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_param(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.parameters.insert(key.to_string(), value.into());
        self
    }
}

/// String form of a parameter value. `null` counts as absent.
pub fn value_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// String form of `params[key]`, if present.
pub fn param_text(params: &ParamMap, key: &str) -> Option<String> {
    params.get(key).and_then(value_text)
}

/// Convert string form values into a [`ParamMap`].
pub fn params_from_strings<'a, I>(values: I) -> ParamMap
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    values
        .into_iter()
        .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_task_derives_task_type() {
        let req = TaskExecutionRequest::for_task("send_email", ParamMap::new())
            .with_param("recipientEmail", "a@b.com");
        assert_eq!(req.task_type, TaskType::Email);
        assert_eq!(req.parameters["recipientEmail"], "a@b.com");
        assert!(req.user_id.is_none());
    }

    #[test]
    fn param_text_stringifies_non_strings() {
        let mut params = ParamMap::new();
        params.insert("duration".into(), serde_json::json!(60));
        params.insert("includeCharts".into(), serde_json::json!(true));
        params.insert("notes".into(), serde_json::Value::Null);
        assert_eq!(param_text(&params, "duration").as_deref(), Some("60"));
        assert_eq!(param_text(&params, "includeCharts").as_deref(), Some("true"));
        assert_eq!(param_text(&params, "notes"), None);
        assert_eq!(param_text(&params, "missing"), None);
    }

    #[test]
    fn params_from_strings_wraps_values() {
        let mut form = BTreeMap::new();
        form.insert("tone".to_string(), "casual".to_string());
        let params = params_from_strings(&form);
        assert_eq!(params["tone"], serde_json::json!("casual"));
    }
}
