//! Validation - タスクフォームのクライアント側検証
//!
//! 2 つの入口が同じルールを共有する:
//! - [`FormValidator::validate`]: リクエスト全体の可否を返す。存在する値は
//!   空白も含めてすべて検証する。
//! - [`FormValidator::validate_form`] / [`FormValidator::validate_field`]:
//!   フォームの各入力欄に出すメッセージを返す。空白の任意フィールドには
//!   メッセージを出さない。

use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::catalog::ParameterCatalog;
use crate::domain::{ParamMap, ParameterType, TaskParameter, param_text};

#[derive(Debug, thiserror::Error)]
#[error("invalid validation pattern '{pattern}': {source}")]
pub struct InvalidPattern {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Checks form values against the descriptors of a [`ParameterCatalog`].
///
/// Patterns are compiled once, anchored at both ends, when the validator is built.
#[derive(Debug, Clone)]
pub struct FormValidator {
    catalog: Arc<ParameterCatalog>,
    patterns: HashMap<String, Regex>,
}

impl FormValidator {
    pub fn new(catalog: Arc<ParameterCatalog>) -> Result<Self, InvalidPattern> {
        let mut patterns = HashMap::new();
        for param in catalog.all_parameters() {
            let Some(pattern) = param.validation.as_ref().and_then(|v| v.pattern.as_ref()) else {
                continue;
            };
            if patterns.contains_key(pattern) {
                continue;
            }
            let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            patterns.insert(pattern.clone(), regex);
        }
        Ok(Self { catalog, patterns })
    }

    pub fn catalog(&self) -> &ParameterCatalog {
        &self.catalog
    }

    /// `true` when every required field is present and every present value
    /// satisfies its constraints. Tasks without a form always pass.
    pub fn validate(&self, task_id: &str, params: &ParamMap) -> bool {
        let ok = self
            .catalog
            .parameters_for(task_id)
            .iter()
            .all(|p| self.check_present(p, params).is_none());
        if !ok {
            tracing::debug!(task_id, "form validation failed");
        }
        ok
    }

    /// Message for every failing field, keyed by parameter key.
    pub fn validate_form(&self, task_id: &str, params: &ParamMap) -> BTreeMap<String, String> {
        self.catalog
            .parameters_for(task_id)
            .iter()
            .filter_map(|p| self.check(p, params).map(|msg| (p.key.clone(), msg)))
            .collect()
    }

    /// Constraint check for one value. Blank values never fail here; whether a
    /// blank is acceptable is a question of `required`, handled by the callers.
    pub fn validate_field(&self, param: &TaskParameter, value: &str) -> Option<String> {
        if value.trim().is_empty() {
            return None;
        }
        self.constraints(param, value)
    }

    /// Number, pattern and length rules. Number parsing only applies to
    /// non-blank values.
    fn constraints(&self, param: &TaskParameter, value: &str) -> Option<String> {
        if param.kind == ParameterType::Number
            && !value.trim().is_empty()
            && let Some(msg) = check_number(param, value)
        {
            return Some(msg);
        }

        let rule = param.validation.as_ref()?;

        if let Some(pattern) = &rule.pattern {
            let matched = self
                .patterns
                .get(pattern)
                .is_some_and(|re| re.is_match(value));
            if !matched {
                return Some(
                    rule.error_message
                        .clone()
                        .unwrap_or_else(|| "Invalid format".to_string()),
                );
            }
        }

        let len = value.chars().count();
        if let Some(min) = rule.min_length
            && len < min
        {
            return Some(format!("Minimum length is {min} characters"));
        }
        if let Some(max) = rule.max_length
            && len > max
        {
            return Some(format!("Maximum length is {max} characters"));
        }

        None
    }

    fn check(&self, param: &TaskParameter, params: &ParamMap) -> Option<String> {
        let value = param_text(params, &param.key).unwrap_or_default();
        if param.required && value.trim().is_empty() {
            return Some(format!("{} is required", param.display_name));
        }
        self.validate_field(param, &value)
    }

    /// Like `check`, but a value that is present runs every constraint even
    /// when blank. Absent and `null` values only fail when required.
    fn check_present(&self, param: &TaskParameter, params: &ParamMap) -> Option<String> {
        match param_text(params, &param.key) {
            None if param.required => Some(format!("{} is required", param.display_name)),
            None => None,
            Some(value) if param.required && value.trim().is_empty() => {
                Some(format!("{} is required", param.display_name))
            }
            Some(value) => self.constraints(param, &value),
        }
    }
}

fn check_number(param: &TaskParameter, value: &str) -> Option<String> {
    let Ok(number) = value.trim().parse::<f64>() else {
        return Some(format!("{} must be a number", param.display_name));
    };
    let rule = param.validation.as_ref()?;
    let below = rule.min_value.is_some_and(|min| number < min);
    let above = rule.max_value.is_some_and(|max| number > max);
    if below || above {
        return Some(rule.error_message.clone().unwrap_or_else(|| {
            format!(
                "Value must be between {} and {}",
                rule.min_value.unwrap_or(f64::MIN),
                rule.max_value.unwrap_or(f64::MAX)
            )
        }));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParameterValidation;
    use rstest::rstest;
    use serde_json::json;

    fn validator() -> FormValidator {
        FormValidator::new(Arc::new(ParameterCatalog::builtin())).unwrap()
    }

    fn params(pairs: &[(&str, serde_json::Value)]) -> ParamMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn well_formed_email_request_passes() {
        let p = params(&[
            ("recipientEmail", json!("a@b.com")),
            ("content", json!("Hello there, this is a test.")),
        ]);
        assert!(validator().validate("send_email", &p));
    }

    #[rstest]
    #[case::missing_recipient(vec![("content", json!("Hello there, this is a test."))])]
    #[case::blank_recipient(vec![("recipientEmail", json!("   ")), ("content", json!("Hello there, this is a test."))])]
    #[case::bad_email(vec![("recipientEmail", json!("not-an-email")), ("content", json!("Hello there, this is a test."))])]
    #[case::short_content(vec![("recipientEmail", json!("a@b.com")), ("content", json!("Hi"))])]
    fn invalid_email_request_fails(#[case] pairs: Vec<(&'static str, serde_json::Value)>) {
        assert!(!validator().validate("send_email", &params(&pairs)));
    }

    #[test]
    fn pattern_must_match_whole_value() {
        let p = params(&[
            ("youtubeUrl", json!("see https://youtube.com/watch?v=1")),
        ]);
        assert!(!validator().validate("summarize_video", &p));

        let p = params(&[("youtubeUrl", json!("https://youtu.be/abc"))]);
        assert!(validator().validate("summarize_video", &p));
    }

    #[test]
    fn pattern_failure_wins_over_length_compliance() {
        let v = validator();
        let param = &v.catalog().parameters_for("send_email")[0];
        assert_eq!(
            v.validate_field(param, "not-an-email").as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn unknown_task_always_validates() {
        assert!(validator().validate("no_such_task", &ParamMap::new()));
    }

    #[test]
    fn boolean_text_is_accepted() {
        let p = params(&[
            ("userEmail", json!("me@example.com")),
            ("date", json!("2026-10-18")),
            ("includeEmails", json!("true")),
            ("includeTasks", json!(false)),
        ]);
        assert!(validator().validate("summarize_day", &p));
    }

    #[rstest]
    #[case("60", true)]
    #[case("15", true)]
    #[case("480", true)]
    #[case("5", false)]
    #[case("1000", false)]
    #[case("an hour", false)]
    fn meeting_duration_bounds(#[case] duration: &str, #[case] ok: bool) {
        let p = params(&[
            ("title", json!("Project review")),
            ("attendees", json!("a@b.com")),
            ("duration", json!(duration)),
        ]);
        assert_eq!(validator().validate("schedule_meeting", &p), ok);
    }

    #[test]
    fn validate_form_reports_each_field() {
        let p = params(&[("recipientEmail", json!("nope")), ("content", json!(""))]);
        let errors = validator().validate_form("send_email", &p);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["recipientEmail"], "Please enter a valid email address");
        assert_eq!(errors["content"], "Email Content is required");
    }

    #[test]
    fn validate_field_length_messages() {
        let v = validator();
        let param = TaskParameter::optional("x", "X", ParameterType::Text)
            .with_validation(ParameterValidation::length(Some(3), Some(5)));
        assert_eq!(v.validate_field(&param, "ab").as_deref(), Some("Minimum length is 3 characters"));
        assert_eq!(v.validate_field(&param, "abcdef").as_deref(), Some("Maximum length is 5 characters"));
        assert_eq!(v.validate_field(&param, "abcd"), None);
        assert_eq!(v.validate_field(&param, ""), None);
    }

    #[test]
    fn length_counts_characters() {
        let v = validator();
        let param = TaskParameter::optional("x", "X", ParameterType::Text)
            .with_validation(ParameterValidation::length(None, Some(3)));
        assert_eq!(v.validate_field(&param, "äöü"), None);
    }

    fn profile_validator() -> FormValidator {
        let mut catalog = ParameterCatalog::new();
        catalog.insert(
            "profile",
            vec![
                TaskParameter::optional("nick", "Nickname", ParameterType::Text)
                    .with_validation(ParameterValidation::length(Some(3), None)),
                TaskParameter::optional("cc", "CC", ParameterType::Email)
                    .with_validation(ParameterValidation::pattern(crate::catalog::EMAIL_PATTERN)),
            ],
        );
        FormValidator::new(Arc::new(catalog)).unwrap()
    }

    #[rstest]
    #[case::absent(vec![], true)]
    #[case::null(vec![("nick", json!(null)), ("cc", json!(null))], true)]
    #[case::long_enough(vec![("nick", json!("abc"))], true)]
    #[case::too_short(vec![("nick", json!("ab"))], false)]
    #[case::blank_nick(vec![("nick", json!(""))], false)]
    #[case::blank_cc(vec![("cc", json!("  "))], false)]
    #[case::valid_cc(vec![("cc", json!("a@b.com"))], true)]
    fn present_optional_values_are_checked(
        #[case] pairs: Vec<(&'static str, serde_json::Value)>,
        #[case] ok: bool,
    ) {
        assert_eq!(profile_validator().validate("profile", &params(&pairs)), ok);
    }

    #[test]
    fn blank_optional_field_has_no_form_message() {
        let p = params(&[("nick", json!("")), ("cc", json!("  "))]);
        assert!(profile_validator().validate_form("profile", &p).is_empty());
    }

    #[test]
    fn invalid_pattern_is_rejected_at_construction() {
        let mut catalog = ParameterCatalog::new();
        catalog.insert(
            "broken",
            vec![
                TaskParameter::required("x", "X", ParameterType::Text)
                    .with_validation(ParameterValidation::pattern("(unclosed")),
            ],
        );
        let err = FormValidator::new(Arc::new(catalog)).unwrap_err();
        assert_eq!(err.pattern, "(unclosed");
    }
}
