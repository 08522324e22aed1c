//! Params - 型のないフォーム値を寛容に読むリーダー
//!
//! どのアクセサも、キーがない・空白・要求した型に変換できない場合に使う
//! デフォルトを受け取る。ここで失敗することはない。

use chrono::NaiveDate;

use crate::domain::{ParamMap, param_text};

pub struct Params<'a> {
    values: &'a ParamMap,
    today: NaiveDate,
}

impl<'a> Params<'a> {
    /// `today` backs date fields that default to the current day.
    pub fn new(values: &'a ParamMap, today: NaiveDate) -> Self {
        Self { values, today }
    }

    pub fn raw(&self) -> &'a ParamMap {
        self.values
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Non-blank text of `key`, as given.
    pub fn text(&self, key: &str) -> Option<String> {
        param_text(self.values, key).filter(|s| !s.trim().is_empty())
    }

    /// Non-blank text of `key`, trimmed.
    pub fn trimmed(&self, key: &str) -> Option<String> {
        self.text(key).map(|s| s.trim().to_string())
    }

    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.text(key).unwrap_or_else(|| default.to_string())
    }

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.text(key).map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => default,
        }
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        let text = self.text(key)?;
        let text = text.trim();
        text.parse::<i64>().ok().or_else(|| {
            text.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        })
    }

    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        self.int(key).unwrap_or(default)
    }

    pub fn float(&self, key: &str) -> Option<f64> {
        self.text(key)?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
    }

    pub fn float_or(&self, key: &str, default: f64) -> f64 {
        self.float(key).unwrap_or(default)
    }

    /// A list field. JSON arrays are taken element-wise; text is split on
    /// newlines and commas. Empty entries are dropped.
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.values.get(key) {
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .filter_map(crate::domain::value_text)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            _ => self
                .text(key)
                .map(|text| {
                    text.split(['\n', ','])
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Like [`Params::list`] but `None` when the list is empty.
    pub fn opt_list(&self, key: &str) -> Option<Vec<String>> {
        Some(self.list(key)).filter(|l| !l.is_empty())
    }

    /// `key` as `YYYY-MM-DD`, defaulting to today.
    pub fn date_or_today(&self, key: &str) -> String {
        self.text(key)
            .unwrap_or_else(|| self.today.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn map(pairs: &[(&str, serde_json::Value)]) -> ParamMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let m = map(&[("tone", json!("  "))]);
        let p = Params::new(&m, today());
        assert_eq!(p.string_or("tone", "professional"), "professional");
    }

    #[rstest]
    #[case(json!("true"), false, true)]
    #[case(json!("FALSE"), true, false)]
    #[case(json!(true), false, true)]
    #[case(json!("yes"), true, true)]
    #[case(json!("yes"), false, false)]
    #[case(json!(""), true, true)]
    fn bool_coercion(#[case] value: serde_json::Value, #[case] default: bool, #[case] expected: bool) {
        let m = map(&[("flag", value)]);
        assert_eq!(Params::new(&m, today()).bool_or("flag", default), expected);
    }

    #[test]
    fn int_accepts_integral_floats_only() {
        let m = map(&[("a", json!("42")), ("b", json!(" 7.0 ")), ("c", json!("7.5")), ("d", json!(12))]);
        let p = Params::new(&m, today());
        assert_eq!(p.int("a"), Some(42));
        assert_eq!(p.int("b"), Some(7));
        assert_eq!(p.int("c"), None);
        assert_eq!(p.int("d"), Some(12));
        assert_eq!(p.int_or("missing", 10), 10);
    }

    #[test]
    fn list_splits_text_and_reads_arrays() {
        let m = map(&[
            ("attendees", json!("a@x.com\n b@x.com ,\n\nc@x.com")),
            ("colors", json!(["blue", " ", "white"])),
        ]);
        let p = Params::new(&m, today());
        assert_eq!(p.list("attendees"), ["a@x.com", "b@x.com", "c@x.com"]);
        assert_eq!(p.list("colors"), ["blue", "white"]);
        assert_eq!(p.opt_list("missing"), None);
    }

    #[test]
    fn date_defaults_to_today() {
        let m = ParamMap::new();
        assert_eq!(Params::new(&m, today()).date_or_today("date"), "2026-10-18");
    }
}
