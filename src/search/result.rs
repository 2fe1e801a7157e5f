//! Normalising the text returned by the search backend

use serde_json::Value;

/// Turn a raw response body into the text shown in the result panel.
///
/// The flight search agent sometimes hands back its run history instead of
/// prose. When the body is a `{"done": {"text": ...}}` object, or a list of
/// steps where the last `done` step carries text, that text is used. Anything
/// else is returned as is, minus trailing whitespace.
pub fn normalize_result_text(body: &str) -> String {
    let extracted = match serde_json::from_str::<Value>(body) {
        Ok(value) => done_text(&value).map(str::to_string),
        Err(_) => None,
    };

    extracted.as_deref().unwrap_or(body).trim_end().to_string()
}

fn done_text(value: &Value) -> Option<&str> {
    match value {
        Value::Object(_) => value.get("done")?.get("text")?.as_str(),
        Value::Array(steps) => steps
            .iter()
            .rev()
            .find(|step| step.get("done").is_some())
            .and_then(|step| step.get("done")?.get("text")?.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(normalize_result_text("Flight found: $450"), "Flight found: $450");
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        assert_eq!(normalize_result_text("Flight found: $450\n\n"), "Flight found: $450");
    }

    #[test]
    fn test_done_object() {
        let body = r#"{"done": {"text": "Cheapest: Alaska Airlines, $237", "success": true}}"#;
        assert_eq!(normalize_result_text(body), "Cheapest: Alaska Airlines, $237");
    }

    #[test]
    fn test_history_uses_last_done_step() {
        let body = r#"[
            {"go_to_url": {"url": "https://www.google.com/flights"}},
            {"done": {"text": "first attempt"}},
            {"click_element": {"index": 4}},
            {"done": {"text": "Oman Air, one-way, $412"}}
        ]"#;
        assert_eq!(normalize_result_text(body), "Oman Air, one-way, $412");
    }

    #[test]
    fn test_json_without_done_is_shown_raw() {
        let body = r#"{"price": 450}"#;
        assert_eq!(normalize_result_text(body), body);
        assert_eq!(normalize_result_text("[]"), "[]");
        assert_eq!(normalize_result_text("450"), "450");
    }
}
