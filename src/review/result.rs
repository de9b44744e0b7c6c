use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::infrastructure::error::ReviewError;

/// 规范化后的审查结果
///
/// 五个内容字段总是存在；消费方只根据 `error` 是否为空分支，
/// 不需要判断字段缺失。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewResult {
    pub syntax_errors: Vec<String>,
    pub logical_errors: Vec<String>,
    pub key_improvements: Vec<String>,
    pub fixed_code: String,
    pub explanation: String,
    /// 规范化失败时的错误描述
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// 规范化失败时保留的原始文本，用于诊断
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl ReviewResult {
    /// 构造失败结果：错误信息 + 原始文本，内容字段全部为空
    pub fn failure(error: impl Into<String>, raw: impl Into<String>) -> Self {
        ReviewResult {
            error: Some(error.into()),
            raw: Some(raw.into()),
            ..Default::default()
        }
    }
}

/// 将模型原始输出规范化为 ReviewResult。
///
/// 模型即使被明确要求输出严格 JSON，实际输出也不可信：
/// 可能带 markdown 代码围栏、缺少键、或根本不是 JSON。
/// 该函数是全函数，任何输入都返回可渲染的结果，不会 panic。
pub fn normalize(raw_text: &str) -> ReviewResult {
    let trimmed = raw_text.trim();
    let content = strip_code_fence(trimmed);

    match serde_json::from_str::<Map<String, Value>>(content) {
        Ok(object) => from_object(&object),
        Err(err) => {
            let err = ReviewError::from(err);
            ReviewResult::failure(
                format!("Failed to parse AI response as JSON: {}", err.detail()),
                trimmed,
            )
        }
    }
}

/// 去掉可选的 markdown 代码围栏。
/// 识别 ```json 前缀（7 字符）或裸 ``` 前缀（3 字符），
/// 以及对应的 ``` 后缀；两种风格都容忍，都不强制。
fn strip_code_fence(content: &str) -> &str {
    let stripped = if let Some(rest) = content.strip_prefix("```json") {
        rest
    } else if let Some(rest) = content.strip_prefix("```") {
        rest
    } else {
        return content;
    };

    stripped.strip_suffix("```").unwrap_or(stripped).trim()
}

/// 按五个期望键提取内容，缺失的键按类型补空值：
/// 键名含 "errors" / "improvements" 的补空列表，其余补空字符串。
/// 类型不符的键退回该字段的空默认值，整体解码不失败。
fn from_object(object: &Map<String, Value>) -> ReviewResult {
    ReviewResult {
        syntax_errors: string_list(object, "syntax_errors"),
        logical_errors: string_list(object, "logical_errors"),
        key_improvements: string_list(object, "key_improvements"),
        fixed_code: string_field(object, "fixed_code"),
        explanation: string_field(object, "explanation"),
        // 模型自带的 error/raw 键原样透传
        error: optional_string(object, "error"),
        raw: optional_string(object, "raw"),
    }
}

fn string_list(object: &Map<String, Value>, key: &str) -> Vec<String> {
    object
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

fn string_field(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn optional_string(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_complete_object() {
        let input = r#"{
            "syntax_errors": ["missing semicolon"],
            "logical_errors": ["off-by-one in loop"],
            "key_improvements": ["use iterators"],
            "fixed_code": "fn main() {}",
            "explanation": "looks fine"
        }"#;

        let result = normalize(input);
        assert_eq!(result.syntax_errors, vec!["missing semicolon"]);
        assert_eq!(result.logical_errors, vec!["off-by-one in loop"]);
        assert_eq!(result.key_improvements, vec!["use iterators"]);
        assert_eq!(result.fixed_code, "fn main() {}");
        assert_eq!(result.explanation, "looks fine");
        assert!(result.error.is_none());
        assert!(result.raw.is_none());
    }

    #[test]
    fn test_normalize_fills_missing_keys() {
        let result = normalize(r#"{"fixed_code": "x = 1"}"#);
        assert!(result.syntax_errors.is_empty());
        assert!(result.logical_errors.is_empty());
        assert!(result.key_improvements.is_empty());
        assert_eq!(result.fixed_code, "x = 1");
        assert_eq!(result.explanation, "");
        assert!(result.error.is_none());
    }

    #[test]
    fn test_normalize_strips_json_fence() {
        // 规范中的示例：带 json 标签的围栏加首尾空白
        let input = "  ```json\n{\"explanation\":\"ok\"}\n```  ";
        let result = normalize(input);
        assert_eq!(result.explanation, "ok");
        assert!(result.syntax_errors.is_empty());
        assert!(result.logical_errors.is_empty());
        assert!(result.key_improvements.is_empty());
        assert_eq!(result.fixed_code, "");
        assert!(result.error.is_none());
    }

    #[test]
    fn test_normalize_strips_untagged_fence() {
        let input = "```\n{\"explanation\":\"ok\"}\n```";
        assert_eq!(normalize(input), normalize("{\"explanation\":\"ok\"}"));
    }

    #[test]
    fn test_fenced_and_unfenced_agree() {
        let body = r#"{"syntax_errors": ["a"], "fixed_code": "b"}"#;
        let fenced = format!("```json\n{}\n```", body);
        assert_eq!(normalize(&fenced), normalize(body));
    }

    #[test]
    fn test_normalize_invalid_json() {
        // 规范中的示例：非 JSON 输入
        let result = normalize("not json");
        let error = result.error.expect("error must be set");
        assert!(error.starts_with("Failed to parse AI response as JSON:"));
        assert_eq!(result.raw.as_deref(), Some("not json"));
        assert!(result.syntax_errors.is_empty());
        assert!(result.logical_errors.is_empty());
        assert!(result.key_improvements.is_empty());
        assert_eq!(result.fixed_code, "");
        assert_eq!(result.explanation, "");
    }

    #[test]
    fn test_normalize_preserves_trimmed_raw_on_failure() {
        let result = normalize("   broken {   ");
        assert_eq!(result.raw.as_deref(), Some("broken {"));
    }

    #[test]
    fn test_normalize_json_array_is_failure() {
        // 顶层必须是对象
        let result = normalize(r#"["a", "b"]"#);
        assert!(result.error.is_some());
        assert_eq!(result.raw.as_deref(), Some(r#"["a", "b"]"#));
    }

    #[test]
    fn test_wrong_typed_keys_fall_back_to_defaults() {
        // syntax_errors 是字符串、fixed_code 是数字：字段退回空默认值，
        // 解码整体不失败
        let result = normalize(r#"{"syntax_errors": "oops", "fixed_code": 42, "explanation": "ok"}"#);
        assert!(result.error.is_none());
        assert!(result.syntax_errors.is_empty());
        assert_eq!(result.fixed_code, "");
        assert_eq!(result.explanation, "ok");
    }

    #[test]
    fn test_non_string_list_items_are_dropped() {
        let result = normalize(r#"{"key_improvements": ["keep", 1, null, "also keep"]}"#);
        assert_eq!(result.key_improvements, vec!["keep", "also keep"]);
    }

    #[test]
    fn test_model_supplied_error_key_passes_through() {
        let result = normalize(r#"{"error": "model declined", "explanation": "n/a"}"#);
        assert_eq!(result.error.as_deref(), Some("model declined"));
        assert_eq!(result.explanation, "n/a");
    }

    #[test]
    fn test_failure_result_shape() {
        let result = ReviewResult::failure("API Error: boom", "Unable to get AI response.");
        assert_eq!(result.error.as_deref(), Some("API Error: boom"));
        assert_eq!(result.raw.as_deref(), Some("Unable to get AI response."));
        assert!(result.syntax_errors.is_empty());
        assert_eq!(result.explanation, "");
    }

    #[test]
    fn test_serialization_skips_absent_error() {
        let ok = normalize(r#"{"explanation":"ok"}"#);
        let json = serde_json::to_string(&ok).unwrap();
        assert!(!json.contains("\"error\""));
        assert!(!json.contains("\"raw\""));

        let failed = normalize("nope");
        let json = serde_json::to_string(&failed).unwrap();
        assert!(json.contains("\"error\""));
        assert!(json.contains("\"raw\""));
    }
}
