/// 系统提示词：约束模型只返回合法 JSON
pub const SYSTEM_PROMPT: &str = "You are an expert code reviewer specializing in Python, JavaScript, Java, C++, and other programming languages. Always return valid JSON format without any additional text or markdown formatting.";

/// 健康探测提示词
pub const PROBE_PROMPT: &str = "Say 'OK'";

/// 构建代码审查提示词，固定五个输出键，用户代码原样嵌入
pub fn review_prompt(user_code: &str) -> String {
    format!(
        r#"You are an expert code reviewer. Analyze the following code and provide feedback in STRICT JSON format.

IMPORTANT: Return ONLY valid JSON with these exact keys:
- syntax_errors (array of strings)
- logical_errors (array of strings)
- key_improvements (array of strings)
- fixed_code (string with corrected code)
- explanation (string with detailed explanation)

Code to review:

{user_code}

Return JSON in this exact format (no additional text):
{{
  "syntax_errors": ["error1", "error2", ...],
  "logical_errors": ["error1", "error2", ...],
  "key_improvements": ["improvement1", "improvement2", ...],
  "fixed_code": "corrected code here",
  "explanation": "detailed explanation here"
}}"#
    )
}
