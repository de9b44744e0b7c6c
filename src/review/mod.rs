pub mod result;

pub use result::{normalize, ReviewResult};

use crate::ai::prompt;
use crate::ai::provider::{GenerationParams, GroqProvider};
use crate::config::Config;
use crate::infrastructure::error::ReviewError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// 交给展示层的上下文
///
/// 无论哪种失败都会填充成可渲染的形状，渲染本身不在本服务范围内。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewContext {
    pub user_code: String,
    pub ai_result: Option<ReviewResult>,
    pub error: Option<String>,
    pub debug: Option<String>,
}

impl ReviewContext {
    /// 初始表单状态的空上下文
    pub fn empty() -> Self {
        Self::default()
    }
}

/// 健康探测结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        HealthStatus {
            status: "healthy".to_string(),
            error: None,
        }
    }

    pub fn unhealthy(reason: impl Into<String>) -> Self {
        HealthStatus {
            status: "unhealthy".to_string(),
            error: Some(reason.into()),
        }
    }
}

/// 调用前校验：空输入和缺失配置都不触发模型调用
fn validate(user_code: &str, config: &Config) -> Result<(), ReviewError> {
    if user_code.is_empty() {
        return Err(ReviewError::input("Please enter some code to review."));
    }
    if !config.is_configured() {
        return Err(ReviewError::config(
            "API key not configured. Please check your .env file.",
        ));
    }
    Ok(())
}

/// 审查编排：校验输入 → 构建提示词 → 单次模型调用 → 规范化。
///
/// 四种互斥出口，按优先级判定：空输入、未配置、成功、调用失败。
/// 不重试、不缓存、不限流。
pub async fn review(user_code: &str, config: &Config, provider: &GroqProvider) -> ReviewContext {
    let user_code = user_code.trim();
    let mut context = ReviewContext {
        user_code: user_code.to_string(),
        ..Default::default()
    };

    if let Err(err) = validate(user_code, config) {
        context.error = Some(format!("❌ {}", err.detail()));
        return context;
    }

    let prompt_text = prompt::review_prompt(user_code);
    match provider
        .chat(
            Some(prompt::SYSTEM_PROMPT),
            &prompt_text,
            config,
            &GenerationParams::review(),
        )
        .await
    {
        Ok(ai_output) => {
            let result = normalize(&ai_output);
            // 规范化失败时把错误同时提升为顶层错误
            if let Some(message) = &result.error {
                warn!("model output failed normalization: {}", message);
                context.error = Some(message.clone());
            }
            context.ai_result = Some(result);
        }
        Err(err) => {
            warn!("model call failed: {}", err);
            context.error = Some(format!("❌ API Error: {}", err.detail()));
            context.debug = Some(format!("{:?}", err));
            context.ai_result = Some(ReviewResult::failure(
                format!("API Error: {}", err.detail()),
                "Unable to get AI response.",
            ));
        }
    }

    context
}

/// 健康探测：一次最小的模型调用，只与编排器共享配置
pub async fn health_check(config: &Config, provider: &GroqProvider) -> HealthStatus {
    if !config.is_configured() {
        return HealthStatus::unhealthy("API Key not configured");
    }

    match provider
        .chat(None, prompt::PROBE_PROMPT, config, &GenerationParams::probe())
        .await
    {
        Ok(_) => HealthStatus::healthy(),
        Err(err) => HealthStatus::unhealthy(err.detail().to_string()),
    }
}
