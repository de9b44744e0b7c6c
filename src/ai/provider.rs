use crate::ai::http::shared_client;
use crate::config::Config;
use crate::infrastructure::error::ReviewError;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// OpenAI 兼容 Chat Completion 请求
#[derive(Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub stream: bool,
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

/// Chat 消息
#[derive(Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// OpenAI 兼容 Chat Completion 响应
#[derive(Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

/// 响应选择
#[derive(Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChatMessageResponse>,
}

/// 完整消息响应
#[derive(Deserialize)]
pub struct ChatMessageResponse {
    pub content: String,
}

/// 生成参数
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: Option<f32>,
}

impl GenerationParams {
    /// 代码审查参数：低随机性，足够的输出空间
    pub fn review() -> Self {
        Self {
            temperature: 0.1,
            max_tokens: 2000,
            top_p: Some(0.9),
        }
    }

    /// 健康探测参数：最小开销
    pub fn probe() -> Self {
        Self {
            temperature: 0.1,
            max_tokens: 10,
            top_p: None,
        }
    }
}

/// Groq Provider
///
/// Groq 暴露 OpenAI 兼容的 chat completions 接口，
/// 每次调用发送一个非流式请求并取第一个 choice 的消息内容。
pub struct GroqProvider {
    client: &'static Client,
}

impl Default for GroqProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GroqProvider {
    pub fn new() -> Self {
        Self {
            client: shared_client(),
        }
    }

    /// 发送一次 Chat Completion 调用并提取文本内容
    pub async fn chat(
        &self,
        system: Option<&str>,
        prompt: &str,
        config: &Config,
        params: &GenerationParams,
    ) -> Result<String, ReviewError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ReviewError::config("Groq API key is required"))?;

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: prompt,
        });

        let request = ChatCompletionRequest {
            model: &config.model,
            messages,
            stream: false,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            top_p: params.top_p,
        };

        let response = self
            .client
            .post(&config.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ReviewError::transport(format!(
                "Groq request failed: {} - {}",
                status, text
            )));
        }

        let chat_response: ChatCompletionResponse = response.json().await?;

        chat_response
            .choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .map(|message| message.content.clone())
            .ok_or_else(|| ReviewError::transport("Groq response contained no choices"))
    }
}
