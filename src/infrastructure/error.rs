use thiserror::Error;

/// 审查服务错误类型
///
/// 四类错误全部在编排层就地恢复，转换为可渲染的上下文，
/// 不会作为故障向 Web 调用方传播。
#[derive(Error, Debug, Clone)]
pub enum ReviewError {
    #[error("Input error: {message}")]
    Input { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Decode error: {message}")]
    Decode { message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },
}

impl ReviewError {
    /// 创建输入错误
    pub fn input(message: impl Into<String>) -> Self {
        ReviewError::Input {
            message: message.into(),
        }
    }

    /// 创建配置错误
    pub fn config(message: impl Into<String>) -> Self {
        ReviewError::Configuration {
            message: message.into(),
        }
    }

    /// 创建解析错误
    pub fn decode(message: impl Into<String>) -> Self {
        ReviewError::Decode {
            message: message.into(),
        }
    }

    /// 创建网络/调用错误
    pub fn transport(message: impl Into<String>) -> Self {
        ReviewError::Transport {
            message: message.into(),
        }
    }

    /// 不带错误类别前缀的原始描述，用于拼接面向用户的提示
    pub fn detail(&self) -> &str {
        match self {
            ReviewError::Input { message }
            | ReviewError::Configuration { message }
            | ReviewError::Decode { message }
            | ReviewError::Transport { message } => message,
        }
    }
}

// 实现从常见错误类型的转换
impl From<reqwest::Error> for ReviewError {
    fn from(error: reqwest::Error) -> Self {
        ReviewError::Transport {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReviewError {
    fn from(error: serde_json::Error) -> Self {
        ReviewError::Decode {
            message: error.to_string(),
        }
    }
}
