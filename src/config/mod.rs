use std::env;
use std::path::PathBuf;

/// Groq chat completions 接口默认地址
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// 默认审查模型
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
}

impl Config {
    pub fn new() -> Self {
        // 默认配置
        let mut config = Config {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        };

        // 加载配置文件
        #[cfg(not(test))]
        config.load_from_env_file();
        // 加载环境变量（覆盖配置文件）
        config.load_from_env();

        config
    }

    pub fn load_from_env_file(&mut self) {
        // 尝试从用户主目录加载
        if let Ok(home) = env::var("HOME") {
            let user_env_path = PathBuf::from(format!("{}/.ai-review/.env", home));
            if user_env_path.exists() {
                dotenvy::from_path(user_env_path).ok();
            }
        }

        // 尝试从当前目录加载
        dotenvy::dotenv().ok();
    }

    pub fn load_from_env(&mut self) {
        if let Ok(api_key) = env::var("GROQ_API_KEY") {
            self.api_key = Some(api_key);
        }
        if let Ok(url) = env::var("GROQ_API_URL") {
            self.api_url = url;
        }
        if let Ok(model) = env::var("AI_REVIEW_MODEL") {
            self.model = model;
        }
    }

    pub fn update_from_args(&mut self, args: &crate::cli::args::Args) {
        // 命令行参数优先级最高
        if !args.model.is_empty() {
            self.model = args.model.clone();
        }
    }

    /// API key 已设置且非空
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .map_or(false, |key| !key.trim().is_empty())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.is_configured() {
            anyhow::bail!("Groq API key is required but not set. Please set GROQ_API_KEY environment variable or in .env file");
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
