use tracing::Level;
use tracing_subscriber::EnvFilter;

/// 日志配置
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Level,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: LogFormat::Pretty,
        }
    }
}

/// 日志格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// 人类可读的格式
    Pretty,
    /// 紧凑格式
    Compact,
}

impl LogFormat {
    /// 从命令行参数解析，未知值回退到 Pretty
    pub fn parse(value: &str) -> Self {
        match value {
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        }
    }
}

/// 设置日志系统
pub fn setup_logging(config: LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive(format!("ai_review={}", config.level).parse()?);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}
