use ai_review::ai::provider::GroqProvider;
use ai_review::cli::args::Args;
use ai_review::config::Config;
use ai_review::infrastructure::logging::{setup_logging, LogFormat, LoggingConfig};
use ai_review::server::{start_server, AppState};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    setup_logging(LoggingConfig {
        format: LogFormat::parse(&args.log_format),
        ..Default::default()
    })?;

    let mut config = Config::new();
    config.update_from_args(&args);

    // key 缺失时仍然启动，所有审查请求都会返回配置错误
    if let Err(err) = config.validate() {
        tracing::warn!("{}", err);
    }

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let state = Arc::new(AppState {
        config,
        provider: GroqProvider::new(),
    });

    start_server(addr, state).await
}
