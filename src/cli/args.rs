use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    name = "ai-review",
    version,
    about = "AI 代码审查 Web 服务 - 将提交的代码发送给 Groq 审查并返回结构化结果",
    long_about = "ai-review 启动一个小型 Web 服务：接收表单提交的代码片段，调用 Groq 的 chat completions 接口进行审查，并将模型输出规范化为固定结构的 JSON 结果。"
)]
pub struct Args {
    /// 监听地址
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// 监听端口
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    /// Model to use (default: llama-3.3-70b-versatile)
    #[arg(short, long, default_value = "")] // 空字符串表示未指定
    pub model: String,

    /// 日志格式 (pretty 或 compact)
    #[arg(long = "log-format", default_value = "pretty")]
    pub log_format: String,
}
