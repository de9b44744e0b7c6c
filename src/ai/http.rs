use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

/// 全局共享 HTTP 客户端，整个进程只构建一次。
/// 超时上限即为对外调用唯一的超时控制。
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(120))
        .build()
        .expect("Failed to create HTTP client")
});

/// 获取共享的 HTTP 客户端引用
pub fn shared_client() -> &'static Client {
    &HTTP_CLIENT
}
