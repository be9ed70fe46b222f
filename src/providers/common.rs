//! Provider 公共工具函数

use std::time::Duration;

use reqwest::Client;

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

// ============ 域名名称处理 ============

/// 去掉 FQDN 末尾的一个点
/// 如: "example.com." -> "example.com"
pub fn normalize_zone_name(zone: &str) -> &str {
    zone.strip_suffix('.').unwrap_or(zone)
}

/// 将服务端返回的记录名转换为相对名称
/// 服务端用空字符串表示 zone 顶点，对外统一表示为 "@"
pub fn name_from_provider(name: &str) -> String {
    if name.is_empty() {
        "@".to_string()
    } else {
        name.to_string()
    }
}

/// 将相对名称转换为服务端接受的形式
/// 如: "@" + "example.com" -> "example.com"
/// 如: "www" + "example.com" -> "www"
pub fn name_to_provider(name: &str, zone: &str) -> String {
    if name == "@" || name.is_empty() {
        normalize_zone_name(zone).to_string()
    } else {
        name.to_string()
    }
}

// ============ TTL 转换 ============

/// `Duration` 转换为整秒 TTL（截断亚秒部分）
pub fn ttl_to_seconds(ttl: Duration) -> u32 {
    u32::try_from(ttl.as_secs()).unwrap_or(u32::MAX)
}

/// 整秒 TTL 转换为 `Duration`
pub fn ttl_from_seconds(secs: u32) -> Duration {
    Duration::from_secs(u64::from(secs))
}
