use std::time::Duration;

use employee_client::{RetryPolicy, UpstreamConfig};

/// 单个入站请求最多串联的上游调用次数 (删除 = 查询 + 删除)
const UPSTREAM_CALLS_PER_REQUEST: u32 = 2;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 8111 | HTTP 服务端口 |
/// | EMPLOYEE_BASE_URL | http://localhost:8112 | 上游员工服务地址 |
/// | EMPLOYEE_RESOURCE_PATH | /api/v1/employee | 上游资源路径 |
/// | UPSTREAM_TIMEOUT_MS | 10000 | 单次上游调用超时(毫秒) |
/// | UPSTREAM_MAX_RETRIES | 4 | 429 重试次数 |
/// | UPSTREAM_RETRY_BASE_MS | 1000 | 首次退避时长(毫秒)，之后逐次翻倍 |
/// | REQUEST_TIMEOUT_MS | 由上游预算推算 | 入站请求超时(毫秒) |
/// | ENVIRONMENT | development | 运行环境 |
///
/// 未设置 REQUEST_TIMEOUT_MS 时，入站超时取两次上游调用的最坏耗时
/// (删除需要先查询再删除)，默认配置下为 130 秒。
///
/// 日志相关的 LOG_LEVEL / LOG_DIR 在 [`crate::setup_environment`] 中读取。
///
/// # 示例
///
/// ```ignore
/// EMPLOYEE_BASE_URL=http://upstream:8112 HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 上游员工服务基础地址
    pub employee_base_url: String,
    /// 上游员工资源路径
    pub employee_resource_path: String,
    /// 单次上游调用超时 (毫秒)
    pub upstream_timeout_ms: u64,
    /// 429 最大重试次数
    pub upstream_max_retries: u32,
    /// 首次退避时长 (毫秒)
    pub upstream_retry_base_ms: u64,
    /// 入站请求超时 (毫秒)，`None` 表示按上游预算推算
    pub request_timeout_ms: Option<u64>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: env_parse("HTTP_PORT", 8111),
            employee_base_url: std::env::var("EMPLOYEE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8112".into()),
            employee_resource_path: std::env::var("EMPLOYEE_RESOURCE_PATH")
                .unwrap_or_else(|_| "/api/v1/employee".into()),
            upstream_timeout_ms: env_parse("UPSTREAM_TIMEOUT_MS", 10_000),
            upstream_max_retries: env_parse("UPSTREAM_MAX_RETRIES", 4),
            upstream_retry_base_ms: env_parse("UPSTREAM_RETRY_BASE_MS", 1_000),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 指向指定上游的配置，其余取默认值
    ///
    /// 常用于测试场景
    pub fn with_upstream(base_url: impl Into<String>, resource_path: impl Into<String>) -> Self {
        Self {
            employee_base_url: base_url.into(),
            employee_resource_path: resource_path.into(),
            ..Self::defaults()
        }
    }

    fn defaults() -> Self {
        Self {
            http_port: 8111,
            employee_base_url: "http://localhost:8112".into(),
            employee_resource_path: "/api/v1/employee".into(),
            upstream_timeout_ms: 10_000,
            upstream_max_retries: 4,
            upstream_retry_base_ms: 1_000,
            request_timeout_ms: None,
            environment: "development".into(),
        }
    }

    /// 上游客户端配置
    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig::new(&self.employee_base_url, &self.employee_resource_path)
            .with_timeout(Duration::from_millis(self.upstream_timeout_ms))
            .with_retry(RetryPolicy::new(
                self.upstream_max_retries,
                Duration::from_millis(self.upstream_retry_base_ms),
            ))
    }

    /// 入站请求超时
    pub fn request_timeout(&self) -> Duration {
        match self.request_timeout_ms {
            Some(ms) => Duration::from_millis(ms),
            None => self
                .upstream()
                .call_budget()
                .saturating_mul(UPSTREAM_CALLS_PER_REQUEST),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.http_port, 8111);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_upstream_config() {
        let config = Config::with_upstream("http://upstream:9000", "/api/v1/employee");
        let upstream = config.upstream();
        assert_eq!(
            upstream.collection_url(),
            "http://upstream:9000/api/v1/employee"
        );
        assert_eq!(upstream.timeout, Duration::from_secs(10));
        assert_eq!(upstream.retry, RetryPolicy::default());
    }

    #[test]
    fn test_request_timeout_outlasts_retry_budget() {
        let config = Config::default();
        // two chained calls of 5 x 10 s attempts plus 15 s backoff each
        assert_eq!(config.request_timeout(), Duration::from_secs(130));
        assert!(config.request_timeout() > config.upstream().call_budget());

        let config = Config {
            upstream_retry_base_ms: 10,
            upstream_timeout_ms: 100,
            ..Config::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_millis(1_300));

        let config = Config {
            request_timeout_ms: Some(50),
            ..Config::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_millis(50));
    }
}
