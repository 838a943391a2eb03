//! TinyURL 实现
//!
//! 使用 TinyURL 的免密钥接口 `api-create.php?url=...`，响应体就是纯文本短链接。

use std::time::Duration;

use tracing::{debug, trace, warn};
use ureq::Agent;

use super::{ProviderError, ShortenProvider};
use crate::config::ProviderConfig;

/// TinyURL 创建接口
pub const TINYURL_ENDPOINT: &str = "https://tinyurl.com/api-create.php";

/// HTTP 请求总超时（秒）。只在用户主动触发时发一次请求，没有重试。
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// 错误信息中保留的响应体长度
const BODY_SNIPPET_LEN: usize = 64;

pub struct TinyUrlProvider {
    endpoint: String,
    /// ureq 的 Agent 是 Send + Sync，可在后台线程间共享
    agent: Agent,
}

impl TinyUrlProvider {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            endpoint: endpoint.into(),
            agent,
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for TinyUrlProvider {
    fn default() -> Self {
        Self::new(TINYURL_ENDPOINT, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl ShortenProvider for TinyUrlProvider {
    fn shorten(&self, long_url: &str) -> Result<String, ProviderError> {
        debug!("Requesting short URL from {} for {}", self.endpoint, long_url);

        let resp = self
            .agent
            .get(&self.endpoint)
            .query("url", long_url)
            .call()
            .map_err(classify_transport_error)?;

        let body = resp.into_body().read_to_string().map_err(|e| {
            warn!("Failed to read response body from {}: {}", self.endpoint, e);
            ProviderError::Other(format!("failed to read provider response: {}", e))
        })?;

        trace!("Provider response body: {:?}", body);
        parse_short_url(&body)
    }

    fn name(&self) -> &'static str {
        "TinyURL"
    }
}

/// 把 ureq 的错误分类为服务商错误
///
/// 网络不可达、超时、非 2xx 都属于 `Shortening`，其余归为 `Other`。
fn classify_transport_error(err: ureq::Error) -> ProviderError {
    match err {
        ureq::Error::StatusCode(code) => {
            warn!("Provider rejected the request with HTTP {}", code);
            ProviderError::Shortening(format!("provider responded with HTTP {}", code))
        }
        ureq::Error::Io(_)
        | ureq::Error::Timeout(_)
        | ureq::Error::HostNotFound
        | ureq::Error::ConnectionFailed => {
            warn!("Provider unreachable: {}", err);
            ProviderError::Shortening(format!("provider unreachable: {}", err))
        }
        other => ProviderError::Other(other.to_string()),
    }
}

/// 解析响应体
///
/// TinyURL 成功时返回短链接；拒绝时返回 `Error` 之类的纯文本。
pub(crate) fn parse_short_url(body: &str) -> Result<String, ProviderError> {
    let body = body.trim();
    let lower = body.to_ascii_lowercase();

    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Ok(body.to_string());
    }

    let snippet: String = body.chars().take(BODY_SNIPPET_LEN).collect();
    if snippet.is_empty() {
        Err(ProviderError::Shortening(
            "provider returned an empty response".to_string(),
        ))
    } else {
        Err(ProviderError::Shortening(format!(
            "provider rejected the URL: {}",
            snippet
        )))
    }
}
