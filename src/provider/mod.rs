//! 短链接服务商抽象层
//!
//! 服务商被视为不透明的外部协作者：输入长链接，输出短链接或错误。
//! 调用是同步阻塞的，由 [`crate::mediator::Mediator`] 负责放到后台线程执行。

mod tinyurl;

pub use tinyurl::{DEFAULT_TIMEOUT_SECS, TINYURL_ENDPOINT, TinyUrlProvider};

use std::fmt;

use crate::errors::CompactorError;

/// 服务商调用失败的分类
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// 服务商拒绝了请求，或网络不可达 / 超时 / 非 2xx 响应
    Shortening(String),
    /// 其他意外失败
    Other(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shortening(msg) => write!(f, "shortening failed: {}", msg),
            Self::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<ProviderError> for CompactorError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Shortening(msg) => CompactorError::shortening(msg),
            ProviderError::Other(msg) => CompactorError::unexpected(msg),
        }
    }
}

/// 短链接服务商 trait
pub trait ShortenProvider: Send + Sync {
    /// 把长链接交给服务商，返回短链接（阻塞调用）
    fn shorten(&self, long_url: &str) -> Result<String, ProviderError>;

    /// 获取 provider 名称（用于日志和标题栏）
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_classification() {
        let err: CompactorError = ProviderError::Shortening("HTTP 400".into()).into();
        assert_eq!(err, CompactorError::shortening("HTTP 400"));

        let err: CompactorError = ProviderError::Other("boom".into()).into();
        assert_eq!(err, CompactorError::unexpected("boom"));
    }
}
