//! 长链接预处理
//!
//! 空输入属于 ValidationError；缺少协议时补上 `http://`，
//! 仍然无法解析为带主机名的 URL 则属于 ShorteningError，都不会发起网络请求。

use url::Url;

use crate::errors::{CompactorError, Result};

/// 空输入提示
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a URL to shorten.";

fn has_http_scheme(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// 规范化用户输入的长链接
pub fn normalize_long_url(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CompactorError::validation(EMPTY_INPUT_MESSAGE));
    }

    let candidate = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    let parsed = Url::parse(&candidate)
        .map_err(|e| CompactorError::shortening(format!("URL is not valid: {}", e)))?;

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(CompactorError::shortening("URL is not valid: missing host"));
    }

    Ok(candidate)
}
