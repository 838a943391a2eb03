//! 请求状态
//!
//! 单个 ShortenRequest 的生命周期：Idle → InFlight → Succeeded / Failed，
//! 新请求开始时整体被替换。

use std::fmt;

use crate::errors::CompactorError;

/// 请求编号，每次 submit 递增
///
/// 后台线程回传的结果带着编号，编号不匹配的结果会被丢弃。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub(crate) u64);

impl RequestId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 请求状态，结果与状态绑定在一起
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded(String),
    Failed(CompactorError),
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::InFlight => "InFlight",
            Self::Succeeded(_) => "Succeeded",
            Self::Failed(_) => "Failed",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShortenRequest {
    id: Option<RequestId>,
    long_url: String,
    status: RequestStatus,
}

impl ShortenRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard whatever was here and start a new request in `InFlight`.
    pub(crate) fn begin(&mut self, id: RequestId, long_url: String) {
        self.id = Some(id);
        self.long_url = long_url;
        self.status = RequestStatus::InFlight;
    }

    /// Resolve the in-flight request. Returns `false` (and changes nothing)
    /// when `id` is not the request currently in flight.
    pub(crate) fn finish(&mut self, id: RequestId, result: Result<String, CompactorError>) -> bool {
        if !self.is_in_flight() || self.id != Some(id) {
            return false;
        }
        self.status = match result {
            Ok(short_url) => RequestStatus::Succeeded(short_url),
            Err(err) => RequestStatus::Failed(err),
        };
        true
    }

    pub fn id(&self) -> Option<RequestId> {
        self.id
    }

    pub fn long_url(&self) -> &str {
        &self.long_url
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.status, RequestStatus::InFlight)
    }

    pub fn short_url(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Succeeded(url) => Some(url),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Failed(err) => Some(err.message()),
            _ => None,
        }
    }
}
