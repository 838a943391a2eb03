use std::fmt;

/// 错误严重程度，决定界面上使用警告还是错误样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompactorError {
    /// 输入为空或只有空白字符，不会发起网络请求
    Validation(String),
    /// 服务商拒绝了 URL，或网络不可达 / 非 2xx 响应
    Shortening(String),
    /// 其他任何意外失败（包括后台线程 panic）
    Unexpected(String),
    /// 还没有生成短链接就尝试复制
    EmptyResult(String),
    /// 已有请求在进行中
    RequestInFlight(String),
    Clipboard(String),
    Config(String),
    Io(String),
}

impl CompactorError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            CompactorError::Validation(_) => "E001",
            CompactorError::Shortening(_) => "E002",
            CompactorError::Unexpected(_) => "E003",
            CompactorError::EmptyResult(_) => "E004",
            CompactorError::RequestInFlight(_) => "E005",
            CompactorError::Clipboard(_) => "E006",
            CompactorError::Config(_) => "E007",
            CompactorError::Io(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            CompactorError::Validation(_) => "Validation Error",
            CompactorError::Shortening(_) => "Shortening Error",
            CompactorError::Unexpected(_) => "Unexpected Error",
            CompactorError::EmptyResult(_) => "Empty Result",
            CompactorError::RequestInFlight(_) => "Request In Flight",
            CompactorError::Clipboard(_) => "Clipboard Error",
            CompactorError::Config(_) => "Configuration Error",
            CompactorError::Io(_) => "IO Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            CompactorError::Validation(msg) => msg,
            CompactorError::Shortening(msg) => msg,
            CompactorError::Unexpected(msg) => msg,
            CompactorError::EmptyResult(msg) => msg,
            CompactorError::RequestInFlight(msg) => msg,
            CompactorError::Clipboard(msg) => msg,
            CompactorError::Config(msg) => msg,
            CompactorError::Io(msg) => msg,
        }
    }

    /// Warnings are recovered locally; errors mean something outside the app failed.
    pub fn severity(&self) -> Severity {
        match self {
            CompactorError::Validation(_)
            | CompactorError::EmptyResult(_)
            | CompactorError::RequestInFlight(_) => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        let tag = match self.severity() {
            Severity::Warning => "[WARN]".yellow().bold(),
            Severity::Error => "[ERROR]".red().bold(),
        };
        format!(
            "{} {} {}\n  {}",
            tag,
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 和日志）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for CompactorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CompactorError {}

// 便捷的构造函数
impl CompactorError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        CompactorError::Validation(msg.into())
    }

    pub fn shortening<T: Into<String>>(msg: T) -> Self {
        CompactorError::Shortening(msg.into())
    }

    pub fn unexpected<T: Into<String>>(msg: T) -> Self {
        CompactorError::Unexpected(msg.into())
    }

    pub fn empty_result<T: Into<String>>(msg: T) -> Self {
        CompactorError::EmptyResult(msg.into())
    }

    pub fn request_in_flight<T: Into<String>>(msg: T) -> Self {
        CompactorError::RequestInFlight(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        CompactorError::Clipboard(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        CompactorError::Config(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        CompactorError::Io(msg.into())
    }
}

impl From<std::io::Error> for CompactorError {
    fn from(err: std::io::Error) -> Self {
        CompactorError::Io(err.to_string())
    }
}

impl From<config::ConfigError> for CompactorError {
    fn from(err: config::ConfigError) -> Self {
        CompactorError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CompactorError {
    fn from(err: toml::ser::Error) -> Self {
        CompactorError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CompactorError>;
