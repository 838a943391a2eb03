use serde::{Deserialize, Serialize};

use crate::errors::{CompactorError, Result};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "compactor.toml";

/// 环境变量前缀，分隔符为 `__`
pub const ENV_PREFIX: &str = "UC";

/// 静态配置（启动时加载，运行期间不变）
///
/// 所有字段都有默认值，不需要任何配置文件或环境变量即可运行：
/// - provider: 短链接服务商地址与超时
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// ENV 前缀：UC，分隔符：__
    /// 示例：UC__PROVIDER__TIMEOUT_SECS=5
    ///
    /// 显式传入的 `path` 必须存在；默认的 `compactor.toml` 可以不存在。
    pub fn try_load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let required = path.is_some();
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        let settings = Config::builder()
            // 1. 从 TOML 文件加载
            .add_source(File::with_name(path).required(required))
            // 2. 从环境变量覆盖
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: StaticConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`StaticConfig::try_load`], but falls back to defaults on any error.
    pub fn load(path: Option<&str>) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[ERROR] {}; using default configuration", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.provider.endpoint.trim().is_empty() {
            return Err(CompactorError::config("provider.endpoint must not be empty"));
        }
        if self.provider.timeout_secs == 0 {
            return Err(CompactorError::config(
                "provider.timeout_secs must be greater than zero",
            ));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(CompactorError::config(format!(
                "Invalid logging.format: '{}'. Valid: text, json",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("# Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 短链接服务商配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderConfig {
    /// TinyURL 兼容的创建接口，长链接通过 `url` 查询参数传入
    #[serde(default = "default_provider_endpoint")]
    pub endpoint: String,
    /// 单次请求的总超时（秒）
    #[serde(default = "default_provider_timeout")]
    pub timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    /// TUI 模式下如果未设置，日志会被丢弃
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_provider_endpoint() -> String {
    crate::provider::TINYURL_ENDPOINT.to_string()
}

fn default_provider_timeout() -> u64 {
    crate::provider::DEFAULT_TIMEOUT_SECS
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    false
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_provider_endpoint(),
            timeout_secs: default_provider_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
