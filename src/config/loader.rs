//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, MAX_SESSION_EXPIRE_SECS};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `WISHLIST_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `WISHLIST_SERVER__HOST=127.0.0.1`
/// - `WISHLIST_SERVER__PORT=8080`
/// - `WISHLIST_SESSION__EXPIRE_SECS=86400`
/// - `WISHLIST_SEED__DEMO_ACCOUNT=false`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("server.static_files.enabled", false)?
        .set_default("server.static_files.dir", "static")?
        .set_default("server.static_files.path", "/static")?
        .set_default("session.expire_secs", 0)?
        .set_default("session.sweep_interval_secs", 300)?
        .set_default("seed.demo_account", true)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix("WISHLIST")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.host.is_empty() {
        return Err(ConfigError::ValidationError(
            "Server host cannot be empty".to_string(),
        ));
    }

    if config.session.expire_secs > MAX_SESSION_EXPIRE_SECS {
        return Err(ConfigError::ValidationError(format!(
            "Session expire_secs cannot exceed {}",
            MAX_SESSION_EXPIRE_SECS
        )));
    }

    if config.session.expires() && config.session.sweep_interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Session sweep interval cannot be 0 when session expiry is enabled".to_string(),
        ));
    }

    if config.server.static_files.enabled && !config.server.static_files.path.starts_with('/') {
        return Err(ConfigError::ValidationError(
            "Static files path must start with '/'".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Static Files Enabled: {}", config.server.static_files.enabled);
    if config.server.static_files.enabled {
        tracing::info!(
            "Static Files: {:?} -> {}",
            config.server.static_files.dir,
            config.server.static_files.path
        );
    }
    if config.session.expires() {
        tracing::info!("Session Expire: {}s", config.session.expire_secs);
        tracing::info!("Session Sweep Interval: {}s", config.session.sweep_interval_secs);
    } else {
        tracing::info!("Session Expire: never");
    }
    tracing::info!("Demo Account: {}", config.seed.demo_account);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
