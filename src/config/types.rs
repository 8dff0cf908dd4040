//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 会话配置
    #[serde(default)]
    pub session: SessionConfig,

    /// 种子数据配置
    #[serde(default)]
    pub seed: SeedConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否启用静态文件服务
    #[serde(default = "default_static_enabled")]
    pub enabled: bool,

    /// 静态文件目录，根路径 `/` 返回其中的 index.html
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,

    /// URL 路径前缀
    #[serde(default = "default_static_path")]
    pub path: String,
}

fn default_static_enabled() -> bool {
    false
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_static_path() -> String {
    "/static".to_string()
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: default_static_enabled(),
            dir: default_static_dir(),
            path: default_static_path(),
        }
    }
}

impl StaticFilesConfig {
    /// 首页文件路径
    pub fn index_file(&self) -> PathBuf {
        self.dir.join("index.html")
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 会话配置
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// 空闲过期时间（秒），0 表示永不过期
    #[serde(default)]
    pub expire_secs: u64,

    /// 过期会话清理间隔（秒），仅在 expire_secs > 0 时生效
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

fn default_sweep_interval() -> u64 {
    300 // 5 分钟
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            expire_secs: 0,
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

/// 会话空闲过期时间上限（秒），一年
pub const MAX_SESSION_EXPIRE_SECS: u64 = 365 * 24 * 3600;

impl SessionConfig {
    /// 是否启用会话过期
    pub fn expires(&self) -> bool {
        self.expire_secs > 0
    }
}

/// 种子数据配置
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// 是否写入 Premium 演示账户
    #[serde(default = "default_demo_account")]
    pub demo_account: bool,
}

fn default_demo_account() -> bool {
    true
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_account: default_demo_account(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
