//! Wishlist - 电商心愿单与收藏夹后端
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Account Context: 用户账户与 Premium 状态
//! - Catalog Context: 商品目录
//! - Collection Context: 心愿单与收藏夹
//!
//! 应用层 (application/):
//! - Ports: 端口定义（UserRepository, SessionManager, ListStore, ProductCatalog, PasswordHasher, TokenIssuer）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: UserRepository, SessionManager, ListStore 内存实现
//! - Worker: SessionSweeper 过期会话清理
//! - Adapters: Argon2 密码哈希, 随机 token, 静态商品目录

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
