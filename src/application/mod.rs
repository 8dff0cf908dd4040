//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（UserRepository、SessionManager、ListStore 等）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - session_service: token 签发与校验
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod session_service;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use commands::{
    // Auth commands
    AuthResponse,
    LoginCommand,
    RegisterCommand,
    UpgradeCommand,
    UpgradeResponse,
    UserProfile,
    // List commands
    AddToListCommand,
    ListChangeResponse,
    RemoveFromListCommand,
    // Handlers
    handlers::{
        AddToListHandler, LoginHandler, RegisterHandler, RemoveFromListHandler, UpgradeHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    HashError, ListStorePort, PasswordHasherPort, ProductCatalogPort, RepositoryError, Session,
    SessionError, SessionManagerPort, TokenIssuerPort, UserRepositoryPort,
};

pub use queries::{
    GetList,
    ListProducts,
    // Handlers
    handlers::{CatalogItem, GetListHandler, ListProductsHandler},
};

pub use session_service::{SessionPolicy, SessionService};
