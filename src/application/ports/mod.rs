//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod list_store;
mod password_hasher;
mod product_catalog;
mod session_manager;
mod token_issuer;
mod user_repository;

pub use list_store::ListStorePort;
pub use password_hasher::{HashError, PasswordHasherPort};
pub use product_catalog::ProductCatalogPort;
pub use session_manager::{Session, SessionError, SessionManagerPort};
pub use token_issuer::TokenIssuerPort;
pub use user_repository::{RepositoryError, UserRepositoryPort};
