//! User Repository Port - 出站端口
//!
//! 定义用户持久化的抽象接口
//! 具体实现在 infrastructure 层（内存）

use thiserror::Error;

use crate::domain::account::{Email, User, UserId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),
}

/// User Repository Port
///
/// email 为唯一键；插入已存在的 email 返回 `RepositoryError::Duplicate`
pub trait UserRepositoryPort: Send + Sync {
    /// 插入新用户
    fn insert(&self, user: User) -> Result<(), RepositoryError>;

    /// 根据 email 查找
    fn find_by_email(&self, email: &Email) -> Option<User>;

    /// 根据 ID 查找
    fn find_by_id(&self, id: UserId) -> Option<User>;

    /// 将用户升级为 Premium，返回升级后的用户
    fn upgrade(&self, id: UserId) -> Result<User, RepositoryError>;
}
