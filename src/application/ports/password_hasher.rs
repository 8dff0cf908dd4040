//! Password Hasher Port - 密码哈希

use thiserror::Error;

use crate::domain::account::PasswordHash;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("Failed to hash password: {0}")]
    Hash(String),

    #[error("Invalid password hash: {0}")]
    Malformed(String),
}

/// 密码哈希器
pub trait PasswordHasherPort: Send + Sync {
    /// 对明文密码加盐哈希
    fn hash(&self, password: &str) -> Result<PasswordHash, HashError>;

    /// 校验明文密码；不匹配返回 `Ok(false)`，哈希损坏返回 `Err`
    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, HashError>;
}
