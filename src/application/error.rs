//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{HashError, RepositoryError, SessionError};
use crate::domain::account::AccountError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源冲突（如重复注册）
    #[error("{0}")]
    Conflict(String),

    /// 未认证（凭据错误、token 缺失或无效）
    #[error("{0}")]
    Unauthorized(String),

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建冲突错误
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// 创建未认证错误
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate(_) => Self::Conflict("Email already registered".to_string()),
            RepositoryError::NotFound(_) => Self::Unauthorized("Not authenticated".to_string()),
        }
    }
}

impl From<SessionError> for ApplicationError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound => Self::Unauthorized("Not authenticated".to_string()),
            SessionError::AlreadyExists => Self::InternalError(err.to_string()),
        }
    }
}

impl From<HashError> for ApplicationError {
    fn from(err: HashError) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<AccountError> for ApplicationError {
    fn from(err: AccountError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
