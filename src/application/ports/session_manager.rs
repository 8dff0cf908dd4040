//! Session Manager Port - 会话生命周期管理
//!
//! 定义会话管理的抽象接口，具体实现在 infrastructure/memory 层

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::domain::account::UserId;

/// Session Manager 错误
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found")]
    NotFound,

    #[error("Session already exists")]
    AlreadyExists,
}

/// 登录会话（in-memory）
///
/// token 即会话 ID，由 TokenIssuerPort 签发
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: UserId,
    pub last_activity: DateTime<Utc>,
}

impl Session {
    pub fn new(token: String, user_id: UserId) -> Self {
        Self {
            token,
            user_id,
            last_activity: Utc::now(),
        }
    }
}

/// Session Manager Port
///
/// 会话默认永不过期；过期策略由调用方通过 `close_expired` 实现
pub trait SessionManagerPort: Send + Sync {
    /// 创建新会话，返回 token
    fn create(&self, session: Session) -> Result<String, SessionError>;

    /// 获取会话
    fn get(&self, token: &str) -> Result<Session, SessionError>;

    /// 关闭会话
    fn close(&self, token: &str) -> Result<(), SessionError>;

    /// 更新最后活动时间
    fn touch(&self, token: &str);

    /// 关闭所有空闲超过 `idle_timeout` 的会话，返回关闭数量
    ///
    /// 判定与删除在同一把锁内完成，期间被 touch 的会话不会被误删
    fn close_expired(&self, idle_timeout: Duration) -> usize;

    /// 当前会话数
    fn count(&self) -> usize;
}
