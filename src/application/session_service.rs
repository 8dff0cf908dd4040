//! Session Service - 会话签发与 token 校验
//!
//! 所有需要登录的命令/查询都通过这里把 token 解析为 User，
//! handler 不直接接触 SessionManager / TokenIssuer

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{Session, SessionManagerPort, TokenIssuerPort, UserRepositoryPort};
use crate::domain::account::{User, UserId};

const NOT_AUTHENTICATED: &str = "Not authenticated";

/// 会话策略
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionPolicy {
    /// 空闲过期时间（秒），0 表示永不过期
    pub idle_timeout_secs: u64,
}

impl SessionPolicy {
    pub fn never_expire() -> Self {
        Self::default()
    }

    pub fn expires(&self) -> bool {
        self.idle_timeout_secs > 0
    }

    /// 空闲过期时长
    ///
    /// 未启用过期，或秒数超出 `chrono::Duration` 可表示范围时返回 None（永不过期）
    pub fn idle_timeout(&self) -> Option<Duration> {
        if !self.expires() {
            return None;
        }
        i64::try_from(self.idle_timeout_secs)
            .ok()
            .and_then(Duration::try_seconds)
    }
}

/// 会话服务
pub struct SessionService {
    session_manager: Arc<dyn SessionManagerPort>,
    token_issuer: Arc<dyn TokenIssuerPort>,
    user_repo: Arc<dyn UserRepositoryPort>,
    policy: SessionPolicy,
}

impl SessionService {
    pub fn new(
        session_manager: Arc<dyn SessionManagerPort>,
        token_issuer: Arc<dyn TokenIssuerPort>,
        user_repo: Arc<dyn UserRepositoryPort>,
        policy: SessionPolicy,
    ) -> Self {
        Self {
            session_manager,
            token_issuer,
            user_repo,
            policy,
        }
    }

    /// 为用户开启新会话，返回 token
    pub fn start(&self, user_id: UserId) -> Result<String, ApplicationError> {
        let session = Session::new(self.token_issuer.issue(), user_id);
        let token = self.session_manager.create(session)?;
        tracing::debug!(user_id = %user_id, "Session started");
        Ok(token)
    }

    /// 校验 token 并返回对应用户
    ///
    /// token 缺失、未知、已过期或指向不存在的用户时返回 Unauthorized
    pub fn authenticate(&self, token: Option<&str>) -> Result<User, ApplicationError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApplicationError::unauthorized(NOT_AUTHENTICATED))?;

        let session = self.session_manager.get(token)?;

        if let Some(idle_timeout) = self.policy.idle_timeout() {
            if Utc::now() - session.last_activity > idle_timeout {
                let _ = self.session_manager.close(token);
                tracing::debug!(user_id = %session.user_id, "Session expired");
                return Err(ApplicationError::unauthorized(NOT_AUTHENTICATED));
            }
            self.session_manager.touch(token);
        }

        self.user_repo
            .find_by_id(session.user_id)
            .ok_or_else(|| ApplicationError::unauthorized(NOT_AUTHENTICATED))
    }

    /// 可选认证：无效 token 视为匿名访问者
    pub fn viewer(&self, token: Option<&str>) -> Option<User> {
        token?;
        self.authenticate(token).ok()
    }
}
