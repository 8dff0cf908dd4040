//! Session Sweeper - 过期会话清理
//!
//! 仅在配置了会话空闲过期时启动。过期判定在 SessionService 中也会做，
//! 这里只负责回收从未再被访问的会话占用的内存

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::SessionManagerPort;
use crate::application::SessionPolicy;

/// Sweeper 配置
#[derive(Debug, Clone)]
pub struct SessionSweeperConfig {
    /// 空闲过期时间（秒）
    pub idle_timeout_secs: u64,
    /// 清理间隔（秒）
    pub interval_secs: u64,
}

/// 过期会话清理器
pub struct SessionSweeper {
    config: SessionSweeperConfig,
    session_manager: Arc<dyn SessionManagerPort>,
}

impl SessionSweeper {
    pub fn new(config: SessionSweeperConfig, session_manager: Arc<dyn SessionManagerPort>) -> Self {
        Self {
            config,
            session_manager,
        }
    }

    /// 启动清理循环（永不返回，随 runtime 关闭而终止）
    pub async fn run(self) {
        tracing::info!(
            idle_timeout_secs = self.config.idle_timeout_secs,
            interval_secs = self.config.interval_secs,
            "SessionSweeper started"
        );

        // interval 不接受 0
        let period = Duration::from_secs(self.config.interval_secs.max(1));
        let mut ticker = tokio::time::interval(period);
        // 第一次 tick 立即完成，跳过
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.sweep_once();
        }
    }

    /// 执行一次清理，返回关闭的会话数
    pub fn sweep_once(&self) -> usize {
        let policy = SessionPolicy {
            idle_timeout_secs: self.config.idle_timeout_secs,
        };
        let Some(idle_timeout) = policy.idle_timeout() else {
            return 0;
        };

        let closed = self.session_manager.close_expired(idle_timeout);

        if closed > 0 {
            tracing::info!(
                closed,
                remaining = self.session_manager.count(),
                "Expired sessions swept"
            );
        }

        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::Session;
    use crate::domain::account::UserId;
    use crate::infrastructure::memory::InMemorySessionManager;
    use chrono::Utc;

    #[test]
    fn test_sweep_closes_only_idle_sessions() {
        let sessions = Arc::new(InMemorySessionManager::new());
        let mut stale = Session::new("stale".to_string(), UserId::new());
        stale.last_activity = Utc::now() - chrono::Duration::seconds(3600);
        sessions.create(stale).unwrap();
        sessions
            .create(Session::new("fresh".to_string(), UserId::new()))
            .unwrap();

        let sweeper = SessionSweeper::new(
            SessionSweeperConfig {
                idle_timeout_secs: 60,
                interval_secs: 1,
            },
            sessions.clone(),
        );

        assert_eq!(sweeper.sweep_once(), 1);
        assert!(sessions.get("stale").is_err());
        assert!(sessions.get("fresh").is_ok());
        assert_eq!(sweeper.sweep_once(), 0);
    }

    #[test]
    fn test_unrepresentable_timeout_sweeps_nothing() {
        let sessions = Arc::new(InMemorySessionManager::new());
        sessions
            .create(Session::new("fresh".to_string(), UserId::new()))
            .unwrap();

        let sweeper = SessionSweeper::new(
            SessionSweeperConfig {
                idle_timeout_secs: u64::MAX,
                interval_secs: 1,
            },
            sessions.clone(),
        );

        assert_eq!(sweeper.sweep_once(), 0);
        assert!(sessions.get("fresh").is_ok());
    }
}
