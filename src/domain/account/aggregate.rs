//! Account Context - Aggregate Root

use super::{Email, PasswordHash, UserId};

/// User 聚合根
///
/// 不变量:
/// - email 在整个系统内唯一（由 UserRepository 保证）
/// - is_premium 只能从 false 变为 true，不可降级
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    email: Email,
    name: String,
    password_hash: PasswordHash,
    is_premium: bool,
}

impl User {
    /// 注册新用户（默认非 Premium）
    pub fn register(email: Email, name: impl Into<String>, password_hash: PasswordHash) -> Self {
        Self {
            id: UserId::new(),
            email,
            name: name.into(),
            password_hash,
            is_premium: false,
        }
    }

    /// 升级为 Premium
    ///
    /// 返回状态是否发生变化；已是 Premium 时为 no-op
    pub fn upgrade(&mut self) -> bool {
        if self.is_premium {
            return false;
        }
        self.is_premium = true;
        true
    }

    // Getters
    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn is_premium(&self) -> bool {
        self.is_premium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::register(
            Email::new("a@x.com").unwrap(),
            "A",
            PasswordHash::new("hash"),
        )
    }

    #[test]
    fn test_register_defaults_to_regular_tier() {
        let user = sample_user();
        assert_eq!(user.email().as_str(), "a@x.com");
        assert_eq!(user.name(), "A");
        assert!(!user.is_premium());
    }

    #[test]
    fn test_upgrade_is_one_way_and_idempotent() {
        let mut user = sample_user();
        assert!(user.upgrade());
        assert!(user.is_premium());
        assert!(!user.upgrade());
        assert!(user.is_premium());
    }
}
