//! Auth Commands - 注册 / 登录 / 升级

use crate::domain::account::User;

/// 注册命令
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// 登录命令
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// 升级 Premium 命令
#[derive(Debug, Clone)]
pub struct UpgradeCommand {
    pub token: Option<String>,
}

/// 对外公开的用户信息（不含 id 与密码哈希）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub is_premium: bool,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            name: user.name().to_string(),
            email: user.email().as_str().to_string(),
            is_premium: user.is_premium(),
        }
    }
}

/// 注册 / 登录响应
#[derive(Debug, Clone)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

/// 升级响应
#[derive(Debug, Clone)]
pub struct UpgradeResponse {
    pub user: UserProfile,
    /// 此次调用是否真正改变了会员等级
    pub upgraded: bool,
}
