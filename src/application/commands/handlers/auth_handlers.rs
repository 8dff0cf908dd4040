//! Auth Command Handlers

use std::sync::Arc;

use crate::application::commands::{
    AuthResponse, LoginCommand, RegisterCommand, UpgradeCommand, UpgradeResponse, UserProfile,
};
use crate::application::error::ApplicationError;
use crate::application::ports::{ListStorePort, PasswordHasherPort, UserRepositoryPort};
use crate::application::session_service::SessionService;
use crate::domain::account::{Email, PasswordHash, User};
use crate::domain::collection::{ListKind, ProductList};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

// ============================================================================
// Password hashing
// ============================================================================

// Argon2 是 CPU 密集计算，放到阻塞线程池执行

async fn hash_password(
    hasher: Arc<dyn PasswordHasherPort>,
    password: String,
) -> Result<PasswordHash, ApplicationError> {
    let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| ApplicationError::internal(e.to_string()))??;
    Ok(hash)
}

async fn verify_password(
    hasher: Arc<dyn PasswordHasherPort>,
    password: String,
    hash: PasswordHash,
) -> Result<bool, ApplicationError> {
    let matched = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
        .await
        .map_err(|e| ApplicationError::internal(e.to_string()))??;
    Ok(matched)
}

// ============================================================================
// Register
// ============================================================================

/// Register Handler - 创建用户并直接登录
pub struct RegisterHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    list_store: Arc<dyn ListStorePort>,
    password_hasher: Arc<dyn PasswordHasherPort>,
    sessions: Arc<SessionService>,
}

impl RegisterHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        list_store: Arc<dyn ListStorePort>,
        password_hasher: Arc<dyn PasswordHasherPort>,
        sessions: Arc<SessionService>,
    ) -> Self {
        Self {
            user_repo,
            list_store,
            password_hasher,
            sessions,
        }
    }

    pub async fn handle(&self, cmd: RegisterCommand) -> Result<AuthResponse, ApplicationError> {
        let email = Email::new(cmd.email)?;

        // 先查重，避免为注定失败的请求计算哈希
        if self.user_repo.find_by_email(&email).is_some() {
            return Err(ApplicationError::conflict("Email already registered"));
        }

        let password_hash = hash_password(self.password_hasher.clone(), cmd.password).await?;
        let user = User::register(email, cmd.name, password_hash);
        let user_id = user.id();
        let profile = UserProfile::from(&user);

        // 并发注册同一邮箱时由仓储兜底返回 Duplicate
        self.user_repo.insert(user)?;

        for kind in ListKind::ALL {
            self.list_store.put(user_id, kind, ProductList::new());
        }

        let token = self.sessions.start(user_id)?;

        tracing::info!(user_id = %user_id, email = %profile.email, "User registered");

        Ok(AuthResponse {
            token,
            user: profile,
        })
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login Handler - 校验密码并签发新 token
pub struct LoginHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    password_hasher: Arc<dyn PasswordHasherPort>,
    sessions: Arc<SessionService>,
}

impl LoginHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        password_hasher: Arc<dyn PasswordHasherPort>,
        sessions: Arc<SessionService>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            sessions,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<AuthResponse, ApplicationError> {
        let user = Email::new(cmd.email)
            .ok()
            .and_then(|email| self.user_repo.find_by_email(&email))
            .ok_or_else(|| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;

        let matched = verify_password(
            self.password_hasher.clone(),
            cmd.password,
            user.password_hash().clone(),
        )
        .await?;

        if !matched {
            tracing::info!(user_id = %user.id(), "Login rejected: password mismatch");
            return Err(ApplicationError::unauthorized(INVALID_CREDENTIALS));
        }

        let token = self.sessions.start(user.id())?;

        tracing::info!(user_id = %user.id(), "User logged in");

        Ok(AuthResponse {
            token,
            user: UserProfile::from(&user),
        })
    }
}

// ============================================================================
// Upgrade
// ============================================================================

/// Upgrade Handler - 升级为 Premium
pub struct UpgradeHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    sessions: Arc<SessionService>,
}

impl UpgradeHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>, sessions: Arc<SessionService>) -> Self {
        Self {
            user_repo,
            sessions,
        }
    }

    pub async fn handle(&self, cmd: UpgradeCommand) -> Result<UpgradeResponse, ApplicationError> {
        let user = self.sessions.authenticate(cmd.token.as_deref())?;
        let was_premium = user.is_premium();

        let upgraded = self.user_repo.upgrade(user.id())?;

        if !was_premium {
            tracing::info!(user_id = %upgraded.id(), "User upgraded to premium");
        }

        Ok(UpgradeResponse {
            user: UserProfile::from(&upgraded),
            upgraded: !was_premium,
        })
    }
}
