//! 测试夹具：用内存适配器装配应用层

use std::sync::Arc;

use crate::application::ports::{
    ListStorePort, PasswordHasherPort, ProductCatalogPort, SessionManagerPort, UserRepositoryPort,
};
use crate::application::session_service::{SessionPolicy, SessionService};
use crate::infrastructure::adapters::{Argon2PasswordHasher, RandomTokenIssuer, StaticCatalog};
use crate::infrastructure::memory::{
    InMemoryListStore, InMemorySessionManager, InMemoryUserRepository,
};

pub(crate) struct Fixture {
    pub users: Arc<dyn UserRepositoryPort>,
    pub sessions: Arc<dyn SessionManagerPort>,
    pub lists: Arc<dyn ListStorePort>,
    pub catalog: Arc<dyn ProductCatalogPort>,
    pub hasher: Arc<dyn PasswordHasherPort>,
    pub session_service: Arc<SessionService>,
}

impl Fixture {
    pub fn new() -> Self {
        let users: Arc<dyn UserRepositoryPort> = Arc::new(InMemoryUserRepository::new());
        let sessions: Arc<dyn SessionManagerPort> = Arc::new(InMemorySessionManager::new());
        let session_service = Arc::new(SessionService::new(
            sessions.clone(),
            Arc::new(RandomTokenIssuer::new()),
            users.clone(),
            SessionPolicy::never_expire(),
        ));
        Self {
            users,
            sessions,
            lists: Arc::new(InMemoryListStore::new()),
            catalog: Arc::new(StaticCatalog::seeded()),
            hasher: Arc::new(Argon2PasswordHasher::fast_for_tests()),
            session_service,
        }
    }
}
