//! In-Memory User Repository Implementation

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::application::ports::{RepositoryError, UserRepositoryPort};
use crate::domain::account::{Email, User, UserId};

/// 内存用户仓储
///
/// 主表按 email 索引，另维护 id -> email 的二级索引
pub struct InMemoryUserRepository {
    users: DashMap<Email, User>,
    emails_by_id: DashMap<UserId, Email>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            emails_by_id: DashMap::new(),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepositoryPort for InMemoryUserRepository {
    fn insert(&self, user: User) -> Result<(), RepositoryError> {
        match self.users.entry(user.email().clone()) {
            Entry::Occupied(entry) => Err(RepositoryError::Duplicate(entry.key().to_string())),
            Entry::Vacant(entry) => {
                self.emails_by_id.insert(user.id(), user.email().clone());
                entry.insert(user);
                Ok(())
            }
        }
    }

    fn find_by_email(&self, email: &Email) -> Option<User> {
        self.users.get(email).map(|u| u.clone())
    }

    fn find_by_id(&self, id: UserId) -> Option<User> {
        let email = self.emails_by_id.get(&id)?.clone();
        self.find_by_email(&email)
    }

    fn upgrade(&self, id: UserId) -> Result<User, RepositoryError> {
        let email = self
            .emails_by_id
            .get(&id)
            .map(|e| e.clone())
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;

        let mut user = self
            .users
            .get_mut(&email)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        user.upgrade();
        Ok(user.clone())
    }
}
