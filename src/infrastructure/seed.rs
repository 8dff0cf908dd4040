//! Demo Seed - 演示账户
//!
//! 启动时写入一个 Premium 演示账户，附带预置的心愿单与收藏夹

use crate::application::ports::{ListStorePort, PasswordHasherPort, UserRepositoryPort};
use crate::application::ApplicationError;
use crate::domain::account::{Email, User, UserId};
use crate::domain::catalog::ProductId;
use crate::domain::collection::{ListKind, ProductList};

pub const DEMO_EMAIL: &str = "demo@wishlist.app";
pub const DEMO_PASSWORD: &str = "demo123";
pub const DEMO_NAME: &str = "Demo User";

const DEMO_WISHLIST: [i64; 3] = [1, 3, 5];
const DEMO_FAVORITES: [i64; 2] = [2, 7];

/// 写入演示账户
///
/// 账户已存在时返回 Conflict
pub fn seed_demo_account(
    users: &dyn UserRepositoryPort,
    lists: &dyn ListStorePort,
    hasher: &dyn PasswordHasherPort,
) -> Result<UserId, ApplicationError> {
    let mut user = User::register(
        Email::new(DEMO_EMAIL)?,
        DEMO_NAME,
        hasher.hash(DEMO_PASSWORD)?,
    );
    user.upgrade();
    let user_id = user.id();

    users.insert(user)?;

    lists.put(
        user_id,
        ListKind::Wishlist,
        ProductList::from_ids(DEMO_WISHLIST.map(ProductId::new)),
    );
    lists.put(
        user_id,
        ListKind::Favorites,
        ProductList::from_ids(DEMO_FAVORITES.map(ProductId::new)),
    );

    tracing::info!(user_id = %user_id, email = DEMO_EMAIL, "Demo account seeded");

    Ok(user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::Fixture;

    fn seed(fx: &Fixture) -> Result<UserId, ApplicationError> {
        seed_demo_account(fx.users.as_ref(), fx.lists.as_ref(), fx.hasher.as_ref())
    }

    #[test]
    fn test_demo_account_is_premium_with_lists() {
        let fx = Fixture::new();
        let user_id = seed(&fx).unwrap();

        let user = fx.users.find_by_id(user_id).unwrap();
        assert!(user.is_premium());
        assert_eq!(user.name(), DEMO_NAME);
        assert!(fx.hasher.verify(DEMO_PASSWORD, user.password_hash()).unwrap());

        let wishlist: Vec<i64> = fx
            .lists
            .get(user_id, ListKind::Wishlist)
            .ids()
            .iter()
            .map(|id| id.value())
            .collect();
        assert_eq!(wishlist, vec![1, 3, 5]);
        assert_eq!(fx.lists.get(user_id, ListKind::Favorites).len(), 2);
    }

    #[test]
    fn test_seeding_twice_conflicts() {
        let fx = Fixture::new();
        seed(&fx).unwrap();
        let err = seed(&fx).unwrap_err();
        assert!(matches!(err, ApplicationError::Conflict(_)));
    }
}
