//! In-Memory List Store Implementation

use dashmap::DashMap;

use crate::application::ports::ListStorePort;
use crate::domain::account::UserId;
use crate::domain::catalog::ProductId;
use crate::domain::collection::{ListKind, ProductList};

/// 内存清单存储
///
/// 心愿单与收藏夹各一张表；单个用户的增删在 DashMap 分片锁内完成
pub struct InMemoryListStore {
    wishlists: DashMap<UserId, ProductList>,
    favorites: DashMap<UserId, ProductList>,
}

impl InMemoryListStore {
    pub fn new() -> Self {
        Self {
            wishlists: DashMap::new(),
            favorites: DashMap::new(),
        }
    }

    fn table(&self, kind: ListKind) -> &DashMap<UserId, ProductList> {
        match kind {
            ListKind::Wishlist => &self.wishlists,
            ListKind::Favorites => &self.favorites,
        }
    }
}

impl Default for InMemoryListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ListStorePort for InMemoryListStore {
    fn get(&self, user_id: UserId, kind: ListKind) -> ProductList {
        self.table(kind)
            .get(&user_id)
            .map(|list| list.clone())
            .unwrap_or_default()
    }

    fn put(&self, user_id: UserId, kind: ListKind, list: ProductList) {
        self.table(kind).insert(user_id, list);
    }

    fn add(&self, user_id: UserId, kind: ListKind, product_id: ProductId) -> bool {
        self.table(kind).entry(user_id).or_default().add(product_id)
    }

    fn remove(&self, user_id: UserId, kind: ListKind, product_id: ProductId) -> bool {
        self.table(kind)
            .get_mut(&user_id)
            .map(|mut list| list.remove(product_id))
            .unwrap_or(false)
    }
}
