//! Collection Context - Value Objects

use serde::{Deserialize, Serialize};

use crate::domain::catalog::ProductId;

/// 清单类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Wishlist,
    Favorites,
}

impl ListKind {
    pub const ALL: [ListKind; 2] = [ListKind::Wishlist, ListKind::Favorites];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Wishlist => "wishlist",
            ListKind::Favorites => "favorites",
        }
    }

    /// 加入清单后返回给客户端的提示
    pub fn added_message(&self) -> &'static str {
        match self {
            ListKind::Wishlist => "Added to wishlist! 💫",
            ListKind::Favorites => "Added to favorites! ⭐",
        }
    }

    /// 移出清单后返回给客户端的提示
    pub fn removed_message(&self) -> &'static str {
        match self {
            ListKind::Wishlist => "Removed from wishlist",
            ListKind::Favorites => "Removed from favorites",
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 有序去重的商品 ID 集合
///
/// 不变量:
/// - 保持插入顺序
/// - 同一 ID 至多出现一次
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductList {
    ids: Vec<ProductId>,
}

impl ProductList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 ID 序列构建，重复项只保留首次出现
    pub fn from_ids(ids: impl IntoIterator<Item = ProductId>) -> Self {
        let mut list = Self::new();
        for id in ids {
            list.add(id);
        }
        list
    }

    /// 加入商品；已存在时返回 false
    pub fn add(&mut self, id: ProductId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// 移除商品；不存在时返回 false
    pub fn remove(&mut self, id: ProductId) -> bool {
        match self.ids.iter().position(|existing| *existing == id) {
            Some(pos) => {
                self.ids.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
