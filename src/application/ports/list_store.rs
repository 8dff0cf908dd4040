//! List Store Port - 用户清单存储

use crate::domain::catalog::ProductId;
use crate::domain::collection::{ListKind, ProductList};
use crate::domain::account::UserId;

/// 心愿单 / 收藏夹存储
///
/// add / remove 对单个用户的单个清单是原子的
pub trait ListStorePort: Send + Sync {
    /// 获取清单；用户从未创建过清单时返回空清单
    fn get(&self, user_id: UserId, kind: ListKind) -> ProductList;

    /// 覆盖整个清单（用于初始化与种子数据）
    fn put(&self, user_id: UserId, kind: ListKind, list: ProductList);

    /// 加入商品，返回是否发生变化
    fn add(&self, user_id: UserId, kind: ListKind, product_id: ProductId) -> bool;

    /// 移除商品，返回是否发生变化
    fn remove(&self, user_id: UserId, kind: ListKind, product_id: ProductId) -> bool;
}
