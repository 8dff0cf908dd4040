//! Product Catalog Port - 只读商品目录

use crate::domain::catalog::{Product, ProductId};

/// 商品目录
pub trait ProductCatalogPort: Send + Sync {
    /// 全部商品，按目录顺序
    fn products(&self) -> &[Product];

    /// 根据 ID 查找
    fn find(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }
}
