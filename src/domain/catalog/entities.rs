//! Catalog Context - Entities

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 商品唯一标识
///
/// 清单接受任意整数 ID（不要求存在于目录），因此取 i64 全范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 商品目录条目
///
/// 字段名即对外 JSON 字段名
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    pub image: String,
    pub description: String,
    pub premium_only: bool,
}

impl Product {
    /// 对当前访问者是否锁定
    ///
    /// 匿名访问者与普通用户看到的 premium_only 商品均为锁定
    pub fn is_locked_for(&self, viewer_is_premium: bool) -> bool {
        self.premium_only && !viewer_is_premium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(premium_only: bool) -> Product {
        Product {
            id: ProductId::new(7),
            name: "Gold Reserve 510".to_string(),
            price: Decimal::new(4999, 2),
            category: "Premium".to_string(),
            image: "https://picsum.photos/seed/gold7/400/300".to_string(),
            description: "24K gold contacts, lifetime warranty".to_string(),
            premium_only,
        }
    }

    #[test]
    fn test_lock_rules() {
        assert!(product(true).is_locked_for(false));
        assert!(!product(true).is_locked_for(true));
        assert!(!product(false).is_locked_for(false));
        assert!(!product(false).is_locked_for(true));
    }

    #[test]
    fn test_serializes_with_flat_id_and_numeric_price() {
        let json = serde_json::to_value(product(true)).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["price"], 49.99);
        assert_eq!(json["premium_only"], true);
    }
}
