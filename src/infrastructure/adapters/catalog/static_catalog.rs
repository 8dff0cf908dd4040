//! Static Catalog
//!
//! 启动时装载的固定商品目录，运行期只读

use rust_decimal::Decimal;

use crate::application::ports::ProductCatalogPort;
use crate::domain::catalog::{Product, ProductId};

/// (id, name, price 分, category, image seed, description, premium_only)
type SeedRow = (i64, &'static str, i64, &'static str, &'static str, &'static str, bool);

#[rustfmt::skip]
const SEED: &[SeedRow] = &[
    (1, "Cloud Chaser 510", 2499, "510 Thread", "vape1", "Premium 510 thread cartridge, ceramic coil", false),
    (2, "Stealth Pod Pro", 2999, "Pod System", "vape2", "Compact pod with adjustable airflow", false),
    (3, "Terp Tank Elite", 3499, "510 Thread", "vape3", "Glass tank, quartz heating element", false),
    (4, "Vapor King XL", 3999, "510 Thread", "vape4", "Extra large capacity, long-lasting", false),
    (5, "Midnight Black Cart", 2799, "510 Thread", "vape5", "Sleek black design, ceramic core", false),
    (6, "Crystal Clear Pod", 3299, "Pod System", "vape6", "See-through design, leak-proof", false),
    (7, "Gold Reserve 510", 4999, "Premium", "gold7", "24K gold contacts, lifetime warranty", true),
    (8, "Diamond Series Cart", 5999, "Premium", "diamond8", "Diamond-cut glass, titanium coil", true),
    (9, "Platinum Pod Ultra", 5499, "Premium", "plat9", "Premium materials, exclusive design", true),
    (10, "Limited Edition Rose", 6999, "Premium", "rose10", "Rose gold finish, collectors item", true),
];

/// 内置商品目录
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// 默认的十件商品（1-6 普通，7-10 Premium 专享）
    pub fn seeded() -> Self {
        let products = SEED
            .iter()
            .map(
                |&(id, name, cents, category, image_seed, description, premium_only)| Product {
                    id: ProductId::new(id),
                    name: name.to_string(),
                    price: Decimal::new(cents, 2),
                    category: category.to_string(),
                    image: format!("https://picsum.photos/seed/{}/400/300", image_seed),
                    description: description.to_string(),
                    premium_only,
                },
            )
            .collect();
        Self::new(products)
    }
}

impl ProductCatalogPort for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}
