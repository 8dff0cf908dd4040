//! Catalog Adapter - 内置商品目录

mod static_catalog;

pub use static_catalog::StaticCatalog;
