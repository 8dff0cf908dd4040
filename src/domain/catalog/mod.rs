//! Catalog Context - 商品目录限界上下文
//!
//! 目录在启动时装载，运行期只读

mod entities;

pub use entities::{Product, ProductId};
