//! Collection Context - 用户商品清单限界上下文
//!
//! 每个用户拥有两份清单：心愿单与收藏夹，语义完全一致

mod value_objects;

pub use value_objects::{ListKind, ProductList};
