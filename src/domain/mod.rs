//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Account Context: 用户账户与会员等级
//! - Catalog Context: 商品目录
//! - Collection Context: 心愿单 / 收藏夹

pub mod account;
pub mod catalog;
pub mod collection;
