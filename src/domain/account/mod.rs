//! Account Context - 账户限界上下文
//!
//! 职责:
//! - 用户注册信息
//! - 密码哈希（仅保存哈希值，不保存明文）
//! - 会员等级（普通 / Premium）

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::User;
pub use errors::AccountError;
pub use value_objects::{Email, PasswordHash, UserId};
