//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod http;
pub mod memory;
pub mod seed;
pub mod worker;

pub use adapters::{Argon2PasswordHasher, RandomTokenIssuer, StaticCatalog};
pub use memory::{InMemoryListStore, InMemorySessionManager, InMemoryUserRepository};
pub use worker::{SessionSweeper, SessionSweeperConfig};
