//! Memory Layer - In-Memory State Management
//!
//! 实现 UserRepository、SessionManager 和 ListStore，
//! 所有状态存储在 DashMap 中，进程重启后丢失

mod list_store;
mod session_manager;
mod user_repository;

pub use list_store::InMemoryListStore;
pub use session_manager::InMemorySessionManager;
pub use user_repository::InMemoryUserRepository;
