//! Query Handlers 实现

mod catalog_handlers;
mod list_handlers;

pub use catalog_handlers::*;
pub use list_handlers::*;
