//! HTTP Handlers

mod auth;
mod lists;
mod ping;
mod products;

pub use auth::*;
pub use lists::*;
pub use ping::*;
pub use products::*;
