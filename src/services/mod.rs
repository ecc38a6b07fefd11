// Service exports
pub mod auth;
pub mod cache;
pub mod postgres;

pub use auth::{authenticate, AuthError, Claims};
pub use cache::CacheManager;
pub use postgres::{PostgresClient, StoreError, UserRecord};
