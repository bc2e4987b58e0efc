//! Cache module for Redis access
//!
//! Provides the Redis client used by the Redis verification store,
//! including connection setup and retry logic.

pub mod redis_client;


pub use redis_client::RedisClient;

// Re-export commonly used types
pub use linka_shared::config::cache::CacheConfig;
