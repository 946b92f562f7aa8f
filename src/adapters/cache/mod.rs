//! Cache adapters.
//!
//! Decorators that add time-based caching in front of a port
//! implementation. The query handlers are unaware of them.

mod caching_gateway;

pub use caching_gateway::{CacheTtls, CachingGateway, DEFAULT_MAX_ENTRIES};
