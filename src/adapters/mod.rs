//! Adapters - Implementations of ports and the inbound HTTP API.
//!
//! - `pokeapi` - Upstream gateway over reqwest
//! - `cache` - TTL caching decorator for any gateway
//! - `memory` - Fixture gateway for tests and offline development
//! - `http` - Axum routes and handlers

pub mod cache;
pub mod http;
pub mod memory;
pub mod pokeapi;
