//! In-memory adapters.
//!
//! Fixture-backed implementations of the ports for tests and offline
//! development.

mod in_memory_gateway;

pub use in_memory_gateway::InMemoryCatalogGateway;
