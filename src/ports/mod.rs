//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogGateway` - Read-only access to the upstream creature database

mod catalog_gateway;

pub use catalog_gateway::{CatalogGateway, FetchFailure, GatewayOperation, UpstreamFetchError};
