//! PokeAPI adapter - `CatalogGateway` over the public PokeAPI REST service.

mod gateway;
mod wire;

pub use gateway::{PokeApiConfig, PokeApiGateway, PokeApiGatewayError};
