//! Domain layer - Catalog records and the pure rules over them.

pub mod catalog;
