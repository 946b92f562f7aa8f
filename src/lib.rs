//! Creature Catalog - Paginated, multi-type filtered catalog service
//!
//! This crate answers "page N of every creature that has all of these types"
//! on top of an upstream API that can only list one type at a time.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
