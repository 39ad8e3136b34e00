//! Application layer - Use cases over the game engine
//!
//! This layer contains:
//! - DTOs: request and response shapes of the HTTP API
//! - Ports: the catalog source and catalog store interfaces
//! - Services: catalog caching and the game use cases

pub mod dto;
pub mod ports;
pub mod services;
