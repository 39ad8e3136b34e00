//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so the HTTP routes can
//! serialize/deserialize without the domain knowing about request shapes.

pub mod game;

pub use game::*;
