//! Domain layer - The guessing game engine with no I/O
//!
//! This layer contains:
//! - Entities: catalog items and their type-specific attributes
//! - Value Objects: guess results, rank tables, extracted stat values
//! - Domain Services: the mode registry, the daily selector and the evaluator

pub mod entities;
pub mod services;
pub mod value_objects;
