//! Domain services - The selection and scoring engine

pub mod evaluator;
pub mod modes;
pub mod selector;

pub use evaluator::{evaluate, StatResults};
pub use modes::{GameMode, ModeRegistry, StatComparator};
pub use selector::{daily_seed, select, SelectionError};
