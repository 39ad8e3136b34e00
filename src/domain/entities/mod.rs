//! Domain entities

mod catalog;
mod item;

pub use catalog::Catalog;
pub use item::{
    ArmourAttributes, IngredientAttributes, Item, ItemCategory, ItemKind, WeaponAttributes,
};
