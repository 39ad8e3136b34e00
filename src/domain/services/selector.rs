//! Deterministic daily target selection

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::domain::entities::Item;
use crate::domain::services::modes::GameMode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("No candidate items for game mode '{0}'")]
    NoCandidates(String),
}

/// Pick the target item of `mode` for `seed`.
///
/// Candidates keep catalog order and the index is `seed` reduced into
/// `[0, candidates)`, so a fixed catalog and seed always give the same item.
pub fn select<'a>(mode: &GameMode, items: &'a [Item], seed: i64) -> Result<&'a Item, SelectionError> {
    let candidates = mode.candidates(items);
    if candidates.is_empty() {
        return Err(SelectionError::NoCandidates(mode.id.to_string()));
    }

    let index = candidate_index(seed, candidates.len());
    Ok(candidates[index])
}

/// Non-negative `seed mod len`. `len` must be non-zero.
pub fn candidate_index(seed: i64, len: usize) -> usize {
    // i128 keeps `len` and negative seeds exact on every platform
    (i128::from(seed).rem_euclid(len as i128)) as usize
}

/// Default seed for `date`: `weekday * 100 + day_of_month`, weekdays counted
/// from Sunday = 0. Repeats across months; callers wanting a specific day
/// pass their own seed.
pub fn daily_seed(date: NaiveDate) -> i64 {
    i64::from(date.weekday().num_days_from_sunday()) * 100 + i64::from(date.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        ArmourAttributes, IngredientAttributes, ItemKind, WeaponAttributes,
    };
    use crate::domain::services::modes::ModeRegistry;
    use proptest::prelude::*;

    fn catalog() -> Vec<Item> {
        vec![
            Item::new("Dagger", ItemKind::Weapon(WeaponAttributes::default())),
            Item::new("Cap", ItemKind::Armour(ArmourAttributes::default())),
            Item::new("Spear", ItemKind::Weapon(WeaponAttributes::default())),
            Item::new("Feather", ItemKind::Ingredient(IngredientAttributes::default())),
            Item::new("Bow", ItemKind::Weapon(WeaponAttributes::default())),
        ]
    }

    #[test]
    fn test_select_indexes_filtered_candidates_in_order() {
        let registry = ModeRegistry::new();
        let weapons = registry.find_mode("weapons").unwrap();
        let items = catalog();

        assert_eq!(select(weapons, &items, 0).unwrap().internal_name, "Dagger");
        assert_eq!(select(weapons, &items, 1).unwrap().internal_name, "Spear");
        assert_eq!(select(weapons, &items, 2).unwrap().internal_name, "Bow");
        assert_eq!(select(weapons, &items, 3).unwrap().internal_name, "Dagger");
    }

    #[test]
    fn test_negative_seed_is_normalized() {
        let registry = ModeRegistry::new();
        let weapons = registry.find_mode("weapons").unwrap();
        let items = catalog();

        assert_eq!(select(weapons, &items, -1).unwrap().internal_name, "Bow");
        assert_eq!(candidate_index(i64::MIN, 7), i64::MIN.rem_euclid(7) as usize);
    }

    #[test]
    fn test_empty_candidates_fail() {
        let registry = ModeRegistry::new();
        let armor = registry.find_mode("armor").unwrap();
        let items = vec![Item::new("Dagger", ItemKind::Weapon(WeaponAttributes::default()))];

        assert_eq!(
            select(armor, &items, 42),
            Err(SelectionError::NoCandidates("armor".to_string()))
        );
        assert!(select(armor, &[], 0).is_err());
    }

    #[test]
    fn test_daily_seed() {
        // 2024-03-15 was a Friday
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(daily_seed(date), 515);

        // 2024-03-03 was a Sunday
        let date = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert_eq!(daily_seed(date), 3);
    }

    proptest! {
        #[test]
        fn prop_index_in_range(seed in any::<i64>(), len in 1usize..10_000) {
            prop_assert!(candidate_index(seed, len) < len);
        }

        #[test]
        fn prop_seed_plus_len_selects_same_item(seed in -1_000_000i64..1_000_000) {
            let registry = ModeRegistry::new();
            let weapons = registry.find_mode("weapons").unwrap();
            let items = catalog();
            let n = weapons.candidates(&items).len() as i64;

            let first = select(weapons, &items, seed).unwrap();
            let shifted = select(weapons, &items, seed + n).unwrap();
            prop_assert_eq!(first, shifted);
            prop_assert_eq!(first, select(weapons, &items, seed).unwrap());
        }
    }
}
