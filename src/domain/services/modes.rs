//! Game modes - Which items a mode plays with and how their stats are scored
//!
//! Every mode owns an ordered list of [`StatComparator`]s. A comparator is
//! plain data: the [`Attribute`] it reads and the [`ComparatorKind`] that
//! scores it. Display order and result order both follow the list order.

use serde::Serialize;

use crate::domain::entities::{Item, ItemCategory};
use crate::domain::value_objects::{
    GuessResult, RankTable, StatValue, ATTACK_SPEED_RANKS, RARITY_RANKS,
};

/// Item attributes a comparator can read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Rarity,
    WeaponType,
    ArmourType,
    Level,
    PowderSlots,
    AttackSpeed,
    AverageDps,
    BaseHealth,
    Tier,
    Skills,
    DurabilityModifier,
    Duration,
}

impl Attribute {
    /// Read the attribute from `item`, substituting the documented default
    /// when the item lacks it or is of a type that never carries it.
    pub fn extract(&self, item: &Item) -> StatValue {
        match self {
            Self::Rarity => {
                let rarity = item
                    .weapon()
                    .and_then(|w| w.rarity.as_deref())
                    .or_else(|| item.armour().and_then(|a| a.rarity.as_deref()));
                key_or(rarity, "COMMON")
            }
            Self::WeaponType => key_or(
                item.weapon().and_then(|w| w.weapon_type.as_deref()),
                "SWORD",
            ),
            Self::ArmourType => key_or(
                item.armour().and_then(|a| a.armour_type.as_deref()),
                "NONE",
            ),
            Self::AttackSpeed => key_or(
                item.weapon().and_then(|w| w.attack_speed.as_deref()),
                "NORMAL",
            ),
            Self::Level => number_or_zero(item.level),
            Self::PowderSlots => number_or_zero(
                item.weapon()
                    .and_then(|w| w.powder_slots)
                    .or_else(|| item.armour().and_then(|a| a.powder_slots)),
            ),
            Self::AverageDps => {
                StatValue::Number(item.weapon().and_then(|w| w.average_dps).unwrap_or(0.0))
            }
            Self::BaseHealth => number_or_zero(item.armour().and_then(|a| a.base_health)),
            Self::Tier => number_or_zero(item.ingredient().and_then(|i| i.tier)),
            Self::Skills => StatValue::Keys(
                item.ingredient()
                    .map(|i| i.skills.clone())
                    .unwrap_or_default(),
            ),
            Self::DurabilityModifier => {
                number_or_zero(item.ingredient().and_then(|i| i.durability_modifier))
            }
            Self::Duration => number_or_zero(item.ingredient().and_then(|i| i.duration)),
        }
    }
}

fn key_or(value: Option<&str>, default: &str) -> StatValue {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => StatValue::Key(value.to_uppercase()),
        None => StatValue::Key(default.to_string()),
    }
}

fn number_or_zero(value: Option<i64>) -> StatValue {
    StatValue::Number(value.unwrap_or(0) as f64)
}

/// How two extracted values are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "table", rename_all = "snake_case")]
pub enum ComparatorKind {
    /// Ordered numbers: CORRECT, HIGHER or LOWER
    Numeric,
    /// Categorical values ordered through a rank table
    Ranked(&'static RankTable),
    /// Unordered categorical values: CORRECT or INCORRECT
    Exact,
    /// Sequences: exact in-order match, else CLOSE on any overlap
    SetOverlap,
}

impl ComparatorKind {
    pub fn evaluate(&self, guess: &StatValue, target: &StatValue) -> GuessResult {
        match self {
            Self::Numeric => match (guess.as_number(), target.as_number()) {
                (Some(guess), Some(target)) => evaluate_numbers(guess, target),
                _ => mismatched(self, guess, target),
            },
            Self::Ranked(table) => match (guess.as_key(), target.as_key()) {
                (Some(guess), Some(target)) => evaluate_numbers(
                    f64::from(table.rank_or_lowest(guess)),
                    f64::from(table.rank_or_lowest(target)),
                ),
                _ => mismatched(self, guess, target),
            },
            Self::Exact => {
                if guess == target {
                    GuessResult::Correct
                } else {
                    GuessResult::Incorrect
                }
            }
            Self::SetOverlap => match (guess.as_keys(), target.as_keys()) {
                (Some(guess), Some(target)) => evaluate_overlap(guess, target),
                _ => mismatched(self, guess, target),
            },
        }
    }
}

/// Ordered comparison shared by every numeric and ranked stat
pub fn evaluate_numbers(guess: f64, target: f64) -> GuessResult {
    if guess == target {
        GuessResult::Correct
    } else if guess > target {
        GuessResult::Higher
    } else {
        GuessResult::Lower
    }
}

/// Same elements in the same order is CORRECT; otherwise any guessed element
/// found anywhere in the target is CLOSE.
pub fn evaluate_overlap(guess: &[String], target: &[String]) -> GuessResult {
    if guess.len() == target.len() && guess.iter().zip(target).all(|(g, t)| g == t) {
        return GuessResult::Correct;
    }

    if guess.iter().any(|g| target.contains(g)) {
        GuessResult::Close
    } else {
        GuessResult::Incorrect
    }
}

fn mismatched(kind: &ComparatorKind, guess: &StatValue, target: &StatValue) -> GuessResult {
    tracing::warn!(?kind, ?guess, ?target, "Comparator received mismatched values");
    GuessResult::Incorrect
}

/// One scored stat of a game mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatComparator {
    /// Result map key
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    pub attribute: Attribute,
    pub kind: ComparatorKind,
}

impl StatComparator {
    pub const fn new(
        key: &'static str,
        name: &'static str,
        attribute: Attribute,
        kind: ComparatorKind,
    ) -> Self {
        Self {
            key,
            name,
            attribute,
            kind,
        }
    }

    pub fn value(&self, item: &Item) -> StatValue {
        self.attribute.extract(item)
    }

    pub fn evaluate(&self, guess: &StatValue, target: &StatValue) -> GuessResult {
        self.kind.evaluate(guess, target)
    }
}

const RARITY: StatComparator = StatComparator::new(
    "rarity",
    "Rarity",
    Attribute::Rarity,
    ComparatorKind::Ranked(&RARITY_RANKS),
);
const LEVEL: StatComparator =
    StatComparator::new("level", "Level", Attribute::Level, ComparatorKind::Numeric);

/// A named game variant
#[derive(Debug, Clone, Serialize)]
pub struct GameMode {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Only items of this category are candidates
    pub category: ItemCategory,
    pub stats: Vec<StatComparator>,
}

impl GameMode {
    pub fn matches(&self, item: &Item) -> bool {
        item.category() == Some(self.category)
    }

    /// Candidate items of this mode, in catalog order
    pub fn candidates<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// The closed set of game modes, built once and read-only afterwards
#[derive(Debug, Clone)]
pub struct ModeRegistry {
    modes: Vec<GameMode>,
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self {
            modes: vec![weapons_mode(), armor_mode(), ingredients_mode()],
        }
    }

    pub fn list_modes(&self) -> &[GameMode] {
        &self.modes
    }

    pub fn find_mode(&self, id: &str) -> Option<&GameMode> {
        self.modes.iter().find(|mode| mode.id == id)
    }
}

impl Default for ModeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn weapons_mode() -> GameMode {
    GameMode {
        id: "weapons",
        title: "Weapons",
        description: "Guess today's Wynncraft weapon",
        icon: "⚔️",
        category: ItemCategory::Weapon,
        stats: vec![
            RARITY,
            StatComparator::new("type", "Type", Attribute::WeaponType, ComparatorKind::Exact),
            LEVEL,
            StatComparator::new(
                "powderSlots",
                "Powder Slots",
                Attribute::PowderSlots,
                ComparatorKind::Numeric,
            ),
            StatComparator::new(
                "attackSpeed",
                "Attack Speed",
                Attribute::AttackSpeed,
                ComparatorKind::Ranked(&ATTACK_SPEED_RANKS),
            ),
            StatComparator::new(
                "averageDps",
                "Average DPS",
                Attribute::AverageDps,
                ComparatorKind::Numeric,
            ),
        ],
    }
}

fn armor_mode() -> GameMode {
    GameMode {
        id: "armor",
        title: "Armor",
        description: "Guess today's Wynncraft armor",
        icon: "🛡",
        category: ItemCategory::Armour,
        stats: vec![
            RARITY,
            StatComparator::new("type", "Type", Attribute::ArmourType, ComparatorKind::Exact),
            LEVEL,
            StatComparator::new(
                "powderSlots",
                "Powder Slots",
                Attribute::PowderSlots,
                ComparatorKind::Numeric,
            ),
            StatComparator::new(
                "health",
                "Health",
                Attribute::BaseHealth,
                ComparatorKind::Numeric,
            ),
        ],
    }
}

fn ingredients_mode() -> GameMode {
    GameMode {
        id: "ingredients",
        title: "Ingredients",
        description: "Guess today's Wynncraft crafting ingredient",
        icon: "🍳",
        category: ItemCategory::Ingredient,
        stats: vec![
            StatComparator::new("tier", "Tier", Attribute::Tier, ComparatorKind::Numeric),
            StatComparator::new("skill", "Skill", Attribute::Skills, ComparatorKind::SetOverlap),
            LEVEL,
            StatComparator::new(
                "durability",
                "Durability",
                Attribute::DurabilityModifier,
                ComparatorKind::Numeric,
            ),
            StatComparator::new(
                "duration",
                "Duration",
                Attribute::Duration,
                ComparatorKind::Numeric,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ItemKind, WeaponAttributes};

    fn keys(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_registry_order_and_lookup() {
        let registry = ModeRegistry::new();
        let ids: Vec<_> = registry.list_modes().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["weapons", "armor", "ingredients"]);

        assert!(registry.find_mode("armor").is_some());
        assert!(registry.find_mode("gear").is_none());
    }

    #[test]
    fn test_stat_display_order_is_stable() {
        let registry = ModeRegistry::new();
        let weapon_keys: Vec<_> = registry.find_mode("weapons").unwrap().stats.iter().map(|s| s.key).collect();
        assert_eq!(
            weapon_keys,
            vec!["rarity", "type", "level", "powderSlots", "attackSpeed", "averageDps"]
        );

        let ingredient_keys: Vec<_> = registry.find_mode("ingredients").unwrap().stats.iter().map(|s| s.key).collect();
        assert_eq!(
            ingredient_keys,
            vec!["tier", "skill", "level", "durability", "duration"]
        );
    }

    #[test]
    fn test_every_comparator_extracts_the_value_shape_its_kind_expects() {
        let registry = ModeRegistry::new();
        let blank = Item::new("Blank", ItemKind::Other { item_type: "tool".into() });

        for mode in registry.list_modes() {
            for stat in &mode.stats {
                let value = stat.value(&blank);
                let fits = match stat.kind {
                    ComparatorKind::Numeric => value.as_number().is_some(),
                    ComparatorKind::Ranked(_) | ComparatorKind::Exact => value.as_key().is_some(),
                    ComparatorKind::SetOverlap => value.as_keys().is_some(),
                };
                assert!(fits, "{}.{} extracted {:?}", mode.id, stat.key, value);
            }
        }
    }

    #[test]
    fn test_numeric_ordering() {
        assert_eq!(evaluate_numbers(5.0, 5.0), GuessResult::Correct);
        assert_eq!(evaluate_numbers(6.0, 5.0), GuessResult::Higher);
        assert_eq!(evaluate_numbers(4.0, 5.0), GuessResult::Lower);
    }

    #[test]
    fn test_rarity_ordering() {
        let kind = ComparatorKind::Ranked(&RARITY_RANKS);
        let mythic = StatValue::Key("MYTHIC".into());

        assert_eq!(kind.evaluate(&StatValue::Key("RARE".into()), &mythic), GuessResult::Lower);
        assert_eq!(kind.evaluate(&StatValue::Key("FABLED".into()), &mythic), GuessResult::Lower);
        assert_eq!(kind.evaluate(&mythic, &mythic), GuessResult::Correct);
        assert_eq!(
            kind.evaluate(&mythic, &StatValue::Key("COMMON".into())),
            GuessResult::Higher
        );
    }

    #[test]
    fn test_skill_overlap() {
        let target = keys(&["strength", "defence"]);

        assert_eq!(evaluate_overlap(&keys(&["strength", "defence"]), &target), GuessResult::Correct);
        // Same set in another order misses the exact check but still overlaps
        assert_eq!(evaluate_overlap(&keys(&["defence", "strength"]), &target), GuessResult::Close);
        assert_eq!(evaluate_overlap(&keys(&["defence"]), &target), GuessResult::Close);
        assert_eq!(evaluate_overlap(&keys(&["agility"]), &target), GuessResult::Incorrect);
        assert_eq!(evaluate_overlap(&[], &[]), GuessResult::Correct);
    }

    #[test]
    fn test_exact_match_has_no_direction() {
        let kind = ComparatorKind::Exact;
        let bow = StatValue::Key("BOW".into());
        let wand = StatValue::Key("WAND".into());
        assert_eq!(kind.evaluate(&bow, &bow), GuessResult::Correct);
        assert_eq!(kind.evaluate(&bow, &wand), GuessResult::Incorrect);
    }

    #[test]
    fn test_extract_defaults() {
        let bare_weapon = Item::new("Stick", ItemKind::Weapon(WeaponAttributes::default()));

        assert_eq!(Attribute::Rarity.extract(&bare_weapon), StatValue::Key("COMMON".into()));
        assert_eq!(Attribute::WeaponType.extract(&bare_weapon), StatValue::Key("SWORD".into()));
        assert_eq!(Attribute::ArmourType.extract(&bare_weapon), StatValue::Key("NONE".into()));
        assert_eq!(Attribute::AttackSpeed.extract(&bare_weapon), StatValue::Key("NORMAL".into()));
        assert_eq!(Attribute::Level.extract(&bare_weapon), StatValue::Number(0.0));
        assert_eq!(Attribute::AverageDps.extract(&bare_weapon), StatValue::Number(0.0));
        assert_eq!(Attribute::Skills.extract(&bare_weapon), StatValue::Keys(vec![]));
    }

    #[test]
    fn test_extract_uppercases_categorical_values() {
        let weapon = Item::new(
            "Oak Wood Relik",
            ItemKind::Weapon(WeaponAttributes {
                rarity: Some("legendary".into()),
                weapon_type: Some("relik".into()),
                attack_speed: Some("very_slow".into()),
                ..Default::default()
            }),
        );

        assert_eq!(Attribute::Rarity.extract(&weapon), StatValue::Key("LEGENDARY".into()));
        assert_eq!(Attribute::WeaponType.extract(&weapon), StatValue::Key("RELIK".into()));
        assert_eq!(Attribute::AttackSpeed.extract(&weapon), StatValue::Key("VERY_SLOW".into()));
    }
}
