//! Item entity - One entry of the Wynncraft item catalog
//!
//! Upstream records are a loose bag of optional keys whose relevance depends
//! on the item `type`. The domain keeps only a tagged variant per type so
//! the stat comparators can match exhaustively instead of probing fields.

use serde::{Deserialize, Serialize};

/// A catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    /// Unique display and lookup key
    pub internal_name: String,
    /// Minimum combat level (`requirements.level`)
    pub level: Option<i64>,
    /// Icon descriptor, passed through untouched for the frontend
    pub icon: Option<serde_json::Value>,
    pub lore: Option<String>,
    pub kind: ItemKind,
}

/// Type-specific attributes of an item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Weapon(WeaponAttributes),
    Armour(ArmourAttributes),
    Ingredient(IngredientAttributes),
    /// Accessories, tools, materials and anything else no mode plays with
    Other { item_type: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeaponAttributes {
    pub rarity: Option<String>,
    pub weapon_type: Option<String>,
    pub attack_speed: Option<String>,
    pub average_dps: Option<f64>,
    pub powder_slots: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArmourAttributes {
    pub rarity: Option<String>,
    pub armour_type: Option<String>,
    pub armour_material: Option<String>,
    pub armour_color: Option<String>,
    pub powder_slots: Option<i64>,
    pub base_health: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientAttributes {
    pub tier: Option<i64>,
    /// Professions able to use the ingredient, in upstream order
    pub skills: Vec<String>,
    pub durability_modifier: Option<i64>,
    pub duration: Option<i64>,
}

/// Item categories a game mode can filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Weapon,
    Armour,
    Ingredient,
}

impl Item {
    pub fn new(internal_name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            internal_name: internal_name.into(),
            level: None,
            icon: None,
            lore: None,
            kind,
        }
    }

    pub fn with_level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    /// The category this item belongs to, if any mode can play it
    pub fn category(&self) -> Option<ItemCategory> {
        match self.kind {
            ItemKind::Weapon(_) => Some(ItemCategory::Weapon),
            ItemKind::Armour(_) => Some(ItemCategory::Armour),
            ItemKind::Ingredient(_) => Some(ItemCategory::Ingredient),
            ItemKind::Other { .. } => None,
        }
    }

    /// Upstream `type` string
    pub fn item_type(&self) -> &str {
        match &self.kind {
            ItemKind::Weapon(_) => "weapon",
            ItemKind::Armour(_) => "armour",
            ItemKind::Ingredient(_) => "ingredient",
            ItemKind::Other { item_type } => item_type,
        }
    }

    pub fn weapon(&self) -> Option<&WeaponAttributes> {
        match &self.kind {
            ItemKind::Weapon(attrs) => Some(attrs),
            _ => None,
        }
    }

    pub fn armour(&self) -> Option<&ArmourAttributes> {
        match &self.kind {
            ItemKind::Armour(attrs) => Some(attrs),
            _ => None,
        }
    }

    pub fn ingredient(&self) -> Option<&IngredientAttributes> {
        match &self.kind {
            ItemKind::Ingredient(attrs) => Some(attrs),
            _ => None,
        }
    }
}

// ============================================================================
// Wire format
// ============================================================================

/// Upstream JSON shape of an item record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemRecord {
    #[serde(default)]
    internal_name: String,
    #[serde(rename = "type", default)]
    item_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rarity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weapon_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    armour_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    armour_material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    armour_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attack_speed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    average_dps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    powder_slots: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tier: Option<NumberOrText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base: Option<BaseRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    requirements: Option<RequirementsRecord>,
    #[serde(
        rename = "itemOnlyIDs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    item_only_ids: Option<ItemOnlyIdsRecord>,
    #[serde(
        rename = "consumableOnlyIDs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    consumable_only_ids: Option<ConsumableOnlyIdsRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lore: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BaseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_health: Option<RangedValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RequirementsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemOnlyIdsRecord {
    #[serde(
        default,
        alias = "durability_modifier",
        skip_serializing_if = "Option::is_none"
    )]
    durability_modifier: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConsumableOnlyIdsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<i64>,
}

/// A stat that is either fixed or rolled within a range
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RangedValue {
    Fixed(i64),
    Ranged {
        #[serde(default)]
        min: Option<i64>,
        #[serde(default)]
        max: Option<i64>,
        raw: i64,
    },
}

impl RangedValue {
    fn raw(&self) -> i64 {
        match self {
            Self::Fixed(value) => *value,
            Self::Ranged { raw, .. } => *raw,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Fractional(f64),
    Text(String),
}

impl NumberOrText {
    fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Fractional(value) => Some(value.round() as i64),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        let requirements = record.requirements.unwrap_or_default();

        let kind = match record.item_type.to_ascii_lowercase().as_str() {
            "weapon" => ItemKind::Weapon(WeaponAttributes {
                rarity: record.rarity,
                weapon_type: record.weapon_type,
                attack_speed: record.attack_speed,
                average_dps: record.average_dps,
                powder_slots: record.powder_slots,
            }),
            "armour" | "armor" => ItemKind::Armour(ArmourAttributes {
                rarity: record.rarity,
                armour_type: record.armour_type,
                armour_material: record.armour_material,
                armour_color: record.armour_color,
                powder_slots: record.powder_slots,
                base_health: record
                    .base
                    .and_then(|base| base.base_health)
                    .map(|health| health.raw()),
            }),
            "ingredient" => ItemKind::Ingredient(IngredientAttributes {
                tier: record.tier.as_ref().and_then(NumberOrText::as_number),
                skills: requirements.skills.unwrap_or_default(),
                durability_modifier: record
                    .item_only_ids
                    .and_then(|ids| ids.durability_modifier),
                duration: record.consumable_only_ids.and_then(|ids| ids.duration),
            }),
            _ => ItemKind::Other {
                item_type: record.item_type,
            },
        };

        Self {
            internal_name: record.internal_name,
            level: requirements.level,
            icon: record.icon,
            lore: record.lore,
            kind,
        }
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        let item_type = item.item_type().to_string();
        let mut record = ItemRecord {
            internal_name: item.internal_name,
            item_type,
            icon: item.icon,
            lore: item.lore,
            ..Default::default()
        };
        let mut requirements = RequirementsRecord {
            level: item.level,
            skills: None,
        };

        match item.kind {
            ItemKind::Weapon(attrs) => {
                record.rarity = attrs.rarity;
                record.weapon_type = attrs.weapon_type;
                record.attack_speed = attrs.attack_speed;
                record.average_dps = attrs.average_dps;
                record.powder_slots = attrs.powder_slots;
            }
            ItemKind::Armour(attrs) => {
                record.rarity = attrs.rarity;
                record.armour_type = attrs.armour_type;
                record.armour_material = attrs.armour_material;
                record.armour_color = attrs.armour_color;
                record.powder_slots = attrs.powder_slots;
                record.base = attrs.base_health.map(|health| BaseRecord {
                    base_health: Some(RangedValue::Fixed(health)),
                });
            }
            ItemKind::Ingredient(attrs) => {
                record.tier = attrs.tier.map(NumberOrText::Number);
                if !attrs.skills.is_empty() {
                    requirements.skills = Some(attrs.skills);
                }
                record.item_only_ids = attrs.durability_modifier.map(|value| ItemOnlyIdsRecord {
                    durability_modifier: Some(value),
                });
                record.consumable_only_ids = attrs
                    .duration
                    .map(|duration| ConsumableOnlyIdsRecord {
                        duration: Some(duration),
                    });
            }
            ItemKind::Other { .. } => {}
        }

        if requirements.level.is_some() || requirements.skills.is_some() {
            record.requirements = Some(requirements);
        }
        record
    }
}
