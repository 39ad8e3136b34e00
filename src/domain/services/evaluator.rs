//! Guess evaluation - Score a guessed item against the target, stat by stat

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::entities::Item;
use crate::domain::services::modes::GameMode;
use crate::domain::value_objects::GuessResult;

/// Per-stat results in the mode's stat order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatResults(Vec<(&'static str, GuessResult)>);

impl StatResults {
    pub fn get(&self, key: &str) -> Option<GuessResult> {
        self.0
            .iter()
            .find(|(stat, _)| *stat == key)
            .map(|(_, result)| *result)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, GuessResult)> + '_ {
        self.0.iter().copied()
    }

    /// True when every stat is CORRECT
    pub fn solved(&self) -> bool {
        self.0.iter().all(|(_, result)| result.is_correct())
    }
}

// Serialized as a JSON object whose keys keep stat order
impl Serialize for StatResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, result) in &self.0 {
            map.serialize_entry(key, result)?;
        }
        map.end()
    }
}

/// Score `guess` against `target` under `mode`.
///
/// Pure: the same inputs always produce the same results.
pub fn evaluate(mode: &GameMode, guess: &Item, target: &Item) -> StatResults {
    let results = mode
        .stats
        .iter()
        .map(|stat| {
            let guess_value = stat.value(guess);
            let target_value = stat.value(target);
            (stat.key, stat.evaluate(&guess_value, &target_value))
        })
        .collect();

    StatResults(results)
}
