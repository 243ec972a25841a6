//! Creature payload
//!
//! Shape of `GET /pokemon/{name}`, which is also the record kept in the
//! Pokedex after a successful catch.

use serde::Deserialize;

use super::NamedResource;

/// A base stat and the stat it belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One of the creature's types.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// A creature detail record.
///
/// Stats and types keep the order the API returned them in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Creature {
    pub name: String,
    /// Some records carry `null` here; those are treated as zero
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

impl Creature {
    pub fn base_experience(&self) -> u32 {
        self.base_experience.unwrap_or(0)
    }

    /// `(stat name, base value)` pairs in stored order.
    pub fn stat_pairs(&self) -> impl Iterator<Item = (&str, u32)> {
        self.stats.iter().map(|s| (s.stat.name.as_str(), s.base_stat))
    }

    /// Type names in stored order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.kind.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::decode;

    const ABRA: &str = r#"{
        "id": 63,
        "name": "abra",
        "base_experience": 62,
        "height": 9,
        "weight": 195,
        "stats": [
            {"base_stat": 25, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 20, "effort": 0, "stat": {"name": "attack", "url": ""}},
            {"base_stat": 105, "effort": 2, "stat": {"name": "special-attack", "url": ""}}
        ],
        "types": [
            {"slot": 1, "type": {"name": "psychic", "url": ""}}
        ]
    }"#;

    #[test]
    fn test_creature_deserialize() {
        let abra: Creature = decode(ABRA.as_bytes()).unwrap();

        assert_eq!(abra.name, "abra");
        assert_eq!(abra.base_experience(), 62);
        assert_eq!(abra.height, 9);
        assert_eq!(abra.weight, 195);
        assert_eq!(
            abra.stat_pairs().collect::<Vec<_>>(),
            vec![("hp", 25), ("attack", 20), ("special-attack", 105)]
        );
        assert_eq!(abra.type_names().collect::<Vec<_>>(), vec!["psychic"]);
    }

    #[test]
    fn test_creature_null_base_experience() {
        let json = r#"{"name": "x", "base_experience": null, "height": 1, "weight": 1}"#;
        let creature: Creature = decode(json.as_bytes()).unwrap();

        assert_eq!(creature.base_experience(), 0);
        assert!(creature.stats.is_empty());
    }

    #[test]
    fn test_creature_empty_body() {
        let result: crate::error::Result<Creature> = decode(b"");
        assert!(result.is_err());
    }
}
