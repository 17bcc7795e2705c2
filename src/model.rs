use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    Physical,
    Special,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Move {
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: String,
    pub category: MoveCategory,
    #[serde(default)]
    pub power: u32,
}

/// One entry of the data source's stat array, e.g. `{"name": "special-attack", "value": 109}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    pub name: String,
    pub value: u32,
}

fn default_level() -> u8 {
    50
}

/// A Pokémon as the external data source ships it: stats as an array of
/// named entries, types as lowercase strings.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(flatten, default)]
    pub extras: HashMap<String, serde_json::Value>,
}

/// Typed stat profile consumed by the simulator and the damage calculator.
/// Immutable during a calculation; HP deltas live in local accumulators.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default = "default_level")]
    pub level: u8,
}

impl CombatStats {
    /// Convert the array-of-entries shape into the typed profile.
    /// Missing stats read as 0; a missing level reads as 50.
    pub fn from_data(data: &PokemonData) -> Self {
        let stat = |key: &str| {
            data.stats
                .iter()
                .find(|s| s.name == key)
                .map(|s| s.value)
                .unwrap_or(0)
        };
        Self {
            hp: stat("hp"),
            attack: stat("attack"),
            defense: stat("defense"),
            special_attack: stat("special-attack"),
            special_defense: stat("special-defense"),
            speed: stat("speed"),
            types: data.types.clone(),
            level: data.level,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsFile {
    pub team_a: Vec<PokemonData>,
    pub team_b: Vec<PokemonData>,
    #[serde(flatten, default)]
    pub extras: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_maps_kebab_case_stat_names() {
        let raw = r#"{
            "name": "alakazam",
            "types": ["psychic"],
            "stats": [
                {"name": "hp", "value": 55},
                {"name": "attack", "value": 50},
                {"name": "defense", "value": 45},
                {"name": "special-attack", "value": 135},
                {"name": "special-defense", "value": 95},
                {"name": "speed", "value": 120}
            ]
        }"#;
        let data: PokemonData = serde_json::from_str(raw).expect("valid pokemon json");
        let stats = CombatStats::from_data(&data);
        assert_eq!(stats.special_attack, 135);
        assert_eq!(stats.special_defense, 95);
        assert_eq!(stats.level, 50);
    }

    #[test]
    fn adapter_defaults_missing_stats_to_zero() {
        let data: PokemonData =
            serde_json::from_str(r#"{"types": ["normal"], "stats": []}"#).expect("valid json");
        let stats = CombatStats::from_data(&data);
        assert_eq!(stats.hp, 0);
        assert_eq!(stats.speed, 0);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let raw = r#"{
            "teamA": [{"types": ["fire"], "stats": [], "sprite": "front.png"}],
            "teamB": [],
            "savedAt": "2024-01-01"
        }"#;
        let teams: TeamsFile = serde_json::from_str(raw).expect("valid teams json");
        assert_eq!(teams.team_a.len(), 1);
        assert!(teams.extras.contains_key("savedAt"));
    }
}
