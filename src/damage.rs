//! Single-hit damage calculator: stat stages, battle conditions and the
//! canonical damage formula, reported as a min/max roll range with a
//! KO-chance readout.

use crate::model::{CombatStats, Move, MoveCategory};
use crate::types::effectiveness;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Weather {
    #[default]
    None,
    Sun,
    Rain,
    Sand,
    Snow,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Terrain {
    #[default]
    None,
    Electric,
    Grassy,
    Psychic,
    Misty,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    #[default]
    None,
    Reflect,
    LightScreen,
    AuroraVeil,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeldItem {
    #[default]
    None,
    LifeOrb,
    ChoiceBand,
    ChoiceSpecs,
    Leftovers,
}

/// Per-combatant battle-temporary state: stat stages in [-6, +6] and the
/// held item. Built fresh for each calculation call.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CombatantModifiers {
    pub attack_stage: i32,
    pub defense_stage: i32,
    pub special_attack_stage: i32,
    pub special_defense_stage: i32,
    pub item: HeldItem,
}

/// Ambient state for one damage calculation, fully specified per call.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BattleConditions {
    pub weather: Weather,
    pub terrain: Terrain,
    pub attacker_screen: Screen,
    pub defender_screen: Screen,
}

/// Stage curve: 0 -> 1.0, +6 -> 4.0, -6 -> 0.25. Stages outside [-6, 6]
/// clamp to the endpoints.
pub fn stat_stage_multiplier(stage: i32) -> f64 {
    let stage = stage.clamp(-6, 6);
    if stage >= 0 {
        (2 + stage) as f64 / 2.0
    } else {
        2.0 / (2 - stage) as f64
    }
}

/// Same-type attack bonus applies on a literal type-name match; types are
/// pre-normalized lowercase upstream.
pub fn has_stab(move_type: &str, attacker_types: &[String]) -> bool {
    attacker_types.iter().any(|t| t == move_type)
}

pub fn weather_modifier(move_type: &str, weather: Weather) -> f64 {
    match weather {
        Weather::Sun => match move_type {
            "fire" => 1.5,
            "water" => 0.5,
            _ => 1.0,
        },
        Weather::Rain => match move_type {
            "water" => 1.5,
            "fire" => 0.5,
            _ => 1.0,
        },
        // sand and snow only touch mechanics outside this calculator
        _ => 1.0,
    }
}

pub fn terrain_modifier(move_type: &str, terrain: Terrain, attacker_grounded: bool) -> f64 {
    if !attacker_grounded {
        return 1.0;
    }
    match (terrain, move_type) {
        (Terrain::Electric, "electric") => 1.3,
        (Terrain::Grassy, "grass") => 1.3,
        (Terrain::Psychic, "psychic") => 1.3,
        _ => 1.0,
    }
}

/// Screens reduce by 2048/4096 in singles and 2732/4096 in doubles.
/// Aurora veil covers both categories, reflect only physical, light
/// screen only special.
pub fn screen_modifier(category: MoveCategory, screen: Screen, doubles: bool) -> f64 {
    let reduction = if doubles {
        2732.0 / 4096.0
    } else {
        2048.0 / 4096.0
    };
    match (screen, category) {
        (Screen::AuroraVeil, _) => reduction,
        (Screen::Reflect, MoveCategory::Physical) => reduction,
        (Screen::LightScreen, MoveCategory::Special) => reduction,
        _ => 1.0,
    }
}

pub fn item_modifier(item: HeldItem, category: MoveCategory) -> f64 {
    match (item, category) {
        (HeldItem::LifeOrb, _) => 1.3,
        (HeldItem::ChoiceBand, MoveCategory::Physical) => 1.5,
        (HeldItem::ChoiceSpecs, MoveCategory::Special) => 1.5,
        _ => 1.0,
    }
}

/// Damage range and KO outlook for a single hit, serialized back to the
/// caller as-is.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageCalculation {
    pub min_damage: i64,
    pub max_damage: i64,
    pub min_percent: f64,
    pub max_percent: f64,
    #[serde(rename = "isKO")]
    pub is_ko: bool,
    pub ko_chance: String,
}

pub fn calculate_damage(
    attacker: &CombatStats,
    defender: &CombatStats,
    mv: &Move,
    attacker_mods: &CombatantModifiers,
    defender_mods: &CombatantModifiers,
    conditions: &BattleConditions,
) -> DamageCalculation {
    let (attack_stat, attack_stage) = match mv.category {
        MoveCategory::Physical => (attacker.attack, attacker_mods.attack_stage),
        MoveCategory::Special => (attacker.special_attack, attacker_mods.special_attack_stage),
    };
    let (defense_stat, defense_stage) = match mv.category {
        MoveCategory::Physical => (defender.defense, defender_mods.defense_stage),
        MoveCategory::Special => (defender.special_defense, defender_mods.special_defense_stage),
    };
    let attack = (attack_stat as f64 * stat_stage_multiplier(attack_stage)).floor();
    let defense = (defense_stat as f64 * stat_stage_multiplier(defense_stage))
        .floor()
        .max(1.0);

    let level = attacker.level as f64;
    let base =
        ((2.0 * level / 5.0 + 2.0) * mv.power as f64 * attack / defense / 50.0).floor() + 2.0;

    let stab = if has_stab(&mv.move_type, &attacker.types) {
        1.5
    } else {
        1.0
    };
    let modifier = stab
        * effectiveness(&mv.move_type, &defender.types)
        * weather_modifier(&mv.move_type, conditions.weather)
        // the attacker is treated as always grounded
        * terrain_modifier(&mv.move_type, conditions.terrain, true)
        * screen_modifier(mv.category, conditions.defender_screen, false)
        * item_modifier(attacker_mods.item, mv.category);

    // only the two extremes of the 16-roll range are modeled
    let min_damage = (base * modifier * 0.85).floor() as i64;
    let max_damage = (base * modifier).floor() as i64;

    let hp = defender.hp as i64;
    let min_percent = min_damage as f64 / defender.hp as f64 * 100.0;
    let max_percent = max_damage as f64 / defender.hp as f64 * 100.0;

    let is_ko = min_damage >= hp;
    let ko_chance = if is_ko {
        "100%".to_string()
    } else if max_damage >= hp {
        if max_damage == min_damage {
            // min == max together with max >= hp implies min >= hp,
            // which the first branch already caught
            "100%".to_string()
        } else {
            let ko_rolls =
                (((hp - min_damage) as f64 / (max_damage - min_damage) as f64) * 16.0).ceil();
            let chance = ((16.0 - ko_rolls) / 16.0 * 100.0).round() as i64;
            format!("{chance}%")
        }
    } else if max_damage as f64 >= hp as f64 * 0.9 {
        "Possible avec crit".to_string()
    } else {
        "Impossible".to_string()
    };

    DamageCalculation {
        min_damage,
        max_damage,
        min_percent,
        max_percent,
        is_ko,
        ko_chance,
    }
}
