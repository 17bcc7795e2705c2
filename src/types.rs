//! The two type-effectiveness charts used by the combat subsystem.
//!
//! The quick chart drives the 1v1 simulator and the win-chance estimate:
//! each super-effective pairing multiplies by 1.5, each resisted pairing
//! by 0.75, everything else is neutral. The canonical chart drives the
//! damage calculator with the full 2x / 0.5x / 0x pairings, immunities
//! included. The two charts answer different questions and produce
//! different numbers; they are deliberately not unified.

use phf::phf_map;

static QUICK_SUPER_EFFECTIVE: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "fire" => &["grass", "ice", "bug", "steel"],
    "water" => &["fire", "ground", "rock"],
    "electric" => &["water", "flying"],
    "grass" => &["water", "ground", "rock"],
    "ice" => &["grass", "ground", "flying", "dragon"],
    "fighting" => &["normal", "ice", "rock", "dark", "steel"],
    "poison" => &["grass", "fairy"],
    "ground" => &["fire", "electric", "poison", "rock", "steel"],
    "flying" => &["grass", "fighting", "bug"],
    "psychic" => &["fighting", "poison"],
    "bug" => &["grass", "psychic", "dark"],
    "rock" => &["fire", "ice", "flying", "bug"],
    "ghost" => &["ghost", "psychic"],
    "dragon" => &["dragon"],
    "dark" => &["psychic", "ghost"],
    "steel" => &["rock", "ice", "fairy"],
    "fairy" => &["fighting", "dragon", "dark"],
};

// Canonical 0.5x and 0x pairings both land here; the quick chart has no
// immunity tier, so ghost vs normal is just a resisted hit.
static QUICK_NOT_VERY_EFFECTIVE: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "normal" => &["rock", "steel", "ghost"],
    "fire" => &["fire", "water", "rock", "dragon"],
    "water" => &["water", "grass", "dragon"],
    "electric" => &["electric", "grass", "dragon", "ground"],
    "grass" => &["fire", "grass", "poison", "flying", "bug", "dragon", "steel"],
    "ice" => &["fire", "water", "ice", "steel"],
    "fighting" => &["poison", "flying", "psychic", "bug", "fairy", "ghost"],
    "poison" => &["poison", "ground", "rock", "ghost", "steel"],
    "ground" => &["grass", "bug", "flying"],
    "flying" => &["electric", "rock", "steel"],
    "psychic" => &["psychic", "steel", "dark"],
    "bug" => &["fire", "fighting", "poison", "flying", "ghost", "steel", "fairy"],
    "rock" => &["fighting", "ground", "steel"],
    "ghost" => &["dark", "normal"],
    "dragon" => &["steel", "fairy"],
    "dark" => &["fighting", "dark", "fairy"],
    "steel" => &["fire", "water", "electric", "steel"],
    "fairy" => &["fire", "poison", "steel"],
};

/// Quick-chart multiplier of one attacking type against a defender's
/// type list: x1.5 per super-effective match, x0.75 per resisted match,
/// neutral otherwise. Unknown type strings contribute nothing.
pub fn quick_type_effectiveness(attack_type: &str, defender_types: &[String]) -> f64 {
    let atk = attack_type.to_ascii_lowercase();
    let super_hits = QUICK_SUPER_EFFECTIVE.get(atk.as_str());
    let weak_hits = QUICK_NOT_VERY_EFFECTIVE.get(atk.as_str());
    let mut multiplier = 1.0;
    for t in defender_types {
        let def = t.to_ascii_lowercase();
        if super_hits.is_some_and(|list| list.contains(&def.as_str())) {
            multiplier *= 1.5;
        } else if weak_hits.is_some_and(|list| list.contains(&def.as_str())) {
            multiplier *= 0.75;
        }
    }
    multiplier
}

/// Cumulative quick-chart multiplier of a whole type list attacking a
/// whole type list. Feeds the simulator's turn damage and the win-chance
/// type edge.
pub fn quick_matchup(attacker_types: &[String], defender_types: &[String]) -> f64 {
    attacker_types
        .iter()
        .map(|t| quick_type_effectiveness(t, defender_types))
        .product()
}

/// Canonical-chart multiplier of one attacking type against a defender's
/// type list: product of the per-type lookups, so a double weakness is
/// 4x, a double resist 0.25x, and any immunity zeroes the whole hit.
pub fn effectiveness(attack_type: &str, defender_types: &[String]) -> f64 {
    defender_types
        .iter()
        .map(|t| single_effectiveness(attack_type, t))
        .product()
}

fn single_effectiveness(attacking: &str, defending: &str) -> f64 {
    let atk = attacking.to_ascii_lowercase();
    let def = defending.to_ascii_lowercase();
    match atk.as_str() {
        "normal" => match def.as_str() {
            "rock" | "steel" => 0.5,
            "ghost" => 0.0,
            _ => 1.0,
        },
        "fire" => match def.as_str() {
            "grass" | "ice" | "bug" | "steel" => 2.0,
            "fire" | "water" | "rock" | "dragon" => 0.5,
            _ => 1.0,
        },
        "water" => match def.as_str() {
            "fire" | "ground" | "rock" => 2.0,
            "water" | "grass" | "dragon" => 0.5,
            _ => 1.0,
        },
        "electric" => match def.as_str() {
            "water" | "flying" => 2.0,
            "electric" | "grass" | "dragon" => 0.5,
            "ground" => 0.0,
            _ => 1.0,
        },
        "grass" => match def.as_str() {
            "water" | "ground" | "rock" => 2.0,
            "fire" | "grass" | "poison" | "flying" | "bug" | "dragon" | "steel" => 0.5,
            _ => 1.0,
        },
        "ice" => match def.as_str() {
            "grass" | "ground" | "flying" | "dragon" => 2.0,
            "fire" | "water" | "ice" | "steel" => 0.5,
            _ => 1.0,
        },
        "fighting" => match def.as_str() {
            "normal" | "ice" | "rock" | "dark" | "steel" => 2.0,
            "poison" | "flying" | "psychic" | "bug" | "fairy" => 0.5,
            "ghost" => 0.0,
            _ => 1.0,
        },
        "poison" => match def.as_str() {
            "grass" | "fairy" => 2.0,
            "poison" | "ground" | "rock" | "ghost" => 0.5,
            "steel" => 0.0,
            _ => 1.0,
        },
        "ground" => match def.as_str() {
            "fire" | "electric" | "poison" | "rock" | "steel" => 2.0,
            "grass" | "bug" => 0.5,
            "flying" => 0.0,
            _ => 1.0,
        },
        "flying" => match def.as_str() {
            "grass" | "fighting" | "bug" => 2.0,
            "electric" | "rock" | "steel" => 0.5,
            _ => 1.0,
        },
        "psychic" => match def.as_str() {
            "fighting" | "poison" => 2.0,
            "psychic" | "steel" => 0.5,
            "dark" => 0.0,
            _ => 1.0,
        },
        "bug" => match def.as_str() {
            "grass" | "psychic" | "dark" => 2.0,
            "fire" | "fighting" | "poison" | "flying" | "ghost" | "steel" | "fairy" => 0.5,
            _ => 1.0,
        },
        "rock" => match def.as_str() {
            "fire" | "ice" | "flying" | "bug" => 2.0,
            "fighting" | "ground" | "steel" => 0.5,
            _ => 1.0,
        },
        "ghost" => match def.as_str() {
            "ghost" | "psychic" => 2.0,
            "dark" => 0.5,
            "normal" => 0.0,
            _ => 1.0,
        },
        "dragon" => match def.as_str() {
            "dragon" => 2.0,
            "steel" => 0.5,
            "fairy" => 0.0,
            _ => 1.0,
        },
        "dark" => match def.as_str() {
            "psychic" | "ghost" => 2.0,
            "fighting" | "dark" | "fairy" => 0.5,
            _ => 1.0,
        },
        "steel" => match def.as_str() {
            "rock" | "ice" | "fairy" => 2.0,
            "fire" | "water" | "electric" | "steel" => 0.5,
            _ => 1.0,
        },
        "fairy" => match def.as_str() {
            "fighting" | "dragon" | "dark" => 2.0,
            "fire" | "poison" | "steel" => 0.5,
            _ => 1.0,
        },
        _ => 1.0,
    }
}
