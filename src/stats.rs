//! IV/EV stat derivation: the 25 natures, the canonical HP/stat formulas,
//! and advisory spread validation.
//!
//! The formulas are total functions: out-of-range IVs or EVs still produce
//! a number, and only the `validate_*` helpers flag them.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    pub fn from_name(name: &str) -> Option<Nature> {
        let nature = match name.to_ascii_lowercase().as_str() {
            "hardy" => Nature::Hardy,
            "lonely" => Nature::Lonely,
            "brave" => Nature::Brave,
            "adamant" => Nature::Adamant,
            "naughty" => Nature::Naughty,
            "bold" => Nature::Bold,
            "docile" => Nature::Docile,
            "relaxed" => Nature::Relaxed,
            "impish" => Nature::Impish,
            "lax" => Nature::Lax,
            "timid" => Nature::Timid,
            "hasty" => Nature::Hasty,
            "serious" => Nature::Serious,
            "jolly" => Nature::Jolly,
            "naive" => Nature::Naive,
            "modest" => Nature::Modest,
            "mild" => Nature::Mild,
            "quiet" => Nature::Quiet,
            "bashful" => Nature::Bashful,
            "rash" => Nature::Rash,
            "calm" => Nature::Calm,
            "gentle" => Nature::Gentle,
            "sassy" => Nature::Sassy,
            "careful" => Nature::Careful,
            "quirky" => Nature::Quirky,
            _ => return None,
        };
        Some(nature)
    }
}

/// The six battle stats, in the order the data source lists them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

/// Nature multiplier for one stat: x1.1 raised, x0.9 lowered, x1.0
/// otherwise. HP is never a nature target, so it always reads 1.0.
pub fn nature_multiplier(nature: Nature, stat: Stat) -> f64 {
    match nature {
        Nature::Hardy | Nature::Docile | Nature::Serious | Nature::Bashful | Nature::Quirky => 1.0,
        Nature::Lonely => bonus(stat, Stat::Atk, Stat::Def),
        Nature::Brave => bonus(stat, Stat::Atk, Stat::Spe),
        Nature::Adamant => bonus(stat, Stat::Atk, Stat::Spa),
        Nature::Naughty => bonus(stat, Stat::Atk, Stat::Spd),
        Nature::Bold => bonus(stat, Stat::Def, Stat::Atk),
        Nature::Relaxed => bonus(stat, Stat::Def, Stat::Spe),
        Nature::Impish => bonus(stat, Stat::Def, Stat::Spa),
        Nature::Lax => bonus(stat, Stat::Def, Stat::Spd),
        Nature::Timid => bonus(stat, Stat::Spe, Stat::Atk),
        Nature::Hasty => bonus(stat, Stat::Spe, Stat::Def),
        Nature::Jolly => bonus(stat, Stat::Spe, Stat::Spa),
        Nature::Naive => bonus(stat, Stat::Spe, Stat::Spd),
        Nature::Modest => bonus(stat, Stat::Spa, Stat::Atk),
        Nature::Mild => bonus(stat, Stat::Spa, Stat::Def),
        Nature::Quiet => bonus(stat, Stat::Spa, Stat::Spe),
        Nature::Rash => bonus(stat, Stat::Spa, Stat::Spd),
        Nature::Calm => bonus(stat, Stat::Spd, Stat::Atk),
        Nature::Gentle => bonus(stat, Stat::Spd, Stat::Def),
        Nature::Sassy => bonus(stat, Stat::Spd, Stat::Spe),
        Nature::Careful => bonus(stat, Stat::Spd, Stat::Spa),
    }
}

fn bonus(stat: Stat, raised: Stat, lowered: Stat) -> f64 {
    if stat == raised {
        1.1
    } else if stat == lowered {
        0.9
    } else {
        1.0
    }
}

/// HP formula. Species with a base HP of exactly 1 keep exactly 1 HP at
/// any level or investment (the Shedinja rule).
pub fn calculate_hp(base: i32, iv: i32, ev: i32, level: i32) -> i32 {
    if base == 1 {
        return 1;
    }
    let ev_quarter = (ev as f64 / 4.0).floor();
    let core = (2.0 * base as f64 + iv as f64 + ev_quarter) * level as f64;
    (core / 100.0).floor() as i32 + level + 10
}

/// Non-HP stat formula. The nature multiplier applies to the floored
/// intermediate and the result is floored again.
pub fn calculate_stat(base: i32, iv: i32, ev: i32, level: i32, nature_mult: f64) -> i32 {
    let ev_quarter = (ev as f64 / 4.0).floor();
    let core = (2.0 * base as f64 + iv as f64 + ev_quarter) * level as f64;
    let intermediate = (core / 100.0 + 5.0).floor();
    (intermediate * nature_mult).floor() as i32
}

/// Final stat block as serialized back to the caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedStats {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub special_attack: i32,
    pub special_defense: i32,
    pub speed: i32,
    pub total: i32,
}

/// Derive all six stats from base stats, IVs and EVs (both ordered
/// hp/atk/def/spa/spd/spe), a level and a nature.
pub fn calculate_all_stats(
    base: [i32; 6],
    ivs: [i32; 6],
    evs: [i32; 6],
    level: i32,
    nature: Nature,
) -> CalculatedStats {
    let stat = |slot: usize, which: Stat| {
        calculate_stat(
            base[slot],
            ivs[slot],
            evs[slot],
            level,
            nature_multiplier(nature, which),
        )
    };
    let hp = calculate_hp(base[0], ivs[0], evs[0], level);
    let attack = stat(1, Stat::Atk);
    let defense = stat(2, Stat::Def);
    let special_attack = stat(3, Stat::Spa);
    let special_defense = stat(4, Stat::Spd);
    let speed = stat(5, Stat::Spe);
    CalculatedStats {
        hp,
        attack,
        defense,
        special_attack,
        special_defense,
        speed,
        total: hp + attack + defense + special_attack + special_defense + speed,
    }
}

const STAT_NAMES: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// Advisory IV check: reports out-of-range values, never blocks the math.
pub fn validate_ivs(ivs: [i32; 6]) -> Vec<String> {
    let mut errors = Vec::new();
    for (name, value) in STAT_NAMES.iter().zip(ivs) {
        if !(0..=31).contains(&value) {
            errors.push(format!(
                "L'IV de {name} doit être compris entre 0 et 31 ({value} reçu)"
            ));
        }
    }
    errors
}

/// Advisory EV check: per-stat range and granularity, plus the 510 total.
pub fn validate_evs(evs: [i32; 6]) -> Vec<String> {
    let mut errors = Vec::new();
    for (name, value) in STAT_NAMES.iter().zip(evs) {
        if !(0..=252).contains(&value) {
            errors.push(format!(
                "L'EV de {name} doit être compris entre 0 et 252 ({value} reçu)"
            ));
        } else if value % 4 != 0 {
            errors.push(format!(
                "L'EV de {name} devrait être un multiple de 4 ({value} reçu)"
            ));
        }
    }
    let total: i32 = evs.iter().sum();
    if total > 510 {
        errors.push(format!(
            "Le total des EV ne doit pas dépasser 510 ({total} reçu)"
        ));
    }
    errors
}
