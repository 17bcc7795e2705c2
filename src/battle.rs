//! Deterministic 1v1 battle resolution and the win-chance heuristic.
//!
//! `fight` is a quick-battle tool, not a full engine: raw base HP, one
//! implicit attack per turn, strict alternation after the speed check,
//! and a hard turn cap so degenerate stat matchups still terminate.

use crate::model::CombatStats;
use crate::types::quick_matchup;
use serde::Serialize;

/// Turn cap; a stalemate ends here and is settled on remaining HP.
const MAX_TURNS: usize = 20;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// One turn of the log. `a_hp`/`b_hp` are the post-damage remaining HP,
/// clamped at zero for display; the running totals may go negative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleTurn {
    pub attacker: Side,
    pub damage: i64,
    pub a_hp: i64,
    pub b_hp: i64,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleResult {
    pub winner: Side,
    pub turns: Vec<BattleTurn>,
}

fn power_score(p: &CombatStats) -> f64 {
    p.hp as f64
        + p.attack as f64 * 1.2
        + p.defense as f64
        + p.special_attack as f64 * 1.1
        + p.special_defense as f64
        + p.speed as f64 * 0.6
}

/// Heuristic confidence that `a` beats `b`, clamped to [0.02, 0.98] so a
/// caller can always display "some chance". Not a true probability: the
/// two directions of a matchup need not sum to 1.
pub fn estimate_win_chance(a: &CombatStats, b: &CombatStats) -> f64 {
    let diff = (power_score(a) - power_score(b)) / 120.0;
    // +0.01 keeps the ratio finite whatever the chart returns
    let type_edge = ((quick_matchup(&a.types, &b.types) + 0.01)
        / (quick_matchup(&b.types, &a.types) + 0.01))
        .ln();
    let x = diff + 0.8 * type_edge;
    let chance = 1.0 / (1.0 + (-x).exp());
    chance.clamp(0.02, 0.98)
}

/// Resolve a full fight. Higher speed attacks first (ties favor A), then
/// the sides strictly alternate; each turn deals at least 1 damage.
pub fn fight(a: &CombatStats, b: &CombatStats) -> BattleResult {
    let mut a_hp = a.hp as i64;
    let mut b_hp = b.hp as i64;
    let mult_ab = quick_matchup(&a.types, &b.types);
    let mult_ba = quick_matchup(&b.types, &a.types);

    let mut attacker = if a.speed >= b.speed { Side::A } else { Side::B };
    let mut turns = Vec::new();

    while turns.len() < MAX_TURNS && a_hp > 0 && b_hp > 0 {
        let (atk, def, mult) = match attacker {
            Side::A => (a.attack, b.defense, mult_ab),
            Side::B => (b.attack, a.defense, mult_ba),
        };
        // damage is floored at 1 both before and after the type multiplier
        let base = (atk as f64 - def as f64 / 2.0).round().max(1.0);
        let damage = (base * mult).round().max(1.0) as i64;
        match attacker {
            Side::A => b_hp -= damage,
            Side::B => a_hp -= damage,
        }
        turns.push(BattleTurn {
            attacker,
            damage,
            a_hp: a_hp.max(0),
            b_hp: b_hp.max(0),
            note: format!("x{mult:.2}"),
        });
        attacker = attacker.opponent();
    }

    let winner = if a_hp >= b_hp { Side::A } else { Side::B };
    BattleResult {
        winner,
        turns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mon(types: &[&str], stats: [u32; 6]) -> CombatStats {
        CombatStats {
            hp: stats[0],
            attack: stats[1],
            defense: stats[2],
            special_attack: stats[3],
            special_defense: stats[4],
            speed: stats[5],
            types: types.iter().map(|s| s.to_string()).collect(),
            level: 50,
        }
    }

    #[test]
    fn speed_decides_the_opening_turn() {
        let fast = mon(&["normal"], [100, 80, 60, 80, 60, 120]);
        let slow = mon(&["normal"], [100, 80, 60, 80, 60, 40]);
        let result = fight(&slow, &fast);
        assert_eq!(result.turns[0].attacker, Side::B);
        let result = fight(&fast, &slow);
        assert_eq!(result.turns[0].attacker, Side::A);
    }

    #[test]
    fn speed_ties_favor_side_a() {
        let a = mon(&["normal"], [100, 80, 60, 80, 60, 90]);
        let b = mon(&["normal"], [100, 80, 60, 80, 60, 90]);
        let result = fight(&a, &b);
        assert_eq!(result.turns[0].attacker, Side::A);
    }

    #[test]
    fn turn_order_alternates_after_the_first_turn() {
        let a = mon(&["normal"], [400, 50, 200, 50, 200, 100]);
        let b = mon(&["normal"], [400, 50, 200, 50, 200, 50]);
        let result = fight(&a, &b);
        for pair in result.turns.windows(2) {
            assert_eq!(pair[1].attacker, pair[0].attacker.opponent());
        }
    }

    #[test]
    fn mirror_match_estimate_is_even() {
        let a = mon(&["water"], [100, 100, 100, 100, 100, 100]);
        let b = a.clone();
        let chance = estimate_win_chance(&a, &b);
        assert!((chance - 0.5).abs() < 1e-9);
    }
}
