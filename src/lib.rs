//! Combat calculation core for a Pokédex application: two type charts, a
//! deterministic 1v1 simulator with a win-chance heuristic, a single-hit
//! damage calculator and IV/EV stat derivation.
//!
//! The calculation modules are pure functions over plain data; all I/O
//! lives here and in the CLI.

pub mod battle;
pub mod damage;
pub mod matrix;
pub mod model;
pub mod stats;
pub mod types;

use crate::matrix::{compute_matrix, validate_team_sizes};
use crate::model::{CombatStats, TeamsFile};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::battle::{estimate_win_chance, fight, BattleResult, BattleTurn, Side};
    pub use crate::damage::{
        calculate_damage, BattleConditions, CombatantModifiers, DamageCalculation, HeldItem,
        Screen, Terrain, Weather,
    };
    pub use crate::model::{CombatStats, Move, MoveCategory, PokemonData, TeamsFile};
    pub use crate::stats::{calculate_all_stats, CalculatedStats, Nature};
}

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub teams_path: PathBuf,
    pub output_path: PathBuf,
    pub fight: Option<(usize, usize)>,
}

pub fn load_teams(path: &Path) -> anyhow::Result<TeamsFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read teams file at {}", path.display()))?;
    let parsed: TeamsFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    validate_team_sizes(&parsed)?;
    Ok(parsed)
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    let teams = load_teams(&opts.teams_path)?;
    if let Some((a_idx, b_idx)) = opts.fight {
        let a = teams
            .team_a
            .get(a_idx)
            .ok_or_else(|| anyhow::anyhow!("No Pokemon at index {a_idx} in teamA"))?;
        let b = teams
            .team_b
            .get(b_idx)
            .ok_or_else(|| anyhow::anyhow!("No Pokemon at index {b_idx} in teamB"))?;
        let result = battle::fight(&CombatStats::from_data(a), &CombatStats::from_data(b));
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    let matrix = compute_matrix(&teams);
    matrix::write_csv(&matrix, &opts.output_path)?;
    println!(
        "Wrote {}x{} win-chance matrix to {}",
        matrix.len(),
        matrix.first().map(|r| r.len()).unwrap_or(0),
        opts.output_path.display()
    );
    Ok(())
}
