//! Win-chance matchup matrix over two teams, for team-builder analysis.

use crate::battle::estimate_win_chance;
use crate::model::{CombatStats, TeamsFile};
use rayon::prelude::*;

/// One row per member of team A, one column per member of team B; each
/// cell is `estimate_win_chance(a, b)`.
pub fn compute_matrix(teams: &TeamsFile) -> Vec<Vec<f64>> {
    let team_a: Vec<CombatStats> = teams.team_a.iter().map(CombatStats::from_data).collect();
    let team_b: Vec<CombatStats> = teams.team_b.iter().map(CombatStats::from_data).collect();
    team_a
        .par_iter()
        .map(|a| team_b.iter().map(|b| estimate_win_chance(a, b)).collect())
        .collect()
}

pub fn write_csv(matrix: &[Vec<f64>], path: &std::path::Path) -> anyhow::Result<()> {
    let mut out = String::new();
    for (row_idx, row) in matrix.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            if col_idx > 0 {
                out.push(',');
            }
            out.push_str(&format!("{value:.4}"));
        }
        if row_idx + 1 < matrix.len() {
            out.push('\n');
        }
    }
    std::fs::write(path, out)?;
    Ok(())
}

pub fn validate_team_sizes(teams: &TeamsFile) -> anyhow::Result<()> {
    for (label, team) in [("teamA", &teams.team_a), ("teamB", &teams.team_b)] {
        if team.is_empty() || team.len() > 6 {
            anyhow::bail!(
                "{label} must contain between 1 and 6 Pokemon (got {})",
                team.len()
            );
        }
    }
    Ok(())
}
