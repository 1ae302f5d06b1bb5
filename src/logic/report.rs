//! Read-only exports over a tournament snapshot: CSV standings and a result
//! summary. Nothing here mutates state.

use crate::logic::progression::{
    current_champion, group_standings, is_group_stage_complete, is_tournament_finished,
};
use crate::models::{Phase, StandingsRow, Tournament};
use chrono::Local;
use serde::Serialize;

/// Result summary for the overall view.
#[derive(Clone, Debug, Serialize)]
pub struct TournamentSummary {
    pub phase: Phase,
    pub group_stage_complete: bool,
    pub finished: bool,
    /// Champion team's display name, once the final is decided.
    pub champion: Option<String>,
    pub standings_group1: Vec<StandingsRow>,
    pub standings_group2: Vec<StandingsRow>,
    /// e.g. "25 August 2026".
    pub report_date: String,
}

pub fn summarize(t: &Tournament) -> TournamentSummary {
    TournamentSummary {
        phase: t.phase,
        group_stage_complete: is_group_stage_complete(t),
        finished: is_tournament_finished(t),
        champion: current_champion(t).map(|team| team.name.clone()),
        standings_group1: group_standings(t, 1),
        standings_group2: group_standings(t, 2),
        report_date: Local::now().format("%-d %B %Y").to_string(),
    }
}

/// Both groups' standings as CSV, one row per team with a group column.
pub fn standings_csv(t: &Tournament) -> Result<String, csv::Error> {
    let mut w = csv::Writer::from_writer(Vec::new());
    w.write_record([
        "group",
        "rank",
        "team",
        "played",
        "won",
        "lost",
        "points_for",
        "points_against",
        "diff",
    ])?;
    for group_id in [1u8, 2] {
        for (rank, row) in group_standings(t, group_id).iter().enumerate() {
            w.write_record([
                group_id.to_string(),
                (rank + 1).to_string(),
                row.team_name.clone(),
                row.played.to_string(),
                row.won.to_string(),
                row.lost.to_string(),
                row.points_for.to_string(),
                row.points_against.to_string(),
                row.diff.to_string(),
            ])?;
        }
    }
    w.flush()?;
    let bytes = w.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
