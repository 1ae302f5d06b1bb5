//! Derived standings rows (for API / display).

use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};

/// Per-team aggregate over a group's completed matches. Entirely derived from
/// teams + matches; recomputed on every read, never stored as authoritative
/// state.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub points_for: u32,
    pub points_against: u32,
    pub diff: i32,
}

impl StandingsRow {
    /// Zeroed row for a team that has not played yet.
    pub fn zeroed(team: &Team) -> Self {
        Self {
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            ..Self::default()
        }
    }
}
