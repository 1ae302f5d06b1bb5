//! Match, SetScore, Side, and RoundType for best-of-three badminton matches.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Identifier for a match within a tournament. Deterministic: group matches
/// are `g{group}-m{1..3}`, the knockout slots are `sf1`, `sf2`, `final`.
pub type MatchId = String;

/// Sets per match (best of three).
pub const SETS_PER_MATCH: usize = 3;

/// Which side of a match (team 1 or team 2).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    One,
    Two,
}

/// Phase of the tournament this match belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundType {
    Group,
    Semi,
    Final,
}

/// One set's score, one value per side. `None` until a value is entered;
/// both must be present for the set to count toward a result.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SetScore {
    pub s1: Option<u32>,
    pub s2: Option<u32>,
}

impl SetScore {
    pub fn is_entered(&self) -> bool {
        self.s1.is_some() && self.s2.is_some()
    }
}

/// A single best-of-three match.
///
/// `completed` and `winner_id` are caches of the evaluator over `sets`: they
/// are rewritten together on every set write and never set independently.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    /// `None` while the pairing is still to be determined (knockout slots
    /// before seeding).
    pub team1_id: Option<TeamId>,
    pub team2_id: Option<TeamId>,
    pub sets: [SetScore; SETS_PER_MATCH],
    pub completed: bool,
    pub winner_id: Option<TeamId>,
    pub round: RoundType,
    /// Group number (1 or 2) for group-stage matches.
    pub group_id: Option<u8>,
}

impl GameMatch {
    /// Group-stage match with empty sets. `seq` is 1-based within the group.
    pub fn group(group_id: u8, seq: usize, team1_id: TeamId, team2_id: TeamId) -> Self {
        Self {
            id: format!("g{group_id}-m{seq}"),
            team1_id: Some(team1_id),
            team2_id: Some(team2_id),
            sets: Default::default(),
            completed: false,
            winner_id: None,
            round: RoundType::Group,
            group_id: Some(group_id),
        }
    }

    /// Knockout slot with no teams yet (semifinals and final at init).
    pub fn shell(id: impl Into<MatchId>, round: RoundType) -> Self {
        Self {
            id: id.into(),
            team1_id: None,
            team2_id: None,
            sets: Default::default(),
            completed: false,
            winner_id: None,
            round,
            group_id: None,
        }
    }

    pub fn team_id(&self, side: Side) -> Option<&TeamId> {
        match side {
            Side::One => self.team1_id.as_ref(),
            Side::Two => self.team2_id.as_ref(),
        }
    }
}
