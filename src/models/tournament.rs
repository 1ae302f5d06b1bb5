//! Tournament aggregate: teams, group matches, knockout bracket, and phase.

use crate::models::game::{GameMatch, MatchId, RoundType};
use crate::models::team::{PlayerSlot, Team, TeamId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed tournament size: two groups of three doubles pairs.
pub const TEAM_COUNT: usize = 6;
pub const GROUP_SIZE: usize = 3;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Start transition blocked: these teams are missing a player name.
    MissingPlayerNames { teams: Vec<String> },
    /// Tournament is not in a phase that allows this action.
    InvalidState,
    /// Score edit referenced a match id that does not exist; state unchanged.
    MatchNotFound(MatchId),
    /// Edit referenced a team id that does not exist; state unchanged.
    TeamNotFound(TeamId),
    /// Set index outside 0..3.
    SetIndexOutOfRange(usize),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::MissingPlayerNames { teams } => {
                write!(f, "Fill in both player names for: {}", teams.join(", "))
            }
            TournamentError::InvalidState => write!(f, "Invalid phase for this action"),
            TournamentError::MatchNotFound(id) => write!(f, "Match not found: {id}"),
            TournamentError::TeamNotFound(id) => write!(f, "Team not found: {id}"),
            TournamentError::SetIndexOutOfRange(idx) => {
                write!(f, "Set index out of range: {idx}")
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament session.
pub type TournamentId = Uuid;

/// Current phase of the tournament. "Finished" is not a phase: it is derived
/// from the final match being completed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Entering player names; no matches exist yet.
    #[default]
    Setup,
    /// Group stage: 6 round-robin matches across two groups.
    Groups,
    /// Group stage done; semifinals and final.
    Knockout,
}

/// The three knockout slots. They exist from initialization with empty team
/// references and are populated by reconciliation, never created or deleted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutBracket {
    pub sf1: GameMatch,
    pub sf2: GameMatch,
    #[serde(rename = "final")]
    pub final_match: GameMatch,
}

impl Default for KnockoutBracket {
    fn default() -> Self {
        Self {
            sf1: GameMatch::shell("sf1", RoundType::Semi),
            sf2: GameMatch::shell("sf2", RoundType::Semi),
            final_match: GameMatch::shell("final", RoundType::Final),
        }
    }
}

/// Full tournament state: 6 teams, group matches, knockout bracket, phase.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Always 6 teams; first three are group 1, last three group 2.
    pub teams: Vec<Team>,
    /// Empty until the tournament starts, then exactly 6.
    pub group_matches: Vec<GameMatch>,
    pub knockout: KnockoutBracket,
    pub phase: Phase,
}

impl Tournament {
    /// Fresh initial state: 6 blank teams, no group matches, empty knockout
    /// slots, phase Setup.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            teams: (0..TEAM_COUNT).map(Team::blank).collect(),
            group_matches: Vec::new(),
            knockout: KnockoutBracket::default(),
            phase: Phase::Setup,
        }
    }

    /// Unconditional reset to the fresh initial state. The session id is kept
    /// so web clients holding it stay attached.
    pub fn reset(&mut self) {
        let id = self.id;
        *self = Self::new();
        self.id = id;
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// One group's teams by input order: group 1 is the first three, group 2
    /// the last three.
    pub fn group_teams(&self, group_id: u8) -> &[Team] {
        match group_id {
            1 => &self.teams[..GROUP_SIZE],
            _ => &self.teams[GROUP_SIZE..],
        }
    }

    /// Locate any match (group or knockout) by id.
    pub fn get_match(&self, id: &str) -> Option<&GameMatch> {
        self.group_matches
            .iter()
            .chain([
                &self.knockout.sf1,
                &self.knockout.sf2,
                &self.knockout.final_match,
            ])
            .find(|m| m.id == id)
    }

    pub fn get_match_mut(&mut self, id: &str) -> Option<&mut GameMatch> {
        let Self {
            group_matches,
            knockout,
            ..
        } = self;
        group_matches
            .iter_mut()
            .chain([
                &mut knockout.sf1,
                &mut knockout.sf2,
                &mut knockout.final_match,
            ])
            .find(|m| m.id == id)
    }

    /// Edit one player name (Setup only; teams are immutable once started).
    /// The display name is rederived from the two player names.
    pub fn set_player_name(
        &mut self,
        team_id: &str,
        slot: PlayerSlot,
        name: impl Into<String>,
    ) -> Result<(), TournamentError> {
        if self.phase != Phase::Setup {
            return Err(TournamentError::InvalidState);
        }
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| TournamentError::TeamNotFound(team_id.to_string()))?;
        match slot {
            PlayerSlot::One => team.player1 = name.into(),
            PlayerSlot::Two => team.player2 = name.into(),
        }
        team.refresh_name();
        Ok(())
    }
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}
