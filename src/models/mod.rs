//! Data structures for the badminton tournament: teams, matches, standings, state.

mod game;
mod standings;
mod team;
mod tournament;

pub use game::{GameMatch, MatchId, RoundType, SetScore, Side, SETS_PER_MATCH};
pub use standings::StandingsRow;
pub use team::{PlayerSlot, Team, TeamId};
pub use tournament::{
    KnockoutBracket, Phase, Tournament, TournamentError, TournamentId, GROUP_SIZE, TEAM_COUNT,
};
