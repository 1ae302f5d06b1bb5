//! Badminton doubles tournament web app: library with models and progression logic.

pub mod logic;
pub mod models;

pub use logic::{
    calculate_standings, current_champion, evaluate, generate_group_matches, group_standings,
    is_group_stage_complete, is_match_complete, is_tournament_finished, match_winner, reconcile,
    set_winner, sets_won, standings_csv, start_tournament, summarize, update_match_score,
    TournamentSummary,
};
pub use models::{
    GameMatch, KnockoutBracket, MatchId, Phase, PlayerSlot, RoundType, SetScore, Side,
    StandingsRow, Team, TeamId, Tournament, TournamentError, TournamentId,
};
