//! Tournament business logic: scoring, schedule, standings, progression, reports.

mod progression;
mod report;
mod schedule;
mod scoring;
mod standings;

pub use progression::{
    current_champion, group_standings, is_group_stage_complete, is_tournament_finished, reconcile,
    start_tournament, update_match_score,
};
pub use report::{standings_csv, summarize, TournamentSummary};
pub use schedule::generate_group_matches;
pub use scoring::{evaluate, is_match_complete, match_winner, set_winner, sets_won};
pub use standings::calculate_standings;
