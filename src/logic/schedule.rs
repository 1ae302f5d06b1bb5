//! Group-stage fixture generation.

use crate::models::{GameMatch, Team};

/// Fixed round-robin of three: (T1 v T2), (T2 v T3), (T3 v T1). Every team
/// plays exactly twice and every pair meets exactly once. Match ids are
/// `g{group_id}-m{1..3}`, unique across the two groups.
pub fn generate_group_matches(teams: &[Team], group_id: u8) -> Vec<GameMatch> {
    debug_assert_eq!(teams.len(), 3);
    let pairings = [(0, 1), (1, 2), (2, 0)];
    pairings
        .iter()
        .enumerate()
        .map(|(i, &(a, b))| GameMatch::group(group_id, i + 1, teams[a].id.clone(), teams[b].id.clone()))
        .collect()
}
