//! Set and match evaluation under best-of-three scoring.

use crate::models::{GameMatch, SetScore, Side, TeamId};

/// Winner of a single set: the side with the strictly higher score, once both
/// values are entered. A missing value or an exact tie is no winner; neither
/// is an error.
pub fn set_winner(set: &SetScore) -> Option<Side> {
    match (set.s1, set.s2) {
        (Some(a), Some(b)) if a > b => Some(Side::One),
        (Some(a), Some(b)) if b > a => Some(Side::Two),
        _ => None,
    }
}

/// Sets won by each side over the whole match, as (side 1, side 2).
pub fn sets_won(m: &GameMatch) -> (u32, u32) {
    let mut won = (0, 0);
    for set in &m.sets {
        match set_winner(set) {
            Some(Side::One) => won.0 += 1,
            Some(Side::Two) => won.1 += 1,
            None => {}
        }
    }
    won
}

/// A match is complete as soon as either side's running set-win count reaches
/// 2, scanning sets in play order. A 2-0 sweep completes the match with the
/// third set untouched.
pub fn is_match_complete(m: &GameMatch) -> bool {
    let mut won1 = 0;
    let mut won2 = 0;
    for set in &m.sets {
        match set_winner(set) {
            Some(Side::One) => won1 += 1,
            Some(Side::Two) => won2 += 1,
            None => {}
        }
        if won1 >= 2 || won2 >= 2 {
            return true;
        }
    }
    false
}

/// Overall match winner: the team with at least two set wins, tallied over
/// all three sets. `None` while undecided or when the winning side's team is
/// still to be determined.
pub fn match_winner(m: &GameMatch) -> Option<TeamId> {
    let (won1, won2) = sets_won(m);
    if won1 >= 2 {
        m.team1_id.clone()
    } else if won2 >= 2 {
        m.team2_id.clone()
    } else {
        None
    }
}

/// Refresh the cached `completed` / `winner_id` fields from `sets`. Must run
/// after every set write so the caches never go stale.
pub fn evaluate(m: &mut GameMatch) {
    m.completed = is_match_complete(m);
    m.winner_id = match_winner(m);
}
