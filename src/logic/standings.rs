//! Group standings: aggregation over completed matches and ranking.

use crate::logic::scoring::{is_match_complete, match_winner};
use crate::models::{GameMatch, StandingsRow, Team};
use std::cmp::Reverse;

/// Ordered standings for one group's teams over its matches.
///
/// Only matches that are complete and have a winner count. Points are summed
/// over every entered set, including a third set played out after the match
/// was already decided. Ranking is by wins, then point differential, then
/// points for, all descending. Teams equal on all three keys keep their input
/// order (the sort is stable).
pub fn calculate_standings<'a, I>(teams: &[Team], matches: I) -> Vec<StandingsRow>
where
    I: IntoIterator<Item = &'a GameMatch>,
{
    let mut rows: Vec<StandingsRow> = teams.iter().map(StandingsRow::zeroed).collect();

    for m in matches {
        if !is_match_complete(m) {
            continue;
        }
        let Some(winner_id) = match_winner(m) else {
            continue;
        };
        let (Some(t1), Some(t2)) = (&m.team1_id, &m.team2_id) else {
            continue;
        };
        let Some(i1) = rows.iter().position(|r| &r.team_id == t1) else {
            continue;
        };
        let Some(i2) = rows.iter().position(|r| &r.team_id == t2) else {
            continue;
        };

        // Side 1's points over all entered sets; side 2's are the mirror.
        let mut for1 = 0;
        let mut against1 = 0;
        for set in &m.sets {
            if let (Some(a), Some(b)) = (set.s1, set.s2) {
                for1 += a;
                against1 += b;
            }
        }

        let side1_won = &winner_id == t1;
        apply(&mut rows[i1], for1, against1, side1_won);
        apply(&mut rows[i2], against1, for1, !side1_won);
    }

    rows.sort_by_key(|r| Reverse((r.won, r.diff, r.points_for)));
    rows
}

fn apply(row: &mut StandingsRow, points_for: u32, points_against: u32, won: bool) {
    row.played += 1;
    row.points_for += points_for;
    row.points_against += points_against;
    if won {
        row.won += 1;
    } else {
        row.lost += 1;
    }
    row.diff = row.points_for as i32 - row.points_against as i32;
}
