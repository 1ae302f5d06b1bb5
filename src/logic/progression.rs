//! Tournament progression: phase transitions, score updates, and bracket
//! reconciliation.
//!
//! Reconciliation runs synchronously after every mutation and is guarded by
//! its completion preconditions, so it is safe (and idempotent) to call
//! unconditionally: seeding an already-seeded bracket rewrites the same slots
//! with the same values.

use crate::logic::scoring::evaluate;
use crate::logic::schedule::generate_group_matches;
use crate::logic::standings::calculate_standings;
use crate::models::{
    Phase, Side, StandingsRow, Team, Tournament, TournamentError, GROUP_SIZE, SETS_PER_MATCH,
};

/// Start the tournament: every team needs both player names, then the two
/// groups (first three teams, last three teams) get their fixtures and the
/// phase moves to `groups`. On failure nothing changes and the error names
/// the offending teams.
pub fn start_tournament(t: &mut Tournament) -> Result<(), TournamentError> {
    if t.phase != Phase::Setup {
        return Err(TournamentError::InvalidState);
    }
    let missing: Vec<String> = t
        .teams
        .iter()
        .enumerate()
        .filter(|(_, team)| !team.has_both_players())
        .map(|(i, _)| Team::label(i))
        .collect();
    if !missing.is_empty() {
        return Err(TournamentError::MissingPlayerNames { teams: missing });
    }

    let mut matches = generate_group_matches(&t.teams[..GROUP_SIZE], 1);
    matches.extend(generate_group_matches(&t.teams[GROUP_SIZE..], 2));
    t.group_matches = matches;
    t.phase = Phase::Groups;
    log::info!("tournament {} started: 6 group matches scheduled", t.id);
    Ok(())
}

/// Apply one score-cell edit: write `side`'s value for set `set_index` of the
/// match with `match_id`, re-evaluate that match's cached result, then
/// reconcile the bracket. Unknown ids and out-of-range indexes leave the
/// tournament untouched.
pub fn update_match_score(
    t: &mut Tournament,
    match_id: &str,
    set_index: usize,
    side: Side,
    value: Option<u32>,
) -> Result<(), TournamentError> {
    if t.phase == Phase::Setup {
        return Err(TournamentError::InvalidState);
    }
    if set_index >= SETS_PER_MATCH {
        return Err(TournamentError::SetIndexOutOfRange(set_index));
    }
    let m = t
        .get_match_mut(match_id)
        .ok_or_else(|| TournamentError::MatchNotFound(match_id.to_string()))?;
    match side {
        Side::One => m.sets[set_index].s1 = value,
        Side::Two => m.sets[set_index].s2 = value,
    }
    evaluate(m);
    reconcile(t);
    Ok(())
}

/// Reconcile the knockout bracket with the current results.
///
/// While all six group matches are complete, the semifinals are (re)seeded
/// from the group standings: each group's winner faces the other group's
/// runner-up. While both semifinals are complete, the final is (re)seeded
/// from their winners. A late correction that re-opens a group match drops
/// the phase back to `groups`; the previously written seeds stay until the
/// group completes again.
pub fn reconcile(t: &mut Tournament) {
    if t.phase == Phase::Setup {
        return;
    }

    if is_group_stage_complete(t) {
        let s1 = group_standings(t, 1);
        let s2 = group_standings(t, 2);
        t.knockout.sf1.team1_id = Some(s1[0].team_id.clone());
        t.knockout.sf1.team2_id = Some(s2[1].team_id.clone());
        t.knockout.sf2.team1_id = Some(s2[0].team_id.clone());
        t.knockout.sf2.team2_id = Some(s1[1].team_id.clone());
        if t.phase == Phase::Groups {
            t.phase = Phase::Knockout;
            log::info!("tournament {} group stage complete, semifinals seeded", t.id);
        }
    } else {
        t.phase = Phase::Groups;
    }

    if t.knockout.sf1.completed && t.knockout.sf2.completed {
        t.knockout.final_match.team1_id = t.knockout.sf1.winner_id.clone();
        t.knockout.final_match.team2_id = t.knockout.sf2.winner_id.clone();
    }
}

/// All six group matches exist and are completed.
pub fn is_group_stage_complete(t: &Tournament) -> bool {
    !t.group_matches.is_empty() && t.group_matches.iter().all(|m| m.completed)
}

/// The tournament is finished when the final match is completed.
pub fn is_tournament_finished(t: &Tournament) -> bool {
    t.knockout.final_match.completed
}

/// Winning team of the final, once it is decided.
pub fn current_champion(t: &Tournament) -> Option<&Team> {
    if !is_tournament_finished(t) {
        return None;
    }
    t.knockout
        .final_match
        .winner_id
        .as_deref()
        .and_then(|id| t.team(id))
}

/// Ordered standings for group 1 or 2.
pub fn group_standings(t: &Tournament, group_id: u8) -> Vec<StandingsRow> {
    calculate_standings(
        t.group_teams(group_id),
        t.group_matches
            .iter()
            .filter(|m| m.group_id == Some(group_id)),
    )
}
