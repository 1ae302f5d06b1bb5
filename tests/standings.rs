//! Integration tests for standings aggregation and ranking.

use smashminton_web::{calculate_standings, evaluate, GameMatch, SetScore, Team};

fn team(id: &str, name: &str) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        player1: String::new(),
        player2: String::new(),
    }
}

fn played(seq: usize, t1: &str, t2: &str, scores: &[(u32, u32)]) -> GameMatch {
    let mut m = GameMatch::group(1, seq, t1.to_string(), t2.to_string());
    for (i, &(a, b)) in scores.iter().enumerate() {
        m.sets[i] = SetScore {
            s1: Some(a),
            s2: Some(b),
        };
    }
    evaluate(&mut m);
    m
}

#[test]
fn incomplete_matches_contribute_nothing() {
    let teams = [team("a", "A"), team("b", "B"), team("c", "C")];
    let matches = [
        played(1, "a", "b", &[(21, 10), (21, 12)]),
        played(2, "b", "c", &[(21, 10)]), // one set in, undecided
    ];
    let rows = calculate_standings(&teams, &matches);

    assert_eq!(rows[0].team_id, "a");
    assert_eq!((rows[0].played, rows[0].won), (1, 1));
    let b = rows.iter().find(|r| r.team_id == "b").unwrap();
    assert_eq!((b.played, b.won, b.lost), (1, 0, 1));
    let c = rows.iter().find(|r| r.team_id == "c").unwrap();
    assert_eq!(c.played, 0);
}

#[test]
fn played_total_is_twice_the_decided_matches() {
    let teams = [team("a", "A"), team("b", "B"), team("c", "C")];
    let matches = [
        played(1, "a", "b", &[(21, 10), (21, 12)]),
        played(2, "b", "c", &[(21, 18), (19, 21), (21, 15)]),
        played(3, "c", "a", &[(10, 21), (12, 21)]),
    ];
    let rows = calculate_standings(&teams, &matches);
    let total_played: u32 = rows.iter().map(|r| r.played).sum();
    assert_eq!(total_played, 2 * 3);
    let total_won: u32 = rows.iter().map(|r| r.won).sum();
    let total_lost: u32 = rows.iter().map(|r| r.lost).sum();
    assert_eq!((total_won, total_lost), (3, 3));
}

#[test]
fn dead_third_set_points_still_count() {
    // Decided 2-0 after two sets; the played-out third set's points count anyway.
    let teams = [team("a", "A"), team("b", "B"), team("c", "C")];
    let matches = [played(1, "a", "b", &[(21, 10), (21, 12), (15, 21)])];
    let rows = calculate_standings(&teams, &matches);

    let a = rows.iter().find(|r| r.team_id == "a").unwrap();
    assert_eq!((a.points_for, a.points_against, a.diff), (57, 43, 14));
    let b = rows.iter().find(|r| r.team_id == "b").unwrap();
    assert_eq!((b.points_for, b.points_against, b.diff), (43, 57, -14));
}

#[test]
fn ranking_is_wins_then_diff_then_points_for() {
    // Wins: t0=2, t1=1, t2=1, t3=0. t1 and t2 both end on diff +5,
    // points for 20 vs 25, so t2 ranks above t1.
    let teams = [
        team("t0", "T0"),
        team("t1", "T1"),
        team("t2", "T2"),
        team("t3", "T3"),
    ];
    let matches = [
        played(1, "t0", "t1", &[(6, 2), (6, 2)]),
        played(2, "t0", "t2", &[(6, 3), (6, 3)]),
        played(3, "t1", "t3", &[(8, 1), (8, 2)]),
        played(4, "t2", "t3", &[(10, 4), (9, 4)]),
    ];
    let rows = calculate_standings(&teams, &matches);

    let order: Vec<&str> = rows.iter().map(|r| r.team_id.as_str()).collect();
    assert_eq!(order, ["t0", "t2", "t1", "t3"]);
    assert_eq!(rows[1].diff, rows[2].diff);
    assert!(rows[1].points_for > rows[2].points_for);
}

#[test]
fn full_tie_keeps_input_order() {
    // Perfect circle with identical scores: every key equal, so the input
    // order of the teams is preserved.
    let teams = [team("a", "A"), team("b", "B"), team("c", "C")];
    let matches = [
        played(1, "a", "b", &[(21, 10), (21, 10)]),
        played(2, "b", "c", &[(21, 10), (21, 10)]),
        played(3, "c", "a", &[(21, 10), (21, 10)]),
    ];
    let rows = calculate_standings(&teams, &matches);

    let order: Vec<&str> = rows.iter().map(|r| r.team_id.as_str()).collect();
    assert_eq!(order, ["a", "b", "c"]);
    for r in &rows {
        assert_eq!((r.won, r.lost, r.diff), (1, 1, 0));
        assert_eq!(r.points_for, 62);
    }
}

#[test]
fn teams_without_matches_get_zeroed_rows() {
    let teams = [team("a", "A"), team("b", "B"), team("c", "C")];
    let rows = calculate_standings(&teams, std::iter::empty());
    assert_eq!(rows.len(), 3);
    for (row, t) in rows.iter().zip(&teams) {
        assert_eq!(row.team_id, t.id);
        assert_eq!((row.played, row.won, row.lost, row.diff), (0, 0, 0, 0));
    }
}
