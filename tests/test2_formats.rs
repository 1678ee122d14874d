mod common;

use std::error::Error;

use proptest::prelude::*;
use rusty_golf_payout::payout::FormatDetails;
use rusty_golf_payout::{GameFormat, ScoreSheet, ScoringRules, SkinsCarry, compute_leaderboard};

use common::{fill, fill_holes, scratch_team, spread, tournament};

#[test]
fn stroke_play_winner_takes_the_pot() -> Result<(), Box<dyn Error>> {
    // two players per team at 100 each
    let t = tournament(
        GameFormat::StrokePlay,
        100.0,
        vec![scratch_team("A", 2), scratch_team("B", 2)],
    )?;
    let mut sheet = ScoreSheet::new();
    fill_holes(&mut sheet, "A", "A1", &spread(34));
    fill_holes(&mut sheet, "A", "A2", &spread(34));
    fill_holes(&mut sheet, "B", "B1", &spread(36));
    fill_holes(&mut sheet, "B", "B2", &spread(36));

    let report = t.payouts(&sheet, &ScoringRules::default())?;
    assert_eq!(report.details.total_pot, 400.0);
    assert_eq!(report.get("A"), Some(400.0));
    assert_eq!(report.get("B"), Some(0.0));

    let FormatDetails::StrokePlay { standings } = &report.details.team else {
        panic!("expected stroke play details");
    };
    assert_eq!(standings[0].net, 68);
    assert_eq!(standings[1].net, 72);
    Ok(())
}

#[test]
fn skins_final_tie_leaves_carry_unpaid() -> Result<(), Box<dyn Error>> {
    let t = tournament(
        GameFormat::Skins,
        90.0,
        vec![scratch_team("A", 1), scratch_team("B", 1)],
    )?;
    let mut sheet = ScoreSheet::new();
    for hole in 1..=17 {
        sheet.record("A", "A1", hole, 3);
        sheet.record("B", "B1", hole, 4);
    }
    sheet.record("A", "A1", 18, 4);
    sheet.record("B", "B1", 18, 4);

    let report = t.payouts(&sheet, &ScoringRules::default())?;
    assert!((report.get("A").unwrap_or_default() - 170.0).abs() < 1e-9);
    assert_eq!(report.get("B"), Some(0.0));
    let FormatDetails::Skins {
        per_hole,
        unclaimed,
        ..
    } = report.details.team
    else {
        panic!("expected skins details");
    };
    assert_eq!(per_hole, 10.0);
    assert!((unclaimed - 10.0).abs() < 1e-9);

    let split = ScoringRules {
        skins_final_carry: SkinsCarry::SplitEvenly,
        ..ScoringRules::default()
    };
    let report = t.payouts(&sheet, &split)?;
    assert!((report.get("A").unwrap_or_default() - 175.0).abs() < 1e-9);
    assert!((report.get("B").unwrap_or_default() - 5.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn best_ball_pays_podium() -> Result<(), Box<dyn Error>> {
    let t = tournament(
        GameFormat::BestBall,
        100.0,
        vec![
            scratch_team("A", 2),
            scratch_team("B", 2),
            scratch_team("C", 2),
        ],
    )?;
    let mut sheet = ScoreSheet::new();
    fill(&mut sheet, "A", "A1", 4);
    fill(&mut sheet, "A", "A2", 3);
    fill(&mut sheet, "B", "B1", 4);
    fill(&mut sheet, "B", "B2", 5);
    fill(&mut sheet, "C", "C1", 5);
    fill(&mut sheet, "C", "C2", 6);

    let report = t.payouts(&sheet, &ScoringRules::default())?;
    assert_eq!(report.details.total_pot, 600.0);
    assert_eq!(report.get("A"), Some(450.0));
    assert_eq!(report.get("B"), Some(150.0));
    assert_eq!(report.get("C"), Some(0.0));
    Ok(())
}

#[test]
fn best_ball_team_missing_a_hole_ranks_after_complete_teams() -> Result<(), Box<dyn Error>> {
    let t = tournament(
        GameFormat::Scramble,
        50.0,
        vec![scratch_team("A", 1), scratch_team("B", 1)],
    )?;
    let mut sheet = ScoreSheet::new();
    fill(&mut sheet, "B", "B1", 5);
    // A is lower on every hole but never logs 18
    for hole in 1..=17 {
        sheet.record("A", "A1", hole, 3);
    }

    let report = t.payouts(&sheet, &ScoringRules::default())?;
    assert_eq!(report.get("B"), Some(75.0));
    assert_eq!(report.get("A"), Some(25.0));
    Ok(())
}

#[test]
fn legacy_carry_inflates_both_sides_without_changing_the_winner() -> Result<(), Box<dyn Error>> {
    let teams = vec![scratch_team("A", 1), scratch_team("B", 1)];
    let t = tournament(GameFormat::MatchPlay, 25.0, teams)?;
    let mut sheet = ScoreSheet::new();
    sheet.record("A", "A1", 1, 4);
    sheet.record("B", "B1", 1, 4);
    for hole in 2..=18 {
        sheet.record("A", "A1", hole, 3);
        sheet.record("B", "B1", hole, 4);
    }

    let hole_winner = t.payouts(&sheet, &ScoringRules::default())?;
    let legacy = t.payouts(
        &sheet,
        &ScoringRules {
            match_carry: rusty_golf_payout::CarryRule::Legacy,
            ..ScoringRules::default()
        },
    )?;
    assert_eq!(hole_winner.get("A"), Some(50.0));
    assert_eq!(legacy.get("A"), Some(50.0));

    let (FormatDetails::MatchPlay { tally: hw }, FormatDetails::MatchPlay { tally: lg }) =
        (&hole_winner.details.team, &legacy.details.team)
    else {
        panic!("expected match play details");
    };
    assert_eq!((hw.a_points, hw.b_points), (18, 0));
    assert_eq!((lg.a_points, lg.b_points), (18, 1));
    Ok(())
}

#[test]
fn halved_high_low_pays_tie() -> Result<(), Box<dyn Error>> {
    let t = tournament(
        GameFormat::HighLow,
        10.0,
        vec![scratch_team("A", 2), scratch_team("B", 2)],
    )?;
    let mut sheet = ScoreSheet::new();
    for team in ["A", "B"] {
        fill(&mut sheet, team, &format!("{team}1"), 4);
        fill(&mut sheet, team, &format!("{team}2"), 5);
    }
    let report = t.payouts(&sheet, &ScoringRules::default())?;
    assert_eq!(report.get("Tie"), Some(40.0));
    assert_eq!(report.team_total(), 40.0);
    Ok(())
}

#[test]
fn leaderboard_ranks_by_total_and_shares_positions() -> Result<(), Box<dyn Error>> {
    let t = tournament(
        GameFormat::StrokePlay,
        10.0,
        vec![scratch_team("A", 1), scratch_team("B", 1), scratch_team("C", 1)],
    )?;
    let mut sheet = ScoreSheet::new();
    sheet.record("A", "A1", 1, 5);
    sheet.record("B", "B1", 1, 4);
    sheet.record("C", "C1", 1, 4);

    let rows = compute_leaderboard(&t, &sheet);
    let order: Vec<(&str, usize)> = rows.iter().map(|r| (r.team.as_str(), r.position)).collect();
    assert_eq!(order, vec![("B", 1), ("C", 1), ("A", 3)]);
    assert_eq!(rows[0].per_hole[1], None);
    assert_eq!(rows[2].to_par, 1);
    Ok(())
}

#[test]
fn absurd_gross_is_rejected_before_scoring() -> Result<(), Box<dyn Error>> {
    let t = tournament(
        GameFormat::StrokePlay,
        10.0,
        vec![scratch_team("A", 1), scratch_team("B", 1)],
    )?;
    let mut overflowing = ScoreSheet::new();
    overflowing.record("A", "A1", 1, 2_000_000_000);
    overflowing.record("A", "A1", 2, 2_000_000_000);
    assert!(t.validate_sheet(&overflowing).is_err());
    assert!(t.payouts(&overflowing, &ScoringRules::default()).is_err());

    // a score past i32 must not vanish and hand the pot to its team
    let mut huge = ScoreSheet::new();
    huge.record("A", "A1", 1, 3_000_000_000);
    huge.record("B", "B1", 1, 4);
    assert!(t.validate_sheet(&huge).is_err());
    assert!(t.payouts(&huge, &ScoringRules::default()).is_err());

    let rows = compute_leaderboard(&t, &overflowing);
    let a = rows.iter().find(|r| r.team == "A").ok_or("missing row")?;
    assert_eq!(a.holes_scored, 2);
    assert_eq!(a.total_net, i32::MAX);
    Ok(())
}

#[test]
fn wrong_team_count_names_the_requirement() {
    let err = tournament(
        GameFormat::MatchPlay,
        10.0,
        vec![scratch_team("A", 1), scratch_team("B", 1), scratch_team("C", 1)],
    )
    .unwrap_err();
    assert!(err.to_string().contains("requires exactly 2 teams"));
}

fn gross_card() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(2u32..=8, 18)
}

proptest! {
    #[test]
    fn team_payouts_sum_to_pot(
        a1 in gross_card(),
        a2 in gross_card(),
        b1 in gross_card(),
        b2 in gross_card(),
        bet in 5u32..=200,
    ) {
        let rules = ScoringRules {
            skins_final_carry: SkinsCarry::SplitEvenly,
            ..ScoringRules::default()
        };
        for format in GameFormat::ALL {
            let t = tournament(
                format,
                f64::from(bet),
                vec![scratch_team("A", 2), scratch_team("B", 2)],
            ).unwrap();
            let mut sheet = ScoreSheet::new();
            fill_holes(&mut sheet, "A", "A1", &a1);
            fill_holes(&mut sheet, "A", "A2", &a2);
            fill_holes(&mut sheet, "B", "B1", &b1);
            fill_holes(&mut sheet, "B", "B2", &b2);

            let report = t.payouts(&sheet, &rules).unwrap();
            let pot = report.details.total_pot;
            prop_assert!((report.team_total() - pot).abs() <= 0.01, "{format}: {} vs {pot}", report.team_total());
        }
    }

    #[test]
    fn resubmitting_a_score_changes_nothing(card in gross_card(), hole in 1u8..=18) {
        let t = tournament(
            GameFormat::Skins,
            20.0,
            vec![scratch_team("A", 1), scratch_team("B", 1)],
        ).unwrap();
        let mut sheet = ScoreSheet::new();
        fill_holes(&mut sheet, "A", "A1", &card);
        fill(&mut sheet, "B", "B1", 5);
        let before = t.payouts(&sheet, &ScoringRules::default()).unwrap();

        let same = sheet.gross("A", "A1", hole).unwrap();
        sheet.record("A", "A1", hole, same);
        let after = t.payouts(&sheet, &ScoringRules::default()).unwrap();
        prop_assert_eq!(before, after);
    }
}
