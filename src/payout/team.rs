use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::split::{PODIUM_SPLIT, WINNER_TAKES_ALL, split_places};
use super::{PayoutCategory, PayoutLine};
use crate::config::{ScoringRules, SkinsCarry};
use crate::error::ScoringError;
use crate::model::{GameFormat, HOLES_PER_ROUND, TIE_LABEL, Team};
use crate::score::{
    MatchTally, ScoreView, SkinsHole, TeamStanding, best_ball_standings, compare_standings,
    high_low_tally, match_play_tally, skins_by_hole, stroke_play_standings,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SkinsAward {
    pub hole: u8,
    pub winner: Option<String>,
    pub best_net: Option<i32>,
    /// Paid on this hole, carry included.
    pub amount: f64,
    /// Carry still open after this hole.
    pub carry: f64,
}

/// Format-specific breakdown behind the team payouts.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "format", rename_all = "camelCase")]
pub enum FormatDetails {
    StrokePlay {
        standings: Vec<TeamStanding>,
    },
    MatchPlay {
        tally: MatchTally,
    },
    HighLow {
        tally: MatchTally,
    },
    Skins {
        per_hole: f64,
        holes: Vec<SkinsAward>,
        /// Final carry with no recipient.
        unclaimed: f64,
    },
    BestBall {
        standings: Vec<TeamStanding>,
    },
    Scramble {
        standings: Vec<TeamStanding>,
    },
}

/// Score `format` and turn the result into team payouts summing to `pot`.
/// Skins under `SkinsCarry::Unpaid` is the exception; the shortfall is reported
/// as `unclaimed`.
///
/// # Errors
/// Returns `ScoringError::Validation` for a head-to-head format without exactly
/// two teams.
pub fn team_payouts(
    format: GameFormat,
    view: &ScoreView<'_>,
    pot: f64,
    rules: &ScoringRules,
) -> Result<(Vec<PayoutLine>, FormatDetails), ScoringError> {
    let teams = view.teams();
    Ok(match format {
        GameFormat::StrokePlay => {
            let standings = stroke_play_standings(view);
            let lines = standings_payout(teams, &standings, &WINNER_TAKES_ALL, pot);
            (lines, FormatDetails::StrokePlay { standings })
        }
        GameFormat::MatchPlay => {
            let tally = match_play_tally(view, rules.match_carry)?;
            (match_payout(teams, &tally, pot), FormatDetails::MatchPlay { tally })
        }
        GameFormat::HighLow => {
            let tally = high_low_tally(view, rules.match_carry)?;
            (match_payout(teams, &tally, pot), FormatDetails::HighLow { tally })
        }
        GameFormat::Skins => skins_payout(teams, skins_by_hole(view), pot, rules.skins_final_carry),
        GameFormat::BestBall => {
            let standings = best_ball_standings(view);
            let lines = standings_payout(teams, &standings, &PODIUM_SPLIT, pot);
            (lines, FormatDetails::BestBall { standings })
        }
        GameFormat::Scramble => {
            let standings = best_ball_standings(view);
            let lines = standings_payout(teams, &standings, &PODIUM_SPLIT, pot);
            (lines, FormatDetails::Scramble { standings })
        }
    })
}

/// One zeroed line per team, in declaration order.
fn zeroed_lines(teams: &[Team]) -> Vec<PayoutLine> {
    teams
        .iter()
        .map(|t| PayoutLine::team(t.name.clone(), 0.0))
        .collect()
}

fn credit(lines: &mut [PayoutLine], team: &str, amount: f64) {
    if let Some(line) = lines.iter_mut().find(|l| l.label == team) {
        line.amount += amount;
    }
}

fn standings_payout(
    teams: &[Team],
    standings: &[TeamStanding],
    fractions: &[f64],
    pot: f64,
) -> Vec<PayoutLine> {
    let mut lines = zeroed_lines(teams);
    let same = |a: &TeamStanding, b: &TeamStanding| compare_standings(a, b).is_eq();
    for (idx, amount) in split_places(standings, same, fractions, pot) {
        let team = &standings[idx].team;
        info!(team = %team, amount, "team payout");
        credit(&mut lines, team, amount);
    }
    lines
}

fn match_payout(teams: &[Team], tally: &MatchTally, pot: f64) -> Vec<PayoutLine> {
    let mut lines = zeroed_lines(teams);
    match tally.leader() {
        Some(winner) => {
            info!(
                winner,
                a_points = tally.a_points,
                b_points = tally.b_points,
                "match decided"
            );
            credit(&mut lines, winner, pot);
        }
        None => {
            info!(points = tally.a_points, "match halved");
            lines.push(PayoutLine {
                label: TIE_LABEL.to_string(),
                amount: pot,
                category: PayoutCategory::Tie,
            });
        }
    }
    lines
}

fn skins_payout(
    teams: &[Team],
    holes: Vec<SkinsHole>,
    pot: f64,
    final_carry: SkinsCarry,
) -> (Vec<PayoutLine>, FormatDetails) {
    let per_hole = pot / f64::from(HOLES_PER_ROUND);
    let mut lines = zeroed_lines(teams);
    let mut carry = 0.0;
    let mut awards = Vec::with_capacity(holes.len());

    for hole in holes {
        let amount = match &hole.winner {
            Some(team) => {
                let amount = per_hole + carry;
                credit(&mut lines, team, amount);
                carry = 0.0;
                amount
            }
            None => {
                carry += per_hole;
                0.0
            }
        };
        awards.push(SkinsAward {
            hole: hole.hole,
            winner: hole.winner,
            best_net: hole.best_net,
            amount,
            carry,
        });
    }

    let mut unclaimed = carry;
    if unclaimed > 0.0 {
        match final_carry {
            SkinsCarry::Unpaid => warn!(unclaimed, "skins carry left unpaid after hole 18"),
            SkinsCarry::SplitEvenly => {
                // validated tournaments always have at least one team
                let share = unclaimed / teams.len().max(1) as f64;
                for line in &mut lines {
                    line.amount += share;
                }
                unclaimed = 0.0;
            }
        }
    }

    (
        lines,
        FormatDetails::Skins {
            per_hole,
            holes: awards,
            unclaimed,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, Player, ScoreSheet};

    fn course() -> Course {
        Course::from_layout(
            "Team",
            [4; 18],
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18],
        )
        .unwrap()
    }

    fn two_teams() -> Vec<Team> {
        vec![
            Team::new("A", vec![Player::new("a", 0.0)]),
            Team::new("B", vec![Player::new("b", 0.0)]),
        ]
    }

    fn amount(lines: &[PayoutLine], label: &str) -> f64 {
        lines.iter().find(|l| l.label == label).map_or(0.0, |l| l.amount)
    }

    #[test]
    fn halved_match_pays_tie_recipient() {
        let course = course();
        let teams = two_teams();
        let sheet = ScoreSheet::new();
        let view = ScoreView::new(&course, &teams, &sheet);
        let (lines, _) =
            team_payouts(GameFormat::MatchPlay, &view, 200.0, &ScoringRules::default()).unwrap();
        assert_eq!(amount(&lines, TIE_LABEL), 200.0);
        assert_eq!(amount(&lines, "A"), 0.0);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn skins_carry_rolls_to_next_outright_winner() {
        let course = course();
        let teams = two_teams();
        let mut sheet = ScoreSheet::new();
        sheet.record("A", "a", 1, 4);
        sheet.record("B", "b", 1, 4);
        sheet.record("A", "a", 2, 5);
        sheet.record("B", "b", 2, 4);
        for hole in 3..=18 {
            sheet.record("A", "a", hole, 3);
            sheet.record("B", "b", hole, 4);
        }
        let view = ScoreView::new(&course, &teams, &sheet);
        let (lines, details) =
            team_payouts(GameFormat::Skins, &view, 180.0, &ScoringRules::default()).unwrap();
        assert_eq!(amount(&lines, "B"), 20.0);
        assert_eq!(amount(&lines, "A"), 160.0);
        let FormatDetails::Skins { unclaimed, holes, .. } = details else {
            panic!("expected skins details");
        };
        assert_eq!(unclaimed, 0.0);
        assert_eq!(holes[0].carry, 10.0);
        assert_eq!(holes[1].amount, 20.0);
    }

    #[test]
    fn split_evenly_pays_out_final_carry() {
        let course = course();
        let teams = two_teams();
        let sheet = ScoreSheet::new();
        let view = ScoreView::new(&course, &teams, &sheet);
        let rules = ScoringRules {
            skins_final_carry: SkinsCarry::SplitEvenly,
            ..ScoringRules::default()
        };
        let (lines, details) = team_payouts(GameFormat::Skins, &view, 180.0, &rules).unwrap();
        assert!((amount(&lines, "A") - 90.0).abs() < 1e-9);
        assert!((amount(&lines, "B") - 90.0).abs() < 1e-9);
        assert!(matches!(details, FormatDetails::Skins { unclaimed, .. } if unclaimed == 0.0));
    }

    #[test]
    fn scramble_reports_its_own_tag() {
        let course = course();
        let teams = two_teams();
        let sheet = ScoreSheet::new();
        let view = ScoreView::new(&course, &teams, &sheet);
        let (_, details) =
            team_payouts(GameFormat::Scramble, &view, 100.0, &ScoringRules::default()).unwrap();
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["format"], "scramble");
    }
}
