use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

use super::context::ScoreView;
use crate::config::CarryRule;
use crate::error::ScoringError;
use crate::model::{GameFormat, Team};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleTally {
    pub hole: u8,
    pub a_points: u32,
    pub b_points: u32,
    /// Comparisons on this hole that ended level.
    pub ties: u32,
    /// True when a side had no logged net, so nothing was compared.
    pub skipped: bool,
}

/// Running point totals for a two-team format.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MatchTally {
    pub team_a: String,
    pub team_b: String,
    pub a_points: u32,
    pub b_points: u32,
    /// Carried points still waiting for a recipient after hole 18.
    pub unresolved_carry: u32,
    pub holes: Vec<HoleTally>,
}

impl MatchTally {
    /// Name of the side with more points, `None` when level.
    #[must_use]
    pub fn leader(&self) -> Option<&str> {
        match self.a_points.cmp(&self.b_points) {
            Ordering::Greater => Some(&self.team_a),
            Ordering::Less => Some(&self.team_b),
            Ordering::Equal => None,
        }
    }
}

/// Accumulates points and carry hole by hole under a `CarryRule`.
#[derive(Debug)]
pub(crate) struct CarryLedger {
    rule: CarryRule,
    a_points: u32,
    b_points: u32,
    carry: u32,
    holes: Vec<HoleTally>,
}

impl CarryLedger {
    pub(crate) const fn new(rule: CarryRule) -> Self {
        Self {
            rule,
            a_points: 0,
            b_points: 0,
            carry: 0,
            holes: Vec::new(),
        }
    }

    /// Legacy match play: the carry is the previous hole's ties, credited to
    /// both sides, then replaced by this hole's ties.
    pub(crate) fn settle_match_hole(&mut self, tally: HoleTally) {
        match self.rule {
            CarryRule::Legacy => {
                self.a_points += tally.a_points + self.carry;
                self.b_points += tally.b_points + self.carry;
                self.carry = tally.ties;
            }
            CarryRule::HoleWinner => self.award_hole_winner(&tally),
        }
        self.holes.push(tally);
    }

    /// Legacy high/low: this hole's ties join the carry and the whole carry
    /// is credited to both sides.
    pub(crate) fn settle_high_low_hole(&mut self, tally: HoleTally) {
        match self.rule {
            CarryRule::Legacy => {
                self.carry += tally.ties;
                self.a_points += tally.a_points + self.carry;
                self.b_points += tally.b_points + self.carry;
                self.carry = 0;
            }
            CarryRule::HoleWinner => self.award_hole_winner(&tally),
        }
        self.holes.push(tally);
    }

    pub(crate) fn skip_hole(&mut self, hole: u8, carry: u32) {
        self.carry += carry;
        self.holes.push(HoleTally {
            hole,
            a_points: 0,
            b_points: 0,
            ties: 0,
            skipped: true,
        });
    }

    fn award_hole_winner(&mut self, tally: &HoleTally) {
        self.a_points += tally.a_points;
        self.b_points += tally.b_points;
        match tally.a_points.cmp(&tally.b_points) {
            Ordering::Greater => {
                self.a_points += self.carry;
                self.carry = tally.ties;
            }
            Ordering::Less => {
                self.b_points += self.carry;
                self.carry = tally.ties;
            }
            Ordering::Equal => self.carry += tally.ties,
        }
    }

    pub(crate) fn finish(self, team_a: &Team, team_b: &Team) -> MatchTally {
        MatchTally {
            team_a: team_a.name.clone(),
            team_b: team_b.name.clone(),
            a_points: self.a_points,
            b_points: self.b_points,
            unresolved_carry: self.carry,
            holes: self.holes,
        }
    }
}

pub(crate) fn head_to_head<'a>(
    view: &ScoreView<'a>,
    format: GameFormat,
) -> Result<(&'a Team, &'a Team), ScoringError> {
    format.check_team_count(view.teams().len())?;
    match view.teams() {
        [a, b] => Ok((a, b)),
        _ => Err(ScoringError::validation(format!(
            "{} requires exactly 2 teams",
            format.display_name()
        ))),
    }
}

/// Every player on the first team against every player on the second, one
/// point per comparison to the lower net. Teams are taken in declaration order.
///
/// # Errors
/// Returns `ScoringError::Validation` unless there are exactly two teams.
pub fn match_play_tally(view: &ScoreView<'_>, rule: CarryRule) -> Result<MatchTally, ScoringError> {
    let (team_a, team_b) = head_to_head(view, GameFormat::MatchPlay)?;
    let mut ledger = CarryLedger::new(rule);

    for hole in view.holes() {
        let mut tally = HoleTally {
            hole: hole.number,
            a_points: 0,
            b_points: 0,
            ties: 0,
            skipped: false,
        };
        for pa in &team_a.players {
            let Some(net_a) = view.player_net(team_a, pa, hole) else {
                continue;
            };
            for pb in &team_b.players {
                let Some(net_b) = view.player_net(team_b, pb, hole) else {
                    continue;
                };
                match net_a.cmp(&net_b) {
                    Ordering::Less => tally.a_points += 1,
                    Ordering::Greater => tally.b_points += 1,
                    Ordering::Equal => tally.ties += 1,
                }
            }
        }
        debug!(hole = hole.number, ?tally, "match play hole");
        ledger.settle_match_hole(tally);
    }

    Ok(ledger.finish(team_a, team_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, Player, ScoreSheet};

    fn course() -> Course {
        Course::from_layout(
            "MP",
            [4; 18],
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18],
        )
        .unwrap()
    }

    fn teams() -> Vec<Team> {
        vec![
            Team::new("A", vec![Player::new("a1", 0.0), Player::new("a2", 0.0)]),
            Team::new("B", vec![Player::new("b1", 0.0), Player::new("b2", 0.0)]),
        ]
    }

    #[test]
    fn cross_comparisons_award_points() {
        let course = course();
        let teams = teams();
        let mut sheet = ScoreSheet::new();
        // a1 4, a2 5 vs b1 5, b2 6: a1 beats both, a2 ties b1 and beats b2
        sheet.record("A", "a1", 1, 4);
        sheet.record("A", "a2", 1, 5);
        sheet.record("B", "b1", 1, 5);
        sheet.record("B", "b2", 1, 6);

        let view = ScoreView::new(&course, &teams, &sheet);
        let tally = match_play_tally(&view, CarryRule::HoleWinner).unwrap();
        assert_eq!(tally.holes[0].a_points, 3);
        assert_eq!(tally.holes[0].ties, 1);
        assert_eq!(tally.a_points, 3);
        assert_eq!(tally.unresolved_carry, 1);
        assert_eq!(tally.leader(), Some("A"));
    }

    #[test]
    fn legacy_carry_inflates_both_sides_every_hole() {
        let course = course();
        let teams = teams();
        let mut sheet = ScoreSheet::new();
        for p in ["a1", "a2"] {
            sheet.record("A", p, 1, 4);
            sheet.record("A", p, 2, 4);
        }
        for p in ["b1", "b2"] {
            sheet.record("B", p, 1, 4);
            sheet.record("B", p, 2, 5);
        }

        let view = ScoreView::new(&course, &teams, &sheet);
        let legacy = match_play_tally(&view, CarryRule::Legacy).unwrap();
        // hole 1: four ties carried; hole 2: A wins 4 and both get the 4 carry
        assert_eq!((legacy.a_points, legacy.b_points), (8, 4));

        let fixed = match_play_tally(&view, CarryRule::HoleWinner).unwrap();
        // the carry goes only to the hole 2 winner
        assert_eq!((fixed.a_points, fixed.b_points), (8, 0));
        assert_eq!(legacy.leader(), fixed.leader());
    }

    #[test]
    fn unlogged_comparisons_are_skipped() {
        let course = course();
        let teams = teams();
        let mut sheet = ScoreSheet::new();
        sheet.record("A", "a1", 1, 9);
        sheet.record("B", "b1", 1, 3);

        let view = ScoreView::new(&course, &teams, &sheet);
        let tally = match_play_tally(&view, CarryRule::HoleWinner).unwrap();
        assert_eq!((tally.a_points, tally.b_points), (0, 1));
    }

    #[test]
    fn requires_two_teams() {
        let course = course();
        let mut teams = teams();
        teams.push(Team::new("C", vec![Player::new("c", 0.0)]));
        let sheet = ScoreSheet::new();
        let view = ScoreView::new(&course, &teams, &sheet);
        assert!(matches!(
            match_play_tally(&view, CarryRule::Legacy),
            Err(ScoringError::Validation(_))
        ));
    }
}
