use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::split::{PODIUM_SPLIT, split_places};
use super::{PayoutCategory, PayoutLine};
use crate::score::ScoreView;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct IndividualStanding {
    pub player: String,
    pub team: String,
    pub net: i32,
    pub holes_scored: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct IndividualDetails {
    pub pot: f64,
    /// Every player with at least one logged hole, lowest net first.
    pub standings: Vec<IndividualStanding>,
}

/// Rank every player in the field on their own net total, regardless of team,
/// and split `pot` 75/25 between first and second.
#[must_use]
pub fn individual_champion(view: &ScoreView<'_>, pot: f64) -> (Vec<PayoutLine>, IndividualDetails) {
    let mut standings = Vec::new();
    for team in view.teams() {
        for player in &team.players {
            let (net, holes_scored) = view.player_total(team, player);
            if holes_scored == 0 {
                warn!(player = %player.name, team = %team.name, "no scores logged, not ranked");
                continue;
            }
            standings.push(IndividualStanding {
                player: player.name.clone(),
                team: team.name.clone(),
                net,
                holes_scored,
            });
        }
    }
    standings.sort_by_key(|s| s.net);

    let lines = split_places(&standings, |a, b| a.net == b.net, &PODIUM_SPLIT, pot)
        .into_iter()
        .map(|(idx, amount)| {
            let s = &standings[idx];
            // a tie for first makes everyone in it a champion
            let first = standings[0].net == s.net;
            let (category, title) = if first {
                (PayoutCategory::IndividualChampion, "Individual Champion")
            } else {
                (PayoutCategory::IndividualRunnerUp, "Individual Runner-Up")
            };
            info!(player = %s.player, team = %s.team, amount, title, "individual payout");
            PayoutLine {
                label: format!("{title} - {} ({})", s.player, s.team),
                amount,
                category,
            }
        })
        .collect();

    (lines, IndividualDetails { pot, standings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, Player, ScoreSheet, Team};

    fn course() -> Course {
        Course::from_layout(
            "Ind",
            [4; 18],
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18],
        )
        .unwrap()
    }

    #[test]
    fn ranks_across_teams() {
        let course = course();
        let teams = vec![
            Team::new("A", vec![Player::new("Ann", 0.0), Player::new("Al", 0.0)]),
            Team::new("B", vec![Player::new("Bo", 2.0), Player::new("Bea", 0.0)]),
        ];
        let mut sheet = ScoreSheet::new();
        sheet.record("A", "Ann", 1, 5);
        sheet.record("A", "Al", 1, 6);
        sheet.record("B", "Bo", 1, 5); // net 4
        sheet.record("B", "Bea", 1, 7);

        let view = ScoreView::new(&course, &teams, &sheet);
        let (lines, details) = individual_champion(&view, 100.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].label, "Individual Champion - Bo (B)");
        assert_eq!(lines[0].amount, 75.0);
        assert_eq!(lines[1].label, "Individual Runner-Up - Ann (A)");
        assert_eq!(lines[1].amount, 25.0);
        assert_eq!(details.standings.len(), 4);
    }

    #[test]
    fn players_without_scores_are_not_ranked() {
        let course = course();
        let teams = vec![Team::new("A", vec![Player::new("Ann", 0.0), Player::new("Al", 0.0)])];
        let mut sheet = ScoreSheet::new();
        sheet.record("A", "Ann", 1, 5);

        let view = ScoreView::new(&course, &teams, &sheet);
        let (lines, details) = individual_champion(&view, 40.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].amount, 30.0);
        assert_eq!(details.standings.len(), 1);
    }

    #[test]
    fn tied_champions_share_both_places() {
        let course = course();
        let teams = vec![
            Team::new("A", vec![Player::new("Ann", 0.0)]),
            Team::new("B", vec![Player::new("Bo", 0.0)]),
            Team::new("C", vec![Player::new("Cy", 0.0)]),
        ];
        let mut sheet = ScoreSheet::new();
        sheet.record("A", "Ann", 1, 4);
        sheet.record("B", "Bo", 1, 4);
        sheet.record("C", "Cy", 1, 5);

        let view = ScoreView::new(&course, &teams, &sheet);
        let (lines, _) = individual_champion(&view, 100.0);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.category == PayoutCategory::IndividualChampion));
        assert!(lines.iter().all(|l| l.amount == 50.0));
    }
}
