use tracing::debug;

use super::context::ScoreView;
use super::sort_utils::{TeamStanding, sort_standings};

/// Every player's net on every logged hole, summed per team. Lowest wins.
#[must_use]
pub fn stroke_play_standings(view: &ScoreView<'_>) -> Vec<TeamStanding> {
    let mut standings: Vec<TeamStanding> = view
        .teams()
        .iter()
        .map(|team| {
            let mut net = 0;
            let mut holes_resolved = 0;
            for hole in view.holes() {
                let nets = view.team_nets(team, hole);
                if !nets.is_empty() {
                    holes_resolved += 1;
                }
                net = nets.iter().fold(net, |acc: i32, n| acc.saturating_add(*n));
            }
            TeamStanding {
                team: team.name.clone(),
                net,
                holes_resolved,
                complete: true,
            }
        })
        .collect();

    sort_standings(&mut standings);
    debug!(?standings, "stroke play standings");
    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, Player, ScoreSheet, Team};

    #[test]
    fn sums_all_players_not_best_of() {
        let course = Course::from_layout(
            "SP",
            [4; 18],
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18],
        )
        .unwrap();
        let teams = vec![
            Team::new("A", vec![Player::new("a1", 0.0), Player::new("a2", 0.0)]),
            Team::new("B", vec![Player::new("b1", 1.0)]),
        ];
        let mut sheet = ScoreSheet::new();
        sheet.record("A", "a1", 1, 4);
        sheet.record("A", "a2", 1, 5);
        sheet.record("B", "b1", 1, 6);

        let standings = stroke_play_standings(&ScoreView::new(&course, &teams, &sheet));
        assert_eq!(standings[0].team, "B");
        assert_eq!(standings[0].net, 5);
        assert_eq!(standings[1].net, 9);
        assert_eq!(standings[1].holes_resolved, 1);
    }
}
