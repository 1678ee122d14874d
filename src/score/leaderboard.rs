use serde::{Deserialize, Serialize};

use super::context::ScoreView;
use super::sort_utils::positions;
use crate::model::{ScoreSheet, Tournament};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRow {
    /// Competition position, shared by tied totals.
    pub position: usize,
    pub team: String,
    /// Best net per hole, index 0 is hole 1. `None` means nobody on the team
    /// has logged the hole yet.
    pub per_hole: [Option<i32>; 18],
    /// Sum over the holes that have a value.
    pub total_net: i32,
    pub holes_scored: u8,
    /// `total_net` against the par of the holes scored.
    pub to_par: i32,
}

/// Best net per hole per team, ranked by total over logged holes.
#[must_use]
pub fn compute_leaderboard(tournament: &Tournament, scores: &ScoreSheet) -> Vec<LeaderboardRow> {
    let view = ScoreView::new(tournament.course(), tournament.teams(), scores);
    leaderboard_rows(&view)
}

#[must_use]
pub fn leaderboard_rows(view: &ScoreView<'_>) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = view
        .teams()
        .iter()
        .map(|team| {
            let mut per_hole = [None; 18];
            let mut total_net: i32 = 0;
            let mut holes_scored = 0;
            let mut par_played = 0;
            for hole in view.holes() {
                let best = view.best_net(team, hole);
                if let Some(net) = best {
                    total_net = total_net.saturating_add(net);
                    holes_scored += 1;
                    par_played += i32::from(hole.par);
                }
                per_hole[usize::from(hole.number - 1)] = best;
            }
            LeaderboardRow {
                position: 0,
                team: team.name.clone(),
                per_hole,
                total_net,
                holes_scored,
                to_par: total_net.saturating_sub(par_played),
            }
        })
        .collect();

    rows.sort_by_key(|r| r.total_net);
    let places = positions(&rows, |a, b| a.total_net == b.total_net);
    for (row, place) in rows.iter_mut().zip(places) {
        row.position = place;
    }
    rows
}
