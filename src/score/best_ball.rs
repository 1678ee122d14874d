use tracing::debug;

use super::context::ScoreView;
use super::sort_utils::{TeamStanding, sort_standings};
use crate::model::HOLES_PER_ROUND;

/// The team's lowest net on each hole, summed over the round. A hole where
/// nobody on the team logged a score leaves the total unresolved.
#[must_use]
pub fn best_ball_standings(view: &ScoreView<'_>) -> Vec<TeamStanding> {
    let mut standings: Vec<TeamStanding> = view
        .teams()
        .iter()
        .map(|team| {
            let (net, holes_resolved) = view
                .holes()
                .filter_map(|hole| view.best_net(team, hole))
                .fold((0i32, 0u8), |(net, n), best| (net.saturating_add(best), n + 1));
            TeamStanding {
                team: team.name.clone(),
                net,
                holes_resolved,
                complete: holes_resolved == HOLES_PER_ROUND,
            }
        })
        .collect();

    sort_standings(&mut standings);
    debug!(?standings, "best ball standings");
    standings
}
