use serde::{Deserialize, Serialize};
use tracing::debug;

use super::context::ScoreView;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SkinsHole {
    pub hole: u8,
    /// Team holding the strictly lowest best-ball net, if any.
    pub winner: Option<String>,
    pub best_net: Option<i32>,
}

/// Per hole, the team whose best player has the strictly lowest net takes the
/// skin. Teams with nothing logged on a hole cannot win it.
#[must_use]
pub fn skins_by_hole(view: &ScoreView<'_>) -> Vec<SkinsHole> {
    view.holes()
        .map(|hole| {
            let mut best: Option<i32> = None;
            let mut leaders: Vec<&str> = Vec::new();
            for team in view.teams() {
                let Some(net) = view.best_net(team, hole) else {
                    continue;
                };
                match best {
                    Some(b) if net > b => {}
                    Some(b) if net == b => leaders.push(&team.name),
                    _ => {
                        best = Some(net);
                        leaders.clear();
                        leaders.push(&team.name);
                    }
                }
            }

            let winner = match leaders.as_slice() {
                [only] => Some((*only).to_string()),
                _ => None,
            };
            debug!(hole = hole.number, ?best, ?leaders, "skins hole");
            SkinsHole {
                hole: hole.number,
                winner,
                best_net: best,
            }
        })
        .collect()
}
