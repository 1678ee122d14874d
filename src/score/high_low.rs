use std::cmp::Ordering;
use tracing::debug;

use super::context::ScoreView;
use super::match_play::{CarryLedger, HoleTally, MatchTally, head_to_head};
use crate::config::CarryRule;
use crate::error::ScoringError;
use crate::model::GameFormat;

/// Carry added when a side has nothing logged on a hole.
const SKIPPED_HOLE_CARRY: u32 = 2;

/// Each side's two lowest and two highest nets, compared pairwise: lower wins
/// a low comparison, higher wins a high one.
///
/// # Errors
/// Returns `ScoringError::Validation` unless there are exactly two teams.
pub fn high_low_tally(view: &ScoreView<'_>, rule: CarryRule) -> Result<MatchTally, ScoringError> {
    let (team_a, team_b) = head_to_head(view, GameFormat::HighLow)?;
    let mut ledger = CarryLedger::new(rule);

    for hole in view.holes() {
        let mut a_nets = view.team_nets(team_a, hole);
        let mut b_nets = view.team_nets(team_b, hole);
        if a_nets.is_empty() || b_nets.is_empty() {
            debug!(hole = hole.number, "high/low hole skipped, a side has no score");
            ledger.skip_hole(hole.number, SKIPPED_HOLE_CARRY);
            continue;
        }
        a_nets.sort_unstable();
        b_nets.sort_unstable();

        let mut tally = HoleTally {
            hole: hole.number,
            a_points: 0,
            b_points: 0,
            ties: 0,
            skipped: false,
        };
        for rank in 0..2 {
            let low = (a_nets.get(rank), b_nets.get(rank));
            record(&mut tally, low, Ordering::Less);
            let high = (a_nets.iter().rev().nth(rank), b_nets.iter().rev().nth(rank));
            record(&mut tally, high, Ordering::Greater);
        }
        debug!(hole = hole.number, ?tally, "high/low hole");
        ledger.settle_high_low_hole(tally);
    }

    Ok(ledger.finish(team_a, team_b))
}

/// A side short of a second score ties that comparison.
fn record(tally: &mut HoleTally, pair: (Option<&i32>, Option<&i32>), a_wins_on: Ordering) {
    match pair {
        (Some(a), Some(b)) if a.cmp(b) == a_wins_on => tally.a_points += 1,
        (Some(a), Some(b)) if a.cmp(b) == a_wins_on.reverse() => tally.b_points += 1,
        _ => tally.ties += 1,
    }
}
