use crate::handicap::hole_net;
use crate::model::{Course, Hole, Player, ScoreSheet, Team};

/// Read-only view over one consistent set of scores. Every scorer works
/// through this so the course is always passed explicitly.
#[derive(Debug, Clone, Copy)]
pub struct ScoreView<'a> {
    course: &'a Course,
    teams: &'a [Team],
    scores: &'a ScoreSheet,
}

impl<'a> ScoreView<'a> {
    #[must_use]
    pub const fn new(course: &'a Course, teams: &'a [Team], scores: &'a ScoreSheet) -> Self {
        Self {
            course,
            teams,
            scores,
        }
    }

    #[must_use]
    pub const fn course(&self) -> &'a Course {
        self.course
    }

    #[must_use]
    pub const fn teams(&self) -> &'a [Team] {
        self.teams
    }

    #[must_use]
    pub const fn scores(&self) -> &'a ScoreSheet {
        self.scores
    }

    pub fn holes(&self) -> impl Iterator<Item = &'a Hole> + 'a {
        let course: &'a Course = self.course;
        course.holes_in_order()
    }

    #[must_use]
    pub fn player_net(&self, team: &Team, player: &Player, hole: &Hole) -> Option<i32> {
        let gross = self.scores.gross(&team.name, &player.name, hole.number);
        hole_net(gross, player.handicap, hole)
    }

    /// Logged nets for `team` on `hole`, in roster order.
    #[must_use]
    pub fn team_nets(&self, team: &Team, hole: &Hole) -> Vec<i32> {
        team.players
            .iter()
            .filter_map(|p| self.player_net(team, p, hole))
            .collect()
    }

    /// The lowest logged net on the team for `hole`.
    #[must_use]
    pub fn best_net(&self, team: &Team, hole: &Hole) -> Option<i32> {
        team.players
            .iter()
            .filter_map(|p| self.player_net(team, p, hole))
            .min()
    }

    /// Net summed over the player's logged holes, with the count of holes.
    #[must_use]
    pub fn player_total(&self, team: &Team, player: &Player) -> (i32, u8) {
        self.holes()
            .filter_map(|h| self.player_net(team, player, h))
            .fold((0i32, 0u8), |(net, holes), n| (net.saturating_add(n), holes + 1))
    }
}
