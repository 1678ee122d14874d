use ahash::RandomState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Gross strokes by hole number for one player. Holes without a key are unlogged.
pub type HoleScores = BTreeMap<u8, u32>;

type PlayerScores = HashMap<String, HoleScores, RandomState>;

/// One submitted gross score.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub team: String,
    pub player: String,
    pub hole: u8,
    pub gross: u32,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl ScoreEntry {
    pub fn new(team: impl Into<String>, player: impl Into<String>, hole: u8, gross: u32) -> Self {
        Self {
            team: team.into(),
            player: player.into(),
            hole,
            gross,
            timestamp: Utc::now(),
        }
    }
}

/// Sparse team -> player -> hole -> gross lookup. This is the read-only
/// snapshot every scoring function works from.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct ScoreSheet {
    teams: HashMap<String, PlayerScores, RandomState>,
}

impl ScoreSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn gross(&self, team: &str, player: &str, hole: u8) -> Option<u32> {
        self.teams.get(team)?.get(player)?.get(&hole).copied()
    }

    /// Store a gross score, returning whatever was there before.
    pub fn record(&mut self, team: &str, player: &str, hole: u8, gross: u32) -> Option<u32> {
        self.teams
            .entry(team.to_string())
            .or_default()
            .entry(player.to_string())
            .or_default()
            .insert(hole, gross)
    }

    #[must_use]
    pub fn player_scores(&self, team: &str, player: &str) -> Option<&HoleScores> {
        self.teams.get(team)?.get(player)
    }

    #[must_use]
    pub fn has_scores(&self, team: &str, player: &str) -> bool {
        self.player_scores(team, player)
            .is_some_and(|holes| !holes.is_empty())
    }

    /// Every logged score as `(team, player, hole, gross)`, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, u8, u32)> + '_ {
        self.teams.iter().flat_map(|(team, players)| {
            players.iter().flat_map(move |(player, holes)| {
                holes
                    .iter()
                    .map(move |(&hole, &gross)| (team.as_str(), player.as_str(), hole, gross))
            })
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
