use ahash::RandomState;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

use crate::error::ScoringError;
use crate::model::tournament::check_gross;
use crate::model::{ScoreEntry, ScoreSheet, Tournament};

/// Lookup contract the scoring core reads scores through.
pub trait ScoreStore {
    fn gross(&self, team: &str, player: &str, hole: u8) -> Option<u32>;

    /// Every logged score as of this call. Scorers work from this copy and
    /// never re-read the store mid-computation.
    fn sheet(&self) -> ScoreSheet;
}

impl ScoreStore for ScoreSheet {
    fn gross(&self, team: &str, player: &str, hole: u8) -> Option<u32> {
        Self::gross(self, team, player, hole)
    }

    fn sheet(&self) -> ScoreSheet {
        self.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredScore {
    pub gross: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Inserted,
    Updated { previous: u32 },
    /// Same value resubmitted. Only the timestamp moves.
    Unchanged,
}

type EntryKey = (String, String, u8);

/// At most one score per (team, player, hole); a new submission replaces the
/// old value and timestamp.
#[derive(Debug, Default, Clone)]
pub struct InMemoryScoreStore {
    entries: HashMap<EntryKey, StoredScore, RandomState>,
}

impl InMemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from an existing sheet, stamping every score with `at`.
    #[must_use]
    pub fn from_sheet(sheet: &ScoreSheet, at: DateTime<Utc>) -> Self {
        let entries = sheet
            .iter()
            .map(|(team, player, hole, gross)| {
                (
                    (team.to_string(), player.to_string(), hole),
                    StoredScore {
                        gross,
                        timestamp: at,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Validate and store one score.
    ///
    /// # Errors
    /// `NotFound` for an unknown team or player, `Validation` for a hole not on
    /// the course or a gross outside `1..=MAX_GROSS`.
    pub fn submit(
        &mut self,
        tournament: &Tournament,
        entry: ScoreEntry,
    ) -> Result<Submission, ScoringError> {
        tournament.check_score_target(&entry.team, &entry.player, entry.hole)?;
        check_gross(entry.gross)?;

        let key = (entry.team, entry.player, entry.hole);
        let stored = StoredScore {
            gross: entry.gross,
            timestamp: entry.timestamp,
        };
        let outcome = match self.entries.insert(key.clone(), stored) {
            None => Submission::Inserted,
            Some(prev) if prev.gross == entry.gross => Submission::Unchanged,
            Some(prev) => {
                warn!(
                    team = %key.0,
                    player = %key.1,
                    hole = key.2,
                    previous = prev.gross,
                    gross = entry.gross,
                    "score overwritten"
                );
                Submission::Updated {
                    previous: prev.gross,
                }
            }
        };
        debug!(?outcome, "score submitted");
        Ok(outcome)
    }

    #[must_use]
    pub fn entry(&self, team: &str, player: &str, hole: u8) -> Option<&StoredScore> {
        self.entries
            .get(&(team.to_string(), player.to_string(), hole))
    }

    /// A team's entries ordered by player then hole.
    #[must_use]
    pub fn team_entries(&self, team: &str) -> Vec<ScoreEntry> {
        let mut out: Vec<ScoreEntry> = self
            .entries
            .iter()
            .filter(|((t, _, _), _)| t == team)
            .map(|((t, p, h), s)| ScoreEntry {
                team: t.clone(),
                player: p.clone(),
                hole: *h,
                gross: s.gross,
                timestamp: s.timestamp,
            })
            .collect();
        out.sort_by(|a, b| a.player.cmp(&b.player).then(a.hole.cmp(&b.hole)));
        out
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn gross(&self, team: &str, player: &str, hole: u8) -> Option<u32> {
        self.entry(team, player, hole).map(|s| s.gross)
    }

    fn sheet(&self) -> ScoreSheet {
        let mut sheet = ScoreSheet::new();
        for ((team, player, hole), stored) in &self.entries {
            sheet.record(team, player, *hole, stored.gross);
        }
        sheet
    }
}

/// Store handle shared between score submitters and leaderboard readers.
#[derive(Debug, Clone, Default)]
pub struct SharedScoreStore {
    inner: Arc<RwLock<InMemoryScoreStore>>,
}

impl SharedScoreStore {
    #[must_use]
    pub fn new(store: InMemoryScoreStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// # Errors
    /// See [`InMemoryScoreStore::submit`].
    pub fn submit(
        &self,
        tournament: &Tournament,
        entry: ScoreEntry,
    ) -> Result<Submission, ScoringError> {
        // a panicked writer leaves the map itself intact
        let mut store = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        store.submit(tournament, entry)
    }
}

impl ScoreStore for SharedScoreStore {
    fn gross(&self, team: &str, player: &str, hole: u8) -> Option<u32> {
        let store = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        store.gross(team, player, hole)
    }

    fn sheet(&self) -> ScoreSheet {
        let store = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        store.sheet()
    }
}
