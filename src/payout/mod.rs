pub mod individual;
pub mod split;
pub mod team;

pub use individual::*;
pub use split::*;
pub use team::*;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScoringRules;
use crate::error::ScoringError;
use crate::model::tournament::check_gross;
use crate::model::{Course, GameFormat, ScoreSheet, Team, Tournament};
use crate::score::ScoreView;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PayoutCategory {
    Team,
    Tie,
    IndividualChampion,
    IndividualRunnerUp,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PayoutLine {
    pub label: String,
    pub amount: f64,
    pub category: PayoutCategory,
}

impl PayoutLine {
    pub(crate) const fn team(label: String, amount: f64) -> Self {
        Self {
            label,
            amount,
            category: PayoutCategory::Team,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PayoutDetails {
    pub total_pot: f64,
    pub team: FormatDetails,
    pub individual: IndividualDetails,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PayoutReport {
    /// Team lines first, then individual lines. Labels are not merged across
    /// categories.
    pub payouts: Vec<PayoutLine>,
    pub details: PayoutDetails,
}

impl PayoutReport {
    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.payouts
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.amount)
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.payouts.iter().map(|l| l.amount).sum()
    }

    /// Sum of team and tie lines only.
    #[must_use]
    pub fn team_total(&self) -> f64 {
        self.payouts
            .iter()
            .filter(|l| matches!(l.category, PayoutCategory::Team | PayoutCategory::Tie))
            .map(|l| l.amount)
            .sum()
    }
}

/// Everything `compute_payouts` reads. The course is explicit; a missing one
/// is a configuration error.
#[derive(Debug, Clone, Copy)]
pub struct PayoutRequest<'a> {
    pub format: GameFormat,
    pub teams: &'a [Team],
    pub scores: &'a ScoreSheet,
    pub bet_amount: f64,
    pub closest_to_pin_pot: f64,
    pub individual_champion_pot: f64,
    pub course: Option<&'a Course>,
}

impl<'a> PayoutRequest<'a> {
    #[must_use]
    pub fn for_tournament(tournament: &'a Tournament, scores: &'a ScoreSheet) -> Self {
        Self {
            format: tournament.format(),
            teams: tournament.teams(),
            scores,
            bet_amount: tournament.bet_amount(),
            closest_to_pin_pot: tournament.closest_to_pin_pot(),
            individual_champion_pot: tournament.individual_champion_pot(),
            course: Some(tournament.course()),
        }
    }
}

/// Every player's bet, less the closest-to-pin and individual champion side
/// pots.
///
/// # Errors
/// Returns `ScoringError::Validation` if the side pots exceed the money bet.
pub fn total_pot(
    teams: &[Team],
    bet_amount: f64,
    closest_to_pin_pot: f64,
    individual_champion_pot: f64,
) -> Result<f64, ScoringError> {
    let players: usize = teams.iter().map(|t| t.players.len()).sum();
    // player counts are tiny, cast is exact
    let collected = players as f64 * bet_amount;
    let pot = collected - closest_to_pin_pot - individual_champion_pot;
    if !pot.is_finite() || pot < 0.0 {
        return Err(ScoringError::validation(format!(
            "side pots ({closest_to_pin_pot} + {individual_champion_pot}) exceed the {collected} collected"
        )));
    }
    Ok(pot)
}

/// Team payouts for the request's format plus the individual champion side
/// payout, as one flat list.
///
/// # Errors
/// `Config` when the course is missing or malformed, `Validation` when the
/// team count does not suit the format, a gross is out of range or the pot
/// goes negative.
pub fn compute_payouts(
    request: &PayoutRequest<'_>,
    rules: &ScoringRules,
) -> Result<PayoutReport, ScoringError> {
    let course = request.course.ok_or_else(|| {
        ScoringError::Config("selected course or scorecard is missing".to_string())
    })?;
    course.validate()?;
    request.format.check_team_count(request.teams.len())?;
    for (_, _, _, gross) in request.scores.iter() {
        check_gross(gross)?;
    }
    if request.individual_champion_pot < 0.0 || request.closest_to_pin_pot < 0.0 {
        return Err(ScoringError::validation("side pots must not be negative"));
    }

    let pot = total_pot(
        request.teams,
        request.bet_amount,
        request.closest_to_pin_pot,
        request.individual_champion_pot,
    )?;
    debug!(format = %request.format, pot, "computing payouts");

    let view = ScoreView::new(course, request.teams, request.scores);
    let (mut payouts, team_details) = team_payouts(request.format, &view, pot, rules)?;
    let (individual_lines, individual_details) =
        individual_champion(&view, request.individual_champion_pot);
    payouts.extend(individual_lines);

    Ok(PayoutReport {
        payouts,
        details: PayoutDetails {
            total_pot: pot,
            team: team_details,
            individual: individual_details,
        },
    })
}

impl Tournament {
    /// # Errors
    /// See [`compute_payouts`].
    pub fn payouts(
        &self,
        scores: &ScoreSheet,
        rules: &ScoringRules,
    ) -> Result<PayoutReport, ScoringError> {
        compute_payouts(&PayoutRequest::for_tournament(self, scores), rules)
    }
}
