use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ScoringError;
use crate::model::{Course, ScoreSheet, Team};

/// Reserved payout label for a drawn match.
pub const TIE_LABEL: &str = "Tie";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum GameFormat {
    StrokePlay,
    MatchPlay,
    HighLow,
    Skins,
    BestBall,
    Scramble,
}

impl GameFormat {
    pub const ALL: [Self; 6] = [
        Self::StrokePlay,
        Self::MatchPlay,
        Self::HighLow,
        Self::Skins,
        Self::BestBall,
        Self::Scramble,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrokePlay => "strokePlay",
            Self::MatchPlay => "matchPlay",
            Self::HighLow => "highLow",
            Self::Skins => "skins",
            Self::BestBall => "bestBall",
            Self::Scramble => "scramble",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::StrokePlay => "Stroke Play",
            Self::MatchPlay => "Match Play",
            Self::HighLow => "High/Low",
            Self::Skins => "Skins",
            Self::BestBall => "Best Ball",
            Self::Scramble => "Scramble",
        }
    }

    /// Match play and high/low are head-to-head; everything else takes any
    /// field of one or more teams.
    #[must_use]
    pub const fn head_to_head(self) -> bool {
        matches!(self, Self::MatchPlay | Self::HighLow)
    }

    /// # Errors
    /// Returns `ScoringError::Validation` naming the requirement when the team
    /// count does not fit the format.
    pub fn check_team_count(self, teams: usize) -> Result<(), ScoringError> {
        if self.head_to_head() && teams != 2 {
            return Err(ScoringError::validation(format!(
                "{} requires exactly 2 teams, found {teams}",
                self.display_name()
            )));
        }
        if teams == 0 {
            return Err(ScoringError::validation(format!(
                "{} requires at least 1 team",
                self.display_name()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for GameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameFormat {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ScoringError::UnknownFormat(s.to_string()))
    }
}

/// Tournament as supplied by the persistence layer, before validation.
/// Keys are camelCase like the `game` values; snake_case and the setup form's
/// names are accepted on input.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSnapshot {
    #[serde(default, alias = "selectedCourse")]
    pub course: Option<Course>,
    pub game: String,
    #[serde(alias = "bet_amount")]
    pub bet_amount: f64,
    #[serde(default, alias = "closest_to_pin_pot", alias = "closestToPinAmount")]
    pub closest_to_pin_pot: f64,
    #[serde(
        default,
        alias = "individual_champion_pot",
        alias = "individualChampionPayout"
    )]
    pub individual_champion_pot: f64,
    pub teams: Vec<Team>,
    #[serde(default)]
    pub scores: ScoreSheet,
}

impl TournamentSnapshot {
    /// # Errors
    /// Returns `ScoringError::Parse` if the text is not a snapshot document.
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the snapshot and split it into setup and scores.
    ///
    /// # Errors
    /// Returns the first setup or score problem found.
    pub fn into_parts(mut self) -> Result<(Tournament, ScoreSheet), ScoringError> {
        let scores = std::mem::take(&mut self.scores);
        let tournament = Tournament::try_from(self)?;
        tournament.validate_sheet(&scores)?;
        Ok((tournament, scores))
    }
}

/// Validated tournament setup. Scores live separately in a `ScoreSheet`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tournament {
    course: Course,
    format: GameFormat,
    bet_amount: f64,
    closest_to_pin_pot: f64,
    individual_champion_pot: f64,
    teams: Vec<Team>,
}

impl Tournament {
    /// # Errors
    /// Returns a `Config`, `UnknownFormat` or `Validation` error for the first
    /// rule the setup breaks.
    pub fn new(
        course: Option<Course>,
        format: GameFormat,
        bet_amount: f64,
        closest_to_pin_pot: f64,
        individual_champion_pot: f64,
        teams: Vec<Team>,
    ) -> Result<Self, ScoringError> {
        let course =
            course.ok_or_else(|| ScoringError::Config("course is required".to_string()))?;
        course.validate()?;
        Self::with_checked_course(
            course,
            format,
            bet_amount,
            closest_to_pin_pot,
            individual_champion_pot,
            teams,
        )
    }

    /// Rest of `new`, for a course that has already passed `Course::validate`.
    fn with_checked_course(
        course: Course,
        format: GameFormat,
        bet_amount: f64,
        closest_to_pin_pot: f64,
        individual_champion_pot: f64,
        teams: Vec<Team>,
    ) -> Result<Self, ScoringError> {
        if !(bet_amount.is_finite() && bet_amount > 0.0) {
            return Err(ScoringError::validation(
                "bet amount must be greater than 0",
            ));
        }
        for (label, amount) in [
            ("closest to pin pot", closest_to_pin_pot),
            ("individual champion pot", individual_champion_pot),
        ] {
            if !(amount.is_finite() && amount >= 0.0) {
                return Err(ScoringError::validation(format!(
                    "{label} must not be negative"
                )));
            }
        }

        validate_teams(&teams)?;
        format.check_team_count(teams.len())?;

        Ok(Self {
            course,
            format,
            bet_amount,
            closest_to_pin_pot,
            individual_champion_pot,
            teams,
        })
    }

    #[must_use]
    pub const fn course(&self) -> &Course {
        &self.course
    }

    #[must_use]
    pub const fn format(&self) -> GameFormat {
        self.format
    }

    #[must_use]
    pub const fn bet_amount(&self) -> f64 {
        self.bet_amount
    }

    #[must_use]
    pub const fn closest_to_pin_pot(&self) -> f64 {
        self.closest_to_pin_pot
    }

    #[must_use]
    pub const fn individual_champion_pot(&self) -> f64 {
        self.individual_champion_pot
    }

    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    #[must_use]
    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.teams.iter().map(|t| t.players.len()).sum()
    }

    /// Check every logged score targets a known team, player and hole and is
    /// a real stroke count.
    ///
    /// # Errors
    /// Returns `ScoringError::Validation` for the first bad score.
    pub fn validate_sheet(&self, scores: &ScoreSheet) -> Result<(), ScoringError> {
        for (team_name, player_name, hole, gross) in scores.iter() {
            self.check_score_target(team_name, player_name, hole)?;
            check_gross(gross)?;
        }
        Ok(())
    }

    pub(crate) fn check_score_target(
        &self,
        team_name: &str,
        player_name: &str,
        hole: u8,
    ) -> Result<(), ScoringError> {
        let team = self
            .team(team_name)
            .ok_or_else(|| ScoringError::NotFound(format!("team \"{team_name}\"")))?;
        if team.player(player_name).is_none() {
            return Err(ScoringError::NotFound(format!(
                "player \"{player_name}\" in team \"{team_name}\""
            )));
        }
        if self.course.hole(hole).is_none() {
            return Err(ScoringError::validation(format!(
                "hole number {hole} does not exist on the course"
            )));
        }
        Ok(())
    }
}

/// Highest gross accepted on a single hole.
pub const MAX_GROSS: u32 = 99;

pub(crate) fn check_gross(gross: u32) -> Result<(), ScoringError> {
    if gross == 0 {
        return Err(ScoringError::validation(
            "gross score must be at least 1 stroke",
        ));
    }
    if gross > MAX_GROSS {
        return Err(ScoringError::validation(format!(
            "gross score {gross} is above the {MAX_GROSS} stroke limit"
        )));
    }
    Ok(())
}

impl TryFrom<TournamentSnapshot> for Tournament {
    type Error = ScoringError;

    fn try_from(snapshot: TournamentSnapshot) -> Result<Self, Self::Error> {
        // course problems outrank a bad format string
        let course = snapshot
            .course
            .ok_or_else(|| ScoringError::Config("course is required".to_string()))?;
        course.validate()?;
        let format = snapshot.game.parse()?;
        Self::with_checked_course(
            course,
            format,
            snapshot.bet_amount,
            snapshot.closest_to_pin_pot,
            snapshot.individual_champion_pot,
            snapshot.teams,
        )
    }
}

fn validate_teams(teams: &[Team]) -> Result<(), ScoringError> {
    if teams.is_empty() {
        return Err(ScoringError::validation("at least one team is required"));
    }

    let mut team_names: HashSet<&str, RandomState> = HashSet::default();
    for team in teams {
        if team.name.trim().is_empty() {
            return Err(ScoringError::validation("team name must not be empty"));
        }
        if team.name == TIE_LABEL {
            return Err(ScoringError::validation(format!(
                "team name \"{TIE_LABEL}\" is reserved"
            )));
        }
        if !team_names.insert(team.name.as_str()) {
            return Err(ScoringError::validation(format!(
                "team name \"{}\" is used more than once",
                team.name
            )));
        }
        if team.players.is_empty() {
            return Err(ScoringError::validation(format!(
                "team \"{}\" has no players",
                team.name
            )));
        }

        let mut player_names: HashSet<&str, RandomState> = HashSet::default();
        for player in &team.players {
            if player.name.trim().is_empty() {
                return Err(ScoringError::validation(format!(
                    "team \"{}\" has a player with no name",
                    team.name
                )));
            }
            if !player_names.insert(player.name.as_str()) {
                return Err(ScoringError::validation(format!(
                    "player \"{}\" appears twice in team \"{}\"",
                    player.name, team.name
                )));
            }
            let hcp = player.handicap.value();
            if !(hcp.is_finite() && hcp >= 0.0) {
                return Err(ScoringError::validation(format!(
                    "player \"{}\" has invalid handicap {hcp}",
                    player.name
                )));
            }
        }
    }
    Ok(())
}
