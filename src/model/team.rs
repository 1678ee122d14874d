use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScoringError;

/// Course handicap. Arrives from the setup form as text or as a number.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[serde(try_from = "HandicapRepr", into = "f64")]
pub struct Handicap(f64);

#[derive(Deserialize)]
#[serde(untagged)]
enum HandicapRepr {
    Number(f64),
    Text(String),
}

impl Handicap {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for Handicap {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // blank on the setup form means scratch
        if trimmed.is_empty() {
            return Ok(Self(0.0));
        }
        trimmed
            .parse::<f64>()
            .map(Self)
            .map_err(|_| ScoringError::Parse(format!("handicap '{s}' is not a number")))
    }
}

impl TryFrom<HandicapRepr> for Handicap {
    type Error = ScoringError;

    fn try_from(value: HandicapRepr) -> Result<Self, Self::Error> {
        match value {
            HandicapRepr::Number(n) => Ok(Self(n)),
            HandicapRepr::Text(s) => s.parse(),
        }
    }
}

impl From<Handicap> for f64 {
    fn from(value: Handicap) -> Self {
        value.0
    }
}

impl fmt::Display for Handicap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub handicap: Handicap,
}

impl Player {
    pub fn new(name: impl Into<String>, handicap: f64) -> Self {
        Self {
            name: name.into(),
            handicap: Handicap::new(handicap),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Self {
        Self {
            name: name.into(),
            players,
        }
    }

    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }
}
