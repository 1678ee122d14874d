use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ScoringError;

/// How match play and high/low treat points from tied comparisons.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CarryRule {
    /// Carried points are credited to both sides on the next scored hole.
    /// Retained for parity with older scorecards; it never changes who wins.
    Legacy,
    /// Carried points go to the next side to win a hole outright.
    #[default]
    #[value(name = "hole_winner")]
    HoleWinner,
}

/// What happens to a skins carry still open after hole 18.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SkinsCarry {
    #[default]
    Unpaid,
    #[value(name = "split_evenly")]
    SplitEvenly,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoringRules {
    #[serde(default)]
    pub match_carry: CarryRule,
    #[serde(default)]
    pub skins_final_carry: SkinsCarry,
}

/// Shape of the optional rules TOML. Every key may be left out.
#[derive(Debug, Default, Deserialize)]
pub struct RulesFile {
    #[serde(default)]
    pub rules: PartialRules,
}

#[derive(Debug, Default, Deserialize)]
pub struct PartialRules {
    pub match_carry: Option<CarryRule>,
    pub skins_final_carry: Option<SkinsCarry>,
}

impl RulesFile {
    /// # Errors
    /// Returns `ScoringError::Parse` for malformed TOML or unknown rule values.
    pub fn from_toml_str(contents: &str) -> Result<Self, ScoringError> {
        Ok(toml::from_str(contents)?)
    }

    /// # Errors
    /// Returns `ScoringError::Io` if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, ScoringError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

impl ScoringRules {
    /// CLI value first, then the file, then the default.
    #[must_use]
    pub fn resolve(
        match_carry: Option<CarryRule>,
        skins_final_carry: Option<SkinsCarry>,
        file: &RulesFile,
    ) -> Self {
        Self {
            match_carry: match_carry
                .or(file.rules.match_carry)
                .unwrap_or_default(),
            skins_final_carry: skins_final_carry
                .or(file.rules.skins_final_carry)
                .unwrap_or_default(),
        }
    }
}
