use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

pub const HOLES_PER_ROUND: u8 = 18;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hole {
    pub number: u8,
    pub par: u8,
    /// Relative difficulty, 1 is the hardest hole on the course.
    #[serde(alias = "stroke_index")]
    pub stroke_index: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Course {
    #[serde(default)]
    pub name: String,
    pub holes: Vec<Hole>,
}

impl Course {
    /// Build a course from per-hole par and stroke index, hole `n` taking
    /// element `n - 1` of each array.
    ///
    /// # Errors
    /// Returns `ScoringError::Config` if the layout is not a valid 18-hole card.
    pub fn from_layout(
        name: impl Into<String>,
        pars: [u8; 18],
        stroke_indexes: [u8; 18],
    ) -> Result<Self, ScoringError> {
        let holes = pars
            .iter()
            .zip(stroke_indexes.iter())
            .zip(1..=HOLES_PER_ROUND)
            .map(|((&par, &stroke_index), number)| Hole {
                number,
                par,
                stroke_index,
            })
            .collect();
        let course = Self {
            name: name.into(),
            holes,
        };
        course.validate()?;
        Ok(course)
    }

    /// Check the scorecard is a full 18-hole card.
    ///
    /// # Errors
    /// Returns `ScoringError::Config` naming the first problem found.
    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.holes.len() != usize::from(HOLES_PER_ROUND) {
            return Err(ScoringError::Config(format!(
                "course scorecard must have {HOLES_PER_ROUND} holes, found {}",
                self.holes.len()
            )));
        }

        let mut seen_numbers = [false; 18];
        let mut seen_indexes = [false; 18];
        for hole in &self.holes {
            if !(1..=HOLES_PER_ROUND).contains(&hole.number) {
                return Err(ScoringError::Config(format!(
                    "hole number {} is outside 1..={HOLES_PER_ROUND}",
                    hole.number
                )));
            }
            if !(1..=HOLES_PER_ROUND).contains(&hole.stroke_index) {
                return Err(ScoringError::Config(format!(
                    "hole {} has stroke index {} outside 1..={HOLES_PER_ROUND}",
                    hole.number, hole.stroke_index
                )));
            }
            if hole.par == 0 {
                return Err(ScoringError::Config(format!(
                    "hole {} has a par of 0",
                    hole.number
                )));
            }

            let n = usize::from(hole.number - 1);
            if seen_numbers[n] {
                return Err(ScoringError::Config(format!(
                    "hole number {} appears more than once",
                    hole.number
                )));
            }
            seen_numbers[n] = true;

            let i = usize::from(hole.stroke_index - 1);
            if seen_indexes[i] {
                return Err(ScoringError::Config(format!(
                    "stroke index {} is assigned to more than one hole",
                    hole.stroke_index
                )));
            }
            seen_indexes[i] = true;
        }
        Ok(())
    }

    #[must_use]
    pub fn hole(&self, number: u8) -> Option<&Hole> {
        self.holes.iter().find(|h| h.number == number)
    }

    /// Holes in playing order, 1 through 18.
    pub fn holes_in_order(&self) -> impl Iterator<Item = &Hole> + '_ {
        (1..=HOLES_PER_ROUND).filter_map(|n| self.hole(n))
    }

    #[must_use]
    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| u32::from(h.par)).sum()
    }
}
