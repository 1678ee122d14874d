//! Handicap stroke allocation.
//!
//! A course handicap up to 18 gives one stroke on each hole whose stroke index
//! is at or below the handicap. Above 18 every hole gets one stroke, and the
//! remainder goes round again from stroke index 1. Only that second tier is
//! modelled, so no hole ever receives more than two strokes.

use crate::model::{Course, Handicap, Hole};

/// Strokes a player with `course_handicap` receives on a hole of the given
/// stroke index.
#[must_use]
pub fn strokes_allocated(course_handicap: f64, stroke_index: u8) -> u32 {
    if course_handicap.is_nan() || course_handicap <= 0.0 {
        return 0;
    }
    let index = f64::from(stroke_index);
    if course_handicap <= 18.0 {
        u32::from(index <= course_handicap)
    } else {
        1 + u32::from(index <= course_handicap - 18.0)
    }
}

/// Gross minus allocated strokes. `None` only when the hole is unlogged; a
/// gross too large for `i32` saturates rather than disappearing.
#[must_use]
pub fn net_score(gross: Option<u32>, course_handicap: f64, stroke_index: u8) -> Option<i32> {
    let gross = i32::try_from(gross?).unwrap_or(i32::MAX);
    // at most 2, cast is lossless
    Some(gross - strokes_allocated(course_handicap, stroke_index) as i32)
}

#[must_use]
pub fn hole_net(gross: Option<u32>, handicap: Handicap, hole: &Hole) -> Option<i32> {
    net_score(gross, handicap.value(), hole.stroke_index)
}

/// Total strokes received over a full round on `course`.
#[must_use]
pub fn round_strokes(course_handicap: f64, course: &Course) -> u32 {
    course
        .holes
        .iter()
        .map(|h| strokes_allocated(course_handicap, h.stroke_index))
        .sum()
}
