// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch set shapes: adjacent intervals of an absolute voicing.

use std::fmt;

use crate::error::{HarmonicaError, Result};
use crate::utility::cumsum;

use super::PitchSet;

/// Sequence of positive intervals between adjacent pitches of a pitch set
///
/// A close-position major triad has shape `[4,3]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PitchSetShape {
    intervals: Vec<i64>,
}

impl PitchSetShape {
    /// Create a shape; every interval must be positive
    pub fn new(intervals: Vec<i64>) -> Result<Self> {
        if let Some(&interval) = intervals.iter().find(|&&i| i <= 0) {
            return Err(HarmonicaError::NonPositiveInterval(interval));
        }
        Ok(Self { intervals })
    }

    pub(crate) fn from_validated(intervals: Vec<i64>) -> Self {
        debug_assert!(intervals.iter().all(|&i| i > 0));
        Self { intervals }
    }

    /// The intervals
    pub fn intervals(&self) -> &[i64] {
        &self.intervals
    }

    /// Number of intervals
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether this is the shape of a single pitch
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Distance from the lowest to the highest pitch
    pub fn span(&self) -> i64 {
        self.intervals.iter().sum()
    }

    /// Build the pitch set with this shape whose lowest pitch is `lowest_pitch`
    pub fn stamp(&self, lowest_pitch: i64) -> PitchSet {
        PitchSet::from_validated(cumsum(&self.intervals, lowest_pitch))
    }

    /// Whether some transposition of this shape sits inside `pitch_set`
    ///
    /// The matching pitches need not be adjacent: `[4,3]` is a subshape of
    /// `[60,64,65,67]` because 60, 64 and 67 are all present.
    pub fn is_subshape_of(&self, pitch_set: &PitchSet) -> bool {
        let pitches = pitch_set.pitches();
        let Some(&highest) = pitches.last() else {
            return false;
        };

        let span = self.span();
        pitches.iter().any(|&low| {
            low.checked_add(span).is_some_and(|top| top <= highest)
                && self
                    .stamp(low)
                    .pitches()
                    .iter()
                    .all(|p| pitches.binary_search(p).is_ok())
        })
    }
}

impl fmt::Display for PitchSetShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.intervals)
    }
}
