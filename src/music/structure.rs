// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale structures: the circular interval pattern of a pitch class set.

use std::fmt;

use crate::error::{HarmonicaError, Result};
use crate::utility::{cumsum, cycle_cumsum, cyclic_period, rotate};

use super::{PitchClassSet, ScaleFunc};

/// A circular sequence of positive intervals
///
/// The major scale is `[2,2,1,2,2,2,1]`. The intervals sum to the modulus.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScaleStructure {
    intervals: Vec<i64>,
}

impl ScaleStructure {
    /// Create a structure from positive intervals
    pub fn new(intervals: Vec<i64>) -> Result<Self> {
        if intervals.is_empty() {
            return Err(HarmonicaError::EmptyStructure);
        }
        if let Some(&interval) = intervals.iter().find(|&&i| i <= 0) {
            return Err(HarmonicaError::NonPositiveInterval(interval));
        }
        Ok(Self { intervals })
    }

    pub(crate) fn from_validated(intervals: Vec<i64>) -> Self {
        debug_assert!(!intervals.is_empty() && intervals.iter().all(|&i| i > 0));
        Self { intervals }
    }

    /// The intervals
    pub fn intervals(&self) -> &[i64] {
        &self.intervals
    }

    /// Number of intervals (and of pitch classes in a stamped set)
    pub fn size(&self) -> usize {
        self.intervals.len()
    }

    /// Sum of the intervals
    pub fn modulus(&self) -> i64 {
        self.intervals.iter().sum()
    }

    /// Rotate the intervals left by `amount`
    pub fn rotate(&mut self, amount: i64) {
        self.intervals = rotate(&self.intervals, amount);
    }

    /// Rotated copy
    pub fn rotated(&self, amount: i64) -> Self {
        Self {
            intervals: rotate(&self.intervals, amount),
        }
    }

    /// Stamp the structure onto pitch class space starting at `start`
    pub fn stamp_to_pcset(&self, start: i64) -> PitchClassSet {
        PitchClassSet::from_validated(cycle_cumsum(&self.intervals, start), self.modulus(), None)
    }

    /// Stamp the structure starting at `start`, which becomes the root
    pub fn stamp_to_pcset_with_root(&self, start: i64) -> PitchClassSet {
        let modulus = self.modulus();
        PitchClassSet::from_validated(
            cycle_cumsum(&self.intervals, start),
            modulus,
            Some(start.rem_euclid(modulus)),
        )
    }

    /// Scale function whose pattern is the running sum of the intervals
    ///
    /// `[2,2,3,2,2,1]` with transposition 4 gives `[2,4,7,9,11,12] + 4`.
    pub fn stamp_to_scale_func(&self, transposition: i64) -> ScaleFunc {
        ScaleFunc::from_validated(cumsum(&self.intervals, 0)[1..].to_vec(), transposition)
    }

    /// The smallest unit the structure repeats, e.g. `[2,1]` for
    /// `[2,1,2,1,2,1,2,1]`
    pub fn prime(&self) -> ScaleStructure {
        let period = cyclic_period(&self.intervals);
        Self {
            intervals: self.intervals[..period].to_vec(),
        }
    }

    /// Number of distinct transpositions of a scale with this structure
    pub fn count_transpositions(&self) -> i64 {
        self.prime().modulus()
    }

    /// Number of distinct modes of a scale with this structure
    pub fn count_modes(&self) -> usize {
        self.prime().size()
    }
}

impl fmt::Display for ScaleStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.intervals)
    }
}
