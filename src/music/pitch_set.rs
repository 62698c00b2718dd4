// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch sets: specific voicings of chords in absolute pitch space.

use std::fmt;

use crate::error::{HarmonicaError, Result};
use crate::utility::diff;

use super::{PitchClassSet, PitchSetShape};

/// Modulus used when a pitch set is treated as a chord-scale
pub const DEFAULT_MODULUS: i64 = 12;

/// Strictly ascending set of absolute pitches
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchSet {
    pitches: Vec<i64>,
}

impl PitchSet {
    /// Create a pitch set; pitches must be unique and ascending
    pub fn new(pitches: Vec<i64>) -> Result<Self> {
        if !pitches.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(HarmonicaError::UnorderedPitches(pitches));
        }
        Ok(Self { pitches })
    }

    /// Create a pitch set from pitches in any order, dropping duplicates
    pub fn from_unsorted(pitches: impl IntoIterator<Item = i64>) -> Self {
        let mut pitches: Vec<i64> = pitches.into_iter().collect();
        pitches.sort_unstable();
        pitches.dedup();
        Self { pitches }
    }

    pub(crate) fn from_validated(pitches: Vec<i64>) -> Self {
        debug_assert!(pitches.windows(2).all(|pair| pair[0] < pair[1]));
        Self { pitches }
    }

    /// The pitches, lowest first
    pub fn pitches(&self) -> &[i64] {
        &self.pitches
    }

    /// Number of pitches
    pub fn cardinality(&self) -> usize {
        self.pitches.len()
    }

    /// Whether the set holds no pitches
    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    /// Pitch at a position
    pub fn get(&self, index: usize) -> Option<i64> {
        self.pitches.get(index).copied()
    }

    /// Lowest pitch
    pub fn lowest(&self) -> Option<i64> {
        self.pitches.first().copied()
    }

    /// Highest pitch
    pub fn highest(&self) -> Option<i64> {
        self.pitches.last().copied()
    }

    /// Distance between the highest and lowest pitch (0 when empty)
    pub fn span(&self) -> i64 {
        match (self.lowest(), self.highest()) {
            (Some(low), Some(high)) => high - low,
            _ => 0,
        }
    }

    /// Shift every pitch by `amount`
    pub fn transpose(&mut self, amount: i64) {
        for pitch in &mut self.pitches {
            *pitch += amount;
        }
    }

    /// Transposed copy
    pub fn transposed(&self, amount: i64) -> Self {
        Self {
            pitches: self.pitches.iter().map(|p| p + amount).collect(),
        }
    }

    /// Transpose so the lowest pitch is 0
    pub fn normalize(&mut self) {
        if let Some(low) = self.lowest() {
            self.transpose(-low);
        }
    }

    /// Normalized copy
    pub fn normalized(&self) -> Self {
        let mut normalized = self.clone();
        normalized.normalize();
        normalized
    }

    /// Transpose so the pitch at `index` becomes `target_pitch`
    pub fn harmonize(&mut self, target_pitch: i64, index: usize) -> Result<()> {
        let current = self.get(index).ok_or(HarmonicaError::IndexOutOfRange {
            index,
            len: self.pitches.len(),
        })?;
        self.transpose(target_pitch - current);
        Ok(())
    }

    /// Harmonized copy
    pub fn harmonized(&self, target_pitch: i64, index: usize) -> Result<Self> {
        let mut harmonized = self.clone();
        harmonized.harmonize(target_pitch, index)?;
        Ok(harmonized)
    }

    /// Move the voicing up or down `amount` inversions, treating it as a
    /// chord-scale over the default modulus of 12
    pub fn invert(&mut self, amount: i64) -> Result<()> {
        self.invert_with_modulus(amount, DEFAULT_MODULUS)
    }

    /// Move the voicing up or down `amount` inversions
    ///
    /// The set is classified with the smallest multiple of `modulus` that
    /// holds its span, and every pitch steps `amount` places along the scale
    /// function of that classification. `[4,6,9,13]` inverted by 3 becomes
    /// `[13,16,18,21]`.
    pub fn invert_with_modulus(&mut self, amount: i64, modulus: i64) -> Result<()> {
        if modulus <= 0 {
            return Err(HarmonicaError::NonPositiveModulus(modulus));
        }

        let periods = ((self.span() + modulus - 1) / modulus).max(1);
        let pcset = self.classify(modulus * periods)?;
        let func = pcset.scale_function(pcset.pitch_classes()[0])?;

        self.pitches = self
            .pitches
            .iter()
            .map(|&pitch| func.index(pitch).map(|index| func.eval(index + amount)))
            .collect::<Result<Vec<i64>>>()?;
        Ok(())
    }

    /// Inverted copy
    pub fn inverted(&self, amount: i64) -> Result<Self> {
        let mut inverted = self.clone();
        inverted.invert(amount)?;
        Ok(inverted)
    }

    /// Pitch class set of these pitches under `modulus`
    pub fn classify(&self, modulus: i64) -> Result<PitchClassSet> {
        if modulus <= 0 {
            return Err(HarmonicaError::NonPositiveModulus(modulus));
        }
        let mut pitch_classes: Vec<i64> = self.pitches.iter().map(|p| p.rem_euclid(modulus)).collect();
        pitch_classes.sort_unstable();
        pitch_classes.dedup();
        PitchClassSet::new(pitch_classes, modulus)
    }

    /// Intervals between adjacent pitches
    pub fn shape(&self) -> PitchSetShape {
        PitchSetShape::from_validated(diff(&self.pitches))
    }

    /// Intervals between pitches one place apart, then two places apart, etc.
    ///
    /// `[0,4,7,14]` gives `[[4,3,7], [7,10], [14]]`.
    pub fn interval_spectrum(&self) -> Vec<Vec<i64>> {
        let len = self.pitches.len();
        (1..len)
            .map(|jump| {
                (0..len - jump)
                    .map(|pos| self.pitches[pos + jump] - self.pitches[pos])
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for PitchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.pitches)
    }
}
