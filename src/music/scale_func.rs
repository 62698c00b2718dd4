// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale functions: periodic maps from scale degree to pitch.
//!
//! A scale function is a pattern of coefficients plus a transposition.
//! C major is `[2,4,5,7,9,11,12] + 0`: index 0 maps to the transposition,
//! index 4 maps to 7, index 7 maps to 12 and so on in both directions.
//! The last coefficient is the modulus (the octave) and the pattern length
//! is the number of degrees per octave.

use std::fmt;

use num_integer::gcd;

use crate::error::{HarmonicaError, Result};
use crate::utility::cycle_diff;

use super::{PitchClassSet, ScaleStructure};

/// A periodic integer function built from a coefficient pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScaleFunc {
    pattern: Vec<i64>,
    transposition: i64,
}

impl ScaleFunc {
    /// Create a scale function
    ///
    /// The pattern must be non-empty, strictly ascending and positive.
    pub fn new(pattern: Vec<i64>, transposition: i64) -> Result<Self> {
        if pattern.is_empty() {
            return Err(HarmonicaError::EmptyPattern);
        }
        if pattern[0] <= 0 || !pattern.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(HarmonicaError::InvalidPattern(pattern));
        }
        Ok(Self {
            pattern,
            transposition,
        })
    }

    pub(crate) fn from_validated(pattern: Vec<i64>, transposition: i64) -> Self {
        debug_assert!(Self::new(pattern.clone(), transposition).is_ok());
        Self {
            pattern,
            transposition,
        }
    }

    /// The coefficient pattern
    pub fn pattern(&self) -> &[i64] {
        &self.pattern
    }

    /// The image of index 0
    pub fn transposition(&self) -> i64 {
        self.transposition
    }

    /// Distance covered by one period (the last coefficient)
    pub fn modulus(&self) -> i64 {
        self.pattern[self.pattern.len() - 1]
    }

    /// Number of indices per period
    pub fn size(&self) -> usize {
        self.pattern.len()
    }

    /// Offsets of the first period, starting with 0
    fn residue_map(&self) -> impl Iterator<Item = i64> + '_ {
        std::iter::once(0).chain(self.pattern[..self.pattern.len() - 1].iter().copied())
    }

    fn residue(&self, r: usize) -> i64 {
        if r == 0 {
            0
        } else {
            self.pattern[r - 1]
        }
    }

    /// Pitch at index `n`
    pub fn eval(&self, n: i64) -> i64 {
        let size = self.size() as i64;
        let r = n.rem_euclid(size);
        let q = n.div_euclid(size);
        q * self.modulus() + self.residue(r as usize) + self.transposition
    }

    /// Pitches at each of the indices
    pub fn eval_many(&self, indices: impl IntoIterator<Item = i64>) -> Vec<i64> {
        indices.into_iter().map(|n| self.eval(n)).collect()
    }

    /// Whether some index maps to `pitch`
    pub fn maps_to_pitch(&self, pitch: i64) -> bool {
        let r = (pitch - self.transposition).rem_euclid(self.modulus());
        self.residue_map().any(|residue| residue == r)
    }

    /// Index that maps to `pitch` (inverse of [`eval`](Self::eval))
    ///
    /// `[2,4,5,7,9,11,12] + 4` maps 12 to 25, so the index of 25 is 12.
    pub fn index(&self, pitch: i64) -> Result<i64> {
        let offset = pitch - self.transposition;
        let modulus = self.modulus();
        let r = offset.rem_euclid(modulus);
        let position = self
            .residue_map()
            .position(|residue| residue == r)
            .ok_or(HarmonicaError::UnmappedPitch(pitch))?;

        Ok(position as i64 + offset.div_euclid(modulus) * self.size() as i64)
    }

    /// Indices of each of the pitches
    pub fn index_many(&self, pitches: &[i64]) -> Result<Vec<i64>> {
        pitches.iter().map(|&pitch| self.index(pitch)).collect()
    }

    /// Every pitch the function reaches between `lower` and `upper`
    /// inclusive, ascending
    pub fn in_range(&self, lower: i64, upper: i64) -> Vec<i64> {
        if lower > upper {
            return Vec::new();
        }

        // Start of the period holding `lower`; eval(start) <= lower
        let start = (lower - self.transposition).div_euclid(self.modulus()) * self.size() as i64;

        (start..)
            .map(|n| self.eval(n))
            .take_while(|&pitch| pitch <= upper)
            .filter(|&pitch| pitch >= lower)
            .collect()
    }

    /// Shift the transposition by `amount`
    pub fn transpose(&mut self, amount: i64) {
        self.transposition += amount;
    }

    /// Rotate to a parallel mode, keeping the transposition
    ///
    /// `[2,4,5,7,9,10,12] + 2` (D dorian) rotated by 2 becomes
    /// `[1,3,5,6,8,10,12] + 2` (D phrygian).
    pub fn rotate_mode_parallel(&mut self, amount: i64) {
        let modulus = self.modulus();
        let shift = self.residue(amount.rem_euclid(self.size() as i64) as usize);

        let mut residues: Vec<i64> = self
            .residue_map()
            .map(|residue| (residue - shift).rem_euclid(modulus))
            .collect();
        residues.sort_unstable();

        residues.remove(0);
        residues.push(modulus);
        self.pattern = residues;
    }

    /// Rotate to a relative mode, moving the transposition to the pitch at
    /// index `amount`
    pub fn rotate_mode_relative(&mut self, amount: i64) {
        self.transposition = self.eval(amount);
        self.rotate_mode_parallel(amount);
    }

    /// Evaluate at `n`, then re-center on the pitch just produced
    ///
    /// Repeated calls walk the scale while keeping index 0 on the most
    /// recently visited degree.
    pub fn eval_rot(&mut self, n: i64) -> i64 {
        let pitch = self.eval(n);
        self.rotate_mode_relative(n);
        pitch
    }

    /// Compose with an inner function: the result maps `i` to
    /// `self.eval(other.eval(i))`
    ///
    /// The result's period is the number of inner indices after which both
    /// cycles line up again. Composing C major with the triad selector
    /// `[2,4,7] + 0` gives the C major triad `[4,7,12] + 0`.
    pub fn compose(&self, other: &ScaleFunc) -> ScaleFunc {
        let transposition = self.eval(other.eval(0));
        let outer = self.size() as i64;
        let period = outer * other.size() as i64 / gcd(outer, other.modulus());

        let pattern = (1..=period)
            .map(|i| self.eval(other.eval(i)) - transposition)
            .collect();

        ScaleFunc::from_validated(pattern, transposition)
    }

    /// The pitch class set this function maps onto
    pub fn to_pcset(&self) -> PitchClassSet {
        self.structure().stamp_to_pcset(self.transposition)
    }

    /// The pitch class set this function maps onto, rooted at the image of 0
    pub fn to_rooted_pcset(&self) -> PitchClassSet {
        self.structure().stamp_to_pcset_with_root(self.transposition)
    }

    /// Interval structure of the corresponding scale
    pub fn structure(&self) -> ScaleStructure {
        let residues: Vec<i64> = self.residue_map().collect();
        ScaleStructure::from_validated(cycle_diff(&residues, self.modulus(), 0))
    }

    /// Number of distinct transpositions of this scale
    pub fn count_transpositions(&self) -> i64 {
        self.structure().count_transpositions()
    }

    /// Number of distinct modes of this scale
    pub fn count_modes(&self) -> usize {
        self.structure().count_modes()
    }
}

impl fmt::Display for ScaleFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + {}", self.pattern, self.transposition)
    }
}
