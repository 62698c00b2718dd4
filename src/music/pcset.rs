// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch class sets.
//!
//! A pitch class set is a collection of residues modulo some modulus (12 for
//! standard equal temperament). `{0,2,4,5,7,9,11} mod 12` holds the pitches
//! of C major, D dorian, E phrygian and so on; giving it a root picks out one
//! of those modes.

use std::fmt;

use itertools::Itertools;

use crate::error::{HarmonicaError, Result};
use crate::utility::cycle_diff;

use super::{ScaleFunc, ScaleStructure};

/// A sorted set of residues modulo `modulus`, optionally with a root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PitchClassSet {
    pitch_classes: Vec<i64>,
    modulus: i64,
    root: Option<i64>,
}

impl PitchClassSet {
    /// Create a pitch class set without a root
    ///
    /// Pitch classes must be unique, ascending and inside `[0, modulus)`.
    pub fn new(pitch_classes: Vec<i64>, modulus: i64) -> Result<Self> {
        Self::build(pitch_classes, modulus, None)
    }

    /// Create a pitch class set with one member marked as the root
    pub fn with_root(pitch_classes: Vec<i64>, modulus: i64, root: i64) -> Result<Self> {
        Self::build(pitch_classes, modulus, Some(root))
    }

    fn build(pitch_classes: Vec<i64>, modulus: i64, root: Option<i64>) -> Result<Self> {
        if modulus <= 0 {
            return Err(HarmonicaError::NonPositiveModulus(modulus));
        }
        if pitch_classes.is_empty() {
            return Err(HarmonicaError::EmptyPitchClassSet);
        }
        if !pitch_classes.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(HarmonicaError::UnorderedPitchClasses(pitch_classes));
        }
        if let Some(&pitch_class) = pitch_classes.iter().find(|pc| !(0..modulus).contains(*pc)) {
            return Err(HarmonicaError::PitchClassOutOfRange {
                pitch_class,
                modulus,
            });
        }
        if let Some(root) = root {
            if pitch_classes.binary_search(&root).is_err() {
                return Err(HarmonicaError::NotAMember(root));
            }
        }

        Ok(Self {
            pitch_classes,
            modulus,
            root,
        })
    }

    /// Build from parts already known to satisfy the invariants
    pub(crate) fn from_validated(pitch_classes: Vec<i64>, modulus: i64, root: Option<i64>) -> Self {
        debug_assert!(Self::build(pitch_classes.clone(), modulus, root).is_ok());
        Self {
            pitch_classes,
            modulus,
            root,
        }
    }

    /// The pitch classes in ascending order
    pub fn pitch_classes(&self) -> &[i64] {
        &self.pitch_classes
    }

    /// The modulus
    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    /// The root, if any
    pub fn root(&self) -> Option<i64> {
        self.root
    }

    /// Whether a root has been chosen
    pub fn is_rooted(&self) -> bool {
        self.root.is_some()
    }

    /// Number of pitch classes in the set
    pub fn cardinality(&self) -> usize {
        self.pitch_classes.len()
    }

    /// The pitch class at a position
    pub fn get(&self, index: usize) -> Option<i64> {
        self.pitch_classes.get(index).copied()
    }

    /// Copy of this set rooted at `root`, which must be a member
    pub fn rooted(&self, root: i64) -> Result<Self> {
        self.index(root)?;
        Ok(Self {
            root: Some(root),
            ..self.clone()
        })
    }

    /// Copy of this set without a root
    pub fn unrooted(&self) -> Self {
        Self {
            root: None,
            ..self.clone()
        }
    }

    /// Position of a member pitch class
    pub fn index(&self, pitch_class: i64) -> Result<usize> {
        self.pitch_classes
            .binary_search(&pitch_class)
            .map_err(|_| HarmonicaError::NotAMember(pitch_class))
    }

    fn root_index(&self) -> Option<usize> {
        self.root
            .and_then(|root| self.pitch_classes.binary_search(&root).ok())
    }

    /// Transpose every pitch class (and the root) by `amount`, modulo the modulus
    pub fn transpose(&mut self, amount: i64) {
        let modulus = self.modulus;
        for pc in &mut self.pitch_classes {
            *pc = (*pc + amount).rem_euclid(modulus);
        }
        self.pitch_classes.sort_unstable();
        self.root = self.root.map(|root| (root + amount).rem_euclid(modulus));
    }

    /// Transposed copy
    pub fn transposed(&self, amount: i64) -> Self {
        let mut transposed = self.clone();
        transposed.transpose(amount);
        transposed
    }

    /// Transpose so that the member `pitch_class` lands on 0
    pub fn normalize(&mut self, pitch_class: i64) -> Result<()> {
        self.index(pitch_class)?;
        self.transpose(-pitch_class);
        Ok(())
    }

    /// Normalized copy
    pub fn normalized(&self, pitch_class: i64) -> Result<Self> {
        let mut normalized = self.clone();
        normalized.normalize(pitch_class)?;
        Ok(normalized)
    }

    /// Move the root `amount` places along the set, giving a relative mode
    ///
    /// `{0,2,4,5,7,9,11} mod 12 root 4` moved by 3 becomes root 9.
    pub fn rotate_mode_relative(&mut self, amount: i64) -> Result<()> {
        let root_index = self.root_index().ok_or(HarmonicaError::Unrooted)?;
        let len = self.cardinality() as i64;
        let index = (root_index as i64 + amount).rem_euclid(len) as usize;
        self.root = Some(self.pitch_classes[index]);
        Ok(())
    }

    /// Rotate the structure around the root, giving a parallel mode
    ///
    /// `{0,2,4,5,7,9,11} mod 12 root 4` (phrygian) rotated by 2 takes the
    /// mixolydian structure and becomes `{1,2,4,6,8,9,11} mod 12 root 4`.
    pub fn rotate_mode_parallel(&mut self, amount: i64) -> Result<()> {
        let root = self.root.ok_or(HarmonicaError::Unrooted)?;
        let structure = self.structure().rotated(amount);
        self.pitch_classes = structure.stamp_to_pcset_with_root(root).pitch_classes;
        Ok(())
    }

    /// Use a rooted set as a selector of scale degrees
    ///
    /// The selector's modulus must equal this set's cardinality. Each selector
    /// member `i` picks the pitch class `i` places above this set's root, and
    /// the selector's root picks the root of the result. Selecting
    /// `{0,2,4} mod 7 root 0` from C major rooted on C gives the C major triad.
    pub fn select(&self, selector: &PitchClassSet) -> Result<PitchClassSet> {
        let root_index = self.root_index().ok_or(HarmonicaError::Unrooted)?;
        let selector_root = selector.root.ok_or(HarmonicaError::Unrooted)?;
        let len = self.cardinality() as i64;
        if selector.modulus != len {
            return Err(HarmonicaError::SelectorModulus {
                expected: len,
                found: selector.modulus,
            });
        }

        let degree = |i: i64| self.pitch_classes[(i + root_index as i64).rem_euclid(len) as usize];

        let mut pitch_classes: Vec<i64> = selector.pitch_classes.iter().map(|&i| degree(i)).collect();
        pitch_classes.sort_unstable();

        Ok(Self::from_validated(
            pitch_classes,
            self.modulus,
            Some(degree(selector_root)),
        ))
    }

    /// The scale function that walks this set upward from `root`
    ///
    /// `root` may be any pitch whose class is a member; it becomes the
    /// transposition of the function, so `{1,2,4,6,7,9,11} mod 12` with root
    /// 6 gives `[1,3,5,7,8,10,12] + 6`.
    pub fn scale_function(&self, root: i64) -> Result<ScaleFunc> {
        let normalized = self.normalized(root.rem_euclid(self.modulus))?;
        let mut pattern = normalized.pitch_classes[1..].to_vec();
        pattern.push(self.modulus);
        Ok(ScaleFunc::from_validated(pattern, root))
    }

    /// Every pitch class set of the same modulus that contains this one,
    /// starting with the set itself
    pub fn supersets(&self) -> impl Iterator<Item = PitchClassSet> + '_ {
        let complement: Vec<i64> = (0..self.modulus)
            .filter(|pc| self.pitch_classes.binary_search(pc).is_err())
            .collect();

        complement.into_iter().powerset().map(move |extra| {
            let mut pitch_classes = self.pitch_classes.clone();
            pitch_classes.extend(extra);
            pitch_classes.sort_unstable();
            Self::from_validated(pitch_classes, self.modulus, self.root)
        })
    }

    /// Whether `pitch` belongs to one of the pitch classes (any octave)
    pub fn contains(&self, pitch: i64) -> bool {
        self.pitch_classes
            .binary_search(&pitch.rem_euclid(self.modulus))
            .is_ok()
    }

    /// Circular intervals between neighbours, starting at the root if there
    /// is one, otherwise at the lowest pitch class
    pub fn structure(&self) -> ScaleStructure {
        let start = self.root_index().unwrap_or(0);
        ScaleStructure::from_validated(cycle_diff(&self.pitch_classes, self.modulus, start))
    }

    /// Intervals between members one place apart, then two places apart, etc.
    ///
    /// ```
    /// # use harmonica::music::PitchClassSet;
    /// let major = PitchClassSet::new(vec![0, 2, 4, 5, 7, 9, 11], 12).unwrap();
    /// let spectrum = major.interval_spectrum();
    /// assert_eq!(spectrum[0], vec![2, 2, 1, 2, 2, 2, 1]);
    /// assert_eq!(spectrum[1], vec![4, 3, 3, 4, 4, 3, 3]);
    /// ```
    pub fn interval_spectrum(&self) -> Vec<Vec<i64>> {
        let len = self.cardinality();
        if len <= 1 {
            return Vec::new();
        }

        (1..len)
            .map(|jump| {
                (0..len)
                    .map(|pos| {
                        let interval = self.pitch_classes[(pos + jump) % len] - self.pitch_classes[pos];
                        interval.rem_euclid(self.modulus)
                    })
                    .collect()
            })
            .collect()
    }

    /// Count of each interval class over all pairs of members
    ///
    /// There are `floor(modulus / 2)` interval classes; entry `i` counts
    /// interval class `i + 1`.
    pub fn interval_vector(&self) -> Vec<usize> {
        let mut vector = vec![0; (self.modulus / 2) as usize];

        for (i, &low) in self.pitch_classes.iter().enumerate() {
            for &high in &self.pitch_classes[i + 1..] {
                let class = harmonic_interval_class(low, high, self.modulus);
                if class > 0 {
                    vector[class as usize - 1] += 1;
                }
            }
        }

        vector
    }

    /// The subscale generated by the smallest repeating unit of the structure
    ///
    /// The whole-tone scale `{0,2,4,6,8,10} mod 12` reduces to `{0} mod 2`.
    pub fn prime(&self) -> PitchClassSet {
        let prime = self.structure().prime();
        match self.root {
            Some(root) => prime.stamp_to_pcset_with_root(root),
            None => prime.stamp_to_pcset(self.pitch_classes[0]),
        }
    }
}

impl fmt::Display for PitchClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<String> = self.pitch_classes.iter().map(|pc| pc.to_string()).collect();
        write!(f, "{{{}}} mod {}", members.join(","), self.modulus)?;
        if let Some(root) = self.root {
            write!(f, " root {}", root)?;
        }
        Ok(())
    }
}

/// Smallest representative of an interval class
pub fn normalize_interval(interval: i64, modulus: i64) -> i64 {
    let interval = interval.rem_euclid(modulus);
    interval.min(modulus - interval)
}

/// Ascending distance from one pitch class to another
pub fn melodic_interval_class(from: i64, to: i64, modulus: i64) -> i64 {
    (to - from).rem_euclid(modulus)
}

/// Undirected interval class between two pitch classes
pub fn harmonic_interval_class(a: i64, b: i64, modulus: i64) -> i64 {
    normalize_interval(melodic_interval_class(a, b, modulus), modulus)
}
