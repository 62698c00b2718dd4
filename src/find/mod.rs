// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch set search.
//!
//! [`FindPitchSets`] collects every pitch set inside a pitch window that
//! passes a group of criteria. The search picks one of three strategies:
//!
//! - a fixed shape scans the transpositions of that shape (linear),
//! - a pitch class set enumerates subsets of the window's matching pitches,
//! - anything else enumerates every subset of the window.
//!
//! ```
//! # use harmonica::find::FindPitchSets;
//! # use harmonica::music::PitchSetShape;
//! let found = FindPitchSets::new(60, 66)
//!     .unwrap()
//!     .has_shape(PitchSetShape::new(vec![2, 1]).unwrap())
//!     .collect()
//!     .unwrap();
//! assert_eq!(found.len(), 4);
//! ```

pub mod criteria;

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use itertools::Itertools;
use tracing::{debug, trace, warn};

use crate::error::{HarmonicaError, Result};
use crate::music::{PitchClassSet, PitchSet, PitchSetShape, ScaleFunc};

pub use criteria::{Criteria, Criterion, CriterionKind, ShapeConstraint, SizeConstraint};

/// Search results; order is irrelevant
pub type PitchSets = HashSet<PitchSet>;

/// Windows wider than this many pitches make brute force slow
const WIDE_WINDOW: i64 = 20;

/// How a search enumerates its candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// Stamp the required shape at each starting pitch
    Transpositions,
    /// Enumerate subsets of the window's pitches that belong to a pitch class set
    PcsetRestricted,
    /// Enumerate every subset of the window
    BruteForce,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchStrategy::Transpositions => "transpositions",
            SearchStrategy::PcsetRestricted => "pcset_restricted",
            SearchStrategy::BruteForce => "brute_force",
        };
        write!(f, "{}", name)
    }
}

/// Builder and executor for a pitch set search
///
/// Setters consume and return the builder. Members of the exclusive pairs
/// (`cardinality`/`max_cardinality` and `has_shape`/`has_subshape`) replace
/// one another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindPitchSets {
    criteria: Criteria,
}

impl FindPitchSets {
    /// Search the pitches from `min_pitch` to `max_pitch` inclusive
    pub fn new(min_pitch: i64, max_pitch: i64) -> Result<Self> {
        let criteria = Criteria::new(min_pitch, max_pitch);
        criteria.validate()?;
        Ok(Self { criteria })
    }

    /// Require exactly `size` pitches
    pub fn cardinality(mut self, size: usize) -> Self {
        self.criteria.size = Some(SizeConstraint::Exact(size));
        self
    }

    /// Require at least `size` pitches
    pub fn min_cardinality(mut self, size: usize) -> Self {
        self.criteria.min_cardinality = Some(size);
        self
    }

    /// Require at most `size` pitches
    pub fn max_cardinality(mut self, size: usize) -> Self {
        self.criteria.size = Some(SizeConstraint::Max(size));
        self
    }

    /// Require exactly this shape
    pub fn has_shape(mut self, shape: PitchSetShape) -> Self {
        self.criteria.shape = Some(ShapeConstraint::Has(shape));
        self
    }

    /// Require some transposition of this shape inside the result
    pub fn has_subshape(mut self, shape: PitchSetShape) -> Self {
        self.criteria.shape = Some(ShapeConstraint::Contains(shape));
        self
    }

    /// Require every pitch to belong to `pcset`
    pub fn in_pcset(mut self, pcset: PitchClassSet) -> Self {
        self.criteria.in_pcset = Some(pcset);
        self
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// The strategy [`collect`](Self::collect) will use
    pub fn strategy(&self) -> SearchStrategy {
        if matches!(self.criteria.shape, Some(ShapeConstraint::Has(_))) {
            SearchStrategy::Transpositions
        } else if self.criteria.in_pcset.is_some() {
            SearchStrategy::PcsetRestricted
        } else {
            SearchStrategy::BruteForce
        }
    }

    /// Run the search
    pub fn collect(&self) -> Result<PitchSets> {
        self.collect_with(self.strategy())
    }

    /// Run the search with a given strategy
    ///
    /// Every strategy returns the same results for the same criteria. The
    /// optimized strategies need their criterion to be set.
    pub fn collect_with(&self, strategy: SearchStrategy) -> Result<PitchSets> {
        self.criteria.validate()?;
        debug!(
            %strategy,
            min_pitch = self.criteria.min_pitch,
            max_pitch = self.criteria.max_pitch,
            "collecting pitch sets"
        );

        let found = match strategy {
            SearchStrategy::Transpositions => match &self.criteria.shape {
                Some(ShapeConstraint::Has(shape)) => self.transpositions(shape),
                _ => {
                    return Err(HarmonicaError::MissingCriterion {
                        strategy: "transpositions",
                        criterion: "has_shape",
                    })
                }
            },
            SearchStrategy::PcsetRestricted => match &self.criteria.in_pcset {
                Some(pcset) => self.pcset_restricted(pcset),
                None => {
                    return Err(HarmonicaError::MissingCriterion {
                        strategy: "pcset_restricted",
                        criterion: "in_pcset",
                    })
                }
            },
            SearchStrategy::BruteForce => self.brute_force(),
        };

        debug!(count = found.len(), "collected pitch sets");
        Ok(found)
    }

    fn transpositions(&self, shape: &PitchSetShape) -> PitchSets {
        let Criteria {
            min_pitch,
            max_pitch,
            ..
        } = self.criteria;

        let highest = match max_pitch.checked_sub(shape.span()) {
            Some(highest) if highest >= min_pitch => highest,
            _ => return PitchSets::new(),
        };
        trace!(lowest = min_pitch, highest, "scanning transpositions");

        (min_pitch..=highest)
            .map(|lowest| shape.stamp(lowest))
            .filter(|candidate| self.criteria.filter(candidate, &[CriterionKind::HasShape]))
            .collect()
    }

    fn pcset_restricted(&self, pcset: &PitchClassSet) -> PitchSets {
        let universe: Vec<i64> = (self.criteria.min_pitch..=self.criteria.max_pitch)
            .filter(|&pitch| pcset.contains(pitch))
            .collect();
        trace!(pitches = universe.len(), "restricted to pitch class set");

        self.enumerate(universe, &[CriterionKind::InPcset])
    }

    fn brute_force(&self) -> PitchSets {
        let width = self.criteria.width().unwrap_or(i64::MAX);
        if width > WIDE_WINDOW && self.criteria.max_size().is_none() {
            warn!(width, "brute force over a wide window without a size bound");
        }

        let universe: Vec<i64> = (self.criteria.min_pitch..=self.criteria.max_pitch).collect();
        self.enumerate(universe, &[])
    }

    /// Non-empty subsets of an ascending `universe` that pass the criteria
    fn enumerate(&self, universe: Vec<i64>, excludes: &[CriterionKind]) -> PitchSets {
        let max_size = self.criteria.max_size().unwrap_or(universe.len());

        universe
            .into_iter()
            .powerset()
            .skip(1)
            .take_while(|subset| subset.len() <= max_size)
            .map(PitchSet::from_validated)
            .filter(|candidate| self.criteria.filter(candidate, excludes))
            .collect()
    }
}

/// Pitch sets drawn from `target` that sit near `source`
///
/// Pitches of `target` within `proximity` of any pitch of `source` form the
/// pool; every combination of `min_size..=max_size` of them is returned.
/// Sizes of zero are skipped.
pub fn find_nearby_pitch_sets(
    source: &PitchSet,
    target: &ScaleFunc,
    proximity: i64,
    (min_size, max_size): (usize, usize),
) -> PitchSets {
    let pool: BTreeSet<i64> = source
        .pitches()
        .iter()
        .flat_map(|&pitch| {
            target.in_range(pitch.saturating_sub(proximity), pitch.saturating_add(proximity))
        })
        .collect();
    trace!(pool = pool.len(), "nearby pitches");

    (min_size.max(1)..=max_size)
        .flat_map(|size| pool.iter().copied().combinations(size))
        .map(PitchSet::from_validated)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pset(pitches: &[i64]) -> PitchSet {
        PitchSet::new(pitches.to_vec()).unwrap()
    }

    fn sets(list: &[&[i64]]) -> PitchSets {
        list.iter().map(|pitches| pset(pitches)).collect()
    }

    #[test]
    fn test_bounds() {
        assert_eq!(
            FindPitchSets::new(66, 60),
            Err(HarmonicaError::InvalidBounds { min: 66, max: 60 })
        );
        assert!(FindPitchSets::new(60, 60).is_err());
        assert!(FindPitchSets::new(59, 60).is_ok());
    }

    #[test]
    fn test_window_too_wide() {
        assert_eq!(
            FindPitchSets::new(i64::MIN, i64::MAX),
            Err(HarmonicaError::WindowTooWide {
                min: i64::MIN,
                max: i64::MAX
            })
        );
        assert!(FindPitchSets::new(i64::MIN, -2).is_ok());
    }

    #[test]
    fn test_transpositions_at_extremes() {
        let triad = PitchSetShape::new(vec![4, 3]).unwrap();
        let find = FindPitchSets::new(i64::MAX - 10, i64::MAX)
            .unwrap()
            .has_shape(triad.clone());
        let found = find.collect().unwrap();
        assert_eq!(found.len(), 4);
        assert!(found.contains(&triad.stamp(i64::MAX - 7)));
        assert_eq!(found, find.collect_with(SearchStrategy::BruteForce).unwrap());

        let found = FindPitchSets::new(i64::MIN, i64::MIN + 5)
            .unwrap()
            .has_shape(PitchSetShape::new(vec![i64::MAX]).unwrap())
            .collect()
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_exclusive_setters() {
        let find = FindPitchSets::new(60, 72).unwrap().cardinality(3).max_cardinality(4);
        assert_eq!(find.criteria().size, Some(SizeConstraint::Max(4)));

        let find = find.cardinality(2);
        assert_eq!(find.criteria().size, Some(SizeConstraint::Exact(2)));

        let triad = PitchSetShape::new(vec![4, 3]).unwrap();
        let find = find.has_shape(triad.clone()).has_subshape(triad.clone());
        assert_eq!(find.criteria().shape, Some(ShapeConstraint::Contains(triad)));
    }

    #[test]
    fn test_strategy_precedence() {
        let find = FindPitchSets::new(60, 72).unwrap();
        assert_eq!(find.strategy(), SearchStrategy::BruteForce);

        let find = find.in_pcset(PitchClassSet::new(vec![0, 4, 7], 12).unwrap());
        assert_eq!(find.strategy(), SearchStrategy::PcsetRestricted);

        let find = find.has_subshape(PitchSetShape::new(vec![4]).unwrap());
        assert_eq!(find.strategy(), SearchStrategy::PcsetRestricted);

        let find = find.has_shape(PitchSetShape::new(vec![4]).unwrap());
        assert_eq!(find.strategy(), SearchStrategy::Transpositions);
    }

    #[test]
    fn test_transpositions() {
        let found = FindPitchSets::new(60, 66)
            .unwrap()
            .has_shape(PitchSetShape::new(vec![2, 1]).unwrap())
            .collect()
            .unwrap();
        assert_eq!(
            found,
            sets(&[&[60, 62, 63], &[61, 63, 64], &[62, 64, 65], &[63, 65, 66]])
        );
    }

    #[test]
    fn test_transpositions_shape_too_wide() {
        let found = FindPitchSets::new(60, 65)
            .unwrap()
            .has_shape(PitchSetShape::new(vec![4, 3]).unwrap())
            .collect()
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_transpositions_with_pcset() {
        let c_major = PitchClassSet::new(vec![0, 2, 4, 5, 7, 9, 11], 12).unwrap();
        let found = FindPitchSets::new(60, 72)
            .unwrap()
            .has_shape(PitchSetShape::new(vec![4, 3]).unwrap())
            .in_pcset(c_major)
            .collect()
            .unwrap();
        assert_eq!(found, sets(&[&[60, 64, 67], &[65, 69, 72]]));
    }

    #[test]
    fn test_brute_force_cardinality() {
        let found = FindPitchSets::new(60, 65).unwrap().cardinality(3).collect().unwrap();
        assert_eq!(found.len(), 20);
        assert!(found.iter().all(|ps| ps.cardinality() == 3));
    }

    #[test]
    fn test_brute_force_everything() {
        let found = FindPitchSets::new(0, 3).unwrap().collect().unwrap();
        assert_eq!(found.len(), 15);
        assert!(!found.contains(&pset(&[])));
    }

    #[test]
    fn test_brute_force_size_range() {
        let found = FindPitchSets::new(0, 4)
            .unwrap()
            .min_cardinality(2)
            .max_cardinality(3)
            .collect()
            .unwrap();
        // C(5,2) + C(5,3)
        assert_eq!(found.len(), 20);
    }

    #[test]
    fn test_brute_force_subshape() {
        let found = FindPitchSets::new(60, 64)
            .unwrap()
            .has_subshape(PitchSetShape::new(vec![4]).unwrap())
            .collect()
            .unwrap();
        // 60 and 64 plus any subset of 61..=63
        assert_eq!(found.len(), 8);
        assert!(found.iter().all(|ps| ps.lowest() == Some(60) && ps.highest() == Some(64)));
    }

    #[test]
    fn test_pcset_restricted() {
        let triad = PitchClassSet::new(vec![0, 4, 7], 12).unwrap();
        let found = FindPitchSets::new(60, 72).unwrap().in_pcset(triad).collect().unwrap();
        // 60, 64, 67, 72
        assert_eq!(found.len(), 15);
        assert!(found.contains(&pset(&[60, 72])));
        assert!(!found.contains(&pset(&[])));
    }

    #[test]
    fn test_pcset_restricted_empty_window() {
        let pcset = PitchClassSet::new(vec![0], 12).unwrap();
        let found = FindPitchSets::new(61, 66).unwrap().in_pcset(pcset).collect().unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_strategies_agree() {
        let c_major = PitchClassSet::new(vec![0, 2, 4, 5, 7, 9, 11], 12).unwrap();
        let find = FindPitchSets::new(60, 70)
            .unwrap()
            .in_pcset(c_major)
            .max_cardinality(4)
            .has_subshape(PitchSetShape::new(vec![3]).unwrap());

        let restricted = find.collect_with(SearchStrategy::PcsetRestricted).unwrap();
        let brute = find.collect_with(SearchStrategy::BruteForce).unwrap();
        assert!(!restricted.is_empty());
        assert_eq!(restricted, brute);
    }

    #[test]
    fn test_missing_criterion() {
        let find = FindPitchSets::new(60, 72).unwrap();
        assert_eq!(
            find.collect_with(SearchStrategy::Transpositions),
            Err(HarmonicaError::MissingCriterion {
                strategy: "transpositions",
                criterion: "has_shape",
            })
        );
        assert!(find.collect_with(SearchStrategy::PcsetRestricted).is_err());
    }

    #[test]
    fn test_zero_cardinality() {
        let find = FindPitchSets::new(60, 72).unwrap().cardinality(0);
        assert_eq!(find.collect(), Err(HarmonicaError::ZeroCardinality("cardinality")));
    }

    #[test]
    fn test_find_nearby() {
        let c_major = ScaleFunc::new(vec![2, 4, 5, 7, 9, 11, 12], 0).unwrap();
        let source = pset(&[61, 66]);

        // Pool within 1 of 61 or 66: 60, 62, 65, 67
        let found = find_nearby_pitch_sets(&source, &c_major, 1, (2, 2));
        assert_eq!(found.len(), 6);
        assert!(found.contains(&pset(&[60, 67])));

        let found = find_nearby_pitch_sets(&source, &c_major, 1, (0, 4));
        assert_eq!(found.len(), 15);
    }

    #[test]
    fn test_find_nearby_overlapping_ranges() {
        let c_major = ScaleFunc::new(vec![2, 4, 5, 7, 9, 11, 12], 0).unwrap();
        // Ranges 58..=62 and 60..=64 share 60 and 62
        let found = find_nearby_pitch_sets(&pset(&[60, 62]), &c_major, 2, (1, 1));
        assert_eq!(found, sets(&[&[59], &[60], &[62], &[64]]));
    }
}
