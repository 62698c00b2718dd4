// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Search criteria: predicates over candidate pitch sets.

use std::fmt;

use crate::error::{HarmonicaError, Result};
use crate::music::{PitchClassSet, PitchSet, PitchSetShape};

/// Bound on the number of pitches in a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeConstraint {
    /// Exactly this many pitches
    Exact(usize),
    /// At most this many pitches
    Max(usize),
}

/// Bound on the intervals of a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeConstraint {
    /// The result's shape is exactly this one
    Has(PitchSetShape),
    /// Some transposition of this shape is a subset of the result
    Contains(PitchSetShape),
}

/// Names of the criteria, used to exclude ones a strategy already satisfies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriterionKind {
    Cardinality,
    MinCardinality,
    MaxCardinality,
    HasShape,
    HasSubshape,
    InPcset,
}

impl CriterionKind {
    /// Name as it appears in configuration files and builder methods
    pub fn name(self) -> &'static str {
        match self {
            CriterionKind::Cardinality => "cardinality",
            CriterionKind::MinCardinality => "min_cardinality",
            CriterionKind::MaxCardinality => "max_cardinality",
            CriterionKind::HasShape => "has_shape",
            CriterionKind::HasSubshape => "has_subshape",
            CriterionKind::InPcset => "in_pcset",
        }
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One active criterion, borrowing its value from [`Criteria`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion<'a> {
    Cardinality(usize),
    MinCardinality(usize),
    MaxCardinality(usize),
    HasShape(&'a PitchSetShape),
    HasSubshape(&'a PitchSetShape),
    InPcset(&'a PitchClassSet),
}

impl Criterion<'_> {
    pub fn kind(&self) -> CriterionKind {
        match self {
            Criterion::Cardinality(_) => CriterionKind::Cardinality,
            Criterion::MinCardinality(_) => CriterionKind::MinCardinality,
            Criterion::MaxCardinality(_) => CriterionKind::MaxCardinality,
            Criterion::HasShape(_) => CriterionKind::HasShape,
            Criterion::HasSubshape(_) => CriterionKind::HasSubshape,
            Criterion::InPcset(_) => CriterionKind::InPcset,
        }
    }

    /// Whether `pitch_set` passes this criterion
    pub fn filter(&self, pitch_set: &PitchSet) -> bool {
        match *self {
            Criterion::Cardinality(size) => pitch_set.cardinality() == size,
            Criterion::MinCardinality(size) => pitch_set.cardinality() >= size,
            Criterion::MaxCardinality(size) => pitch_set.cardinality() <= size,
            Criterion::HasShape(shape) => pitch_set.shape() == *shape,
            Criterion::HasSubshape(shape) => shape.is_subshape_of(pitch_set),
            Criterion::InPcset(pcset) => pitch_set.pitches().iter().all(|&p| pcset.contains(p)),
        }
    }
}

/// The bounds and criteria of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    pub min_pitch: i64,
    pub max_pitch: i64,
    pub size: Option<SizeConstraint>,
    pub min_cardinality: Option<usize>,
    pub shape: Option<ShapeConstraint>,
    pub in_pcset: Option<PitchClassSet>,
}

impl Criteria {
    /// Criteria with bounds only
    pub fn new(min_pitch: i64, max_pitch: i64) -> Self {
        Self {
            min_pitch,
            max_pitch,
            size: None,
            min_cardinality: None,
            shape: None,
            in_pcset: None,
        }
    }

    /// The active criteria, skipping any kind listed in `excludes`
    pub fn get(&self, excludes: &[CriterionKind]) -> Vec<Criterion<'_>> {
        let size = self.size.map(|size| match size {
            SizeConstraint::Exact(n) => Criterion::Cardinality(n),
            SizeConstraint::Max(n) => Criterion::MaxCardinality(n),
        });
        let shape = self.shape.as_ref().map(|shape| match shape {
            ShapeConstraint::Has(shape) => Criterion::HasShape(shape),
            ShapeConstraint::Contains(shape) => Criterion::HasSubshape(shape),
        });

        [
            size,
            self.min_cardinality.map(Criterion::MinCardinality),
            shape,
            self.in_pcset.as_ref().map(Criterion::InPcset),
        ]
        .into_iter()
        .flatten()
        .filter(|criterion| !excludes.contains(&criterion.kind()))
        .collect()
    }

    /// Whether `pitch_set` passes every active, non-excluded criterion
    pub fn filter(&self, pitch_set: &PitchSet, excludes: &[CriterionKind]) -> bool {
        self.get(excludes)
            .iter()
            .all(|criterion| criterion.filter(pitch_set))
    }

    /// Largest result size the criteria allow, if bounded
    pub fn max_size(&self) -> Option<usize> {
        self.size.map(|size| match size {
            SizeConstraint::Exact(n) | SizeConstraint::Max(n) => n,
        })
    }

    /// Number of pitches in the window, if it fits in an `i64`
    pub fn width(&self) -> Option<i64> {
        self.max_pitch.checked_sub(self.min_pitch)?.checked_add(1)
    }

    /// Reject inverted or oversized windows and size bounds of zero
    pub fn validate(&self) -> Result<()> {
        if self.min_pitch >= self.max_pitch {
            return Err(HarmonicaError::InvalidBounds {
                min: self.min_pitch,
                max: self.max_pitch,
            });
        }
        if self.width().is_none() {
            return Err(HarmonicaError::WindowTooWide {
                min: self.min_pitch,
                max: self.max_pitch,
            });
        }
        match self.size {
            Some(SizeConstraint::Exact(0)) => Err(HarmonicaError::ZeroCardinality("cardinality")),
            Some(SizeConstraint::Max(0)) => Err(HarmonicaError::ZeroCardinality("max_cardinality")),
            _ => Ok(()),
        }
    }
}
