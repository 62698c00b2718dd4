// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the pitch algebra and search engine.

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, HarmonicaError>;

/// Errors raised when an object would violate its invariants or an
/// operation is called outside its domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarmonicaError {
    /// Modulus must be a positive integer
    #[error("modulus must be positive, got {0}")]
    NonPositiveModulus(i64),

    /// A pitch class set needs at least one member
    #[error("pitch class set must not be empty")]
    EmptyPitchClassSet,

    /// Pitch classes must be strictly ascending (sorted and unique)
    #[error("pitch classes must be unique and in ascending order: {0:?}")]
    UnorderedPitchClasses(Vec<i64>),

    /// Pitch class outside of `[0, modulus)`
    #[error("pitch class {pitch_class} is outside of [0, {modulus})")]
    PitchClassOutOfRange { pitch_class: i64, modulus: i64 },

    /// Pitch class is not a member of the set
    #[error("pitch class {0} is not in the pitch class set")]
    NotAMember(i64),

    /// Operation needs a rooted pitch class set
    #[error("pitch class set has no root")]
    Unrooted,

    /// Selector modulus must match the cardinality of the selected set
    #[error("selector modulus {found} does not match cardinality {expected}")]
    SelectorModulus { expected: i64, found: i64 },

    /// Structures and shapes only hold positive intervals
    #[error("intervals must be positive, got {0}")]
    NonPositiveInterval(i64),

    /// A scale structure needs at least one interval
    #[error("scale structure must not be empty")]
    EmptyStructure,

    /// A scale function needs at least one coefficient
    #[error("scale function pattern must not be empty")]
    EmptyPattern,

    /// Scale function pattern must be positive, unique and ascending
    #[error("scale function pattern must be positive, unique and ascending: {0:?}")]
    InvalidPattern(Vec<i64>),

    /// No index of the scale function produces this pitch
    #[error("scale function does not map to pitch {0}")]
    UnmappedPitch(i64),

    /// Pitches in a pitch set must be strictly ascending
    #[error("pitches must be unique and in ascending order: {0:?}")]
    UnorderedPitches(Vec<i64>),

    /// Index outside of a pitch set
    #[error("index {index} is out of range for a pitch set of {len} pitches")]
    IndexOutOfRange { index: usize, len: usize },

    /// Note name that is not a letter followed by sharps or flats
    #[error("unknown note: {0}")]
    UnknownNote(String),

    /// Scale name missing from the catalog
    #[error("unknown scale: {0}")]
    UnknownScale(String),

    /// Search bounds must satisfy `min_pitch < max_pitch`
    #[error("min pitch {min} must be less than max pitch {max}")]
    InvalidBounds { min: i64, max: i64 },

    /// The number of pitches in the search window must fit in an `i64`
    #[error("pitch window {min}..={max} is too wide")]
    WindowTooWide { min: i64, max: i64 },

    /// Cardinality criteria must be greater than zero
    #[error("{0} must be greater than 0")]
    ZeroCardinality(&'static str),

    /// A forced search strategy needs a criterion that is not set
    #[error("search strategy {strategy} requires the {criterion} criterion")]
    MissingCriterion {
        strategy: &'static str,
        criterion: &'static str,
    },
}
