// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch-class algebra.
//!
//! Three equivalent views of a scale live here: the [`PitchClassSet`]
//! (residues), the [`ScaleStructure`] (circular intervals) and the
//! [`ScaleFunc`] (an index-to-pitch map). [`PitchSet`] and [`PitchSetShape`]
//! cover concrete voicings in absolute pitch space.

pub mod catalog;
pub mod pcset;
pub mod pitch_set;
pub mod scale_func;
pub mod shape;
pub mod structure;

pub use catalog::{Note, ScaleType};
pub use pcset::{harmonic_interval_class, melodic_interval_class, normalize_interval, PitchClassSet};
pub use pitch_set::PitchSet;
pub use scale_func::ScaleFunc;
pub use shape::PitchSetShape;
pub use structure::ScaleStructure;
