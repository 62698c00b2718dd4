// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Harmonica - pitch-class algebra and pitch set search.
//!
//! [`music`] models scales three interchangeable ways (pitch class sets,
//! interval structures and scale functions) plus concrete voicings.
//! [`find`] searches a pitch window for voicings that meet a set of
//! criteria, and [`config`] loads those searches from YAML or TOML files.

pub mod config;
pub mod error;
pub mod find;
pub mod music;
pub mod utility;

pub use error::{HarmonicaError, Result};
