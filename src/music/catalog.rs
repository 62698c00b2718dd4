// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Named notes and scales of 12-tone equal temperament.
//!
//! Maps note names to pitch classes and common scale names to their
//! interval structures, so a rooted pitch class set can be built from
//! something like `("D", "dorian")`.

use std::fmt;
use std::str::FromStr;

use crate::error::{HarmonicaError, Result};

use super::{PitchClassSet, ScaleFunc, ScaleStructure};

/// Modulus of standard equal temperament
pub const CHROMATIC_MODULUS: i64 = 12;

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A pitch class mod 12, spelled with sharps
///
/// Discriminants are the pitch classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    C = 0,
    Cs = 1,
    D = 2,
    Ds = 3,
    E = 4,
    F = 5,
    Fs = 6,
    G = 7,
    Gs = 8,
    A = 9,
    As = 10,
    B = 11,
}

impl Note {
    /// All notes in chromatic order
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    pub fn pitch_class(self) -> i64 {
        self as i64
    }

    /// Note of a pitch class; any integer wraps into range
    pub fn from_pitch_class(pc: i64) -> Self {
        Note::ALL[pc.rem_euclid(CHROMATIC_MODULUS) as usize]
    }
}

impl FromStr for Note {
    type Err = HarmonicaError;

    /// A letter followed by any run of sharps (`#` or `s`) and flats (`b`),
    /// case-insensitive: `"C"`, `"f#"`, `"Db"`, `"Cbb"`
    fn from_str(s: &str) -> Result<Self> {
        let unknown = || HarmonicaError::UnknownNote(s.to_string());
        let mut chars = s.trim().chars();

        let natural = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('C') => 0,
            Some('D') => 2,
            Some('E') => 4,
            Some('F') => 5,
            Some('G') => 7,
            Some('A') => 9,
            Some('B') => 11,
            _ => return Err(unknown()),
        };
        let accidentals = chars.try_fold(0i64, |shift, c| match c {
            '#' | 's' | 'S' => Ok(shift + 1),
            'b' | 'B' => Ok(shift - 1),
            _ => Err(unknown()),
        })?;

        Ok(Note::from_pitch_class(natural + accidentals))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SHARP_NAMES[*self as usize])
    }
}

/// Named scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleType {
    Major,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    NaturalMinor,
    Locrian,
    HarmonicMinor,
    /// Ascending form
    MelodicMinor,
    MajorPentatonic,
    MinorPentatonic,
    Blues,
    MajorBlues,
    WholeTone,
    /// Half-whole octatonic
    Diminished,
    /// Whole-half octatonic
    DiminishedWH,
    Augmented,
    Chromatic,
}

struct CatalogEntry {
    scale_type: ScaleType,
    name: &'static str,
    /// Extra spellings, already squashed
    aliases: &'static [&'static str],
    /// Circular intervals from the root
    intervals: &'static [i64],
}

const fn entry(
    scale_type: ScaleType,
    name: &'static str,
    aliases: &'static [&'static str],
    intervals: &'static [i64],
) -> CatalogEntry {
    CatalogEntry {
        scale_type,
        name,
        aliases,
        intervals,
    }
}

/// Indexed by `ScaleType` discriminant
const CATALOG: [CatalogEntry; 18] = [
    entry(ScaleType::Major, "Major", &["ionian"], &[2, 2, 1, 2, 2, 2, 1]),
    entry(ScaleType::Dorian, "Dorian", &[], &[2, 1, 2, 2, 2, 1, 2]),
    entry(ScaleType::Phrygian, "Phrygian", &[], &[1, 2, 2, 2, 1, 2, 2]),
    entry(ScaleType::Lydian, "Lydian", &[], &[2, 2, 2, 1, 2, 2, 1]),
    entry(ScaleType::Mixolydian, "Mixolydian", &[], &[2, 2, 1, 2, 2, 1, 2]),
    entry(
        ScaleType::NaturalMinor,
        "Natural Minor",
        &["minor", "aeolian"],
        &[2, 1, 2, 2, 1, 2, 2],
    ),
    entry(ScaleType::Locrian, "Locrian", &[], &[1, 2, 2, 1, 2, 2, 2]),
    entry(ScaleType::HarmonicMinor, "Harmonic Minor", &[], &[2, 1, 2, 2, 1, 3, 1]),
    entry(ScaleType::MelodicMinor, "Melodic Minor", &[], &[2, 1, 2, 2, 2, 2, 1]),
    entry(
        ScaleType::MajorPentatonic,
        "Major Pentatonic",
        &["pentatonicmajor"],
        &[2, 2, 3, 2, 3],
    ),
    entry(
        ScaleType::MinorPentatonic,
        "Minor Pentatonic",
        &["pentatonicminor", "pentatonic"],
        &[3, 2, 2, 3, 2],
    ),
    entry(ScaleType::Blues, "Blues", &["minorblues"], &[3, 2, 1, 1, 3, 2]),
    entry(ScaleType::MajorBlues, "Major Blues", &[], &[2, 1, 1, 3, 2, 3]),
    entry(ScaleType::WholeTone, "Whole Tone", &[], &[2; 6]),
    entry(
        ScaleType::Diminished,
        "Diminished",
        &["octatonic", "halfwhole"],
        &[1, 2, 1, 2, 1, 2, 1, 2],
    ),
    entry(
        ScaleType::DiminishedWH,
        "Diminished (W-H)",
        &["wholehalf"],
        &[2, 1, 2, 1, 2, 1, 2, 1],
    ),
    entry(ScaleType::Augmented, "Augmented", &["hexatonic"], &[3, 1, 3, 1, 3, 1]),
    entry(ScaleType::Chromatic, "Chromatic", &[], &[1; 12]),
];

/// Lowercase ASCII letters and digits only, so "Whole-Tone" matches "whole tone"
fn squash(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl ScaleType {
    fn entry(self) -> &'static CatalogEntry {
        &CATALOG[self as usize]
    }

    /// Every named scale, in catalog order
    pub fn all() -> impl Iterator<Item = ScaleType> {
        CATALOG.iter().map(|entry| entry.scale_type)
    }

    /// Circular intervals of the scale starting from its root
    pub fn intervals(self) -> &'static [i64] {
        self.entry().intervals
    }

    pub fn structure(self) -> ScaleStructure {
        ScaleStructure::from_validated(self.intervals().to_vec())
    }

    /// The scale stamped on `root`, with `root` marked
    pub fn pcset(self, root: Note) -> PitchClassSet {
        self.structure().stamp_to_pcset_with_root(root.pitch_class())
    }

    /// Scale function whose index 0 is `root` in the octave starting at 0
    pub fn scale_func(self, root: Note) -> ScaleFunc {
        self.structure().stamp_to_scale_func(root.pitch_class())
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Identify a rooted pitch class set mod 12 by its structure
    pub fn identify(pcset: &PitchClassSet) -> Option<Self> {
        if pcset.modulus() != CHROMATIC_MODULUS || !pcset.is_rooted() {
            return None;
        }
        let structure = pcset.structure();
        Self::all().find(|scale_type| scale_type.intervals() == structure.intervals())
    }
}

impl FromStr for ScaleType {
    type Err = HarmonicaError;

    /// Display name or alias, ignoring case, spaces and punctuation
    fn from_str(s: &str) -> Result<Self> {
        let key = squash(s);
        CATALOG
            .iter()
            .find(|entry| squash(entry.name) == key || entry.aliases.contains(&key.as_str()))
            .map(|entry| entry.scale_type)
            .ok_or_else(|| HarmonicaError::UnknownScale(s.to_string()))
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
