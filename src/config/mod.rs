// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Search configuration files.
//!
//! A search file describes one pitch set search. YAML is the default format;
//! files ending in `.toml` are read and written as TOML.
//!
//! ```yaml
//! search:
//!   min_pitch: 60
//!   max_pitch: 72
//!   cardinality: 3
//!   in_pcset:
//!     root: "D"
//!     scale: "dorian"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::find::FindPitchSets;
use crate::music::{Note, PitchClassSet, PitchSetShape, ScaleType};

/// Root of a search file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchFile {
    pub search: SearchConfig,
}

impl SearchFile {
    /// Load a search file, choosing the format from the extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read search file: {:?}", path.as_ref()))?;
        if is_toml(path.as_ref()) {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        }
    }

    /// Parse a search file from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML search file")
    }

    /// Parse a search file from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML search file")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize search file to YAML")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize search file to TOML")
    }

    /// Save the search file, choosing the format from the extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = if is_toml(path.as_ref()) {
            self.to_toml()?
        } else {
            self.to_yaml()?
        };
        fs::write(path.as_ref(), text)
            .with_context(|| format!("Failed to write search file: {:?}", path.as_ref()))
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Bounds and criteria of a search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Lowest pitch in the window
    #[serde(default = "default_min_pitch")]
    pub min_pitch: i64,
    /// Highest pitch in the window
    #[serde(default = "default_max_pitch")]
    pub max_pitch: i64,
    /// Exact number of pitches (excludes `max_cardinality`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardinality: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_cardinality: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cardinality: Option<usize>,
    /// Exact intervals between adjacent pitches (excludes `subshape`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Vec<i64>>,
    /// Intervals some subset of the pitches must form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subshape: Option<Vec<i64>>,
    /// Pitch class set every pitch must belong to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_pcset: Option<PcsetConfig>,
}

fn default_min_pitch() -> i64 {
    60
}
fn default_max_pitch() -> i64 {
    72
}
fn default_modulus() -> i64 {
    12
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_pitch: default_min_pitch(),
            max_pitch: default_max_pitch(),
            cardinality: None,
            min_cardinality: None,
            max_cardinality: None,
            shape: None,
            subshape: None,
            in_pcset: None,
        }
    }
}

impl SearchConfig {
    /// Build the search this configuration describes
    pub fn to_finder(&self) -> Result<FindPitchSets> {
        if self.cardinality.is_some() && self.max_cardinality.is_some() {
            bail!("cardinality and max_cardinality cannot both be set");
        }
        if self.shape.is_some() && self.subshape.is_some() {
            bail!("shape and subshape cannot both be set");
        }

        let mut find = FindPitchSets::new(self.min_pitch, self.max_pitch)
            .context("Invalid pitch window")?;

        if let Some(size) = self.cardinality {
            find = find.cardinality(size);
        }
        if let Some(size) = self.max_cardinality {
            find = find.max_cardinality(size);
        }
        if let Some(size) = self.min_cardinality {
            find = find.min_cardinality(size);
        }
        if let Some(intervals) = &self.shape {
            let shape = PitchSetShape::new(intervals.clone()).context("Invalid shape")?;
            find = find.has_shape(shape);
        }
        if let Some(intervals) = &self.subshape {
            let shape = PitchSetShape::new(intervals.clone()).context("Invalid subshape")?;
            find = find.has_subshape(shape);
        }
        if let Some(pcset) = &self.in_pcset {
            find = find.in_pcset(pcset.to_pcset()?);
        }

        Ok(find)
    }
}

/// A pitch class set, given explicitly or by scale name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PcsetConfig {
    Explicit {
        pitch_classes: Vec<i64>,
        #[serde(default = "default_modulus")]
        modulus: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        root: Option<i64>,
    },
    /// Root note name and scale name, e.g. "D" and "dorian"
    Named { root: String, scale: String },
}

impl PcsetConfig {
    pub fn to_pcset(&self) -> Result<PitchClassSet> {
        match self {
            PcsetConfig::Explicit {
                pitch_classes,
                modulus,
                root,
            } => {
                let pcset = match root {
                    Some(root) => PitchClassSet::with_root(pitch_classes.clone(), *modulus, *root),
                    None => PitchClassSet::new(pitch_classes.clone(), *modulus),
                };
                pcset.context("Invalid pitch class set")
            }
            PcsetConfig::Named { root, scale } => {
                let note: Note = root.parse()?;
                let scale_type: ScaleType = scale.parse()?;
                Ok(scale_type.pcset(note))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::find::{SearchStrategy, ShapeConstraint, SizeConstraint};
    use crate::HarmonicaError;
    use tempfile::tempdir;

    #[test]
    fn test_parse_search_file() {
        let yaml = r#"
search:
  min_pitch: 48
  max_pitch: 60
  cardinality: 3
  shape: [4, 3]
"#;

        let file = SearchFile::from_yaml(yaml).unwrap();
        assert_eq!(file.search.min_pitch, 48);
        assert_eq!(file.search.max_pitch, 60);
        assert_eq!(file.search.cardinality, Some(3));
        assert_eq!(file.search.shape, Some(vec![4, 3]));
        assert_eq!(file.search.in_pcset, None);
    }

    #[test]
    fn test_default_values() {
        let file = SearchFile::from_yaml("search: {}\n").unwrap();
        assert_eq!(file.search, SearchConfig::default());
        assert_eq!(file.search.min_pitch, 60);
        assert_eq!(file.search.max_pitch, 72);
    }

    #[test]
    fn test_parse_explicit_pcset() {
        let yaml = r#"
search:
  in_pcset:
    pitch_classes: [0, 2, 4, 5, 7, 9, 11]
    root: 2
"#;

        let file = SearchFile::from_yaml(yaml).unwrap();
        let pcset = file.search.in_pcset.unwrap().to_pcset().unwrap();
        assert_eq!(
            pcset,
            PitchClassSet::with_root(vec![0, 2, 4, 5, 7, 9, 11], 12, 2).unwrap()
        );
    }

    #[test]
    fn test_parse_named_pcset() {
        let yaml = r#"
search:
  in_pcset:
    root: "D"
    scale: "dorian"
"#;

        let file = SearchFile::from_yaml(yaml).unwrap();
        let pcset = file.search.in_pcset.unwrap().to_pcset().unwrap();
        assert_eq!(pcset.pitch_classes(), &[0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(pcset.root(), Some(2));
    }

    #[test]
    fn test_unknown_scale() {
        let pcset = PcsetConfig::Named {
            root: "D".to_string(),
            scale: "bebop".to_string(),
        };
        let err = pcset.to_pcset().unwrap_err();
        assert!(err.to_string().contains("bebop"));
        assert_eq!(
            err.downcast_ref::<HarmonicaError>(),
            Some(&HarmonicaError::UnknownScale("bebop".to_string()))
        );
    }

    #[test]
    fn test_unknown_note() {
        let pcset = PcsetConfig::Named {
            root: "H".to_string(),
            scale: "major".to_string(),
        };
        let err = pcset.to_pcset().unwrap_err();
        assert_eq!(
            err.downcast_ref::<HarmonicaError>(),
            Some(&HarmonicaError::UnknownNote("H".to_string()))
        );
    }

    #[test]
    fn test_named_pcset_with_flat_root() {
        let pcset = PcsetConfig::Named {
            root: "Bb".to_string(),
            scale: "Major Pentatonic".to_string(),
        };
        assert_eq!(
            pcset.to_pcset().unwrap(),
            PitchClassSet::with_root(vec![0, 2, 5, 7, 10], 12, 10).unwrap()
        );
    }

    #[test]
    fn test_to_finder() {
        let config = SearchConfig {
            cardinality: Some(3),
            subshape: Some(vec![7]),
            in_pcset: Some(PcsetConfig::Named {
                root: "C".to_string(),
                scale: "major".to_string(),
            }),
            ..SearchConfig::default()
        };

        let find = config.to_finder().unwrap();
        assert_eq!(find.criteria().size, Some(SizeConstraint::Exact(3)));
        assert_eq!(
            find.criteria().shape,
            Some(ShapeConstraint::Contains(PitchSetShape::new(vec![7]).unwrap()))
        );
        assert_eq!(find.strategy(), SearchStrategy::PcsetRestricted);
    }

    #[test]
    fn test_exclusive_pairs_rejected() {
        let config = SearchConfig {
            cardinality: Some(3),
            max_cardinality: Some(4),
            ..SearchConfig::default()
        };
        assert!(config.to_finder().is_err());

        let config = SearchConfig {
            shape: Some(vec![4, 3]),
            subshape: Some(vec![4]),
            ..SearchConfig::default()
        };
        assert!(config.to_finder().is_err());
    }

    #[test]
    fn test_invalid_window() {
        let config = SearchConfig {
            min_pitch: 72,
            max_pitch: 60,
            ..SearchConfig::default()
        };
        let err = config.to_finder().unwrap_err();
        assert!(err.to_string().contains("Invalid pitch window"));
    }

    #[test]
    fn test_round_trip() {
        let original = SearchFile {
            search: SearchConfig {
                min_pitch: 55,
                max_pitch: 67,
                max_cardinality: Some(4),
                shape: Some(vec![3, 4]),
                in_pcset: Some(PcsetConfig::Explicit {
                    pitch_classes: vec![0, 3, 7],
                    modulus: 12,
                    root: None,
                }),
                ..SearchConfig::default()
            },
        };

        let yaml = original.to_yaml().unwrap();
        assert_eq!(SearchFile::from_yaml(&yaml).unwrap(), original);

        let toml = original.to_toml().unwrap();
        assert_eq!(SearchFile::from_toml(&toml).unwrap(), original);
    }

    #[test]
    fn test_load_and_save() {
        let dir = tempdir().unwrap();
        let original = SearchFile {
            search: SearchConfig {
                cardinality: Some(2),
                ..SearchConfig::default()
            },
        };

        let yaml_path = dir.path().join("search.yaml");
        original.save(&yaml_path).unwrap();
        assert_eq!(SearchFile::load(&yaml_path).unwrap(), original);

        let toml_path = dir.path().join("search.toml");
        original.save(&toml_path).unwrap();
        let text = fs::read_to_string(&toml_path).unwrap();
        assert!(text.contains("[search]"));
        assert_eq!(SearchFile::load(&toml_path).unwrap(), original);
    }

    #[test]
    fn test_load_invalid() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("invalid.yaml");
        fs::write(&file_path, "this is not valid yaml: [").unwrap();
        assert!(SearchFile::load(&file_path).is_err());

        assert!(SearchFile::load(dir.path().join("missing.yaml")).is_err());
    }
}
