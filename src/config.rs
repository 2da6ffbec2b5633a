//! Engine configuration loaded from YAML.
//!
//! ```yaml
//! default-voicing-dictionary: lefthand   # triads | lefthand | all
//! assume-perfect-fifth: false
//! tonic: first-note                       # none | first-note | a note name
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::path::Path;

use serde::Deserialize;

use crate::detect::{DetectOptions, TonicHint};
use crate::error::TheoryError;
use crate::pitch;
use crate::voicing::{VoicingDictionary, VoicingSet};

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    default_voicing_dictionary: Option<String>,
    assume_perfect_fifth: Option<bool>,
    tonic: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub default_voicing: VoicingSet,
    pub assume_perfect_fifth: bool,
    pub tonic: TonicHint,
}

impl EngineConfig {
    /// Parse a YAML document.
    ///
    /// ```
    /// use harmonia::{EngineConfig, TonicHint};
    /// use harmonia::voicing::VoicingSet;
    ///
    /// let config = EngineConfig::from_yaml("default-voicing-dictionary: triads\ntonic: first-note").unwrap();
    /// assert_eq!(config.default_voicing, VoicingSet::Triads);
    /// assert_eq!(config.tonic, TonicHint::FirstNote);
    /// assert!(!config.assume_perfect_fifth);
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, TheoryError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| TheoryError::ConfigError(e.to_string()))?;

        let default_voicing = match &raw.default_voicing_dictionary {
            Some(name) => name.parse()?,
            None => VoicingSet::default(),
        };

        let tonic = match &raw.tonic {
            Some(t) => parse_tonic(t)?,
            None => TonicHint::default(),
        };

        let config = EngineConfig {
            default_voicing,
            assume_perfect_fifth: raw.assume_perfect_fifth.unwrap_or(false),
            tonic,
        };
        log::debug!("loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TheoryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| TheoryError::ConfigError(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    pub fn detect_options(&self) -> DetectOptions {
        DetectOptions {
            tonic: self.tonic,
            assume_perfect_fifth: self.assume_perfect_fifth,
        }
    }

    pub fn default_voicing_dictionary(&self) -> &'static VoicingDictionary {
        VoicingDictionary::builtin(self.default_voicing)
    }
}

fn parse_tonic(s: &str) -> Result<TonicHint, TheoryError> {
    match s.trim() {
        "none" => Ok(TonicHint::None),
        "first-note" => Ok(TonicHint::FirstNote),
        note => pitch::pitch_class(note)
            .map(TonicHint::PitchClass)
            .ok_or_else(|| TheoryError::ConfigError(format!("Invalid tonic: {}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::from_yaml("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.default_voicing, VoicingSet::Lefthand);
        assert_eq!(config.detect_options(), DetectOptions::default());
        assert_eq!(config.default_voicing_dictionary().name(), "lefthand");
    }

    #[test]
    fn test_full_config() {
        let yaml = "default-voicing-dictionary: all\nassume-perfect-fifth: true\ntonic: first-note\n";
        let config = EngineConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.default_voicing, VoicingSet::All);
        assert_eq!(
            config.detect_options(),
            DetectOptions {
                tonic: TonicHint::FirstNote,
                assume_perfect_fifth: true,
            }
        );
        assert_eq!(config.default_voicing_dictionary().len(), 16);
    }

    #[test]
    fn test_note_as_tonic() {
        let config = EngineConfig::from_yaml("tonic: Eb").unwrap();
        assert_eq!(config.tonic, TonicHint::PitchClass(3));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            EngineConfig::from_yaml("default-voicing-dictionary: jazz"),
            Err(TheoryError::UnknownVoicingDictionary("jazz".to_string()))
        );
        assert!(matches!(
            EngineConfig::from_yaml("tonic: sideways"),
            Err(TheoryError::ConfigError(_))
        ));
        assert!(matches!(
            EngineConfig::from_yaml("assume-perfect-fifth: maybe"),
            Err(TheoryError::ConfigError(_))
        ));
        assert!(matches!(
            EngineConfig::from_yaml("voicings: all"),
            Err(TheoryError::ConfigError(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default-voicing-dictionary: triads").unwrap();
        writeln!(file, "assume-perfect-fifth: true").unwrap();

        let config = EngineConfig::from_path(file.path()).unwrap();
        assert_eq!(config.default_voicing, VoicingSet::Triads);
        assert!(config.assume_perfect_fifth);
        assert_eq!(config.tonic, TonicHint::None);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = EngineConfig::from_path(dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(TheoryError::ConfigError(_))));
    }
}
