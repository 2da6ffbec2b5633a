pub mod config;
pub mod detect;
pub mod dictionary;
pub mod duration;
pub mod error;
pub mod fraction;
pub mod interval;
pub mod pcset;
pub mod pitch;
pub mod voicing;

pub use config::EngineConfig;
pub use detect::{
    detect, detect_chords, detect_scales, detect_with, ChordDetector, ChordMatch, DetectOptions,
    ScaleDetectOptions, ScaleMatch, TonicHint,
};
pub use dictionary::{ChordQuality, ChordType, ChordTypeDictionary, ScaleType, ScaleTypeDictionary};
pub use duration::DurationValue;
pub use error::TheoryError;
pub use fraction::Fraction;
pub use pcset::Chroma;
pub use voicing::{VoicingDictionary, VoicingSet};

/// Chord names for `notes` under a loaded configuration.
/// This is the main entry point for configured hosts.
///
/// ```
/// use harmonia::{detect_configured, EngineConfig, TonicHint};
///
/// let config = EngineConfig { tonic: TonicHint::FirstNote, ..Default::default() };
/// assert_eq!(detect_configured(&["E", "G", "C"], &config), vec!["Em#5", "CM/E"]);
/// ```
pub fn detect_configured<S: AsRef<str>>(notes: &[S], config: &EngineConfig) -> Vec<String> {
    detect_with(notes, &config.detect_options())
}

/// Voicings for `symbol` in the configuration's default dictionary.
pub fn voicings_configured(symbol: &str, config: &EngineConfig) -> Option<&'static [String]> {
    voicing::lookup(symbol, Some(config.default_voicing_dictionary()))
}
