//! Scale detection.

use crate::dictionary::ScaleTypeDictionary;
use crate::pcset::Chroma;
use crate::pitch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMatch {
    /// Only scales with exactly the given notes.
    Exact,
    /// Exact matches first, then every scale containing the notes.
    #[default]
    Fit,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScaleDetectOptions {
    /// Tonic note name; the first note is used when absent.
    pub tonic: Option<String>,
    pub match_kind: ScaleMatch,
}

/// Scale names (`"C major"`, `"C bebop"`, ...) that fit `notes` over the tonic.
///
/// ```
/// use harmonia::{detect_scales, ScaleDetectOptions, ScaleMatch};
///
/// let notes = ["D", "E", "F", "G", "A", "B", "C"];
/// let options = ScaleDetectOptions { match_kind: ScaleMatch::Exact, ..Default::default() };
/// assert_eq!(detect_scales(&notes, &options), vec!["D dorian"]);
/// ```
pub fn detect_scales<S: AsRef<str>>(notes: &[S], options: &ScaleDetectOptions) -> Vec<String> {
    detect_scales_in(ScaleTypeDictionary::builtin(), notes, options)
}

pub fn detect_scales_in<S: AsRef<str>>(
    dictionary: &ScaleTypeDictionary,
    notes: &[S],
    options: &ScaleDetectOptions,
) -> Vec<String> {
    let tonic_source = match &options.tonic {
        Some(t) => Some(t.as_str()),
        None => notes.first().map(|n| n.as_ref()),
    };
    let Some(tonic) = tonic_source.and_then(|t| pitch::parse_note(t).ok()) else {
        log::debug!("no usable tonic for scale detection");
        return Vec::new();
    };

    let tonic_pc = tonic.pitch_class();
    let tonic_name = tonic.spelling();
    let scale_chroma = Chroma::from_notes(notes).with(tonic_pc).rotate(tonic_pc);

    let mut results: Vec<String> = dictionary
        .with_chroma(scale_chroma)
        .map(|(_, s)| format!("{} {}", tonic_name, s.name))
        .collect();

    if options.match_kind == ScaleMatch::Fit {
        results.extend(
            dictionary
                .supersets_of(scale_chroma)
                .map(|s| format!("{} {}", tonic_name, s.name)),
        );
    }
    results
}
