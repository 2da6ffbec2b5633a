use super::*;
use crate::dictionary::{ChordTypeDictionary, ScaleTypeDictionary, TypeRow};

#[test]
fn test_major_triad() {
    assert_eq!(detect(&["C", "E", "G"]), vec!["CM", "Em#5"]);
}

#[test]
fn test_order_invariance() {
    let a = detect(&["C", "E", "G"]);
    let b = detect(&["G", "C", "E"]);
    let c = detect(&["E", "G", "C", "C"]);
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn test_octaves_are_ignored() {
    assert_eq!(detect(&["C4", "E5", "G3"]), detect(&["C", "E", "G"]));
}

#[test]
fn test_fewer_than_two_pitch_classes() {
    let empty: [&str; 0] = [];
    assert!(detect(&empty).is_empty());
    assert!(detect(&["C"]).is_empty());
    assert!(detect(&["C", "C4", "C5"]).is_empty());
}

#[test]
fn test_power_chord() {
    assert_eq!(detect(&["C", "G"]), vec!["C5"]);
}

#[test]
fn test_seventh_chords() {
    assert_eq!(detect(&["C", "E", "G", "B"]), vec!["Cmaj7"]);
    assert_eq!(detect(&["C", "E", "G", "Bb"]), vec!["C7"]);
}

#[test]
fn test_symmetric_chords_list_every_root() {
    assert_eq!(
        detect(&["C", "Eb", "Gb", "A"]),
        vec!["Cdim7", "Ebdim7", "Gbdim7", "Adim7"]
    );
    assert_eq!(detect(&["C", "E", "G#"]), vec!["Caug", "Eaug", "G#aug"]);
}

#[test]
fn test_unordered_ranking_uses_declaration_order() {
    // C6 is declared before m7
    assert_eq!(detect(&["A", "C", "E", "G"]), vec!["C6", "Am7"]);
}

#[test]
fn test_first_note_as_tonic() {
    let options = DetectOptions {
        tonic: TonicHint::FirstNote,
        ..Default::default()
    };
    assert_eq!(
        detect_with(&["A", "C", "E", "G"], &options),
        vec!["Am7", "C6/A"]
    );
    assert_eq!(detect_with(&["E", "G", "C"], &options), vec!["Em#5", "CM/E"]);
    assert_eq!(detect_with(&["D", "F#", "A", "C"], &options), vec!["D7"]);
}

#[test]
fn test_explicit_tonic() {
    let options = DetectOptions {
        tonic: TonicHint::PitchClass(0),
        ..Default::default()
    };
    // notes order no longer matters, the tonic is fixed to C
    assert_eq!(
        detect_with(&["A", "C", "E", "G"], &options),
        vec!["C6", "Am7/C"]
    );
    assert_eq!(
        detect_with(&["G", "E", "C", "A"], &options),
        detect_with(&["A", "C", "E", "G"], &options)
    );
}

#[test]
fn test_inversion_details() {
    let options = DetectOptions {
        tonic: TonicHint::FirstNote,
        ..Default::default()
    };
    let matches = detect_chords(&["E", "G", "C"], &options);
    assert_eq!(matches.len(), 2);

    let root_position = &matches[0];
    assert!(!root_position.inversion);
    assert_eq!(root_position.bass, None);
    assert_eq!(root_position.weight, 1.0);

    let inverted = &matches[1];
    assert_eq!(inverted.name, "CM/E");
    assert_eq!(inverted.root, 0);
    assert_eq!(inverted.root_name, "C");
    assert_eq!(inverted.symbol, "M");
    assert_eq!(inverted.type_name, "major");
    assert_eq!(inverted.bass.as_deref(), Some("E"));
    assert!(inverted.inversion);
    assert_eq!(inverted.weight, 0.5);
}

#[test]
fn test_spelling_is_preserved() {
    assert_eq!(detect(&["Db", "F", "Ab"]), vec!["DbM", "Fm#5"]);
    assert_eq!(detect(&["C#", "F", "G#"])[0], "C#M");
}

#[test]
fn test_assume_perfect_fifth() {
    assert!(detect(&["C", "E", "B"]).is_empty());

    let options = DetectOptions {
        assume_perfect_fifth: true,
        ..Default::default()
    };
    assert_eq!(detect_with(&["C", "E", "B"], &options), vec!["Cmaj7"]);
    // complete voicings are unaffected
    assert_eq!(detect_with(&["C", "E", "G", "B"], &options), vec!["Cmaj7"]);
    // altered fifths are never filled in
    assert_eq!(
        detect_with(&["C", "E", "G#"], &options),
        detect(&["C", "E", "G#"])
    );
}

#[test]
fn test_invalid_notes_are_skipped() {
    assert_eq!(detect(&["C", "E", "X", "G", ""]), detect(&["C", "E", "G"]));
}

#[test]
fn test_detection_is_deterministic() {
    let notes = ["D", "F", "A", "C", "E"];
    let first = detect(&notes);
    for _ in 0..10 {
        assert_eq!(detect(&notes), first);
    }
}

#[test]
fn test_pitch_classes() {
    let detector = ChordDetector::new(ChordTypeDictionary::builtin(), DetectOptions::default());
    let names: Vec<String> = detector
        .detect_pitch_classes(&[0, 4, 7])
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["CM", "Em#5"]);

    let wrapped: Vec<String> = detector
        .detect_pitch_classes(&[13, 17, 20])
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(wrapped, vec!["C#M", "Fm#5"]);
}

#[test]
fn test_custom_dictionary() {
    let rows: &[TypeRow] = &[
        ("1P 3M 5P", "major", &["M"]),
        ("1P 3m 5P", "minor", &["m"]),
    ];
    let dictionary = ChordTypeDictionary::from_rows(rows).unwrap();
    let detector = ChordDetector::new(&dictionary, DetectOptions::default());

    let names: Vec<String> = detector
        .detect(&["A", "C", "E"])
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["Am"]);
    assert_eq!(detector.options(), DetectOptions::default());
}

#[test]
fn test_detect_scales_fit() {
    let names = detect_scales(&["C", "D", "E", "G", "A"], &ScaleDetectOptions::default());
    assert_eq!(names[0], "C major pentatonic");
    assert!(names.contains(&"C major".to_string()));
    assert!(names.contains(&"C chromatic".to_string()));
}

#[test]
fn test_detect_scales_exact_with_tonic() {
    let notes = ["C", "D", "E", "F", "G", "A", "B"];
    let options = ScaleDetectOptions {
        tonic: Some("A".to_string()),
        match_kind: ScaleMatch::Exact,
    };
    assert_eq!(detect_scales(&notes, &options), vec!["A minor"]);
}

#[test]
fn test_detect_scales_adds_tonic() {
    let options = ScaleDetectOptions {
        tonic: Some("C".to_string()),
        match_kind: ScaleMatch::Exact,
    };
    // C is added to the set
    assert_eq!(
        detect_scales(&["D", "E", "G", "A"], &options),
        vec!["C major pentatonic"]
    );
}

#[test]
fn test_detect_scales_without_tonic() {
    let empty: [&str; 0] = [];
    assert!(detect_scales(&empty, &ScaleDetectOptions::default()).is_empty());

    let options = ScaleDetectOptions {
        tonic: Some("H".to_string()),
        ..Default::default()
    };
    assert!(detect_scales(&["C", "E"], &options).is_empty());
}

#[test]
fn test_detect_scales_in_custom_dictionary() {
    let rows: &[TypeRow] = &[("1P 2M 3M", "trichord", &[])];
    let dictionary = ScaleTypeDictionary::from_rows(rows).unwrap();
    let options = ScaleDetectOptions::default();
    assert_eq!(
        detect_scales_in(&dictionary, &["F", "G", "A"], &options),
        vec!["F trichord"]
    );
}
