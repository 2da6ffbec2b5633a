use std::env;
use std::process;

use harmonia::detect::{DetectOptions, TonicHint};
use harmonia::voicing::{self, VoicingDictionary, VoicingSet};
use harmonia::{duration, pitch, ChordDetector, ChordTypeDictionary, EngineConfig};
use harmonia::{detect_scales, detect_with, ScaleDetectOptions};

const USAGE: &str = "Usage: harmonia [--config FILE] <command> [args...]

Commands:
  detect <note>...               chord names for a set of notes
  detect-midi <midi>...          chord names for MIDI note numbers (lowest is the bass)
  scales <note>...               scales containing the notes, first note as tonic
  duration <name>                exact value of a duration name (q, h., eighth..)
  voicing <symbol> [dictionary]  voicings for a chord symbol (triads, lefthand, all)";

fn usage() -> ! {
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut rest: &[String] = &args;

    let config = if rest.first().map(String::as_str) == Some("--config") {
        let Some(path) = rest.get(1) else {
            eprintln!("Usage: harmonia --config FILE <command> [args...]");
            process::exit(1);
        };
        rest = &rest[2..];
        match EngineConfig::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        EngineConfig::default()
    };

    let Some((command, params)) = rest.split_first() else {
        usage();
    };

    match command.as_str() {
        "detect" => {
            if params.is_empty() {
                usage();
            }
            for name in detect_with(params, &config.detect_options()) {
                println!("{}", name);
            }
        }
        "detect-midi" => detect_midi(params, &config),
        "scales" => {
            if params.is_empty() {
                usage();
            }
            for name in detect_scales(params, &ScaleDetectOptions::default()) {
                println!("{}", name);
            }
        }
        "duration" => {
            let Some(name) = params.first() else {
                usage();
            };
            let value = duration::get(name);
            if value.empty {
                eprintln!("Unknown duration: {}", name);
                process::exit(1);
            }
            println!(
                "{} ({}{}): {} = {}",
                value.name, value.shorthand, value.dots, value.fraction, value.value
            );
        }
        "voicing" => {
            let Some(symbol) = params.first() else {
                usage();
            };
            let dictionary: &VoicingDictionary = match params.get(1) {
                Some(set) => match set.parse::<VoicingSet>() {
                    Ok(set) => VoicingDictionary::builtin(set),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        process::exit(1);
                    }
                },
                None => config.default_voicing_dictionary(),
            };
            match voicing::lookup(symbol, Some(dictionary)) {
                Some(voicings) => {
                    for v in voicings {
                        println!("{}", v);
                    }
                }
                None => {
                    eprintln!("No voicing for '{}' in {}", symbol, dictionary.name());
                    process::exit(1);
                }
            }
        }
        _ => usage(),
    }
}

fn detect_midi(params: &[String], config: &EngineConfig) {
    let mut midi: Vec<u8> = Vec::with_capacity(params.len());
    for p in params {
        match p.parse::<u8>() {
            Ok(n) if n <= 127 => midi.push(n),
            _ => {
                eprintln!("Invalid MIDI note: {}", p);
                process::exit(1);
            }
        }
    }
    midi.sort_unstable();
    midi.dedup();

    if midi.len() < 2 {
        println!("Play at least two notes to detect a chord");
        return;
    }

    let names: Vec<String> = midi.iter().map(|&n| pitch::midi_to_note_name(n)).collect();
    println!("Notes: {}", names.join(" "));

    let options = DetectOptions {
        tonic: TonicHint::FirstNote,
        ..config.detect_options()
    };
    let pcs: Vec<u8> = midi.iter().map(|&n| pitch::midi_to_pitch_class(n)).collect();
    let matches = ChordDetector::new(ChordTypeDictionary::builtin(), options).detect_pitch_classes(&pcs);
    if matches.is_empty() {
        println!("No chord found");
    }
    for m in matches {
        println!("{}", m.name);
    }
}
