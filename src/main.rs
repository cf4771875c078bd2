use std::env;
use std::fs;
use std::process;

use cadenza::{ChordEngine, Note, Quality, SearchConfig};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        usage();
        process::exit(1);
    }

    let mut config_path: Option<String> = None;
    let mut find_notes: Option<String> = None;
    let mut bass: Option<String> = None;
    let mut use_flats = false;
    let mut list = false;
    let mut symbol: Option<String> = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => match iter.next() {
                Some(path) => config_path = Some(path),
                None => fail("--config requires a file path"),
            },
            "--find" => match iter.next() {
                Some(notes) => find_notes = Some(notes),
                None => fail("--find requires a comma-separated note list"),
            },
            "--bass" => match iter.next() {
                Some(note) => bass = Some(note),
                None => fail("--bass requires a note"),
            },
            "--flats" => use_flats = true,
            "--list" => list = true,
            other if other.starts_with("--") => {
                fail(&format!("Unknown option: {}", other));
            }
            other => symbol = Some(other.to_string()),
        }
    }

    let config = match &config_path {
        Some(path) => load_config(path),
        None => SearchConfig::default(),
    };

    let engine = match ChordEngine::with_config(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Engine error: {}", e);
            process::exit(1);
        }
    };

    if list {
        print_qualities();
        return;
    }

    if let Some(notes) = find_notes {
        run_find(&engine, &notes, bass.as_deref());
        return;
    }

    match symbol {
        Some(symbol) => run_chord(&engine, &symbol, use_flats),
        None => {
            usage();
            process::exit(1);
        }
    }
}

fn usage() {
    eprintln!("Usage: cadenza <chord-symbol>");
    eprintln!("       cadenza --flats <chord-symbol>");
    eprintln!("       cadenza --find <note,note,...> [--bass <note>]");
    eprintln!("       cadenza --list");
    eprintln!("       cadenza --config <tuning.yaml> --find <note,note,...>");
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

fn load_config(path: &str) -> SearchConfig {
    let source = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => fail(&format!("Error reading config '{}': {}", path, e)),
    };
    match serde_yaml::from_str(&source) {
        Ok(config) => config,
        Err(e) => fail(&format!("Invalid config '{}': {}", path, e)),
    }
}

fn parse_note(token: &str) -> Note {
    match Note::from_name(token.trim()) {
        Some(note) => note,
        None => fail(&format!("Invalid note: {}", token.trim())),
    }
}

fn run_chord(engine: &ChordEngine, symbol: &str, use_flats: bool) {
    let chord = match engine.chord(symbol) {
        Ok(chord) => chord,
        Err(e) => fail(&format!("Error: {}", e)),
    };

    let display: Vec<&str> = chord
        .notes
        .iter()
        .map(|n| {
            if use_flats {
                n.flat_spelling().as_str()
            } else {
                n.as_str()
            }
        })
        .collect();
    let midi: Vec<String> = chord
        .notes
        .iter()
        .map(|n| n.midi(4).to_string())
        .collect();
    let freqs: Vec<String> = chord
        .notes
        .iter()
        .map(|n| format!("{:.2}", n.frequency(4)))
        .collect();

    println!("Chord:  {}", chord);
    println!("Notes:  {}", display.join(" "));
    println!("MIDI:   {}", midi.join(" "));
    println!("Hz:     {}", freqs.join(" "));
}

fn run_find(engine: &ChordEngine, notes: &str, bass: Option<&str>) {
    let selected: Vec<Note> = notes
        .split(',')
        .filter(|t| !t.trim().is_empty())
        .map(parse_note)
        .collect();
    let bass_note = bass.map(parse_note);

    let result = engine.find_chords(&selected, bass_note);

    if result.exact.is_empty() && result.partial.is_empty() {
        println!("No suggestions.");
        return;
    }

    if !result.exact.is_empty() {
        println!("Exact matches:");
        for suggestion in &result.exact {
            let names: Vec<&str> = suggestion.notes.iter().map(|n| n.as_str()).collect();
            println!("  {:<12} {}", suggestion.name, names.join(" "));
        }
    }
    if !result.partial.is_empty() {
        println!("Partial matches:");
        for suggestion in &result.partial {
            let names: Vec<&str> = suggestion.notes.iter().map(|n| n.as_str()).collect();
            println!(
                "  {:<12} {}  (score {:.2})",
                suggestion.name,
                names.join(" "),
                suggestion.match_score
            );
        }
    }
}

fn print_qualities() {
    for category in cadenza::Category::ALL {
        let entries: Vec<Quality> = Quality::all()
            .filter(|q| q.category() == category)
            .collect();
        if entries.is_empty() {
            continue;
        }
        println!("{}:", category.label());
        for quality in entries {
            let aliases = quality.aliases();
            if aliases.is_empty() {
                println!("  {:<12} {}", quality.token(), quality.display_name());
            } else {
                println!(
                    "  {:<12} {}  (also: {})",
                    quality.token(),
                    quality.display_name(),
                    aliases.join(", ")
                );
            }
        }
    }
}
