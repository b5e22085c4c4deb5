use std::fs;
use std::process;

use shyraq_core::translit::{parse_alphabet_toml, Transliterator, DEFAULT_TOML};

pub fn dump_cmd() {
    print!("{DEFAULT_TOML}");
}

pub fn check_cmd(file: &str) {
    let toml = fs::read_to_string(file).unwrap_or_else(|e| {
        eprintln!("Error reading {file}: {e}");
        process::exit(1);
    });

    // parse for stats, then a full build to catch reverse collisions
    let mappings = match parse_alphabet_toml(&toml) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Invalid alphabet: {e}");
            process::exit(1);
        }
    };
    if let Err(e) = Transliterator::from_toml(&toml) {
        eprintln!("Invalid alphabet: {e}");
        process::exit(1);
    }

    let silent = mappings.values().filter(|t| t.is_empty()).count();
    let digraphs = mappings
        .values()
        .filter(|t| t.chars().count() > 1)
        .count();
    println!("OK: {} entries ({silent} silent, {digraphs} multi-char)", mappings.len());
}
