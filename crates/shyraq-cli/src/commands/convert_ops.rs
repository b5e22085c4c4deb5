use std::fs;
use std::io::Read;
use std::process;

use shyraq_core::translit::{Direction, Transliterator};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn convert_cmd(text: Option<&str>, reverse: bool, alphabet: Option<&str>, json: bool) {
    let custom = alphabet.map(|path| {
        let toml = die!(fs::read_to_string(path), "Error reading alphabet file: {}");
        die!(Transliterator::from_toml(&toml), "Invalid alphabet: {}")
    });
    let engine = match &custom {
        Some(engine) => engine,
        None => Transliterator::global(),
    };

    let input = match text {
        Some(t) => t.to_string(),
        None => {
            let mut buf = String::new();
            die!(
                std::io::stdin().read_to_string(&mut buf),
                "Error reading stdin: {}"
            );
            buf
        }
    };

    let direction = if reverse {
        Direction::Reverse
    } else {
        Direction::Forward
    };
    let output = engine.transliterate(&input, direction);

    if json {
        let value = serde_json::json!({
            "direction": direction,
            "input": input,
            "output": output,
        });
        println!("{value}");
    } else {
        print!("{output}");
        if !output.ends_with('\n') {
            println!();
        }
    }
}
