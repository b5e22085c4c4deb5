use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use shyraq_core::translit::Direction;
use shyraq_session::gate::AllowAll;
use shyraq_session::prefs::PreferenceStore;
use shyraq_session::{ChatHandler, Response, UserId};

/// Interactive chat simulator: each input line is handled like an
/// incoming message. `/dir forward|reverse` sets the direction,
/// `/switch` flips it and retranslates the previous line, `/quit` exits.
/// The preference store is saved back to `prefs_path` on exit.
pub fn chat_cmd(prefs_path: Option<&str>, user_id: i64) {
    let user = UserId(user_id);
    let prefs = match prefs_path {
        Some(path) => PreferenceStore::open(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Error opening preference store: {e}");
            process::exit(1);
        }),
        None => PreferenceStore::new(),
    };
    let handler = ChatHandler::new(prefs, Box::new(AllowAll));

    println!(
        "direction: {} (/dir, /switch, /quit)",
        direction_name(handler.direction_for(user))
    );

    let stdin = io::stdin();
    let mut last_input = String::new();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading stdin: {e}");
                break;
            }
        };
        let trimmed = line.trim();

        match trimmed {
            "" => continue,
            "/quit" => break,
            "/switch" => {
                let response = handler.switch_direction(user, &last_input);
                print_response(&response);
            }
            "/dir forward" => {
                handler.set_direction(user, Direction::Forward);
                println!("direction: forward");
            }
            "/dir reverse" => {
                handler.set_direction(user, Direction::Reverse);
                println!("direction: reverse");
            }
            text => {
                last_input = text.to_string();
                print_response(&handler.handle_message(user, text));
            }
        }
        io::stdout().flush().ok();
    }

    if let Some(path) = prefs_path {
        if let Err(e) = handler.prefs().save(Path::new(path)) {
            eprintln!("Error saving preference store: {e}");
            process::exit(1);
        }
    }
}

fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => "forward",
        Direction::Reverse => "reverse",
    }
}

fn print_response(response: &Response) {
    match response {
        Response::NotSubscribed(missing) => {
            println!("subscription required: {}", missing.join(", "));
        }
        Response::Translated(reply) => {
            for part in &reply.parts {
                println!("{part}");
            }
            println!(
                "[{}] {} parts, {} chars",
                direction_name(reply.direction),
                reply.parts.len(),
                reply.total_chars
            );
        }
    }
}
