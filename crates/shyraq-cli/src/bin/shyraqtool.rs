use clap::{Parser, Subcommand};

use shyraq_cli::commands::{alphabet_ops, chat_ops, convert_ops};

#[derive(Parser)]
#[command(name = "shyraqtool", about = "Shyraq transliteration diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text from the argument or stdin
    Convert {
        /// Text to transliterate; reads stdin when omitted
        text: Option<String>,
        /// Translate Shyraq → Cyrillic instead of Cyrillic → Shyraq
        #[arg(long)]
        reverse: bool,
        /// Path to a custom alphabet TOML file
        #[arg(long)]
        alphabet: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the embedded default alphabet TOML
    DumpAlphabet,

    /// Validate a custom alphabet TOML file
    CheckAlphabet {
        /// Path to the alphabet TOML file
        file: String,
    },

    /// Interactive chat-style session with per-user direction state
    Chat {
        /// Path to a preference store file (saved on exit)
        #[arg(long)]
        prefs: Option<String>,
        /// Numeric user id to act as
        #[arg(long, default_value = "0")]
        user: i64,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Convert {
            text,
            reverse,
            alphabet,
            json,
        } => convert_ops::convert_cmd(text.as_deref(), reverse, alphabet.as_deref(), json),
        Command::DumpAlphabet => alphabet_ops::dump_cmd(),
        Command::CheckAlphabet { file } => alphabet_ops::check_cmd(&file),
        Command::Chat { prefs, user } => chat_ops::chat_cmd(prefs.as_deref(), user),
    }
}
