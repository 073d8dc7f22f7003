//! Module `commands`
//!
//! Defines the command set and the parser that turns one raw input line into
//! a `Command`. Verbs are case-insensitive; the argument is whatever follows
//! the first whitespace run. Argument presence is validated at dispatch, not
//! here: a known verb with a missing argument is a command failure, while an
//! unrecognized verb is an invalid command.

/// A command parsed from one line of client input.
///
/// The set is closed; dispatch is a `match`, not a lookup table. Variants
/// carry their argument as `Option<String>` so the handlers can distinguish
/// "known verb, bad arguments" from "unknown verb".
#[derive(Debug, PartialEq)]
pub enum Command {
    /// LIST - enumerate the current directory. Takes no argument; one
    /// supplied anyway is a command failure.
    List(Option<String>),
    /// CWD <dir> - change the session working directory.
    Cwd(Option<String>),
    /// RETR <file> - download a file.
    Retr(Option<String>),
    /// DEL <file> - remove a file.
    Del(Option<String>),
    /// HELP - fixed capability summary.
    Help,
    /// QUIT - close the connection after a goodbye line.
    Quit,
    /// Anything else, including an empty line.
    Unknown,
}

/// Parses a raw line into a `Command`.
///
/// The line is trimmed, split on the first whitespace run, and the verb
/// normalized to upper case. An empty argument is treated as absent.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let verb = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts
        .next()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(String::from);

    match verb.as_str() {
        "LIST" => Command::List(arg),
        "CWD" => Command::Cwd(arg),
        "RETR" => Command::Retr(arg),
        "DEL" => Command::Del(arg),
        "HELP" => Command::Help,
        "QUIT" => Command::Quit,
        _ => Command::Unknown,
    }
}
