//! Fixed response texts.
//!
//! Responses are display text, not machine-parseable codes. Every text
//! response ends with a newline; the LIST body carries one line per entry
//! with no terminator beyond the trailing newline.

pub const WELCOME: &str = "Welcome to our FTP server!\n";

pub const INVALID_COMMAND: &str = "Invalid command\n";

pub const COMMAND_FAILED: &str = "Error: Command failed or syntax error\n";

pub const GOODBYE: &str = "Closing connection. Goodbye!\n";

pub const HELP_TEXT: &str = "The following commands are available:\n\
LIST - List the contents of the current directory\n\
CWD <directory> - Change the current working directory\n\
RETR <file> - Retrieve a file from the server\n\
DEL <file> - Remove a file\n\
QUIT - Disconnect from the server\n\
HELP - Display this help message\n";

/// Confirmation line for a successful CWD, named by the new directory's
/// basename.
pub fn directory_changed(basename: &str) -> String {
    format!("Directory changed to {}\n", basename)
}

/// Confirmation line for a successful DEL.
pub fn file_deleted(filename: &str) -> String {
    format!("Successfully deleted file {}\n", filename)
}
