//! Ferry FTP client - a minimal interactive front end over the transfer
//! client's public operations.
//!
//! Stdin doubles as the pause control source: during a download an empty
//! line toggles pause/resume, exactly as it would for a GUI feeding the
//! control channel.

use std::path::Path;

use ferry_ftp::FtpClient;
use ferry_ftp::client::{ClientConfig, ControlInput};
use ferry_ftp::error::FerryError;

#[tokio::main]
async fn main() -> Result<(), FerryError> {
    env_logger::init();

    let config = ClientConfig::load()?;
    let mut client = FtpClient::connect(&config).await?;
    let mut input = ControlInput::from_stdin();

    println!(
        "Connected to {}:{}. Commands: LIST, CWD <dir>, RETR <file>, DEL <file>, HELP, QUIT.",
        config.host, config.port
    );
    println!("During a download, press Enter to pause or resume.");

    while let Some(line) = input.recv().await {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let verb = parts.next().unwrap_or("").to_ascii_uppercase();
        let arg = parts.next().map(str::trim);

        let result = match (verb.as_str(), arg) {
            ("LIST", None) => client.list().await.map(print_lines),
            ("CWD", Some(dir)) => client.change_directory(dir).await.map(print_line),
            ("RETR", Some(file)) => client
                .retrieve(file, Path::new("."), &mut input)
                .await
                .map(|bytes| println!("Downloaded {} ({} bytes)", file, bytes)),
            ("DEL", Some(file)) => client.delete_file(file).await.map(print_line),
            ("HELP", None) => client.help().await.map(print_lines),
            ("QUIT", None) => {
                client.quit().await?;
                break;
            }
            _ => {
                println!("Usage: LIST | CWD <dir> | RETR <file> | DEL <file> | HELP | QUIT");
                Ok(())
            }
        };

        if let Err(e) = result {
            eprintln!("{}", e);
        }
    }

    Ok(())
}

fn print_line(line: String) {
    println!("{}", line);
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}
