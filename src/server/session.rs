//! Module `session`
//!
//! The per-connection command state machine: greet, loop over commands,
//! close. Reads one newline-terminated command line at a time, dispatches on
//! the parsed command, and writes exactly one framed response per command.
//!
//! Each session carries its own working directory. The original protocol
//! mutated the process-wide current directory on CWD, which races across
//! connections; here the path is session state threaded through every
//! filesystem call.

use log::{error, info, warn};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::OwnedWriteHalf;

use crate::protocol::responses;
use crate::protocol::{Command, parse_command};
use crate::server::config::ServerConfig;
use crate::storage;
use crate::transfer;

/// Per-connection state.
struct Session {
    cwd: PathBuf,
}

/// Runs one connection from greeting to close.
///
/// The loop ends on QUIT, on a zero-byte read (peer closed), or on any
/// transport error; in the error case no further response is attempted.
pub async fn handle_session(stream: TcpStream, client_addr: SocketAddr, config: Arc<ServerConfig>) {
    let cwd = match config.server_root.canonicalize() {
        Ok(path) => path,
        Err(e) => {
            error!(
                "Server root {} unavailable: {}",
                config.server_root.display(),
                e
            );
            return;
        }
    };
    let mut session = Session { cwd };

    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);
    let mut line = String::new();

    if let Err(e) = write_half.write_all(responses::WELCOME.as_bytes()).await {
        error!("Failed to send welcome to {}: {}", client_addr, e);
        return;
    }

    loop {
        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => {
                info!("Connection closed by client {}", client_addr);
                break;
            }
            Ok(_) => {
                let command = parse_command(&line);
                info!("Received from {}: {:?}", client_addr, command);

                match dispatch(&mut session, &command, &mut write_half, &config).await {
                    Ok(true) => {}
                    Ok(false) => {
                        info!("Client {} requested to quit", client_addr);
                        break;
                    }
                    Err(e) => {
                        error!("Connection error with {}: {}", client_addr, e);
                        break;
                    }
                }
            }
            Err(e) => {
                error!("Failed to read from {}: {}", client_addr, e);
                break;
            }
        }
    }

    info!("Client {} disconnected", client_addr);
}

/// Executes one command and writes its response.
///
/// Returns `Ok(false)` when the session should close (QUIT). A command
/// failure that has not yet written anything gets the generic failure line;
/// an `Err` means the transport itself failed and the session must end.
async fn dispatch(
    session: &mut Session,
    command: &Command,
    writer: &mut OwnedWriteHalf,
    config: &ServerConfig,
) -> std::io::Result<bool> {
    match command {
        Command::List(None) => match storage::list_directory(&session.cwd) {
            Ok(entries) => {
                let mut body = entries.join("\n");
                body.push('\n');
                writer.write_all(body.as_bytes()).await?;
            }
            Err(e) => {
                warn!("LIST failed in {}: {}", session.cwd.display(), e);
                writer.write_all(responses::COMMAND_FAILED.as_bytes()).await?;
            }
        },
        Command::List(Some(_)) => {
            // LIST takes no argument.
            writer.write_all(responses::COMMAND_FAILED.as_bytes()).await?;
        }
        Command::Cwd(Some(target)) => match storage::change_directory(&session.cwd, target) {
            Ok(new_cwd) => {
                let message = responses::directory_changed(&storage::basename(&new_cwd));
                session.cwd = new_cwd;
                writer.write_all(message.as_bytes()).await?;
            }
            Err(e) => {
                warn!("CWD {} failed: {}", target, e);
                writer.write_all(responses::COMMAND_FAILED.as_bytes()).await?;
            }
        },
        Command::Retr(Some(filename)) => {
            let opened = match storage::resolve_file(&session.cwd, filename) {
                Ok(path) => transfer::open_for_transfer(&path).await,
                Err(e) => Err(std::io::Error::other(e)),
            };
            match opened {
                Ok((file, size)) => {
                    // Past this point the size line goes on the wire; any
                    // error is a transport failure, not a command failure.
                    let sent = transfer::send_file(writer, file, size, config.buffer_size).await?;
                    info!("Sent {} ({} bytes)", filename, sent);
                }
                Err(e) => {
                    warn!("RETR {} failed: {}", filename, e);
                    writer.write_all(responses::COMMAND_FAILED.as_bytes()).await?;
                }
            }
        }
        Command::Del(Some(filename)) => match storage::delete_file(&session.cwd, filename) {
            Ok(()) => {
                writer
                    .write_all(responses::file_deleted(filename).as_bytes())
                    .await?;
            }
            Err(e) => {
                warn!("DEL {} failed: {}", filename, e);
                writer.write_all(responses::COMMAND_FAILED.as_bytes()).await?;
            }
        },
        Command::Cwd(None) | Command::Retr(None) | Command::Del(None) => {
            // Known verb, missing argument.
            writer.write_all(responses::COMMAND_FAILED.as_bytes()).await?;
        }
        Command::Help => {
            writer.write_all(responses::HELP_TEXT.as_bytes()).await?;
        }
        Command::Quit => {
            writer.write_all(responses::GOODBYE.as_bytes()).await?;
            return Ok(false);
        }
        Command::Unknown => {
            writer.write_all(responses::INVALID_COMMAND.as_bytes()).await?;
        }
    }

    Ok(true)
}
