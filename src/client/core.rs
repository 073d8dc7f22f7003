//! Module `core`
//!
//! The transfer client: one persistent connection, one command in flight at
//! a time. Text responses are read to their newline; the RETR download loop
//! interleaves the socket with the pause control input.

use log::{info, warn};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};

use crate::client::config::ClientConfig;
use crate::client::control::ControlInput;
use crate::error::ClientError;

pub struct FtpClient {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    buffer_size: usize,
}

impl FtpClient {
    /// Connects and consumes the welcome line.
    pub async fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
        let stream = TcpStream::connect((config.host.as_str(), config.port)).await?;
        let (read_half, writer) = stream.into_split();

        let mut client = Self {
            reader: BufReader::new(read_half),
            writer,
            buffer_size: config.buffer_size,
        };

        let welcome = client.read_response_line().await?;
        info!("{}", welcome);
        Ok(client)
    }

    /// Sends one command line and returns the single-line response, trimmed.
    /// Transport errors abort the operation; there are no retries.
    pub async fn send_command(&mut self, command: &str) -> Result<String, ClientError> {
        self.writer
            .write_all(format!("{}\n", command).as_bytes())
            .await?;
        self.read_response_line().await
    }

    /// Sends LIST and returns the listing lines (`+dir` / `-file`).
    pub async fn list(&mut self) -> Result<Vec<String>, ClientError> {
        self.writer.write_all(b"LIST\n").await?;
        self.read_block().await
    }

    /// Sends CWD and returns the server's confirmation or failure line.
    pub async fn change_directory(&mut self, directory: &str) -> Result<String, ClientError> {
        self.send_command(&format!("CWD {}", directory)).await
    }

    /// Sends DEL and returns the server's confirmation or failure line.
    pub async fn delete_file(&mut self, filename: &str) -> Result<String, ClientError> {
        self.send_command(&format!("DEL {}", filename)).await
    }

    /// Sends HELP and returns the capability summary lines.
    pub async fn help(&mut self) -> Result<Vec<String>, ClientError> {
        self.writer.write_all(b"HELP\n").await?;
        self.read_block().await
    }

    /// Sends QUIT and closes the connection locally whether or not a goodbye
    /// arrives.
    pub async fn quit(&mut self) -> Result<(), ClientError> {
        self.writer.write_all(b"QUIT\n").await?;
        match self.read_response_line().await {
            Ok(goodbye) => info!("{}", goodbye),
            Err(e) => warn!("No goodbye from server: {}", e),
        }
        let _ = self.writer.shutdown().await;
        Ok(())
    }

    /// Downloads `filename` into `dest_dir`, with cooperative pause/resume.
    ///
    /// Reads the size line first; if it does not parse as a decimal count
    /// (which is also what a server-side failure line looks like), the
    /// retrieval aborts before any destination file is created. The download
    /// loop then alternates between the control input and the socket via
    /// `select!`; while paused only the control input is awaited, so no
    /// network data is consumed and nothing busy-waits. A chunk that has
    /// been read is always written out in full before the counter advances.
    ///
    /// Returns the number of bytes received, exactly the announced size.
    pub async fn retrieve(
        &mut self,
        filename: &str,
        dest_dir: &Path,
        control: &mut ControlInput,
    ) -> Result<u64, ClientError> {
        self.writer
            .write_all(format!("RETR {}\n", filename).as_bytes())
            .await?;

        let mut size_line = String::new();
        let n = self.reader.read_line(&mut size_line).await?;
        if n == 0 {
            return Err(ClientError::ConnectionClosed);
        }
        let file_size: u64 = size_line
            .trim()
            .parse()
            .map_err(|_| ClientError::InvalidSizeLine(size_line.trim().to_string()))?;

        let dest = dest_dir.join(filename);
        let mut file = File::create(&dest).await?;

        let mut buffer = vec![0u8; self.buffer_size];
        let mut received: u64 = 0;
        let mut paused = false;
        let mut control_open = true;

        while received < file_size {
            if paused {
                // No socket reads while paused; wait for the next toggle.
                match control.recv().await {
                    Some(line) if line.trim().is_empty() => {
                        paused = false;
                        info!("Resuming download.");
                    }
                    Some(_) => {}
                    None => {
                        // Control source gone; resume and finish.
                        control_open = false;
                        paused = false;
                    }
                }
                continue;
            }

            // Never read past the declared size; any trailing bytes belong
            // to the next response frame.
            let remaining = (file_size - received).min(self.buffer_size as u64) as usize;

            tokio::select! {
                biased;
                line = control.recv(), if control_open => {
                    match line {
                        Some(line) if line.trim().is_empty() => {
                            paused = true;
                            info!("Download paused. Send an empty line to resume.");
                        }
                        Some(_) => {}
                        None => control_open = false,
                    }
                }
                read = self.reader.read(&mut buffer[..remaining]) => {
                    let n = read?;
                    if n == 0 {
                        return Err(ClientError::ConnectionClosed);
                    }
                    file.write_all(&buffer[..n]).await?;
                    received += n as u64;
                    info!(
                        "Received {} of {} bytes for file {}",
                        received, file_size, filename
                    );
                }
            }
        }

        file.flush().await?;
        info!("Download of {} complete ({} bytes)", filename, received);
        Ok(received)
    }

    /// Reads one newline-terminated response line.
    async fn read_response_line(&mut self) -> Result<String, ClientError> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line).await?;
        if n == 0 {
            return Err(ClientError::ConnectionClosed);
        }
        Ok(line.trim_end().to_string())
    }

    /// Takes one receive (up to the buffer size) as a multi-line response
    /// body. The listing and help bodies have no terminator of their own, so
    /// one receive is the frame; under adversarial network chunking a body
    /// can split across receives, a known gap in the wire contract.
    async fn read_block(&mut self) -> Result<Vec<String>, ClientError> {
        let mut buffer = vec![0u8; self.buffer_size];
        let n = self.reader.read(&mut buffer).await?;
        if n == 0 {
            return Err(ClientError::ConnectionClosed);
        }
        let body = String::from_utf8_lossy(&buffer[..n]);
        Ok(body.trim().lines().map(str::to_string).collect())
    }
}
