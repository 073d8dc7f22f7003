//! Module `transfer`
//!
//! Server side of the RETR sub-protocol: a decimal byte-count line followed
//! by exactly that many raw bytes, streamed in bounded chunks.

use log::info;
use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Opens a file for streaming and stats its size.
///
/// Kept separate from [`send_file`] so every failure mode that can be
/// reported as a command failure happens before the size line is written;
/// once `send_file` runs, bytes are on the wire and an error is a transport
/// failure.
pub async fn open_for_transfer(path: &Path) -> io::Result<(File, u64)> {
    let file = File::open(path).await?;
    let size = file.metadata().await?.len();
    Ok((file, size))
}

/// Writes the size line, then streams the whole file in chunks no larger
/// than `buffer_size`. Returns the number of content bytes sent.
pub async fn send_file<W>(
    writer: &mut W,
    mut file: File,
    size: u64,
    buffer_size: usize,
) -> io::Result<u64>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(format!("{}\n", size).as_bytes()).await?;

    let mut buffer = vec![0u8; buffer_size];
    let mut sent = 0u64;

    loop {
        let n = file.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        writer.write_all(&buffer[..n]).await?;
        sent += n as u64;
    }

    writer.flush().await?;
    info!("Streamed {} bytes (announced {})", sent, size);
    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_send_file_prefixes_exact_size() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("payload.bin");
        let content: Vec<u8> = (0..3000u32).map(|i| (i % 251) as u8).collect();
        std::fs::File::create(&path)
            .unwrap()
            .write_all(&content)
            .unwrap();

        let (file, size) = open_for_transfer(&path).await.unwrap();
        assert_eq!(size, 3000);

        let mut wire = Vec::new();
        // Chunk size smaller than the file, to force multiple writes.
        let sent = send_file(&mut wire, file, size, 1024).await.unwrap();
        assert_eq!(sent, 3000);

        let newline = wire.iter().position(|&b| b == b'\n').unwrap();
        assert_eq!(&wire[..newline], b"3000");
        assert_eq!(&wire[newline + 1..], &content[..]);
    }

    #[tokio::test]
    async fn test_open_for_transfer_missing_file() {
        let root = TempDir::new().unwrap();
        assert!(open_for_transfer(&root.path().join("nope")).await.is_err());
    }
}
