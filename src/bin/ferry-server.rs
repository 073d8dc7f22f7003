//! Ferry FTP server - entry point.

use log::info;

use ferry_ftp::error::FerryError;
use ferry_ftp::server::{Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), FerryError> {
    // env_logger picks up the RUST_LOG environment variable
    env_logger::init();

    let config = ServerConfig::load()?;
    info!("Launching ferry server...");

    let server = Server::bind(config).await?;
    server.run().await;
    Ok(())
}
