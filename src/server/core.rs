//! Listener core
//!
//! Binds the control socket and spawns one session task per accepted
//! connection. Connections are unbounded; a session failure never reaches
//! the accept loop.

use log::{error, info};
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::{TcpListener, TcpSocket};

use crate::server::config::ServerConfig;
use crate::server::session;

pub struct Server {
    listener: TcpListener,
    config: Arc<ServerConfig>,
}

impl Server {
    /// Binds the configured address with SO_REUSEADDR and the configured
    /// listen backlog. A bind failure is fatal to the caller.
    pub async fn bind(config: ServerConfig) -> io::Result<Self> {
        let ip: IpAddr = config
            .host
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let addr = SocketAddr::new(ip, config.port);

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true)?;
        socket.bind(addr)?;
        let listener = socket.listen(config.backlog)?;

        info!("Server listening on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            config: Arc::new(config),
        })
    }

    /// The bound address. Useful when the configured port is 0.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections forever, one session task per connection.
    pub async fn run(&self) {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    info!("Connection established with {}", addr);
                    let config = Arc::clone(&self.config);

                    // Spawn so the accept loop never blocks on a session.
                    tokio::spawn(async move {
                        session::handle_session(stream, addr, config).await;
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }
}
