use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::error::{Result, ServerError};
use crate::http::connection::Connection;
use crate::resource::ResourceResolver;

/// The listening socket plus everything a connection needs to be answered.
pub struct Server {
    listener: TcpListener,
    resolver: Arc<ResourceResolver>,
}

impl Server {
    pub async fn bind(addr: &str, resolver: ResourceResolver) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.to_string(),
                source,
            })?;

        Ok(Self {
            listener,
            resolver: Arc::new(resolver),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections forever, one task per connection.
    ///
    /// Accept failures and per-connection errors are logged and never end
    /// the loop.
    pub async fn run(self) {
        if let Ok(addr) = self.listener.local_addr() {
            info!(
                mappings = self.resolver.properties().len(),
                "Listening on {}", addr
            );
        }

        let mut accepted: u64 = 0;
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    warn!(error = %e, "Failed to accept connection");
                    continue;
                }
            };

            accepted += 1;
            if accepted == 1 {
                info!("Server will accept new connections from now on");
            }
            tracing::debug!("Accepted connection from {}", peer);

            let resolver = Arc::clone(&self.resolver);
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, resolver);
                if let Err(e) = conn.run().await {
                    warn!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}
