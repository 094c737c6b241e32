//! AG3D converter service: bind and serve the stub routes.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::core::config::ServiceConfig;
use crate::core::errors::{DevtoolsError, Result};
use crate::service::routes;

/// The converter HTTP service
pub struct ConverterServer {
    listener: TcpListener,
    app: Router,
}

impl ConverterServer {
    /// Bind the configured listen address
    pub async fn bind(config: &ServiceConfig) -> Result<Self> {
        let listener = TcpListener::bind(config.bind_addr).await.map_err(|e| {
            DevtoolsError::server(format!("failed to bind {}: {e}", config.bind_addr))
        })?;
        Ok(Self {
            listener,
            app: routes::build_app(),
        })
    }

    /// The bound local address. Differs from the configured address when
    /// binding to port 0.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .map_err(|e| DevtoolsError::io("failed to read local address", e))
    }

    /// Serve requests until the process is terminated
    pub async fn run(self) -> Result<()> {
        let addr = self.local_addr()?;
        info!("AG3D converter service listening on {addr}");
        axum::serve(self.listener, self.app)
            .await
            .map_err(|e| DevtoolsError::server(format!("server error: {e}")))
    }
}
