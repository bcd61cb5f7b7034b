//! MySQL probe connector.
//!
//! One connection attempt per call: acquire, confirm, release. The probe
//! connection is never reused.

use async_trait::async_trait;
use common::errors::{ProbeError, ProbeResult};
use common::models::ConnectionConfig;
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{ConnectOptions, Connection};

/// A single connection attempt against the dependency.
///
/// The waiter only needs "try to connect" plus the error classification in
/// `ProbeError`; everything driver-specific stays behind this seam.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Tries to open one connection. Implementations release the connection
    /// before returning.
    async fn try_connect(&self) -> ProbeResult<()>;
}

/// Probes a MySQL server by opening and immediately closing a connection.
pub struct MySqlConnector {
    config: ConnectionConfig,
}

impl MySqlConnector {
    /// Creates a connector for the given connection parameters.
    pub fn new(config: ConnectionConfig) -> Self {
        Self { config }
    }

    /// Builds the connect options. The port is parsed here, at connect
    /// time, so a malformed value is reported like any other failed
    /// attempt.
    fn connect_options(&self) -> ProbeResult<MySqlConnectOptions> {
        let port: u16 = self.config.port.parse().map_err(|_| {
            ProbeError::other(
                "configuration",
                format!("invalid port {:?}", self.config.port),
            )
        })?;

        Ok(MySqlConnectOptions::new()
            .host(&self.config.host)
            .port(port)
            .username(&self.config.user)
            .password(&self.config.password)
            .database(&self.config.database))
    }
}

#[async_trait]
impl Connector for MySqlConnector {
    async fn try_connect(&self) -> ProbeResult<()> {
        let options = self.connect_options()?;
        let conn = options.connect().await?;

        // The server answered the handshake, so it is ready. A failure
        // while closing does not change that.
        if let Err(e) = conn.close().await {
            tracing::debug!(error = %e, "probe connection close failed");
        }
        Ok(())
    }
}
