//! Server startup and shutdown logic

use anyhow::{Context, Result};
use axum::Router;
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;
use strain_config::StrainConfig;
use strain_rest_api::{create_rest_app, AppConfig, AppContext};
use tokio::net::TcpListener;
use tokio::sync::Notify;

/// Server application struct
pub struct Server {
    config: StrainConfig,
    context: AppContext,
}

impl Server {
    /// Initialise logging and build the shared application context
    pub fn new(config: StrainConfig) -> Result<Self> {
        strain_logging::init_logging_from_config(&config.logging)?;

        let context = AppContext::from_config(&config);
        Ok(Self { config, context })
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Build the complete application router
    pub fn build_app(&self) -> Router {
        create_rest_app(self.context.clone(), AppConfig::from(&self.config.server))
    }

    /// Bind the configured address and serve until Ctrl-C or SIGTERM
    pub async fn start(self) -> Result<()> {
        let addr = self.config.server.socket_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    ///
    /// In-flight requests get `shutdown_timeout` to finish; after that the
    /// remaining connections are dropped. The compute pool is closed either
    /// way.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr: SocketAddr = listener.local_addr()?;
        let app = self.build_app();

        tracing::info!("Starting Strain server on {}", local_addr);
        self.log_config_summary();

        let signalled = Arc::new(Notify::new());
        let notify = Arc::clone(&signalled);
        let graceful = async move {
            shutdown.await;
            notify.notify_one();
        };

        let grace_period = self.config.server.shutdown_timeout;
        let grace_expired = async {
            signalled.notified().await;
            tokio::time::sleep(grace_period).await;
        };

        let server = axum::serve(listener, app)
            .with_graceful_shutdown(graceful)
            .into_future();

        tokio::select! {
            result = server => result.context("Server error")?,
            _ = grace_expired => {
                tracing::warn!(
                    "Shutdown timeout of {:?} elapsed, dropping remaining connections",
                    grace_period
                );
            }
        }

        self.context.pool.close();
        tracing::info!("Server shutdown complete");
        Ok(())
    }

    fn log_config_summary(&self) {
        let config = &self.config;
        let on_off = |enabled: bool| if enabled { "Enabled" } else { "Disabled" };

        tracing::info!("=== Strain Server Configuration ===");
        tracing::info!("Bind Address: {}:{}", config.server.bind_address, config.server.port);
        tracing::info!(
            "Compute Pool: {} slots, {:?} job timeout",
            self.context.pool.capacity(),
            self.context.pool.job_timeout()
        );
        tracing::info!("CORS: {}", on_off(config.server.enable_cors));
        tracing::info!("Request ID: {}", on_off(config.server.enable_request_id));
        tracing::info!("Tracing: {}", on_off(config.server.enable_tracing));
        tracing::info!(
            "Limits: primes<={} sort<={} matrix<={} depth {}..={} parallel<={}x{}",
            config.workloads.primes.max_limit,
            config.workloads.sort.max_size,
            config.workloads.matrix.max_size,
            config.workloads.recursive.min_depth,
            config.workloads.recursive.max_depth,
            config.workloads.parallel.max_iterations,
            config.workloads.parallel.max_threads,
        );
        tracing::info!("===================================");
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
