#![allow(clippy::must_use_candidate)]

mod cors;
mod error;
mod generate;
mod health;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use prdgen_config::Config;
use prdgen_llm::{CompletionClient, TextGenerator};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use generate::{GenerateRequest, GenerateState};

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// Constructs the completion client up front so missing credentials
    /// stop startup instead of failing the first request.
    ///
    /// # Errors
    ///
    /// Returns an error if the completion API key or URL is not configured
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = CompletionClient::new(&config.completion)
            .map_err(|e| anyhow::anyhow!("failed to initialize completion client: {e}"))?;

        Ok(Self::with_generator(config, Arc::new(client)))
    }

    /// Build the server around an existing text generator
    pub fn with_generator(config: &Config, generator: Arc<dyn TextGenerator>) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let mut app = health::health_router(&config.server.health);

        // Generate route
        let state = GenerateState::new(generator, config.server.max_prompt_chars);
        app = app.merge(generate::generate_router(state));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // CORS
        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Override the listen address
    #[must_use]
    pub fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
