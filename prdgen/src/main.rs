#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::path::Path;

use args::{Args, Command};
use clap::Parser;
use prdgen_config::Config;
use prdgen_core::ParsedDocument;
use prdgen_llm::CompletionClient;
use prdgen_server::Server;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };

    let default_filter = match args.command {
        Command::Serve { .. } => "info",
        Command::Generate { .. } => "warn",
    };
    prdgen_telemetry::init(config.telemetry.as_ref(), default_filter)?;

    match args.command {
        Command::Serve { listen } => serve(&config, listen).await,
        Command::Generate { prompt, out_dir } => generate(&config, &prompt, out_dir.as_deref()).await,
    }
}

async fn serve(config: &Config, listen: Option<std::net::SocketAddr>) -> anyhow::Result<()> {
    let mut server = Server::new(config)?;
    if let Some(listen) = listen {
        server = server.with_listen_address(listen);
    }

    tracing::info!(listen_address = %server.listen_address(), "starting prdgen");

    // Set up graceful shutdown
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_clone.cancel();
    });

    server.serve(shutdown).await?;

    tracing::info!("prdgen stopped");
    Ok(())
}

async fn generate(config: &Config, prompt: &str, out_dir: Option<&Path>) -> anyhow::Result<()> {
    let chars = prompt.chars().count();
    if chars == 0 || chars > config.server.max_prompt_chars {
        anyhow::bail!(
            "prompt must be between 1 and {} characters, got {chars}",
            config.server.max_prompt_chars
        );
    }

    let client = CompletionClient::new(&config.completion)?;
    let document = prdgen_llm::generate_document(&client, prompt).await?;

    match out_dir {
        Some(dir) => {
            for path in document.write_to_dir(dir)? {
                println!("wrote {}", path.display());
            }
        }
        None => print_document(&document),
    }

    Ok(())
}

fn print_document(document: &ParsedDocument) {
    println!("{}\n\n---\n\n{}", document.prd, document.todo);
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
