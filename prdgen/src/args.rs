use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// PRD and Todo list generator
#[derive(Debug, Parser)]
#[command(name = "prdgen", about = "Turn a project description into a PRD and a Todo list")]
pub struct Args {
    /// Path to configuration file; without one, settings come from the environment
    #[arg(short, long, global = true, env = "PRDGEN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Override the listen address
        #[arg(long, env = "PRDGEN_LISTEN")]
        listen: Option<SocketAddr>,
    },
    /// Generate once and print or save the result
    Generate {
        /// Project description
        prompt: String,

        /// Write PRD.md and TODO.md into this directory instead of printing
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
}
