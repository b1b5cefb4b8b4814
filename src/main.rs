use anyhow::Result;
use clap::{Parser, Subcommand};

use extforge::backend::DEFAULT_BACKEND;
use extforge::commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffolding for native extension projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new extension project
    Init {
        /// The extension namespace
        namespace: String,

        /// The extension namespace path
        namespace_path: Option<String>,

        /// Backend whose kernel templates are used
        #[arg(long, default_value = DEFAULT_BACKEND)]
        backend: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            namespace,
            namespace_path,
            backend,
        } => {
            commands::init::execute(&namespace, namespace_path.as_deref(), &backend)?;
        }
    }

    Ok(())
}
