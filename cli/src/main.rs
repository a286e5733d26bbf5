//! UPI QR CLI - payment URIs and QR codes from the terminal or a web form.

mod commands;
mod opener;
mod prompt;
mod server;
mod ui;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{GenerateArgs, InspectArgs, ServeArgs};

#[derive(Parser)]
#[command(name = "upiqr")]
#[command(about = "Generate UPI payment URI and QR code", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a URI and save its QR code (default)
    Generate(GenerateArgs),
    /// Serve the web form
    Serve(ServeArgs),
    /// Show the fields of an existing UPI URI
    Inspect(InspectArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("upiqr=info".parse()?)
                .add_directive("upiqr_core=info".parse()?),
        )
        .init();

    let Cli { generate, command } = Cli::parse();

    match command.unwrap_or(Commands::Generate(generate)) {
        Commands::Generate(args) => commands::run_generate(&args)?,
        Commands::Serve(args) => commands::run_server(args).await?,
        Commands::Inspect(args) => commands::show_inspect(&args)?,
    }

    Ok(())
}
