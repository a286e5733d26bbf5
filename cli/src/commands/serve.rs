//! Serve command implementation.

use clap::Args;
use upiqr_core::constants::{DEFAULT_HOST, DEFAULT_PORT};

use crate::server::{self, AppState, ServerConfig};
use crate::ui::print_banner;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
        }
    }
}

/// Run the web form until the process is stopped.
pub async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    print_banner();

    let config = ServerConfig::from(args);
    println!("\x1b[1;32m✓\x1b[0m Open http://{}:{}/ in a browser", config.host, config.port);
    println!("\x1b[2mPress Ctrl+C to stop.\x1b[0m\n");

    server::serve(&config, AppState::default()).await
}
