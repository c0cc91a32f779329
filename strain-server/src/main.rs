//! Strain server binary

use anyhow::Result;
use clap::Parser;

use strain_server::{Cli, Server};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    if cli.print_config {
        print!("{}", serde_yaml::to_string(&config)?);
        return Ok(());
    }

    Server::new(config)?.start().await
}
