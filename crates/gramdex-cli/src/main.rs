//! gramdex - organize social profiles into categories from the terminal.

mod bootstrap;
mod cli;
mod handlers;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    bootstrap::init_tracing();
    let cli = Cli::parse();

    let library = bootstrap::build_library(cli.data_dir)?;

    match cli.command {
        Command::Category(cmd) => handlers::category::run(&library, cmd).await,
        Command::Profile(cmd) => handlers::profile::run(&library, cmd).await,
        Command::Open {
            category_id,
            profile_id,
        } => handlers::view::open(&library, &category_id, &profile_id).await,
        Command::Show { category } => handlers::view::show(&library, category).await,
    }
}
