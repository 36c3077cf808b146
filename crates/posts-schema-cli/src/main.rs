mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use posts_schema_store::SchemaProvisioner;

#[derive(Parser)]
#[command(name = "posts-setup")]
#[command(about = "Provision the posts table for the news archive database")]
struct Cli {
    /// Path to the SQLite database file (overrides the config file)
    #[arg(long)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the posts table and its indexes if absent, then print the layout
    Provision,
    /// Print the current table layout without changing anything
    Describe,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let app_config = config::load_config();
    let path = config::resolve_database(cli.database, &app_config);

    let provisioner = SchemaProvisioner::open(&path)
        .with_context(|| format!("could not open database at {}", path.display()))?;
    println!("Database connection OK ({}).\n", path.display());

    match cli.command {
        Command::Provision => commands::provision::run(&provisioner),
        Command::Describe => commands::describe::run(&provisioner),
    }
}
