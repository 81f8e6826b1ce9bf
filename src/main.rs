#[macro_use]
mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rpm_core::Resource;
use rpm_core::config::RpmConfig;
use rpm_core::store::Stores;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rpm")]
#[command(about = "Inspect and edit your RPM Life categories, calendar events and RPM blocks")]
struct Cli {
    /// Use this data directory instead of the configured one
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and empty store files
    Init,
    /// List all records of a resource
    List {
        resource: ResourceArg,

        /// Print raw JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Print one record as JSON
    Show { resource: ResourceArg, id: String },
    /// Create a record from JSON (--data or stdin)
    Create {
        resource: ResourceArg,

        #[arg(short, long)]
        data: Option<String>,
    },
    /// Replace a record with JSON (--data or stdin); the id is kept
    Update {
        resource: ResourceArg,
        id: String,

        #[arg(short, long)]
        data: Option<String>,
    },
    /// Delete a record
    Delete { resource: ResourceArg, id: String },
    /// Show config and data paths
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ResourceArg {
    Categories,
    CalendarEvents,
    #[value(name = "rpmblocks", alias = "rpm-blocks")]
    RpmBlocks,
}

impl From<ResourceArg> for Resource {
    fn from(arg: ResourceArg) -> Self {
        match arg {
            ResourceArg::Categories => Resource::Categories,
            ResourceArg::CalendarEvents => Resource::CalendarEvents,
            ResourceArg::RpmBlocks => Resource::RpmBlocks,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (config, data_dir) = resolve_paths(cli.data_dir.clone())?;

    tracing::debug!(data_dir = %data_dir.display(), "opening stores");
    let stores = Stores::open(&data_dir);

    match cli.command {
        Commands::Init => commands::init::run(&stores, &data_dir),
        Commands::List { resource, json } => {
            with_store!(stores, Resource::from(resource), |store| commands::list::run(
                store, json
            ))
        }
        Commands::Show { resource, id } => {
            with_store!(stores, Resource::from(resource), |store| commands::show::run(
                store, &id
            ))
        }
        Commands::Create { resource, data } => {
            let input = commands::read_input(data)?;
            with_store!(stores, Resource::from(resource), |store| commands::create::run(
                store, &input
            ))
        }
        Commands::Update { resource, id, data } => {
            let input = commands::read_input(data)?;
            with_store!(stores, Resource::from(resource), |store| commands::update::run(
                store, &id, &input
            ))
        }
        Commands::Delete { resource, id } => {
            with_store!(stores, Resource::from(resource), |store| commands::delete::run(
                store, &id
            ))
        }
        Commands::Config => commands::config::run(&config, &data_dir),
    }
}

/// Config and data directory for this run. With `--data-dir` the global
/// config is only read if it exists, never written.
fn resolve_paths(data_dir: Option<PathBuf>) -> Result<(RpmConfig, PathBuf)> {
    match data_dir {
        Some(data_dir) => Ok((RpmConfig::load_existing()?, data_dir)),
        None => {
            let config = RpmConfig::load()?;
            let data_dir = config.data_path();
            Ok((config, data_dir))
        }
    }
}
