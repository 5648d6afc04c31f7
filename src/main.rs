use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use mathget_index::config::IndexConfig;
use mathget_index::server::logging::init_logging;
use mathget_index::server::run_server;
use mathget_index::version::catalog::sanitize_package_name;
use mathget_index::version::constraint::{Constraint, LATEST};
use mathget_index::version::fetcher::resolve_stored;
use mathget_index::version::lister::{list_versions, render_listing};
use mathget_index::version::stores::FsStore;

#[derive(Parser)]
#[command(name = "mathget-index")]
#[command(version, about = "Package index server for MathGet packages")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory of `<package>-<version>.metadata` files
    #[arg(long, global = true)]
    metadata_dir: Option<PathBuf>,

    /// Directory of `<package>-<version>.zip` archives
    #[arg(long, global = true)]
    archive_dir: Option<PathBuf>,

    /// Address the HTTP server listens on
    #[arg(long, global = true)]
    bind: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Print the stored versions of a package
    Versions { package: String },
    /// Print the stored version a constraint resolves to
    Resolve {
        package: String,
        /// `latest`, an exact version, or a `^`, `~` or `_` prefixed version
        #[arg(long, short, default_value = LATEST)]
        constraint: String,
    },
}

/// Configuration file (or defaults) with command line flags applied on top
fn load_config(cli: &Cli) -> anyhow::Result<IndexConfig> {
    let mut config = match &cli.config {
        Some(path) => IndexConfig::load(path)?,
        None => IndexConfig::default(),
    };
    if let Some(dir) = &cli.metadata_dir {
        config.storage.metadata_dir = dir.clone();
    }
    if let Some(dir) = &cli.archive_dir {
        config.storage.archive_dir = dir.clone();
    }
    if let Some(bind) = &cli.bind {
        config.server.bind = bind.clone();
    }

    Ok(config)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let _guard = init_logging(&config.log)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match cli.command {
        None | Some(Command::Serve) => runtime.block_on(run_server(config))?,
        Some(Command::Versions { package }) => {
            let store = FsStore::metadata(&config.storage.metadata_dir);
            let package = sanitize_package_name(&package);
            match runtime.block_on(list_versions(&store, &package)) {
                Ok(versions) => print!("{}", render_listing(&versions)),
                Err(e) => {
                    eprintln!("{}", e);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Some(Command::Resolve {
            package,
            constraint,
        }) => {
            let store = FsStore::metadata(&config.storage.metadata_dir);
            let package = sanitize_package_name(&package);
            let constraint = Constraint::parse(&constraint);
            match runtime.block_on(resolve_stored(&store, &package, &constraint)) {
                Ok(resolved) => println!("{}", resolved),
                Err(e) => {
                    eprintln!("{}", e);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
