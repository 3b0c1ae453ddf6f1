mod config;
mod nav;
mod routes;
mod views;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::config::Config;
use crate::nav::Navigator;

#[derive(Parser)]
#[command(name = "storefront-app")]
#[command(version, about = "Storefront navigation shell", long_about = None)]
struct Cli {
    /// Paths to navigate to, in order, as if following links through
    /// the storefront
    paths: Vec<String>,

    /// Configuration file
    #[arg(short, long, default_value = "storefront.toml")]
    config: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}, using defaults", e);
        Config::default()
    });

    let table = routes::route_table(config.routing.base_path.as_deref())
        .context("building storefront route table")?;

    info!(
        app = %config.app.name,
        routes = table.routes().len(),
        base_path = table.base_path().unwrap_or("/"),
        "route table ready"
    );
    for route in table.routes() {
        println!("  {} -> {}", route.pattern(), route.name());
    }

    let mut nav = Navigator::new(table, config.routing.fallback);
    for path in &cli.paths {
        match nav.push(path) {
            Ok(entry) => {
                if entry.params.is_empty() {
                    println!("{} => {}", entry.path, entry.view);
                } else {
                    println!("{} => {} {:?}", entry.path, entry.view, entry.params);
                }
            }
            Err(e) => eprintln!("{}: {}", path, e),
        }
    }

    Ok(())
}
