use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use doublepower::config::{RunConfig, DEFAULT_CATALOG, DEFAULT_TOP};
use doublepower::logging::init_logging;
use doublepower::{parse_ranks, report, Catalog, FormationEngine};

/// Rank the strongest splits of available players into three doubles pairs.
#[derive(Debug, Parser)]
#[command(name = "doublepower", author, version)]
struct Cli {
    /// JSON catalog mapping player name to rank and left/right strength.
    #[arg(value_name = "FILE", default_value = DEFAULT_CATALOG)]
    catalog: PathBuf,

    /// Space separated ranks of the available players (default: everyone).
    #[arg(short, long, value_name = "RANKS")]
    ranks: Option<String>,

    /// Number of strongest formations to print.
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_TOP)]
    top: usize,

    /// Also print every formation with all of its court orders.
    #[arg(long)]
    overview: bool,

    /// Log level when RUST_LOG is unset.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            catalog: cli.catalog,
            ranks: cli.ranks,
            top: cli.top,
            overview: cli.overview,
            log_level: cli.log_level,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = RunConfig::from(Cli::parse());
    config.validate()?;
    init_logging(config.level()?);

    let catalog = Catalog::from_path(&config.catalog)
        .with_context(|| format!("loading catalog {}", config.catalog.display()))?;
    println!("{}", report::players_table("List of players:", catalog.players()));

    let pool = match config.ranks.as_deref() {
        Some(raw) => catalog.select(&parse_ranks(raw)?)?,
        None => catalog.select_all()?,
    };
    println!("{}", report::players_table("Available players:", pool.players()));

    let engine = FormationEngine::new(catalog, pool);
    if config.overview {
        print!("{}", report::formations_overview(&engine)?);
        println!();
    }

    for scored in engine.strongest(config.top)? {
        println!("{}", report::scored_line(&scored));
    }
    Ok(())
}
