use std::path::PathBuf;

use backend::catalog::Catalog;
use backend::error::PlannerError;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Validate a destination catalog JSON file before deploying it"
)]
struct Args {
    /// Path to the catalog JSON file
    #[arg(long)]
    catalog: PathBuf,
}

fn main() -> Result<(), PlannerError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let catalog = Catalog::from_file(&args.catalog)?;

    for city in catalog.cities() {
        tracing::info!(
            "{} ({}): {} attractions",
            city.name,
            city.slug,
            city.attractions.len()
        );
    }
    tracing::info!(
        "catalog OK: {} cities, {} attractions",
        catalog.cities().len(),
        catalog.attraction_count()
    );
    Ok(())
}
