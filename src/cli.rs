use std::path::PathBuf;

use clap::Parser;

/// Count seismic events per year in an SSN catalog export and fit a linear
/// trend to the yearly counts.
#[derive(Parser, Debug)]
#[command(name = "sismo-trend", version, about)]
pub struct Cli {
    /// Catalog CSV (preamble lines are skipped up to the `Fecha,` header).
    #[arg(env = "SISMO_CATALOG")]
    pub catalog: PathBuf,
}
