use anyhow::Context;
use tracing_subscriber::EnvFilter;

use breaks_report::{pipeline, variants};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let analyses = [
        variants::replication(),
        variants::manufacture(),
        variants::all_industries(),
    ];

    for analysis in &analyses {
        let outcome = pipeline::run(analysis)
            .with_context(|| format!("{} analysis failed", analysis.name))?;
        tracing::info!(
            variant = analysis.name,
            breaks = ?outcome.break_years,
            "plot saved to {}",
            outcome.output_path.display()
        );
    }

    Ok(())
}
