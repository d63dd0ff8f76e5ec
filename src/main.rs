//! # Genval: Genetic Values from Marker Dosages
//!
//! ## Usage
//! ```bash
//! # Additive (and dominance, if the effects table has that column)
//! genval --geno dosages.tsv.gz --effects effects.tsv --out gv.tsv
//!
//! # Additive only, fixed thread count, with profiling output
//! genval --geno dosages.tsv --effects effects.tsv --out gv.tsv \
//!     --additive-only --nthreads 4 --profile
//! ```

use std::time::Instant;

use anyhow::Context;

use genval::config::Config;
use genval::pipelines::GvPipeline;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber for hierarchical profiling output
fn init_profiling() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};
    use tracing_subscriber::fmt::format::FmtSpan;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::CLOSE)
                .with_target(false)
                .with_timer(fmt::time::uptime())
        )
        .init();
}

fn run() -> anyhow::Result<()> {
    // Parse and validate configuration
    let config = Config::parse_and_validate()?;

    if config.profile {
        init_profiling();
        eprintln!("=== Profiling enabled ===\n");
    }

    execute(config)
}

/// Run the pipeline for an already validated configuration
fn execute(config: Config) -> anyhow::Result<()> {
    let start = Instant::now();

    eprintln!("Genval v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("Threads: {}", config.nthreads());

    let out = config.out.clone();
    let mut pipeline = GvPipeline::new(config);
    let summary = pipeline
        .run()
        .with_context(|| format!("computing genetic values for {}", out.display()))?;

    eprintln!(
        "Individuals: {}  mean: {:.6}  variance: {:.6}  range: [{:.6}, {:.6}]",
        summary.n, summary.mean, summary.variance, summary.min, summary.max
    );

    let elapsed = start.elapsed();
    eprintln!("\nCompleted in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}
