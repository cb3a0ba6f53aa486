use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use trial_fit::{
    report::{summarise, ChartSink, CsvChartWriter},
    search::{
        fit,
        params::{DEFAULT_N_POINTS, DEFAULT_N_TRIALS, DEFAULT_TOP_N},
        SearchParamsBuilder,
    },
};

#[derive(Parser)]
#[command(name = "trial_fit")]
#[command(about = "Fit a line to random points by trial and error")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,

    /// Number of random points (N)
    #[arg(long, default_value_t = DEFAULT_N_POINTS)]
    points: usize,

    /// Number of random candidate lines (K)
    #[arg(long, default_value_t = DEFAULT_N_TRIALS)]
    trials: usize,

    /// RNG seed. A fresh one is drawn and reported when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// How many of the lowest-error trials to list
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Directory for `points.csv` and `best_line.csv`
    #[arg(long)]
    chart_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .init();

    let mut builder = SearchParamsBuilder::new()
        .n_points(cli.points)
        .n_trials(cli.trials)
        .top_n(cli.top);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let params = builder.build();

    let outcome = fit(&params)?;

    // The numeric summary is printed regardless of whether the chart lands.
    let mut sink = cli
        .chart_dir
        .as_deref()
        .and_then(|dir| match CsvChartWriter::create_in(dir) {
            Ok(sink) => Some(sink),
            Err(err) => {
                warn!(dir = %dir.display(), %err, "could not create chart files");
                None
            }
        });

    let summary = summarise(
        &outcome,
        params.top_n,
        sink.as_mut().map(|s| s as &mut dyn ChartSink),
    )?;
    println!("{summary}");
    Ok(())
}
