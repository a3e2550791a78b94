use anyhow::{Context, Result};
use clap::Parser;
use feedforward_ann::config::{load_config, TrainingConfig};
use feedforward_ann::dataset::LabeledImages;
use feedforward_ann::driver::run_epochs;
use feedforward_ann::network::Network;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

// Train a fixed-topology MLP on IDX labeled images and report test accuracy.
#[derive(Parser)]
#[command(name = "mnist_ann")]
#[command(about = "Train and test a feedforward network on IDX image data", long_about = None)]
struct Cli {
    /// JSON training configuration (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding train-images, train-labels, test-images, test-labels
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Override the number of epochs
    #[arg(long)]
    epochs: Option<usize>,

    /// Override the initialization seed
    #[arg(long)]
    seed: Option<u64>,

    /// Verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn parse_level(level: &str) -> Level {
    match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Build the effective configuration from an optional file plus CLI overrides.
fn resolve_config(cli: &Cli) -> Result<TrainingConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TrainingConfig::default(),
    };
    if let Some(dir) = &cli.data_dir {
        config = config.with_data_dir(dir);
    }
    if let Some(epochs) = cli.epochs {
        config.epochs = epochs;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&cli.log_level))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = resolve_config(&cli)?;
    let program_start = Instant::now();

    info!("Loading training data...");
    let train = LabeledImages::load(&config.train_images, &config.train_labels)
        .context("failed to load training data")?;
    info!("Loading test data...");
    let test = LabeledImages::load(&config.test_images, &config.test_labels)
        .context("failed to load test data")?;
    info!(train = train.len(), test = test.len(), "data loaded");

    let mut network =
        Network::with_seed(config.topology, config.seed).context("failed to construct network")?;

    let summaries = run_epochs(&mut network, &train, &test, &config)?;
    for summary in &summaries {
        println!("--- EPOCH {} ---", summary.epoch);
        println!("Accuracy  : {:.4}", summary.evaluation.accuracy());
    }

    network.release();
    info!(
        seconds = program_start.elapsed().as_secs_f64(),
        "run complete"
    );
    Ok(())
}
