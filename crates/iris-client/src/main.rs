//! Iris Prediction Client
//!
//! Command-line client for the iris inference server. Checks backend
//! liveness, collects flower measurements from flags or a test file, and
//! renders the predicted species.

mod api;
mod input;
mod species;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use iris_core::FeatureRecord;
use tracing::{debug, error, info, warn};

use crate::api::{ApiError, BackendClient};
use crate::species::Species;

/// Iris Prediction Client
#[derive(Parser, Debug)]
#[command(
    name = "iris-client",
    about = "Predict iris species from flower measurements",
    long_about = "Command-line client for the iris inference server. Measurements are \
                  taken from flags or from a JSON test file and sent to the backend \
                  for classification."
)]
struct Cli {
    /// Backend server URL
    #[arg(long, env = "IRIS_BACKEND_URL", default_value = api::DEFAULT_BACKEND_URL)]
    server_url: String,

    /// Path to the locally trained model artifact
    #[arg(long, value_name = "FILE", default_value = "model/iris_model.json")]
    model_path: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether the backend is online
    Status,

    /// Request a species prediction
    Predict(PredictArgs),
}

/// Flower measurements for a prediction request
#[derive(Args, Debug)]
struct PredictArgs {
    /// Sepal length in cm (4.3-7.9, step 0.1)
    #[arg(long, value_name = "CM", default_value_t = input::SEPAL_LENGTH.min,
          value_parser = input::parse_sepal_length)]
    sepal_length: f64,

    /// Sepal width in cm (2.0-4.4, step 0.1)
    #[arg(long, value_name = "CM", default_value_t = input::SEPAL_WIDTH.min,
          value_parser = input::parse_sepal_width)]
    sepal_width: f64,

    /// Petal length in cm (1.0-6.9, step 0.1)
    #[arg(long, value_name = "CM", default_value_t = input::PETAL_LENGTH.min,
          value_parser = input::parse_petal_length)]
    petal_length: f64,

    /// Petal width in cm (0.1-2.5, step 0.1)
    #[arg(long, value_name = "CM", default_value_t = input::PETAL_WIDTH.min,
          value_parser = input::parse_petal_width)]
    petal_width: f64,

    /// JSON test file whose `input_test` record replaces the flags above
    #[arg(long, value_name = "FILE")]
    input_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    setup_logging(cli.verbose);

    let client = BackendClient::with_url(&cli.server_url);

    match cli.command {
        Command::Status => run_status(&client).await,
        Command::Predict(args) => run_predict(&client, &cli.model_path, &args).await?,
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Probe the backend and report its status.
async fn run_status(client: &BackendClient) {
    info!("Checking backend at {}", client.url());
    if client.is_online().await {
        info!("Backend online");
    } else {
        error!("Backend offline");
    }
}

/// Run the prediction flow: model gate, liveness report, feature
/// collection, prediction call, rendering.
async fn run_predict(client: &BackendClient, model_path: &Path, args: &PredictArgs) -> Result<()> {
    // Without a trained artifact the backend has nothing to serve
    if !model_path.is_file() {
        warn!("Model artifact not found at {}", model_path.display());
        error!("Model not found. Train a model first");
        return Ok(());
    }

    // Liveness is advisory; the prediction call is attempted either way
    if client.is_online().await {
        info!("Backend online");
    } else {
        warn!("Backend offline");
    }

    let record = collect_features(args)?;
    debug!(
        "Requesting prediction for [{}, {}, {}, {}]",
        record.sepal_length, record.sepal_width, record.petal_length, record.petal_width
    );

    match client.predict(&record).await {
        Ok(class_id) => match Species::from_class_id(class_id) {
            Some(flower) => info!("The flower predicted is: {}", flower),
            None => {
                error!("Invalid prediction response");
                error!("Unexpected class id: {}", class_id);
            }
        },
        Err(ApiError::Status { status, detail }) => {
            error!("Status: {}. Check backend", status.as_u16());
            if let Some(detail) = detail {
                debug!("Backend detail: {}", detail);
            }
        }
        Err(ApiError::Transport(cause)) => {
            error!("Backend error. Refresh and retry");
            debug!("Prediction error: {}", cause);
        }
    }

    Ok(())
}

/// Build the measurement record, preferring a test file over the manual
/// flags whenever one was supplied.
fn collect_features(args: &PredictArgs) -> Result<FeatureRecord> {
    if let Some(path) = &args.input_file {
        let record = input::load_test_file(path)?;
        info!("Using test file {}", path.display());
        return Ok(record);
    }

    Ok(FeatureRecord::new(
        args.sepal_length,
        args.sepal_width,
        args.petal_length,
        args.petal_width,
    ))
}
