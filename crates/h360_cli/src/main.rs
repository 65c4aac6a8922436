use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use h360_core::widgets::{AGE, BLOOD_PRESSURE, CHOLESTEROL, MAX_HEART_RATE};
use h360_core::{PredictionRequest, ScalingMode, Sex, YesNo};
use h360_inference::{Config, ModelKind, ModelSource, RiskPredictor, DEFAULT_MODEL_PATH};
use h360_web::AppState;

mod logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "Health360 heart disease risk prediction", long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
struct ModelArgs {
    /// Path of the serialized model artifact
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,
    /// Fetch the artifact over HTTP instead of reading it from disk
    #[arg(long)]
    model_url: Option<String>,
    /// How inputs are normalized before inference
    #[arg(long, value_enum, default_value_t = ScalingMode::PerRequest)]
    scaling: ScalingMode,
}

impl ModelArgs {
    fn config(&self) -> Config {
        let source = match &self.model_url {
            Some(url) => ModelSource::Url(url.clone()),
            None => ModelSource::Path(self.model.clone()),
        };
        Config {
            source,
            model_kind: ModelKind::Dense,
            scaling: self.scaling,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the web app
    Serve {
        #[arg(long, default_value = "127.0.0.1:8501")]
        bind: String,
        #[command(flatten)]
        model: ModelArgs,
    },
    /// Score a single set of inputs and print the result
    Predict {
        #[arg(long, value_parser = clap::value_parser!(u32).range(AGE.min as i64..=AGE.max as i64))]
        age: u32,
        #[arg(long, value_enum)]
        sex: Sex,
        #[arg(long, value_parser = clap::value_parser!(u32).range(CHOLESTEROL.min as i64..=CHOLESTEROL.max as i64))]
        cholesterol: u32,
        #[arg(long, value_parser = clap::value_parser!(u32).range(BLOOD_PRESSURE.min as i64..=BLOOD_PRESSURE.max as i64))]
        blood_pressure: u32,
        #[arg(long, value_parser = clap::value_parser!(u32).range(MAX_HEART_RATE.min as i64..=MAX_HEART_RATE.max as i64))]
        max_heart_rate: u32,
        #[arg(long, value_enum)]
        exercise_angina: YesNo,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        model: ModelArgs,
    },
}

async fn load_predictor(args: &ModelArgs) -> anyhow::Result<RiskPredictor> {
    let config = args.config();
    let predictor = RiskPredictor::from_config(&config).await.map_err(|e| {
        anyhow::anyhow!("failed to load model ({:?}): {}", config.source, e)
    })?;
    info!(
        "🧠 Model {} loaded (scaling: {})",
        predictor.model_name(),
        predictor.scaling()
    );
    Ok(predictor)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Serve { bind, model } => {
            let predictor = load_predictor(&model).await?;
            h360_web::serve(AppState::new(predictor), &bind).await?;
        }
        Commands::Predict {
            age,
            sex,
            cholesterol,
            blood_pressure,
            max_heart_rate,
            exercise_angina,
            json,
            model,
        } => {
            let request = PredictionRequest {
                age,
                sex,
                cholesterol,
                blood_pressure,
                max_heart_rate,
                exercise_angina,
            };
            let predictor = load_predictor(&model).await?;
            let outcome = predictor.predict(&request).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{} (score {:.4})", outcome.risk, outcome.score);
            }
        }
    }

    Ok(())
}
