//! Provenance Console Command Line Tool
//!
//! This binary is the command-line interface for the provenance console.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;

use provenance_console::api::{ApiClient, DocumentUpload, ProvenanceApi};
use provenance_console::common::{init_logger, ConsoleError, Result};
use provenance_console::config::{validate_config, ConfigLoader, ConfigOverrides, ConsoleConfig};
use provenance_console::pipeline::{AdminPipeline, BatchForm};
use provenance_console::ui::pipeline_cards;
use provenance_console::verify::VerifyView;
use provenance_console::{APP_NAME, VERSION};

/// Provenance Console: admin pipeline and public verification for supplement batches
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// Configuration file (JSON); defaults to provenance.json when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL
    #[arg(long, global = true, env = "PROVENANCE_API_BASE_URL")]
    api_base_url: Option<String>,

    /// Transaction explorer base URL
    #[arg(long, global = true, env = "PROVENANCE_TX_EXPLORER_BASE_URL")]
    tx_explorer_base_url: Option<String>,

    /// Admin API key
    #[arg(long, global = true, env = "PROVENANCE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "PROVENANCE_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a batch record
    Create(BatchArgs),
    /// Upload a lab-report PDF for a batch
    Upload {
        #[arg(long)]
        batch_id: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Run extraction over the uploaded report
    Extract(BatchIdArg),
    /// Show the batch attestation
    Attestation(BatchIdArg),
    /// Publish the attestation hash on-chain
    Publish(BatchIdArg),
    /// Show a batch record
    Show(BatchIdArg),
    /// Verify a batch (no API key needed)
    Verify {
        batch_id: String,
    },
    /// Run create, upload, extract, attestation and publish in order
    Pipeline {
        #[command(flatten)]
        batch: BatchArgs,
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
struct BatchIdArg {
    #[arg(long)]
    batch_id: String,
}

#[derive(Args, Debug)]
struct BatchArgs {
    #[arg(long)]
    batch_id: String,
    #[arg(long)]
    product_name: String,
    #[arg(long)]
    supplement_type: String,
    #[arg(long)]
    manufacturer: String,
    /// ISO date (YYYY-MM-DD)
    #[arg(long)]
    production_date: String,
    /// ISO date (YYYY-MM-DD)
    #[arg(long)]
    expires_date: Option<String>,
}

impl From<BatchArgs> for BatchForm {
    fn from(args: BatchArgs) -> Self {
        BatchForm {
            batch_id: args.batch_id,
            product_name: args.product_name,
            supplement_type: args.supplement_type,
            manufacturer: args.manufacturer,
            production_date: args.production_date,
            expires_date: args.expires_date.unwrap_or_default(),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let overrides = ConfigOverrides {
        api_base_url: cli.api_base_url,
        tx_explorer_base_url: cli.tx_explorer_base_url,
        api_key: cli.api_key,
        log_level: cli.log_level,
    };
    let config = ConsoleConfig::load(cli.config.as_deref())?.merge(overrides);

    init_logger(config.effective_log_level());
    info!("Starting {} v{}", APP_NAME, VERSION);

    validate_config(&config)?;
    debug!("Configuration: {:?}", config);

    let client = ApiClient::from_config(&config);

    match cli.command {
        Command::Create(batch) => {
            let form = BatchForm::from(batch);
            if !form.has_required_fields() {
                return Err(ConsoleError::InvalidInput(
                    "product name, supplement type, manufacturer and production date are required"
                        .to_string(),
                ));
            }
            let (api_key, _) = require_access(&config, &form.batch_id)?;
            print_json(&client.create_batch(&form.to_payload(), api_key).await?)
        }
        Command::Upload { batch_id, file } => {
            let (api_key, batch_id) = require_access(&config, &batch_id)?;
            let document = DocumentUpload::from_path(&file).await?;
            print_json(&client.upload_document(batch_id, &document, api_key).await?)
        }
        Command::Extract(arg) => {
            let (api_key, batch_id) = require_access(&config, &arg.batch_id)?;
            print_json(&client.extract_batch(batch_id, api_key).await?)
        }
        Command::Attestation(arg) => {
            let (api_key, batch_id) = require_access(&config, &arg.batch_id)?;
            print_json(&client.get_attestation(batch_id, api_key).await?)
        }
        Command::Publish(arg) => {
            let (api_key, batch_id) = require_access(&config, &arg.batch_id)?;
            print_json(&client.publish_batch(batch_id, api_key).await?)
        }
        Command::Show(arg) => {
            let (api_key, batch_id) = require_access(&config, &arg.batch_id)?;
            print_json(&client.get_batch(batch_id, api_key).await?)
        }
        Command::Verify { batch_id } => verify(client, &config, batch_id).await,
        Command::Pipeline { batch, file } => {
            let document = DocumentUpload::from_path(&file).await?;

            let pipeline = AdminPipeline::new(client);
            pipeline.set_api_key(config.api_key().unwrap_or_default()).await;
            pipeline.set_form(batch.into()).await;
            pipeline.select_file(Some(document)).await;

            let outcome = pipeline.run_all().await;
            for card in pipeline_cards(&pipeline.view().await) {
                println!("{}", card);
            }
            outcome
        }
    }
}

async fn verify(client: ApiClient, config: &ConsoleConfig, batch_id: String) -> Result<()> {
    let mut view = VerifyView::new(client).with_explorer(config.tx_explorer_base_url());
    view.set_batch_id(batch_id);
    if !view.can_submit() {
        return Err(ConsoleError::InvalidInput("batch id is required".to_string()));
    }

    view.submit().await;

    println!("{}", view.form_card());
    println!("{}", view.result_card());

    match view.error() {
        Some(message) => Err(ConsoleError::Other(message.to_string())),
        None => Ok(()),
    }
}

/// API key and trimmed batch id, both required for admin calls
fn require_access<'a>(config: &'a ConsoleConfig, batch_id: &'a str) -> Result<(&'a str, &'a str)> {
    let api_key = config.api_key().ok_or_else(|| {
        ConsoleError::InvalidInput("API key missing (use --api-key or PROVENANCE_API_KEY)".to_string())
    })?;

    let batch_id = batch_id.trim();
    if batch_id.is_empty() {
        return Err(ConsoleError::InvalidInput("batch id is required".to_string()));
    }

    Ok((api_key, batch_id))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
