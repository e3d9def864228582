use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardano_link::{
    CardanoLink, ConfirmationResult, EntityType, ExplorerProvider, NetworkType, SubmissionResult,
    config::Settings,
    domain::{compose_asset_id, explorer},
    service::PollPolicy,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// cardano-link - explorer links, existence checks and confirmation waits
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Network to use (mainnet or testnet); overrides the saved setting
    #[arg(long, global = true)]
    network: Option<NetworkType>,

    /// Explorer to link to (native, cardanoscan, cexplorer, adatools)
    #[arg(long, global = true)]
    explorer: Option<ExplorerProvider>,

    /// Blockfrost project id; overrides the saved setting
    #[arg(long, global = true)]
    project_id: Option<String>,

    /// Backend base URL, for self-hosted Blockfrost-compatible services
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the explorer URL for a value
    Url {
        value: String,
        /// Value type (transactionId, accountAddress, tokenPolicy, assetId)
        #[arg(short = 't', long = "type", default_value = "transactionId")]
        entity: EntityType,
        /// Open the link in the default browser
        #[arg(short, long)]
        open: bool,
    },
    /// Check whether a value exists on-chain
    Exists {
        value: String,
        /// Value type (transactionId, accountAddress, tokenPolicy, assetId)
        #[arg(short = 't', long = "type", default_value = "transactionId")]
        entity: EntityType,
    },
    /// Wait for a submitted transaction to be confirmed
    Wait {
        tx_id: String,
        /// Pause between polls in milliseconds
        #[arg(long, default_value_t = 2000)]
        interval_ms: u64,
        /// Number of polls before giving up
        #[arg(long, default_value_t = 60)]
        max_attempts: u32,
    },
    /// Build an asset id from a policy id and an asset name
    AssetId { policy_id: String, asset_name: String },
    /// Show or change saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the saved settings and their location
    Show,
    /// Save the default network
    SetNetwork { network: NetworkType },
    /// Save the default explorer
    SetExplorer { explorer: ExplorerProvider },
    /// Save the Blockfrost project id
    SetProjectId { project_id: String },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardano_link=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::load();
    apply_overrides(&cli, &mut settings);

    match cli.command {
        Commands::Url {
            value,
            entity,
            open,
        } => {
            let url = explorer::resolve(&value, entity, settings.network, settings.explorer);
            if url.is_empty() {
                eprintln!("Nothing to link: value is empty");
                return Ok(ExitCode::FAILURE);
            }
            println!("{url}");
            if open {
                open_in_browser(&url)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Exists { value, entity } => {
            let link = CardanoLink::connect(&settings).map_err(|e| e.into_report())?;
            let found = link.check_entity_exists(&value, entity).await;
            println!("{found}");
            Ok(if found {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Wait {
            tx_id,
            interval_ms,
            max_attempts,
        } => {
            let policy = PollPolicy {
                interval: Duration::from_millis(interval_ms),
                max_attempts,
            };
            let budget = policy.budget().ok_or_else(|| {
                color_eyre::eyre::eyre!("--interval-ms x --max-attempts is too large")
            })?;
            tracing::info!(tx_id, max_attempts, budget = ?budget, "Waiting for confirmation");

            let link = CardanoLink::connect(&settings)
                .map_err(|e| e.into_report())?
                .with_poll_policy(policy);
            wait_for(&link, &tx_id).await
        }
        Commands::AssetId {
            policy_id,
            asset_name,
        } => {
            println!("{}", compose_asset_id(&policy_id, &asset_name));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config { action } => handle_config(action),
    }
}

/// Command-line flags win over the saved settings.
fn apply_overrides(cli: &Cli, settings: &mut Settings) {
    if let Some(network) = cli.network {
        settings.network = network;
    }
    if let Some(explorer) = cli.explorer {
        settings.explorer = explorer;
    }
    if let Some(project_id) = &cli.project_id {
        settings.backend.project_id = Some(project_id.clone());
    }
    if let Some(base_url) = &cli.base_url {
        settings.backend.base_url = Some(base_url.clone());
    }
}

async fn wait_for(link: &CardanoLink, tx_id: &str) -> Result<ExitCode> {
    let cancel = async {
        if tokio::signal::ctrl_c().await.is_err() {
            // No signal handler available; never cancel.
            std::future::pending::<()>().await;
        }
    };

    let result = link
        .await_confirmation_or_cancel(&SubmissionResult::submitted(tx_id), cancel)
        .await;

    match result {
        ConfirmationResult::Confirmed(content) => {
            println!("{}", serde_json::to_string_pretty(&content)?);
            eprintln!(
                "Confirmed in block {} ({})",
                content.block_height,
                content.formatted_block_time()
            );
            Ok(ExitCode::SUCCESS)
        }
        other => {
            eprintln!("Transaction {tx_id}: {}", other.label());
            Ok(match other {
                ConfirmationResult::Cancelled => ExitCode::from(130),
                ConfirmationResult::TimedOut => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            })
        }
    }
}

fn open_in_browser(url: &str) -> Result<()> {
    open::that(url)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to open browser: {e}"))
}

fn handle_config(action: ConfigAction) -> Result<ExitCode> {
    // Only the saved file is touched here, never the CLI overrides.
    let mut saved = Settings::try_load_or_default()?;
    match action {
        ConfigAction::Show => {
            println!("# {}", Settings::config_path()?.display());
            println!("{}", serde_json::to_string_pretty(&saved)?);
            return Ok(ExitCode::SUCCESS);
        }
        ConfigAction::SetNetwork { network } => saved.network = network,
        ConfigAction::SetExplorer { explorer } => saved.explorer = explorer,
        ConfigAction::SetProjectId { project_id } => {
            saved.backend.project_id = Some(project_id);
        }
    }
    saved.save()?;
    tracing::info!("Settings saved");
    Ok(ExitCode::SUCCESS)
}
