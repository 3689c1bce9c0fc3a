use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use api_client::storage::build_store;
use api_client::utils::cli;
use api_client::utils::config_loader;
use api_client::utils::constants::DEFAULT_CONFIG_PATH;
use api_client::utils::logging::{self, LogLevel};
use api_client::ApiClient;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send one request through the configured client
    Request {
        /// GET, POST, PUT, PATCH, DELETE, HEAD
        method: String,
        /// path relative to the base path, or an absolute URL
        path: String,
        /// JSON request body
        #[arg(short, long)]
        data: Option<String>,
        /// extra header as `Name: value`, overrides the default of the same name
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,
    },
    /// Print the URL a path resolves to, without sending anything
    Resolve { path: String },
    /// Inspect or change the stored bearer token
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    Get,
    Set { value: String },
    Clear,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // -------------------------------
    // 1. Load YAML config, start logging
    // -------------------------------

    let args = Args::parse();
    let service_config = config_loader::run(&args.config).await?;
    logging::run(&service_config, args.log_level);

    match args.command {
        // -------------------------------
        // 2. Build the client: one store read, no network
        // -------------------------------
        Command::Request { method, path, data, headers } => {
            let client = ApiClient::from_config(&service_config)?;

            // -------------------------------
            // 3. Send, print body to stdout
            // -------------------------------
            let outcome = cli::send_request(&client, &method, &path, data.as_deref(), &headers).await?;
            println!("{}", outcome.body);
            Ok(outcome.exit_code())
        }
        Command::Resolve { path } => {
            let client = ApiClient::from_config(&service_config)?;
            println!("{}", client.resolve(&path)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Token { action } => {
            let store = build_store(&service_config.storage);
            let key = &service_config.storage.token_key;
            match action {
                TokenAction::Get => match store.get(key)?.filter(|t| !t.is_empty()) {
                    Some(token) => println!("{}: {}", key, cli::mask(&token)),
                    None => println!("{}: <none>", key),
                },
                TokenAction::Set { value } => {
                    store.set(key, &value)?;
                    info!("token '{}' stored in {} store", key, store.kind());
                }
                TokenAction::Clear => {
                    let removed = store.remove(key)?;
                    info!("token '{}' removed: {}", key, removed);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
