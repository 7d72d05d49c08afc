use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use tmdb_gateway::app::{run_operation, usage};
use tmdb_gateway::utils::{check_env_var, init_tracing};
use tmdb_gateway::TmdbClient;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_result = dotenv();
    init_tracing();
    match dotenv_result {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) => warn!("No .env file loaded ({}) - relying on environment", e),
    }

    let mut args = env::args().skip(1);
    let op = match args.next() {
        Some(op) if op != "--help" && op != "-h" => op,
        _ => {
            eprint!("{}", usage());
            return Ok(());
        }
    };
    let rest: Vec<String> = args.collect();

    check_env_var("TMDB_API_KEY")?;
    let client = TmdbClient::from_env()?;

    let value = run_operation(&client, &op, &rest).await?;
    let pretty = serde_json::to_string_pretty(&value).context("Failed to render JSON")?;
    println!("{pretty}");
    Ok(())
}
