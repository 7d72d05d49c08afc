use anyhow::{anyhow, Result};
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

pub fn check_env_var(var_name: &str) -> Result<()> {
    match env::var(var_name) {
        Ok(v) if !v.trim().is_empty() => {
            info!("Environment variable '{}' found.", var_name);
            Ok(())
        }
        _ => Err(anyhow!(
            "Environment variable '{}' not found. Please set it in your .env file.",
            var_name
        )),
    }
}

/// Parses an optional page argument; absent means the first page.
pub fn parse_page(arg: Option<&str>) -> Result<Option<u32>> {
    arg.map(|raw| {
        raw.parse::<u32>()
            .map_err(|_| anyhow!("page must be a positive integer, got '{}'", raw))
    })
    .transpose()
}

pub fn parse_id(arg: Option<&str>) -> Result<u64> {
    let raw = arg.ok_or_else(|| anyhow!("missing TMDB id"))?;
    if raw.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(id) = raw.parse() {
            return Ok(id);
        }
    }
    Err(anyhow!("'{}' is not a TMDB id", raw))
}
