use std::env;

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::CommonArgs;
use crate::{
    config::{Config, load_config},
    fetch::{DirFetcher, Fetch, HttpFetcher},
};

/// Load the config found from the working directory and apply CLI overrides.
pub fn load_command_config(common: &CommonArgs) -> Result<Config> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&cwd)?;
    if !loaded.from_file {
        debug!("No config file found, using defaults");
    }

    let mut config = loaded.config;
    if let Some(base_url) = &common.base_url {
        config.base_url = base_url.clone();
        config.validate()?;
    }
    Ok(config)
}

pub fn make_fetcher(common: &CommonArgs) -> Result<Box<dyn Fetch>> {
    let fetcher: Box<dyn Fetch> = match &common.from_dir {
        Some(dir) => Box::new(DirFetcher::new(dir)),
        None => Box::new(HttpFetcher::new()?),
    };
    Ok(fetcher)
}
