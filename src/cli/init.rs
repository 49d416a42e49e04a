//! Init command implementation

use std::path::Path;

use anyhow::{Result, bail};
use tracing::info;

use reelsmith::config::Config;

/// Write a default config to `config_path`
pub fn init_command(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    Config::default().save_to_file(config_path)?;
    info!("Created {}", config_path.display());
    println!("Created {}", config_path.display());

    Ok(())
}
