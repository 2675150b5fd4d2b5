use anyhow::Result;
use colored::Colorize;

use crate::config::{BookshelfConfig, CONFIG_FILE_NAME};

pub fn handle_init(force: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    BookshelfConfig::default().save(&config_path)?;
    tracing::info!(path = %config_path.display(), "Wrote default config");

    println!("{} {}", "Created".green(), config_path.display());
    Ok(())
}
