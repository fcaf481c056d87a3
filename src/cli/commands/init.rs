use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default config to the current directory unless one already exists.
pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    let created = if config_path.exists() {
        false
    } else {
        fs::write(config_path, format!("{}\n", default_config_json()?))
            .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
        true
    };

    Ok(finish(
        CommandSummary::Init(InitSummary { created }),
        Vec::new(),
        0,
    ))
}
