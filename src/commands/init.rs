use crate::config::SAMPLE_ROSTER;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from("trackmap.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Roster file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, SAMPLE_ROSTER)?;
    println!("Created trackmap.toml roster file");

    Ok(())
}
