use std::path::Path;

use anyhow::{Context, Result};
use calview_core::config::CalviewConfig;
use owo_colors::OwoColorize;

pub fn run(path: Option<&Path>, init: bool) -> Result<()> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => CalviewConfig::config_path().context("Failed to locate config file")?,
    };

    if init {
        if config_path.exists() {
            anyhow::bail!("Config file already exists at {}", config_path.display());
        }
        CalviewConfig::create_default_config(&config_path)
            .with_context(|| format!("Failed to create {}", config_path.display()))?;
        println!("{} {}", "Created".green(), config_path.display());
        return Ok(());
    }

    let config = CalviewConfig::load_from(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!();
    println!("{}", "Settings".bold());
    println!("  visible_cap:            {}", config.visible_cap);
    println!("  modal_margin:           {}", config.modal_margin);
    println!("  expanded_aspect_ratio:  {}", config.expanded_aspect_ratio);
    println!("  compact_aspect_ratio:   {}", config.compact_aspect_ratio);
    println!("  modal_width:            {}", config.modal_width);
    println!("  modal_height:           {}", config.modal_height);

    Ok(())
}
