//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up gores CLI defaults.

use std::path::Path;

use anyhow::Result;

use crate::config::Config;

/// Handle the configure command
pub fn handle(maps: Option<&Path>, types: Option<&Path>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config)?;
        return Ok(());
    }

    if maps.is_none() && types.is_none() {
        show_usage();
        return Ok(());
    }

    if let Some(dir) = maps {
        config.set_maps_dir(dir);
    }
    if let Some(dir) = types {
        config.set_types_dir(dir);
    }
    config.save()?;

    if let Some(dir) = maps {
        println!("Maps directory configured: {}", dir.display());
    }
    if let Some(dir) = types {
        println!("Types directory configured: {}", dir.display());
    }
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) -> Result<()> {
    match &config.maps_dir {
        Some(dir) => println!("Maps directory:  {}", dir.display()),
        None => println!("Maps directory:  (not set, defaults to ./gores)"),
    }
    match &config.types_dir {
        Some(dir) => println!("Types directory: {}", dir.display()),
        None => println!("Types directory: (not set, defaults to ./types)"),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }

    Ok(())
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: gores configure --maps MAPS_DIR --types TYPES_DIR");
    println!("   or: gores configure --show");
    println!();
    println!("Note: configured directories are used whenever a command is run");
    println!("      without explicit --maps/--types flags.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_usage_does_not_panic() {
        show_usage();
    }

    #[test]
    fn test_config_path_exists() {
        let result = Config::config_path();
        assert!(result.is_ok());
    }
}
