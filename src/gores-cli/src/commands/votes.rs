//! Vote-menu generation command handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use gores::generate_configs;

use crate::config::Config;

/// Handle the votes command
pub fn handle(maps: Option<PathBuf>, types: Option<PathBuf>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let maps_root = config.resolve_maps(maps);
    let types_root = config.resolve_types(types);

    let report = generate_configs(&maps_root, &types_root)
        .with_context(|| format!("Failed to generate configs into {}", types_root.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== Vote Menu Generation ===");
    println!("Maps root:  {}", maps_root.display());
    println!("Types root: {}", types_root.display());
    println!();

    for tier in &report.tiers {
        if tier.dir_missing {
            println!("⚠ {:<8} no map directory, empty menu written", tier.folder);
        } else {
            println!("✓ {:<8} {} maps", tier.folder, tier.maps);
        }
    }

    println!();
    println!(
        "✓ Wrote {} files for {} maps across {} tiers",
        report.files_written,
        report.total_maps,
        report.tiers.len()
    );

    Ok(())
}
