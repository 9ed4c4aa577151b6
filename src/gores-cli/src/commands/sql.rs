//! SQL import command handler

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gores::{collect_tier_maps, render_sql_import};

use crate::config::Config;

/// Handle the sql command
pub fn handle(maps: Option<PathBuf>, output: &Path) -> Result<()> {
    let config = Config::load()?;
    let maps_root = config.resolve_maps(maps);

    let tier_maps = collect_tier_maps(&maps_root)
        .with_context(|| format!("Failed to scan maps under {}", maps_root.display()))?;

    println!("=== SQL Import Generation ===");
    println!("Maps root: {}", maps_root.display());
    println!();

    let mut total = 0usize;
    for tm in &tier_maps {
        if tm.maps.is_empty() {
            println!("⚠ {:<8} no maps, skipped", tm.tier.folder);
        } else {
            println!("✓ {:<8} {} maps", tm.tier.folder, tm.maps.len());
            total += tm.maps.len();
        }
    }

    let script = render_sql_import(&tier_maps);
    fs::write(output, format!("{script}\n"))
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!();
    println!("✓ Wrote import script for {} maps to {}", total, output.display());

    Ok(())
}
