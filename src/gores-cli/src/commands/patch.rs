//! Stock-menu patching command handler

use std::path::PathBuf;

use anyhow::{bail, Result};
use gores::patch::{patch_flexvotes, PatchOutcome};
use gores::DDNET_TYPES;

use crate::config::Config;

/// Handle the patch command
pub fn handle(types: Option<PathBuf>, targets: Vec<String>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let types_root = config.resolve_types(types);

    let names: Vec<String> = if targets.is_empty() {
        DDNET_TYPES.iter().map(|s| s.to_string()).collect()
    } else {
        targets
    };

    let report = patch_flexvotes(&types_root, &names);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("=== Stock Menu Patching ===");
        println!("Types root: {}", types_root.display());
        println!();

        for target in &report.targets {
            match &target.outcome {
                PatchOutcome::Patched => println!("✓ {:<12} patched", target.type_name),
                PatchOutcome::AlreadyPatched => {
                    println!("· {:<12} already patched", target.type_name);
                }
                PatchOutcome::MarkerMissing => {
                    println!("⚠ {:<12} no sv_server_type line, skipped", target.type_name);
                }
                PatchOutcome::Failed(err) => println!("✗ {:<12} {}", target.type_name, err),
            }
        }

        println!();
        println!(
            "{} patched, {} already patched, {} skipped, {} failed",
            report.patched, report.already_patched, report.marker_missing, report.failed
        );
    }

    if report.failed > 0 {
        bail!("{} of {} menus could not be patched", report.failed, report.targets.len());
    }

    Ok(())
}
