//! Config tree generation
//!
//! Scans the per-tier map directories and writes the three voting-menu
//! files into each tier's config directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::scan::scan_map_names;
use crate::sql::TierMaps;
use crate::tier::TIERS;
use crate::votes::{render_flexreset, render_flexvotes, render_votes, FLEXRESET_FILE, FLEXVOTES_FILE, VOTES_FILE};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("maps directory not found: {0}")]
    MissingRoot(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Per-tier scan outcome
#[derive(Debug, Clone, Serialize)]
pub struct TierReport {
    pub folder: String,
    pub maps: usize,
    pub dir_missing: bool,
}

/// Summary of a full generation run
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateReport {
    pub tiers: Vec<TierReport>,
    pub total_maps: usize,
    pub files_written: usize,
}

/// Scan every tier's map directory under `maps_root`.
///
/// Missing per-tier directories yield empty map lists; a missing root is
/// an error because it usually means a mistyped path.
pub fn collect_tier_maps(maps_root: &Path) -> Result<Vec<TierMaps>, GenerateError> {
    if !maps_root.is_dir() {
        return Err(GenerateError::MissingRoot(maps_root.to_path_buf()));
    }

    let mut out = Vec::with_capacity(TIERS.len());
    for tier in TIERS {
        let maps = scan_map_names(&maps_root.join(tier.folder))?;
        out.push(TierMaps { tier, maps });
    }
    Ok(out)
}

/// Generate the full voting-config tree.
///
/// For each tier this writes `flexvotes.cfg`, `votes.cfg` and
/// `flexreset.cfg` into `types_root/gores.<tier>/`, creating directories
/// as needed. Output depends only on the scanned map names, so a rerun
/// over unchanged input rewrites identical bytes.
pub fn generate_configs(maps_root: &Path, types_root: &Path) -> Result<GenerateReport, GenerateError> {
    let tier_maps = collect_tier_maps(maps_root)?;

    let mut report = GenerateReport::default();
    for tm in &tier_maps {
        let tier_dir = maps_root.join(tm.tier.folder);
        let out_dir = types_root.join(tm.tier.config_dir_name());
        fs::create_dir_all(&out_dir)?;

        fs::write(out_dir.join(FLEXVOTES_FILE), render_flexvotes(tm.tier))?;
        fs::write(out_dir.join(VOTES_FILE), render_votes(tm.tier, &tm.maps))?;
        fs::write(out_dir.join(FLEXRESET_FILE), render_flexreset(tm.tier))?;

        report.tiers.push(TierReport {
            folder: tm.tier.folder.to_string(),
            maps: tm.maps.len(),
            dir_missing: !tier_dir.is_dir(),
        });
        report.total_maps += tm.maps.len();
        report.files_written += 3;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn seed_maps(root: &Path, tier: &str, names: &[&str]) {
        let dir = root.join(tier);
        fs::create_dir_all(&dir).unwrap();
        for name in names {
            File::create(dir.join(format!("{name}.map"))).unwrap();
        }
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = generate_configs(&dir.path().join("nope"), dir.path()).unwrap_err();
        assert!(matches!(err, GenerateError::MissingRoot(_)));
    }

    #[test]
    fn test_generates_three_files_per_tier() {
        let maps = TempDir::new().unwrap();
        let types = TempDir::new().unwrap();
        seed_maps(maps.path(), "Easy", &["Aip-Gores", "Bounce"]);

        let report = generate_configs(maps.path(), types.path()).unwrap();

        assert_eq!(report.files_written, TIERS.len() * 3);
        assert_eq!(report.total_maps, 2);

        let easy = types.path().join("gores.easy");
        assert!(easy.join("flexvotes.cfg").is_file());
        assert!(easy.join("votes.cfg").is_file());
        assert!(easy.join("flexreset.cfg").is_file());

        let votes = fs::read_to_string(easy.join("votes.cfg")).unwrap();
        assert!(votes.contains("Aip-Gores"));
        assert!(votes.contains("Bounce"));
    }

    #[test]
    fn test_missing_tier_dir_yields_empty_menu() {
        let maps = TempDir::new().unwrap();
        let types = TempDir::new().unwrap();
        seed_maps(maps.path(), "Easy", &["Only"]);

        let report = generate_configs(maps.path(), types.path()).unwrap();

        let hard = report.tiers.iter().find(|t| t.folder == "Hard").unwrap();
        assert!(hard.dir_missing);
        assert_eq!(hard.maps, 0);

        // The tier still gets its menu files so exec paths stay valid
        let votes = fs::read_to_string(types.path().join("gores.hard").join("votes.cfg")).unwrap();
        assert!(votes.contains("─── GORES HARD MAPS ───"));
        assert!(!votes.contains("change_map"));
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let maps = TempDir::new().unwrap();
        let types = TempDir::new().unwrap();
        seed_maps(maps.path(), "Main", &["Z9", "Z10", "Alpha"]);

        generate_configs(maps.path(), types.path()).unwrap();
        let first = fs::read_to_string(types.path().join("gores.main").join("votes.cfg")).unwrap();

        generate_configs(maps.path(), types.path()).unwrap();
        let second = fs::read_to_string(types.path().join("gores.main").join("votes.cfg")).unwrap();

        assert_eq!(first, second);
        // Natural order, not lexicographic
        let z9 = first.find("Z9").unwrap();
        let z10 = first.find("Z10").unwrap();
        assert!(z9 < z10);
    }
}
