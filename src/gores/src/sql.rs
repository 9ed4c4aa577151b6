//! SQL import script generation
//!
//! Renders a batched `INSERT` script for the `gores_maps` points table.

use crate::escape::sql_string;
use crate::tier::Tier;

/// Maximum number of rows per `INSERT` statement
pub const BATCH_SIZE: usize = 100;

/// A tier together with the map names scanned from its directory
#[derive(Debug, Clone)]
pub struct TierMaps {
    pub tier: &'static Tier,
    pub maps: Vec<String>,
}

/// Render the full SQL import script for the given tiers.
///
/// Tiers without maps are skipped. Rows are batched into `INSERT`
/// statements of at most [`BATCH_SIZE`] rows each; map names are escaped
/// for single-quoted SQL literals.
pub fn render_sql_import(tier_maps: &[TierMaps]) -> String {
    let mut lines = Vec::new();

    lines.push("-- Gores map import script for the gores_maps table".to_string());
    lines.push("--".to_string());
    lines.push("-- Mapper defaults to 'Unknown'; adjust before importing if the".to_string());
    lines.push("-- real mapper names are known.".to_string());

    let mut total = 0usize;
    for tm in tier_maps {
        if tm.maps.is_empty() {
            continue;
        }
        total += tm.maps.len();

        lines.push(String::new());
        lines.push(format!("-- {} ({} maps)", tm.tier.folder, tm.maps.len()));

        for batch in tm.maps.chunks(BATCH_SIZE) {
            lines.push(String::new());
            lines.push(
                "INSERT INTO gores_maps (Map, Server, Mapper, Points, Stars) VALUES".to_string(),
            );
            for (i, map) in batch.iter().enumerate() {
                let terminator = if i + 1 == batch.len() { ";" } else { "," };
                lines.push(format!(
                    "  ('{}', '{}', 'Unknown', {}, {}){}",
                    sql_string(map),
                    tm.tier.server_type,
                    tm.tier.default_points,
                    tm.tier.default_stars,
                    terminator
                ));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!("-- Total: {} maps", total));

    lines.join("\n")
}
