//! Voting-menu renderers
//!
//! Pure text renderers for the three per-tier artifacts. All filesystem
//! work happens in [`crate::generate`].

use crate::escape::cfg_arg;
use crate::tier::{stars_glyph, Tier, TIERS};

/// File name of the mode-switch menu inside a tier's config directory
pub const FLEXVOTES_FILE: &str = "flexvotes.cfg";
/// File name of the per-map voting menu
pub const VOTES_FILE: &str = "votes.cfg";
/// File name of the reset script
pub const FLEXRESET_FILE: &str = "flexreset.cfg";

/// Render the mode-switch menu (`flexvotes.cfg`) for one tier.
///
/// Lists every tier in table order; the current tier is marked `☒` with a
/// no-op action, every other tier clears the vote menu and loads its own
/// menu files.
pub fn render_flexvotes(tier: &Tier) -> String {
    let mut lines = Vec::new();

    lines.push(format!("sv_server_type \"{}\"", tier.server_type));
    lines.push(String::new());

    // Toggle between the stock DDNet pool and the Gores pool
    lines.push(
        "add_vote \"☐ DDNᴇᴛ Mᴀᴘs\" \"clear_votes; exec types/novice/flexvotes.cfg; exec types/novice/votes.cfg\""
            .to_string(),
    );
    lines.push("add_vote \"☒ Gᴏʀᴇs Mᴀᴘs\" \"info\"".to_string());
    lines.push("add_vote \" \" \"info\"".to_string());
    lines.push(String::new());

    for other in TIERS {
        let selected = other.folder == tier.folder;
        let checkbox = if selected { "☒" } else { "☐" };
        let command = if selected {
            "\"info\"".to_string()
        } else {
            format!(
                "\"clear_votes; exec {}; exec {}\"",
                other.flexvotes_path(),
                other.votes_path()
            )
        };
        lines.push(format!(
            "add_vote \"{} Gᴏʀᴇs {}\" {}",
            checkbox, other.display_name, command
        ));
    }

    lines.push("add_vote \"  \" \"info\"".to_string());
    lines.push(String::new());

    lines.push("add_vote \"Make sure no one is racing before voting!\" \"info\"".to_string());
    lines.push(format!(
        "add_vote \"Random Gores {} Map (Reason=Stars)\" \"sv_reset_file {}; random_map\"",
        tier.folder,
        tier.flexreset_path()
    ));
    lines.push(format!(
        "add_vote \"Random Gores {} Map Unfinished by Vote Caller (Reason=Stars)\" \"sv_reset_file {}; random_unfinished_map\"",
        tier.folder,
        tier.flexreset_path()
    ));
    lines.push("add_vote \"   \" \"info\"".to_string());

    lines.join("\n")
}

/// Render the per-map voting menu (`votes.cfg`) for one tier.
pub fn render_votes(tier: &Tier, maps: &[String]) -> String {
    let mut lines = Vec::new();

    lines.push("add_vote \" \" \"info\"".to_string());
    lines.push(format!(
        "add_vote \"─── GORES {} MAPS ───\" \"info\"",
        tier.folder.to_uppercase()
    ));

    let stars = stars_glyph(tier.default_stars);
    for map in maps {
        let name = cfg_arg(map);
        lines.push(format!(
            "add_vote \"{} | {}\" \"sv_reset_file {}; change_map \\\"{}\\\"\"",
            name,
            stars,
            tier.flexreset_path(),
            name
        ));
    }

    lines.join("\n")
}

/// Render the reset script (`flexreset.cfg`) for one tier.
pub fn render_flexreset(tier: &Tier) -> String {
    let mut lines = vec!["exec reset.cfg".to_string()];

    let solo = if tier.folder == "Solo" { 1 } else { 0 };
    lines.push(format!("sv_solo_server {}", solo));

    lines.push("sv_vote_kick 1".to_string());
    lines.push("sv_deepfly 0".to_string());
    lines.push("clear_votes".to_string());
    lines.push(format!("exec {}", tier.flexvotes_path()));
    lines.push(format!("exec {}", tier.votes_path()));

    lines.join("\n")
}
