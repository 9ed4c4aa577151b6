//! Stock menu patching
//!
//! Splices a Gores mode-switch block into the stock DDNet `flexvotes.cfg`
//! files so players can hop from the stock pool into the Gores menus.

use std::fs;
use std::path::Path;

use serde::Serialize;

/// Stock DDNet type directories whose menus receive the switch block
pub const DDNET_TYPES: &[&str] = &[
    "brutal",
    "insane",
    "dummy",
    "ddmax.easy",
    "ddmax.next",
    "ddmax.nut",
    "ddmax.pro",
    "oldschool",
    "solo",
    "race",
    "fun",
    "event",
];

/// Presence of this label anywhere in a menu means it was already patched
pub const MARKER: &str = "Gᴏʀᴇs Mᴀᴘs";

const SERVER_TYPE_PREFIX: &str = "sv_server_type";

const SWITCH_BLOCK: &[&str] = &[
    "add_vote \"☒ DDNᴇᴛ Mᴀᴘs\" \"info\"",
    "add_vote \"☐ Gᴏʀᴇs Mᴀᴘs\" \"clear_votes; exec types/gores.main/flexvotes.cfg; exec types/gores.main/votes.cfg\"",
    "add_vote \" \" \"info\"",
];

/// Result of splicing one menu's content
#[derive(Debug, PartialEq, Eq)]
pub enum Spliced {
    /// New content with the switch block inserted
    Patched(String),
    /// The marker label is already present
    AlreadyPatched,
    /// No `sv_server_type` line to anchor the insertion
    MarkerMissing,
}

/// Per-file patch outcome, as reported to the caller
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "detail")]
pub enum PatchOutcome {
    Patched,
    AlreadyPatched,
    MarkerMissing,
    Failed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetReport {
    pub type_name: String,
    pub path: String,
    #[serde(flatten)]
    pub outcome: PatchOutcome,
}

/// Summary of a patch run over all targets
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchReport {
    pub targets: Vec<TargetReport>,
    pub patched: usize,
    pub already_patched: usize,
    pub marker_missing: usize,
    pub failed: usize,
}

/// Insert the switch block into one menu's content.
///
/// The block lands directly after the first line starting with
/// `sv_server_type`, which every stock menu opens with. Content already
/// carrying the marker is left untouched so repeated runs cannot stack
/// duplicate blocks.
pub fn splice_switch_block(content: &str) -> Spliced {
    if content.contains(MARKER) {
        return Spliced::AlreadyPatched;
    }

    let lines: Vec<&str> = content.lines().collect();
    let Some(anchor) = lines
        .iter()
        .position(|l| l.starts_with(SERVER_TYPE_PREFIX))
    else {
        return Spliced::MarkerMissing;
    };

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + SWITCH_BLOCK.len());
    out.extend_from_slice(&lines[..=anchor]);
    out.extend_from_slice(SWITCH_BLOCK);
    out.extend_from_slice(&lines[anchor + 1..]);

    let mut patched = out.join("\n");
    if content.ends_with('\n') {
        patched.push('\n');
    }
    Spliced::Patched(patched)
}

/// Patch the `flexvotes.cfg` of every listed type under `types_root`.
///
/// Failures on one file never abort the run; each target's outcome is
/// recorded in the report.
pub fn patch_flexvotes(types_root: &Path, type_names: &[String]) -> PatchReport {
    let mut report = PatchReport::default();

    for type_name in type_names {
        let path = types_root.join(type_name).join("flexvotes.cfg");
        let outcome = patch_one(&path);

        match &outcome {
            PatchOutcome::Patched => report.patched += 1,
            PatchOutcome::AlreadyPatched => report.already_patched += 1,
            PatchOutcome::MarkerMissing => report.marker_missing += 1,
            PatchOutcome::Failed(_) => report.failed += 1,
        }

        report.targets.push(TargetReport {
            type_name: type_name.clone(),
            path: path.display().to_string(),
            outcome,
        });
    }

    report
}

fn patch_one(path: &Path) -> PatchOutcome {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => return PatchOutcome::Failed(e.to_string()),
    };

    match splice_switch_block(&content) {
        Spliced::AlreadyPatched => PatchOutcome::AlreadyPatched,
        Spliced::MarkerMissing => PatchOutcome::MarkerMissing,
        Spliced::Patched(new_content) => match fs::write(path, new_content) {
            Ok(()) => PatchOutcome::Patched,
            Err(e) => PatchOutcome::Failed(e.to_string()),
        },
    }
}
