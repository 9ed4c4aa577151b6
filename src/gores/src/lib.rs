//! # gores
//!
//! Server tooling for Gores map pools on DDNet-style game servers.
//!
//! The crate scans per-difficulty map directories and renders everything a
//! server needs to expose those maps: per-tier voting menus, mode-switch
//! menus, reset scripts, a SQL import for the points table, and a patcher
//! that wires the Gores menus into the stock DDNet ones.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = gores::generate_configs(Path::new("gores"), Path::new("types"))?;
//! println!("{} maps across {} tiers", report.total_maps, report.tiers.len());
//! # Ok::<(), gores::GenerateError>(())
//! ```

pub mod escape;
pub mod generate;
pub mod patch;
pub mod scan;
pub mod sql;
pub mod tier;
pub mod votes;

#[doc(inline)]
pub use generate::{collect_tier_maps, generate_configs, GenerateError, GenerateReport};
#[doc(inline)]
pub use patch::{patch_flexvotes, PatchReport, DDNET_TYPES};
#[doc(inline)]
pub use sql::{render_sql_import, TierMaps};
#[doc(inline)]
pub use tier::{tier_by_folder, Tier, TIERS};
