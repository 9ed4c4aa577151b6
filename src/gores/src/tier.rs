//! Gores difficulty tier definitions
//!
//! Hardcoded table of the Gores difficulty tiers. Table order is the
//! display order of the tier-switch entries in every generated menu.

/// A Gores difficulty tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    /// Input subdirectory name, also the basis of the output directory name
    pub folder: &'static str,
    /// Small-caps label shown in generated menus
    pub display_name: &'static str,
    /// Server type identifier understood by the game server
    pub server_type: &'static str,
    /// Default star rating in [0,5]
    pub default_stars: i32,
    /// Default point value, used by the SQL import
    pub default_points: i32,
}

/// All Gores tiers in display order
pub const TIERS: &[Tier] = &[
    Tier {
        folder: "Easy",
        display_name: "Eᴀsʏ",
        server_type: "Gores_Easy",
        default_stars: 2,
        default_points: 5,
    },
    Tier {
        folder: "Main",
        display_name: "Mᴀɪɴ",
        server_type: "Gores_Main",
        default_stars: 3,
        default_points: 10,
    },
    Tier {
        folder: "Hard",
        display_name: "Hᴀʀᴅ",
        server_type: "Gores_Hard",
        default_stars: 4,
        default_points: 15,
    },
    Tier {
        folder: "Insane",
        display_name: "Iɴsᴀɴᴇ",
        server_type: "Gores_Insane",
        default_stars: 5,
        default_points: 20,
    },
    Tier {
        folder: "Extreme",
        display_name: "Exᴛʀᴇᴍᴇ",
        server_type: "Gores_Extreme",
        default_stars: 5,
        default_points: 25,
    },
    Tier {
        folder: "Mod",
        display_name: "Mᴏᴅ",
        server_type: "Gores_Mod",
        default_stars: 3,
        default_points: 10,
    },
    Tier {
        folder: "Solo",
        display_name: "Sᴏʟᴏ",
        server_type: "Gores_Solo",
        default_stars: 3,
        default_points: 10,
    },
];

/// Star glyph strings indexed by rating
const STAR_GLYPHS: [&str; 6] = ["✰✰✰✰✰", "★✰✰✰✰", "★★✰✰✰", "★★★✰✰", "★★★★✰", "★★★★★"];

/// Render a star rating as its glyph string, clamping to [0,5]
pub fn stars_glyph(stars: i32) -> &'static str {
    STAR_GLYPHS[stars.clamp(0, 5) as usize]
}

/// Get a tier by its folder key
pub fn tier_by_folder(folder: &str) -> Option<&'static Tier> {
    TIERS.iter().find(|t| t.folder == folder)
}

impl Tier {
    /// Output directory name under the types root, e.g. `gores.easy`
    pub fn config_dir_name(&self) -> String {
        format!("gores.{}", self.folder.to_lowercase())
    }

    /// Server-relative path of this tier's mode-switch menu
    pub fn flexvotes_path(&self) -> String {
        format!("types/{}/flexvotes.cfg", self.config_dir_name())
    }

    /// Server-relative path of this tier's map voting menu
    pub fn votes_path(&self) -> String {
        format!("types/{}/votes.cfg", self.config_dir_name())
    }

    /// Server-relative path of this tier's reset script
    pub fn flexreset_path(&self) -> String {
        format!("types/{}/flexreset.cfg", self.config_dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tier_lookup() {
        assert_eq!(tier_by_folder("Easy").map(|t| t.server_type), Some("Gores_Easy"));
        assert_eq!(tier_by_folder("Solo").map(|t| t.default_points), Some(10));
        assert!(tier_by_folder("easy").is_none());
    }

    #[test]
    fn test_folder_keys_unique() {
        let folders: HashSet<_> = TIERS.iter().map(|t| t.folder).collect();
        assert_eq!(folders.len(), TIERS.len());
    }

    #[test]
    fn test_stars_glyph_clamping() {
        assert_eq!(stars_glyph(0), "✰✰✰✰✰");
        assert_eq!(stars_glyph(3), "★★★✰✰");
        assert_eq!(stars_glyph(5), "★★★★★");
        assert_eq!(stars_glyph(7), stars_glyph(5));
        assert_eq!(stars_glyph(-1), stars_glyph(0));
    }

    #[test]
    fn test_config_paths() {
        let tier = tier_by_folder("Easy").unwrap();
        assert_eq!(tier.config_dir_name(), "gores.easy");
        assert_eq!(tier.flexvotes_path(), "types/gores.easy/flexvotes.cfg");
        assert_eq!(tier.votes_path(), "types/gores.easy/votes.cfg");
        assert_eq!(tier.flexreset_path(), "types/gores.easy/flexreset.cfg");
    }
}
