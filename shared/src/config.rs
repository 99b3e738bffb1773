//! User-facing switches for the three splash sources.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use bevy_log::info;
use ron::de::from_str;
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};

/// Which splash sources are active. Reloaded whenever the player applies
/// settings; missing fields fall back to enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterPhysicsConfig {
    /// Dropped and thrown items.
    pub item_effects: bool,
    /// Arrows and bolts.
    pub arrow_effects: bool,
    /// The player's melee swings.
    pub weapon_effects: bool,
}

impl Default for WaterPhysicsConfig {
    fn default() -> Self {
        Self {
            item_effects: true,
            arrow_effects: true,
            weapon_effects: true,
        }
    }
}

/// Reads the configuration from a RON file. A missing file is not an error
/// and yields the defaults.
pub fn load_config(path: &Path) -> Result<WaterPhysicsConfig, Box<dyn std::error::Error>> {
    if !path.exists() {
        info!(
            "Water physics config not found: {}. Using defaults.",
            path.display()
        );
        return Ok(WaterPhysicsConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: WaterPhysicsConfig = from_str(&contents)?;

    info!("Loaded water physics config from {}", path.display());
    Ok(config)
}

pub fn save_config(
    path: &Path,
    config: &WaterPhysicsConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let pretty_config = PrettyConfig::new().with_depth_limit(2);

    let serialized = ron::ser::to_string_pretty(config, pretty_config)?;
    let mut file = File::create(path)?;
    file.write_all(serialized.as_bytes())?;
    info!("Water physics config saved to {}", path.display());
    Ok(())
}
