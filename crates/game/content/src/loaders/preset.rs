//! Custom preset loader.

use std::path::Path;

use crate::games::{CustomPreset, PresetDefinition};
use crate::loaders::{LoadResult, read_file};

/// Loader for user-defined point-buy systems from TOML files.
///
/// ```toml
/// name = "Standard Point Buy"
/// checkpoints = [8, 13, 15]
/// extent = 6
/// cutoff = 27
/// spectrum = [1, 20]
/// modulus = 2
/// bonus = [[2, 0, 0, 0, 0, 1]]
/// ```
pub struct PresetLoader;

impl PresetLoader {
    /// Load and build a preset from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing a PresetDefinition
    pub fn load(path: &Path) -> LoadResult<CustomPreset> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid preset {}: {}", path.display(), e))
    }

    /// Parse a TOML definition and build the preset.
    pub fn parse(content: &str) -> LoadResult<CustomPreset> {
        let definition: PresetDefinition = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse preset TOML: {}", e))?;

        Ok(CustomPreset::new(definition)?)
    }
}
