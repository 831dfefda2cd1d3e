//! Cyberpunk 2077 attribute points.
//!
//! Base palette 3 3 3 3 3 with 7 points to spend at character creation, and
//! one more attribute point per level from 2 to 50.

use palette_core::{Abilities, RenderConfig, Schema, Score};
use tracing::info;

use super::{Game, GamePreset, clamp_input, levelling_bonuses};
use crate::error::PresetResult;

#[derive(Clone, Debug)]
pub struct Cyberpunk2077 {
    level: Score,
    abilities: Abilities,
}

impl Cyberpunk2077 {
    pub const CHECKPOINTS: [Score; 2] = [3, 6];
    pub const EXTENT: usize = 5;
    pub const MIN_LEVEL: Score = 1;
    pub const MAX_LEVEL: Score = 50;

    /// Palettes available at `level`, clamped into `MIN_LEVEL..=MAX_LEVEL`.
    pub fn new(level: Score) -> PresetResult<Self> {
        let mut abilities = Abilities::new(Schema::new(&Self::CHECKPOINTS)?, Self::EXTENT, None)?;

        let level = clamp_input("level", level, Self::MIN_LEVEL, Self::MAX_LEVEL);
        if level > 1 {
            abilities.augment(&levelling_bonuses(level - 1, Self::EXTENT)?)?;
        }

        info!(level, palettes = abilities.len(), "built Cyberpunk 2077 palettes");

        Ok(Self { level, abilities })
    }

    pub fn level(&self) -> Score {
        self.level
    }
}

impl GamePreset for Cyberpunk2077 {
    fn name(&self) -> &str {
        Game::Cyberpunk2077.title()
    }

    fn description(&self) -> String {
        format!("{}: level {}", Game::Cyberpunk2077, self.level)
    }

    fn abilities(&self) -> &Abilities {
        &self.abilities
    }

    /// Even attribute values unlock perks, hence the mod 2 column.
    fn render_config(&self) -> RenderConfig {
        RenderConfig::with_range(1..=20, 2)
    }
}
