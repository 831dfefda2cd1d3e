//! Disco Elysium attributes.
//!
//! Base palette 1 1 1 1 with 8 points to spend; attributes range over 1..=6.
//! The budget is fixed at twice the extent instead of the half-volume default.

use palette_core::{Abilities, Cost, RenderConfig, Schema, Score};
use tracing::info;

use super::{Game, GamePreset};
use crate::error::PresetResult;

#[derive(Clone, Debug)]
pub struct DiscoElysium {
    abilities: Abilities,
}

impl DiscoElysium {
    pub const CHECKPOINTS: [Score; 2] = [1, 6];
    pub const EXTENT: usize = 4;
    pub const CUTOFF: Cost = 2 * Self::EXTENT as Cost;

    pub fn new() -> PresetResult<Self> {
        let abilities = Abilities::new(
            Schema::new(&Self::CHECKPOINTS)?,
            Self::EXTENT,
            Some(Self::CUTOFF),
        )?;

        info!(palettes = abilities.len(), "built Disco Elysium palettes");

        Ok(Self { abilities })
    }
}

impl GamePreset for DiscoElysium {
    fn name(&self) -> &str {
        Game::DiscoElysium.title()
    }

    fn abilities(&self) -> &Abilities {
        &self.abilities
    }

    fn render_config(&self) -> RenderConfig {
        RenderConfig::with_range(1..=6, 2)
    }
}
