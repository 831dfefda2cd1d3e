//! Game presets and data-driven point-buy definitions.
//!
//! This crate houses the static game content built on `palette-core`:
//! - Dungeons & Dragons tiers and racial bonus tables
//! - Cyberpunk 2077 levelling
//! - Disco Elysium attributes
//! - Custom point-buy systems (data-driven via TOML)
//!
//! All presets share the [`GamePreset`] surface consumed by front ends.

pub mod error;
pub mod games;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use error::{PresetError, PresetResult};
pub use games::{
    CustomPreset, Cyberpunk2077, DiscoElysium, DungeonsAndDragons, Game, GamePreset,
    PresetDefinition, Race, Subrace, Tier,
};

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, PresetLoader};
