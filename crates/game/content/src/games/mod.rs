//! Point-buy presets for known games.
//!
//! Each preset is a fixed configuration (schema checkpoints, extent, cutoff,
//! report settings) plus a two-stage build: enumerate the base palettes, then
//! augment them with race or levelling bonuses where the game has them.

pub mod custom;
pub mod cyberpunk_2077;
pub mod disco_elysium;
pub mod dungeons_and_dragons;

pub use custom::{CustomPreset, PresetDefinition};
pub use cyberpunk_2077::Cyberpunk2077;
pub use disco_elysium::DiscoElysium;
pub use dungeons_and_dragons::{DungeonsAndDragons, Race, Subrace, Tier};

use std::collections::BTreeSet;

use palette_core::{Abilities, Cost, RenderConfig, Schema, Score, Scores};
use tracing::debug;

use crate::error::PresetResult;

/// Common surface of every preset, consumed by front ends.
pub trait GamePreset {
    /// Game title.
    fn name(&self) -> &str;

    /// One-line summary of the chosen options, used as a listing header.
    fn description(&self) -> String {
        self.name().to_string()
    }

    /// The final (possibly augmented) palettes.
    fn abilities(&self) -> &Abilities;

    fn render_config(&self) -> RenderConfig;

    fn render(&self) -> Vec<String> {
        self.abilities().render_with(&self.render_config())
    }
}

/// Built-in games.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Game {
    #[strum(serialize = "dnd", to_string = "Dungeons and Dragons")]
    DungeonsAndDragons,
    #[strum(serialize = "cyberpunk", to_string = "Cyberpunk 2077")]
    Cyberpunk2077,
    #[strum(serialize = "disco", to_string = "Disco Elysium")]
    DiscoElysium,
}

impl Game {
    pub fn title(self) -> &'static str {
        self.into()
    }
}

/// Every distinct spread of `points` bonus points over `extent` attributes.
///
/// Built from the two-level schema `[0, points]` spent exactly, then expanded
/// to all orderings so each point can land on any attribute.
pub(crate) fn levelling_bonuses(points: Score, extent: usize) -> PresetResult<BTreeSet<Scores>> {
    let levels = Abilities::new(
        Schema::new(&[0, points])?,
        extent,
        Some(Cost::from(points.unsigned_abs())),
    )?;

    Ok(levels.expand_permutations())
}

/// Clamp a user-provided count into its documented bounds.
pub(crate) fn clamp_input(name: &'static str, value: Score, min: Score, max: Score) -> Score {
    let clamped = value.clamp(min, max);
    if clamped != value {
        debug!(input = name, value, clamped, "clamped out-of-range preset input");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn game_names_parse_both_ways() {
        assert_eq!(Game::from_str("dnd").unwrap(), Game::DungeonsAndDragons);
        assert_eq!(Game::from_str("Disco Elysium").unwrap(), Game::DiscoElysium);
        assert_eq!(Game::from_str("CYBERPUNK").unwrap(), Game::Cyberpunk2077);
        assert_eq!(Game::Cyberpunk2077.to_string(), "Cyberpunk 2077");
        assert_eq!(Game::DiscoElysium.title(), "Disco Elysium");
        assert_eq!(Game::iter().count(), 3);
    }

    #[test]
    fn levelling_bonuses_cover_every_slot() {
        let bonuses = levelling_bonuses(1, 5).unwrap();

        assert_eq!(bonuses.len(), 5);
        assert!(bonuses.contains(&Scores::new([0, 0, 1, 0, 0])));
    }

    #[test]
    fn zero_points_is_the_neutral_bonus() {
        let bonuses = levelling_bonuses(0, 4).unwrap();

        assert_eq!(bonuses.into_iter().collect::<Vec<_>>(), vec![Scores::new([0, 0, 0, 0])]);
    }

    #[test]
    fn clamp_input_bounds() {
        assert_eq!(clamp_input("level", 0, 1, 50), 1);
        assert_eq!(clamp_input("level", 99, 1, 50), 50);
        assert_eq!(clamp_input("level", 7, 1, 50), 7);
    }
}
