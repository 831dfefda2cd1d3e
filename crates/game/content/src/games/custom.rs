//! User-defined point-buy systems.

use std::collections::BTreeSet;

use palette_core::{Abilities, Cost, RenderConfig, Schema, Score, Scores};
use tracing::info;

use super::GamePreset;
use crate::error::PresetResult;

/// Declarative description of a point-buy system.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresetDefinition {
    pub name: String,
    /// Ground score followed by the cost checkpoints.
    pub checkpoints: Vec<Score>,
    /// Number of attributes.
    pub extent: usize,
    /// Budget to spend; half the cost volume when omitted. `0` is a literal
    /// zero budget, not the default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cutoff: Option<Cost>,
    /// Inclusive `[low, high]` report range.
    #[cfg_attr(feature = "serde", serde(default))]
    pub spectrum: Option<[Score; 2]>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modulus: Option<Score>,
    /// Bonus vectors applied in order, each expanded to every placement.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonus: Vec<Vec<Score>>,
}

#[derive(Clone, Debug)]
pub struct CustomPreset {
    definition: PresetDefinition,
    abilities: Abilities,
}

impl CustomPreset {
    pub fn new(definition: PresetDefinition) -> PresetResult<Self> {
        let schema = Schema::new(&definition.checkpoints)?;
        let mut abilities = Abilities::new(schema, definition.extent, definition.cutoff)?;

        for bonus in &definition.bonus {
            let placements: BTreeSet<Scores> =
                Scores::new(bonus.clone()).distinct_permutations();
            abilities.augment(&placements)?;
        }

        info!(
            name = %definition.name,
            palettes = abilities.len(),
            "built custom palettes"
        );

        Ok(Self {
            definition,
            abilities,
        })
    }

    pub fn definition(&self) -> &PresetDefinition {
        &self.definition
    }
}

impl GamePreset for CustomPreset {
    fn name(&self) -> &str {
        &self.definition.name
    }

    fn abilities(&self) -> &Abilities {
        &self.abilities
    }

    /// Without an explicit range the report spans the ground score up to the
    /// highest member score, so augmented palettes stay visible.
    fn render_config(&self) -> RenderConfig {
        let modulus = self.definition.modulus.unwrap_or(1);

        match self.definition.spectrum {
            Some([low, high]) => RenderConfig::with_range(low..=high, modulus),
            None => {
                let schema = self.abilities.schema();
                let highest = self.abilities.iter().filter_map(Scores::highest).max();
                match (schema.ground(), highest) {
                    (Some(ground), Some(highest)) => {
                        RenderConfig::with_range(ground.min(highest)..=highest, modulus)
                    }
                    _ => RenderConfig {
                        modulus,
                        ..RenderConfig::for_schema(schema)
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PresetError;
    use palette_core::ConfigurationError;

    fn point_buy() -> PresetDefinition {
        PresetDefinition {
            name: "Point Buy".into(),
            checkpoints: vec![8, 13, 15],
            extent: 6,
            ..Default::default()
        }
    }

    #[test]
    fn defaults_follow_engine_rules() {
        let preset = CustomPreset::new(point_buy()).unwrap();

        assert_eq!(preset.abilities().cutoff(), 27);
        assert_eq!(preset.abilities().len(), 65);
        assert_eq!(preset.render().len(), 65);
    }

    #[test]
    fn bonus_vectors_apply_in_order() {
        let mut definition = point_buy();
        definition.bonus = vec![vec![2, 0, 0, 0, 0, 1]];
        let preset = CustomPreset::new(definition).unwrap();

        // same as the Dragonborn table entry
        assert_eq!(preset.abilities().len(), 381);
        assert_eq!(preset.render().len(), 381);
    }

    #[test]
    fn mismatched_bonus_is_rejected() {
        let mut definition = point_buy();
        definition.bonus = vec![vec![2, 1]];

        assert_eq!(
            CustomPreset::new(definition).unwrap_err(),
            PresetError::Configuration(ConfigurationError::PaletteLengthMismatch {
                expected: 6,
                found: 2
            })
        );
    }

    #[test]
    fn explicit_spectrum_filters_report() {
        let mut definition = point_buy();
        definition.spectrum = Some([8, 14]);
        definition.modulus = Some(2);
        let preset = CustomPreset::new(definition).unwrap();

        let config = preset.render_config();
        assert_eq!(config.modulus, 2);
        assert!(preset.render().len() < preset.abilities().len());
    }
}
