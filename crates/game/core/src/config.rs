use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::schema::{Schema, Score};

/// Report settings for rendering an ability set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    /// Score values covered by the distribution column. Palettes whose highest
    /// score falls outside are left out of the report.
    pub spectrum: BTreeSet<Score>,
    /// Divisor for the "mod" column.
    pub modulus: Score,
}

impl RenderConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SPECTRUM: RangeInclusive<Score> = 1..=20;
    pub const DEFAULT_MODULUS: Score = 2;

    pub fn new(spectrum: BTreeSet<Score>, modulus: Score) -> Self {
        Self { spectrum, modulus }
    }

    pub fn with_range(range: RangeInclusive<Score>, modulus: Score) -> Self {
        Self::new(range.collect(), modulus)
    }

    /// Spectrum covering exactly the schema's scores, every score counted by "mod".
    pub fn for_schema(schema: &Schema) -> Self {
        Self::new(schema.scores().collect(), 1)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::with_range(Self::DEFAULT_SPECTRUM, Self::DEFAULT_MODULUS)
    }
}
