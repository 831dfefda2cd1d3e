//! Enumeration of every palette that spends a point budget exactly.
//!
//! An [`Abilities`] set is built once from a schema, an extent (number of
//! attributes) and a cutoff (the budget). Candidates are the multisets of
//! `extent` scores drawn from the schema, i.e. combinations with replacement
//! taken in ascending order; only those whose summed cost equals the cutoff
//! are kept. Selections that cannot land exactly on the cutoff are dropped
//! rather than rounded down.
//!
//! Racial and levelling bonuses are applied afterwards with
//! [`Abilities::augment`], which replaces every member with its sums against a
//! set of bonus palettes.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::RenderConfig;
use crate::error::ConfigurationError;
use crate::schema::{Cost, Schema, Score};
use crate::scores::Scores;

/// The set of palettes reachable under a schema for a fixed budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Abilities {
    schema: Schema,
    extent: usize,
    cutoff: Cost,
    palettes: BTreeSet<Scores>,
}

impl Abilities {
    /// Enumerate every palette of `extent` scores costing exactly `cutoff`.
    ///
    /// Without a cutoff, half of the budget needed to max out every attribute
    /// is used: `extent * max_cost / 2`. An explicit `Some(0)` is a real
    /// budget of zero, not a request for the default: it keeps only the
    /// all-ground palette when every other score costs something.
    pub fn new(
        schema: Schema,
        extent: usize,
        cutoff: Option<Cost>,
    ) -> Result<Self, ConfigurationError> {
        if extent == 0 {
            return Err(ConfigurationError::ZeroExtent);
        }
        let max_cost = schema.max_cost().ok_or(ConfigurationError::EmptySchema)?;
        let cutoff = cutoff.unwrap_or_else(|| default_cutoff(extent, max_cost));

        let domain: Vec<(Score, Cost)> = schema.iter().collect();
        let mut palettes = BTreeSet::new();
        let mut selection = Vec::with_capacity(extent);
        collect_selections(&domain, 0, extent, cutoff, &mut selection, &mut palettes);

        debug!(
            extent,
            cutoff,
            schema_len = schema.len(),
            palettes = palettes.len(),
            "enumerated ability palettes"
        );

        Ok(Self {
            schema,
            extent,
            cutoff,
            palettes,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn extent(&self) -> usize {
        self.extent
    }

    pub fn cutoff(&self) -> Cost {
        self.cutoff
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    pub fn contains(&self, scores: &Scores) -> bool {
        self.palettes.contains(scores)
    }

    /// Members in ascending palette order.
    pub fn iter(&self) -> impl Iterator<Item = &Scores> {
        self.palettes.iter()
    }

    /// Replace every member with its sums against each augmentation palette.
    ///
    /// The un-augmented members are discarded. Every augmentation must have
    /// the set's extent; on a mismatch the set is left untouched.
    pub fn augment<'a, I>(&mut self, augmentations: I) -> Result<(), ConfigurationError>
    where
        I: IntoIterator<Item = &'a Scores>,
    {
        let augmentations: Vec<&Scores> = augmentations.into_iter().collect();
        if let Some(mismatch) = augmentations.iter().find(|a| a.len() != self.extent) {
            return Err(ConfigurationError::PaletteLengthMismatch {
                expected: self.extent,
                found: mismatch.len(),
            });
        }

        let mut augmented = BTreeSet::new();
        for palette in &self.palettes {
            for augmentation in &augmentations {
                augmented.insert(palette.checked_add(augmentation)?);
            }
        }

        debug!(
            before = self.palettes.len(),
            augmentations = augmentations.len(),
            after = augmented.len(),
            "augmented ability palettes"
        );

        self.palettes = augmented;
        Ok(())
    }

    /// Union of the distinct permutations of every member.
    ///
    /// Turns "+2 spread over some attributes" into a bonus set that can hit
    /// any attribute position.
    pub fn expand_permutations(&self) -> BTreeSet<Scores> {
        self.palettes
            .iter()
            .flat_map(Scores::distinct_permutations)
            .collect()
    }

    /// Report lines for every member whose highest score lies in `spectrum`.
    pub fn render(&self, spectrum: &BTreeSet<Score>, modulus: Score) -> Vec<String> {
        self.palettes
            .iter()
            .filter(|scores| scores.highest().is_some_and(|high| spectrum.contains(&high)))
            .map(|scores| scores.render(spectrum, modulus))
            .collect()
    }

    pub fn render_with(&self, config: &RenderConfig) -> Vec<String> {
        self.render(&config.spectrum, config.modulus)
    }
}

fn default_cutoff(extent: usize, max_cost: Cost) -> Cost {
    let extent = Cost::try_from(extent).unwrap_or(Cost::MAX);
    extent.saturating_mul(max_cost) / 2
}

/// Depth-first walk over non-decreasing index sequences, spending `budget`.
///
/// Costs are non-negative, so a branch is abandoned as soon as it overspends.
fn collect_selections(
    domain: &[(Score, Cost)],
    start: usize,
    remaining: usize,
    budget: Cost,
    selection: &mut Vec<Score>,
    palettes: &mut BTreeSet<Scores>,
) {
    if remaining == 0 {
        if budget == 0 {
            palettes.insert(Scores::new(selection.clone()));
        }
        return;
    }

    for (index, &(score, cost)) in domain.iter().enumerate().skip(start) {
        let Some(left) = budget.checked_sub(cost) else {
            continue;
        };
        selection.push(score);
        collect_selections(domain, index, remaining - 1, left, selection, palettes);
        selection.pop();
    }
}
