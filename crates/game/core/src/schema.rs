//! Point-buy cost schemas.
//!
//! A schema maps every purchasable score to the cumulative number of points it
//! costs to raise an attribute from the ground score. Games publish these as a
//! handful of checkpoints; [`Schema::new`] expands them into the dense table.
//!
//! Checkpoints `[8, 13, 15]` read as: ground score 8, the increments up to 13
//! cost 1 point each, the increments up to 15 cost 2 points each.
//!
//! | score | 8 | 9 | 10 | 11 | 12 | 13 | 14 | 15 |
//! |-------|---|---|----|----|----|----|----|----|
//! | cost  | 0 | 1 | 2  | 3  | 4  | 5  | 7  | 9  |
//!
//! Repeating a checkpoint skips a cost tier: `[8, 13, 13, 15]` charges 3 points
//! per increment above 13.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::ConfigurationError;
use crate::format::format_value;

/// An attribute score.
pub type Score = i32;

/// A cumulative point cost.
pub type Cost = u32;

/// Dense score → cumulative cost table, ordered by score.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schema {
    costs: BTreeMap<Score, Cost>,
}

impl Schema {
    /// Expand a checkpoint list into a schema.
    ///
    /// `checkpoints[0]` is the ground score (cost 0). Segment `k` between two
    /// consecutive checkpoints costs `k` points per increment.
    pub fn new(checkpoints: &[Score]) -> Result<Self, ConfigurationError> {
        let (&ground, _) = checkpoints
            .split_first()
            .ok_or(ConfigurationError::EmptyCheckpoints)?;

        let mut costs = BTreeMap::from([(ground, 0)]);
        let mut step: Cost = 0;
        let mut cost: Cost = 0;

        for pair in checkpoints.windows(2) {
            let (previous, next) = (pair[0], pair[1]);
            if next < previous {
                return Err(ConfigurationError::UnsortedCheckpoints { previous, next });
            }

            step += 1;
            for score in (previous..=next).skip(1) {
                cost = cost
                    .checked_add(step)
                    .ok_or(ConfigurationError::CostOverflow("checkpoint expansion"))?;
                costs.insert(score, cost);
            }
        }

        Ok(Self { costs })
    }

    /// Wrap a prepared cost table without checkpoint expansion.
    pub fn from_costs(costs: BTreeMap<Score, Cost>) -> Self {
        Self { costs }
    }

    /// The neutral element of [`Schema::combine`]: a single free score of 0.
    pub fn identity() -> Self {
        Self::from_costs(BTreeMap::from([(0, 0)]))
    }

    /// Cost of reaching `score`, if the schema offers it.
    pub fn cost(&self, score: Score) -> Option<Cost> {
        self.costs.get(&score).copied()
    }

    /// Total cost of a selection of scores, or `None` if any score is
    /// off-schema or the sum leaves the `Cost` range.
    pub fn total_cost(&self, scores: &[Score]) -> Option<Cost> {
        scores
            .iter()
            .try_fold(0 as Cost, |total, &score| total.checked_add(self.cost(score)?))
    }

    /// The most expensive entry of the schema.
    pub fn max_cost(&self) -> Option<Cost> {
        self.costs.values().copied().max()
    }

    /// The lowest score of the schema.
    pub fn ground(&self) -> Option<Score> {
        self.costs.keys().next().copied()
    }

    /// Scores in ascending order.
    pub fn scores(&self) -> impl Iterator<Item = Score> + '_ {
        self.costs.keys().copied()
    }

    /// `(score, cost)` entries in ascending score order.
    pub fn iter(&self) -> impl Iterator<Item = (Score, Cost)> + '_ {
        self.costs.iter().map(|(&score, &cost)| (score, cost))
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Combine two schemas into the schema of their score sums.
    ///
    /// Every pair `(a, b)` contributes `cost(a) + cost(b)` to the score `a + b`.
    /// When several pairs land on the same score, the most expensive one wins.
    /// Fails when a score or cost sum leaves its integer range.
    pub fn combine(&self, other: &Schema) -> Result<Schema, ConfigurationError> {
        let mut costs = BTreeMap::new();

        for (self_score, self_cost) in self.iter() {
            for (other_score, other_cost) in other.iter() {
                let score = self_score
                    .checked_add(other_score)
                    .ok_or(ConfigurationError::ScoreOverflow("schema combination"))?;
                let cost = self_cost
                    .checked_add(other_cost)
                    .ok_or(ConfigurationError::CostOverflow("schema combination"))?;

                let entry = costs.entry(score).or_insert(0);
                *entry = cost.max(*entry);
            }
        }

        Ok(Schema::from_costs(costs))
    }

    /// Combine the schema with itself `times` times, starting from the identity.
    ///
    /// `repeat(0)` is [`Schema::identity`], `repeat(1)` equals `self`.
    pub fn repeat(&self, times: usize) -> Result<Schema, ConfigurationError> {
        (0..times).try_fold(Schema::identity(), |acc, _| acc.combine(self))
    }
}

impl fmt::Display for Schema {
    /// One line per score with its cost and the cost of the last increment.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_score = self.costs.keys().max().map(|&score| i64::from(score));
        let max_cost = self.max_cost().map(i64::from);

        writeln!(f)?;
        for (score, cost) in self.iter() {
            let previous = score.checked_sub(1).and_then(|below| self.cost(below));
            let step = i64::from(cost) - i64::from(previous.unwrap_or(0));
            writeln!(
                f,
                " score {} cost {} step +{}",
                format_value(i64::from(score), max_score),
                format_value(i64::from(cost), max_cost),
                format_value(step, None),
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_point_buy_table() {
        let schema = Schema::new(&[8, 13, 15]).unwrap();

        assert_eq!(schema.len(), 8);
        assert_eq!(schema.cost(8), Some(0));
        assert_eq!(schema.cost(13), Some(5));
        assert_eq!(schema.cost(14), Some(7));
        assert_eq!(schema.cost(15), Some(9));
        assert_eq!(schema.cost(16), None);
        assert_eq!(schema.max_cost(), Some(9));
        assert_eq!(schema.ground(), Some(8));
    }

    #[test]
    fn repeated_checkpoint_skips_a_tier() {
        let schema = Schema::new(&[8, 13, 13, 15]).unwrap();

        assert_eq!(schema.cost(13), Some(5));
        assert_eq!(schema.cost(14), Some(8));
        assert_eq!(schema.cost(15), Some(11));
    }

    #[test]
    fn single_checkpoint_is_ground_only() {
        let schema = Schema::new(&[12]).unwrap();
        assert_eq!(schema.iter().collect::<Vec<_>>(), vec![(12, 0)]);
    }

    #[test]
    fn rejects_empty_and_descending_checkpoints() {
        assert_eq!(Schema::new(&[]), Err(ConfigurationError::EmptyCheckpoints));
        assert_eq!(
            Schema::new(&[8, 15, 13]),
            Err(ConfigurationError::UnsortedCheckpoints {
                previous: 15,
                next: 13
            })
        );
    }

    #[test]
    fn combine_keeps_the_most_expensive_pair() {
        let a = Schema::new(&[1, 2]).unwrap(); // {1: 0, 2: 1}
        let b = Schema::new(&[0, 2]).unwrap(); // {0: 0, 1: 1, 2: 2}

        let sum = a.combine(&b).unwrap();

        // 3 = 1 + 2 (cost 2) = 2 + 1 (cost 2)
        // 2 = 1 + 1 (cost 1) = 2 + 0 (cost 1)
        assert_eq!(
            sum.iter().collect::<Vec<_>>(),
            vec![(1, 0), (2, 1), (3, 2), (4, 3)]
        );
    }

    #[test]
    fn combine_collision_takes_max_not_first() {
        let a = Schema::from_costs(BTreeMap::from([(0, 0), (1, 5)]));
        let b = Schema::from_costs(BTreeMap::from([(0, 1), (1, 0)]));

        // score 1 is reached by (0, 1) at cost 0 and by (1, 0) at cost 6
        assert_eq!(a.combine(&b).unwrap().cost(1), Some(6));
    }

    #[test]
    fn repeat_folds_from_identity() {
        let schema = Schema::new(&[0, 2]).unwrap();

        assert_eq!(schema.repeat(0).unwrap(), Schema::identity());
        assert_eq!(schema.repeat(1).unwrap(), schema);
        assert_eq!(schema.repeat(2).unwrap(), schema.combine(&schema).unwrap());
        assert_eq!(schema.repeat(3).unwrap().max_cost(), Some(6));
    }

    #[test]
    fn display_lists_each_score() {
        let schema = Schema::new(&[8, 13, 15]).unwrap();
        let rendered = schema.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], " score  8 cost   step + ");
        assert_eq!(lines[2], " score  9 cost 1 step +1");
        assert_eq!(lines[8], " score 15 cost 9 step +2");
    }

    #[test]
    fn total_cost_rejects_off_schema_scores() {
        let schema = Schema::new(&[8, 13, 15]).unwrap();

        assert_eq!(schema.total_cost(&[8, 13, 15]), Some(14));
        assert_eq!(schema.total_cost(&[8, 16]), None);
    }

    #[test]
    fn checkpoints_at_the_top_of_the_range() {
        let schema = Schema::new(&[Score::MAX, Score::MAX]).unwrap();
        assert_eq!(schema.iter().collect::<Vec<_>>(), vec![(Score::MAX, 0)]);

        let schema = Schema::new(&[Score::MAX - 1, Score::MAX]).unwrap();
        assert_eq!(schema.cost(Score::MAX), Some(1));
    }

    #[test]
    fn combine_reports_score_overflow() {
        let schema = Schema::new(&[Score::MAX - 1, Score::MAX]).unwrap();

        assert_eq!(
            schema.combine(&schema),
            Err(ConfigurationError::ScoreOverflow("schema combination"))
        );
        assert_eq!(
            schema.repeat(2),
            Err(ConfigurationError::ScoreOverflow("schema combination"))
        );
        assert_eq!(schema.repeat(1).unwrap(), schema);
    }

    #[test]
    fn combine_reports_cost_overflow() {
        let expensive = Schema::from_costs(BTreeMap::from([(0, Cost::MAX)]));
        let cheap = Schema::from_costs(BTreeMap::from([(1, 1)]));

        assert_eq!(
            expensive.combine(&cheap),
            Err(ConfigurationError::CostOverflow("schema combination"))
        );
    }

    #[test]
    fn total_cost_overflow_is_none() {
        let schema = Schema::from_costs(BTreeMap::from([(1, Cost::MAX)]));

        assert_eq!(schema.total_cost(&[1]), Some(Cost::MAX));
        assert_eq!(schema.total_cost(&[1, 1]), None);
    }

    #[test]
    fn display_handles_lowest_score() {
        let schema = Schema::from_costs(BTreeMap::from([(Score::MIN, 0)]));

        assert!(schema.to_string().contains("step + "));
    }
}
