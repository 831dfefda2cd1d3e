//! Score palettes and the statistics reported for them.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::ConfigurationError;
use crate::format::{format_entry, format_value};
use crate::schema::Score;

/// One assignment of scores to every attribute of a character.
///
/// Palettes compare lexicographically, which is the order reports use.
/// Palettes coming out of enumeration or [`Scores::checked_add`] are sorted
/// ascending; bonus vectors built with [`Scores::new`] keep their given order.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scores(Vec<Score>);

impl Scores {
    /// Palette in the given attribute order.
    pub fn new(scores: impl Into<Vec<Score>>) -> Self {
        Self(scores.into())
    }

    /// Palette sorted ascending.
    pub fn sorted(scores: impl Into<Vec<Score>>) -> Self {
        let mut scores = scores.into();
        scores.sort_unstable();
        Self(scores)
    }

    pub fn as_slice(&self) -> &[Score] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Score> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> i64 {
        self.0.iter().map(|&score| i64::from(score)).sum()
    }

    /// Highest score of the palette.
    pub fn highest(&self) -> Option<Score> {
        self.0.iter().copied().max()
    }

    /// Element-wise sum, sorted ascending.
    pub fn checked_add(&self, other: &Scores) -> Result<Scores, ConfigurationError> {
        if self.len() != other.len() {
            return Err(ConfigurationError::PaletteLengthMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }

        let sums = self
            .0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| a.checked_add(*b))
            .collect::<Option<Vec<_>>>()
            .ok_or(ConfigurationError::ScoreOverflow("palette addition"))?;

        Ok(Scores::sorted(sums))
    }

    /// Every score multiplied by `factor`, order preserved.
    pub fn repeat(&self, factor: Score) -> Result<Scores, ConfigurationError> {
        self.0
            .iter()
            .map(|score| score.checked_mul(factor))
            .collect::<Option<Vec<_>>>()
            .map(Scores)
            .ok_or(ConfigurationError::ScoreOverflow("palette repetition"))
    }

    /// How many scores are multiples of `modulus`. A zero modulus matches nothing.
    pub fn count_multiples(&self, modulus: Score) -> usize {
        self.0
            .iter()
            .filter(|&&score| score.checked_rem(modulus) == Some(0))
            .count()
    }

    /// Occurrences of each spectrum value in the palette, in spectrum order.
    pub fn distribution(&self, spectrum: &BTreeSet<Score>) -> Vec<usize> {
        spectrum
            .iter()
            .map(|&value| self.0.iter().filter(|&&score| score == value).count())
            .collect()
    }

    /// For each multiplicity `r` in `1..=len`, how many distribution entries equal `r`.
    ///
    /// Six distinct scores give `[6, 0, 0, 0, 0, 0]`; the sum of the pattern is
    /// the number of distinct scores inside the spectrum.
    pub fn pattern(&self, distribution: &[usize]) -> Vec<usize> {
        (1..=self.len())
            .map(|rank| distribution.iter().filter(|&&count| count == rank).count())
            .collect()
    }

    /// Every distinct ordering of the palette, so a bonus can land on any attribute.
    pub fn distinct_permutations(&self) -> BTreeSet<Scores> {
        let mut current = self.0.clone();
        current.sort_unstable();

        let mut permutations = BTreeSet::new();
        loop {
            permutations.insert(Scores(current.clone()));
            if !next_permutation(&mut current) {
                break;
            }
        }

        permutations
    }

    /// Report line: scores, sum, multiples of `modulus`, type, pattern, distribution.
    pub fn render(&self, spectrum: &BTreeSet<Score>, modulus: Score) -> String {
        let distribution = self.distribution(spectrum);
        let pattern = self.pattern(&distribution);
        let kinds: usize = pattern.iter().sum();

        format!(
            " scores {} sum {} mod {} type {} pattern {} distribution {}",
            format_entry(self.iter().map(i64::from), None),
            format_value(self.sum(), None),
            format_value(self.count_multiples(modulus) as i64, None),
            format_value(kinds as i64, None),
            format_entry(pattern.iter().map(|&count| count as i64), None),
            format_entry(distribution.iter().map(|&count| count as i64), None),
        )
    }
}

/// Advance to the next lexicographic permutation; `false` once the last one is reached.
fn next_permutation(values: &mut [Score]) -> bool {
    let Some(pivot) = values.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        return false;
    };
    let Some(successor) = values.iter().rposition(|&value| value > values[pivot]) else {
        return false;
    };

    values.swap(pivot, successor);
    values[pivot + 1..].reverse();
    true
}

impl From<Vec<Score>> for Scores {
    fn from(scores: Vec<Score>) -> Self {
        Self(scores)
    }
}

impl<const N: usize> From<[Score; N]> for Scores {
    fn from(scores: [Score; N]) -> Self {
        Self(scores.to_vec())
    }
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_entry(self.iter().map(i64::from), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spectrum(range: std::ops::RangeInclusive<Score>) -> BTreeSet<Score> {
        range.collect()
    }

    #[test]
    fn checked_add_sorts_the_sum() {
        let base = Scores::from([8, 10, 12, 13, 14, 15]);
        let bonus = Scores::new([0, 0, 0, 0, 0, 2]);

        assert_eq!(
            base.checked_add(&bonus).unwrap(),
            Scores::from([8, 10, 12, 13, 14, 17])
        );
        assert_eq!(
            Scores::from([8, 9]).checked_add(&Scores::from([5, 0])).unwrap(),
            Scores::from([9, 13])
        );
    }

    #[test]
    fn checked_add_rejects_length_mismatch() {
        let err = Scores::from([1, 2, 3])
            .checked_add(&Scores::from([1, 2]))
            .unwrap_err();

        assert_eq!(
            err,
            ConfigurationError::PaletteLengthMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn checked_add_reports_overflow() {
        let top = Scores::from([1, Score::MAX]);

        assert_eq!(
            top.checked_add(&Scores::new([0, 1])),
            Err(ConfigurationError::ScoreOverflow("palette addition"))
        );
        assert_eq!(
            top.checked_add(&Scores::new([1, 0])).unwrap(),
            Scores::from([2, Score::MAX])
        );
    }

    #[test]
    fn highest_through_references() {
        let palettes = [Scores::from([3, 9]), Scores::from([4, 5])];
        let by_ref: Vec<Option<Score>> = palettes.iter().map(|scores| scores.highest()).collect();

        assert_eq!(by_ref, vec![Some(9), Some(5)]);
        assert_eq!(Scores::default().highest(), None);
    }

    #[test]
    fn repeat_scales_in_place() {
        assert_eq!(Scores::new([3, 1, 2]).repeat(2).unwrap(), Scores::new([6, 2, 4]));
        assert_eq!(
            Scores::new([3, Score::MAX]).repeat(2),
            Err(ConfigurationError::ScoreOverflow("palette repetition"))
        );
    }

    #[test]
    fn count_multiples() {
        let scores = Scores::from([8, 9, 10, 11, 12, 15]);

        assert_eq!(scores.count_multiples(2), 3);
        assert_eq!(scores.count_multiples(3), 3);
        assert_eq!(scores.count_multiples(1), 6);
        assert_eq!(scores.count_multiples(0), 0);
    }

    #[test]
    fn distribution_and_pattern() {
        let scores = Scores::from([1, 1, 4, 6]);
        let distribution = scores.distribution(&spectrum(1..=6));

        assert_eq!(distribution, vec![2, 0, 0, 1, 0, 1]);
        // two singles, one pair
        assert_eq!(scores.pattern(&distribution), vec![2, 1, 0, 0]);
    }

    #[test]
    fn pattern_ignores_scores_outside_spectrum() {
        let scores = Scores::from([3, 3, 30]);
        let distribution = scores.distribution(&spectrum(1..=20));

        assert_eq!(scores.pattern(&distribution), vec![0, 1, 0]);
    }

    #[test]
    fn distinct_permutations_skip_duplicates() {
        let permutations = Scores::new([2, 0, 0, 0, 0, 0]).distinct_permutations();
        assert_eq!(permutations.len(), 6);

        let permutations = Scores::new([0, 0, 2, 0, 1, 0]).distinct_permutations();
        assert_eq!(permutations.len(), 30);
        assert!(permutations.contains(&Scores::new([0, 0, 2, 0, 1, 0])));

        let permutations = Scores::new([1, 1, 1]).distinct_permutations();
        assert_eq!(permutations.len(), 1);
    }

    #[test]
    fn render_line_matches_report_format() {
        let scores = Scores::from([1, 1, 4, 6]);

        assert_eq!(
            scores.render(&spectrum(1..=6), 2),
            " scores  1  1  4  6 sum 12 mod 2 type 3 pattern 2 1     distribution 2     1   1"
        );
        assert_eq!(
            Scores::from([1, 1, 5, 5]).render(&spectrum(1..=6), 2),
            " scores  1  1  5  5 sum 12 mod   type 2 pattern   2     distribution 2       2  "
        );
    }
}
