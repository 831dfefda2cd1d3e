//! Common error infrastructure for palette-core.
//!
//! Every failure the engine can report happens while a schema, palette or
//! ability set is being configured. Once constructed, the types are plain data
//! and their operations are infallible, with the single exception of
//! [`crate::Abilities::augment`], which validates its input before mutating.

use crate::schema::Score;

/// Severity level of an error, used by front ends to decide how to respond.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// A lookup missed; retrying with one of the listed keys succeeds.
    ///
    /// Examples: unknown tier index, unknown race name
    Recoverable,

    /// Rejected configuration; the input itself must change.
    ///
    /// Examples: descending checkpoints, bonus of the wrong length
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all palette errors.
///
/// This trait provides a uniform interface for error classification across
/// crates that build on the engine (presets, loaders, front ends).
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by what the caller must change to succeed
/// - Return a stable snake_case identifier from `error_code`
pub trait PaletteError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, logging, and testing.
    fn error_code(&self) -> &'static str;
}

/// Invalid configuration handed to the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// A schema needs at least the ground score.
    #[error("cost schema requires at least one checkpoint (the ground score)")]
    EmptyCheckpoints,

    /// Checkpoints must be listed in ascending order.
    ///
    /// Repeated checkpoints are accepted; they skip a cost tier.
    #[error("cost schema checkpoints must ascend: {next} follows {previous}")]
    UnsortedCheckpoints { previous: Score, next: Score },

    /// The schema has no scores to draw palettes from.
    #[error("cost schema is empty")]
    EmptySchema,

    /// A palette needs at least one attribute.
    #[error("extent must be at least one attribute")]
    ZeroExtent,

    /// A score, or a sum of scores, leaves the `Score` range.
    #[error("score arithmetic overflows: {0}")]
    ScoreOverflow(&'static str),

    /// A cumulative cost leaves the `Cost` range.
    #[error("cost arithmetic overflows: {0}")]
    CostOverflow(&'static str),

    /// Element-wise arithmetic between palettes of different lengths.
    #[error("palette length mismatch: expected {expected}, found {found}")]
    PaletteLengthMismatch { expected: usize, found: usize },
}

impl PaletteError for ConfigurationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyCheckpoints => "empty_checkpoints",
            Self::UnsortedCheckpoints { .. } => "unsorted_checkpoints",
            Self::EmptySchema => "empty_schema",
            Self::ZeroExtent => "zero_extent",
            Self::ScoreOverflow(_) => "score_overflow",
            Self::CostOverflow(_) => "cost_overflow",
            Self::PaletteLengthMismatch { .. } => "palette_length_mismatch",
        }
    }
}
