//! Errors raised while assembling a game preset.

use palette_core::{ConfigurationError, ErrorSeverity, PaletteError};

/// Preset construction failure. Construction is all-or-nothing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PresetError {
    /// Invalid schema, extent or bonus palette.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Tier index outside the point-buy tier table.
    #[error("unknown point-buy tier {0}")]
    UnknownTier(usize),

    #[error("unknown race '{0}'")]
    UnknownRace(String),

    #[error("unknown subrace '{subrace}' for race {race}")]
    UnknownSubrace { race: String, subrace: String },

    /// The race only grants bonuses through one of its subraces.
    #[error("race {0} requires a subrace")]
    MissingSubrace(String),

    #[error("race {0} has no subraces")]
    UnexpectedSubrace(String),

    /// The tier is restricted to other races.
    #[error("race {race} is not allowed on the {tier} tier")]
    RaceNotAllowed { race: String, tier: String },
}

impl PaletteError for PresetError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Configuration(inner) => inner.severity(),
            Self::UnknownTier(_)
            | Self::UnknownRace(_)
            | Self::UnknownSubrace { .. }
            | Self::RaceNotAllowed { .. } => ErrorSeverity::Recoverable,
            Self::MissingSubrace(_) | Self::UnexpectedSubrace(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(inner) => inner.error_code(),
            Self::UnknownTier(_) => "unknown_tier",
            Self::UnknownRace(_) => "unknown_race",
            Self::UnknownSubrace { .. } => "unknown_subrace",
            Self::MissingSubrace(_) => "missing_subrace",
            Self::UnexpectedSubrace(_) => "unexpected_subrace",
            Self::RaceNotAllowed { .. } => "race_not_allowed",
        }
    }
}

pub type PresetResult<T> = Result<T, PresetError>;
