//! Point-buy ability score engine.
//!
//! `palette-core` turns a game's point-buy rules into the complete list of
//! ability score palettes that spend a budget exactly. The building blocks are
//! a cost [`Schema`], the palette algebra of [`Scores`], and the enumeration in
//! [`Abilities`]. Game presets and front ends depend on the types re-exported
//! here.
pub mod abilities;
pub mod config;
pub mod error;
pub mod format;
pub mod schema;
pub mod scores;

pub use abilities::Abilities;
pub use config::RenderConfig;
pub use error::{ConfigurationError, ErrorSeverity, PaletteError};
pub use schema::{Cost, Schema, Score};
pub use scores::Scores;
