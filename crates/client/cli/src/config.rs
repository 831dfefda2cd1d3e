//! CLI configuration from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings that are not part of a single invocation's arguments.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub log_file: Option<PathBuf>,
    pub show_schema: bool,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PALETTE_LOG_FILE` - Also write logs to this file (default: stderr only)
    /// - `PALETTE_SHOW_SCHEMA` - Print the expanded cost table before listings (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.log_file = env::var_os("PALETTE_LOG_FILE").map(PathBuf::from);

        if let Some(show) = read_env::<bool>("PALETTE_SHOW_SCHEMA") {
            config.show_schema = show;
        } else if let Some(show) = read_env::<u8>("PALETTE_SHOW_SCHEMA") {
            config.show_schema = show != 0;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
