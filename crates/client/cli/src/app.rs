//! Argument parsing and command dispatch.
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use palette_content::{
    Cyberpunk2077, DiscoElysium, DungeonsAndDragons, Game, GamePreset, PresetLoader, Race,
    Subrace, Tier,
};
use palette_core::{PaletteError, Schema, Score};
use strum::IntoEnumIterator;
use tracing::{debug, error, info};

use crate::config::CliConfig;
use crate::favorites::Favorites;

/// Browse every ability score palette a point-buy budget allows.
#[derive(Debug, Parser)]
#[command(name = "palette")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Mark a listed palette (0-based) as a favorite; repeatable
    #[arg(short, long = "mark", global = true)]
    pub marks: Vec<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Dungeons & Dragons point-buy
    Dnd {
        /// Tier index (0-6) or name (minimal ... human-only)
        #[arg(short, long, default_value = "standard", value_parser = parse_tier)]
        tier: Tier,

        /// Race whose bonus is applied to every palette
        #[arg(short, long)]
        race: Option<Race>,

        /// Subrace, required for races that have them
        #[arg(short, long, requires = "race")]
        subrace: Option<Subrace>,

        /// Extra ability points from levelling (clamped to 0-14)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        extra: Score,
    },

    /// Cyberpunk 2077 attributes
    Cyberpunk {
        /// Character level (clamped to 1-50)
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        level: Score,
    },

    /// Disco Elysium attributes
    Disco,

    /// A point-buy system described in a TOML file
    Custom {
        /// Path to the preset definition
        path: PathBuf,
    },

    /// Print the cost table for a list of checkpoints
    Schema {
        /// Ground score followed by the cost checkpoints
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        checkpoints: Vec<Score>,

        /// Combine the schema with itself this many times
        #[arg(long, default_value_t = 1)]
        times: usize,
    },

    /// List built-in games, tiers and races
    Games,
}

fn parse_tier(value: &str) -> std::result::Result<Tier, String> {
    match value.parse::<usize>() {
        Ok(index) => Tier::from_index(index).map_err(|e| e.to_string()),
        Err(_) => Tier::from_str(value).map_err(|_| format!("unknown tier '{value}'")),
    }
}

/// Run one command, writing listings to `out`.
pub fn run(cli: Cli, config: &CliConfig, out: &mut impl Write) -> Result<()> {
    let preset: Box<dyn GamePreset> = match cli.command {
        Command::Dnd {
            tier,
            race,
            subrace,
            extra,
        } => Box::new(report(DungeonsAndDragons::new(
            tier,
            race.map(|race| (race, subrace)),
            extra,
        ))?),
        Command::Cyberpunk { level } => Box::new(report(Cyberpunk2077::new(level))?),
        Command::Disco => Box::new(report(DiscoElysium::new())?),
        Command::Custom { path } => Box::new(PresetLoader::load(&path)?),
        Command::Schema { checkpoints, times } => {
            let schema = report(Schema::new(&checkpoints))?;
            let schema = report(schema.repeat(times))?;
            write!(out, "{schema}")?;
            return Ok(());
        }
        Command::Games => return list_games(out),
    };

    print_listing(preset.as_ref(), &cli.marks, config, out)
}

/// Log the error code before handing the failure to anyhow.
fn report<T, E>(result: std::result::Result<T, E>) -> Result<T>
where
    E: PaletteError + std::error::Error + Send + Sync + 'static,
{
    result.map_err(|err| {
        let severity = err.severity();
        error!(code = err.error_code(), severity = severity.as_str(), "{err}");
        if severity.is_recoverable() {
            info!("run `palette games` for the available tiers and races");
        }
        err.into()
    })
}

fn print_listing(
    preset: &dyn GamePreset,
    marks: &[usize],
    config: &CliConfig,
    out: &mut impl Write,
) -> Result<()> {
    if config.show_schema {
        write!(out, "{}", preset.abilities().schema())?;
    }

    let mut lines = preset.render();
    let mut favorites = Favorites::new();
    for &index in marks {
        favorites.mark(&mut lines, index);
    }
    debug!(lines = lines.len(), marked = marks.len(), "rendered listing");

    writeln!(out, "{} ({})", preset.description(), lines.len())?;
    for line in &lines {
        writeln!(out, "{line}")?;
    }

    if !favorites.is_empty() {
        writeln!(out)?;
        writeln!(out, "Favorites:")?;
        for line in favorites.iter() {
            writeln!(out, "{line}")?;
        }
    }

    Ok(())
}

fn list_games(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Games:")?;
    for game in Game::iter() {
        writeln!(out, "  {game}")?;
    }

    writeln!(out, "\n{} tiers:", Game::DungeonsAndDragons)?;
    for tier in Tier::iter() {
        writeln!(out, "  {} {:<11} {:?}", tier.index(), tier.as_ref(), tier.checkpoints())?;
    }

    writeln!(out, "\n{} races:", Game::DungeonsAndDragons)?;
    for race in Race::iter() {
        let subraces: Vec<String> = race.subraces().iter().map(ToString::to_string).collect();
        if subraces.is_empty() {
            writeln!(out, "  {race}")?;
        } else {
            writeln!(out, "  {race}: {}", subraces.join(", "))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(cli, &CliConfig::default(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn tier_accepts_index_or_name() {
        assert_eq!(parse_tier("0"), Ok(Tier::Minimal));
        assert_eq!(parse_tier("human-only"), Ok(Tier::HumanOnly));
        assert!(parse_tier("7").is_err());
        assert!(parse_tier("legendary").is_err());
    }

    #[test]
    fn disco_listing_has_header_and_lines() {
        let output = run_args(&["palette", "disco"]).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Disco Elysium (11)");
        assert_eq!(lines.len(), 12);
        assert!(lines[1].starts_with(" scores  1  1  4  6"));
    }

    #[test]
    fn marks_are_flagged_and_summarised() {
        let output = run_args(&["palette", "disco", "--mark", "0", "--mark", "2"]).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[1].starts_with("+scores  1  1  4  6"));
        assert!(lines[3].starts_with("+scores  1  2  3  6"));
        assert_eq!(lines[13], "Favorites:");
        assert_eq!(lines.len(), 16);
    }

    #[test]
    fn dnd_minimal_tier() {
        let output = run_args(&["palette", "dnd", "--tier", "0"]).unwrap();

        assert!(output.starts_with("Dungeons and Dragons: minimal +0 (1)\n"));
    }

    #[test]
    fn dnd_race_requires_subrace_when_applicable() {
        let err = run_args(&["palette", "dnd", "--race", "elf"]).unwrap_err();

        assert!(err.to_string().contains("requires a subrace"));
    }

    #[test]
    fn schema_prints_cost_table() {
        let output = run_args(&["palette", "schema", "8", "13", "15"]).unwrap();

        assert!(output.contains(" score 14 cost 7 step +2"));
    }

    #[test]
    fn schema_overflow_is_an_error() {
        let err = run_args(&["palette", "schema", "2147483646", "2147483647", "--times", "2"])
            .unwrap_err();

        assert!(err.to_string().contains("score arithmetic overflows"));
    }

    #[test]
    fn human_only_tier_refuses_other_races() {
        let err = run_args(&["palette", "dnd", "--tier", "6", "--race", "tiefling"]).unwrap_err();

        assert!(err.to_string().contains("not allowed on the human-only tier"));
    }

    #[test]
    fn games_lists_tiers_and_races() {
        let output = run_args(&["palette", "games"]).unwrap();

        assert!(output.contains("  Cyberpunk 2077"));
        assert!(output.contains("  6 human-only"));
        assert!(output.contains("  Dwarf: Hill, Mountain"));
        assert!(output.contains("  Tiefling\n"));
    }
}
