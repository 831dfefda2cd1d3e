//! Dungeons & Dragons point-buy.
//!
//! Base palette 8 8 8 8 8 8 with 27 points on the standard tier; the other
//! tiers widen or narrow the score range around the same 13 midpoint. Racial
//! bonuses and extra levelling points are applied on top.

use std::collections::BTreeSet;
use std::str::FromStr;

use palette_core::{Abilities, RenderConfig, Schema, Score, Scores};
use strum::IntoEnumIterator;
use tracing::info;

use super::{Game, GamePreset, clamp_input, levelling_bonuses};
use crate::error::{PresetError, PresetResult};

/// Point-buy tiers, from the trivial median to the human-only extreme.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Tier {
    /// Only 12 12 12 13 13 13 is reachable.
    Minimal,
    Decreased,
    /// The Player's Handbook table.
    #[default]
    Standard,
    Increased,
    Maximal,
    Overkill,
    /// Scores down to 0; only humans may be built on it.
    HumanOnly,
}

impl Tier {
    /// Tier at `index` in table order (0 = minimal).
    pub fn from_index(index: usize) -> PresetResult<Self> {
        Self::iter().nth(index).ok_or(PresetError::UnknownTier(index))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether characters of `race` may be built on this tier.
    pub fn allows(self, race: Race) -> bool {
        match self {
            Self::HumanOnly => race == Race::Human,
            _ => true,
        }
    }

    pub fn checkpoints(self) -> &'static [Score] {
        match self {
            Self::Minimal => &[12, 13],
            Self::Decreased => &[10, 13, 14],
            Self::Standard => &[8, 13, 15],
            Self::Increased => &[6, 13, 16],
            Self::Maximal => &[4, 13, 17],
            Self::Overkill => &[2, 13, 18],
            Self::HumanOnly => &[0, 13, 19],
        }
    }
}

/// Playable races.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Race {
    Dwarf,
    Elf,
    Halfling,
    Human,
    Dragonborn,
    Gnome,
    Halfelf,
    Halforc,
    Tiefling,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Subrace {
    Hill,
    Mountain,
    High,
    Wood,
    Dark,
    Lightfoot,
    Stout,
    Standard,
    Variant,
    Forest,
    Rock,
}

/// Canonical racial bonuses in STR DEX CON INT WIS CHA order.
const RACIAL_BONUSES: &[(Race, Option<Subrace>, [Score; 6])] = &[
    (Race::Dwarf, Some(Subrace::Hill), [0, 0, 2, 0, 1, 0]),
    (Race::Dwarf, Some(Subrace::Mountain), [2, 0, 2, 0, 0, 0]),
    (Race::Elf, Some(Subrace::High), [0, 2, 0, 1, 0, 0]),
    (Race::Elf, Some(Subrace::Wood), [0, 2, 0, 0, 1, 0]),
    (Race::Elf, Some(Subrace::Dark), [0, 2, 0, 0, 0, 1]),
    (Race::Halfling, Some(Subrace::Lightfoot), [0, 2, 0, 0, 0, 1]),
    (Race::Halfling, Some(Subrace::Stout), [0, 2, 1, 0, 0, 0]),
    (Race::Human, Some(Subrace::Standard), [1, 1, 1, 1, 1, 1]),
    (Race::Human, Some(Subrace::Variant), [1, 1, 0, 0, 0, 0]),
    (Race::Dragonborn, None, [2, 0, 0, 0, 0, 1]),
    (Race::Gnome, Some(Subrace::Forest), [0, 1, 0, 2, 0, 0]),
    (Race::Gnome, Some(Subrace::Rock), [0, 0, 1, 2, 0, 0]),
    (Race::Halfelf, None, [1, 0, 1, 0, 0, 2]),
    (Race::Halforc, None, [2, 0, 1, 0, 0, 0]),
    (Race::Tiefling, None, [0, 0, 0, 1, 0, 2]),
];

impl Race {
    /// Subraces in table order; empty for races without them.
    pub fn subraces(self) -> Vec<Subrace> {
        RACIAL_BONUSES
            .iter()
            .filter(|(race, _, _)| *race == self)
            .filter_map(|(_, subrace, _)| *subrace)
            .collect()
    }

    /// Canonical bonus vector (STR DEX CON INT WIS CHA) for the race.
    ///
    /// Races with subraces only grant bonuses through one of them.
    pub fn bonus(self, subrace: Option<Subrace>) -> PresetResult<[Score; 6]> {
        let has_subraces = !self.subraces().is_empty();

        match (has_subraces, subrace) {
            (true, None) => Err(PresetError::MissingSubrace(self.to_string())),
            (false, Some(_)) => Err(PresetError::UnexpectedSubrace(self.to_string())),
            (_, subrace) => RACIAL_BONUSES
                .iter()
                .find(|(race, entry, _)| *race == self && *entry == subrace)
                .map(|(_, _, bonus)| *bonus)
                .ok_or_else(|| PresetError::UnknownSubrace {
                    race: self.to_string(),
                    subrace: subrace.map(|s| s.to_string()).unwrap_or_default(),
                }),
        }
    }

    /// Every placement of the race's bonus over the six abilities.
    pub fn bonus_permutations(self, subrace: Option<Subrace>) -> PresetResult<BTreeSet<Scores>> {
        Ok(Scores::new(self.bonus(subrace)?).distinct_permutations())
    }
}

/// Dungeons & Dragons ability palettes for a tier, race and extra points.
#[derive(Clone, Debug)]
pub struct DungeonsAndDragons {
    tier: Tier,
    race: Option<(Race, Option<Subrace>)>,
    extra: Score,
    abilities: Abilities,
}

impl DungeonsAndDragons {
    pub const EXTENT: usize = 6;
    pub const MIN_EXTRA: Score = 0;
    pub const MAX_EXTRA: Score = 14;

    /// Build the palettes for `tier`, then apply race and extra-point bonuses.
    ///
    /// `extra` is clamped into `MIN_EXTRA..=MAX_EXTRA`. A race the tier does not
    /// allow is rejected before any enumeration.
    pub fn new(
        tier: Tier,
        race: Option<(Race, Option<Subrace>)>,
        extra: Score,
    ) -> PresetResult<Self> {
        if let Some((race, _)) = race.filter(|(race, _)| !tier.allows(*race)) {
            return Err(PresetError::RaceNotAllowed {
                race: race.to_string(),
                tier: tier.to_string(),
            });
        }

        let mut abilities = Abilities::new(Schema::new(tier.checkpoints())?, Self::EXTENT, None)?;

        if let Some((race, subrace)) = race {
            abilities.augment(&race.bonus_permutations(subrace)?)?;
        }

        let extra = clamp_input("extra", extra, Self::MIN_EXTRA, Self::MAX_EXTRA);
        if extra > 0 {
            abilities.augment(&levelling_bonuses(extra, Self::EXTENT)?)?;
        }

        info!(
            %tier,
            race = ?race,
            extra,
            palettes = abilities.len(),
            "built Dungeons and Dragons palettes"
        );

        Ok(Self {
            tier,
            race,
            extra,
            abilities,
        })
    }

    /// Build from a tier index and optional race/subrace names.
    ///
    /// Names are matched case-insensitively; a subrace without a race is ignored.
    pub fn from_keys(
        tier: usize,
        race: Option<&str>,
        subrace: Option<&str>,
        extra: Score,
    ) -> PresetResult<Self> {
        let tier = Tier::from_index(tier)?;

        let race = match race {
            Some(name) => {
                let race =
                    Race::from_str(name).map_err(|_| PresetError::UnknownRace(name.to_string()))?;
                let subrace = subrace
                    .map(|name| {
                        Subrace::from_str(name).map_err(|_| PresetError::UnknownSubrace {
                            race: race.to_string(),
                            subrace: name.to_string(),
                        })
                    })
                    .transpose()?;
                Some((race, subrace))
            }
            None => None,
        };

        Self::new(tier, race, extra)
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn race(&self) -> Option<(Race, Option<Subrace>)> {
        self.race
    }

    pub fn extra(&self) -> Score {
        self.extra
    }
}

impl GamePreset for DungeonsAndDragons {
    fn name(&self) -> &str {
        Game::DungeonsAndDragons.title()
    }

    fn description(&self) -> String {
        let mut parts = vec![self.tier.to_string()];
        if let Some((race, subrace)) = self.race {
            if let Some(subrace) = subrace {
                parts.push(subrace.to_string());
            }
            parts.push(race.to_string());
        }
        parts.push(format!("+{}", self.extra));

        format!("{}: {}", Game::DungeonsAndDragons, parts.join(" "))
    }

    fn abilities(&self) -> &Abilities {
        &self.abilities
    }

    fn render_config(&self) -> RenderConfig {
        RenderConfig::with_range(1..=20, 2)
    }
}
