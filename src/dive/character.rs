//! Diver Characters
//!
//! Selectable characters. Each carries a multiplier applied to the final
//! swap fee after the score engine computes it.

use std::fmt;
use serde::{Serialize, Deserialize};

/// Playable character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Character {
    /// Perfect form reduces fees
    #[default]
    ProSwimmer = 0,
    /// High risk, high reward
    DaredevilDiver = 1,
    /// Bonus points for style
    OlympicChampion = 2,
    /// Natural water affinity
    WaterSpirit = 3,
    /// Stealth splash reduces fees
    NinjaDiver = 4,
    /// Fun vibes boost performance
    PartySwimmer = 5,
}

/// Fee multipliers by character (indices match the enum).
const FEE_BONUSES: [f64; 6] = [
    0.9,  // Pro Swimmer: 10% off
    0.8,  // Daredevil Diver: 20% off
    0.85, // Olympic Champion: 15% off
    0.9,  // Water Spirit: 10% off
    0.88, // Ninja Diver: 12% off
    0.95, // Party Swimmer: 5% off
];

impl Character {
    /// Full roster in selection order.
    pub const ROSTER: [Character; 6] = [
        Character::ProSwimmer,
        Character::DaredevilDiver,
        Character::OlympicChampion,
        Character::WaterSpirit,
        Character::NinjaDiver,
        Character::PartySwimmer,
    ];

    /// Fee multiplier in (0, 1].
    #[inline]
    pub fn fee_bonus(self) -> f64 {
        FEE_BONUSES[self as usize]
    }

    /// Whole-percent discount shown to the player.
    pub fn fee_discount_percent(self) -> u32 {
        ((1.0 - self.fee_bonus()) * 100.0).round() as u32
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Character::ProSwimmer => "Pro Swimmer",
            Character::DaredevilDiver => "Daredevil Diver",
            Character::OlympicChampion => "Olympic Champion",
            Character::WaterSpirit => "Water Spirit",
            Character::NinjaDiver => "Ninja Diver",
            Character::PartySwimmer => "Party Swimmer",
        }
    }

    /// Avatar emoji.
    pub fn emoji(self) -> &'static str {
        match self {
            Character::ProSwimmer => "🏊‍♂️",
            Character::DaredevilDiver => "🤸‍♂️",
            Character::OlympicChampion => "🏆",
            Character::WaterSpirit => "🧜‍♀️",
            Character::NinjaDiver => "🥷",
            Character::PartySwimmer => "🏖️",
        }
    }

    /// Ability blurb.
    pub fn ability(self) -> &'static str {
        match self {
            Character::ProSwimmer => "Perfect form reduces fees",
            Character::DaredevilDiver => "High risk, high reward",
            Character::OlympicChampion => "Bonus points for style",
            Character::WaterSpirit => "Natural water affinity",
            Character::NinjaDiver => "Stealth splash reduces fees",
            Character::PartySwimmer => "Fun vibes boost performance",
        }
    }

    /// Look up by display name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Character> {
        let name = name.trim();
        Character::ROSTER
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
