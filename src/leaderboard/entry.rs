//! Leaderboard Entries
//!
//! One ranked dive. Serialised as a plain JSON record:
//! `{ participantId, score, tier, timestamp }` plus optional `style` and
//! `character`. The legacy field name `address` is accepted for
//! `participantId`, and unrecognised style names read as no style.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::dive::character::Character;
use crate::dive::score::DiveResult;
use crate::dive::style::DiveStyle;
use crate::dive::tier::DiveTier;

/// A scored dive attributed to a participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Participant identity (usually a wallet address).
    #[serde(alias = "address")]
    pub participant_id: String,
    /// Dive score.
    pub score: u32,
    /// Bracket for the score.
    pub tier: DiveTier,
    /// Submission time, epoch milliseconds.
    pub timestamp: i64,
    /// Technique, when known.
    #[serde(
        default,
        deserialize_with = "lenient_style",
        skip_serializing_if = "Option::is_none"
    )]
    pub style: Option<DiveStyle>,
    /// Character name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
}

impl LeaderboardEntry {
    /// Create an entry; the tier is derived from the score.
    pub fn new(participant_id: impl Into<String>, score: u32, timestamp: i64) -> Self {
        Self {
            participant_id: participant_id.into(),
            score,
            tier: DiveTier::from_score(score),
            timestamp,
            style: None,
            character: None,
        }
    }

    /// Create an entry from a scored dive.
    pub fn from_result(participant_id: impl Into<String>, result: &DiveResult, timestamp: i64) -> Self {
        Self {
            participant_id: participant_id.into(),
            score: result.score,
            tier: result.tier,
            timestamp,
            style: Some(result.style),
            character: None,
        }
    }

    /// Attach the character that made the dive.
    pub fn with_character(mut self, character: Character) -> Self {
        self.character = Some(character.name().to_string());
        self
    }

    /// Current wall-clock time in epoch milliseconds.
    pub fn now_millis() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Submission time, if the timestamp is representable.
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp).single()
    }

    /// "HH:MM:SS" (UTC) for display, or "--:--:--" for a bad timestamp.
    pub fn time_label(&self) -> String {
        self.recorded_at()
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string())
    }

    /// Abbreviated participant id: first six and last four characters.
    pub fn short_participant(&self) -> String {
        let chars: Vec<char> = self.participant_id.chars().collect();
        if chars.len() <= 10 {
            return self.participant_id.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

/// Stored style name. Older boards write "Unknown" for dives without a
/// style; any name outside the style set reads as `None`.
fn lenient_style<'de, D>(deserializer: D) -> Result<Option<DiveStyle>, D::Error>
where
    D: Deserializer<'de>,
{
    let name: Option<String> = Option::deserialize(deserializer)?;
    Ok(name.as_deref().and_then(DiveStyle::from_wire))
}

// =============================================================================
// TESTS
// =============================================================================
