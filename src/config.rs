//! Demo Configuration
//!
//! Settings for the `swimswap-dive` binary. The score engine and ranker
//! take everything as parameters; only the binary reads the environment.

use std::path::PathBuf;

use crate::dive::character::Character;
use crate::leaderboard::store::LEADERBOARD_KEY;

/// Demo binary configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Directory holding leaderboard JSON files.
    pub data_dir: PathBuf,
    /// Leaderboard key (file stem).
    pub leaderboard_key: String,
    /// Character whose fee bonus applies to every dive.
    pub character: Character,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            leaderboard_key: LEADERBOARD_KEY.to_string(),
            character: Character::default(),
        }
    }
}

impl AppConfig {
    /// Create config from environment variables.
    ///
    /// - `SWIMSWAP_DATA_DIR`: leaderboard directory (default `data`)
    /// - `SWIMSWAP_LEADERBOARD_KEY`: leaderboard key (default `swimswap-leaderboard`)
    /// - `SWIMSWAP_CHARACTER`: character name (default "Pro Swimmer")
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup. Unknown characters and blank values
    /// fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            data_dir: non_blank("SWIMSWAP_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            leaderboard_key: non_blank("SWIMSWAP_LEADERBOARD_KEY")
                .unwrap_or(defaults.leaderboard_key),
            character: non_blank("SWIMSWAP_CHARACTER")
                .and_then(|name| Character::from_name(&name))
                .unwrap_or(defaults.character),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.leaderboard_key, LEADERBOARD_KEY);
        assert_eq!(config.character, Character::ProSwimmer);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("SWIMSWAP_DATA_DIR", "/var/lib/swimswap"),
            ("SWIMSWAP_LEADERBOARD_KEY", "weekly"),
            ("SWIMSWAP_CHARACTER", "Ninja Diver"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/swimswap"));
        assert_eq!(config.leaderboard_key, "weekly");
        assert_eq!(config.character, Character::NinjaDiver);
    }

    #[test]
    fn test_unknown_character_and_blank_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("SWIMSWAP_DATA_DIR", "  "),
            ("SWIMSWAP_CHARACTER", "Lifeguard"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.character, Character::ProSwimmer);
    }
}
