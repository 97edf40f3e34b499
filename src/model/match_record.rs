use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::StandingsConfig;

/// Lifecycle of a single match or a whole fixture.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
}

/// One side of a match or fixture.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Team1,
    Team2,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Team1 => Side::Team2,
            Side::Team2 => Side::Team1,
        }
    }
}

/// Coerced game scores keyed by `game1`..`gameN`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScores {
    pub team1: BTreeMap<String, i32>,
    pub team2: BTreeMap<String, i32>,
}

impl MatchScores {
    /// Score of `side` in game `game` (1-based). Missing games score 0.
    pub fn game(&self, side: Side, game: u32) -> i32 {
        let scores = match side {
            Side::Team1 => &self.team1,
            Side::Team2 => &self.team2,
        };
        scores.get(&format!("game{game}")).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.team1.is_empty() && self.team2.is_empty()
    }
}

/// A normalized match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: String,
    pub fixture_group_id: Option<String>,
    pub team1_id: String,
    pub team2_id: String,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub match_type: Option<String>,
    pub match_type_label: Option<String>,
    pub games_count: u32,
    pub scores: MatchScores,
    pub status: MatchStatus,
    pub fixture_type: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<String>,
}

impl MatchRecord {
    /// Fixture key; an ungrouped match is a fixture of its own.
    pub fn group_key(&self) -> &str {
        self.fixture_group_id.as_deref().unwrap_or(&self.id)
    }

    pub fn is_decider(&self, config: &StandingsConfig) -> bool {
        let by_label = self
            .match_type_label
            .as_deref()
            .is_some_and(|label| config.is_decider_label(label));
        let by_type = !config.decider_match_type.is_empty()
            && self.match_type.as_deref() == Some(config.decider_match_type.as_str());
        by_label || by_type
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::standings::test_match;

    #[test]
    fn test_status_strings() {
        assert_eq!(MatchStatus::InProgress.to_string(), "in-progress");
        assert_eq!(
            MatchStatus::from_str("completed").unwrap(),
            MatchStatus::Completed
        );
        assert!(MatchStatus::from_str("postponed").is_err());
        assert_eq!(Side::Team2.to_string(), "team2");
    }

    #[test]
    fn test_decider_detection() {
        let config = StandingsConfig::default();
        let mut m = test_match("m1", "f1", "Dream Breaker", MatchStatus::Scheduled, &[]);
        assert!(m.is_decider(&config));

        m.match_type_label = Some("Game Breaker".to_string());
        assert!(m.is_decider(&config));

        m.match_type_label = Some("game breaker".to_string());
        assert!(!m.is_decider(&config));

        m.match_type = Some("dreamBreaker".to_string());
        assert!(m.is_decider(&config));
    }

    #[test]
    fn test_group_key_falls_back_to_id() {
        let mut m = test_match("m1", "f1", "Men's Doubles", MatchStatus::Scheduled, &[]);
        assert_eq!(m.group_key(), "f1");
        m.fixture_group_id = None;
        assert_eq!(m.group_key(), "m1");
    }
}
