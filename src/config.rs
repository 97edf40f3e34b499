use serde::{Deserialize, Serialize};

use crate::error::{Result, StandingsError};

pub const DEFAULT_GAMES_COUNT: u32 = 3;

/// Scoring rules for a league: what counts as a decider, when a fixture is
/// locked early, how many points a battle win is worth and which fixtures
/// are playoffs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StandingsConfig {
    pub decider_labels: Vec<String>,
    pub decider_match_type: String,
    /// Completed regular matches needed before a fixture can be locked early.
    pub early_decision_matches: usize,
    /// Regular match wins that lock the fixture once `early_decision_matches` are played.
    pub early_decision_wins: usize,
    pub points_per_win: u32,
    pub playoff_fixture_types: Vec<String>,
    pub match_type_order: Vec<String>,
}

impl Default for StandingsConfig {
    fn default() -> Self {
        Self {
            decider_labels: strings(&["Dream Breaker", "Game Breaker"]),
            decider_match_type: "dreamBreaker".to_string(),
            early_decision_matches: 6,
            early_decision_wins: 4,
            points_per_win: 3,
            playoff_fixture_types: strings(&[
                "playoff",
                "Qualifier",
                "Qualifier 1",
                "Qualifier 2",
                "Eliminator",
                "Final",
            ]),
            match_type_order: strings(&[
                "Men's Doubles",
                "Women's Doubles",
                "Mixed Doubles",
                "Men's Singles",
                "Women's Singles",
                "Dream Breaker",
                "Game Breaker",
            ]),
        }
    }
}

impl StandingsConfig {
    /// Parse a config document. Fields that are absent keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.early_decision_wins == 0 {
            return Err(invalid("earlyDecisionWins", "must be at least 1"));
        }
        if self.early_decision_wins > self.early_decision_matches {
            return Err(invalid(
                "earlyDecisionWins",
                format!(
                    "{} exceeds earlyDecisionMatches ({})",
                    self.early_decision_wins, self.early_decision_matches
                ),
            ));
        }
        let twice = self.early_decision_wins.checked_mul(2);
        if twice.is_some_and(|twice| twice <= self.early_decision_matches) {
            return Err(invalid(
                "earlyDecisionWins",
                format!(
                    "{} is not a strict majority of {}",
                    self.early_decision_wins, self.early_decision_matches
                ),
            ));
        }
        if self.decider_labels.is_empty() && self.decider_match_type.is_empty() {
            return Err(invalid(
                "deciderLabels",
                "no decider label or match type configured",
            ));
        }
        Ok(())
    }

    /// Exact, case-sensitive label check.
    pub fn is_decider_label(&self, label: &str) -> bool {
        self.decider_labels.iter().any(|l| l == label)
    }

    pub fn is_playoff(&self, fixture_type: Option<&str>) -> bool {
        fixture_type.is_some_and(|t| self.playoff_fixture_types.iter().any(|p| p == t))
    }

    /// Position of a match type label in the display order, if it is listed.
    pub(crate) fn match_type_rank(&self, label: Option<&str>) -> Option<usize> {
        let label = label?;
        self.match_type_order.iter().position(|l| l == label)
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn invalid(field: &'static str, reason: impl Into<String>) -> StandingsError {
    StandingsError::InvalidConfig {
        field,
        reason: reason.into(),
    }
}
