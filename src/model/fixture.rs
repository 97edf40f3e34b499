use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MatchRecord, MatchStatus, Side, Team};

/// A tie between two teams made up of several matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: String,
    pub team1_id: String,
    pub team2_id: String,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub team1: Option<Team>,
    pub team2: Option<Team>,
    pub fixture_type: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<String>,
    pub matches: Vec<MatchRecord>,
}

impl Fixture {
    /// Which side `team_id` plays on, if it takes part at all.
    pub fn side_of(&self, team_id: &str) -> Option<Side> {
        if self.team1_id == team_id {
            Some(Side::Team1)
        } else if self.team2_id == team_id {
            Some(Side::Team2)
        } else {
            None
        }
    }
}

/// Derived state of a fixture together with the matches that count.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureResolution<'a> {
    pub status: MatchStatus,
    pub exclude_decider: bool,
    pub effective_matches: Vec<&'a MatchRecord>,
}

/// Result of a fixture, possibly known before every match is played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureOutcome {
    pub winner: Option<Side>,
    pub decided: bool,
    pub team1_match_wins: u32,
    pub team2_match_wins: u32,
}

/// What the match list and fixture detail views show for a fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureSummary {
    pub id: String,
    pub team1_id: String,
    pub team2_id: String,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub fixture_type: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<String>,
    pub status: MatchStatus,
    pub decider_excluded: bool,
    pub outcome: FixtureOutcome,
    pub matches: Vec<MatchSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub id: String,
    pub match_type_label: Option<String>,
    pub status: MatchStatus,
    pub is_decider: bool,
    /// Only set for completed matches.
    pub winner: Option<Side>,
}
