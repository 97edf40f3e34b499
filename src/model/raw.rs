use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::model::Team;

/// A match document as stored in the remote database, before normalization.
///
/// Fields with an unexpected JSON type read as absent instead of failing the
/// whole snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatchRecord {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub fixture_group_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub team1: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub team2: String,
    #[serde(default, deserialize_with = "lenient")]
    pub team1_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub team2_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub match_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub match_type_label: Option<String>,
    /// Coerced like a score during normalization.
    #[serde(default)]
    pub games_count: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub scores: Option<RawScores>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub fixture_type: Option<String>,
    #[serde(default)]
    pub date: Option<RawTimestamp>,
    #[serde(default, deserialize_with = "lenient")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub playing_time: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Ids are strings, but numeric ids show up in older documents.
fn lenient_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Per-side game scores. Values are left as raw JSON because the store holds
/// numbers, numeric strings and the occasional garbage side by side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawScores {
    #[serde(default, alias = "team1")]
    pub player1: BTreeMap<String, Value>,
    #[serde(default, alias = "team2")]
    pub player2: BTreeMap<String, Value>,
}

/// The date shapes found in match documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    /// Store-native timestamp, serialized as seconds plus nanoseconds.
    Firestore {
        #[serde(alias = "_seconds")]
        seconds: f64,
        #[serde(default, alias = "_nanoseconds")]
        nanoseconds: f64,
    },
    /// Milliseconds since the Unix epoch.
    Millis(f64),
    Text(String),
    /// Anything else; normalizes like an unparseable date.
    Other(Value),
}

/// Everything the pipeline needs for one tournament: the teams and every match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TournamentSnapshot {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub matches: Vec<RawMatchRecord>,
}

impl TournamentSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_shapes() {
        let ts: RawTimestamp =
            serde_json::from_str(r#"{"seconds": 10, "nanoseconds": 5}"#).unwrap();
        assert_eq!(
            ts,
            RawTimestamp::Firestore {
                seconds: 10.0,
                nanoseconds: 5.0
            }
        );
        let ts: RawTimestamp = serde_json::from_str(r#"{"_seconds": 10}"#).unwrap();
        assert_eq!(
            ts,
            RawTimestamp::Firestore {
                seconds: 10.0,
                nanoseconds: 0.0
            }
        );
        let ts: RawTimestamp = serde_json::from_str("1700000000000").unwrap();
        assert_eq!(ts, RawTimestamp::Millis(1_700_000_000_000.0));
        let ts: RawTimestamp = serde_json::from_str(r#""12/03/2024""#).unwrap();
        assert_eq!(ts, RawTimestamp::Text("12/03/2024".to_string()));
        let ts: RawTimestamp = serde_json::from_str(r#"{"seconds": 1700000000.5}"#).unwrap();
        assert!(matches!(ts, RawTimestamp::Firestore { .. }));
        let ts: RawTimestamp = serde_json::from_str("{}").unwrap();
        assert!(matches!(ts, RawTimestamp::Other(_)));
        let ts: RawTimestamp = serde_json::from_str("true").unwrap();
        assert!(matches!(ts, RawTimestamp::Other(_)));
    }

    #[test]
    fn test_snapshot_from_json() {
        let json = r#"{
            "teams": [{
                "id": "t1",
                "name": "Dinkers",
                "logo": {"url": "https://x/logo.png"},
                "city": "Pune"
            }],
            "matches": [{
                "id": "m1",
                "fixtureGroupId": "f1",
                "team1": "t1",
                "team2": "t2",
                "matchTypeLabel": "Men's Doubles",
                "scores": {"player1": {"game1": "11", "game2": 9}, "team2": {"game1": 7}},
                "status": "completed",
                "date": {"seconds": 1700000000}
            }]
        }"#;
        let snapshot = TournamentSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.teams.len(), 1);
        assert!(snapshot.teams[0].extra.contains_key("city"));
        let raw = &snapshot.matches[0];
        assert_eq!(raw.fixture_group_id.as_deref(), Some("f1"));
        let scores = raw.scores.as_ref().unwrap();
        assert_eq!(scores.player1.len(), 2);
        assert_eq!(scores.player2.len(), 1);
    }

    #[test]
    fn test_snapshot_survives_one_malformed_match() {
        let bad_matches = [
            r#"{"id": "bad", "date": {}}"#,
            r#"{"id": "bad", "date": {"seconds": 1700000000.5}}"#,
            r#"{"id": "bad", "date": true}"#,
            r#"{"id": "bad", "gamesCount": "5"}"#,
            r#"{"id": "bad", "gamesCount": 5.0}"#,
            r#"{"id": "bad", "status": 3, "scores": [1, 2], "fixtureGroupId": null}"#,
            r#"{"id": 42, "team1": 7, "matchTypeLabel": {"en": "Men's Doubles"}}"#,
        ];
        for bad in bad_matches {
            let json = format!(
                r#"{{"matches": [{{"id": "good", "team1": "a", "team2": "b"}}, {bad}]}}"#
            );
            let snapshot = TournamentSnapshot::from_json(&json)
                .unwrap_or_else(|e| panic!("{bad} rejected the snapshot: {e}"));
            assert_eq!(snapshot.matches.len(), 2, "{bad}");
            assert_eq!(snapshot.matches[0].team1, "a");
        }
    }

    #[test]
    fn test_lenient_fields_read_as_absent() {
        let json = r#"{"matches": [{
            "id": 42, "team1": 7, "status": 3, "scores": [1, 2], "time": "10:00"
        }]}"#;
        let snapshot = TournamentSnapshot::from_json(json).unwrap();
        let raw = &snapshot.matches[0];
        assert_eq!(raw.id, "42");
        assert_eq!(raw.team1, "7");
        assert!(raw.status.is_none());
        assert!(raw.scores.is_none());
        assert_eq!(raw.time.as_deref(), Some("10:00"));
    }

    #[test]
    fn test_snapshot_rejects_missing_id() {
        assert!(TournamentSnapshot::from_json(r#"{"matches": [{"team1": "a"}]}"#).is_err());
    }
}
