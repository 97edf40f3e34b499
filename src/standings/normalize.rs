use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use itertools::Itertools;
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::DEFAULT_GAMES_COUNT;
use crate::model::{MatchRecord, MatchScores, MatchStatus, RawMatchRecord, RawTimestamp};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

pub fn normalize_all(raws: &[RawMatchRecord]) -> Vec<MatchRecord> {
    raws.iter().map(normalize).collect()
}

/// Coerce a stored match into its canonical shape. Never fails.
pub fn normalize(raw: &RawMatchRecord) -> MatchRecord {
    let status = raw
        .status
        .as_deref()
        .map(|s| {
            MatchStatus::from_str(s).unwrap_or_else(|_| {
                trace!(id = %raw.id, status = s, "unknown match status, treating as scheduled");
                MatchStatus::Scheduled
            })
        })
        .unwrap_or_default();

    let scores = raw
        .scores
        .as_ref()
        .map(|s| MatchScores {
            team1: s
                .player1
                .iter()
                .map(|(game, v)| (game.clone(), coerce_score(v)))
                .collect(),
            team2: s
                .player2
                .iter()
                .map(|(game, v)| (game.clone(), coerce_score(v)))
                .collect(),
        })
        .unwrap_or_default();

    let date = raw.date.as_ref().map(|d| {
        parse_timestamp(d).unwrap_or_else(|| {
            debug!(id = %raw.id, raw = ?d, "unparseable match date, using current time");
            Utc::now()
        })
    });

    MatchRecord {
        id: raw.id.clone(),
        fixture_group_id: raw.fixture_group_id.clone().filter(|g| !g.is_empty()),
        team1_id: raw.team1.clone(),
        team2_id: raw.team2.clone(),
        team1_name: raw.team1_name.clone(),
        team2_name: raw.team2_name.clone(),
        match_type: raw.match_type.clone(),
        match_type_label: raw.match_type_label.clone(),
        games_count: raw
            .games_count
            .as_ref()
            .map(coerce_score)
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_GAMES_COUNT),
        scores,
        status,
        fixture_type: raw.fixture_type.clone(),
        date,
        time: raw.time.clone().or_else(|| raw.playing_time.clone()),
    }
}

/// Integer value of a stored score; anything non-numeric counts as 0.
pub(crate) fn coerce_score(value: &Value) -> i32 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .and_then(|n| i32::try_from(n).ok())
            .unwrap_or(0),
        Value::String(s) => parse_leading_int(s),
        _ => 0,
    }
}

/// Reads an optional sign and the digits that follow, ignoring any trailing text.
fn parse_leading_int(text: &str) -> i32 {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i32>().map(|n| sign * n).unwrap_or(0)
}

pub fn parse_timestamp(raw: &RawTimestamp) -> Option<DateTime<Utc>> {
    match raw {
        RawTimestamp::Firestore {
            seconds,
            nanoseconds,
        } => {
            let ms = seconds * 1000.0 + nanoseconds / 1_000_000.0;
            if ms.is_finite() {
                DateTime::from_timestamp_millis(ms.trunc() as i64)
            } else {
                None
            }
        }
        RawTimestamp::Millis(ms) if ms.is_finite() => {
            DateTime::from_timestamp_millis(ms.trunc() as i64)
        }
        RawTimestamp::Millis(_) => None,
        RawTimestamp::Text(text) => parse_date_text(text),
        RawTimestamp::Other(_) => None,
    }
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = DATE_TIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(text, f).ok())
    {
        return Some(dt.and_utc());
    }
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(text, f).ok())
    {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    parse_numeric_date(text)
}

/// `MM/DD/YYYY`, then `DD/MM/YYYY`, then `YYYY/MM/DD`, split on `/` or `-`.
/// A trailing time of day is ignored.
fn parse_numeric_date(text: &str) -> Option<DateTime<Utc>> {
    let date_part = text.split_whitespace().next()?;
    let (a, b, c) = date_part
        .split(['/', '-'])
        .map(|p| p.trim().parse::<u32>().ok())
        .collect_tuple()?;
    let (a, b, c) = (a?, b?, c?);

    let date = if a > 999 {
        NaiveDate::from_ymd_opt(a as i32, b, c)
    } else {
        NaiveDate::from_ymd_opt(c as i32, a, b)
            .or_else(|| NaiveDate::from_ymd_opt(c as i32, b, a))
    };
    date.and_then(|d| d.and_hms_opt(0, 0, 0)).map(|dt| dt.and_utc())
}
