use std::collections::HashMap;

use tracing::debug;

use crate::config::StandingsConfig;
use crate::model::{Fixture, MatchRecord, Team};

/// Group matches into fixtures by `fixture_group_id`, falling back to the
/// match id. Fixtures come out in the order their first match was seen.
pub fn group_into_fixtures(matches: Vec<MatchRecord>) -> Vec<Fixture> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut fixtures: Vec<Fixture> = Vec::new();

    for m in matches {
        let key = m.group_key().to_string();
        match index.get(&key) {
            Some(&i) => fixtures[i].matches.push(m),
            None => {
                index.insert(key.clone(), fixtures.len());
                fixtures.push(seed_fixture(key, m));
            }
        }
    }

    debug!(count = fixtures.len(), "grouped matches into fixtures");
    fixtures
}

fn seed_fixture(id: String, first: MatchRecord) -> Fixture {
    Fixture {
        id,
        team1_id: first.team1_id.clone(),
        team2_id: first.team2_id.clone(),
        team1_name: first.team1_name.clone(),
        team2_name: first.team2_name.clone(),
        team1: None,
        team2: None,
        fixture_type: first.fixture_type.clone(),
        date: first.date,
        time: first.time.clone(),
        matches: vec![first],
    }
}

/// Fill in team details from the team list. Display names the matches did
/// not carry are taken from the team.
pub fn attach_team_details(fixtures: &mut [Fixture], teams: &[Team]) {
    let by_id: HashMap<&str, &Team> = teams.iter().map(|t| (t.id.as_str(), t)).collect();

    for fixture in fixtures.iter_mut() {
        if let Some(team) = by_id.get(fixture.team1_id.as_str()) {
            fixture.team1_name.get_or_insert_with(|| team.name.clone());
            fixture.team1 = Some((*team).clone());
        }
        if let Some(team) = by_id.get(fixture.team2_id.as_str()) {
            fixture.team2_name.get_or_insert_with(|| team.name.clone());
            fixture.team2 = Some((*team).clone());
        }
    }
}

/// Order matches by the configured match type order. Labels that are not
/// listed keep their encounter order after the listed ones.
pub fn sort_matches_by_type(matches: &mut [MatchRecord], config: &StandingsConfig) {
    matches.sort_by_key(|m| {
        config
            .match_type_rank(m.match_type_label.as_deref())
            .unwrap_or(usize::MAX)
    });
}

/// Chronological order; fixtures without a date go last.
pub fn sort_fixtures_by_schedule(fixtures: &mut [Fixture]) {
    fixtures.sort_by_key(|f| (f.date.is_none(), f.date));
}
