use crate::config::StandingsConfig;
use crate::model::{Fixture, FixtureSummary, MatchSummary};
use crate::standings::fixtures::sort_matches_by_type;
use crate::standings::status::resolve_status;
use crate::standings::winner::{fixture_winner, match_winner};

/// Build the view of a fixture shown on the match list and the fixture
/// detail screen. Matches are listed in match type order.
pub fn summarize_fixture(fixture: &Fixture, config: &StandingsConfig) -> FixtureSummary {
    let resolution = resolve_status(fixture, config);
    let outcome = fixture_winner(&resolution);

    let mut ordered = fixture.matches.clone();
    sort_matches_by_type(&mut ordered, config);
    let matches = ordered
        .iter()
        .map(|m| MatchSummary {
            id: m.id.clone(),
            match_type_label: m.match_type_label.clone(),
            status: m.status,
            is_decider: m.is_decider(config),
            winner: if m.is_completed() { match_winner(m) } else { None },
        })
        .collect();

    FixtureSummary {
        id: fixture.id.clone(),
        team1_id: fixture.team1_id.clone(),
        team2_id: fixture.team2_id.clone(),
        team1_name: fixture.team1_name.clone(),
        team2_name: fixture.team2_name.clone(),
        fixture_type: fixture.fixture_type.clone(),
        date: fixture.date,
        time: fixture.time.clone(),
        status: resolution.status,
        decider_excluded: resolution.exclude_decider,
        outcome,
        matches,
    }
}
