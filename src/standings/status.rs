use itertools::Itertools;
use tracing::trace;

use crate::config::StandingsConfig;
use crate::model::{Fixture, FixtureResolution, MatchRecord, MatchStatus};
use crate::standings::winner::match_wins;

/// Derive a fixture's status and the matches that count towards its result.
///
/// Once `early_decision_matches` regular matches are completed and one side
/// holds `early_decision_wins` of them, the fixture is complete and its
/// decider is dropped, even if it was played. A level split leaves the
/// decider in play, so the fixture stays open until the decider is completed.
pub fn resolve_status<'a>(
    fixture: &'a Fixture,
    config: &StandingsConfig,
) -> FixtureResolution<'a> {
    let (regular, deciders): (Vec<&MatchRecord>, Vec<&MatchRecord>) = fixture
        .matches
        .iter()
        .partition(|m| !m.is_decider(config));
    let completed_regular = regular.iter().copied().filter(|m| m.is_completed()).collect_vec();

    let locked_early = completed_regular.len() >= config.early_decision_matches && {
        let (team1_wins, team2_wins) = match_wins(completed_regular.iter().copied());
        let threshold = u32::try_from(config.early_decision_wins).unwrap_or(u32::MAX);
        team1_wins >= threshold || team2_wins >= threshold
    };

    if locked_early {
        trace!(
            fixture = %fixture.id,
            deciders = deciders.len(),
            "fixture locked before the decider"
        );
        return FixtureResolution {
            status: MatchStatus::Completed,
            exclude_decider: true,
            effective_matches: regular,
        };
    }

    let effective_matches = fixture.matches.iter().collect_vec();
    let status = overall_status(&effective_matches);
    FixtureResolution {
        status,
        exclude_decider: false,
        effective_matches,
    }
}

fn overall_status(matches: &[&MatchRecord]) -> MatchStatus {
    if !matches.is_empty() && matches.iter().all(|m| m.is_completed()) {
        MatchStatus::Completed
    } else if matches
        .iter()
        .any(|m| matches!(m.status, MatchStatus::Completed | MatchStatus::InProgress))
    {
        MatchStatus::InProgress
    } else {
        MatchStatus::Scheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::{regular_matches, test_fixture, test_match, TEAM1_WIN, TEAM2_WIN};

    fn decider(status: MatchStatus, games: &[(i32, i32)]) -> MatchRecord {
        test_match("f1-decider", "f1", "Dream Breaker", status, games)
    }

    #[test]
    fn test_decider_excluded_after_four_of_six() {
        let mut matches = regular_matches("f1", 4);
        matches.push(decider(MatchStatus::Completed, TEAM2_WIN));
        let fixture = test_fixture("f1", matches);

        let resolution = resolve_status(&fixture, &StandingsConfig::default());
        assert_eq!(resolution.status, MatchStatus::Completed);
        assert!(resolution.exclude_decider);
        assert_eq!(resolution.effective_matches.len(), 6);
        assert!(resolution
            .effective_matches
            .iter()
            .all(|m| m.id != "f1-decider"));
    }

    #[test]
    fn test_locked_even_when_decider_unplayed() {
        let mut matches = regular_matches("f1", 5);
        matches.push(decider(MatchStatus::Scheduled, &[]));
        let fixture = test_fixture("f1", matches);

        let resolution = resolve_status(&fixture, &StandingsConfig::default());
        assert_eq!(resolution.status, MatchStatus::Completed);
        assert!(resolution.exclude_decider);
    }

    #[test]
    fn test_split_waits_for_decider() {
        let mut matches = regular_matches("f1", 3);
        matches.push(decider(MatchStatus::Scheduled, &[]));
        let fixture = test_fixture("f1", matches);

        let resolution = resolve_status(&fixture, &StandingsConfig::default());
        assert_eq!(resolution.status, MatchStatus::InProgress);
        assert!(!resolution.exclude_decider);
        assert_eq!(resolution.effective_matches.len(), 7);
    }

    #[test]
    fn test_split_with_completed_decider() {
        let mut matches = regular_matches("f1", 3);
        matches.push(decider(MatchStatus::Completed, TEAM2_WIN));
        let fixture = test_fixture("f1", matches);

        let resolution = resolve_status(&fixture, &StandingsConfig::default());
        assert_eq!(resolution.status, MatchStatus::Completed);
        assert!(!resolution.exclude_decider);
        assert_eq!(resolution.effective_matches.len(), 7);
    }

    #[test]
    fn test_too_few_regular_matches_for_early_lock() {
        let mut matches: Vec<MatchRecord> = regular_matches("f1", 5).into_iter().take(5).collect();
        matches.push(test_match("f1-m5", "f1", "Mixed Doubles", MatchStatus::InProgress, &[]));
        matches.push(decider(MatchStatus::Scheduled, &[]));
        let fixture = test_fixture("f1", matches);

        let resolution = resolve_status(&fixture, &StandingsConfig::default());
        assert_eq!(resolution.status, MatchStatus::InProgress);
        assert!(!resolution.exclude_decider);
    }

    #[test]
    fn test_small_fixture_statuses() {
        let config = StandingsConfig::default();
        let scheduled = test_fixture(
            "f1",
            vec![test_match("m1", "f1", "Men's Doubles", MatchStatus::Scheduled, &[])],
        );
        assert_eq!(resolve_status(&scheduled, &config).status, MatchStatus::Scheduled);

        let done = test_fixture(
            "f2",
            vec![
                test_match("m1", "f2", "Men's Doubles", MatchStatus::Completed, TEAM1_WIN),
                test_match("m2", "f2", "Men's Doubles", MatchStatus::Completed, TEAM2_WIN),
            ],
        );
        assert_eq!(resolve_status(&done, &config).status, MatchStatus::Completed);

        let empty = test_fixture("f3", vec![]);
        assert_eq!(resolve_status(&empty, &config).status, MatchStatus::Scheduled);
    }

    #[test]
    fn test_thresholds_follow_config() {
        let config = StandingsConfig {
            early_decision_matches: 4,
            early_decision_wins: 3,
            ..Default::default()
        };
        let mut matches: Vec<MatchRecord> = regular_matches("f1", 3).into_iter().take(4).collect();
        matches.push(decider(MatchStatus::Scheduled, &[]));
        let fixture = test_fixture("f1", matches);

        let resolution = resolve_status(&fixture, &config);
        assert_eq!(resolution.status, MatchStatus::Completed);
        assert!(resolution.exclude_decider);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_threshold_beyond_u32_never_locks() {
        let config = StandingsConfig {
            early_decision_wins: (1 << 32) + 4,
            ..Default::default()
        };
        let mut matches = regular_matches("f1", 6);
        matches.push(decider(MatchStatus::Scheduled, &[]));
        let fixture = test_fixture("f1", matches);

        let resolution = resolve_status(&fixture, &config);
        assert!(!resolution.exclude_decider);
        assert_eq!(resolution.status, MatchStatus::InProgress);
    }
}
