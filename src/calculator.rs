use tracing::instrument;

use crate::config::StandingsConfig;
use crate::error::Result;
use crate::model::*;
use crate::standings;

/// The main entry point for turning a tournament's stored matches into
/// fixtures and a standings table.
///
/// `StandingsCalculator` owns the league rules and runs the whole pipeline:
/// normalize, group, resolve, aggregate.
///
/// # Examples
///
/// ```
/// # fn example() -> pickleball_standings::Result<()> {
/// use pickleball_standings::{StandingsCalculator, TournamentSnapshot};
///
/// let snapshot = TournamentSnapshot::from_json(r#"{"teams": [], "matches": []}"#)?;
/// let table = StandingsCalculator::new().standings_from_snapshot(&snapshot);
/// assert!(table.is_empty());
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct StandingsCalculator {
    config: StandingsConfig,
}

impl StandingsCalculator {
    /// Create a calculator with the default league rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with custom rules, rejecting inconsistent ones.
    pub fn with_config(config: StandingsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StandingsConfig {
        &self.config
    }

    /// Normalize and group stored matches into fixtures, with team details attached.
    #[instrument(skip_all, fields(matches = raws.len()))]
    pub fn fixtures(&self, raws: &[RawMatchRecord], teams: &[Team]) -> Vec<Fixture> {
        let mut fixtures = standings::fixtures::group_into_fixtures(
            standings::normalize::normalize_all(raws),
        );
        standings::fixtures::attach_team_details(&mut fixtures, teams);
        fixtures
    }

    /// Fixture summaries for the match list, in schedule order.
    #[instrument(skip_all, fields(matches = raws.len()))]
    pub fn summaries(&self, raws: &[RawMatchRecord], teams: &[Team]) -> Vec<FixtureSummary> {
        let mut fixtures = self.fixtures(raws, teams);
        standings::fixtures::sort_fixtures_by_schedule(&mut fixtures);
        fixtures
            .iter()
            .map(|f| standings::summary::summarize_fixture(f, &self.config))
            .collect()
    }

    /// The ranked league table for `teams`.
    #[instrument(skip_all, fields(teams = teams.len(), matches = raws.len()))]
    pub fn standings(&self, teams: &[Team], raws: &[RawMatchRecord]) -> Vec<RankedTeam> {
        let fixtures = self.fixtures(raws, teams);
        standings::table::aggregate_standings(teams, &fixtures, &self.config)
    }

    pub fn standings_from_snapshot(&self, snapshot: &TournamentSnapshot) -> Vec<RankedTeam> {
        self.standings(&snapshot.teams, &snapshot.matches)
    }
}
