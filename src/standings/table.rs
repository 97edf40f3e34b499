use std::cmp::Ordering;
use std::collections::HashMap;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::config::StandingsConfig;
use crate::model::{
    Fixture, FixtureOutcome, MatchRecord, MatchStatus, RankedTeam, Side, Team, TeamStats,
};
use crate::standings::status::resolve_status;
use crate::standings::winner::{fixture_winner, game_wins};

/// Games and points of one fixture, from team1's point of view.
#[derive(Debug, Default, Clone, Copy)]
struct FixtureTally {
    team1_games: u32,
    team2_games: u32,
    team1_points: i64,
    team2_points: i64,
}

impl FixtureTally {
    fn from_matches(matches: &[&MatchRecord], config: &StandingsConfig) -> Self {
        matches
            .iter()
            .filter(|m| !m.is_decider(config))
            .fold(Self::default(), |mut tally, m| {
                let (t1, t2) = game_wins(m);
                tally.team1_games += t1;
                tally.team2_games += t2;
                for game in 1..=m.games_count {
                    tally.team1_points += i64::from(m.scores.game(Side::Team1, game));
                    tally.team2_points += i64::from(m.scores.game(Side::Team2, game));
                }
                tally
            })
    }

    fn apply(&self, stats: &mut TeamStats, side: Side) {
        let (won, lost, points_won, points_lost) = match side {
            Side::Team1 => (
                self.team1_games,
                self.team2_games,
                self.team1_points,
                self.team2_points,
            ),
            Side::Team2 => (
                self.team2_games,
                self.team1_games,
                self.team2_points,
                self.team1_points,
            ),
        };
        stats.game_wins += won;
        stats.game_losses += lost;
        stats.points_won += points_won;
        stats.points_lost += points_lost;
    }
}

/// Fold every league fixture into per-team records and rank the teams.
///
/// Playoff fixtures are ignored. In-progress fixtures contribute their games
/// so far, and a battle result as soon as the fixture is decided.
pub fn aggregate_standings(
    teams: &[Team],
    fixtures: &[Fixture],
    config: &StandingsConfig,
) -> Vec<RankedTeam> {
    let mut stats: HashMap<&str, TeamStats> = teams
        .iter()
        .map(|t| (t.id.as_str(), TeamStats::default()))
        .collect();

    let mut counted = 0;
    for fixture in fixtures {
        if config.is_playoff(fixture.fixture_type.as_deref()) {
            trace!(fixture = %fixture.id, "skipping playoff fixture");
            continue;
        }
        let resolution = resolve_status(fixture, config);
        if resolution.status == MatchStatus::Scheduled {
            continue;
        }
        let outcome = fixture_winner(&resolution);
        let tally = FixtureTally::from_matches(&resolution.effective_matches, config);
        counted += 1;

        for team_id in [fixture.team1_id.as_str(), fixture.team2_id.as_str()]
            .into_iter()
            .unique()
        {
            let (Some(entry), Some(side)) = (stats.get_mut(team_id), fixture.side_of(team_id))
            else {
                continue;
            };
            tally.apply(entry, side);
            record_battle(entry, side, &outcome, config);
        }
    }

    let ranked = teams
        .iter()
        .map(|team| {
            let stats = stats.get(team.id.as_str()).copied().unwrap_or_default();
            (team, stats)
        })
        .sorted_by(|(_, a), (_, b)| compare_standings(a, b))
        .enumerate()
        .map(|(i, (team, stats))| RankedTeam {
            id: team.id.clone(),
            name: team.name.clone(),
            logo: team.logo.clone(),
            stats,
            games_difference: stats.games_difference(),
            points_difference: stats.points_difference(),
            rank: i + 1,
        })
        .collect_vec();

    debug!(
        teams = ranked.len(),
        fixtures = fixtures.len(),
        counted,
        "aggregated standings"
    );
    ranked
}

fn record_battle(
    stats: &mut TeamStats,
    side: Side,
    outcome: &FixtureOutcome,
    config: &StandingsConfig,
) {
    if !outcome.decided {
        return;
    }
    match outcome.winner {
        Some(winner) if winner == side => {
            stats.battle_wins += 1;
            stats.points += config.points_per_win;
        }
        Some(_) => stats.battle_losses += 1,
        None => {}
    }
}

/// Points, battle wins, games difference, points difference; all descending.
pub(crate) fn compare_standings(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.battle_wins.cmp(&a.battle_wins))
        .then_with(|| b.games_difference().cmp(&a.games_difference()))
        .then_with(|| b.points_difference().cmp(&a.points_difference()))
}
