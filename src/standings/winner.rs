use std::cmp::Ordering;

use tracing::trace;

use crate::model::{FixtureOutcome, FixtureResolution, MatchRecord, MatchStatus, Side};

/// Games won by each side over `game1..gameN`. Tied games count for neither.
pub(crate) fn game_wins(m: &MatchRecord) -> (u32, u32) {
    (1..=m.games_count).fold((0, 0), |(t1, t2), game| {
        let s1 = m.scores.game(Side::Team1, game);
        let s2 = m.scores.game(Side::Team2, game);
        match s1.cmp(&s2) {
            Ordering::Greater => (t1 + 1, t2),
            Ordering::Less => (t1, t2 + 1),
            Ordering::Equal => (t1, t2),
        }
    })
}

/// Winner of a single match by games won, ignoring its status.
pub fn match_winner(m: &MatchRecord) -> Option<Side> {
    let (t1, t2) = game_wins(m);
    match t1.cmp(&t2) {
        Ordering::Greater => Some(Side::Team1),
        Ordering::Less => Some(Side::Team2),
        Ordering::Equal => None,
    }
}

/// Count match wins per side over the completed matches in `matches`.
pub(crate) fn match_wins<'a>(matches: impl IntoIterator<Item = &'a MatchRecord>) -> (u32, u32) {
    matches
        .into_iter()
        .filter(|m| m.is_completed() && !m.scores.is_empty())
        .fold((0, 0), |(t1, t2), m| match match_winner(m) {
            Some(Side::Team1) => (t1 + 1, t2),
            Some(Side::Team2) => (t1, t2 + 1),
            None => (t1, t2),
        })
}

/// Decide a fixture from its effective matches.
///
/// A side that holds a majority of the effective matches has won, even with
/// matches still to play. A completed fixture without a majority goes to the
/// side with more match wins, or is drawn.
pub fn fixture_winner(resolution: &FixtureResolution<'_>) -> FixtureOutcome {
    let (team1_match_wins, team2_match_wins) =
        match_wins(resolution.effective_matches.iter().copied());
    let total = resolution.effective_matches.len() as u32;
    let needed = total.div_ceil(2);

    let mut outcome = FixtureOutcome {
        winner: None,
        decided: false,
        team1_match_wins,
        team2_match_wins,
    };

    if total > 0 && team1_match_wins >= needed && team1_match_wins > team2_match_wins {
        outcome.winner = Some(Side::Team1);
        outcome.decided = true;
    } else if total > 0 && team2_match_wins >= needed && team2_match_wins > team1_match_wins {
        outcome.winner = Some(Side::Team2);
        outcome.decided = true;
    } else if resolution.status == MatchStatus::Completed {
        outcome.decided = true;
        outcome.winner = match team1_match_wins.cmp(&team2_match_wins) {
            Ordering::Greater => Some(Side::Team1),
            Ordering::Less => Some(Side::Team2),
            Ordering::Equal => None,
        };
    }

    trace!(
        team1_match_wins,
        team2_match_wins,
        needed,
        decided = outcome.decided,
        winner = ?outcome.winner,
        "resolved fixture winner"
    );
    outcome
}
