pub use calculator::StandingsCalculator;
pub use config::{StandingsConfig, DEFAULT_GAMES_COUNT};
pub use error::{Result, StandingsError};
pub use model::*;
pub use standings::fixtures::{
    attach_team_details, group_into_fixtures, sort_fixtures_by_schedule, sort_matches_by_type,
};
pub use standings::normalize::{normalize, normalize_all, parse_timestamp};
pub use standings::status::resolve_status;
pub use standings::summary::summarize_fixture;
pub use standings::table::aggregate_standings;
pub use standings::winner::{fixture_winner, match_winner};

mod calculator;
pub mod config;
pub mod error;
pub mod model;
pub(crate) mod standings;
