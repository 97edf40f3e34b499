use serde::{Deserialize, Serialize};

/// A team document. Fields beyond the ones the standings use are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo: Option<TeamLogo>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLogo {
    pub url: String,
}

/// Cumulative league record of one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub battle_wins: u32,
    pub battle_losses: u32,
    pub points: u32,
    pub game_wins: u32,
    pub game_losses: u32,
    pub points_won: i64,
    pub points_lost: i64,
}

impl TeamStats {
    pub fn games_difference(&self) -> i64 {
        i64::from(self.game_wins) - i64::from(self.game_losses)
    }

    pub fn points_difference(&self) -> i64 {
        self.points_won - self.points_lost
    }
}

/// A row of the standings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedTeam {
    pub id: String,
    pub name: String,
    pub logo: Option<TeamLogo>,
    #[serde(flatten)]
    pub stats: TeamStats,
    pub games_difference: i64,
    pub points_difference: i64,
    pub rank: usize,
}
