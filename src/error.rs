/// All errors that can occur while loading tournament data or rules.
///
/// The standings pipeline itself never fails; only the JSON loaders and
/// configuration validation return these.
#[derive(thiserror::Error, Debug)]
pub enum StandingsError {
    /// A snapshot or configuration document was not valid JSON for its shape.
    #[error("failed to parse json: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value breaks one of the scoring rules.
    #[error("invalid config field {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, StandingsError>;
