//! Engine tunables.
//!
//! Each engine instance owns its own configuration; defaults are initial
//! state, not process-wide globals. Setters store blindly: `min_weight`
//! above `max_weight` is a valid, if surprising, state in which the
//! threshold step can discard every candidate.

/// Weight floor below which a match is discarded. 0 keeps every match.
pub const DEFAULT_MIN_WEIGHT: u32 = 0;
/// Cap applied to a single candidate's summed field scores.
pub const DEFAULT_MAX_WEIGHT: u32 = 1000;
/// Characters splitting a filter into comparison tokens.
pub const DEFAULT_DELIMITERS: &str = " -_.,";
pub const DEFAULT_SEARCH_LIMIT: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub min_weight: u32,
    pub max_weight: u32,
    /// `None` or empty disables splitting even when `use_delimiter` is set.
    pub delimiter: Option<String>,
    pub use_delimiter: bool,
    pub search_limit: u32,
    /// When false, `search_limit` is ignored and all matches are returned.
    pub limited_search: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_weight: DEFAULT_MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
            delimiter: Some(DEFAULT_DELIMITERS.to_string()),
            use_delimiter: true,
            search_limit: DEFAULT_SEARCH_LIMIT,
            limited_search: false,
        }
    }
}
