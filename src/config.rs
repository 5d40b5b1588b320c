//! Station name matching options.

/// How a station name query is matched against stop names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Compare names exactly as written. When false, both sides are lowercased first.
    pub case_sensitive: bool,

    /// Whether an empty or whitespace-only query selects every stop.
    /// When false such a query selects nothing.
    pub empty_query_matches_all: bool,
}

impl MatchConfig {
    pub fn new(case_sensitive: bool, empty_query_matches_all: bool) -> Self {
        Self {
            case_sensitive,
            empty_query_matches_all,
        }
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_empty_query_matches_all(mut self, empty_query_matches_all: bool) -> Self {
        self.empty_query_matches_all = empty_query_matches_all;
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            empty_query_matches_all: false,
        }
    }
}
