use std::fmt;
use std::str::FromStr;

use crate::best_first::best_first;
use crate::bfs::breadth_first;
use crate::dfs::depth_first;
use crate::request::{SearchError, SearchRequest};
use crate::result::SearchResult;

/// The search strategies a caller can choose between.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    BestFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::BestFirst,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "depth-first",
            Strategy::BreadthFirst => "breadth-first",
            Strategy::BestFirst => "best-first",
        }
    }

    /// Run this strategy to completion.
    pub fn run(self, req: &SearchRequest<'_>) -> Result<SearchResult, SearchError> {
        match self {
            Strategy::DepthFirst => depth_first(req),
            Strategy::BreadthFirst => breadth_first(req),
            Strategy::BestFirst => best_first(req),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy \u{201c}{}\u{201d} (expected dfs, bfs or best)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, UnknownStrategy> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "best" | "bestfs" | "best-first" => Ok(Strategy::BestFirst),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serialized_names_match_display() {
        for s in Strategy::ALL {
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, format!("\"{}\"", s.name()));
            let back: Strategy = serde_json::from_str(&json).unwrap();
            assert_eq!(back, s);
        }
        assert_eq!(
            serde_json::to_string(&Strategy::BestFirst).unwrap(),
            r#""best-first""#
        );
    }
}
