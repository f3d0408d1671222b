//! Rendering of search results.

use std::fmt;

use rover_paths::{SearchResult, Strategy};
use serde::Serialize;

/// One strategy's result, as printed.
#[derive(Debug, Serialize)]
pub struct Report {
    pub strategy: Strategy,
    #[serde(flatten)]
    pub result: SearchResult,
}

impl Report {
    /// Human-readable form, optionally listing every visited state.
    pub fn text(&self, trace: bool) -> TextReport<'_> {
        TextReport {
            report: self,
            trace,
        }
    }
}

/// [`Display`](fmt::Display) adapter for a [`Report`].
pub struct TextReport<'a> {
    report: &'a Report,
    trace: bool,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.report.result;
        writeln!(f, "{}: {}", self.report.strategy, r.summary())?;
        if r.is_found() {
            write!(f, "  path:")?;
            for (i, p) in r.path.iter().enumerate() {
                let sep = if i == 0 { " " } else { " -> " };
                write!(f, "{sep}{p}")?;
            }
            writeln!(f)?;
        } else {
            writeln!(f, "  no route found")?;
        }
        if self.trace {
            for (i, s) in r.visited_order.iter().enumerate() {
                writeln!(f, "  {i:>4}  {}  battery {}", s.pos, s.battery)?;
            }
        }
        Ok(())
    }
}

pub fn json(reports: &[Report]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
