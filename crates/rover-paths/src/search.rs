//! Bookkeeping shared by the three drivers.

use std::collections::HashSet;

use crate::path::{Parents, reconstruct_path};
use crate::result::SearchResult;
use crate::state::State;

/// Per-run visited set, predecessor map and trace.
pub(crate) struct Expansion {
    name: &'static str,
    visited: HashSet<State>,
    parents: Parents,
    trace: Vec<State>,
}

impl Expansion {
    /// Start a run rooted at `start`, which is discovered with no parent.
    pub(crate) fn new(name: &'static str, start: State) -> Self {
        log::debug!("{name}: start {} battery {}", start.pos, start.battery);
        let mut parents = Parents::new();
        parents.insert(start, None);
        Self {
            name,
            visited: HashSet::new(),
            parents,
            trace: Vec::new(),
        }
    }

    /// Mark `s` visited and record it in the trace. Returns `false` if it
    /// was already visited, in which case the pop is a stale duplicate.
    pub(crate) fn finalize(&mut self, s: State) -> bool {
        if !self.visited.insert(s) {
            return false;
        }
        log::trace!("{}: visit {s}", self.name);
        self.trace.push(s);
        true
    }

    #[inline]
    pub(crate) fn is_visited(&self, s: &State) -> bool {
        self.visited.contains(s)
    }

    #[inline]
    pub(crate) fn is_discovered(&self, s: &State) -> bool {
        self.parents.contains_key(s)
    }

    /// Record `parent` as the predecessor of `s`, unless `s` already has one.
    pub(crate) fn discover(&mut self, s: State, parent: State) {
        self.parents.entry(s).or_insert(Some(parent));
    }

    pub(crate) fn success(self, goal: State) -> SearchResult {
        let path = reconstruct_path(&self.parents, goal);
        log::debug!(
            "{}: reached goal {} with battery {} after {} expansions",
            self.name,
            goal.pos,
            goal.battery,
            self.trace.len()
        );
        SearchResult::found(self.trace, path, goal.battery)
    }

    pub(crate) fn exhausted(self) -> SearchResult {
        log::debug!(
            "{}: no goal reachable after {} expansions",
            self.name,
            self.trace.len()
        );
        SearchResult::exhausted(self.trace)
    }
}
