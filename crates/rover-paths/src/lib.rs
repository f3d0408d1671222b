//! Battery-constrained state-space search over terrain grids.
//!
//! A rover moves between axis-adjacent cells of a
//! [`TerrainGrid`](rover_core::TerrainGrid), paying each entered cell's
//! terrain cost out of a finite battery. The search runs over *expanded*
//! states (cell plus remaining battery), so a cell reached again with a
//! different charge is explored again.
//!
//! Three strategies share one request and result shape:
//!
//! - **Depth-first** ([`depth_first`]): exhaustive, stack-based, returns the
//!   first goal it finalizes.
//! - **Breadth-first** ([`breadth_first`]): fewest moves.
//! - **Greedy best-first** ([`best_first`]): ordered by Manhattan distance
//!   to the nearest goal cell, using [`MinQueue`].
//!
//! Every run is a fresh synchronous computation; nothing is shared between
//! calls, so independent threads may search the same grid concurrently.

mod audit;
mod best_first;
mod bfs;
mod dfs;
mod path;
mod queue;
mod request;
mod result;
mod search;
mod state;
mod strategy;

pub use audit::{PathAuditError, audit_path};
pub use best_first::best_first;
pub use bfs::breadth_first;
pub use dfs::depth_first;
pub use path::{Parents, reconstruct_path};
pub use queue::MinQueue;
pub use request::{SearchError, SearchRequest};
pub use result::SearchResult;
pub use state::{State, StateSpace};
pub use strategy::{Strategy, UnknownStrategy};
