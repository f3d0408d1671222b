use std::fmt;
use std::path::PathBuf;

use rover_core::GridError;
use rover_paths::SearchError;

/// Errors surfaced by the command-line front end.
#[derive(Debug)]
pub enum CliError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Grid(GridError),
    Search(SearchError),
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Grid(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "invalid request: {e}"),
            Self::Json(e) => write!(f, "cannot encode result: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<GridError> for CliError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError> for CliError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
