use super::Path;
use crate::Cost;

/// The outcome of a completed search.
///
/// `NotFound` is a regular outcome: every Path from start to goal is blocked, or one of them
/// is blocked itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathResult {
    /// A cheapest Path from start to goal
    Found(Path),
    /// The goal cannot be reached from the start
    NotFound,
}

impl PathResult {
    /// Whether a Path was found.
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    /// The Path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }

    /// The total cost of the Path, if one was found.
    pub fn total_cost(&self) -> Option<Cost> {
        self.path().map(Path::cost)
    }

    /// Consumes the result and returns the Path, if one was found.
    pub fn into_path(self) -> Option<Path> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }
}
