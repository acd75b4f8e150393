//! Tree error types.

use std::error::Error;
use std::fmt;

use arbor_arena::ArenaError;

/// Errors from fallible tree mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// The backing arena refused to allocate a node.
    Arena(ArenaError),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arena(e) => write!(f, "node allocation failed: {e}"),
        }
    }
}

impl Error for TreeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
        }
    }
}

impl From<ArenaError> for TreeError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}
