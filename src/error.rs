//! Errors raised while building or driving a Merkle signing agent
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Enum of errors associated with Merkle signatures
pub enum Error {
    /// The requested tree height is outside of `MIN_TREE_HEIGHT..=MAX_TREE_HEIGHT`.
    InvalidTreeHeight(u32),
    /// The reserved LM-OTS algorithm was selected.
    InvalidLmotsAlgorithm,
    /// A tree hash instance was asked to start at a leaf which is not the leftmost
    /// leaf of a subtree of the target height, or the target height is too large.
    InvalidStartLeaf {
        start_leaf: u32,
        target_height: u32,
    },
    /// Every one-time key of the tree has already been used.
    KeyExhausted {
        /// Number of leaves of the exhausted tree.
        leaves: u64,
    },
    /// The one-time signature primitive could not produce a signature. Indicates a
    /// corrupted key schedule and must not be retried.
    SigningFailed(&'static str),
    /// A node was requested from a tree hash instance that holds none.
    EmptyTreeHashStack,
    /// An authentication node became due before its tree hash instance finished.
    TreeHashIncomplete {
        level: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTreeHeight(height) => write!(f, "invalid tree height {}", height),
            Error::InvalidLmotsAlgorithm => write!(f, "reserved LM-OTS algorithm"),
            Error::InvalidStartLeaf {
                start_leaf,
                target_height,
            } => write!(
                f,
                "leaf {} does not start a subtree of height {}",
                start_leaf, target_height
            ),
            Error::KeyExhausted { leaves } => {
                write!(f, "all {} one-time keys have been used", leaves)
            }
            Error::SigningFailed(reason) => write!(f, "one-time signing failed: {}", reason),
            Error::EmptyTreeHashStack => write!(f, "tree hash stack is empty"),
            Error::TreeHashIncomplete { level } => {
                write!(f, "tree hash instance at level {} is not complete", level)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
