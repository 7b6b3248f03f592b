//! Errors reported by [`Tree`][crate::Tree] operations.
//!
//! Not finding a key is not an error: [`contains`][crate::Tree::contains] and
//! [`delete`][crate::Tree::delete] answer `false` and [`remove`][crate::Tree::remove] answers
//! `None`. The variants here are for operations that have no sensible answer at all.

/// Errors triggered by binary search tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The operation needs at least one node but the tree is empty.
    #[error("operation requires a non-empty tree")]
    EmptyTree,
    /// A key was expected but not provided.
    #[error("no key was provided at position {position}")]
    MissingKey {
        /// Zero-based position of the absent key in the input sequence.
        position: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            TreeError::EmptyTree.to_string(),
            "operation requires a non-empty tree"
        );
        assert_eq!(
            TreeError::MissingKey { position: 3 }.to_string(),
            "no key was provided at position 3"
        );
    }
}
