use thiserror::Error;

/// Errors generated by the passphrase library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when the word list has no entries.
    #[error("word source is empty")]
    EmptySource,

    /// Error generated when no word in the list can satisfy
    /// a word constraint.
    #[error("no word of length {min}..={max} (apostrophe: {apostrophe}) exists in the word list")]
    NoAcceptableWord {
        /// Minimum word length.
        min: usize,
        /// Maximum word length.
        max: usize,
        /// Whether an apostrophe was required.
        apostrophe: bool,
    },

    /// Error generated when drawing an acceptable word gave up.
    #[error("no acceptable word found after {0} attempts")]
    WordAttemptsExhausted(usize),

    /// Error generated when a phrase could not be built within
    /// the restart limit.
    #[error("unable to build a phrase of length {min}..={max} after {restarts} restarts")]
    UnsatisfiableConstraint {
        /// Minimum phrase length.
        min: usize,
        /// Maximum phrase length.
        max: usize,
        /// Number of restarts performed.
        restarts: usize,
    },

    /// Error generated when word length bounds are inverted or zero.
    #[error("invalid word length bounds, min {0} > max {1} or min is zero")]
    InvalidWordBounds(usize, usize),

    /// Error generated when a word may never be drawn.
    #[error("max_word_attempts must be at least one")]
    ZeroWordAttempts,

    /// Error generated when phrase length bounds are inverted.
    #[error("invalid phrase length bounds, min {0} > max {1}")]
    InvalidPhraseBounds(usize, usize),
}
