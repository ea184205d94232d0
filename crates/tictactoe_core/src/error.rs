//! Error types for tic-tac-toe game logic.

use derive_more::{Display, Error};

/// Errors raised by the game core.
///
/// Illegal moves are not errors: [`crate::GameState::play`] ignores them.
/// These variants cover caller contract violations only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A linear cell index fell outside 0-8.
    #[display("Cell index {index} is out of range (must be 0-8)")]
    InvalidIndex {
        /// The offending index.
        index: usize,
    },

    /// A history step fell outside the recorded history.
    #[display("Step {step} is out of range (history has {len} snapshots)")]
    StepOutOfRange {
        /// The requested step.
        step: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_message() {
        let err = GameError::InvalidIndex { index: 12 };
        assert_eq!(err.to_string(), "Cell index 12 is out of range (must be 0-8)");
    }

    #[test]
    fn test_step_out_of_range_message() {
        let err = GameError::StepOutOfRange { step: 4, len: 2 };
        assert!(err.to_string().contains("Step 4"));
        assert!(err.to_string().contains("2 snapshots"));
    }
}
