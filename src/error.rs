use thiserror::Error;

/// Errors returned by index-based sequence operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The index lies outside the valid range for the operation
    #[error("index {index} out of range for sequence of length {len}")]
    OutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SequenceError::OutOfRange { index: 4, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 4 out of range for sequence of length 3"
        );
    }
}
