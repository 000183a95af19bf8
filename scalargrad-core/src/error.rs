use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Invalid operand for operation {operation}: {reason}")]
    InvalidOperand { operation: String, reason: String },

    #[error("Cannot parse numeric literal: {0:?}")]
    InvalidLiteral(String),

    #[error("requires_grad can only be changed on leaf values")]
    RequiresGradOnNonLeaf,

    #[error("Backward pass error: {0}")]
    BackwardError(String),

    #[error("Cycle detected in the computation graph during backward pass.")]
    CycleDetected,

    #[error("RwLock poisoned while accessing {0}")]
    LockPoisoned(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ScalarGradError::InvalidOperand {
            operation: "pow".to_string(),
            reason: "exponent is not representable as f64".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid operand for operation pow: exponent is not representable as f64"
        );
        assert_eq!(
            ScalarGradError::InvalidLiteral("abc".to_string()).to_string(),
            "Cannot parse numeric literal: \"abc\""
        );
    }

    #[test]
    fn test_every_variant_is_reported() {
        let errors = [
            ScalarGradError::RequiresGradOnNonLeaf,
            ScalarGradError::BackwardError("2 != 1".to_string()),
            ScalarGradError::CycleDetected,
            ScalarGradError::LockPoisoned("value".to_string()),
        ];
        for err in &errors {
            let expected = match err {
                ScalarGradError::InvalidOperand { .. } | ScalarGradError::InvalidLiteral(_) => continue,
                ScalarGradError::RequiresGradOnNonLeaf => {
                    "requires_grad can only be changed on leaf values"
                }
                ScalarGradError::BackwardError(_) => "Backward pass error: 2 != 1",
                ScalarGradError::CycleDetected => {
                    "Cycle detected in the computation graph during backward pass."
                }
                ScalarGradError::LockPoisoned(_) => "RwLock poisoned while accessing value",
            };
            assert_eq!(err.to_string(), expected);
        }
    }
}
