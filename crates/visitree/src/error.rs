//! Error types for expression evaluation

use std::fmt;

use thiserror::Error;

/// Position an operator symbol appeared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Prefix operator with one operand
    Unary,
    /// Infix operator with two operands
    Binary,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Unary => write!(f, "unary"),
            Arity::Binary => write!(f, "binary"),
        }
    }
}

/// Main error type for evaluation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Operator symbol the active visitor does not implement
    #[error("unsupported {arity} operator `{op}`")]
    UnsupportedOperator {
        /// The rejected symbol
        op: String,
        /// Position the symbol appeared in
        arity: Arity,
    },

    /// Tree nesting deeper than the evaluator's configured limit
    #[error("expression depth exceeds limit of {limit}")]
    DepthLimitExceeded {
        /// The configured limit
        limit: usize,
    },
}

impl EvalError {
    /// Shorthand for an [`EvalError::UnsupportedOperator`].
    pub fn unsupported(op: impl Into<String>, arity: Arity) -> Self {
        EvalError::UnsupportedOperator {
            op: op.into(),
            arity,
        }
    }
}

/// Result type alias for evaluation
pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_operator_message() {
        let err = EvalError::unsupported("-", Arity::Binary);
        assert_eq!(err.to_string(), "unsupported binary operator `-`");

        let err = EvalError::unsupported("+", Arity::Unary);
        assert_eq!(err.to_string(), "unsupported unary operator `+`");
    }

    #[test]
    fn test_depth_limit_message() {
        let err = EvalError::DepthLimitExceeded { limit: 8 };
        assert_eq!(err.to_string(), "expression depth exceeds limit of 8");
    }
}
