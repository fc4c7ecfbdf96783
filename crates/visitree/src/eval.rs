//! Arithmetic evaluation of expression trees.

use crate::ast::{BinaryExpr, Expr, Literal, UnaryExpr};
use crate::error::{Arity, EvalError, Result};
use crate::visitor::Visitor;

/// Default nesting limit (stack overflow protection).
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Visitor that reduces an expression tree to a single number.
///
/// The implemented operators are `-` in unary position and `+` in binary
/// position. Any other symbol fails with
/// [`EvalError::UnsupportedOperator`] when the node carrying it is
/// visited; construction never checks symbols.
///
/// Operands are evaluated left to right: `lhs` before `rhs` for binary
/// nodes, and the operand before the negation for unary nodes.
#[derive(Debug, Clone)]
pub struct Evaluator {
    max_depth: usize,
    depth: usize,
}

impl Evaluator {
    /// Create an evaluator with the default depth limit.
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Create an evaluator with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Evaluator {
            max_depth,
            depth: 0,
        }
    }

    /// Evaluate a tree from its root.
    ///
    /// The depth counter restarts on every call, so one evaluator can be
    /// reused across trees, including after a failed evaluation.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<f64> {
        self.depth = 0;
        self.eval(expr)
    }

    /// Dispatch to `expr`, tracking how deep the current path is.
    fn eval(&mut self, expr: &Expr) -> Result<f64> {
        if self.depth >= self.max_depth {
            return Err(EvalError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        let value = expr.accept(self);
        self.depth -= 1;
        value
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor<Result<f64>> for Evaluator {
    fn visit_literal(&mut self, node: &Literal) -> Result<f64> {
        Ok(node.v())
    }

    fn visit_unary_expr(&mut self, node: &UnaryExpr) -> Result<f64> {
        match node.op() {
            "-" => Ok(-self.eval(node.x())?),
            op => Err(EvalError::unsupported(op, Arity::Unary)),
        }
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpr) -> Result<f64> {
        match node.op() {
            "+" => Ok(self.eval(node.lhs())? + self.eval(node.rhs())?),
            op => Err(EvalError::unsupported(op, Arity::Binary)),
        }
    }
}

/// Evaluate an expression with a default evaluator (convenience wrapper).
pub fn evaluate(expr: &Expr) -> Result<f64> {
    Evaluator::new().evaluate(expr)
}
