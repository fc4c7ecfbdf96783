//! Expression tree node types.
//!
//! The variant set is closed: every tree is some nesting of [`Literal`],
//! [`UnaryExpr`], and [`BinaryExpr`] under the [`Expr`] sum type. Nodes own
//! their children exclusively, so trees are acyclic, and fields are only
//! reachable through read-only accessors, so a constructed tree never
//! mutates.
//!
//! Operator symbols are plain strings and are *not* validated here; whether
//! a symbol is meaningful is decided by whichever visitor walks the tree
//! (see [`crate::eval`]).

/// A node in an arithmetic expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Leaf node holding a number.
    Literal(Literal),
    /// Prefix operator applied to one operand.
    Unary(UnaryExpr),
    /// Infix operator applied to two operands.
    Binary(BinaryExpr),
}

impl Expr {
    /// Build a literal leaf.
    pub fn literal(v: f64) -> Self {
        Expr::Literal(Literal::new(v))
    }

    /// Build a unary node over an operand.
    pub fn unary(op: impl Into<String>, x: Expr) -> Self {
        Expr::Unary(UnaryExpr::new(op, x))
    }

    /// Build a binary node over two operands.
    pub fn binary(op: impl Into<String>, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary(BinaryExpr::new(op, lhs, rhs))
    }
}

/// Leaf node: a numeric value with no children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Literal {
    v: f64,
}

impl Literal {
    /// Create a literal holding `v`.
    pub fn new(v: f64) -> Self {
        Literal { v }
    }

    /// The stored value.
    pub fn v(&self) -> f64 {
        self.v
    }
}

/// Unary node: an operator symbol and its single operand.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    op: String,
    x: Box<Expr>,
}

impl UnaryExpr {
    /// Create a unary node applying `op` to `x`.
    pub fn new(op: impl Into<String>, x: Expr) -> Self {
        UnaryExpr {
            op: op.into(),
            x: Box::new(x),
        }
    }

    /// The operator symbol.
    pub fn op(&self) -> &str {
        &self.op
    }

    /// The operand.
    pub fn x(&self) -> &Expr {
        &self.x
    }
}

/// Binary node: an operator symbol and its two operands.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    op: String,
    lhs: Box<Expr>,
    rhs: Box<Expr>,
}

impl BinaryExpr {
    /// Create a binary node applying `op` to `lhs` and `rhs`.
    pub fn new(op: impl Into<String>, lhs: Expr, rhs: Expr) -> Self {
        BinaryExpr {
            op: op.into(),
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// The operator symbol.
    pub fn op(&self) -> &str {
        &self.op
    }

    /// The left operand.
    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }

    /// The right operand.
    pub fn rhs(&self) -> &Expr {
        &self.rhs
    }
}
