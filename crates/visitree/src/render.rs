//! Visitors that render expression trees as text.
//!
//! Renderers print whatever operator symbol a node holds without checking
//! it; symbol validation belongs to evaluation.

use std::fmt;

use crate::ast::{BinaryExpr, Expr, Literal, UnaryExpr};
use crate::visitor::Visitor;

/// Renders a tree in postorder ("reverse Polish") form.
///
/// `-(2 + 3)` renders as `2 3 + -`.
#[derive(Debug, Default)]
pub struct RpnPrinter;

impl RpnPrinter {
    /// Create a printer.
    pub fn new() -> Self {
        RpnPrinter
    }

    /// Render a tree.
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }
}

impl Visitor<String> for RpnPrinter {
    fn visit_literal(&mut self, node: &Literal) -> String {
        node.v().to_string()
    }

    fn visit_unary_expr(&mut self, node: &UnaryExpr) -> String {
        format!("{} {}", node.x().accept(self), node.op())
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpr) -> String {
        format!(
            "{} {} {}",
            node.lhs().accept(self),
            node.rhs().accept(self),
            node.op()
        )
    }
}

/// Renders a tree in fully parenthesized canonical form.
///
/// `-(2 + 3)` renders as `(- (2 + 3))`.
#[derive(Debug, Default)]
pub struct CanonPrinter;

impl CanonPrinter {
    /// Create a printer.
    pub fn new() -> Self {
        CanonPrinter
    }

    /// Render a tree.
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }
}

impl Visitor<String> for CanonPrinter {
    fn visit_literal(&mut self, node: &Literal) -> String {
        node.v().to_string()
    }

    fn visit_unary_expr(&mut self, node: &UnaryExpr) -> String {
        format!("({} {})", node.op(), node.x().accept(self))
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpr) -> String {
        format!(
            "({} {} {})",
            node.lhs().accept(self),
            node.op(),
            node.rhs().accept(self)
        )
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&CanonPrinter::new().print(self))
    }
}
