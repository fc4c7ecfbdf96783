use pretty_assertions::assert_eq;
use visitree::*;

fn example() -> Expr {
    Expr::unary(
        "-",
        Expr::binary("+", Expr::literal(2.0), Expr::literal(3.0)),
    )
}

// ═══════════════════════════════════════════════════════════════════════
// Reverse Polish Form
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_rpn_of_example_tree() {
    assert_eq!(RpnPrinter::new().print(&example()), "2 3 + -");
}

#[test]
fn test_rpn_of_literal() {
    assert_eq!(RpnPrinter::new().print(&Expr::literal(42.0)), "42");
}

#[test]
fn test_rpn_keeps_operand_order() {
    let expr = Expr::binary("+", Expr::literal(1.0), Expr::literal(2.0));
    assert_eq!(RpnPrinter::new().print(&expr), "1 2 +");
}

// ═══════════════════════════════════════════════════════════════════════
// Canonical Form
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_canon_of_example_tree() {
    assert_eq!(CanonPrinter::new().print(&example()), "(- (2 + 3))");
}

#[test]
fn test_canon_of_literal() {
    assert_eq!(CanonPrinter::new().print(&Expr::literal(2.5)), "2.5");
}

#[test]
fn test_display_matches_canonical_form() {
    let expr = example();
    assert_eq!(expr.to_string(), CanonPrinter::new().print(&expr));
}

// ═══════════════════════════════════════════════════════════════════════
// Renderers Do Not Validate Symbols
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_unsupported_symbols_still_render() {
    let expr = Expr::binary("*", Expr::literal(2.0), Expr::literal(3.0));
    assert_eq!(CanonPrinter::new().print(&expr), "(2 * 3)");
    assert_eq!(RpnPrinter::new().print(&expr), "2 3 *");

    let expr = Expr::unary("!", Expr::literal(1.0));
    assert_eq!(CanonPrinter::new().print(&expr), "(! 1)");
}
