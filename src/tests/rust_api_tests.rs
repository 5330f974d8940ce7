use crate::{Delimiters, Latex, ParseError, ProductDiff, Span, Term, terms};

#[test]
fn test_builder_configuration() {
    // Defaults
    let diff = ProductDiff::new();
    assert_eq!(diff.get_variable(), "x");
    assert_eq!(diff.derive_str("(x^2)(x)").unwrap(), "$$3x^2$$");

    // Variable, delimiters and zero filtering together
    let diff = ProductDiff::new()
        .variable("y")
        .delimiters(Delimiters::None)
        .drop_zero_terms(true);
    assert_eq!(diff.get_variable(), "y");
    assert_eq!(diff.derive_str("(y + 2)(y - 2)").unwrap(), "2y");
}

#[test]
fn test_builder_is_reusable() {
    let diff = ProductDiff::new().delimiters(Delimiters::Inline);
    let first = diff.derive_str("(x)(x)").unwrap();
    let second = diff.derive_str("(x^2)(x^2)").unwrap();
    assert_eq!(first, "$2x$");
    assert_eq!(second, "$4x^3$");
}

#[test]
fn test_error_messages_point_into_expression() {
    let err = ProductDiff::new().derive("(x+1)(x+)").unwrap_err();
    assert_eq!(err.span(), Some(Span::at(7)));
    assert_eq!(err.to_string(), "sign is not followed by a term at position 8");

    let err = ProductDiff::new().derive("(2xz)(x)").unwrap_err();
    assert_eq!(err.to_string(), "unexpected 'z' after the variable at position 4");
}

#[test]
fn test_error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&ParseError::EmptyPolynomial);
}

#[test]
fn test_latex_display_wrapper() {
    let p = terms(&[(-2, 3), (1, 0)]);
    let rendered = format!("{}", Latex::new(&p, "z", Delimiters::Display));
    assert_eq!(rendered, "$$-2z^3 + 1$$");
}

#[test]
fn test_term_tuple_conversions() {
    let pairs: Vec<(i64, u32)> = terms(&[(3, 2), (-1, 0)])
        .into_iter()
        .map(Into::into)
        .collect();
    assert_eq!(pairs, vec![(3, 2), (-1, 0)]);
    assert_eq!(Term::from((4, 1)).to_string(), "4x");
}

#[cfg(feature = "cli")]
#[test]
fn test_derivation_serializes() {
    let d = ProductDiff::new().derive("(x)(x - 1)").unwrap();
    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["first_factor"], "x");
    assert_eq!(json["product"][0]["coeff"], 1);
    assert_eq!(json["product"][0]["exp"], 2);
    assert_eq!(json["latex"], "$$2x - 1$$");

    let back: crate::Derivation = serde_json::from_value(json).unwrap();
    assert_eq!(back, d);
}
