#![cfg(feature = "functional")]
//! Integration tests for signatures as seen through the function algebra.

use lazyfn::Error;
use lazyfn::functional::{Arguments, builtins, flip, partial_left, partial_right};
use lazyfn::signature::{OverloadedSignature, Parameter, ParameterKind, PlainSignature, Signature};
use rstest::{fixture, rstest};

/// `(x, y, /, *, scale=…)`
#[fixture]
fn scaled() -> PlainSignature {
    PlainSignature::builder()
        .positional_only("x")
        .positional_only("y")
        .keyword_only("scale")
        .defaulted()
        .build()
        .unwrap()
}

#[rstest]
fn builtin_signatures_render_like_their_declarations() {
    assert_eq!(builtins::pow().signature().to_string(), "(base, exp, mod=…, /)");
    assert_eq!(
        builtins::range().signature().to_string(),
        "(stop, /) | (start, stop, step=…, /)"
    );
    assert_eq!(builtins::range().signature().alternatives().len(), 2);
}

#[rstest]
fn overloads_are_tried_in_turn() {
    let range = builtins::range().signature();
    assert!(range.expects(1, &[]));
    assert!(range.expects(3, &[]));
    assert!(!range.expects(4, &[]));
    assert!(range.all_set(2, &[]));
    assert_eq!(
        range.check(4, &[]),
        Err(Error::TooManyPositional { expected: 1, given: 4 })
    );
}

#[rstest]
fn binding_an_overload_keeps_every_feasible_residual() {
    let range = builtins::range().signature();
    let residual = range.bind(1, &[]).unwrap();
    // `(stop, /)` is fully bound; `(start, ...)` still needs `stop`.
    assert_eq!(residual.to_string(), "() | (stop, step=…, /)");
    let narrowed = range.bind(2, &[]).unwrap();
    assert_eq!(narrowed.to_string(), "(step=…, /)");
}

#[rstest]
fn partial_application_reports_the_residual() {
    let pow = builtins::pow();
    let squared_base = partial_left(pow.clone(), Arguments::single(2)).unwrap();
    assert_eq!(squared_base.signature().to_string(), "(exp, mod=…, /)");

    let to_the_tenth = partial_right(pow, Arguments::single(10)).unwrap();
    assert_eq!(to_the_tenth.signature().to_string(), "(base, exp=…, /)");
}

#[rstest]
fn partial_rejects_impossible_arguments() {
    assert_eq!(
        partial_left(builtins::is_even(), Arguments::from_iter([1, 2])).map(|_| ()),
        Err(Error::TooManyPositional { expected: 1, given: 2 })
    );
    assert_eq!(
        partial_left(builtins::is_even(), Arguments::new().with_keyword("value", 1)).map(|_| ()),
        Err(Error::UnknownKeyword("value".to_owned()))
    );
}

#[rstest]
fn flipping_reverses_slots(scaled: PlainSignature) {
    let flipped = Signature::from(scaled).flipped();
    assert_eq!(flipped.to_string(), "(y, x, /, *, scale=…)");
    assert_eq!(flip(builtins::subtract()).signature().to_string(), "(right, left, /)");
}

#[rstest]
fn keyword_binding_keeps_parameters_rebindable() {
    let signature = PlainSignature::builder()
        .positional_or_keyword("a")
        .positional_or_keyword("b")
        .positional_or_keyword("c")
        .build()
        .unwrap();
    let residual = signature.bind(0, &["b"]).unwrap();
    assert_eq!(residual.to_string(), "(a, *, b=…, c)");
    assert_eq!(
        residual.get("c").map(Parameter::kind),
        Some(ParameterKind::KeywordOnly)
    );
    assert!(residual.expects(1, &["b", "c"]));
}

#[rstest]
fn overloaded_construction_collapses_and_dedupes(scaled: PlainSignature) {
    let single = OverloadedSignature::new([scaled.clone(), scaled.clone()]).unwrap();
    assert!(matches!(single, Signature::Plain(_)));
    assert!(matches!(
        OverloadedSignature::new(Vec::new()),
        Err(Error::InvalidArgument { name: "alternatives", .. })
    ));
    let both = OverloadedSignature::new([scaled, PlainSignature::variadic()]).unwrap();
    assert!(matches!(both, Signature::Overloaded(_)));
}

#[rstest]
fn missing_reports_the_closest_alternative() {
    let pow = builtins::pow().signature();
    assert_eq!(pow.missing(0, &[]), Ok(vec!["base".to_owned(), "exp".to_owned()]));
    let range = builtins::range().signature();
    assert_eq!(range.missing(0, &[]), Ok(vec!["stop".to_owned()]));
}
