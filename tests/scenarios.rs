//! End-to-end scenarios across the crate's modules.

#![cfg(all(feature = "functional", feature = "reversal"))]

use std::io::Cursor;

use lazyfn::functional::{builtins, cleave, compose, curry, flip, partial_left};
use lazyfn::prelude::*;
use rstest::rstest;

#[rstest]
fn sum_of_a_range() {
    let total = compose([builtins::sum(), builtins::range()]).unwrap();
    assert_eq!(total.call1(10), Ok(Value::from(45)));
}

#[rstest]
fn curried_power() {
    let Value::Function(base_two) = curry(builtins::pow()).call1(2).unwrap() else {
        panic!("expected a curried function");
    };
    assert_eq!(base_two.call1(10), Ok(Value::from(1024)));
}

#[rstest]
fn range_from_zero() {
    let from_zero = partial_left(builtins::range(), Arguments::single(0)).unwrap();
    let values = from_zero.call1(10).unwrap().to_vec().unwrap();
    assert_eq!(values, (0..10).map(Value::from).collect::<Vec<_>>());
}

#[rstest]
fn flipped_power() {
    assert_eq!(flip(builtins::pow()).invoke([2, 4]), Ok(Value::from(16)));
}

#[rstest]
fn minimum_and_maximum_at_once() {
    let bounds = cleave([builtins::min(), builtins::max()]);
    let digits = Value::list([3, 1, 4, 1, 5, 9, 2, 6].map(Value::from));
    assert_eq!(
        bounds.call1(digits),
        Ok(Value::tuple([Value::from(1), Value::from(9)]))
    );
}

#[rstest]
fn last_line_first() {
    let lines: Vec<Vec<u8>> = reverse_bytes(Cursor::new(b"a\nbb\nccc"), ReversalOptions::default())
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(lines, vec![b"ccc".to_vec(), b"bb\n".to_vec(), b"a\n".to_vec()]);
}

#[rstest]
fn numbers_grouped_by_parity() {
    let groups: Vec<(bool, Vec<i32>)> = (1..=5).group_by(|number| number % 2 == 0).collect();
    assert_eq!(groups, vec![(false, vec![1, 3, 5]), (true, vec![2, 4])]);
}
