//! Scans and folds, from the left and from the right.

use std::iter::FusedIterator;

/// Running accumulation that starts with the seed.
///
/// Created by [`accumulate`]. Yields `init`, `op(init, x₁)`,
/// `op(op(init, x₁), x₂)`, ... so the output is one longer than the input.
#[derive(Debug, Clone)]
pub struct Accumulate<I, F, A> {
    inner: I,
    operation: F,
    state: Option<A>,
    seeded: bool,
}

impl<I, F, A> Iterator for Accumulate<I, F, A>
where
    I: Iterator,
    F: FnMut(A, I::Item) -> A,
    A: Clone,
{
    type Item = A;

    fn next(&mut self) -> Option<A> {
        if !self.seeded {
            self.seeded = true;
            return self.state.clone();
        }
        let element = self.inner.next();
        let Some(element) = element else {
            self.state = None;
            return None;
        };
        let accumulated = (self.operation)(self.state.take()?, element);
        self.state = Some(accumulated.clone());
        Some(accumulated)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state.is_none() {
            return (0, Some(0));
        }
        let extra = usize::from(!self.seeded);
        let (lower, upper) = self.inner.size_hint();
        (
            lower.saturating_add(extra),
            upper.and_then(|upper| upper.checked_add(extra)),
        )
    }
}

impl<I, F, A> FusedIterator for Accumulate<I, F, A>
where
    I: Iterator,
    F: FnMut(A, I::Item) -> A,
    A: Clone,
{
}

/// Left scan seeded with `init`; the seed is emitted even for empty input.
///
/// # Examples
///
/// ```rust
/// use lazyfn::iterating::accumulate;
///
/// let sums: Vec<i32> = accumulate(vec![1, 2, 3], |total, x| total + x, 0).collect();
/// assert_eq!(sums, vec![0, 1, 3, 6]);
/// ```
pub fn accumulate<I, F, A>(iterable: I, operation: F, init: A) -> Accumulate<I::IntoIter, F, A>
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
    A: Clone,
{
    Accumulate {
        inner: iterable.into_iter(),
        operation,
        state: Some(init),
        seeded: false,
    }
}

/// Right scan: consumes the (finite) input, reverses it and scans from the
/// seed with the operation's arguments flipped, `op(element, accumulated)`.
///
/// # Examples
///
/// ```rust
/// use lazyfn::iterating::accumulate_right;
///
/// let trail: Vec<String> = accumulate_right(
///     vec!["a", "b"],
///     |element, acc: String| format!("({element}{acc})"),
///     String::new(),
/// )
/// .collect();
/// assert_eq!(trail, vec!["", "(b)", "(a(b))"]);
/// ```
pub fn accumulate_right<I, F, A>(
    iterable: I,
    mut operation: F,
    init: A,
) -> Accumulate<std::iter::Rev<std::vec::IntoIter<I::Item>>, impl FnMut(A, I::Item) -> A, A>
where
    I: IntoIterator,
    F: FnMut(I::Item, A) -> A,
    A: Clone,
{
    let elements: Vec<I::Item> = iterable.into_iter().collect();
    accumulate(
        elements.into_iter().rev(),
        move |accumulated, element| operation(element, accumulated),
        init,
    )
}

/// The last value of [`accumulate`].
pub fn fold<I, F, A>(iterable: I, operation: F, init: A) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    iterable.into_iter().fold(init, operation)
}

/// The last value of [`accumulate_right`].
///
/// # Examples
///
/// ```rust
/// use lazyfn::iterating::fold_right;
///
/// let nested = fold_right(vec![1, 2, 3], |x, acc: Vec<i32>| [vec![x], acc].concat(), vec![]);
/// assert_eq!(nested, vec![1, 2, 3]);
/// ```
pub fn fold_right<I, F, A>(iterable: I, mut operation: F, init: A) -> A
where
    I: IntoIterator,
    F: FnMut(I::Item, A) -> A,
{
    let elements: Vec<I::Item> = iterable.into_iter().collect();
    elements
        .into_iter()
        .rev()
        .fold(init, |accumulated, element| operation(element, accumulated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_input_still_yields_seed() {
        let scanned: Vec<i32> = accumulate(Vec::<i32>::new(), |a, b| a + b, 7).collect();
        assert_eq!(scanned, vec![7]);
    }

    #[rstest]
    fn accumulate_size_hint_counts_seed() {
        let scanned = accumulate(vec![1, 2], |a, b| a + b, 0);
        assert_eq!(scanned.size_hint(), (3, Some(3)));
    }

    #[rstest]
    fn accumulate_is_lazy_over_infinite_input() {
        let firsts: Vec<u64> = accumulate(1.., |a, b| a * b, 1_u64).take(5).collect();
        assert_eq!(firsts, vec![1, 1, 2, 6, 24]);
    }

    #[rstest]
    fn right_fold_is_not_left_fold_for_subtraction() {
        let right = fold_right(vec![1, 2, 3], |x, acc| x - acc, 0);
        let left = fold(vec![1, 2, 3], |acc, x| acc - x, 0);
        assert_eq!(right, 2);
        assert_eq!(left, -6);
    }

    #[rstest]
    fn fold_is_last_of_accumulate() {
        let last = accumulate(vec![3, 4], |a, b| a * b, 2).last();
        assert_eq!(last, Some(fold(vec![3, 4], |a, b| a * b, 2)));
    }
}
