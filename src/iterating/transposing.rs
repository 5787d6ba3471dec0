//! Rows to columns, eagerly for finite tables and lazily through tees.

use std::iter::FusedIterator;

use super::tee::{Tee, tee};

/// Turns finite rows into columns.
///
/// Rows are zipped together, so ragged input is truncated to its narrowest
/// row. No rows means no columns.
///
/// # Examples
///
/// ```rust
/// use lazyfn::iterating::transpose;
///
/// let columns = transpose(vec![vec![1, 2, 3], vec![4, 5, 6]]);
/// assert_eq!(columns, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
/// ```
pub fn transpose<I, R>(rows: I) -> Vec<Vec<R::Item>>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
{
    let mut iterators: Vec<R::IntoIter> = rows.into_iter().map(IntoIterator::into_iter).collect();
    if iterators.is_empty() {
        return Vec::new();
    }
    let mut columns = Vec::new();
    loop {
        let column: Option<Vec<R::Item>> = iterators.iter_mut().map(Iterator::next).collect();
        match column {
            Some(column) => columns.push(column),
            None => return columns,
        }
    }
}

/// The `i`-th coordinate of every row, pulled lazily from a shared upstream.
///
/// Created by [`transpose_lazy`].
#[derive(Debug)]
pub struct Column<I: Iterator> {
    rows: Tee<I>,
    coordinate: usize,
    done: bool,
}

impl<I, T> Iterator for Column<I>
where
    I: Iterator<Item = Vec<T>>,
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let element = self
            .rows
            .next()
            .and_then(|row| row.into_iter().nth(self.coordinate));
        self.done = element.is_none();
        element
    }
}

impl<I, T> FusedIterator for Column<I>
where
    I: Iterator<Item = Vec<T>>,
    T: Clone,
{
}

/// Lazily transposes a possibly unbounded stream of rows.
///
/// The first row is pulled to learn the width `W`; the rows are then teed
/// `W` ways and each consumer is projected onto one coordinate. A column
/// ends at the first row too short to supply its coordinate.
///
/// # Examples
///
/// ```rust
/// use lazyfn::iterating::transpose_lazy;
///
/// let rows = (0..).map(|n| vec![n, n * n]);
/// let mut columns = transpose_lazy(rows);
/// let squares = columns.pop().unwrap();
/// assert_eq!(squares.take(4).collect::<Vec<_>>(), vec![0, 1, 4, 9]);
/// ```
pub fn transpose_lazy<I, T>(
    rows: I,
) -> Vec<Column<std::iter::Chain<std::iter::Once<Vec<T>>, I::IntoIter>>>
where
    I: IntoIterator<Item = Vec<T>>,
    T: Clone,
{
    let mut rows = rows.into_iter();
    let Some(first) = rows.next() else {
        return Vec::new();
    };
    let width = first.len();
    tee(std::iter::once(first).chain(rows), width)
        .into_iter()
        .enumerate()
        .map(|(coordinate, rows)| Column {
            rows,
            coordinate,
            done: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn ragged_rows_truncate() {
        let columns = transpose(vec![vec![1, 2, 3], vec![4]]);
        assert_eq!(columns, vec![vec![1, 4]]);
    }

    #[rstest]
    fn empty_input_has_no_columns() {
        assert!(transpose(Vec::<Vec<i32>>::new()).is_empty());
        assert!(transpose_lazy(Vec::<Vec<i32>>::new()).is_empty());
    }

    #[rstest]
    fn transposing_twice_restores_rows() {
        let rows = vec![vec!['a', 'b'], vec!['c', 'd'], vec!['e', 'f']];
        assert_eq!(transpose(transpose(rows.clone())), rows);
    }

    #[rstest]
    fn lazy_column_stops_at_first_short_row() {
        let mut columns = transpose_lazy(vec![vec![1, 2], vec![3], vec![5, 6]]);
        let mut second = columns.pop().unwrap();
        assert_eq!(second.next(), Some(2));
        assert_eq!(second.next(), None);
        assert_eq!(second.next(), None);
        let first = columns.pop().unwrap();
        assert_eq!(first.collect::<Vec<_>>(), vec![1, 3, 5]);
    }

    #[rstest]
    fn lazy_columns_can_be_read_in_any_order() {
        let columns = transpose_lazy(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        let mut columns = columns.into_iter().rev();
        let second = columns.next().unwrap();
        let first = columns.next().unwrap();
        assert_eq!(second.collect::<Vec<_>>(), vec![2, 4, 6]);
        assert_eq!(first.collect::<Vec<_>>(), vec![1, 3, 5]);
    }
}
