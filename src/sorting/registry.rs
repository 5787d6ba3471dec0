//! Named sorting algorithms and the key-aware wrapper that drives them.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use crate::iterating::Sequence;
use crate::{Error, Result};

/// Name of the stable sort every registry starts with.
pub const TIMSORT: &str = "TIMSORT";

/// A key-less sorting algorithm.
///
/// Implementations reorder `indices` so that `compare` is non-decreasing
/// along the slice. The comparator handed in by the registry is already a
/// total order that breaks ties by original position, so even an unstable
/// algorithm produces a stable result.
///
/// Any `Fn(&mut [usize], &dyn Fn(usize, usize) -> Ordering)` closure that is
/// `Send + Sync` is an algorithm.
pub trait SortAlgorithm: Send + Sync {
    /// Sorts `indices` in place according to `compare`.
    fn sort(&self, indices: &mut [usize], compare: &dyn Fn(usize, usize) -> Ordering);
}

impl<F> SortAlgorithm for F
where
    F: Fn(&mut [usize], &dyn Fn(usize, usize) -> Ordering) + Send + Sync,
{
    fn sort(&self, indices: &mut [usize], compare: &dyn Fn(usize, usize) -> Ordering) {
        self(indices, compare);
    }
}

fn timsort(indices: &mut [usize], compare: &dyn Fn(usize, usize) -> Ordering) {
    indices.sort_by(|left, right| compare(*left, *right));
}

/// A table from algorithm names to implementations.
///
/// Lookups take a shared lock; registration takes the exclusive one.
pub struct SortRegistry {
    algorithms: RwLock<HashMap<String, Arc<dyn SortAlgorithm>>>,
}

impl SortRegistry {
    /// A registry with no algorithms at all.
    pub fn empty() -> Self {
        Self {
            algorithms: RwLock::new(HashMap::new()),
        }
    }

    /// A registry holding [`TIMSORT`].
    pub fn new() -> Self {
        let registry = Self::empty();
        registry
            .algorithms
            .write()
            .insert(TIMSORT.to_owned(), Arc::new(timsort));
        registry
    }

    /// Registers `algorithm` under `name`.
    ///
    /// # Errors
    ///
    /// [`Error::AlgorithmAlreadyRegistered`] when the name is taken and
    /// `overwrite` is `false`.
    pub fn register<A>(&self, name: impl Into<String>, algorithm: A, overwrite: bool) -> Result<()>
    where
        A: SortAlgorithm + 'static,
    {
        let name = name.into();
        let mut algorithms = self.algorithms.write();
        if algorithms.contains_key(&name) {
            if !overwrite {
                return Err(Error::AlgorithmAlreadyRegistered(name));
            }
            tracing::debug!(algorithm = %name, "overwriting sorting algorithm");
        } else {
            tracing::debug!(algorithm = %name, "registering sorting algorithm");
        }
        algorithms.insert(name, Arc::new(algorithm));
        Ok(())
    }

    /// Finds the algorithm registered under `name`.
    ///
    /// # Errors
    ///
    /// [`Error::AlgorithmNotFound`] for unknown names.
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn SortAlgorithm>> {
        self.algorithms
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::AlgorithmNotFound(name.to_owned()))
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.algorithms.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.algorithms.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Sorts by natural order with the named algorithm.
    ///
    /// # Errors
    ///
    /// [`Error::AlgorithmNotFound`] for unknown names.
    pub fn sort<I>(&self, iterable: I, algorithm: &str) -> Result<Sequence<std::vec::IntoIter<I::Item>>>
    where
        I: IntoIterator,
        I::Item: Ord,
    {
        let algorithm = self.lookup(algorithm)?;
        let items: Vec<I::Item> = iterable.into_iter().collect();
        let compare = |left: usize, right: usize| items[left].cmp(&items[right]).then(left.cmp(&right));
        let mut indices: Vec<usize> = (0..items.len()).collect();
        algorithm.sort(&mut indices, &compare);
        Ok(Sequence::finite(undecorate(items, &indices)))
    }

    /// Sorts by `key(element)` with the named algorithm, decorating each
    /// element as `(key, original index, element)`.
    ///
    /// # Errors
    ///
    /// [`Error::AlgorithmNotFound`] for unknown names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyfn::sorting::{SortRegistry, TIMSORT};
    ///
    /// let registry = SortRegistry::new();
    /// let sorted: Vec<&str> = registry
    ///     .sort_by_key(vec!["ccc", "a", "bb", "d"], TIMSORT, |word| word.len())
    ///     .unwrap()
    ///     .collect();
    /// assert_eq!(sorted, vec!["a", "d", "bb", "ccc"]);
    /// ```
    pub fn sort_by_key<I, K, F>(
        &self,
        iterable: I,
        algorithm: &str,
        mut key: F,
    ) -> Result<Sequence<std::vec::IntoIter<I::Item>>>
    where
        I: IntoIterator,
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        let algorithm = self.lookup(algorithm)?;
        let (keys, items): (Vec<K>, Vec<I::Item>) = iterable
            .into_iter()
            .map(|element| (key(&element), element))
            .unzip();
        let compare = |left: usize, right: usize| keys[left].cmp(&keys[right]).then(left.cmp(&right));
        let mut indices: Vec<usize> = (0..items.len()).collect();
        algorithm.sort(&mut indices, &compare);
        Ok(Sequence::finite(undecorate(items, &indices)))
    }
}

impl Default for SortRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SortRegistry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SortRegistry")
            .field("algorithms", &self.names())
            .finish()
    }
}

fn undecorate<T>(items: Vec<T>, order: &[usize]) -> Vec<T> {
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    order
        .iter()
        .filter_map(|&index| slots.get_mut(index).and_then(Option::take))
        .collect()
}

static GLOBAL: LazyLock<SortRegistry> = LazyLock::new(SortRegistry::new);

/// The process-wide registry, pre-populated with [`TIMSORT`].
pub fn global() -> &'static SortRegistry {
    &GLOBAL
}

/// Registers an algorithm in the process-wide registry.
///
/// # Errors
///
/// See [`SortRegistry::register`].
pub fn register<A>(name: impl Into<String>, algorithm: A, overwrite: bool) -> Result<()>
where
    A: SortAlgorithm + 'static,
{
    GLOBAL.register(name, algorithm, overwrite)
}

/// Looks an algorithm up in the process-wide registry.
///
/// # Errors
///
/// See [`SortRegistry::lookup`].
pub fn lookup(name: &str) -> Result<Arc<dyn SortAlgorithm>> {
    GLOBAL.lookup(name)
}

/// Sorts with a globally registered algorithm.
///
/// # Errors
///
/// See [`SortRegistry::sort`].
///
/// # Examples
///
/// ```rust
/// use lazyfn::sorting::{TIMSORT, sort};
///
/// let sorted: Vec<i32> = sort(vec![3, 1, 2], TIMSORT).unwrap().collect();
/// assert_eq!(sorted, vec![1, 2, 3]);
/// ```
pub fn sort<I>(iterable: I, algorithm: &str) -> Result<Sequence<std::vec::IntoIter<I::Item>>>
where
    I: IntoIterator,
    I::Item: Ord,
{
    GLOBAL.sort(iterable, algorithm)
}

/// Sorts by key with a globally registered algorithm.
///
/// # Errors
///
/// See [`SortRegistry::sort_by_key`].
pub fn sort_by_key<I, K, F>(
    iterable: I,
    algorithm: &str,
    key: F,
) -> Result<Sequence<std::vec::IntoIter<I::Item>>>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    GLOBAL.sort_by_key(iterable, algorithm, key)
}
