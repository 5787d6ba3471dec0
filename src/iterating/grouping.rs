//! Grouping by key, in first-seen key order.

use std::hash::Hash;

#[cfg(feature = "fxhash")]
type KeyIndex<K> = rustc_hash::FxHashMap<K, usize>;

#[cfg(not(feature = "fxhash"))]
type KeyIndex<K> = std::collections::HashMap<K, usize>;

/// Consumes `iterable` and returns `(key, members)` pairs ordered by the
/// first appearance of each key. Members keep their input order.
///
/// # Examples
///
/// ```rust
/// use lazyfn::iterating::group_by;
///
/// let groups: Vec<(bool, Vec<i32>)> = group_by(1..=5, |n| n % 2 == 0).collect();
/// assert_eq!(groups, vec![(false, vec![1, 3, 5]), (true, vec![2, 4])]);
/// ```
pub fn group_by<I, K, F>(iterable: I, mut key: F) -> std::vec::IntoIter<(K, Vec<I::Item>)>
where
    I: IntoIterator,
    K: Hash + Eq + Clone,
    F: FnMut(&I::Item) -> K,
{
    let mut index = KeyIndex::<K>::default();
    let mut groups: Vec<(K, Vec<I::Item>)> = Vec::new();
    for element in iterable {
        let element_key = key(&element);
        if let Some(&position) = index.get(&element_key) {
            groups[position].1.push(element);
        } else {
            index.insert(element_key.clone(), groups.len());
            groups.push((element_key, vec![element]));
        }
    }
    groups.into_iter()
}
