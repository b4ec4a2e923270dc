//! Combinators over slices. Inputs are borrowed and never modified; every combinator returns a new `Vec` or a
//! scalar.
//!
//! Combinators with parameters are data-last: `chunk(2)` returns a closure that chunks the slice it is applied to.
//! Combinators that return an element of the slice return a clone of it.

use std::cmp::Ordering;
use std::hash::Hash;
use std::iter::{Product, Sum};
use std::rc::Rc;

use hashbrown::HashSet;
use hashlink::LinkedHashMap;

// Access

#[inline]
pub fn head<T>(array: &[T]) -> Option<&T> { array.first() }

#[inline]
pub fn last<T>(array: &[T]) -> Option<&T> { array.last() }

/// All elements but the first; empty for an empty slice.
#[inline]
pub fn tail<T: Clone>(array: &[T]) -> Vec<T> {
  array.get(1..).map_or_else(Vec::new, <[T]>::to_vec)
}

/// All elements but the last; empty for an empty slice.
#[inline]
pub fn init<T: Clone>(array: &[T]) -> Vec<T> {
  array.split_last().map_or_else(Vec::new, |(_, init)| init.to_vec())
}

#[inline]
pub fn is_empty<T>(array: &[T]) -> bool { array.is_empty() }

#[inline]
pub fn length<T>(array: &[T]) -> usize { array.len() }

#[inline]
pub fn at<T: Clone>(index: usize) -> impl Fn(&[T]) -> Option<T> {
  move |array: &[T]| array.get(index).cloned()
}


// Building

#[inline]
pub fn append<T: Clone>(item: T) -> impl Fn(&[T]) -> Vec<T> {
  move |array: &[T]| {
    let mut result = Vec::with_capacity(array.len() + 1);
    result.extend_from_slice(array);
    result.push(item.clone());
    result
  }
}

#[inline]
pub fn prepend<T: Clone>(item: T) -> impl Fn(&[T]) -> Vec<T> {
  move |array: &[T]| {
    let mut result = Vec::with_capacity(array.len() + 1);
    result.push(item.clone());
    result.extend_from_slice(array);
    result
  }
}

/// Appends `other` to the slice it is applied to.
#[inline]
pub fn concat<'a, T: Clone + 'a>(other: &'a [T]) -> impl Fn(&[T]) -> Vec<T> + 'a {
  move |array: &[T]| [array, other].concat()
}

#[inline]
pub fn reverse<T: Clone>(array: &[T]) -> Vec<T> {
  array.iter().rev().cloned().collect()
}


// Sorting. All sorts are stable.

#[inline]
pub fn sort<T: Ord + Clone>(array: &[T]) -> Vec<T> {
  let mut sorted = array.to_vec();
  sorted.sort();
  sorted
}

#[inline]
pub fn sort_with<T: Clone>(compare: impl Fn(&T, &T) -> Ordering) -> impl Fn(&[T]) -> Vec<T> {
  move |array: &[T]| {
    let mut sorted = array.to_vec();
    sorted.sort_by(|a, b| compare(a, b));
    sorted
  }
}

/// Sorts ascending by the key `selector` extracts.
#[inline]
pub fn sort_by<T: Clone, K: Ord>(selector: impl Fn(&T) -> K) -> impl Fn(&[T]) -> Vec<T> {
  move |array: &[T]| {
    let mut sorted = array.to_vec();
    sorted.sort_by(|a, b| selector(a).cmp(&selector(b)));
    sorted
  }
}

/// Sorts by the key `selector` extracts, comparing keys with `compare`.
#[inline]
pub fn sort_by_with<T: Clone, K>(
  selector: impl Fn(&T) -> K,
  compare: impl Fn(&K, &K) -> Ordering,
) -> impl Fn(&[T]) -> Vec<T> {
  move |array: &[T]| {
    let mut sorted = array.to_vec();
    sorted.sort_by(|a, b| compare(&selector(a), &selector(b)));
    sorted
  }
}


// Predicates

#[inline]
pub fn includes<T: PartialEq>(item: T) -> impl Fn(&[T]) -> bool {
  move |array: &[T]| array.contains(&item)
}

#[inline]
pub fn some<T>(predicate: impl Fn(&T) -> bool) -> impl Fn(&[T]) -> bool {
  move |array: &[T]| array.iter().any(|item| predicate(item))
}

#[inline]
pub fn every<T>(predicate: impl Fn(&T) -> bool) -> impl Fn(&[T]) -> bool {
  move |array: &[T]| array.iter().all(|item| predicate(item))
}

#[inline]
pub fn find<T: Clone>(predicate: impl Fn(&T) -> bool) -> impl Fn(&[T]) -> Option<T> {
  move |array: &[T]| array.iter().find(|item| predicate(item)).cloned()
}

#[inline]
pub fn find_index<T>(predicate: impl Fn(&T) -> bool) -> impl Fn(&[T]) -> Option<usize> {
  move |array: &[T]| array.iter().position(|item| predicate(item))
}


// Filtering

#[inline]
pub fn filter<T: Clone>(predicate: impl Fn(&T) -> bool) -> impl Fn(&[T]) -> Vec<T> {
  move |array: &[T]| array.iter().filter(|item| predicate(item)).cloned().collect()
}

#[inline]
pub fn reject<T: Clone>(predicate: impl Fn(&T) -> bool) -> impl Fn(&[T]) -> Vec<T> {
  move |array: &[T]| array.iter().filter(|item| !predicate(item)).cloned().collect()
}

/// Splits into `(matching, not_matching)`, keeping the relative order within each.
#[inline]
pub fn partition<T: Clone>(predicate: impl Fn(&T) -> bool) -> impl Fn(&[T]) -> (Vec<T>, Vec<T>) {
  move |array: &[T]| array.iter().cloned().partition(|item| predicate(item))
}

/// The first `count` elements, or all of them if there are fewer.
#[inline]
pub fn take<T: Clone>(count: usize) -> impl Fn(&[T]) -> Vec<T> {
  move |array: &[T]| array[..count.min(array.len())].to_vec()
}

/// All elements after the first `count`, or none if there are fewer.
#[inline]
pub fn drop<T: Clone>(count: usize) -> impl Fn(&[T]) -> Vec<T> {
  move |array: &[T]| array[count.min(array.len())..].to_vec()
}

/// The longest prefix of elements satisfying `predicate`. `predicate` is not called after the first rejection.
#[inline]
pub fn take_while<T: Clone>(predicate: impl Fn(&T) -> bool) -> impl Fn(&[T]) -> Vec<T> {
  move |array: &[T]| array.iter().take_while(|item| predicate(item)).cloned().collect()
}


// Transforming

#[inline]
pub fn map<T, U>(f: impl Fn(&T) -> U) -> impl Fn(&[T]) -> Vec<U> {
  move |array: &[T]| array.iter().map(&f).collect()
}

#[inline]
pub fn map_with_index<T, U>(f: impl Fn(&T, usize) -> U) -> impl Fn(&[T]) -> Vec<U> {
  move |array: &[T]| array.iter().enumerate().map(|(index, item)| f(item, index)).collect()
}

#[inline]
pub fn flat_map<T, U, I: IntoIterator<Item=U>>(f: impl Fn(&T) -> I) -> impl Fn(&[T]) -> Vec<U> {
  move |array: &[T]| array.iter().flat_map(&f).collect()
}

#[inline]
pub fn flatten<T: Clone, A: AsRef<[T]>>(arrays: &[A]) -> Vec<T> {
  arrays.iter().flat_map(|array| array.as_ref().iter().cloned()).collect()
}


// Aggregation

#[inline]
pub fn reduce<T, U: Clone>(f: impl Fn(U, &T) -> U, initial: U) -> impl Fn(&[T]) -> U {
  move |array: &[T]| array.iter().fold(initial.clone(), &f)
}

#[inline]
pub fn reduce_right<T, U: Clone>(f: impl Fn(U, &T) -> U, initial: U) -> impl Fn(&[T]) -> U {
  move |array: &[T]| array.iter().rev().fold(initial.clone(), &f)
}

/// Sum of all elements; zero for an empty slice.
#[inline]
pub fn sum<T: Sum<T> + Copy>(array: &[T]) -> T { array.iter().copied().sum() }

/// Product of all elements; one for an empty slice.
#[inline]
pub fn product<T: Product<T> + Copy>(array: &[T]) -> T { array.iter().copied().product() }

fn extremum_by<T, K: PartialOrd>(array: &[T], selector: impl Fn(&T) -> K, replaces: Ordering) -> Option<&T> {
  let (first, rest) = array.split_first()?;
  let mut extremum = (first, selector(first));
  for item in rest {
    let key = selector(item);
    if key.partial_cmp(&extremum.1) == Some(replaces) {
      extremum = (item, key);
    }
  }
  Some(extremum.0)
}

/// Smallest element; `None` for an empty slice. Of equal elements, the first is kept.
#[inline]
pub fn min<T: PartialOrd + Copy>(array: &[T]) -> Option<T> {
  extremum_by(array, |item| *item, Ordering::Less).copied()
}

/// Largest element; `None` for an empty slice. Of equal elements, the first is kept.
#[inline]
pub fn max<T: PartialOrd + Copy>(array: &[T]) -> Option<T> {
  extremum_by(array, |item| *item, Ordering::Greater).copied()
}

/// Element with the smallest key; `None` for an empty slice. Of equal keys, the first is kept.
#[inline]
pub fn min_by<T: Clone, K: PartialOrd>(selector: impl Fn(&T) -> K) -> impl Fn(&[T]) -> Option<T> {
  move |array: &[T]| extremum_by(array, &selector, Ordering::Less).cloned()
}

/// Element with the largest key; `None` for an empty slice. Of equal keys, the first is kept.
#[inline]
pub fn max_by<T: Clone, K: PartialOrd>(selector: impl Fn(&T) -> K) -> impl Fn(&[T]) -> Option<T> {
  move |array: &[T]| extremum_by(array, &selector, Ordering::Greater).cloned()
}


// Grouping

/// Groups elements by the key `selector` extracts. Keys are in order of first appearance, and elements keep their
/// order within each group.
pub fn group_by<T: Clone, K: Eq + Hash>(selector: impl Fn(&T) -> K) -> impl Fn(&[T]) -> LinkedHashMap<K, Vec<T>> {
  move |array: &[T]| {
    let mut groups: LinkedHashMap<K, Vec<T>> = LinkedHashMap::new();
    for item in array {
      let key = selector(item);
      if let Some(group) = groups.get_mut(&key) {
        group.push(item.clone());
      } else {
        groups.insert(key, vec![item.clone()]);
      }
    }
    groups
  }
}

/// Counts elements per key `selector` extracts, keys in order of first appearance.
pub fn count_by<T, K: Eq + Hash>(selector: impl Fn(&T) -> K) -> impl Fn(&[T]) -> LinkedHashMap<K, usize> {
  move |array: &[T]| {
    let mut counts: LinkedHashMap<K, usize> = LinkedHashMap::new();
    for item in array {
      let key = selector(item);
      if let Some(count) = counts.get_mut(&key) {
        *count += 1;
      } else {
        counts.insert(key, 1);
      }
    }
    counts
  }
}


// Deduplication and set operations

/// Removes duplicates, keeping first occurrences in order.
pub fn unique<T: Eq + Hash + Clone>(array: &[T]) -> Vec<T> {
  let mut seen = HashSet::with_capacity(array.len());
  array.iter().filter(|item| seen.insert(*item)).cloned().collect()
}

/// Removes elements whose key was already seen, keeping first occurrences in order.
pub fn unique_by<T: Clone, K: Eq + Hash>(selector: impl Fn(&T) -> K) -> impl Fn(&[T]) -> Vec<T> {
  move |array: &[T]| {
    let mut seen = HashSet::with_capacity(array.len());
    array.iter().filter(|item| seen.insert(selector(item))).cloned().collect()
  }
}

/// Unique elements of the slice followed by those of `other`.
pub fn union<'a, T: Eq + Hash + Clone + 'a>(other: &'a [T]) -> impl Fn(&[T]) -> Vec<T> + 'a {
  move |array: &[T]| {
    let mut seen = HashSet::with_capacity(array.len() + other.len());
    array.iter().chain(other).filter(|item| seen.insert(*item)).cloned().collect()
  }
}

/// Elements of the slice that are also in `other`.
pub fn intersection<'a, T: Eq + Hash + Clone + 'a>(other: &'a [T]) -> impl Fn(&[T]) -> Vec<T> + 'a {
  move |array: &[T]| {
    let other: HashSet<&T> = other.iter().collect();
    array.iter().filter(|item| other.contains(item)).cloned().collect()
  }
}

/// Elements of the slice that are not in `other`.
pub fn difference<'a, T: Eq + Hash + Clone + 'a>(other: &'a [T]) -> impl Fn(&[T]) -> Vec<T> + 'a {
  move |array: &[T]| {
    let other: HashSet<&T> = other.iter().collect();
    array.iter().filter(|item| !other.contains(item)).cloned().collect()
  }
}


// Chunking and zipping

/// Consecutive chunks of `size` elements, the last possibly shorter. Empty when `size` is zero.
#[inline]
pub fn chunk<T: Clone>(size: usize) -> impl Fn(&[T]) -> Vec<Vec<T>> {
  move |array: &[T]| {
    if size == 0 { return Vec::new(); }
    array.chunks(size).map(<[T]>::to_vec).collect()
  }
}

/// Pairs elements of the slice with those of `other` by position, up to the shorter length.
#[inline]
pub fn zip<'a, T: Clone + 'a, U: Clone + 'a>(other: &'a [U]) -> impl Fn(&[T]) -> Vec<(T, U)> + 'a {
  move |array: &[T]| array.iter().cloned().zip(other.iter().cloned()).collect()
}

/// Combines elements of the slice with those of `other` by position using `f`, up to the shorter length:
/// `zip_with(f)(other)(array)`.
pub fn zip_with<'a, T: 'a, U: 'a, V: 'a>(
  f: impl Fn(&T, &U) -> V + 'a,
) -> impl Fn(&'a [U]) -> Box<dyn Fn(&[T]) -> Vec<V> + 'a> + 'a {
  let f = Rc::new(f);
  move |other: &'a [U]| -> Box<dyn Fn(&[T]) -> Vec<V> + 'a> {
    let f = f.clone();
    Box::new(move |array: &[T]| array.iter().zip(other).map(|(a, b)| f(a, b)).collect())
  }
}


// Creation

/// Integers from `start` (inclusive) to `end` (exclusive).
#[inline]
pub fn range(start: i64, end: i64) -> Vec<i64> { range_step(start, end, 1) }

/// Integers from `start` (inclusive) to `end` (exclusive), advancing by `step`. A non-positive `step` gives an empty
/// result.
pub fn range_step(start: i64, end: i64, step: i64) -> Vec<i64> {
  if step <= 0 {
    if start < end {
      tracing::warn!(start, end, step, "non-positive step for an increasing range; returning an empty range");
    }
    return Vec::new();
  }
  let mut result = Vec::new();
  let mut current = start;
  while current < end {
    result.push(current);
    match current.checked_add(step) {
      Some(next) => current = next,
      None => break,
    }
  }
  result
}

/// Numbers from `start` (inclusive) to `end` (exclusive), advancing by a possibly fractional `step`. The `n`th
/// number is `start + n * step`, so rounding errors do not accumulate. A non-positive or NaN `step`, or a
/// non-finite bound, gives an empty result.
pub fn range_f64(start: f64, end: f64, step: f64) -> Vec<f64> {
  if !(step > 0.0) || !start.is_finite() || !end.is_finite() {
    if start < end {
      tracing::warn!(start, end, step, "non-positive step or unbounded range; returning an empty range");
    }
    return Vec::new();
  }
  let mut result = Vec::new();
  let mut current = start;
  while current < end {
    result.push(current);
    let next = start + result.len() as f64 * step;
    if next <= current { break; }
    current = next;
  }
  result
}

/// `count` copies of `value`.
#[inline]
pub fn repeat<T: Clone>(value: T, count: usize) -> Vec<T> { vec![value; count] }

#[inline]
pub fn replicate<T: Clone>(value: T, count: usize) -> Vec<T> { repeat(value, count) }
