//! Data-last combinators over [`Option`].
//!
//! Each combinator is configured first and applied to the option afterwards:
//!
//! ```
//! use bellamy_fp::option;
//!
//! let half_of_even = option::flat_map(|x: i32| if x % 2 == 0 { Some(x / 2) } else { None });
//! assert_eq!(half_of_even(Some(8)), Some(4));
//! assert_eq!(half_of_even(Some(3)), None);
//! assert_eq!(half_of_even(None), None);
//! ```

use std::future::Future;
use std::rc::Rc;

use crate::result::Result;
use crate::Error;

#[inline]
pub fn some<T>(value: T) -> Option<T> { Some(value) }

#[inline]
pub const fn none<T>() -> Option<T> { None }


/// A value with a null-like state.
pub trait Nullable {
  type Value;

  fn into_option(self) -> Option<Self::Value>;
}
impl<T> Nullable for Option<T> {
  type Value = T;
  #[inline]
  fn into_option(self) -> Option<T> { self }
}
#[cfg(feature = "serde_json")]
impl Nullable for serde_json::Value {
  type Value = serde_json::Value;
  #[inline]
  fn into_option(self) -> Option<serde_json::Value> {
    match self {
      serde_json::Value::Null => None,
      value => Some(value),
    }
  }
}

/// Returns `Some` unless `value` is in its null-like state.
#[inline]
pub fn from_nullable<N: Nullable>(value: N) -> Option<N::Value> { value.into_option() }

/// Converts into a JSON value, `None` becoming `null`.
#[cfg(feature = "serde_json")]
#[inline]
pub fn to_nullable<T: Into<serde_json::Value>>(option: Option<T>) -> serde_json::Value {
  option.map_or(serde_json::Value::Null, Into::into)
}

/// Borrows the contained value, if any.
#[inline]
pub fn to_undefined<T>(option: &Option<T>) -> Option<&T> { option.as_ref() }


#[inline]
pub fn is_some<T>(option: &Option<T>) -> bool { option.is_some() }

#[inline]
pub fn is_none<T>(option: &Option<T>) -> bool { option.is_none() }


#[inline]
pub fn map<T, U>(f: impl Fn(T) -> U) -> impl Fn(Option<T>) -> Option<U> {
  move |option: Option<T>| match option {
    Some(value) => Some(f(value)),
    None => None,
  }
}

/// Applies the function in `fn_option` to the value in the option it is given, if both are `Some`.
#[inline]
pub fn apply<T, U, F: FnOnce(T) -> U>(fn_option: Option<F>) -> impl FnOnce(Option<T>) -> Option<U> {
  move |option: Option<T>| match (fn_option, option) {
    (Some(f), Some(value)) => Some(f(value)),
    _ => None,
  }
}

/// Chains an option-returning function; `f` is never called on `None`.
#[inline]
pub fn flat_map<T, U>(f: impl Fn(T) -> Option<U>) -> impl Fn(Option<T>) -> Option<U> {
  move |option: Option<T>| match option {
    Some(value) => f(value),
    None => None,
  }
}

#[inline]
pub fn chain<T, U>(f: impl Fn(T) -> Option<U>) -> impl Fn(Option<T>) -> Option<U> { flat_map(f) }

#[inline]
pub fn filter<T>(predicate: impl Fn(&T) -> bool) -> impl Fn(Option<T>) -> Option<T> {
  move |option: Option<T>| match option {
    Some(value) if predicate(&value) => Some(value),
    _ => None,
  }
}

#[inline]
pub fn fold<T, R>(on_none: impl Fn() -> R, on_some: impl Fn(T) -> R) -> impl Fn(Option<T>) -> R {
  move |option: Option<T>| match option {
    Some(value) => on_some(value),
    None => on_none(),
  }
}

#[inline]
pub fn get_or_else<T: Clone>(default: T) -> impl Fn(Option<T>) -> T {
  move |option: Option<T>| match option {
    Some(value) => value,
    None => default.clone(),
  }
}

/// Like [`get_or_else`], but only computes the default when the option is `None`.
#[inline]
pub fn get_or_else_lazy<T>(default: impl Fn() -> T) -> impl Fn(Option<T>) -> T {
  move |option: Option<T>| match option {
    Some(value) => value,
    None => default(),
  }
}

/// Escapes `None` into [`Error::Absent`], for propagation with `?`.
#[inline]
pub fn get_or_else_throw<T>(option: Option<T>) -> Result<T> {
  option.ok_or(Error::Absent)
}

/// Combines two options with a binary function, one option per application: `map2(f)(a)(b)`. `None` if either is
/// `None`.
pub fn map2<A, B, C>(f: impl Fn(A, B) -> C + 'static) -> impl Fn(Option<A>) -> Box<dyn FnOnce(Option<B>) -> Option<C>> where
  A: 'static,
  B: 'static,
  C: 'static,
{
  let f = Rc::new(f);
  move |a: Option<A>| -> Box<dyn FnOnce(Option<B>) -> Option<C>> {
    let f = f.clone();
    Box::new(move |b: Option<B>| match (a, b) {
      (Some(a), Some(b)) => Some(f(a, b)),
      _ => None,
    })
  }
}


/// Turns options into an option of all their values, or `None` at the first `None`.
pub fn sequence<T>(options: impl IntoIterator<Item=Option<T>>) -> Option<Vec<T>> {
  let options = options.into_iter();
  let mut values = Vec::with_capacity(options.size_hint().0);
  for option in options {
    values.push(option?);
  }
  Some(values)
}

/// Maps each value with `f` and [sequences](sequence) the results. Stops calling `f` after the first `None`.
#[inline]
pub fn traverse<T, U, I: IntoIterator<Item=T>>(f: impl Fn(T) -> Option<U>) -> impl Fn(I) -> Option<Vec<U>> {
  move |values: I| sequence(values.into_iter().map(&f))
}

/// Asynchronous [`traverse`]: awaits `f` for each value in order, one at a time, and stops at the first `None`.
pub async fn traverse_async<T, U, Fut>(
  f: impl Fn(T) -> Fut,
  values: impl IntoIterator<Item=T>,
) -> Option<Vec<U>> where
  Fut: Future<Output=Option<U>>,
{
  let mut results = Vec::new();
  for (index, value) in values.into_iter().enumerate() {
    match f(value).await {
      Some(result) => results.push(result),
      None => {
        tracing::trace!(index, "traversal stopped at absent value");
        return None;
      }
    }
  }
  Some(results)
}
