//! Data-last combinators over [`Result`], and guards that turn panics into failures.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use crate::{Error, Panic, Thrown};

/// [`std::result::Result`] with [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[inline]
pub fn success<T, E>(value: T) -> Result<T, E> { Ok(value) }

#[inline]
pub fn failure<T, E>(error: E) -> Result<T, E> { Err(error) }

#[inline]
pub fn is_success<T, E>(result: &Result<T, E>) -> bool { result.is_ok() }

#[inline]
pub fn is_failure<T, E>(result: &Result<T, E>) -> bool { result.is_err() }


#[inline]
pub fn map<T, U, E>(f: impl Fn(T) -> U) -> impl Fn(Result<T, E>) -> Result<U, E> {
  move |result: Result<T, E>| match result {
    Ok(value) => Ok(f(value)),
    Err(error) => Err(error),
  }
}

#[inline]
pub fn map_error<T, E, F>(f: impl Fn(E) -> F) -> impl Fn(Result<T, E>) -> Result<T, F> {
  move |result: Result<T, E>| match result {
    Ok(value) => Ok(value),
    Err(error) => Err(f(error)),
  }
}

/// Applies the function in `fn_result` to the value of the result it is given. When both fail, the failure of
/// `fn_result` is returned.
#[inline]
pub fn apply<T, U, E, F: FnOnce(T) -> U>(fn_result: Result<F, E>) -> impl FnOnce(Result<T, E>) -> Result<U, E> {
  move |result: Result<T, E>| match (fn_result, result) {
    (Ok(f), Ok(value)) => Ok(f(value)),
    (Err(error), _) => Err(error),
    (Ok(_), Err(error)) => Err(error),
  }
}

/// Chains a result-returning function; failures pass through without calling `f`.
#[inline]
pub fn flat_map<T, U, E>(f: impl Fn(T) -> Result<U, E>) -> impl Fn(Result<T, E>) -> Result<U, E> {
  move |result: Result<T, E>| match result {
    Ok(value) => f(value),
    Err(error) => Err(error),
  }
}

#[inline]
pub fn chain<T, U, E>(f: impl Fn(T) -> Result<U, E>) -> impl Fn(Result<T, E>) -> Result<U, E> { flat_map(f) }

#[inline]
pub fn fold<T, E, R>(on_success: impl Fn(T) -> R, on_failure: impl Fn(E) -> R) -> impl Fn(Result<T, E>) -> R {
  move |result: Result<T, E>| match result {
    Ok(value) => on_success(value),
    Err(error) => on_failure(error),
  }
}

#[inline]
pub fn get_or_else<T: Clone, E>(default: T) -> impl Fn(Result<T, E>) -> T {
  move |result: Result<T, E>| match result {
    Ok(value) => value,
    Err(_) => default.clone(),
  }
}

/// Like [`get_or_else`], but computes the default from the error, and only on failure.
#[inline]
pub fn get_or_else_lazy<T, E>(default: impl Fn(E) -> T) -> impl Fn(Result<T, E>) -> T {
  move |result: Result<T, E>| match result {
    Ok(value) => value,
    Err(error) => default(error),
  }
}


// Panic guards

fn caught<E>(payload: Box<dyn std::any::Any + Send>, on_error: impl FnOnce(Panic) -> E) -> E {
  let panic = Panic::from_payload(payload);
  tracing::debug!(%panic, "caught panic");
  on_error(panic)
}

/// Runs `f`, converting a panic into a failure with `on_error`. The panic does not propagate, but the panic hook
/// still runs: the default hook prints the panic message to stderr. Install a hook with [`std::panic::set_hook`] to
/// silence it.
///
/// ```
/// use bellamy_fp::result::try_catch;
///
/// std::panic::set_hook(Box::new(|_| {}));
/// let result: Result<(), String> = try_catch(|| panic!("meal photo unreadable"), |panic| panic.into_message());
/// assert_eq!(result, Err("meal photo unreadable".to_string()));
/// let _ = std::panic::take_hook();
/// ```
pub fn try_catch<T, E>(f: impl FnOnce() -> T, on_error: impl FnOnce(Panic) -> E) -> Result<T, E> {
  panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| caught(payload, on_error))
}

/// Runs fallible `f`, converting both its error and a panic into a failure with `on_error`.
pub fn try_catch_result<T, E, X>(
  f: impl FnOnce() -> Result<T, X>,
  on_error: impl FnOnce(Thrown<X>) -> E,
) -> Result<T, E> {
  match panic::catch_unwind(AssertUnwindSafe(f)) {
    Ok(Ok(value)) => Ok(value),
    Ok(Err(error)) => Err(on_error(Thrown::Error(error))),
    Err(payload) => Err(caught(payload, |panic| on_error(Thrown::Panic(panic)))),
  }
}

/// Asynchronous [`try_catch_result`]: a panic while creating or polling the future, and an error it resolves to,
/// are both converted into a failure with `on_error`.
pub async fn try_catch_async<T, E, X, Fut>(
  f: impl FnOnce() -> Fut,
  on_error: impl FnOnce(Thrown<X>) -> E,
) -> Result<T, E> where
  Fut: Future<Output=Result<T, X>>,
{
  let future = match panic::catch_unwind(AssertUnwindSafe(f)) {
    Ok(future) => future,
    Err(payload) => return Err(caught(payload, |panic| on_error(Thrown::Panic(panic)))),
  };
  match AssertUnwindSafe(future).catch_unwind().await {
    Ok(Ok(value)) => Ok(value),
    Ok(Err(error)) => Err(on_error(Thrown::Error(error))),
    Err(payload) => Err(caught(payload, |panic| on_error(Thrown::Panic(panic)))),
  }
}


/// Turns results into a result of all their values, or the first failure.
pub fn sequence<T, E>(results: impl IntoIterator<Item=Result<T, E>>) -> Result<Vec<T>, E> {
  let results = results.into_iter();
  let mut values = Vec::with_capacity(results.size_hint().0);
  for result in results {
    values.push(result?);
  }
  Ok(values)
}

/// Maps each value with `f` and [sequences](sequence) the results. Stops calling `f` after the first failure.
#[inline]
pub fn traverse<T, U, E, I: IntoIterator<Item=T>>(f: impl Fn(T) -> Result<U, E>) -> impl Fn(I) -> Result<Vec<U>, E> {
  move |values: I| sequence(values.into_iter().map(&f))
}

/// Asynchronous [`traverse`]: awaits `f` for each value in order, one at a time. The first failure is returned and
/// `f` is not called for the remaining values.
pub async fn traverse_async<T, U, E, Fut>(
  f: impl Fn(T) -> Fut,
  values: impl IntoIterator<Item=T>,
) -> Result<Vec<U>, E> where
  Fut: Future<Output=Result<U, E>>,
{
  let mut results = Vec::new();
  for (index, value) in values.into_iter().enumerate() {
    tracing::trace!(index, "awaiting traversal step");
    results.push(f(value).await?);
  }
  Ok(results)
}


#[cfg(test)]
mod tests {
  use std::cell::{Cell, RefCell};

  use futures::executor::block_on;
  use proptest::prelude::*;

  use super::*;

  #[test]
  fn constructors_and_predicates() {
    let ok: Result<i32, &str> = success(1);
    let err: Result<i32, &str> = failure("x");
    assert!(is_success(&ok) && !is_failure(&ok));
    assert!(is_failure(&err) && !is_success(&err));
  }

  #[test]
  fn map_and_map_error() {
    let inc = map(|x: i32| x + 1);
    assert_eq!(inc(Ok::<_, &str>(1)), Ok(2));
    assert_eq!(inc(Err("x")), Err("x"));

    let len = map_error(|e: &str| e.len());
    assert_eq!(len(Err::<i32, _>("four")), Err(4));
    assert_eq!(len(Ok(1)), Ok(1));
  }

  #[test]
  fn flat_map_propagates_failure_without_calling() {
    let calls = Cell::new(0);
    let f = flat_map(|x: i32| {
      calls.set(calls.get() + 1);
      if x > 0 { Ok(x) } else { Err("negative") }
    });
    assert_eq!(f(Err("original")), Err("original"));
    assert_eq!(calls.get(), 0);
    assert_eq!(f(Ok(-1)), Err("negative"));
    assert_eq!(chain(|x: i32| Ok::<_, &str>(x * 2))(Ok(2)), Ok(4));
  }

  #[test]
  fn apply_prefers_function_failure() {
    let double = |x: i32| x * 2;
    assert_eq!(apply(Ok::<_, &str>(double))(Ok(3)), Ok(6));
    assert_eq!(apply(Ok::<_, &str>(double))(Err("value")), Err("value"));
    assert_eq!(apply(Err::<fn(i32) -> i32, _>("fn"))(Ok(3)), Err("fn"));
    assert_eq!(apply(Err::<fn(i32) -> i32, _>("fn"))(Err("value")), Err("fn"));
  }

  #[test]
  fn fold_and_get_or_else() {
    let describe = fold(|x: i32| format!("ok {x}"), |e: &str| format!("err {e}"));
    assert_eq!(describe(Ok(1)), "ok 1");
    assert_eq!(describe(Err("x")), "err x");

    assert_eq!(get_or_else(0)(Ok::<_, &str>(5)), 5);
    assert_eq!(get_or_else(0)(Err("x")), 0);
    assert_eq!(get_or_else_lazy(|e: &str| e.len())(Err("abc")), 3);
  }

  #[test]
  fn try_catch_converts_panic() {
    let result: Result<i32, String> = try_catch(|| panic!("boom"), |panic| panic.into_message());
    assert_eq!(result, Err("boom".to_string()));
    let result: Result<i32, String> = try_catch(|| 42, |panic| panic.into_message());
    assert_eq!(result, Ok(42));
    let result: Result<i32> = try_catch(|| panic!("{} {}", "formatted", 1), Error::from);
    assert_eq!(result, Err(Error::Panicked(Panic::new("formatted 1"))));
  }

  #[test]
  fn try_catch_result_converts_error_and_panic() {
    let parse = |s: &'static str| try_catch_result(|| s.parse::<i32>(), |thrown| thrown.is_panic());
    assert_eq!(parse("7"), Ok(7));
    assert_eq!(parse("x"), Err(false));
    let result: Result<i32, bool> = try_catch_result(|| -> Result<i32, ()> { panic!("boom") }, |thrown| thrown.is_panic());
    assert_eq!(result, Err(true));
  }

  fn thrown_message(thrown: Thrown<String>) -> String {
    match thrown {
      Thrown::Panic(panic) => panic.to_string(),
      Thrown::Error(error) => error,
    }
  }

  #[test]
  fn try_catch_async_converts_rejection_and_panics() {
    let result: Result<i32, String> = block_on(try_catch_async(|| async { Ok::<_, String>(1) }, thrown_message));
    assert_eq!(result, Ok(1));

    let result: Result<i32, String> = block_on(try_catch_async(|| async { Err::<i32, _>("rejected".to_string()) }, thrown_message));
    assert_eq!(result, Err("rejected".to_string()));

    let result: Result<i32, String> = block_on(try_catch_async(
      || async { if true { panic!("async boom") } Ok::<_, String>(1) },
      thrown_message,
    ));
    assert_eq!(result, Err("panicked: async boom".to_string()));

    fn panics_before_future() -> futures::future::Ready<Result<i32, String>> { panic!("sync boom") }
    let result: Result<i32, String> = block_on(try_catch_async(panics_before_future, thrown_message));
    assert_eq!(result, Err("panicked: sync boom".to_string()));
  }

  #[test]
  fn sequence_returns_first_failure() {
    assert_eq!(sequence([Ok::<_, &str>(1), Ok(2), Ok(3)]), Ok(vec![1, 2, 3]));
    assert_eq!(sequence([Ok(1), Err("x"), Ok(3)]), Err("x"));
    assert_eq!(sequence([Ok(1), Err("x"), Err("y")]), Err("x"));
    assert_eq!(sequence(Vec::<Result<i32, &str>>::new()), Ok(vec![]));
  }

  #[test]
  fn traverse_stops_at_first_failure() {
    let calls = Cell::new(0);
    let parse = traverse(|s: &str| {
      calls.set(calls.get() + 1);
      s.parse::<i32>().map_err(|_| s.to_string())
    });
    assert_eq!(parse(vec!["1", "2"]), Ok(vec![1, 2]));
    assert_eq!(parse(vec!["1", "x", "y"]), Err("x".to_string()));
    assert_eq!(calls.get(), 4);
  }

  #[test]
  fn traverse_async_is_sequential() {
    let started = RefCell::new(Vec::new());
    let f = |x: i32| {
      started.borrow_mut().push(x);
      async move { if x < 0 { Err(x) } else { Ok(x * 2) } }
    };
    assert_eq!(block_on(traverse_async(f, [1, 2])), Ok(vec![2, 4]));
    assert_eq!(block_on(traverse_async(f, [1, -2, -3])), Err(-2));
    assert_eq!(*started.borrow(), vec![1, 2, 1, -2]);
  }

  proptest! {
    #[test]
    fn functor_identity(result in any::<std::result::Result<i32, u8>>()) {
      prop_assert_eq!(map(|v: i32| v)(result), result);
    }

    #[test]
    fn functor_composition(result in any::<std::result::Result<i32, u8>>()) {
      let f = |v: i32| v.wrapping_add(11);
      let g = |v: i32| v.wrapping_mul(-2);
      prop_assert_eq!(map(g)(map(f)(result)), map(|v| g(f(v)))(result));
    }

    #[test]
    fn flat_map_keeps_failure(error in any::<u8>()) {
      let f = flat_map(|v: i32| Ok::<_, u8>(v + 1));
      prop_assert_eq!(f(Err(error)), Err(error));
    }
  }
}
