//! Function composition: [`pipe`], [`compose`]/[`compose!`](crate::compose!) (right to left),
//! [`flow`]/[`flow!`](crate::flow!) (left to right), fixed-arity currying and partial application.

use std::rc::Rc;

/// Value wrapped for chaining with [`then`](Self::then).
#[derive(Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Pipe<T>(T);

/// Wraps `value` into a [`Pipe`].
#[inline]
pub fn pipe<T>(value: T) -> Pipe<T> { Pipe(value) }

impl<T> Pipe<T> {
  /// Applies `f` to the wrapped value and wraps the result.
  #[inline]
  pub fn then<U>(self, f: impl FnOnce(T) -> U) -> Pipe<U> { Pipe(f(self.0)) }

  #[inline]
  pub fn value(&self) -> &T { &self.0 }

  #[inline]
  pub fn into_value(self) -> T { self.0 }
}
impl<T> From<T> for Pipe<T> {
  #[inline]
  fn from(value: T) -> Self { Self(value) }
}


/// Composes two functions right to left: `compose(g, f)(x) == g(f(x))`.
#[inline]
pub fn compose<A, B, C>(g: impl Fn(B) -> C, f: impl Fn(A) -> B) -> impl Fn(A) -> C {
  move |a| g(f(a))
}

/// Composes two functions left to right: `flow(f, g)(x) == g(f(x))`.
#[inline]
pub fn flow<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
  move |a| g(f(a))
}

/// Composes any number of functions right to left: `compose!(h, g, f)(x) == h(g(f(x)))`.
#[macro_export]
macro_rules! compose {
  ($f:expr $(,)?) => { $f };
  ($f:expr, $($rest:expr),+ $(,)?) => {{
    let f = $f;
    let rest = $crate::compose!($($rest),+);
    move |value| f(rest(value))
  }};
}

/// Composes any number of functions left to right: `flow!(f, g, h)(x) == h(g(f(x)))`.
#[macro_export]
macro_rules! flow {
  ($f:expr $(,)?) => { $f };
  ($f:expr, $($rest:expr),+ $(,)?) => {{
    let f = $f;
    let rest = $crate::flow!($($rest),+);
    move |value| rest(f(value))
  }};
}


// Currying

pub fn curry2<A, B, R>(f: impl Fn(A, B) -> R + 'static) -> impl Fn(A) -> Box<dyn Fn(B) -> R> where
  A: Clone + 'static,
  B: 'static,
  R: 'static,
{
  let f = Rc::new(f);
  move |a: A| -> Box<dyn Fn(B) -> R> {
    let f = f.clone();
    Box::new(move |b: B| f(a.clone(), b))
  }
}

pub fn curry3<A, B, C, R>(f: impl Fn(A, B, C) -> R + 'static) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>> where
  A: Clone + 'static,
  B: Clone + 'static,
  C: 'static,
  R: 'static,
{
  let f = Rc::new(f);
  move |a: A| -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>> {
    let f = f.clone();
    Box::new(move |b: B| -> Box<dyn Fn(C) -> R> {
      let (f, a) = (f.clone(), a.clone());
      Box::new(move |c: C| f(a.clone(), b.clone(), c))
    })
  }
}

pub fn curry4<A, B, C, D, R>(
  f: impl Fn(A, B, C, D) -> R + 'static
) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> Box<dyn Fn(D) -> R>>> where
  A: Clone + 'static,
  B: Clone + 'static,
  C: Clone + 'static,
  D: 'static,
  R: 'static,
{
  let f = Rc::new(f);
  move |a: A| -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> Box<dyn Fn(D) -> R>>> {
    let f = f.clone();
    Box::new(move |b: B| -> Box<dyn Fn(C) -> Box<dyn Fn(D) -> R>> {
      let (f, a) = (f.clone(), a.clone());
      Box::new(move |c: C| -> Box<dyn Fn(D) -> R> {
        let (f, a, b) = (f.clone(), a.clone(), b.clone());
        Box::new(move |d: D| f(a.clone(), b.clone(), c.clone(), d))
      })
    })
  }
}


// Partial application

/// Fixes the first argument of a binary function.
#[inline]
pub fn partial<A: Clone, B, R>(f: impl Fn(A, B) -> R, a: A) -> impl Fn(B) -> R {
  move |b| f(a.clone(), b)
}

/// Fixes the first argument of a ternary function.
#[inline]
pub fn partial3<A: Clone, B, C, R>(f: impl Fn(A, B, C) -> R, a: A) -> impl Fn(B, C) -> R {
  move |b, c| f(a.clone(), b, c)
}

/// Fixes the first two arguments of a ternary function.
#[inline]
pub fn partial3_2<A: Clone, B: Clone, C, R>(f: impl Fn(A, B, C) -> R, a: A, b: B) -> impl Fn(C) -> R {
  move |c| f(a.clone(), b.clone(), c)
}
