//! Functional utilities: data-last combinators over [`Option`], [`Result`](result::Result) and slices, plus
//! function composition helpers.
//!
//! Configuring a combinator returns a closure that is applied to the container afterwards, so combinators chain
//! with [`pipe`](compose::pipe), [`flow!`] and [`compose!`]:
//!
//! ```
//! use bellamy_fp::compose::pipe;
//! use bellamy_fp::{array, flow, option};
//!
//! let doubled_evens = pipe(vec![1, 2, 3, 4])
//!   .then(|xs| array::filter(|x: &i32| x % 2 == 0)(&xs))
//!   .then(|xs| array::map(|x: &i32| x * 2)(&xs))
//!   .into_value();
//! assert_eq!(doubled_evens, vec![4, 8]);
//!
//! let parse_then_halve = flow!(|s: &str| s.parse::<i32>().ok(), option::map(|x: i32| x / 2));
//! assert_eq!(parse_then_halve("8"), Some(4));
//! assert_eq!(parse_then_halve("eight"), None);
//!
//! let parsed = option::traverse(|s: &str| s.parse::<i32>().ok())(["1", "2"]);
//! assert_eq!(parsed, Some(vec![1, 2]));
//! ```

pub mod error;
pub mod compose;
pub mod option;
pub mod result;
pub mod array;
pub mod app;

pub use error::{Error, Panic, Thrown};
