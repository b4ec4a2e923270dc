use std::any::Any;

/// Default error type of [`Result`](crate::result::Result).
#[derive(thiserror::Error, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
  #[error("no value present")]
  Absent,
  #[error(transparent)]
  Panicked(#[from] Panic),
  #[error("{0}")]
  Message(String),
}
impl Error {
  #[inline]
  pub fn message(message: impl Into<String>) -> Self { Self::Message(message.into()) }
}


/// A caught panic, holding the panic message.
#[derive(thiserror::Error, Clone, Eq, PartialEq, Hash, Debug)]
#[error("panicked: {message}")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Panic {
  message: String,
}
impl Panic {
  #[inline]
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into() }
  }

  /// Create from the payload of [`std::panic::catch_unwind`]. Payloads that are not a string get a placeholder
  /// message.
  pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
    let message = match payload.downcast::<String>() {
      Ok(message) => *message,
      Err(payload) => match payload.downcast::<&'static str>() {
        Ok(message) => message.to_string(),
        Err(_) => "Box<dyn Any>".to_string(),
      }
    };
    Self { message }
  }

  #[inline]
  pub fn message(&self) -> &str { &self.message }

  #[inline]
  pub fn into_message(self) -> String { self.message }
}


/// What a guarded fallible function produced instead of a value: a panic, or the error it returned. Displays as,
/// and has the source of, the wrapped panic or error.
#[derive(thiserror::Error, Clone, Eq, PartialEq, Debug)]
pub enum Thrown<X> {
  #[error(transparent)]
  Panic(Panic),
  #[error(transparent)]
  Error(X),
}
impl<X> Thrown<X> {
  #[inline]
  pub fn is_panic(&self) -> bool { matches!(self, Self::Panic(_)) }

  /// Maps the returned error, keeping panics as-is.
  #[inline]
  pub fn map_error<Y>(self, f: impl FnOnce(X) -> Y) -> Thrown<Y> {
    match self {
      Self::Panic(panic) => Thrown::Panic(panic),
      Self::Error(error) => Thrown::Error(f(error)),
    }
  }
}
impl<X: Into<Error>> From<Thrown<X>> for Error {
  #[inline]
  fn from(thrown: Thrown<X>) -> Self {
    match thrown {
      Thrown::Panic(panic) => Error::Panicked(panic),
      Thrown::Error(error) => error.into(),
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn panic_from_payload() {
    assert_eq!(Panic::from_payload(Box::new("boom")).message(), "boom");
    assert_eq!(Panic::from_payload(Box::new(String::from("bang"))).message(), "bang");
    assert_eq!(Panic::from_payload(Box::new(42)).message(), "Box<dyn Any>");
  }

  #[test]
  fn thrown_into_error() {
    let error: Error = Thrown::<Error>::Panic(Panic::new("boom")).into();
    assert_eq!(error, Error::Panicked(Panic::new("boom")));
    let error: Error = Thrown::Error(Error::Absent).into();
    assert_eq!(error, Error::Absent);
    assert_eq!(Error::Panicked(Panic::new("boom")).to_string(), "panicked: boom");
  }

  #[derive(thiserror::Error, Debug)]
  #[error("meal rejected")]
  struct Rejected(#[source] Error);

  fn chain(error: &(dyn std::error::Error + 'static)) -> Vec<String> {
    let mut messages = vec![error.to_string()];
    let mut source = error.source();
    while let Some(error) = source {
      messages.push(error.to_string());
      source = error.source();
    }
    messages
  }

  #[test]
  fn error_chain_has_no_repeated_messages() {
    assert_eq!(chain(&Thrown::<Rejected>::Panic(Panic::new("boom"))), vec!["panicked: boom"]);
    assert_eq!(chain(&Error::Panicked(Panic::new("boom"))), vec!["panicked: boom"]);
    assert_eq!(chain(&Thrown::Error(Rejected(Error::Absent))), vec!["meal rejected", "no value present"]);
    let thrown = Thrown::Error(Rejected(Error::message("photo unreadable")));
    assert_eq!(chain(&thrown), vec!["meal rejected", "photo unreadable"]);
  }

  #[test]
  fn map_error_keeps_panics() {
    let thrown = Thrown::Error(404).map_error(|code: i32| Error::message(format!("status {code}")));
    assert_eq!(thrown, Thrown::Error(Error::Message("status 404".to_string())));
    assert!(!thrown.is_panic());
    assert_eq!(Error::from(thrown).to_string(), "status 404");

    let thrown = Thrown::<i32>::Panic(Panic::new("boom")).map_error(|_| -> Error { unreachable!() });
    assert!(thrown.is_panic());
    assert_eq!(thrown, Thrown::Panic(Panic::new("boom")));
  }
}
