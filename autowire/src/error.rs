use thiserror::Error;

/// The error type for every fallible operation of `fibre_autowire`.
#[derive(Debug, Error)]
pub enum Error {
  /// No resolution strategy could supply a value for a constructor parameter.
  #[error("Failed to create {class}: constructor argument ${parameter} either could not be inferred or instantiated")]
  UnresolvableArgument { class: String, parameter: String },

  /// The introspector has no description for the requested name.
  #[error("Unknown target type: {0}")]
  UnknownTargetType(String),

  /// The name describes an interface and nothing was bound to it.
  #[error("Cannot instantiate {0}: it is an interface with no bound implementation")]
  NotInstantiable(String),

  /// A builder asked for a constructor slot that was never filled.
  #[error("Missing constructor argument #{index} for {class}")]
  MissingArgument { class: String, index: usize },

  /// A builder asked for a constructor slot with a type the value does not have.
  #[error("Constructor argument #{index} for {class} is not a {expected}")]
  ArgumentType {
    class: String,
    index: usize,
    expected: &'static str,
  },

  /// A resolved object could not be viewed as the requested type.
  #[error("Resolved '{name}' is not a {expected}")]
  InstanceType { name: String, expected: &'static str },

  /// A caller-supplied factory reported a failure.
  #[error("Factory for {class} failed: {reason}")]
  Factory { class: String, reason: String },
}

impl Error {
  /// Convenience constructor for custom factories.
  pub fn factory(class: impl Into<String>, reason: impl Into<String>) -> Self {
    Error::Factory {
      class: class.into(),
      reason: reason.into(),
    }
  }
}

/// A specialized `Result` type for `fibre_autowire` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
