//! Caller-supplied arguments for `get`/`resolve` calls.

use crate::instance::Instance;
use std::any::Any;
use std::collections::HashMap;

/// Arguments passed alongside a resolution request.
///
/// Both conventions may be mixed: named values are matched against
/// constructor parameter names, positional values against parameter
/// positions. A named match wins over a positional one for the same slot.
///
/// Autowired entries consult these only for the class being requested, never
/// for its nested dependencies. Custom factories receive them as-is.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
  positional: Vec<Instance>,
  named: HashMap<String, Instance>,
}

impl Arguments {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a named value.
  pub fn with<V: Any + Send + Sync>(self, name: &str, value: V) -> Self {
    self.with_instance(name, Instance::new(value))
  }

  /// Adds a named, already wrapped value (e.g. a shared test double).
  pub fn with_instance(mut self, name: &str, value: Instance) -> Self {
    self.named.insert(name.to_owned(), value);
    self
  }

  /// Appends a positional value.
  pub fn push<V: Any + Send + Sync>(self, value: V) -> Self {
    self.push_instance(Instance::new(value))
  }

  /// Appends a positional, already wrapped value.
  pub fn push_instance(mut self, value: Instance) -> Self {
    self.positional.push(value);
    self
  }

  pub fn named(&self, name: &str) -> Option<&Instance> {
    self.named.get(name)
  }

  pub fn positional(&self, index: usize) -> Option<&Instance> {
    self.positional.get(index)
  }

  /// The value supplied for the parameter `name` at `index`, named first.
  pub(crate) fn lookup(&self, name: &str, index: usize) -> Option<&Instance> {
    self.named(name).or_else(|| self.positional(index))
  }

  pub fn len(&self) -> usize {
    self.positional.len() + self.named.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
