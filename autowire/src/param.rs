//! Lookup results for entry-level parameter overrides.

use crate::instance::Instance;

/// The result of asking an [`Entry`](crate::Entry) for a parameter override.
///
/// `Absent` means nothing was configured for the parameter. It is distinct
/// from every configured value, including ones that are "empty" in the
/// domain sense (`None`, `false`, `0`, `""`).
#[derive(Debug, Clone)]
pub enum ParamValue {
  Present(Instance),
  Absent,
}

impl ParamValue {
  pub fn is_absent(&self) -> bool {
    matches!(self, ParamValue::Absent)
  }

  pub fn is_present(&self) -> bool {
    !self.is_absent()
  }

  /// Converts into an `Option`, mapping `Absent` to `None`.
  pub fn into_option(self) -> Option<Instance> {
    match self {
      ParamValue::Present(value) => Some(value),
      ParamValue::Absent => None,
    }
  }
}

impl From<Option<Instance>> for ParamValue {
  fn from(value: Option<Instance>) -> Self {
    match value {
      Some(value) => ParamValue::Present(value),
      None => ParamValue::Absent,
    }
  }
}
