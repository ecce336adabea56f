//! An in-process [`Introspector`] backed by explicit class descriptions.

use crate::error::{Error, Result};
use crate::introspect::{ClassInfo, Introspector};
use dashmap::DashMap;
use std::any::TypeId;
use std::sync::Arc;
use tracing::debug;

/// A thread-safe registry of [`ClassInfo`] descriptions.
///
/// Descriptions may be added at any time, including after the catalog has
/// been handed to a [`Container`](crate::Container).
#[derive(Default)]
pub struct Catalog {
  classes: DashMap<String, Arc<ClassInfo>>,
  // Concrete type -> the class most recently described with it.
  by_type: DashMap<TypeId, Arc<ClassInfo>>,
}

impl Catalog {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds (or replaces) a description, keyed by its name.
  pub fn add(&self, info: ClassInfo) -> &Self {
    debug!(class = info.name(), interface = info.is_interface(), "catalog: describing class");
    let info = Arc::new(info);
    if let Some(type_id) = info.concrete_type() {
      self.by_type.insert(type_id, Arc::clone(&info));
    }
    self.classes.insert(info.name().to_owned(), info);
    self
  }

  pub fn contains(&self, class_name: &str) -> bool {
    self.classes.contains_key(class_name)
  }

  pub fn len(&self) -> usize {
    self.classes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.classes.is_empty()
  }
}

impl Introspector for Catalog {
  fn inspect(&self, class_name: &str) -> Result<Arc<ClassInfo>> {
    self
      .classes
      .get(class_name)
      .map(|info| Arc::clone(info.value()))
      .ok_or_else(|| Error::UnknownTargetType(class_name.to_owned()))
  }

  fn inspect_type(&self, type_id: TypeId) -> Option<Arc<ClassInfo>> {
    self.by_type.get(&type_id).map(|info| Arc::clone(info.value()))
  }
}
