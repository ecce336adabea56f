//! Re-entrance guard for singleton materialization.

use std::cell::RefCell;
use std::collections::HashSet;

thread_local! {
  // Singleton entries currently being materialized on this thread, by address.
  static MATERIALIZING: RefCell<HashSet<usize>> = RefCell::new(HashSet::new());
}

/// An RAII guard around the materialization of one singleton entry.
///
/// Re-entering the same entry's materialization on the same thread would
/// block forever on its `OnceCell`, so it panics instead. When the guard is
/// dropped the entry is removed from the thread's set.
pub(crate) struct MaterializationGuard {
  key: usize,
}

impl MaterializationGuard {
  pub(crate) fn new<T>(target: &T, class_name: &str) -> Self {
    let key = target as *const T as usize;
    MATERIALIZING.with(|active| {
      if !active.borrow_mut().insert(key) {
        panic!(
          "Circular dependency detected while materializing singleton: {}",
          class_name
        );
      }
    });
    Self { key }
  }
}

impl Drop for MaterializationGuard {
  fn drop(&mut self) {
    MATERIALIZING.with(|active| {
      active.borrow_mut().remove(&self.key);
    });
  }
}
