//! The global container and catalog instances and their access functions.

use crate::catalog::Catalog;
use crate::container::Container;
use once_cell::sync::Lazy;
use std::sync::Arc;

// The process-wide catalog; the global container introspects through it.
static GLOBAL_CATALOG: Lazy<Arc<Catalog>> = Lazy::new(|| Arc::new(Catalog::new()));

// Created on first access in a thread-safe manner.
static GLOBAL_CONTAINER: Lazy<Container> =
  Lazy::new(|| Container::new(Arc::clone(&GLOBAL_CATALOG)));

/// Provides a reference to the global container instance.
///
/// # Examples
///
/// ```
/// use fibre_autowire::{global, global_catalog, ClassInfo};
///
/// struct Clock;
///
/// global_catalog().add(ClassInfo::class::<Clock>("Clock").build(|_| Ok(Clock)));
/// global().singleton("Clock");
///
/// let a = global().get("Clock").unwrap();
/// let b = global().get("Clock").unwrap();
/// assert!(a.ptr_eq(&b));
/// ```
pub fn global() -> &'static Container {
  &GLOBAL_CONTAINER
}

/// Provides a reference to the catalog backing [`global()`].
pub fn global_catalog() -> &'static Catalog {
  &GLOBAL_CATALOG
}
