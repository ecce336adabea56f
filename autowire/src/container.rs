//! The main `Container` struct and its associated methods.

use crate::arguments::Arguments;
use crate::entry::{Entry, Factory};
use crate::error::{Error, Result};
use crate::instance::Instance;
use crate::introspect::Introspector;
use crate::resolver::{Resolve, Resolver};
use dashmap::DashMap;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// The autowiring Inversion of Control (IoC) container.
///
/// Holds one [`Entry`] per registered class or interface name. Names that
/// were never registered are autowired on first use. The container is
/// thread-safe; registration and resolution may happen from any thread at
/// any time.
pub struct Container {
  entries: DashMap<String, Arc<Entry>>,
  introspector: Arc<dyn Introspector>,
}

impl Container {
  /// Creates an empty container that learns about classes from `introspector`.
  pub fn new(introspector: impl Introspector + 'static) -> Self {
    Self {
      entries: DashMap::new(),
      introspector: Arc::new(introspector),
    }
  }

  pub fn introspector(&self) -> &dyn Introspector {
    &*self.introspector
  }

  // --- PRIVATE HELPERS ---

  fn register(&self, name: &str, entry: Entry) -> Arc<Entry> {
    let entry = Arc::new(entry);
    self.entries.insert(name.to_owned(), Arc::clone(&entry));
    entry
  }

  // --- PUBLIC API ---

  // --- Lookup ---

  /// Returns `true` iff an entry is registered under `name`.
  pub fn has(&self, name: &str) -> bool {
    self.entries.contains_key(name)
  }

  /// Returns the entry for `name`, registering an autowired, non-singleton
  /// one if there is none yet.
  pub fn entry(&self, name: &str) -> Arc<Entry> {
    if let Some(entry) = self.entries.get(name) {
      return Arc::clone(entry.value());
    }
    let entry = self.entries.entry(name.to_owned()).or_insert_with(|| {
      debug!(name, "container: implicit autowired entry");
      Arc::new(Entry::new(name, Factory::Autowire, false))
    });
    Arc::clone(entry.value())
  }

  // --- Registration ---

  /// Registers (or replaces) an autowired, non-singleton entry.
  pub fn set(&self, name: &str) -> Arc<Entry> {
    self.set_with(name, None, false)
  }

  /// Registers (or replaces) a non-singleton entry built by `factory`.
  pub fn set_factory(
    &self,
    name: &str,
    factory: impl Fn(&Arguments) -> Result<Instance> + Send + Sync + 'static,
  ) -> Arc<Entry> {
    self.set_with(name, Some(Factory::custom(factory)), false)
  }

  /// Registers (or replaces) an entry. Without a factory the entry is autowired.
  pub fn set_with(&self, name: &str, factory: Option<Factory>, is_singleton: bool) -> Arc<Entry> {
    let factory = factory.unwrap_or(Factory::Autowire);
    debug!(name, ?factory, is_singleton, "container: set");
    self.register(name, Entry::new(name, factory, is_singleton))
  }

  // --- Singleton Registration ---

  /// Registers `name` as an autowired singleton, materialized on first `get`.
  pub fn singleton(&self, name: &str) -> Arc<Entry> {
    debug!(name, "container: deferred singleton");
    self.register(name, Entry::new(name, Factory::Autowire, true))
  }

  /// Registers `name` as a singleton whose instance is `instance`.
  pub fn singleton_instance(&self, name: &str, instance: Instance) -> Arc<Entry> {
    debug!(name, ty = instance.type_name(), "container: singleton instance");
    let instance = self.attach_views(instance);
    self.register(name, Entry::with_instance(name, Factory::Autowire, instance))
  }

  /// Registers `name` as a singleton.
  ///
  /// A supplied `instance` is cached immediately. Otherwise, with
  /// `resolve_now`, the instance is produced right away (by `factory`, or
  /// autowired); any error is returned and the entry stays registered, so a
  /// later `get` tries again. Without `resolve_now` production is deferred to
  /// the first `get`.
  pub fn singleton_with(
    &self,
    name: &str,
    instance: Option<Instance>,
    factory: Option<Factory>,
    resolve_now: bool,
  ) -> Result<Arc<Entry>> {
    let factory = factory.unwrap_or(Factory::Autowire);
    if let Some(instance) = instance {
      debug!(name, ty = instance.type_name(), "container: singleton instance");
      let instance = self.attach_views(instance);
      return Ok(self.register(name, Entry::with_instance(name, factory, instance)));
    }

    debug!(name, ?factory, resolve_now, "container: singleton");
    let entry = self.register(name, Entry::new(name, factory, true));
    if resolve_now {
      entry.make(self, &Arguments::new())?;
    }
    Ok(entry)
  }

  // --- Binding ---

  /// Makes `interface` resolve through the same entry as `class`.
  ///
  /// The class's entry is created if absent. The alias keeps pointing at
  /// that entry even if `class` is registered again later.
  pub fn bind(&self, interface: &str, class: &str) {
    let entry = self.entry(class);
    debug!(interface, class, "container: bind");
    self.entries.insert(interface.to_owned(), entry);
  }

  // --- Resolution ---

  /// Produces an object for `name` with no caller arguments.
  pub fn get(&self, name: &str) -> Result<Instance> {
    self.get_with(name, &Arguments::new())
  }

  /// Produces an object for `name`. Singletons ignore `arguments` once cached.
  pub fn get_with(&self, name: &str, arguments: &Arguments) -> Result<Instance> {
    // The registry guard is released before the entry runs its factory.
    let entry = self.entry(name);
    entry.make(self, arguments)
  }

  /// [`get`](Self::get), downcast to the concrete type `T`.
  pub fn get_as<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>> {
    self.get(name)?.downcast::<T>().ok_or_else(|| Error::InstanceType {
      name: name.to_owned(),
      expected: type_name::<T>(),
    })
  }

  /// [`get`](Self::get), viewed as the interface `I`.
  pub fn get_view<I: ?Sized + Any + Send + Sync>(&self, name: &str) -> Result<Arc<I>> {
    self.get(name)?.view::<I>().ok_or_else(|| Error::InstanceType {
      name: name.to_owned(),
      expected: type_name::<I>(),
    })
  }

  /// Autowires a fresh object for `name`, bypassing the entry's factory and
  /// singleton cache for `name` itself.
  pub fn resolve(&self, name: &str, arguments: &Arguments) -> Result<Instance> {
    Resolver::new(self).resolve(name, arguments)
  }
}

impl Resolve for Container {
  fn resolve(&self, class_name: &str, arguments: &Arguments) -> Result<Instance> {
    Resolver::new(self).resolve(class_name, arguments)
  }

  fn attach_views(&self, mut instance: Instance) -> Instance {
    if let Some(info) = self.introspector.inspect_type(instance.concrete_type()) {
      info.attach_views(&mut instance);
    }
    instance
  }
}

impl fmt::Debug for Container {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let names: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
    f.debug_struct("Container").field("entries", &names).finish()
  }
}
