//! Registry records: how one name is produced.

use crate::arguments::Arguments;
use crate::error::Result;
use crate::guard::MaterializationGuard;
use crate::instance::Instance;
use crate::param::ParamValue;
use crate::resolver::Resolve;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// A caller-supplied factory. It receives the caller's arguments only.
pub type FactoryFn = Arc<dyn Fn(&Arguments) -> Result<Instance> + Send + Sync>;

/// How an [`Entry`] produces a fresh object.
#[derive(Clone)]
pub enum Factory {
  /// The container's own autowiring routine, invoked with the entry's class name.
  Autowire,
  /// A caller-supplied function.
  Custom(FactoryFn),
}

impl Factory {
  pub fn custom(factory: impl Fn(&Arguments) -> Result<Instance> + Send + Sync + 'static) -> Self {
    Factory::Custom(Arc::new(factory))
  }

  pub fn is_autowire(&self) -> bool {
    matches!(self, Factory::Autowire)
  }
}

impl fmt::Debug for Factory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Factory::Autowire => write!(f, "Factory::Autowire"),
      Factory::Custom(_) => write!(f, "Factory::Custom(..)"),
    }
  }
}

/// One registry record: factory, lifetime, cached singleton and parameter
/// overrides for a class.
///
/// Entries are shared through `Arc`: an interface bound to a class holds the
/// very same `Entry` as the class.
pub struct Entry {
  class_name: String,
  factory: Factory,
  is_singleton: bool,
  instance: OnceCell<Instance>,
  params: RwLock<HashMap<String, Instance>>,
}

impl Entry {
  pub(crate) fn new(class_name: &str, factory: Factory, is_singleton: bool) -> Self {
    Self {
      class_name: class_name.to_owned(),
      factory,
      is_singleton,
      instance: OnceCell::new(),
      params: RwLock::new(HashMap::new()),
    }
  }

  /// A singleton entry whose instance is already known.
  pub(crate) fn with_instance(class_name: &str, factory: Factory, instance: Instance) -> Self {
    Self {
      instance: OnceCell::with_value(instance),
      ..Self::new(class_name, factory, true)
    }
  }

  pub fn class_name(&self) -> &str {
    &self.class_name
  }

  pub fn is_singleton(&self) -> bool {
    self.is_singleton
  }

  pub fn factory(&self) -> &Factory {
    &self.factory
  }

  /// The cached singleton instance, once materialized.
  pub fn instance(&self) -> Option<Instance> {
    self.instance.get().cloned()
  }

  /// Produces an object.
  ///
  /// A cached instance is returned as-is and `arguments` are ignored.
  /// Otherwise the factory runs; for a singleton its product is cached, and
  /// concurrent first calls run the factory only once.
  pub fn make(&self, resolver: &dyn Resolve, arguments: &Arguments) -> Result<Instance> {
    if let Some(instance) = self.instance.get() {
      trace!(class = %self.class_name, "entry: cached singleton");
      return Ok(instance.clone());
    }
    if !self.is_singleton {
      return self.produce(resolver, arguments);
    }

    let _guard = MaterializationGuard::new(self, &self.class_name);
    self
      .instance
      .get_or_try_init(|| self.produce(resolver, arguments))
      .cloned()
  }

  fn produce(&self, resolver: &dyn Resolve, arguments: &Arguments) -> Result<Instance> {
    match &self.factory {
      Factory::Autowire => resolver.resolve(&self.class_name, arguments),
      Factory::Custom(factory) => factory(arguments).map(|i| resolver.attach_views(i)),
    }
  }

  /// Sets the value used for the constructor parameter `name`.
  pub fn param<V: Any + Send + Sync>(&self, name: &str, value: V) -> &Self {
    self.param_instance(name, Instance::new(value))
  }

  /// Like [`param`](Self::param), for an already wrapped (possibly shared) value.
  pub fn param_instance(&self, name: &str, value: Instance) -> &Self {
    self.params.write().insert(name.to_owned(), value);
    self
  }

  /// Applies [`param_instance`](Self::param_instance) for every pair.
  pub fn params<K, I>(&self, values: I) -> &Self
  where
    K: Into<String>,
    I: IntoIterator<Item = (K, Instance)>,
  {
    let mut params = self.params.write();
    for (name, value) in values {
      params.insert(name.into(), value);
    }
    drop(params);
    self
  }

  /// The override for `name`, or [`ParamValue::Absent`].
  pub fn get_param(&self, name: &str) -> ParamValue {
    self.params.read().get(name).cloned().into()
  }
}

impl fmt::Debug for Entry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Entry")
      .field("class_name", &self.class_name)
      .field("factory", &self.factory)
      .field("is_singleton", &self.is_singleton)
      .field("instance", &self.instance.get())
      .field("params", &self.params.read().keys().collect::<Vec<_>>())
      .finish()
  }
}
