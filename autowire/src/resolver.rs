//! The autowiring algorithm.

use crate::arguments::Arguments;
use crate::container::Container;
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::instance::Instance;
use crate::introspect::{ClassInfo, Constructor, Parameter, TypeHint};
use crate::param::ParamValue;
use tracing::{debug, trace};

/// Something able to instantiate a class and its dependencies by name.
///
/// Autowired entries call back into this when they need a fresh object.
pub trait Resolve {
  fn resolve(&self, class_name: &str, arguments: &Arguments) -> Result<Instance>;

  /// Gives an instance produced elsewhere the interface views of its class.
  fn attach_views(&self, instance: Instance) -> Instance {
    instance
  }
}

/// Builds objects by walking their constructor metadata.
///
/// For every constructor parameter, in declaration order, the first of these
/// that yields a value is used:
///
/// 1. a caller argument with the parameter's name, else at its position;
/// 2. the entry's override for the parameter's name;
/// 3. the declared class type, resolved through the container (so bindings
///    and singletons apply); an untyped parameter with a language default
///    takes the default instead;
/// 4. with the `doc-hints` feature and no declared type at all, a
///    `@param Type $name` tag in the constructor's documentation, resolved
///    like a declared type.
///
/// If none applies the whole resolution fails with
/// [`Error::UnresolvableArgument`].
pub struct Resolver<'c> {
  container: &'c Container,
}

impl<'c> Resolver<'c> {
  pub fn new(container: &'c Container) -> Self {
    Self { container }
  }

  pub fn resolve(&self, class_name: &str, arguments: &Arguments) -> Result<Instance> {
    let entry = self.container.entry(class_name);
    let info = self.container.introspector().inspect(entry.class_name())?;

    let Some(constructor) = info.constructor() else {
      trace!(class = info.name(), "resolver: no constructor");
      return info.instantiate(Vec::new());
    };

    let values = constructor
      .parameters()
      .iter()
      .enumerate()
      .map(|(index, parameter)| {
        self.resolve_parameter(&info, constructor, &entry, index, parameter, arguments)
      })
      .collect::<Result<Vec<_>>>()?;

    info.instantiate(values)
  }

  fn resolve_parameter(
    &self,
    info: &ClassInfo,
    constructor: &Constructor,
    entry: &Entry,
    index: usize,
    parameter: &Parameter,
    arguments: &Arguments,
  ) -> Result<Instance> {
    let name = parameter.name();

    if let Some(value) = arguments.lookup(name, index) {
      trace!(class = info.name(), parameter = name, "resolver: caller argument");
      return Ok(self.container.attach_views(value.clone()));
    }

    if let ParamValue::Present(value) = entry.get_param(name) {
      trace!(class = info.name(), parameter = name, "resolver: entry override");
      return Ok(self.container.attach_views(value));
    }

    if let Some(class_type) = parameter.class_type() {
      trace!(class = info.name(), parameter = name, class_type, "resolver: declared type");
      return self.dependency(class_type);
    }

    if let Some(default) = parameter.default_value() {
      trace!(class = info.name(), parameter = name, "resolver: language default");
      return Ok(default.clone());
    }

    let hinted = match parameter.hint() {
      TypeHint::Untyped => Self::doc_hint(constructor, name),
      _ => None,
    };
    if let Some(hinted) = hinted {
      trace!(class = info.name(), parameter = name, hinted = %hinted, "resolver: doc hint");
      return self.dependency(&hinted);
    }

    debug!(class = info.name(), parameter = name, "resolver: unresolvable argument");
    Err(Error::UnresolvableArgument {
      class: info.name().to_owned(),
      parameter: name.to_owned(),
    })
  }

  // Nested dependencies never see the caller's arguments.
  fn dependency(&self, class_name: &str) -> Result<Instance> {
    self.container.get(class_name)
  }

  #[cfg(feature = "doc-hints")]
  fn doc_hint(constructor: &Constructor, parameter: &str) -> Option<String> {
    constructor
      .doc_comment()
      .and_then(|doc| crate::doc_hint::type_for_param(doc, parameter))
  }

  #[cfg(not(feature = "doc-hints"))]
  fn doc_hint(_constructor: &Constructor, _parameter: &str) -> Option<String> {
    None
  }
}
