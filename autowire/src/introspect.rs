//! The introspection seam: what the resolver needs to know about a class.
//!
//! Rust has no runtime reflection, so constructor metadata is supplied by an
//! [`Introspector`]. A [`ClassInfo`] describes one class: its constructor
//! parameters (name, declared type, language default), the constructor's
//! documentation text, and how to build an instance from a positional
//! argument list.

use crate::error::{Error, Result};
use crate::instance::Instance;
use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Supplies constructor metadata for class names.
pub trait Introspector: Send + Sync {
  /// Describes `class_name`, or fails with [`Error::UnknownTargetType`].
  fn inspect(&self, class_name: &str) -> Result<Arc<ClassInfo>>;

  /// Describes the class whose instances have the concrete type `type_id`.
  ///
  /// Used to give instances built outside the container (supplied singletons,
  /// caller arguments, overrides, custom factory products) the interface
  /// views their class declares.
  fn inspect_type(&self, _type_id: TypeId) -> Option<Arc<ClassInfo>> {
    None
  }
}

impl<T: Introspector + ?Sized> Introspector for Arc<T> {
  fn inspect(&self, class_name: &str) -> Result<Arc<ClassInfo>> {
    (**self).inspect(class_name)
  }

  fn inspect_type(&self, type_id: TypeId) -> Option<Arc<ClassInfo>> {
    (**self).inspect_type(type_id)
  }
}

/// The statically declared type of a constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeHint {
  /// No type was declared.
  Untyped,
  /// A scalar/builtin type (`string`, `int`, ...). Never autowired.
  Builtin(String),
  /// A class or interface name. Autowired through the container.
  Class(String),
}

/// One constructor parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
  name: String,
  hint: TypeHint,
  default: Option<Instance>,
}

impl Parameter {
  pub fn untyped(name: &str) -> Self {
    Self {
      name: name.to_owned(),
      hint: TypeHint::Untyped,
      default: None,
    }
  }

  pub fn class(name: &str, class_name: &str) -> Self {
    Self {
      name: name.to_owned(),
      hint: TypeHint::Class(class_name.to_owned()),
      default: None,
    }
  }

  pub fn builtin(name: &str, type_name: &str) -> Self {
    Self {
      name: name.to_owned(),
      hint: TypeHint::Builtin(type_name.to_owned()),
      default: None,
    }
  }

  /// Declares a language-level default value.
  pub fn with_default<V: Any + Send + Sync>(self, value: V) -> Self {
    self.with_default_instance(Instance::new(value))
  }

  pub fn with_default_instance(mut self, value: Instance) -> Self {
    self.default = Some(value);
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn hint(&self) -> &TypeHint {
    &self.hint
  }

  /// The declared class or interface name, if the parameter has one.
  pub fn class_type(&self) -> Option<&str> {
    match &self.hint {
      TypeHint::Class(class_name) => Some(class_name),
      _ => None,
    }
  }

  pub fn default_value(&self) -> Option<&Instance> {
    self.default.as_ref()
  }
}

/// A declared constructor: ordered parameters plus optional documentation.
#[derive(Debug, Clone, Default)]
pub struct Constructor {
  parameters: Vec<Parameter>,
  doc: Option<String>,
}

impl Constructor {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn param(mut self, parameter: Parameter) -> Self {
    self.parameters.push(parameter);
    self
  }

  /// Sets the free-text documentation attached to the constructor.
  pub fn doc(mut self, text: &str) -> Self {
    self.doc = Some(text.to_owned());
    self
  }

  pub fn parameters(&self) -> &[Parameter] {
    &self.parameters
  }

  pub fn doc_comment(&self) -> Option<&str> {
    self.doc.as_deref()
  }
}

type BuildFn = Arc<dyn Fn(ConstructorArgs) -> Result<Instance> + Send + Sync>;
type ViewFn = Box<dyn Fn(&Instance) -> Option<(TypeId, Arc<dyn Any + Send + Sync>)> + Send + Sync>;

/// Everything the resolver knows about one class.
pub struct ClassInfo {
  name: String,
  constructor: Option<Constructor>,
  concrete: Option<TypeId>,
  views: Vec<ViewFn>,
  build: Option<BuildFn>,
}

impl ClassInfo {
  /// Starts describing a concrete class whose instances are `C`.
  pub fn class<C: Any + Send + Sync>(name: &str) -> ClassBuilder<C> {
    ClassBuilder {
      name: name.to_owned(),
      constructor: None,
      views: Vec::new(),
      _marker: PhantomData,
    }
  }

  /// Describes an interface: resolvable only through a binding.
  pub fn interface(name: &str) -> Self {
    Self {
      name: name.to_owned(),
      constructor: None,
      concrete: None,
      views: Vec::new(),
      build: None,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// The declared constructor, or `None` if the class has none.
  pub fn constructor(&self) -> Option<&Constructor> {
    self.constructor.as_ref()
  }

  pub fn is_interface(&self) -> bool {
    self.build.is_none()
  }

  /// The `TypeId` of this class's instances; `None` for interfaces.
  pub fn concrete_type(&self) -> Option<TypeId> {
    self.concrete
  }

  /// Gives `instance` every interface view this class declares.
  ///
  /// Views the instance already carries are kept. Instances of another
  /// concrete type are left untouched.
  pub fn attach_views(&self, instance: &mut Instance) {
    for view in &self.views {
      if let Some((key, value)) = view(instance) {
        if !instance.has_view_key(key) {
          instance.push_view(key, value);
        }
      }
    }
  }

  /// Builds an instance from positional constructor arguments.
  pub fn instantiate(&self, values: Vec<Instance>) -> Result<Instance> {
    let build = self
      .build
      .as_ref()
      .ok_or_else(|| Error::NotInstantiable(self.name.clone()))?;
    let mut instance = build(ConstructorArgs {
      class: self.name.clone(),
      values,
    })?;
    self.attach_views(&mut instance);
    Ok(instance)
  }
}

impl fmt::Debug for ClassInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ClassInfo")
      .field("name", &self.name)
      .field("constructor", &self.constructor)
      .field("interface", &self.is_interface())
      .finish()
  }
}

/// Typed builder for [`ClassInfo`].
pub struct ClassBuilder<C> {
  name: String,
  constructor: Option<Constructor>,
  views: Vec<ViewFn>,
  _marker: PhantomData<fn() -> C>,
}

impl<C: Any + Send + Sync> ClassBuilder<C> {
  /// Declares the constructor. Without this the class has no constructor and
  /// is built with an empty argument list.
  pub fn constructor(mut self, constructor: Constructor) -> Self {
    self.constructor = Some(constructor);
    self
  }

  /// Registers `I` as an interface of `C`; instances carry an `Arc<I>` view.
  pub fn implements<I: ?Sized + Any + Send + Sync>(
    mut self,
    upcast: impl Fn(Arc<C>) -> Arc<I> + Send + Sync + 'static,
  ) -> Self {
    self.views.push(Box::new(
      move |instance: &Instance| -> Option<(TypeId, Arc<dyn Any + Send + Sync>)> {
        let value = instance.downcast::<C>()?;
        let view: Arc<dyn Any + Send + Sync> = Arc::new(upcast(value));
        Some((TypeId::of::<Arc<I>>(), view))
      },
    ));
    self
  }

  /// Finishes the description with the function that constructs `C`.
  pub fn build(
    self,
    construct: impl Fn(ConstructorArgs) -> Result<C> + Send + Sync + 'static,
  ) -> ClassInfo {
    let build: BuildFn = Arc::new(move |args: ConstructorArgs| -> Result<Instance> {
      Ok(Instance::new(construct(args)?))
    });
    ClassInfo {
      name: self.name,
      constructor: self.constructor,
      concrete: Some(TypeId::of::<C>()),
      views: self.views,
      build: Some(build),
    }
  }
}

/// Positional arguments handed to a class's build function.
#[derive(Debug)]
pub struct ConstructorArgs {
  class: String,
  values: Vec<Instance>,
}

impl ConstructorArgs {
  pub fn class_name(&self) -> &str {
    &self.class
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub fn instance(&self, index: usize) -> Result<&Instance> {
    self.values.get(index).ok_or_else(|| Error::MissingArgument {
      class: self.class.clone(),
      index,
    })
  }

  /// The argument at `index` as a shared `T`.
  pub fn get<T: Any + Send + Sync>(&self, index: usize) -> Result<Arc<T>> {
    self
      .instance(index)?
      .downcast::<T>()
      .ok_or_else(|| self.mismatch(index, type_name::<T>()))
  }

  /// The argument at `index` cloned out as an owned `T`.
  pub fn cloned<T: Any + Send + Sync + Clone>(&self, index: usize) -> Result<T> {
    self
      .instance(index)?
      .downcast_ref::<T>()
      .cloned()
      .ok_or_else(|| self.mismatch(index, type_name::<T>()))
  }

  /// The argument at `index` as an interface view `Arc<I>`.
  pub fn view<I: ?Sized + Any + Send + Sync>(&self, index: usize) -> Result<Arc<I>> {
    self
      .instance(index)?
      .view::<I>()
      .ok_or_else(|| self.mismatch(index, type_name::<I>()))
  }

  fn mismatch(&self, index: usize, expected: &'static str) -> Error {
    Error::ArgumentType {
      class: self.class.clone(),
      index,
      expected,
    }
  }
}
