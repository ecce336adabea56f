//! The type-erased object handle that flows through the container.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// A shared, type-erased object produced or stored by the container.
///
/// Cloning an `Instance` clones the handle, not the object: two clones are
/// identity-equal under [`Instance::ptr_eq`]. Besides the concrete value an
/// `Instance` can carry *views*, trait-object handles (`Arc<dyn Trait>`) onto
/// the same value, which is how an interface-typed constructor parameter is
/// consumed as a trait object.
#[derive(Clone)]
pub struct Instance {
  value: Arc<dyn Any + Send + Sync>,
  type_id: TypeId,
  type_name: &'static str,
  views: Vec<(TypeId, Arc<dyn Any + Send + Sync>)>,
}

impl Instance {
  /// Wraps an owned value.
  pub fn new<T: Any + Send + Sync>(value: T) -> Self {
    Self::from_arc(Arc::new(value))
  }

  /// Wraps an already shared value without copying it.
  pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
    Self {
      value,
      type_id: TypeId::of::<T>(),
      type_name: type_name::<T>(),
      views: Vec::new(),
    }
  }

  /// Attaches a trait-object view of the wrapped value.
  ///
  /// ```
  /// use fibre_autowire::Instance;
  /// use std::sync::Arc;
  ///
  /// trait Greeter: Send + Sync { fn greet(&self) -> &str; }
  /// struct English;
  /// impl Greeter for English { fn greet(&self) -> &str { "Hello" } }
  ///
  /// let english = Arc::new(English);
  /// let instance = Instance::from_arc(english.clone()).with_view::<dyn Greeter>(english);
  /// assert_eq!(instance.view::<dyn Greeter>().unwrap().greet(), "Hello");
  /// ```
  pub fn with_view<I: ?Sized + Any + Send + Sync>(mut self, view: Arc<I>) -> Self {
    self.push_view(TypeId::of::<Arc<I>>(), Arc::new(view));
    self
  }

  pub(crate) fn push_view(&mut self, key: TypeId, view: Arc<dyn Any + Send + Sync>) {
    // A later view for the same trait replaces the earlier one.
    self.views.retain(|(existing, _)| *existing != key);
    self.views.push((key, view));
  }

  pub(crate) fn has_view_key(&self, key: TypeId) -> bool {
    self.views.iter().any(|(existing, _)| *existing == key)
  }

  /// Returns the concrete value if it is a `T`.
  pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
    Arc::clone(&self.value).downcast::<T>().ok()
  }

  /// Borrows the concrete value if it is a `T`.
  pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
    self.value.downcast_ref::<T>()
  }

  /// Returns `true` if the concrete value is a `T`.
  pub fn is<T: Any>(&self) -> bool {
    self.value.is::<T>()
  }

  /// Returns the trait-object view registered for `I`, if any.
  pub fn view<I: ?Sized + Any + Send + Sync>(&self) -> Option<Arc<I>> {
    let key = TypeId::of::<Arc<I>>();
    self
      .views
      .iter()
      .find(|(existing, _)| *existing == key)
      .and_then(|(_, view)| view.downcast_ref::<Arc<I>>())
      .cloned()
  }

  /// Identity comparison: `true` iff both handles point at the same object.
  pub fn ptr_eq(&self, other: &Instance) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(&self.value), Arc::as_ptr(&other.value))
  }

  /// The `TypeId` of the concrete value.
  pub fn concrete_type(&self) -> TypeId {
    self.type_id
  }

  /// The Rust type name of the concrete value.
  pub fn type_name(&self) -> &'static str {
    self.type_name
  }
}

impl fmt::Debug for Instance {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Instance({} @ {:p})", self.type_name, Arc::as_ptr(&self.value))
  }
}
