//! Public macros for ergonomic resolution from the global container.

/// Resolves a name from the global container.
///
/// Panics if resolution fails, with the underlying error in the message. For
/// a non-panicking version, use `global().get(...)` and friends directly.
///
/// # Forms
///
/// - `autowire!("Name")` yields the [`Instance`](crate::Instance).
/// - `autowire!(Type, "Name")` yields an `Arc<Type>`.
/// - `autowire!(trait Trait, "Name")` yields an `Arc<dyn Trait>` view.
///
/// # Examples
///
/// ```
/// use fibre_autowire::{autowire, global, global_catalog, ClassInfo};
///
/// struct Greeting(String);
///
/// global_catalog().add(
///   ClassInfo::class::<Greeting>("Greeting").build(|_| Ok(Greeting("hello".into()))),
/// );
///
/// let greeting = autowire!(Greeting, "Greeting");
/// assert_eq!(greeting.0, "hello");
/// ```
#[macro_export]
macro_rules! autowire {
  // autowire!(trait MyTrait, "Name")
  (trait $trait_ident:ident, $name:expr) => {
    $crate::global()
      .get_view::<dyn $trait_ident>($name)
      .unwrap_or_else(|err| {
        panic!(
          "Failed to autowire required trait service '{}': {}",
          $name, err
        )
      })
  };

  // autowire!(MyType, "Name")
  ($type:ty, $name:expr) => {
    $crate::global()
      .get_as::<$type>($name)
      .unwrap_or_else(|err| {
        panic!("Failed to autowire required service '{}': {}", $name, err)
      })
  };

  // autowire!("Name")
  ($name:expr) => {
    $crate::global()
      .get($name)
      .unwrap_or_else(|err| {
        panic!("Failed to autowire required service '{}': {}", $name, err)
      })
  };
}
