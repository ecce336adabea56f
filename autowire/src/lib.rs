//! # Fibre Autowire
//!
//! A thread-safe, autowiring Inversion of Control (IoC) container for Rust.
//!
//! Ask the container for a class by name and it builds the whole object
//! graph: every constructor parameter is filled from the caller's arguments,
//! an explicit per-entry override, or by recursively resolving the
//! parameter's declared class type. No factory code per class is needed.
//!
//! ## Core Concepts
//!
//! - **Introspector**: Rust has no runtime reflection, so constructor
//!   metadata comes from an [`Introspector`]. The bundled [`Catalog`] holds
//!   explicit [`ClassInfo`] descriptions.
//! - **Container**: The registry of [`Entry`] records, one per class or
//!   interface name. Unregistered names are autowired on first use.
//! - **Lifetimes**: Entries are transient by default; singletons are built
//!   once and cached.
//! - **Bindings**: An interface name can be bound to a class so that
//!   interface-typed parameters receive the class.
//! - **Global Container**: A static container over a static catalog,
//!   accessible via [`global()`] and the [`autowire!`] macro.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_autowire::{Catalog, ClassInfo, Constructor, Container, Parameter};
//! use std::sync::Arc;
//!
//! struct Foo;
//! struct Bar {
//!   foo: Arc<Foo>,
//! }
//!
//! let catalog = Arc::new(Catalog::new());
//! catalog
//!   .add(ClassInfo::class::<Foo>("Foo").build(|_| Ok(Foo)))
//!   .add(
//!     ClassInfo::class::<Bar>("Bar")
//!       .constructor(Constructor::new().param(Parameter::class("foo", "Foo")))
//!       .build(|args| Ok(Bar { foo: args.get::<Foo>(0)? })),
//!   );
//!
//! let container = Container::new(Arc::clone(&catalog));
//! let bar = container.get_as::<Bar>("Bar").unwrap();
//! let _foo: &Foo = &bar.foo;
//! ```

mod arguments;
mod catalog;
mod container;
#[cfg(feature = "doc-hints")]
mod doc_hint;
mod entry;
mod error;
mod global;
mod guard;
mod instance;
mod introspect;
mod macros;
mod param;
mod resolver;

pub use arguments::Arguments;
pub use catalog::Catalog;
pub use container::Container;
pub use entry::{Entry, Factory, FactoryFn};
pub use error::{Error, Result};
pub use global::{global, global_catalog};
pub use instance::Instance;
pub use introspect::{
  ClassBuilder, ClassInfo, Constructor, ConstructorArgs, Introspector, Parameter, TypeHint,
};
pub use param::ParamValue;
pub use resolver::{Resolve, Resolver};
