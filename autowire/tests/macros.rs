//! Tests for the `autowire!` macro against the global container.
//!
//! The global container and catalog are shared by every test in this binary,
//! so each test registers its own, uniquely named classes.

use fibre_autowire::{autowire, global, global_catalog, ClassInfo, Constructor, Parameter};
use std::sync::Arc;

// --- Test Fixtures ---

struct MacroTestService {
  value: i32,
}

trait MacroTestTrait: Send + Sync {
  fn value(&self) -> i32;
}

impl MacroTestTrait for MacroTestService {
  fn value(&self) -> i32 {
    self.value
  }
}

struct MacroTestConsumer {
  service: Arc<dyn MacroTestTrait>,
}

// --- Global Macro Tests ---

#[test]
fn test_autowire_concrete_type() {
  // Arrange
  global_catalog().add(
    ClassInfo::class::<MacroTestService>("MacroConcrete")
      .build(|_| Ok(MacroTestService { value: 42 })),
  );

  // Act
  let service = autowire!(MacroTestService, "MacroConcrete");

  // Assert
  assert_eq!(service.value, 42);
}

#[test]
fn test_autowire_instance() {
  global_catalog().add(
    ClassInfo::class::<MacroTestService>("MacroInstance")
      .build(|_| Ok(MacroTestService { value: 7 })),
  );
  global().singleton("MacroInstance");

  let a = autowire!("MacroInstance");
  let b = autowire!("MacroInstance");

  assert!(a.ptr_eq(&b));
  assert!(a.is::<MacroTestService>());
}

#[test]
fn test_autowire_trait_through_binding() {
  // Arrange
  global_catalog()
    .add(ClassInfo::interface("MacroTrait"))
    .add(
      ClassInfo::class::<MacroTestService>("MacroTraitImpl")
        .implements::<dyn MacroTestTrait>(
          |c: Arc<MacroTestService>| -> Arc<dyn MacroTestTrait> { c },
        )
        .build(|_| Ok(MacroTestService { value: 44 })),
    )
    .add(
      ClassInfo::class::<MacroTestConsumer>("MacroConsumer")
        .constructor(Constructor::new().param(Parameter::class("service", "MacroTrait")))
        .build(|args| Ok(MacroTestConsumer { service: args.view(0)? })),
    );
  global().bind("MacroTrait", "MacroTraitImpl");

  // Act
  let direct = autowire!(trait MacroTestTrait, "MacroTrait");
  let consumer = autowire!(MacroTestConsumer, "MacroConsumer");

  // Assert
  assert_eq!(direct.value(), 44);
  assert_eq!(consumer.service.value(), 44);
}

#[test]
#[should_panic(expected = "Failed to autowire required service 'MacroMissing'")]
fn test_autowire_panics_on_unknown_class() {
  autowire!("MacroMissing");
}

#[test]
#[should_panic(expected = "Failed to autowire required trait service 'MacroUnboundTrait'")]
fn test_autowire_panics_on_unbound_trait() {
  global_catalog().add(ClassInfo::interface("MacroUnboundTrait"));
  autowire!(trait MacroTestTrait, "MacroUnboundTrait");
}

#[test]
#[should_panic(expected = "is not a")]
fn test_autowire_panics_on_type_mismatch() {
  global_catalog().add(
    ClassInfo::class::<MacroTestService>("MacroMismatch")
      .build(|_| Ok(MacroTestService { value: 1 })),
  );
  autowire!(String, "MacroMismatch");
}
