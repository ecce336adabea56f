#![allow(dead_code)]

use fibre_autowire::{Catalog, ClassInfo, Constructor, Container, Instance, Parameter};
use std::sync::Arc;

// --- Test Fixtures ---

pub struct FooMockDependency;

pub struct BarMockDependency {
  pub foo: Arc<FooMockDependency>,
}

// Parameters are undeclared; their types only appear in the documentation.
pub struct BamMockDependency {
  pub foo: Arc<FooMockDependency>,
  pub bar: Arc<BarMockDependency>,
}

pub struct QuuxMockDependency {
  pub message: String,
}

pub trait FooMockInterface: Send + Sync {
  fn name(&self) -> &'static str;
}

pub struct FooMockImplementation;
impl FooMockInterface for FooMockImplementation {
  fn name(&self) -> &'static str {
    "implementation"
  }
}

pub struct FooMockDependent {
  pub foo: Arc<dyn FooMockInterface>,
}

pub trait FooMockSingletonInterface: Send + Sync {
  fn bar(&self) -> Arc<BarMockDependency>;
}

pub struct FooMockSingleton {
  pub bar: Arc<BarMockDependency>,
}
impl FooMockSingletonInterface for FooMockSingleton {
  fn bar(&self) -> Arc<BarMockDependency> {
    Arc::clone(&self.bar)
  }
}

pub struct UntypedMock {
  pub value: Instance,
}

pub struct DefaultedMock {
  pub retries: u32,
}

pub struct WrapperMock {
  pub inner: Arc<UntypedMock>,
}

pub const BAM_DOC: &str = r"
  /**
   * @param Foo $foo
   * @param \Bar $bar
   */";

/// A catalog describing every fixture above.
pub fn catalog() -> Arc<Catalog> {
  let catalog = Arc::new(Catalog::new());
  catalog
    .add(ClassInfo::class::<FooMockDependency>("Foo").build(|_| Ok(FooMockDependency)))
    .add(
      ClassInfo::class::<BarMockDependency>("Bar")
        .constructor(Constructor::new().param(Parameter::class("foo", "Foo")))
        .build(|args| Ok(BarMockDependency { foo: args.get(0)? })),
    )
    .add(
      ClassInfo::class::<BamMockDependency>("Bam")
        .constructor(
          Constructor::new()
            .param(Parameter::untyped("foo"))
            .param(Parameter::untyped("bar"))
            .doc(BAM_DOC),
        )
        .build(|args| {
          Ok(BamMockDependency {
            foo: args.get(0)?,
            bar: args.get(1)?,
          })
        }),
    )
    .add(
      ClassInfo::class::<QuuxMockDependency>("Quux")
        .constructor(Constructor::new().param(Parameter::builtin("message", "string")))
        .build(|args| {
          Ok(QuuxMockDependency {
            message: args.cloned(0)?,
          })
        }),
    )
    .add(ClassInfo::interface("FooInterface"))
    .add(
      ClassInfo::class::<FooMockImplementation>("FooImplementation")
        .implements::<dyn FooMockInterface>(
          |c: Arc<FooMockImplementation>| -> Arc<dyn FooMockInterface> { c },
        )
        .build(|_| Ok(FooMockImplementation)),
    )
    .add(
      ClassInfo::class::<FooMockDependent>("FooDependent")
        .constructor(Constructor::new().param(Parameter::class("foo", "FooInterface")))
        .build(|args| Ok(FooMockDependent { foo: args.view(0)? })),
    )
    .add(ClassInfo::interface("FooSingletonInterface"))
    .add(
      ClassInfo::class::<FooMockSingleton>("FooSingleton")
        .constructor(Constructor::new().param(Parameter::class("bar", "Bar")))
        .implements::<dyn FooMockSingletonInterface>(
          |c: Arc<FooMockSingleton>| -> Arc<dyn FooMockSingletonInterface> { c },
        )
        .build(|args| Ok(FooMockSingleton { bar: args.get(0)? })),
    )
    .add(
      ClassInfo::class::<UntypedMock>("Untyped")
        .constructor(Constructor::new().param(Parameter::untyped("value")))
        .build(|args| {
          Ok(UntypedMock {
            value: args.instance(0)?.clone(),
          })
        }),
    )
    .add(
      ClassInfo::class::<DefaultedMock>("Defaulted")
        .constructor(Constructor::new().param(Parameter::untyped("retries").with_default(3u32)))
        .build(|args| {
          Ok(DefaultedMock {
            retries: args.cloned(0)?,
          })
        }),
    )
    .add(
      ClassInfo::class::<WrapperMock>("Wrapper")
        .constructor(Constructor::new().param(Parameter::class("inner", "Untyped")))
        .build(|args| Ok(WrapperMock { inner: args.get(0)? })),
    );
  catalog
}

/// A fresh container over a fresh fixture catalog.
pub fn container() -> Container {
  Container::new(catalog())
}
