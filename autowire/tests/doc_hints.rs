mod common;

use common::*;
use fibre_autowire::{ClassInfo, Constructor, Container, Error, Parameter};
use std::sync::Arc;

#[test]
fn test_container_resolves_class_from_doccomment() {
  // Arrange
  let container = container();
  container.set("Bam");

  // Act
  let bam = container.get_as::<BamMockDependency>("Bam").unwrap();

  // Assert
  let _foo: &FooMockDependency = &bam.foo;
  let _bar_foo: &FooMockDependency = &bam.bar.foo;
}

#[test]
fn test_doccomment_types_go_through_the_container() {
  let container = container();
  container.singleton("Foo");

  let bam = container.get_as::<BamMockDependency>("Bam").unwrap();

  // Both the hinted Foo and Bar's declared Foo are the one singleton.
  assert!(Arc::ptr_eq(&bam.foo, &bam.bar.foo));
}

#[test]
fn test_entry_override_beats_doccomment() {
  let container = container();
  let double = Arc::new(FooMockDependency);
  container
    .set("Bam")
    .param_instance("foo", fibre_autowire::Instance::from_arc(Arc::clone(&double)));

  let bam = container.get_as::<BamMockDependency>("Bam").unwrap();

  assert!(Arc::ptr_eq(&bam.foo, &double));
}

#[test]
fn test_doccomment_is_ignored_for_declared_builtin_types() {
  let catalog = catalog();
  catalog.add(
    ClassInfo::class::<String>("Named")
      .constructor(
        Constructor::new()
          .param(Parameter::builtin("name", "string"))
          .doc("@param Foo $name"),
      )
      .build(|args| args.cloned::<String>(0)),
  );
  let container = Container::new(catalog);

  let err = container.get("Named").unwrap_err();

  assert!(matches!(
    err,
    Error::UnresolvableArgument { ref class, ref parameter }
      if class == "Named" && parameter == "name"
  ));
}

#[test]
fn test_language_default_beats_doccomment() {
  let catalog = catalog();
  catalog.add(
    ClassInfo::class::<u32>("Port")
      .constructor(
        Constructor::new()
          .param(Parameter::untyped("port").with_default(8080u32))
          .doc("@param Foo $port"),
      )
      .build(|args| args.cloned::<u32>(0)),
  );
  let container = Container::new(catalog);

  let port = container.get_as::<u32>("Port").unwrap();

  assert_eq!(*port, 8080);
}

#[test]
fn test_doccomment_without_matching_tag_is_unresolvable() {
  let catalog = catalog();
  catalog.add(
    ClassInfo::class::<()>("Vague")
      .constructor(
        Constructor::new()
          .param(Parameter::untyped("thing"))
          .doc("@param Foo $other"),
      )
      .build(|_| Ok(())),
  );
  let container = Container::new(catalog);

  let err = container.get("Vague").unwrap_err();

  assert!(matches!(err, Error::UnresolvableArgument { ref parameter, .. } if parameter == "thing"));
}
