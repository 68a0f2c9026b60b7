#![allow(clippy::unwrap_used)]

//! Wrapper identity and naming.

use std::rc::Rc;

use doclet::host::Host;
use doclet::{Context, Doc, Documented, ExecutableMember, ProgramElement};

use crate::helpers::fixtures;

#[test]
fn test_same_element_same_wrapper() {
    let f = fixtures::nested();
    let cx = Context::new(f.program);

    let first = cx.class(f.inner).unwrap();
    let second = cx.class(f.inner).unwrap();
    assert_eq!(first, second);

    let via_obtain = cx.obtain(f.inner).unwrap();
    assert_eq!(via_obtain.as_class(), Some(&first));

    let package = cx.package(f.package).unwrap();
    assert_eq!(first.containing_package(), Some(package));
}

#[test]
fn test_distinct_elements_distinct_wrappers() {
    let f = fixtures::nested();
    let cx = Context::new(f.program);
    assert_ne!(cx.class(f.inner).unwrap(), cx.class(f.leaf).unwrap());
}

#[test]
fn test_contexts_do_not_share_wrappers() {
    let f = fixtures::nested();
    let host: Rc<dyn Host> = Rc::new(f.program);
    let cx1 = Context::shared(host.clone());
    let cx2 = Context::shared(host);

    let a = cx1.class(f.outer).unwrap();
    let b = cx2.class(f.outer).unwrap();
    assert_eq!(a.qualified_name(), b.qualified_name());
    assert_ne!(a, b);
    assert_eq!(cx1.class(f.outer).unwrap(), a);
}

#[test]
fn test_nested_class_names() {
    let f = fixtures::nested();
    let cx = Context::new(f.program);

    let leaf = cx.class(f.leaf).unwrap();
    assert_eq!(leaf.name(), "Outer.Inner.Leaf");
    assert_eq!(leaf.qualified_name(), "com.example.Outer.Inner.Leaf");
    assert_eq!(leaf.type_name(), "Outer.Inner.Leaf");
    assert_eq!(leaf.simple_type_name(), "Leaf");
    assert_eq!(leaf.qualified_type_name(), "com.example.Outer.Inner.Leaf");
    assert_eq!(leaf.dimension(), "");
    assert_eq!(leaf.to_string(), "com.example.Outer.Inner.Leaf");

    let outer = cx.class(f.outer).unwrap();
    assert_eq!(outer.name(), "Outer");
}

#[test]
fn test_containing_class_chain() {
    let f = fixtures::nested();
    let cx = Context::new(f.program);

    let leaf = cx.class(f.leaf).unwrap();
    let inner = leaf.containing_class().unwrap().unwrap();
    assert_eq!(inner, cx.class(f.inner).unwrap());
    let outer = inner.containing_class().unwrap().unwrap();
    assert_eq!(outer, cx.class(f.outer).unwrap());
    assert_eq!(outer.containing_class().unwrap(), None);
}

#[test]
fn test_method_names() {
    let f = fixtures::nested();
    let cx = Context::new(f.program);

    let run = cx.method(f.run).unwrap();
    assert_eq!(run.name(), "run");
    assert_eq!(run.qualified_name(), "com.example.Outer.run");
    assert_eq!(run.signature(), "()");
    assert_eq!(run.flat_signature(), "()");
    assert_eq!(cx.method(f.run).unwrap(), run);
}

#[test]
fn test_obtain_dispatches_by_kind() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);

    assert!(matches!(cx.obtain(f.boxed).unwrap(), Doc::Class(_)));
    assert!(cx.obtain(f.marker).unwrap().is_annotation_type());
    assert!(cx.obtain(f.level).unwrap().is_enum());
    assert!(cx.obtain(f.high).unwrap().is_enum_constant());
    assert!(cx.obtain(f.put).unwrap().is_method());
    assert!(cx.obtain(f.constructor).unwrap().is_constructor());
    assert!(cx.obtain(f.marker_value).unwrap().is_annotation_type_element());
}

#[test]
fn test_constructor_named_after_class() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);

    let constructor = cx.constructor(f.constructor).unwrap();
    assert_eq!(constructor.name(), "Box");
    assert_eq!(constructor.qualified_name(), "com.example.Box");
    assert_eq!(constructor.signature(), "(java.lang.Object, int)");
    assert_eq!(constructor.flat_signature(), "(T, int)");
}

#[test]
fn test_annotation_type_has_its_own_wrapper_kind() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);

    let marker = cx.annotation_type(f.marker).unwrap();
    let as_class = cx.class(f.marker).unwrap();
    assert_eq!(marker.as_class_doc(), &as_class);
    assert!(as_class.is_annotation_type());
    assert!(!marker.is_interface());
    assert!(!as_class.is_interface());
    assert!(!as_class.is_class());
    assert_eq!(marker.elements().len(), 2);
    assert_eq!(marker.modifiers(), "public interface");
}
