#![allow(clippy::unwrap_used)]

//! Wrappers requested for the wrong kind of element or type.

use doclet::{AdapterError, Context, ProgramBuilder};

use crate::helpers::fixtures;

#[test]
fn test_record_is_unsupported() {
    let f = fixtures::categories();
    let cx = Context::new(f.program);

    let err = cx.class(f.record).unwrap_err();
    assert!(matches!(err, AdapterError::UnsupportedKind { .. }));
    assert!(matches!(
        cx.obtain(f.record),
        Err(AdapterError::UnsupportedKind { .. })
    ));
}

#[test]
fn test_field_is_not_a_class() {
    let f = fixtures::members();
    let cx = Context::new(f.program);

    let err = cx.class(f.weight).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid argument: expected type element, found FIELD"
    );
}

#[test]
fn test_plain_class_is_not_an_annotation_type() {
    let f = fixtures::categories();
    let cx = Context::new(f.program);

    let err = cx.annotation_type(f.plain).unwrap_err();
    assert!(matches!(
        err,
        AdapterError::InvalidArgument {
            expected: "annotation type",
            ..
        }
    ));
    assert!(cx.annotation_type(f.note).is_ok());
}

#[test]
fn test_parameters_are_not_documented_directly() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);
    let put = cx.host().parameters(f.put);

    assert!(matches!(
        cx.obtain(put[0]),
        Err(AdapterError::InvalidArgument { .. })
    ));
    assert!(cx.parameter(put[0]).is_ok());
    assert!(cx.method(put[0]).is_err());
}

#[test]
fn test_intersection_type_is_unsupported() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);

    let err = cx.type_of(f.intersection).unwrap_err();
    assert!(matches!(
        err,
        AdapterError::UnsupportedKind { what: "type", .. }
    ));
}

#[test]
fn test_ordinary_method_is_not_an_annotation_element() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);

    assert!(matches!(
        cx.annotation_element(f.get),
        Err(AdapterError::InvalidArgument { .. })
    ));
    assert!(cx.annotation_element(f.marker_value).is_ok());
}

#[test]
fn test_failed_factory_leaves_no_wrapper_behind() {
    let mut b = ProgramBuilder::new();
    let package = b.package("com.example");
    let point = b.record(package, "Point").public().finish();
    let holder = b.class(package, "Holder").public().finish();
    let record_type = b.declared(point);
    b.field(holder, "origin", record_type).public().finish();
    let cx = Context::new(b.build());

    let origin = cx.class(holder).unwrap().fields(false)[0].clone();
    assert!(origin.ty().is_err());
    assert!(origin.ty().is_err());
    assert!(cx.class(point).is_err());
}
