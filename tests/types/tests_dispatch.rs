#![allow(clippy::unwrap_used)]

//! Mapping host types to the legacy variants.

use doclet::{Context, Documented, ElementId, PrimitiveType, Type};

use crate::helpers::fixtures;

fn field_type<'a>(cx: &'a Context, class: ElementId, name: &str) -> Type<'a> {
    cx.class(class)
        .unwrap()
        .fields(false)
        .into_iter()
        .find(|f| f.name() == name)
        .unwrap()
        .ty()
        .unwrap()
        .unwrap()
}

#[test]
fn test_primitive_and_void() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);

    let count = field_type(&cx, f.boxed, "count");
    assert_eq!(count, Type::Primitive(PrimitiveType::Int));
    assert!(count.is_primitive());
    assert_eq!(count.type_name(), "int");
    assert_eq!(count.qualified_type_name(), "int");
    assert_eq!(count.to_string(), "int");
    assert_eq!(count.as_class_doc(), None);
    assert_eq!(count.as_primitive_type(), Some(PrimitiveType::Int));

    let put = cx.method(f.put).unwrap();
    assert_eq!(
        put.return_type().unwrap(),
        Some(Type::Primitive(PrimitiveType::Void))
    );
    assert_eq!(Type::from(PrimitiveType::Long).type_name(), "long");
}

#[test]
fn test_array_of_class() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);

    let grid = field_type(&cx, f.boxed, "grid");
    assert_eq!(grid.dimension(), "[][]");
    assert_eq!(grid.qualified_type_name(), "java.lang.String");
    assert_eq!(grid.simple_type_name(), "String");
    assert_eq!(grid.type_name(), "String");
    assert_eq!(grid.to_string(), "java.lang.String[][]");
    assert!(!grid.is_primitive());

    let array = grid.as_array_type().unwrap();
    assert_eq!(array.depth(), 2);
    let element = grid.element_type().unwrap();
    assert_eq!(element.dimension(), "");
    assert_eq!(element, array.component_type());
    assert_eq!(
        grid.as_class_doc(),
        cx.class_named("java.lang.String").unwrap()
    );
}

#[test]
fn test_array_of_type_variable() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);

    let cube = field_type(&cx, f.boxed, "cube");
    assert_eq!(cube.dimension(), "[][][]");
    assert_eq!(cube.qualified_type_name(), "T");
    assert_eq!(cube.type_name(), "Object");

    let variable = cube.as_type_variable().unwrap();
    assert_eq!(variable.name(), "T");
    assert_eq!(cube.element_type(), Some(Type::TypeVariable(variable)));
    assert_eq!(
        cube.as_class_doc().unwrap().qualified_name(),
        "java.lang.Object"
    );
    assert_eq!(cube.as_parameterized_type(), None);
}

#[test]
fn test_error_type() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);

    let broken = field_type(&cx, f.boxed, "broken");
    let error = broken.as_error_type().unwrap();
    assert_eq!(error.name(), "com.missing.Gone");
    assert_eq!(error.simple_name(), "Gone");
    assert!(!error.is_included());
    assert_eq!(broken.type_name(), "Gone");
    assert_eq!(broken.qualified_type_name(), "com.missing.Gone");
    assert_eq!(broken.as_class_doc(), None);
}

#[test]
fn test_annotated_type_keeps_its_annotations() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);

    let tagged = field_type(&cx, f.boxed, "tagged");
    let annotated = tagged.as_annotated_type().unwrap();
    assert_eq!(annotated.annotations().len(), 1);
    assert_eq!(annotated.annotations()[0].to_string(), "@com.example.Marker");
    assert_eq!(tagged.type_name(), "String");
    assert_eq!(tagged.qualified_type_name(), "java.lang.String");
    assert_eq!(tagged.to_string(), "@com.example.Marker java.lang.String");

    let underlying = annotated.underlying_type().unwrap();
    assert_eq!(
        underlying,
        Type::Class(cx.class_named("java.lang.String").unwrap().unwrap())
    );
    assert_eq!(annotated.underlying_type().unwrap(), underlying);
}

#[test]
fn test_declared_types_are_class_docs() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);

    let level = cx.annotation_element(f.marker_level).unwrap();
    let ty = level.return_type().unwrap().unwrap();
    let class = cx.class(f.level).unwrap();
    assert_eq!(ty, Type::Class(class.clone()));
    assert_eq!(ty.as_class_doc(), Some(class.clone()));
    assert_eq!(Type::from(class.clone()), ty);
    assert_eq!(ty.as_annotation_type_doc(), None);
    assert_eq!(ty.as_array_type(), None);

    let marker = cx.type_of(cx.host().as_type(f.marker)).unwrap().unwrap();
    assert_eq!(
        marker.as_annotation_type_doc(),
        Some(cx.annotation_type(f.marker).unwrap())
    );
    assert_eq!(marker.to_string(), "com.example.Marker");
}

#[test]
fn test_object_has_no_superclass_type() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);

    let object = cx.class_named("java.lang.Object").unwrap().unwrap();
    assert_eq!(object.superclass_type().unwrap(), None);
    assert_eq!(
        cx.type_of(cx.host().superclass(object.element())).unwrap(),
        None
    );
}

#[test]
fn test_same_host_type_same_view() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);

    for name in ["cube", "grid", "boxed", "bounded", "tagged", "broken"] {
        let first = field_type(&cx, f.boxed, name);
        let second = field_type(&cx, f.boxed, name);
        assert_eq!(first, second, "{name}");
    }

    let other = Context::new(fixtures::generic().program);
    let grid = field_type(&cx, f.boxed, "grid");
    let elsewhere = field_type(&other, f.boxed, "grid");
    assert_ne!(grid, elsewhere);
}
