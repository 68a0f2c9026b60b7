#![allow(clippy::unwrap_used)]

//! Parameterized types, wildcards and type variables.

use doclet::{Context, Documented, ExecutableMember, Type};

use crate::helpers::fixtures;

fn field<'a>(cx: &'a Context, class: doclet::ElementId, name: &str) -> Type<'a> {
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
fn test_parameterized_type() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);

    let boxed = field(&cx, f.boxed, "boxed");
    let parameterized = boxed.as_parameterized_type().unwrap();
    assert_eq!(boxed.type_name(), "Box");
    assert_eq!(boxed.qualified_type_name(), "com.example.Box");
    assert_eq!(boxed.to_string(), "com.example.Box<java.lang.String>");
    assert_eq!(parameterized.element(), f.boxed);

    let arguments = parameterized.type_arguments().unwrap();
    assert_eq!(arguments.len(), 1);
    assert_eq!(arguments[0].qualified_type_name(), "java.lang.String");
    assert_eq!(boxed.as_class_doc(), Some(cx.class(f.boxed).unwrap()));
    assert_eq!(boxed.as_type_variable(), None);
}

#[test]
fn test_wildcard_argument() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);

    let bounded = field(&cx, f.boxed, "bounded");
    let arguments = bounded.as_parameterized_type().unwrap().type_arguments().unwrap();
    let wildcard = arguments[0].as_wildcard_type().unwrap();

    assert_eq!(arguments[0].type_name(), "?");
    assert_eq!(arguments[0].qualified_type_name(), "?");
    assert_eq!(wildcard.to_string(), "? extends java.lang.String");
    let extends: Vec<String> = wildcard
        .extends_bounds()
        .unwrap()
        .iter()
        .map(Type::qualified_type_name)
        .collect();
    assert_eq!(extends, ["java.lang.String"]);
    assert!(wildcard.super_bounds().unwrap().is_empty());
    assert_eq!(
        wildcard.as_class_doc().unwrap().qualified_name(),
        "java.lang.String"
    );
}

#[test]
fn test_class_type_variable() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);
    let class = cx.class(f.boxed).unwrap();

    let variables = class.type_parameters().unwrap();
    assert_eq!(variables.len(), 1);
    let t = &variables[0];
    assert_eq!(t.name(), "T");
    assert_eq!(t.type_name(), "Object");
    assert!(t.bounds().unwrap().is_empty());
    assert_eq!(t.owner().unwrap().unwrap().as_class(), Some(&class));
    assert_eq!(class.type_parameters().unwrap()[0], *t);
}

#[test]
fn test_bounded_method_type_variable() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);
    let convert = cx.method(f.convert).unwrap();

    let u = &convert.type_parameters().unwrap()[0];
    let bounds: Vec<String> = u
        .bounds()
        .unwrap()
        .iter()
        .map(Type::qualified_type_name)
        .collect();
    assert_eq!(bounds, ["java.lang.String"]);
    assert_eq!(u.type_name(), "String");
    assert_eq!(
        u.as_class_doc().unwrap().qualified_name(),
        "java.lang.String"
    );

    let returned = convert.return_type().unwrap().unwrap();
    assert_eq!(returned.as_type_variable().as_ref(), Some(u));
    assert_eq!(returned.qualified_type_name(), "U");
    assert_eq!(returned.simple_type_name(), "U");
}

#[test]
fn test_bounds_are_computed_once() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);
    let convert = cx.method(f.convert).unwrap();

    let u = &convert.type_parameters().unwrap()[0];
    let first = u.bounds().unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first, u.bounds().unwrap());

    let again = &convert.type_parameters().unwrap()[0];
    assert_eq!(again, u);
    assert_eq!(again.bounds().unwrap(), first);
    assert_eq!(
        first[0].as_class_doc().unwrap().qualified_name(),
        "java.lang.String"
    );
}

#[test]
fn test_getter_returns_type_variable() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);
    let get = cx.method(f.get).unwrap();

    let returned = get.return_type().unwrap().unwrap();
    let variable = returned.as_type_variable().unwrap();
    assert_eq!(variable.name(), "T");
    assert_eq!(returned.to_string(), "T");
    assert_eq!(returned.dimension(), "");
    assert_eq!(get.signature(), "()");
}

#[test]
fn test_constructor_parameter_erasure() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);
    let constructor = cx.constructor(f.constructor).unwrap();

    let parameter = &constructor.parameters()[0];
    let ty = parameter.ty().unwrap().unwrap();
    assert_eq!(ty.as_type_variable().unwrap().name(), "T");
    assert_eq!(parameter.type_name().unwrap(), "Object");
    assert_eq!(parameter.to_string(), "T storedObject");
}
