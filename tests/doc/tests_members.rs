#![allow(clippy::unwrap_used)]

//! Class members and visibility filtering.

use doclet::host::{ConstantValue, ElementKind};
use doclet::{Context, Documented, ExecutableMember, ProgramElement};
use rstest::rstest;

use crate::helpers::fixtures;

fn names<'a>(docs: impl IntoIterator<Item = impl Documented<'a>>) -> Vec<String> {
    docs.into_iter().map(|d| d.name().to_string()).collect()
}

#[rstest]
#[case(true, vec!["shown", "guarded", "LIMIT"])]
#[case(false, vec!["shown", "guarded", "shared", "secret", "LIMIT"])]
fn test_fields_filtering(#[case] filter: bool, #[case] expected: Vec<&str>) {
    let f = fixtures::members();
    let cx = Context::new(f.program);
    let class = cx.class(f.members).unwrap();
    assert_eq!(names(class.fields(filter)), expected);
}

#[rstest]
#[case(true, vec!["shownMethod", "guardedMethod"])]
#[case(false, vec!["shownMethod", "guardedMethod", "sharedMethod", "secretMethod", "internal"])]
fn test_methods_filtering(#[case] filter: bool, #[case] expected: Vec<&str>) {
    let f = fixtures::members();
    let cx = Context::new(f.program);
    let class = cx.class(f.members).unwrap();
    assert_eq!(names(class.methods(filter)), expected);
}

#[rstest]
#[case(true, 2)]
#[case(false, 4)]
fn test_constructors_filtering(#[case] filter: bool, #[case] expected: usize) {
    let f = fixtures::members();
    let cx = Context::new(f.program);
    let class = cx.class(f.members).unwrap();
    let constructors = class.constructors(filter);
    assert_eq!(constructors.len(), expected);
    assert!(constructors.iter().all(|c| c.name() == "Members"));
}

#[test]
fn test_filtered_and_unfiltered_share_wrappers() {
    let f = fixtures::members();
    let cx = Context::new(f.program);
    let class = cx.class(f.members).unwrap();
    let filtered = class.fields(true);
    let all = class.fields(false);
    assert_eq!(filtered[0], all[0]);
    assert_eq!(filtered[1], all[1]);
}

#[test]
fn test_hidden_method_is_not_selected() {
    let f = fixtures::members();
    let cx = Context::new(f.program);
    let internal = cx.method(f.internal).unwrap();
    assert!(internal.is_public());
    assert!(!internal.is_included());
    assert_eq!(internal.tags_of_kind("hide").len(), 1);
}

#[test]
fn test_constructor_flat_signatures() {
    let f = fixtures::members();
    let cx = Context::new(f.program);
    let class = cx.class(f.members).unwrap();
    let signatures: Vec<String> = class
        .constructors(false)
        .iter()
        .map(|c| c.flat_signature().to_string())
        .collect();
    assert_eq!(signatures, ["(int)", "(long)", "(String)", "(boolean)"]);
    assert_eq!(
        class.constructors(false)[2].signature(),
        "(java.lang.String)"
    );
}

#[test]
fn test_inner_classes_skip_enums_and_annotation_types() {
    let f = fixtures::members();
    let cx = Context::new(f.program);
    let class = cx.class(f.members).unwrap();

    assert_eq!(
        names(class.inner_classes(false)),
        ["Members.Entry", "Members.Callback", "Members.Detail"]
    );
    assert_eq!(
        names(class.inner_classes(true)),
        ["Members.Entry", "Members.Callback"]
    );
    assert_eq!(class.inner_classes(true)[0], cx.class(f.entry).unwrap());
    assert!(cx.class(f.mode).unwrap().is_enum());
}

#[test]
fn test_enum_constants_are_not_fields() {
    let f = fixtures::members();
    let cx = Context::new(f.program);
    let level = cx.class(f.level).unwrap();

    assert_eq!(names(level.enum_constants()), ["LOW", "MEDIUM", "HIGH"]);
    assert_eq!(names(level.fields(false)), ["weight"]);
    assert!(level.fields(true).is_empty());

    let high = &level.enum_constants()[2];
    assert!(high.is_enum_constant());
    assert_eq!(high.qualified_name(), "com.example.Level.HIGH");
    assert_eq!(high.modifiers(), "public static final");
    assert_eq!(
        high.ty().unwrap().unwrap().as_class_doc(),
        Some(level.clone())
    );
    assert!(!cx.field(f.weight).unwrap().is_enum_constant());
}

#[test]
fn test_constant_values() {
    let f = fixtures::members();
    let cx = Context::new(f.program);
    let limit = cx.field(f.constant).unwrap();

    assert_eq!(limit.constant_value(), Some(ConstantValue::Int(65)));
    assert_eq!(limit.constant_value_expression().as_deref(), Some("'A'"));
    assert!(limit.is_static());
    assert!(limit.is_final());
    assert!(!limit.is_transient());
    assert_eq!(limit.modifier_specifier().bits(), 0x019);

    let weight = cx.field(f.weight).unwrap();
    assert_eq!(weight.constant_value(), None);
    assert!(weight.is_private());
}

#[test]
fn test_class_classification() {
    let f = fixtures::members();
    let cx = Context::new(f.program);
    let class = cx.class(f.members).unwrap();

    assert_eq!(class.kind(), ElementKind::Class);
    assert!(class.is_class());
    assert!(class.is_ordinary_class());
    assert!(!class.is_interface());
    assert!(!class.is_abstract());
    assert!(!class.is_serializable());

    let object = class.superclass().unwrap().unwrap();
    assert_eq!(object.qualified_name(), "java.lang.Object");
    assert_eq!(object.superclass().unwrap(), None);
    assert!(class.subclass_of(&object));
}

#[test]
fn test_method_parameters() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);
    let put = cx.method(f.put).unwrap();

    let parameters = put.parameters();
    let names: Vec<&str> = parameters.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["storedObject", "price"]);
    assert_eq!(parameters[0].type_name().unwrap(), "Object");
    assert_eq!(parameters[1].type_name().unwrap(), "int");
    assert_eq!(parameters[1].to_string(), "int price");
    assert_eq!(put.parameters()[0], parameters[0]);
    assert_eq!(put.flat_signature(), "(T, int)");
}

#[test]
fn test_var_args_method() {
    let f = fixtures::generic();
    let cx = Context::new(f.program);
    let convert = cx.method(f.convert).unwrap();

    assert!(convert.is_var_args());
    assert_eq!(convert.flat_signature(), "(U[])");
    assert_eq!(convert.signature(), "(java.lang.String[])");
    assert_eq!(convert.parameters()[0].type_name().unwrap(), "U[]");

    let variables = convert.type_parameters().unwrap();
    assert_eq!(variables.len(), 1);
    assert_eq!(variables[0].name(), "U");
    let owner = variables[0].owner().unwrap().unwrap();
    assert_eq!(owner.as_method(), Some(&convert));
}
