#![allow(clippy::unwrap_used)]

//! Annotation uses, element values and defaults.

use doclet::host::{AnnotationValueKind, ElementKind};
use doclet::{
    AnnotationValueData, Context, Documented, ElementId, ExecutableMember, Program,
    ProgramBuilder, ProgramElement,
};

struct Annotated {
    program: Program,
    service: ElementId,
    handle: ElementId,
    marker: ElementId,
    info: ElementId,
    high: ElementId,
    value: ElementId,
    level: ElementId,
}

/// `@Marker(value = "svc", level = HIGH, sizes = {1, 2})` and
/// `@Info(marker = @Marker("inner"), kind = String.class)` on a class,
/// plus a use of a plain class as if it were an annotation.
fn annotated() -> Annotated {
    let mut b = ProgramBuilder::new();
    let package = b.package("com.example");
    let string = b.named_type("java.lang.String").unwrap();
    let int = b.primitive(doclet::host::TypeKind::Int);
    let ints = b.array(int);

    let level_enum = b.enum_type(package, "Level").public().finish();
    b.enum_constant(level_enum, "LOW").finish();
    let high = b.enum_constant(level_enum, "HIGH").finish();
    let level_type = b.declared(level_enum);

    let marker = b.annotation_type(package, "Marker").public().finish();
    let value = b
        .annotation_element(marker, "value", string)
        .default_value(AnnotationValueKind::String("none".to_string()))
        .finish();
    let level = b.annotation_element(marker, "level", level_type).finish();
    let sizes = b.annotation_element(marker, "sizes", ints).finish();
    let marker_type = b.declared(marker);

    let info = b.type_element(package, "Info", ElementKind::AnnotationType).public().finish();
    let nested = b.annotation_element(info, "marker", marker_type).finish();
    let kind = b.annotation_element(info, "kind", string).finish();

    let svc = b.value(AnnotationValueKind::String("svc".to_string()));
    let high_value = b.value(AnnotationValueKind::EnumConstant(high));
    let one = b.value(AnnotationValueKind::Int(1));
    let two = b.value(AnnotationValueKind::Int(2));
    let size_values = b.value(AnnotationValueKind::Array(vec![one, two]));
    let marker_use = b
        .annotation(marker)
        .with_value(value, svc)
        .with_value(level, high_value)
        .with_value(sizes, size_values);

    let inner_text = b.value(AnnotationValueKind::String("inner".to_string()));
    let inner_marker = b.annotation(marker).with_value(value, inner_text);
    let inner_value = b.value(AnnotationValueKind::Annotation(inner_marker));
    let class_literal = b.value(AnnotationValueKind::Type(string));
    let info_use = b
        .annotation(info)
        .with_value(nested, inner_value)
        .with_value(kind, class_literal);

    let plain = b.class(package, "Plain").public().finish();
    let not_an_annotation = b.annotation(plain);

    let service = b
        .class(package, "Service")
        .public()
        .annotate(marker_use)
        .annotate(info_use)
        .annotate(not_an_annotation)
        .finish();
    let handle = b.method(service, "handle").public().finish();
    let bare_marker = b.annotation(marker);
    b.parameter(handle, "request", string)
        .annotate(bare_marker)
        .finish();

    Annotated {
        program: b.build(),
        service,
        handle,
        marker,
        info,
        high,
        value,
        level,
    }
}

#[test]
fn test_only_annotation_types_are_listed() {
    let f = annotated();
    let cx = Context::new(f.program);
    let service = cx.class(f.service).unwrap();

    let annotations = service.annotations();
    assert_eq!(annotations.len(), 2);
    assert_eq!(
        annotations[0].annotation_type().unwrap(),
        cx.annotation_type(f.marker).unwrap()
    );
    assert_eq!(
        annotations[1].annotation_type().unwrap(),
        cx.annotation_type(f.info).unwrap()
    );
    assert_eq!(service.annotations(), annotations);
}

#[test]
fn test_element_values_in_source_order() {
    let f = annotated();
    let cx = Context::new(f.program);
    let service = cx.class(f.service).unwrap();
    let marker = &service.annotations()[0];

    let pairs = marker.element_values();
    let names: Vec<&str> = pairs.iter().map(|p| p.element().name()).collect();
    assert_eq!(names, ["value", "level", "sizes"]);
    assert_eq!(
        pairs[0].element(),
        &cx.annotation_element(f.value).unwrap()
    );

    assert_eq!(
        pairs[0].value().value().unwrap(),
        AnnotationValueData::String("svc".to_string())
    );
    assert_eq!(
        pairs[1].value().value().unwrap(),
        AnnotationValueData::EnumConstant(cx.field(f.high).unwrap())
    );
    let AnnotationValueData::Array(sizes) = pairs[2].value().value().unwrap() else {
        panic!("expected an array value");
    };
    let sizes: Vec<AnnotationValueData> = sizes.iter().map(|v| v.value().unwrap()).collect();
    assert_eq!(
        sizes,
        [AnnotationValueData::Int(1), AnnotationValueData::Int(2)]
    );
}

#[test]
fn test_annotation_source_form() {
    let f = annotated();
    let cx = Context::new(f.program);
    let service = cx.class(f.service).unwrap();
    let annotations = service.annotations();

    assert_eq!(
        annotations[0].to_string(),
        "@com.example.Marker(value=\"svc\", level=com.example.Level.HIGH, sizes={1, 2})"
    );
    assert_eq!(
        annotations[1].to_string(),
        "@com.example.Info(marker=@com.example.Marker(value=\"inner\"), kind=java.lang.String.class)"
    );
}

#[test]
fn test_nested_annotation_and_class_literal() {
    let f = annotated();
    let cx = Context::new(f.program);
    let service = cx.class(f.service).unwrap();
    let info = &service.annotations()[1];
    let pairs = info.element_values();

    let AnnotationValueData::Annotation(nested) = pairs[0].value().value().unwrap() else {
        panic!("expected a nested annotation");
    };
    assert_eq!(
        nested.annotation_type().unwrap(),
        cx.annotation_type(f.marker).unwrap()
    );

    let AnnotationValueData::Class(class) = pairs[1].value().value().unwrap() else {
        panic!("expected a class literal");
    };
    assert_eq!(class.qualified_name(), "java.lang.String");
}

#[test]
fn test_annotation_element_defaults() {
    let f = annotated();
    let cx = Context::new(f.program);

    let value = cx.annotation_element(f.value).unwrap();
    let default = value.default_value().unwrap();
    assert_eq!(
        default.value().unwrap(),
        AnnotationValueData::String("none".to_string())
    );
    assert_eq!(default.to_string(), "\"none\"");
    assert_eq!(cx.annotation_value(default.id()), default);
    assert_eq!(
        value.return_type().unwrap().unwrap().qualified_type_name(),
        "java.lang.String"
    );

    let level = cx.annotation_element(f.level).unwrap();
    assert_eq!(level.default_value(), None);
    assert_eq!(level.qualified_name(), "com.example.Marker.level");
}

#[test]
fn test_parameter_annotations() {
    let f = annotated();
    let cx = Context::new(f.program);
    let handle = cx.method(f.handle).unwrap();

    let parameter = &handle.parameters()[0];
    let annotations = parameter.annotations();
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].to_string(), "@com.example.Marker");
    assert!(annotations[0].element_values().is_empty());
}

#[test]
fn test_annotation_element_requires_annotation_member() {
    let f = annotated();
    let cx = Context::new(f.program);
    assert!(cx.annotation_element(f.handle).is_err());
    assert!(cx.method(f.value).is_ok());
}
