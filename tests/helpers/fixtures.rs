//! Programs the integration tests document.
//!
//! Each fixture returns the built [`Program`] together with the handles a
//! test needs, so a test can move the program into a context and keep the
//! handles.

use doclet::host::{AnnotationValueKind, ElementKind, Modifier, TypeKind};
use doclet::{ElementId, Program, ProgramBuilder, TypeId};

pub const OUTER_UNIT: &str = "package com.example;\n\n/**\n * Outer docs.\n * @since 1.0\n */\npublic class Outer {\n}\n";

pub const OUTER_COMMENT: &str = "/**\n * Outer docs.\n * @since 1.0\n */";

// ============================================================================
// NESTED CLASSES
// ============================================================================

pub struct Nested {
    pub program: Program,
    pub package: ElementId,
    pub outer: ElementId,
    pub inner: ElementId,
    pub leaf: ElementId,
    pub hidden: ElementId,
    pub run: ElementId,
}

/// `com.example.Outer`, its member `Inner`, `Inner`'s member `Leaf` and a
/// private member `Hidden`. `Outer` is specified and lives in an inline unit.
pub fn nested() -> Nested {
    let mut b = ProgramBuilder::new();
    let package = b.package("com.example");
    let unit = b.unit("Outer.java", OUTER_UNIT);
    let outer = b
        .class(package, "Outer")
        .public()
        .unit(unit)
        .doc(OUTER_COMMENT)
        .specified()
        .finish();
    let inner = b.class(outer, "Inner").public().static_().finish();
    let leaf = b.class(inner, "Leaf").public().finish();
    let hidden = b.class(outer, "Hidden").private().finish();
    let run = b.method(outer, "run").public().finish();
    Nested {
        program: b.build(),
        package,
        outer,
        inner,
        leaf,
        hidden,
        run,
    }
}

// ============================================================================
// GENERIC BOX
// ============================================================================

pub struct Generic {
    pub program: Program,
    pub boxed: ElementId,
    pub marker: ElementId,
    pub level: ElementId,
    pub high: ElementId,
    pub put: ElementId,
    pub get: ElementId,
    pub convert: ElementId,
    pub constructor: ElementId,
    pub marker_value: ElementId,
    pub marker_level: ElementId,
    pub intersection: TypeId,
}

/// `com.example.Box<T>` with fields of every type shape and a documented
/// `Box(T storedObject, int price)` constructor, plus the
/// annotation type `Marker` and the enum `Level`.
pub fn generic() -> Generic {
    let mut b = ProgramBuilder::new();
    let package = b.package("com.example");
    let string = b.named_type("java.lang.String").unwrap();
    let int = b.primitive(TypeKind::Int);

    let level = b.enum_type(package, "Level").public().finish();
    b.enum_constant(level, "LOW").finish();
    let high = b.enum_constant(level, "HIGH").finish();
    let level_type = b.declared(level);

    let marker = b
        .annotation_type(package, "Marker")
        .public()
        .doc("/** Marks things. */")
        .finish();
    let marker_value = b
        .annotation_element(marker, "value", string)
        .default_value(AnnotationValueKind::String("none".to_string()))
        .finish();
    let marker_level = b.annotation_element(marker, "level", level_type).finish();

    let boxed = b
        .class(package, "Box")
        .public()
        .doc("/**\n * Holds one thing.\n * @param <T> the stored type\n */")
        .finish();
    let (_, t) = b.type_parameter(boxed, "T", &[]);

    b.field(boxed, "storedObject", t).private().finish();
    let cube = b.array_of(t, 3);
    b.field(boxed, "cube", cube).public().finish();
    let box_of_string = b.parameterized(boxed, &[string]);
    b.field(boxed, "boxed", box_of_string).public().finish();
    let bound = b.wildcard_extends(string);
    let box_of_bound = b.parameterized(boxed, &[bound]);
    b.field(boxed, "bounded", box_of_bound).public().finish();
    b.field(boxed, "count", int).public().finish();
    let grid = b.array_of(string, 2);
    b.field(boxed, "grid", grid).public().finish();
    let annotation = b.annotation(marker);
    let tagged = b.annotated(string, annotation);
    b.field(boxed, "tagged", tagged).public().finish();
    let missing = b.error_type("com.missing.Gone");
    b.field(boxed, "broken", missing).public().finish();

    let put = b.method(boxed, "put").public().finish();
    b.parameter(put, "storedObject", t).finish();
    b.parameter(put, "price", int).finish();

    let get = b.method(boxed, "get").public().returns(t).finish();

    let convert = b.method(boxed, "convert").public().finish();
    let (_, u) = b.type_parameter(convert, "U", &[string]);
    let items = b.array(u);
    b.parameter(convert, "items", items).finish();
    b.edit(convert).returns(u).var_args().finish();

    let constructor = b
        .constructor(boxed)
        .public()
        .doc("/**\n * Creates a box.\n * @param storedObject Something valuable\n * @param price\n */")
        .finish();
    b.parameter(constructor, "storedObject", t).finish();
    b.parameter(constructor, "price", int).finish();

    let comparable = b.interface(package, "Ranked").public().finish();
    let ranked = b.declared(comparable);
    let intersection = b.intersection(&[string, ranked]);

    Generic {
        program: b.build(),
        boxed,
        marker,
        level,
        high,
        put,
        get,
        convert,
        constructor,
        marker_value,
        marker_level,
        intersection,
    }
}

// ============================================================================
// MEMBERS AND VISIBILITY
// ============================================================================

pub struct Members {
    pub program: Program,
    pub members: ElementId,
    pub level: ElementId,
    pub entry: ElementId,
    pub mode: ElementId,
    pub internal: ElementId,
    pub constant: ElementId,
    pub weight: ElementId,
}

/// `com.example.Members` declaring one field, method and constructor per
/// access level, member types of several kinds, and a `@hide` method.
pub fn members() -> Members {
    let mut b = ProgramBuilder::new();
    let package = b.package("com.example");
    let int = b.primitive(TypeKind::Int);
    let long = b.primitive(TypeKind::Long);
    let string = b.named_type("java.lang.String").unwrap();
    let boolean = b.primitive(TypeKind::Boolean);

    let members = b.class(package, "Members").public().finish();
    let access = [
        ("shown", Some(Modifier::Public)),
        ("guarded", Some(Modifier::Protected)),
        ("shared", None),
        ("secret", Some(Modifier::Private)),
    ];
    for (i, (name, modifier)) in access.into_iter().enumerate() {
        let modifiers: Vec<Modifier> = modifier.into_iter().collect();
        b.field(members, name, int).modifiers(&modifiers).finish();
        b.method(members, &format!("{name}Method"))
            .modifiers(&modifiers)
            .finish();
        let constructor = b.constructor(members).modifiers(&modifiers).finish();
        let ty = [int, long, string, boolean][i];
        b.parameter(constructor, "value", ty).finish();
    }
    let internal = b
        .method(members, "internal")
        .public()
        .doc("/**\n * Internal.\n * @hide\n */")
        .finish();
    let constant = b
        .field(members, "LIMIT", int)
        .public()
        .static_()
        .final_()
        .constant(doclet::host::ConstantValue::Char('A'))
        .finish();

    let entry = b.class(members, "Entry").public().static_().finish();
    b.interface(members, "Callback").public().finish();
    b.class(members, "Detail").private().finish();
    let mode = b.enum_type(members, "Mode").public().finish();
    b.annotation_type(members, "Note").public().finish();

    let level = b.enum_type(package, "Level").public().finish();
    for name in ["LOW", "MEDIUM", "HIGH"] {
        b.enum_constant(level, name).finish();
    }
    let weight = b.field(level, "weight", int).private().final_().finish();

    Members {
        program: b.build(),
        members,
        level,
        entry,
        mode,
        internal,
        constant,
        weight,
    }
}

// ============================================================================
// OVERRIDES
// ============================================================================

pub struct Shapes {
    pub program: Program,
    pub shape: ElementId,
    pub circle: ElementId,
    pub ring: ElementId,
    pub shape_describe: ElementId,
    pub circle_describe: ElementId,
    pub ring_describe: ElementId,
    pub drawable_describe: ElementId,
    pub shape_create: ElementId,
    pub circle_create: ElementId,
    pub shape_resize: ElementId,
    pub circle_resize_long: ElementId,
    pub circle_resize: ElementId,
    pub circle_secret: ElementId,
}

/// `Shape <- Circle <- Ring` in `com.example.shapes`. `Circle` also
/// implements `Drawable`.
pub fn shapes() -> Shapes {
    let mut b = ProgramBuilder::new();
    let package = b.package("com.example.shapes");
    let string = b.named_type("java.lang.String").unwrap();
    let int = b.primitive(TypeKind::Int);
    let long = b.primitive(TypeKind::Long);

    let drawable = b.interface(package, "Drawable").public().finish();
    let drawable_describe = b
        .method(drawable, "describe")
        .public()
        .abstract_()
        .returns(string)
        .finish();
    let drawable_type = b.declared(drawable);

    let shape = b.class(package, "Shape").public().abstract_().finish();
    let shape_type = b.declared(shape);
    let shape_describe = b.method(shape, "describe").public().returns(string).finish();
    let shape_create = b
        .method(shape, "create")
        .public()
        .static_()
        .returns(shape_type)
        .finish();
    let shape_resize = b.method(shape, "resize").protected().finish();
    b.parameter(shape_resize, "factor", int).finish();
    b.method(shape, "secret").private().finish();

    let circle = b
        .class(package, "Circle")
        .public()
        .superclass(shape_type)
        .implements(drawable_type)
        .finish();
    let circle_type = b.declared(circle);
    let circle_describe = b.method(circle, "describe").public().returns(string).finish();
    let circle_create = b
        .method(circle, "create")
        .public()
        .static_()
        .returns(shape_type)
        .finish();
    let circle_resize = b.method(circle, "resize").protected().finish();
    b.parameter(circle_resize, "factor", int).finish();
    let circle_resize_long = b.method(circle, "resize").public().finish();
    b.parameter(circle_resize_long, "factor", long).finish();
    let circle_secret = b.method(circle, "secret").private().finish();

    let ring = b
        .class(package, "Ring")
        .public()
        .superclass(circle_type)
        .finish();
    let ring_describe = b.method(ring, "describe").public().returns(string).finish();

    Shapes {
        program: b.build(),
        shape,
        circle,
        ring,
        shape_describe,
        circle_describe,
        ring_describe,
        drawable_describe,
        shape_create,
        circle_create,
        shape_resize,
        circle_resize_long,
        circle_resize,
        circle_secret,
    }
}

// ============================================================================
// PACKAGE CATEGORIES
// ============================================================================

pub struct Categories {
    pub program: Program,
    pub package: ElementId,
    pub failure: ElementId,
    pub fatal: ElementId,
    pub plain: ElementId,
    pub api: ElementId,
    pub level: ElementId,
    pub note: ElementId,
    pub record: ElementId,
}

/// One class of each legacy category in `com.example.errors`, plus a
/// package-private class and a record.
pub fn categories() -> Categories {
    let mut b = ProgramBuilder::new();
    let package = b.package("com.example.errors");
    let exception = b.named_type("java.lang.RuntimeException").unwrap();
    let error = b.named_type("java.lang.Error").unwrap();
    let serializable = b.named_type("java.io.Serializable").unwrap();

    let failure = b
        .class(package, "Failure")
        .public()
        .superclass(exception)
        .finish();
    let fatal = b.class(package, "Fatal").public().superclass(error).finish();
    let plain = b
        .class(package, "Plain")
        .public()
        .implements(serializable)
        .finish();
    b.class(package, "Helper").finish();
    let api = b.interface(package, "Api").public().finish();
    let level = b.type_element(package, "Level", ElementKind::Enum).public().finish();
    let note = b.annotation_type(package, "Note").public().finish();
    let record = b.record(package, "Point").public().finish();

    Categories {
        program: b.build(),
        package,
        failure,
        fatal,
        plain,
        api,
        level,
        note,
        record,
    }
}
