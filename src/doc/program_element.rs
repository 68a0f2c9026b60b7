//! Declarations that live inside a package: classes and their members.

use std::fmt;

use crate::context::Context;
use crate::error::Result;
use crate::host::{ElementKind, Modifier};

use super::{AnnotationDesc, ClassDoc, Documented, PackageDoc};

/// Modifier bit set with the classic reflection encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u32);

impl Modifiers {
    pub const PUBLIC: u32 = 0x001;
    pub const PRIVATE: u32 = 0x002;
    pub const PROTECTED: u32 = 0x004;
    pub const STATIC: u32 = 0x008;
    pub const FINAL: u32 = 0x010;
    pub const SYNCHRONIZED: u32 = 0x020;
    pub const VOLATILE: u32 = 0x040;
    pub const TRANSIENT: u32 = 0x080;
    pub const NATIVE: u32 = 0x100;
    pub const INTERFACE: u32 = 0x200;
    pub const ABSTRACT: u32 = 0x400;
    pub const STRICT: u32 = 0x800;

    /// Printing order of the keyword form.
    const ORDER: [(u32, &'static str); 12] = [
        (Self::PUBLIC, "public"),
        (Self::PROTECTED, "protected"),
        (Self::PRIVATE, "private"),
        (Self::ABSTRACT, "abstract"),
        (Self::STATIC, "static"),
        (Self::FINAL, "final"),
        (Self::TRANSIENT, "transient"),
        (Self::VOLATILE, "volatile"),
        (Self::SYNCHRONIZED, "synchronized"),
        (Self::NATIVE, "native"),
        (Self::STRICT, "strictfp"),
        (Self::INTERFACE, "interface"),
    ];

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub fn from_host(modifiers: &[Modifier]) -> Self {
        let bits = modifiers.iter().fold(0, |bits, m| {
            bits | match m {
                Modifier::Public => Self::PUBLIC,
                Modifier::Protected => Self::PROTECTED,
                Modifier::Private => Self::PRIVATE,
                Modifier::Abstract => Self::ABSTRACT,
                Modifier::Static => Self::STATIC,
                Modifier::Final => Self::FINAL,
                Modifier::Transient => Self::TRANSIENT,
                Modifier::Volatile => Self::VOLATILE,
                Modifier::Synchronized => Self::SYNCHRONIZED,
                Modifier::Native => Self::NATIVE,
                Modifier::Strictfp => Self::STRICT,
                Modifier::Default | Modifier::Sealed | Modifier::NonSealed => 0,
            }
        });
        Self(bits)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, flag: u32) -> bool {
        self.0 & flag == flag
    }

    pub fn with(self, flag: u32) -> Self {
        Self(self.0 | flag)
    }

    pub fn without(self, flag: u32) -> Self {
        Self(self.0 & !flag)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<&str> = Self::ORDER
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, word)| *word)
            .collect();
        f.write_str(&words.join(" "))
    }
}

/// A declaration inside a package: class, field, method or constructor.
pub trait ProgramElement<'a>: Documented<'a> {
    /// The innermost enclosing class, `None` for a top-level class.
    fn containing_class(&self) -> Result<Option<ClassDoc<'a>>> {
        let cx: &'a Context = self.context();
        cx.utils()
            .enclosing_type_element(self.element())
            .map(|owner| cx.class(owner))
            .transpose()
    }

    fn containing_package(&self) -> Option<PackageDoc<'a>> {
        let cx: &'a Context = self.context();
        cx.utils()
            .package_of(self.element())
            .map(|package| cx.package_doc(package))
    }

    fn modifier_specifier(&self) -> Modifiers {
        Modifiers::from_host(&self.context().host().modifiers(self.element()))
    }

    /// Keyword form of [`ProgramElement::modifier_specifier`], e.g. `public static final`.
    fn modifiers(&self) -> String {
        self.modifier_specifier().to_string()
    }

    /// Annotation uses whose type really is an annotation type.
    fn annotations(&self) -> Vec<AnnotationDesc<'a>> {
        let cx: &'a Context = self.context();
        let host = cx.host();
        host.annotation_mirrors(self.element())
            .into_iter()
            .filter(|mirror| {
                host.type_element(mirror.annotation_type)
                    .is_some_and(|e| host.element_kind(e) == ElementKind::AnnotationType)
            })
            .map(|mirror| AnnotationDesc::new(cx, mirror))
            .collect()
    }

    fn has_modifier(&self, modifier: Modifier) -> bool {
        self.context()
            .host()
            .modifiers(self.element())
            .contains(&modifier)
    }

    fn is_public(&self) -> bool {
        self.has_modifier(Modifier::Public)
    }

    fn is_protected(&self) -> bool {
        self.has_modifier(Modifier::Protected)
    }

    fn is_private(&self) -> bool {
        self.has_modifier(Modifier::Private)
    }

    fn is_package_private(&self) -> bool {
        !self.is_public() && !self.is_protected() && !self.is_private()
    }

    fn is_static(&self) -> bool {
        self.has_modifier(Modifier::Static)
    }

    fn is_final(&self) -> bool {
        self.has_modifier(Modifier::Final)
    }
}
