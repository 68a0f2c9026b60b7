//! Opaque handles into the host program model.
//!
//! Every handle is a `u32` index. Handles are only meaningful for the host
//! that issued them; the adapter never inspects the index itself, it only
//! uses handles as cache keys and hands them back to the host.

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<u32> for $name {
            fn from(index: u32) -> Self {
                Self(index)
            }
        }
    };
}

define_id!(
    /// A declared program element: package, type, member, parameter or type parameter.
    ElementId
);

define_id!(
    /// A type mirror: primitive, declared, array, wildcard, type variable and friends.
    TypeId
);

define_id!(
    /// A node of a parsed documentation comment.
    DocTreeId
);

define_id!(
    /// A compilation unit, i.e. one source file.
    UnitId
);

define_id!(
    /// A constant value attached to an annotation or an annotation element default.
    AnnotationValueId
);
