/// Defines a newtype wrapper around the `i32` business identifiers used
/// throughout the catalog and generates:
/// - derives (Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)
/// - `Display`
/// - `From<i32> for $name` and `From<$name> for i32`
///
/// Identifiers serialize transparently as plain integers, so a wrapped id
/// stored in a document is indistinguishable from a bare `i32` field.
///
/// Usage:
///   define_id_type!(BookId);
#[macro_export]
macro_rules! define_id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub i32);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::std::convert::From<i32> for $name {
            fn from(v: i32) -> Self {
                $name(v)
            }
        }

        impl ::std::convert::From<$name> for i32 {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl $name {
            pub fn new(value: i32) -> Self {
                $name(value)
            }

            pub fn value(&self) -> i32 {
                self.0
            }
        }
    };
}
