//! Concept and object kind labels.
//!
//! Both enumerations are closed and their ordinals are stable:
//! they appear in experiment configs and saved data, so a member must never be
//! renumbered or reordered.

/// Ordinal, name, conversion and serde impls for a unit enum that derives `Indexed`.
///
/// Each variant's discriminant must equal its index.
macro_rules! impl_ordinal_enum {
    ($type:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $type {
            /// All members in ordinal order.
            pub const ALL: [$type; <$type as $crate::Indexed>::SIZE] = [$(Self::$variant),+];

            /// The stable integer ordinal.
            pub const fn ordinal(self) -> u8 {
                self as u8
            }

            /// The canonical name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $type {
            type Err = $crate::InvalidEnumValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    _ => Err($crate::InvalidEnumValue::name(
                        <Self as $crate::Indexed>::TYPE_NAME,
                        s,
                    )),
                }
            }
        }

        impl From<$type> for u8 {
            fn from(value: $type) -> Self {
                value.ordinal()
            }
        }

        impl TryFrom<usize> for $type {
            type Error = $crate::InvalidEnumValue;

            fn try_from(value: usize) -> Result<Self, Self::Error> {
                <Self as $crate::Indexed>::try_from_index(value)
            }
        }

        impl TryFrom<u8> for $type {
            type Error = $crate::InvalidEnumValue;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                Self::try_from(usize::from(value))
            }
        }

        impl TryFrom<u64> for $type {
            type Error = $crate::InvalidEnumValue;

            fn try_from(value: u64) -> Result<Self, Self::Error> {
                usize::try_from(value)
                    .ok()
                    .and_then(<Self as $crate::Indexed>::from_index)
                    .ok_or_else(|| {
                        $crate::InvalidEnumValue::ordinal(
                            <Self as $crate::Indexed>::TYPE_NAME,
                            value.into(),
                        )
                    })
            }
        }

        impl TryFrom<i64> for $type {
            type Error = $crate::InvalidEnumValue;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                usize::try_from(value)
                    .ok()
                    .and_then(<Self as $crate::Indexed>::from_index)
                    .ok_or_else(|| {
                        $crate::InvalidEnumValue::ordinal(
                            <Self as $crate::Indexed>::TYPE_NAME,
                            value.into(),
                        )
                    })
            }
        }

        /// Serializes as the integer ordinal.
        impl ::serde::Serialize for $type {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u8(self.ordinal())
            }
        }

        /// Deserializes from the integer ordinal.
        /// Human-readable formats also accept the canonical name.
        impl<'de> ::serde::Deserialize<'de> for $type {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct OrdinalOrNameVisitor;

                impl<'de> ::serde::de::Visitor<'de> for OrdinalOrNameVisitor {
                    type Value = $type;

                    fn expecting(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                        write!(
                            f,
                            "a {} ordinal or name",
                            <$type as $crate::Indexed>::TYPE_NAME
                        )
                    }

                    fn visit_u64<E: ::serde::de::Error>(self, value: u64) -> Result<$type, E> {
                        $type::try_from(value).map_err(E::custom)
                    }

                    fn visit_i64<E: ::serde::de::Error>(self, value: i64) -> Result<$type, E> {
                        $type::try_from(value).map_err(E::custom)
                    }

                    fn visit_str<E: ::serde::de::Error>(self, value: &str) -> Result<$type, E> {
                        value.parse::<$type>().map_err(E::custom)
                    }
                }

                if deserializer.is_human_readable() {
                    deserializer.deserialize_any(OrdinalOrNameVisitor)
                } else {
                    deserializer.deserialize_u8(OrdinalOrNameVisitor)
                }
            }
        }
    };
}

mod concept;
mod object;

pub use concept::ConceptType;
pub use object::ObjectType;
