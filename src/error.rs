//! Error type
use thiserror::Error;

/// Attempted to construct an enumeration member from a value that names no member.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidEnumValue {
    #[error("invalid {type_name} ordinal {value}")]
    Ordinal { type_name: &'static str, value: i128 },
    #[error("invalid {type_name} name {name:?}")]
    Name {
        type_name: &'static str,
        name: String,
    },
}

impl InvalidEnumValue {
    pub const fn ordinal(type_name: &'static str, value: i128) -> Self {
        Self::Ordinal { type_name, value }
    }

    pub fn name<S: Into<String>>(type_name: &'static str, name: S) -> Self {
        Self::Name {
            type_name,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_message() {
        let err = InvalidEnumValue::ordinal("ConceptType", 7);
        assert_eq!(err.to_string(), "invalid ConceptType ordinal 7");
    }

    #[test]
    fn negative_ordinal_message() {
        let err = InvalidEnumValue::ordinal("ObjectType", -1);
        assert_eq!(err.to_string(), "invalid ObjectType ordinal -1");
    }

    #[test]
    fn u64_max_ordinal_message() {
        let err = InvalidEnumValue::ordinal("ObjectType", u64::MAX.into());
        assert_eq!(err.to_string(), "invalid ObjectType ordinal 18446744073709551615");
    }

    #[test]
    fn name_message() {
        let err = InvalidEnumValue::name("ConceptType", "VECTOR");
        assert_eq!(err.to_string(), "invalid ConceptType name \"VECTOR\"");
    }
}
