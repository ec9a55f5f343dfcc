use concept_types_derive::Indexed;
use enum_map::Enum;

/// The structural kind of a concept an agent exposes to a learning or analysis process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Enum, Indexed)]
#[repr(u8)]
pub enum ConceptType {
    /// Two-valued (true / false) concept.
    Binary = 0,
    /// Continuous numeric concept.
    Scalar = 1,
    /// Concept drawn from a fixed finite label set.
    Categorical = 2,
    /// Spatial coordinates.
    Position = 3,
}

impl_ordinal_enum!(ConceptType {
    Binary => "BINARY",
    Scalar => "SCALAR",
    Categorical => "CATEGORICAL",
    Position => "POSITION",
});
