use concept_types_derive::Indexed;
use enum_map::Enum;

/// Whether a described entity is an actor or a passive part of the environment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Enum, Indexed)]
#[repr(u8)]
pub enum ObjectType {
    /// A controllable or learning entity.
    Agent = 0,
    /// A non-agent entity in the environment.
    EnvironmentObject = 1,
}

impl_ordinal_enum!(ObjectType {
    Agent => "AGENT",
    EnvironmentObject => "ENVIRONMENT_OBJECT",
});
