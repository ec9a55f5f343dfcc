//! Concept and object kind labels for multi-agent reinforcement learning.
//!
//! [`ConceptType`] tags the structural kind of a concept an agent exposes and
//! [`ObjectType`] tags whether a described entity is an agent or an environment object.
//! Ordinals are stable and shared with saved data.
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::missing_const_for_fn)] // has some false positives
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::use_self)] // also triggered by macro expansions

// Lets `#[derive(Indexed)]` refer to `::concept_types` from inside this crate.
extern crate self as concept_types;

pub mod concepts;
mod error;
pub mod logging;
pub mod spaces;

pub use concept_types_derive::Indexed;
pub use concepts::{ConceptType, ObjectType};
pub use error::InvalidEnumValue;
pub use spaces::{FiniteSpace, Indexed, IndexedTypeSpace, SampleSpace, Space};
