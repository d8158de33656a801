//! Naming domains and the generator that turns them into names.
//!
//! A domain bundles phonology, morphology and style for one fictional
//! culture. Only a numeric subset of it is tunable; see
//! [`codec`](crate::codec) for which fields and in what order.

mod generator;
mod types;

pub use generator::NameGenerator;
pub use types::{
    Capitalization, LengthRange, Morphology, NamingDomainConfig, Phonology, RhythmBias, Style,
};
