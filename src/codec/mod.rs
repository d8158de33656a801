//! Parameter codec.
//!
//! Maps the tunable numeric subset of a [`NamingDomainConfig`] onto a flat
//! `Vec<f64>` (theta) and back. Search strategies only ever move through
//! this space; everything structural (inventories, affix lists, syllable
//! templates) is carried over from a template domain on decode.
//!
//! Vector order, for a domain with `k` structure weights:
//!
//! | slots        | field                              | step class      |
//! |--------------|------------------------------------|-----------------|
//! | `0..k`       | `morphology.structure_weights`     | weights         |
//! | `k`          | `style.apostrophe_rate`            | apostropheRate  |
//! | `k + 1`      | `style.hyphen_rate`                | hyphenRate      |
//! | `k + 2`      | `phonology.length_range.min`       | lengthRange     |
//! | `k + 3`      | `phonology.length_range.max`       | lengthRange     |
//! | `k + 4`      | `phonology.favored_cluster_boost`  | weights         |
//! | `k + 5`      | `style.preferred_ending_boost`     | weights         |
//!
//! [`NamingDomainConfig`]: crate::domain::NamingDomainConfig

mod bounds;
mod layout;
mod vector;

pub use bounds::{ParamRange, ParameterBounds, StepSizes};
pub use layout::{ParamKind, ParameterLayout, StepClass};
pub use vector::ParameterCodec;
