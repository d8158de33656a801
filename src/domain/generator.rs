//! The name generator collaborator.

use super::types::NamingDomainConfig;
use crate::error::GenerationError;

/// Produces names for a naming domain.
///
/// Implementations must be deterministic for a given `(domain, seed,
/// count)` triple; reproducibility of whole optimization runs depends on
/// it. The engine makes exactly one call per evaluation.
///
/// # Examples
///
/// ```
/// use u_nameopt::domain::{NameGenerator, NamingDomainConfig};
/// use u_nameopt::error::GenerationError;
///
/// struct Echo;
///
/// impl NameGenerator for Echo {
///     fn generate(
///         &self,
///         domain: &NamingDomainConfig,
///         seed: u64,
///         count: usize,
///     ) -> Result<Vec<String>, GenerationError> {
///         Ok((0..count).map(|i| format!("{}{}", domain.id, seed + i as u64)).collect())
///     }
/// }
/// ```
pub trait NameGenerator: Send + Sync {
    /// Generates up to `count` names. Returning fewer (or none) is allowed.
    fn generate(
        &self,
        domain: &NamingDomainConfig,
        seed: u64,
        count: usize,
    ) -> Result<Vec<String>, GenerationError>;
}

impl<G: NameGenerator + ?Sized> NameGenerator for &G {
    fn generate(
        &self,
        domain: &NamingDomainConfig,
        seed: u64,
        count: usize,
    ) -> Result<Vec<String>, GenerationError> {
        (**self).generate(domain, seed, count)
    }
}
