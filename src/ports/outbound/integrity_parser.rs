use crate::sbom_generation::domain::IntegrityDigest;
use crate::shared::Result;

/// IntegrityParser port for decoding multi-hash integrity strings
pub trait IntegrityParser: Send + Sync {
    /// Decodes the integrity string and selects exactly one digest from it
    ///
    /// # Errors
    /// Returns an error if the string holds no decodable entry for a
    /// supported algorithm
    fn select(&self, integrity: &str) -> Result<IntegrityDigest>;
}
