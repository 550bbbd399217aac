use crate::sbom_generation::domain::{ParsedSpec, SpecType};
use crate::shared::Result;

/// PackageSpecParser port for ecosystem-specific package specifier semantics
///
/// Implementations decide what a valid identifier looks like, how source
/// locators are classified, and how an identifier is rendered as a purl.
/// Swapping the implementation retargets the projection to another ecosystem.
pub trait PackageSpecParser: Send + Sync {
    /// Parses a `name@spec` identifier into name, scope and spec parts
    ///
    /// # Errors
    /// Returns an error if the name part is not a valid package name
    fn parse_identifier(&self, identifier: &str) -> Result<ParsedSpec>;

    /// Classifies a resolved source locator (tarball URL, git URL, path, ...)
    ///
    /// # Errors
    /// Returns an error if the locator cannot be classified at all
    fn parse_source(&self, source: &str) -> Result<SpecType>;

    /// Renders an identifier as a canonical package URL
    ///
    /// # Errors
    /// Returns an error unless the identifier names an exact registry version
    fn to_purl(&self, identifier: &str) -> Result<String>;
}
