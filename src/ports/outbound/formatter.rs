use crate::sbom_generation::domain::SpdxDocument;
use crate::shared::Result;

/// SbomFormatter port for rendering a finished SPDX document
pub trait SbomFormatter {
    /// Formats the document as text
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, document: &SpdxDocument) -> Result<String>;
}
