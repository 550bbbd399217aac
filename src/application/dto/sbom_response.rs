use crate::sbom_generation::domain::SpdxDocument;

/// SbomResponse - Internal response DTO from SBOM generation use case
///
/// Carries the finished document plus the counts the CLI reports.
#[derive(Debug, Clone)]
pub struct SbomResponse {
    pub document: SpdxDocument,
    /// Number of nodes in the graph snapshot
    pub node_count: usize,
    /// Nodes attached to the root as optional dependencies
    pub extraneous_count: usize,
}

impl SbomResponse {
    pub fn new(document: SpdxDocument, node_count: usize, extraneous_count: usize) -> Self {
        Self {
            document,
            node_count,
            extraneous_count,
        }
    }

    pub fn package_count(&self) -> usize {
        self.document.packages.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.document.relationships.len()
    }
}
