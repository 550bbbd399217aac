use crate::sbom_generation::domain::{GraphNode, PackageMetadata};

/// ManifestNormalizer port for filling in conventional manifest defaults
///
/// Normalization works on a copy: the node's own metadata is never touched,
/// so a graph may be shared between concurrent projections.
pub trait ManifestNormalizer: Send + Sync {
    /// Returns the node's manifest with defaults applied. A node without a
    /// manifest yields a record built from the node's own name and version.
    fn normalize(&self, node: &GraphNode) -> PackageMetadata;
}
