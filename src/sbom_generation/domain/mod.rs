pub mod dependency_graph;
pub mod graph_node;
pub mod integrity;
pub mod package_spec;
pub mod sbom_metadata;
pub mod spdx_document;

pub use dependency_graph::DependencyGraph;
pub use graph_node::{Edge, EdgeKind, GraphNode, LicenseField, PackageMetadata, RepositoryField};
pub use integrity::{HashAlgorithm, IntegrityDigest};
pub use package_spec::{ParsedSpec, SourceKind, SpecType};
pub use sbom_metadata::{ManagerInfo, SbomMetadata};
pub use spdx_document::{
    Checksum, CreationInfo, ExternalRef, RelationshipType, SpdxDocument, SpdxPackage,
    SpdxRelationship, NO_ASSERTION, SPDX_DATA_LICENSE, SPDX_DOCUMENT_ID, SPDX_VERSION,
};
