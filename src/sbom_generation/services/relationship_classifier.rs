use super::IdentifierSanitizer;
use crate::sbom_generation::domain::{Edge, EdgeKind, GraphNode, RelationshipType, SpdxRelationship};

/// RelationshipClassifier service mapping dependency edges to SPDX relationships
pub struct RelationshipClassifier;

impl RelationshipClassifier {
    /// Relationship type for an edge kind; anything unlisted is `DEPENDS_ON`
    pub fn relationship_type(kind: &EdgeKind) -> RelationshipType {
        match kind {
            EdgeKind::Peer => RelationshipType::HasPrerequisite,
            EdgeKind::Optional => RelationshipType::OptionalDependencyOf,
            EdgeKind::Dev => RelationshipType::DevDependencyOf,
            EdgeKind::Normal | EdgeKind::Other(_) => RelationshipType::DependsOn,
        }
    }

    /// Classifies `edge` as seen from `from`
    ///
    /// Returns None only for an edge without a target. Filtering edges whose
    /// target lies outside the graph is the caller's job.
    pub fn classify(from: &GraphNode, edge: &Edge) -> Option<SpdxRelationship> {
        let to = edge.to()?;
        Some(SpdxRelationship::new(
            IdentifierSanitizer::sanitize(from.identifier()),
            IdentifierSanitizer::sanitize(to),
            Self::relationship_type(edge.kind()),
        ))
    }
}
