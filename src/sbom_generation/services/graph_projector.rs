use super::{
    IdentifierSanitizer, PackageOptions, PackageRecordBuilder, RelationshipClassifier,
    SbomGenerator,
};
use crate::ports::outbound::{IntegrityParser, ManifestNormalizer, PackageSpecParser};
use crate::sbom_generation::domain::{
    CreationInfo, DependencyGraph, Edge, EdgeKind, GraphNode, ManagerInfo, RelationshipType,
    SbomMetadata, SpdxDocument, SpdxPackage, SpdxRelationship, SPDX_DATA_LICENSE,
    SPDX_DOCUMENT_ID, SPDX_VERSION,
};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::collections::HashSet;

/// Base URL for document namespaces
pub const DEFAULT_NAMESPACE_BASE: &str = "http://spdx.org/spdxdocs";

/// GraphProjector service: projects a resolved dependency graph into one SPDX document
///
/// Everything except `documentNamespace` and `creationInfo.created` is a
/// deterministic function of the graph, so two projections of the same
/// graph differ only in those fields.
///
/// # Type Parameters
/// * `P` - PackageSpecParser implementation
/// * `I` - IntegrityParser implementation
/// * `N` - ManifestNormalizer implementation
pub struct GraphProjector<P, I, N> {
    spec_parser: P,
    integrity_parser: I,
    normalizer: N,
    namespace_base: String,
}

impl<P, I, N> GraphProjector<P, I, N>
where
    P: PackageSpecParser,
    I: IntegrityParser,
    N: ManifestNormalizer,
{
    pub fn new(spec_parser: P, integrity_parser: I, normalizer: N) -> Self {
        Self {
            spec_parser,
            integrity_parser,
            normalizer,
            namespace_base: DEFAULT_NAMESPACE_BASE.to_string(),
        }
    }

    /// Overrides the namespace base URL; a trailing `/` is dropped
    pub fn with_namespace_base(mut self, base: impl Into<String>) -> Self {
        self.namespace_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn namespace_base(&self) -> &str {
        &self.namespace_base
    }

    /// Projects `graph` into an SPDX 2.3 document
    ///
    /// # Arguments
    /// * `graph` - Resolved graph with exactly one root node
    /// * `manager` - Package manager identity for `creationInfo.creators`
    /// * `package_type` - Optional root package purpose, e.g. "application"
    ///
    /// # Errors
    /// - [`SbomError::InvariantViolation`] if the graph has zero or several roots
    /// - [`SbomError::InvalidPackageIdentifier`] if any node has no purl form
    /// - [`SbomError::MalformedChecksum`] if any integrity value cannot be decoded
    pub fn project(
        &self,
        graph: &DependencyGraph,
        manager: &ManagerInfo,
        package_type: Option<&str>,
    ) -> Result<SpdxDocument> {
        let root = graph.root()?;
        let root_id = IdentifierSanitizer::sanitize(root.identifier());
        let metadata = SbomGenerator::generate_metadata(manager);

        let packages = self.build_packages(graph, root, package_type)?;

        let mut relationships = vec![SpdxRelationship::new(
            SPDX_DOCUMENT_ID,
            root_id.clone(),
            RelationshipType::Describes,
        )];
        relationships.extend(Self::edge_relationships(graph));
        relationships.extend(Self::extraneous_relationships(graph, root));

        Ok(SpdxDocument {
            spdx_version: SPDX_VERSION.to_string(),
            data_license: SPDX_DATA_LICENSE.to_string(),
            spdx_id: SPDX_DOCUMENT_ID.to_string(),
            name: root.identifier().to_string(),
            document_namespace: self.document_namespace(root, &metadata)?,
            creation_info: CreationInfo {
                created: metadata.timestamp().to_string(),
                creators: vec![metadata.creator().to_string()],
            },
            document_describes: vec![root_id],
            packages,
            relationships,
        })
    }

    /// `<base>/<escaped-root-name>-<root-version>-<token>`
    fn document_namespace(&self, root: &GraphNode, metadata: &SbomMetadata) -> Result<String> {
        let parsed = self
            .spec_parser
            .parse_identifier(root.identifier())
            .map_err(|e| SbomError::InvalidPackageIdentifier {
                identifier: root.identifier().to_string(),
                details: e.to_string(),
            })?;

        Ok(format!(
            "{}/{}-{}-{}",
            self.namespace_base,
            parsed.escaped_name(),
            root.version(),
            metadata.namespace_token()
        ))
    }

    /// Root first (with the package type hint), then every other node in input order
    fn build_packages(
        &self,
        graph: &DependencyGraph,
        root: &GraphNode,
        package_type: Option<&str>,
    ) -> Result<Vec<SpdxPackage>> {
        let builder = PackageRecordBuilder::new(
            &self.spec_parser,
            &self.integrity_parser,
            &self.normalizer,
        );

        let mut packages = Vec::with_capacity(graph.total_node_count());
        packages.push(builder.build(root, &PackageOptions::with_package_type(package_type))?);

        let child_options = PackageOptions::default();
        for child in graph.children() {
            packages.push(builder.build(child, &child_options)?);
        }

        Ok(packages)
    }

    /// Edge-derived relationships in node order, then edge order
    ///
    /// Links are followed to their targets, and each resolved node is
    /// visited once. Links that do not resolve and edges whose target is not
    /// part of the graph are dropped.
    fn edge_relationships(graph: &DependencyGraph) -> Vec<SpdxRelationship> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut relationships = Vec::new();

        for node in graph.nodes() {
            let Some(node) = graph.resolve(node) else {
                continue;
            };
            if !visited.insert(node.identifier()) {
                continue;
            }

            relationships.extend(
                node.edges_out()
                    .iter()
                    .filter(|edge| edge.to().is_some_and(|to| graph.contains(to)))
                    .filter_map(|edge| RelationshipClassifier::classify(node, edge)),
            );
        }

        relationships
    }

    /// One `root -> node` optional relationship per extraneous node
    fn extraneous_relationships(
        graph: &DependencyGraph,
        root: &GraphNode,
    ) -> Vec<SpdxRelationship> {
        graph
            .extraneous()
            .filter(|node| !node.is_root())
            .filter_map(|node| {
                let edge = Edge::new(Some(node.identifier().to_string()), EdgeKind::Optional);
                RelationshipClassifier::classify(root, &edge)
            })
            .collect()
    }
}
