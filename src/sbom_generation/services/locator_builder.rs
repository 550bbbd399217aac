use crate::ports::outbound::PackageSpecParser;
use crate::sbom_generation::domain::{ExternalRef, GraphNode, SourceKind, NO_ASSERTION};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// LocatorBuilder service for download locations and package-manager references
///
/// Source classification here is best-effort: a source the parser rejects
/// is reported as [`SourceKind::Unknown`] and treated as "not git".
pub struct LocatorBuilder<'a> {
    parser: &'a dyn PackageSpecParser,
}

impl<'a> LocatorBuilder<'a> {
    pub fn new(parser: &'a dyn PackageSpecParser) -> Self {
        Self { parser }
    }

    /// Classifies the node's resolved source
    pub fn classify_source(&self, node: &GraphNode) -> SourceKind {
        let Some(source) = node.resolved() else {
            return SourceKind::Unknown;
        };
        match self.parser.parse_source(source) {
            Ok(spec_type) if spec_type.is_git() => SourceKind::Git,
            Ok(_) => SourceKind::Other,
            Err(_) => SourceKind::Unknown,
        }
    }

    pub fn is_git_source(&self, node: &GraphNode) -> bool {
        self.classify_source(node) == SourceKind::Git
    }

    /// `NOASSERTION` for links and nodes without a source, else the source verbatim
    pub fn download_location(&self, node: &GraphNode) -> String {
        match node.resolved() {
            Some(source) if !node.is_link() => source.to_string(),
            _ => NO_ASSERTION.to_string(),
        }
    }

    /// Canonical purl for the node, with `?vcs_url=` appended for git sources
    ///
    /// # Errors
    /// [`SbomError::InvalidPackageIdentifier`] when the identifier has no purl form
    pub fn purl_locator(&self, node: &GraphNode) -> Result<String> {
        let purl = self.parser.to_purl(node.identifier()).map_err(|e| {
            SbomError::InvalidPackageIdentifier {
                identifier: node.identifier().to_string(),
                details: e.to_string(),
            }
        })?;

        match node.resolved() {
            Some(source) if self.is_git_source(node) => Ok(format!("{}?vcs_url={}", purl, source)),
            _ => Ok(purl),
        }
    }

    pub fn external_refs(&self, node: &GraphNode) -> Result<Vec<ExternalRef>> {
        Ok(vec![ExternalRef::purl(self.purl_locator(node)?)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::{ParsedSpec, SpecType};

    /// Parser stub: anything starting with "git" is git, "bad" fails, rest is remote
    struct StubParser;

    impl PackageSpecParser for StubParser {
        fn parse_identifier(&self, identifier: &str) -> Result<ParsedSpec> {
            Ok(ParsedSpec {
                name: identifier.to_string(),
                scope: None,
                raw_spec: String::new(),
                spec_type: SpecType::Tag,
            })
        }

        fn parse_source(&self, source: &str) -> Result<SpecType> {
            if source.starts_with("git") {
                Ok(SpecType::Git)
            } else if source.starts_with("bad") {
                anyhow::bail!("unparseable source")
            } else {
                Ok(SpecType::Remote)
            }
        }

        fn to_purl(&self, identifier: &str) -> Result<String> {
            if identifier.contains("invalid") {
                anyhow::bail!("not a version spec");
            }
            Ok(format!("pkg:npm/{}", identifier))
        }
    }

    #[test]
    fn test_classify_source_tri_state() {
        let builder = LocatorBuilder::new(&StubParser);

        let git = GraphNode::new("a@1.0.0", "a", "1.0.0").with_resolved("git+ssh://host/a.git");
        let remote =
            GraphNode::new("b@1.0.0", "b", "1.0.0").with_resolved("https://registry/b.tgz");
        let broken = GraphNode::new("c@1.0.0", "c", "1.0.0").with_resolved("bad source");
        let missing = GraphNode::new("d@1.0.0", "d", "1.0.0");

        assert_eq!(builder.classify_source(&git), SourceKind::Git);
        assert_eq!(builder.classify_source(&remote), SourceKind::Other);
        assert_eq!(builder.classify_source(&broken), SourceKind::Unknown);
        assert_eq!(builder.classify_source(&missing), SourceKind::Unknown);

        assert!(builder.is_git_source(&git));
        assert!(!builder.is_git_source(&broken));
        assert!(!builder.is_git_source(&missing));
    }

    #[test]
    fn test_download_location() {
        let builder = LocatorBuilder::new(&StubParser);

        let registry =
            GraphNode::new("a@1.0.0", "a", "1.0.0").with_resolved("https://registry/a.tgz");
        assert_eq!(builder.download_location(&registry), "https://registry/a.tgz");

        let unresolved = GraphNode::new("b@1.0.0", "b", "1.0.0");
        assert_eq!(builder.download_location(&unresolved), NO_ASSERTION);

        let link = GraphNode::new("c@1.0.0", "c", "1.0.0")
            .with_resolved("file:../c")
            .as_link_to("c-real@1.0.0");
        assert_eq!(builder.download_location(&link), NO_ASSERTION);
    }

    #[test]
    fn test_purl_locator_appends_vcs_url_for_git() {
        let builder = LocatorBuilder::new(&StubParser);
        let node =
            GraphNode::new("a@1.0.0", "a", "1.0.0").with_resolved("git+https://host/a.git#abc");

        assert_eq!(
            builder.purl_locator(&node).unwrap(),
            "pkg:npm/a@1.0.0?vcs_url=git+https://host/a.git#abc"
        );
    }

    #[test]
    fn test_purl_locator_plain_for_registry_and_unknown() {
        let builder = LocatorBuilder::new(&StubParser);
        let registry =
            GraphNode::new("a@1.0.0", "a", "1.0.0").with_resolved("https://registry/a.tgz");
        let broken = GraphNode::new("b@1.0.0", "b", "1.0.0").with_resolved("bad");

        assert_eq!(builder.purl_locator(&registry).unwrap(), "pkg:npm/a@1.0.0");
        assert_eq!(builder.purl_locator(&broken).unwrap(), "pkg:npm/b@1.0.0");
    }

    #[test]
    fn test_purl_locator_invalid_identifier() {
        let builder = LocatorBuilder::new(&StubParser);
        let node = GraphNode::new("invalid", "invalid", "");

        let err = builder.purl_locator(&node).unwrap_err();
        match err.downcast_ref::<SbomError>() {
            Some(SbomError::InvalidPackageIdentifier { identifier, .. }) => {
                assert_eq!(identifier, "invalid")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_external_refs_single_purl() {
        let builder = LocatorBuilder::new(&StubParser);
        let node = GraphNode::new("a@1.0.0", "a", "1.0.0");
        let refs = builder.external_refs(&node).unwrap();

        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].reference_category, "PACKAGE-MANAGER");
        assert_eq!(refs[0].reference_type, "purl");
        assert_eq!(refs[0].reference_locator, "pkg:npm/a@1.0.0");
    }
}
