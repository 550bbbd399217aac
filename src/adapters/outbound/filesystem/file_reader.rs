use crate::ports::outbound::GraphReader;
use crate::sbom_generation::domain::{DependencyGraph, Edge, EdgeKind, GraphNode, PackageMetadata};
use crate::shared::error::SbomError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_GRAPH_FILE_SIZE};
use crate::shared::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk shape of a graph snapshot
///
/// ```json
/// {
///   "nodes": [
///     {
///       "identifier": "app@1.0.0", "name": "app", "version": "1.0.0",
///       "location": "", "isRoot": true,
///       "edgesOut": [{ "to": "left-pad@1.3.0", "type": "prod" }]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Deserialize)]
struct RawGraph {
    nodes: Vec<RawNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    identifier: String,
    name: String,
    version: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    resolved: Option<String>,
    #[serde(default)]
    integrity: Option<String>,
    #[serde(default)]
    package: Option<PackageMetadata>,
    #[serde(default)]
    is_root: bool,
    #[serde(default)]
    is_link: bool,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    extraneous: bool,
    #[serde(default)]
    edges_out: Vec<RawEdge>,
}

#[derive(Debug, Deserialize)]
struct RawEdge {
    #[serde(default)]
    to: Option<String>,
    #[serde(rename = "type", default = "default_edge_type")]
    edge_type: String,
}

fn default_edge_type() -> String {
    "prod".to_string()
}

impl RawNode {
    fn into_node(self) -> GraphNode {
        let edges = self
            .edges_out
            .into_iter()
            .map(|edge| Edge::new(edge.to, EdgeKind::from_npm_type(&edge.edge_type)))
            .collect();

        let mut node = GraphNode::new(self.identifier, self.name, self.version)
            .with_location(self.location)
            .with_edges(edges);

        if let Some(resolved) = self.resolved {
            node = node.with_resolved(resolved);
        }
        if let Some(integrity) = self.integrity {
            node = node.with_integrity(integrity);
        }
        if let Some(metadata) = self.package {
            node = node.with_metadata(metadata);
        }
        if self.is_root {
            node = node.as_root();
        }
        if self.is_link {
            // A link without a target still counts as a link; it just never resolves.
            node = node.as_link_to(self.target.unwrap_or_default());
        }
        if self.extraneous {
            node = node.as_extraneous();
        }
        node
    }
}

/// FileSystemReader adapter for reading graph snapshots from the file system
///
/// This adapter implements the GraphReader port.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        validate_regular_file(path, file_type)?;

        let metadata = fs::metadata(path).map_err(|e| SbomError::FileReadError {
            path: path.to_path_buf(),
            details: format!("Failed to read {} metadata: {}", file_type, e),
        })?;
        validate_file_size(metadata.len(), path, MAX_GRAPH_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            SbomError::FileReadError {
                path: path.to_path_buf(),
                details: format!("Failed to read {}: {}", file_type, e),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphReader for FileSystemReader {
    fn read_graph(&self, graph_path: &Path) -> Result<DependencyGraph> {
        if !graph_path.exists() && fs::symlink_metadata(graph_path).is_err() {
            return Err(SbomError::GraphFileNotFound {
                path: graph_path.to_path_buf(),
                suggestion: format!(
                    "Graph snapshot \"{}\" does not exist.\n   \
                     Export the resolved install tree to npm-graph.json in the project directory, \
                     or pass its location with the --graph option.",
                    graph_path.display()
                ),
            }
            .into());
        }

        let content = self.safe_read_file(graph_path, "graph snapshot")?;

        let raw: RawGraph = serde_json::from_str(&content).map_err(|e| SbomError::GraphParseError {
            path: graph_path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(DependencyGraph::new(
            raw.nodes.into_iter().map(RawNode::into_node).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
        "nodes": [
            {
                "identifier": "app@1.0.0",
                "name": "app",
                "version": "1.0.0",
                "isRoot": true,
                "package": { "name": "app", "license": "MIT" },
                "edgesOut": [
                    { "to": "left-pad@1.3.0", "type": "prod" },
                    { "to": "react@18.2.0", "type": "peerOptional" },
                    { "to": null, "type": "optional" }
                ]
            },
            {
                "identifier": "left-pad@1.3.0",
                "name": "left-pad",
                "version": "1.3.0",
                "location": "node_modules/left-pad",
                "resolved": "https://registry.npmjs.org/left-pad/-/left-pad-1.3.0.tgz",
                "integrity": "sha1-2jmj7l5rSw0yVb/vlWAYkK/YBwk="
            },
            {
                "identifier": "ws@1.0.0",
                "name": "ws",
                "version": "1.0.0",
                "isLink": true,
                "target": "left-pad@1.3.0",
                "extraneous": true
            }
        ]
    }"#;

    fn write_snapshot(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("npm-graph.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_graph_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_snapshot(&temp_dir, SNAPSHOT);

        let graph = FileSystemReader::new().read_graph(&path).unwrap();

        assert_eq!(graph.total_node_count(), 3);
        let root = graph.root().unwrap();
        assert_eq!(root.identifier(), "app@1.0.0");
        assert_eq!(root.edges_out().len(), 3);
        assert_eq!(root.edges_out()[0].kind(), &EdgeKind::Normal);
        assert_eq!(
            root.edges_out()[1].kind(),
            &EdgeKind::Other("peerOptional".to_string())
        );
        assert_eq!(root.edges_out()[2].to(), None);
        assert!(root.metadata().unwrap().license.is_some());

        let left_pad = graph.get("left-pad@1.3.0").unwrap();
        assert_eq!(left_pad.location(), "node_modules/left-pad");
        assert!(left_pad.integrity().is_some());

        let link = graph.get("ws@1.0.0").unwrap();
        assert!(link.is_link());
        assert_eq!(link.target(), Some("left-pad@1.3.0"));
        assert!(link.is_extraneous());
    }

    #[test]
    fn test_read_graph_tolerates_odd_manifest_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_snapshot(
            &temp_dir,
            r#"{"nodes": [{
                "identifier": "app@1.0.0",
                "name": "app",
                "version": "1.0.0",
                "isRoot": true,
                "package": {
                    "repository": { "type": "git", "directory": "packages/x" },
                    "licenses": { "type": "MIT" }
                }
            }]}"#,
        );

        let graph = FileSystemReader::new().read_graph(&path).unwrap();

        let metadata = graph.root().unwrap().metadata().unwrap();
        assert_eq!(metadata.repository.as_ref().and_then(|r| r.url()), None);
        assert_eq!(metadata.licenses.len(), 1);
    }

    #[test]
    fn test_read_graph_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("npm-graph.json");

        let err = FileSystemReader::new().read_graph(&path).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::GraphFileNotFound { .. })
        ));
        assert!(format!("{}", err).contains("does not exist"));
    }

    #[test]
    fn test_read_graph_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_snapshot(&temp_dir, "{ not json");

        let err = FileSystemReader::new().read_graph(&path).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::GraphParseError { .. })
        ));
    }

    #[test]
    fn test_read_graph_missing_required_field() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_snapshot(&temp_dir, r#"{"nodes": [{"identifier": "a@1.0.0"}]}"#);

        assert!(FileSystemReader::new().read_graph(&path).is_err());
    }

    #[test]
    fn test_read_graph_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();

        let err = FileSystemReader::new().read_graph(temp_dir.path()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::FileReadError { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_graph_symlink_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let real = write_snapshot(&temp_dir, SNAPSHOT);
        let link = temp_dir.path().join("link.json");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let err = FileSystemReader::new().read_graph(&link).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::SecurityError { .. })
        ));
    }
}
