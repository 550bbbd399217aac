use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Kind of a dependency edge as declared by the depending package
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EdgeKind {
    #[default]
    Normal,
    Peer,
    Optional,
    Dev,
    /// Any edge type this crate has no dedicated mapping for
    Other(String),
}

impl EdgeKind {
    /// Maps an npm edge type name onto an EdgeKind
    ///
    /// `prod` and `workspace` edges are ordinary dependencies. Everything
    /// unlisted, `peerOptional` included, is kept as [`EdgeKind::Other`].
    pub fn from_npm_type(value: &str) -> Self {
        match value {
            "normal" | "prod" | "workspace" => EdgeKind::Normal,
            "peer" => EdgeKind::Peer,
            "optional" => EdgeKind::Optional,
            "dev" => EdgeKind::Dev,
            other => EdgeKind::Other(other.to_string()),
        }
    }
}

/// Directed dependency edge. `to` holds the identifier of the target node
/// and is `None` when resolution left the edge unsatisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    to: Option<String>,
    kind: EdgeKind,
}

impl Edge {
    pub fn new(to: Option<String>, kind: EdgeKind) -> Self {
        Self { to, kind }
    }

    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }

    pub fn kind(&self) -> &EdgeKind {
        &self.kind
    }
}

/// `license` manifest field, either an SPDX expression or the legacy object form
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LicenseField {
    Expression(String),
    Legacy {
        #[serde(rename = "type")]
        license_type: String,
        #[serde(default)]
        url: Option<String>,
    },
}

/// `repository` manifest field, either a shorthand string or an object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RepositoryField {
    Shorthand(String),
    Object {
        #[serde(rename = "type", default)]
        repo_type: Option<String>,
        #[serde(default)]
        url: Option<String>,
    },
}

impl RepositoryField {
    /// Repository URL, `None` for objects that only name a type or directory
    pub fn url(&self) -> Option<&str> {
        match self {
            RepositoryField::Shorthand(url) => Some(url),
            RepositoryField::Object { url, .. } => url.as_deref(),
        }
    }
}

/// Free-form manifest fields carried by a graph node
///
/// Manifests in the wild are messy: a field whose shape is not understood
/// is dropped on its own instead of failing the whole snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageMetadata {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub homepage: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub license: Option<LicenseField>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub licenses: Vec<LicenseField>,
    #[serde(default, deserialize_with = "lenient")]
    pub repository: Option<RepositoryField>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A single entry or a list; entries of unknown shape are skipped
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Null => Vec::new(),
        single => vec![single],
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// One resolved package instance in an install tree
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    identifier: String,
    name: String,
    version: String,
    location: String,
    resolved: Option<String>,
    integrity: Option<String>,
    metadata: Option<PackageMetadata>,
    is_root: bool,
    is_link: bool,
    target: Option<String>,
    is_extraneous: bool,
    edges_out: Vec<Edge>,
}

impl GraphNode {
    /// Creates a plain, non-root node with no source, manifest or edges
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            version: version.into(),
            location: String::new(),
            resolved: None,
            integrity: None,
            metadata: None,
            is_root: false,
            is_link: false,
            target: None,
            is_extraneous: false,
            edges_out: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_resolved(mut self, resolved: impl Into<String>) -> Self {
        self.resolved = Some(resolved.into());
        self
    }

    pub fn with_integrity(mut self, integrity: impl Into<String>) -> Self {
        self.integrity = Some(integrity.into());
        self
    }

    pub fn with_metadata(mut self, metadata: PackageMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn as_root(mut self) -> Self {
        self.is_root = true;
        self
    }

    /// Marks the node as a link whose real package is `target`
    pub fn as_link_to(mut self, target: impl Into<String>) -> Self {
        self.is_link = true;
        self.target = Some(target.into());
        self
    }

    pub fn as_extraneous(mut self) -> Self {
        self.is_extraneous = true;
        self
    }

    pub fn with_edge(mut self, to: impl Into<String>, kind: EdgeKind) -> Self {
        self.edges_out.push(Edge::new(Some(to.into()), kind));
        self
    }

    pub fn with_edges(mut self, edges: Vec<Edge>) -> Self {
        self.edges_out.extend(edges);
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Resolved source; blank values count as absent
    pub fn resolved(&self) -> Option<&str> {
        non_blank(self.resolved.as_deref())
    }

    /// SRI integrity string; blank values count as absent
    pub fn integrity(&self) -> Option<&str> {
        non_blank(self.integrity.as_deref())
    }

    pub fn metadata(&self) -> Option<&PackageMetadata> {
        self.metadata.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    pub fn is_link(&self) -> bool {
        self.is_link
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_extraneous(&self) -> bool {
        self.is_extraneous
    }

    pub fn edges_out(&self) -> &[Edge] {
        &self.edges_out
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
