/// Identity of the package manager that produced the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerInfo {
    name: String,
    version: String,
}

impl ManagerInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// npm at the given CLI version
    pub fn npm(version: impl Into<String>) -> Self {
        Self::new("npm", version)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Creator entry for `creationInfo.creators`
    pub fn tool_creator(&self) -> String {
        format!("Tool: {}/cli-{}", self.name, self.version)
    }
}

/// SbomMetadata value object: the per-call parts of a document
#[derive(Debug, Clone)]
pub struct SbomMetadata {
    timestamp: String,
    creator: String,
    namespace_token: String,
}

impl SbomMetadata {
    pub fn new(timestamp: String, creator: String, namespace_token: String) -> Self {
        Self {
            timestamp,
            creator,
            namespace_token,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn creator(&self) -> &str {
        &self.creator
    }

    pub fn namespace_token(&self) -> &str {
        &self.namespace_token
    }
}
