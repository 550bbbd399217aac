use crate::sbom_generation::domain::ManagerInfo;
use std::path::PathBuf;

/// File name of the graph snapshot looked up in the project directory
pub const DEFAULT_GRAPH_FILENAME: &str = "npm-graph.json";

/// SbomRequest - Internal request DTO for SBOM generation use case
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Path to the project directory
    pub project_path: PathBuf,
    /// Explicit graph snapshot path; defaults to `<project>/npm-graph.json`
    pub graph_path: Option<PathBuf>,
    /// Optional purpose of the root package, e.g. "application"
    pub package_type: Option<String>,
    /// Package manager identity written to the document creators
    pub manager: ManagerInfo,
}

impl SbomRequest {
    pub fn new(project_path: PathBuf, manager: ManagerInfo) -> Self {
        Self {
            project_path,
            graph_path: None,
            package_type: None,
            manager,
        }
    }

    pub fn with_graph_path(mut self, graph_path: Option<PathBuf>) -> Self {
        self.graph_path = graph_path;
        self
    }

    pub fn with_package_type(mut self, package_type: Option<String>) -> Self {
        self.package_type = package_type;
        self
    }

    /// Graph snapshot location this request reads from
    pub fn graph_file(&self) -> PathBuf {
        self.graph_path
            .clone()
            .unwrap_or_else(|| self.project_path.join(DEFAULT_GRAPH_FILENAME))
    }
}
