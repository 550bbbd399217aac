use crate::sbom_generation::domain::DependencyGraph;
use crate::shared::Result;
use std::path::Path;

/// GraphReader port for loading a resolved dependency graph snapshot
pub trait GraphReader {
    /// Reads and parses the graph snapshot at `graph_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The snapshot does not exist or is not a regular file
    /// - The file cannot be read
    /// - The content is not a valid graph snapshot
    fn read_graph(&self, graph_path: &Path) -> Result<DependencyGraph>;
}
