use npm_spdx_sbom::prelude::*;
use std::path::Path;

/// Mock GraphReader for testing
pub struct MockGraphReader {
    pub nodes: Vec<GraphNode>,
    pub should_fail: bool,
}

impl MockGraphReader {
    pub fn new(nodes: Vec<GraphNode>) -> Self {
        Self {
            nodes,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            nodes: Vec::new(),
            should_fail: true,
        }
    }
}

impl GraphReader for MockGraphReader {
    fn read_graph(&self, _graph_path: &Path) -> Result<DependencyGraph> {
        if self.should_fail {
            anyhow::bail!("Mock graph read failure");
        }
        Ok(DependencyGraph::new(self.nodes.clone()))
    }
}
