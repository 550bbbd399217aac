use crate::application::dto::{SbomRequest, SbomResponse};
use crate::ports::outbound::{
    GraphReader, IntegrityParser, ManifestNormalizer, PackageSpecParser, ProgressReporter,
};
use crate::sbom_generation::domain::DependencyGraph;
use crate::sbom_generation::services::GraphProjector;
use crate::shared::Result;

#[cfg(test)]
mod tests;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// Loads a resolved dependency graph through the GraphReader port and
/// projects it into an SPDX 2.3 document.
///
/// # Type Parameters
/// * `GR` - GraphReader implementation
/// * `PR` - ProgressReporter implementation
/// * `P` - PackageSpecParser implementation
/// * `I` - IntegrityParser implementation
/// * `N` - ManifestNormalizer implementation
pub struct GenerateSbomUseCase<GR, PR, P, I, N> {
    graph_reader: GR,
    progress_reporter: PR,
    projector: GraphProjector<P, I, N>,
}

impl<GR, PR, P, I, N> GenerateSbomUseCase<GR, PR, P, I, N>
where
    GR: GraphReader,
    PR: ProgressReporter,
    P: PackageSpecParser,
    I: IntegrityParser,
    N: ManifestNormalizer,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(
        graph_reader: GR,
        progress_reporter: PR,
        projector: GraphProjector<P, I, N>,
    ) -> Self {
        Self {
            graph_reader,
            progress_reporter,
            projector,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Errors
    /// Propagates graph loading errors and every projection error; no
    /// partial document is returned.
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        let graph = self.read_and_report_graph(&request)?;
        let extraneous_count = self.report_extraneous(&graph);

        self.progress_reporter
            .report("🔧 Projecting dependency graph to SPDX 2.3...");

        let document = self.projector.project(
            &graph,
            &request.manager,
            request.package_type.as_deref(),
        )?;

        let response = SbomResponse::new(document, graph.total_node_count(), extraneous_count);

        self.progress_reporter.report_completion(&format!(
            "✅ Projected {} package(s) and {} relationship(s)",
            response.package_count(),
            response.relationship_count()
        ));

        Ok(response)
    }

    /// Reads the graph snapshot, reporting progress
    fn read_and_report_graph(&self, request: &SbomRequest) -> Result<DependencyGraph> {
        let graph_file = request.graph_file();
        self.progress_reporter.report(&format!(
            "📖 Loading dependency graph from: {}",
            graph_file.display()
        ));

        let graph = self.graph_reader.read_graph(&graph_file)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} package(s) and {} edge(s)",
            graph.total_node_count(),
            graph.edge_count()
        ));

        Ok(graph)
    }

    fn report_extraneous(&self, graph: &DependencyGraph) -> usize {
        let count = graph.extraneous().count();
        if count > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} extraneous package(s) will be attached to the root as optional dependencies.",
                count
            ));
        }
        count
    }
}
