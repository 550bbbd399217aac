use super::*;
use crate::adapters::outbound::npm::{NpmManifestNormalizer, NpmSpecParser, SsriIntegrityParser};
use crate::sbom_generation::domain::{EdgeKind, GraphNode, ManagerInfo, RelationshipType};
use crate::shared::error::SbomError;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

// Mock implementations for testing
struct MockGraphReader {
    nodes: Vec<GraphNode>,
    requested_path: RefCell<Option<PathBuf>>,
}

impl MockGraphReader {
    fn new(nodes: Vec<GraphNode>) -> Self {
        Self {
            nodes,
            requested_path: RefCell::new(None),
        }
    }
}

impl GraphReader for MockGraphReader {
    fn read_graph(&self, graph_path: &Path) -> Result<DependencyGraph> {
        *self.requested_path.borrow_mut() = Some(graph_path.to_path_buf());
        Ok(DependencyGraph::new(self.nodes.clone()))
    }
}

struct FailingGraphReader;

impl GraphReader for FailingGraphReader {
    fn read_graph(&self, graph_path: &Path) -> Result<DependencyGraph> {
        Err(SbomError::GraphFileNotFound {
            path: graph_path.to_path_buf(),
            suggestion: "missing".to_string(),
        }
        .into())
    }
}

#[derive(Default)]
struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
    completions: RefCell<Vec<String>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
    fn report_completion(&self, message: &str) {
        self.completions.borrow_mut().push(message.to_string());
    }
}

type TestUseCase<GR> = GenerateSbomUseCase<
    GR,
    MockProgressReporter,
    NpmSpecParser,
    SsriIntegrityParser,
    NpmManifestNormalizer,
>;

fn use_case<GR: GraphReader>(reader: GR) -> TestUseCase<GR> {
    GenerateSbomUseCase::new(
        reader,
        MockProgressReporter::default(),
        GraphProjector::new(NpmSpecParser, SsriIntegrityParser, NpmManifestNormalizer),
    )
}

fn sample_nodes() -> Vec<GraphNode> {
    vec![
        GraphNode::new("app@1.0.0", "app", "1.0.0")
            .as_root()
            .with_edge("left-pad@1.3.0", EdgeKind::Normal),
        GraphNode::new("left-pad@1.3.0", "left-pad", "1.3.0")
            .with_location("node_modules/left-pad"),
        GraphNode::new("orphan@0.1.0", "orphan", "0.1.0")
            .with_location("node_modules/orphan")
            .as_extraneous(),
    ]
}

fn request() -> SbomRequest {
    SbomRequest::new(PathBuf::from("/work/app"), ManagerInfo::npm("10.2.4"))
}

#[test]
fn test_execute_projects_graph() {
    let use_case = use_case(MockGraphReader::new(sample_nodes()));

    let response = use_case
        .execute(request().with_package_type(Some("application".to_string())))
        .unwrap();

    assert_eq!(response.node_count, 3);
    assert_eq!(response.extraneous_count, 1);
    assert_eq!(response.package_count(), 3);
    // DESCRIBES + one edge + one extraneous attachment
    assert_eq!(response.relationship_count(), 3);

    let document = &response.document;
    assert_eq!(document.name, "app@1.0.0");
    assert_eq!(
        document.packages[0].primary_package_purpose.as_deref(),
        Some("APPLICATION")
    );
    assert_eq!(
        document.relationships[2].relationship_type,
        RelationshipType::OptionalDependencyOf
    );
}

#[test]
fn test_execute_reads_default_graph_file() {
    let use_case = use_case(MockGraphReader::new(sample_nodes()));

    use_case.execute(request()).unwrap();

    assert_eq!(
        use_case.graph_reader.requested_path.borrow().as_deref(),
        Some(Path::new("/work/app/npm-graph.json"))
    );
}

#[test]
fn test_execute_reads_explicit_graph_file() {
    let use_case = use_case(MockGraphReader::new(sample_nodes()));

    use_case
        .execute(request().with_graph_path(Some(PathBuf::from("/tmp/graph.json"))))
        .unwrap();

    assert_eq!(
        use_case.graph_reader.requested_path.borrow().as_deref(),
        Some(Path::new("/tmp/graph.json"))
    );
}

#[test]
fn test_execute_reports_progress() {
    let use_case = use_case(MockGraphReader::new(sample_nodes()));

    use_case.execute(request()).unwrap();

    let messages = use_case.progress_reporter.messages.borrow();
    assert!(messages[0].contains("/work/app/npm-graph.json"));
    assert!(messages.iter().any(|m| m.contains("Detected 3 package(s)")));

    let completions = use_case.progress_reporter.completions.borrow();
    assert_eq!(completions.len(), 1);
    assert!(completions[0].contains("3 package(s) and 3 relationship(s)"));

    let errors = use_case.progress_reporter.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("1 extraneous package(s)"));
}

#[test]
fn test_execute_no_extraneous_warning() {
    let nodes = sample_nodes().into_iter().take(2).collect();
    let use_case = use_case(MockGraphReader::new(nodes));

    let response = use_case.execute(request()).unwrap();

    assert_eq!(response.extraneous_count, 0);
    assert!(use_case.progress_reporter.errors.borrow().is_empty());
}

#[test]
fn test_execute_propagates_reader_error() {
    let use_case = use_case(FailingGraphReader);

    let err = use_case.execute(request()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::GraphFileNotFound { .. })
    ));
}

#[test]
fn test_execute_propagates_projection_error() {
    let nodes = vec![GraphNode::new("left-pad@1.3.0", "left-pad", "1.3.0")];
    let use_case = use_case(MockGraphReader::new(nodes));

    let err = use_case.execute(request()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::InvariantViolation { .. })
    ));
}
