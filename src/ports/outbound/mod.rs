/// Outbound ports (Driven ports) - Infrastructure and capability interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems and ecosystem-specific parsers.
pub mod formatter;
pub mod graph_reader;
pub mod integrity_parser;
pub mod manifest_normalizer;
pub mod output_presenter;
pub mod package_spec_parser;
pub mod progress_reporter;

pub use formatter::SbomFormatter;
pub use graph_reader::GraphReader;
pub use integrity_parser::IntegrityParser;
pub use manifest_normalizer::ManifestNormalizer;
pub use output_presenter::OutputPresenter;
pub use package_spec_parser::PackageSpecParser;
pub use progress_reporter::ProgressReporter;
