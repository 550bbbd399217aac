mod graph_projector;
mod identifier_sanitizer;
mod locator_builder;
mod package_record_builder;
mod relationship_classifier;
mod sbom_generator;

pub use graph_projector::{GraphProjector, DEFAULT_NAMESPACE_BASE};
pub use identifier_sanitizer::IdentifierSanitizer;
pub use locator_builder::LocatorBuilder;
pub use package_record_builder::{PackageOptions, PackageRecordBuilder};
pub use relationship_classifier::RelationshipClassifier;
pub use sbom_generator::SbomGenerator;
