/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_style;
mod sbom_request;
mod sbom_response;

pub use output_style::OutputStyle;
pub use sbom_request::{SbomRequest, DEFAULT_GRAPH_FILENAME};
pub use sbom_response::SbomResponse;
