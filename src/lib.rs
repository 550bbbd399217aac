//! npm-spdx-sbom - SPDX 2.3 SBOM generation from resolved npm dependency graphs
//!
//! This library projects a resolved npm install tree onto an SPDX 2.3 JSON
//! document, following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Graph model, SPDX model and the projection services
//! - **Application Layer** (`application`): Use cases, DTOs and adapter factories
//! - **Ports** (`ports`): Interface definitions for infrastructure and npm capabilities
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use npm_spdx_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let projector = GraphProjector::new(NpmSpecParser, SsriIntegrityParser, NpmManifestNormalizer);
//! let use_case = GenerateSbomUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//!     projector,
//! );
//!
//! let request = SbomRequest::new(PathBuf::from("."), ManagerInfo::npm("10.2.4"));
//! let response = use_case.execute(request)?;
//!
//! let output = SpdxJsonFormatter::new().format(&response.document)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::SpdxJsonFormatter;
    pub use crate::adapters::outbound::npm::{
        NpmManifestNormalizer, NpmSpecParser, SsriIntegrityParser,
    };
    pub use crate::application::dto::{OutputStyle, SbomRequest, SbomResponse};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::outbound::{
        GraphReader, IntegrityParser, ManifestNormalizer, OutputPresenter, PackageSpecParser,
        ProgressReporter, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        DependencyGraph, Edge, EdgeKind, GraphNode, ManagerInfo, PackageMetadata,
        RelationshipType, SpdxDocument, SpdxPackage, SpdxRelationship,
    };
    pub use crate::sbom_generation::services::{GraphProjector, DEFAULT_NAMESPACE_BASE};
    pub use crate::shared::error::{ExitCode, SbomError};
    pub use crate::shared::Result;
}
