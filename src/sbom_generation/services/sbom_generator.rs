use crate::sbom_generation::domain::{ManagerInfo, SbomMetadata};
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// SbomGenerator service for the per-call document metadata
///
/// The only place that reads the clock or the random source.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates metadata with the current UTC timestamp and a fresh UUID v4 token
    ///
    /// The timestamp uses millisecond precision and a `Z` suffix,
    /// e.g. `2024-05-01T12:00:00.000Z`.
    pub fn generate_metadata(manager: &ManagerInfo) -> SbomMetadata {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let namespace_token = Uuid::new_v4().to_string();

        SbomMetadata::new(timestamp, manager.tool_creator(), namespace_token)
    }
}
