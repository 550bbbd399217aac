use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::SpdxDocument;
use crate::shared::Result;

/// SpdxJsonFormatter adapter for the SPDX 2.3 JSON serialization
///
/// Field order follows the declaration order of [`SpdxDocument`], so the
/// same document always renders to the same bytes.
pub struct SpdxJsonFormatter {
    pretty: bool,
}

impl SpdxJsonFormatter {
    /// Pretty-printed output with two-space indentation
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line output
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for SpdxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxJsonFormatter {
    fn format(&self, document: &SpdxDocument) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        Ok(rendered)
    }
}
