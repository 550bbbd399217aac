//! SPDX 2.3 document model
//!
//! Field names follow the SPDX JSON schema so the document serializes
//! directly with serde.

use serde::{Deserialize, Serialize};

pub const SPDX_VERSION: &str = "SPDX-2.3";
pub const SPDX_DATA_LICENSE: &str = "CC0-1.0";
pub const SPDX_DOCUMENT_ID: &str = "SPDXRef-DOCUMENT";
pub const NO_ASSERTION: &str = "NOASSERTION";

/// Relationship types emitted by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    Describes,
    DependsOn,
    HasPrerequisite,
    OptionalDependencyOf,
    DevDependencyOf,
}

impl RelationshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Describes => "DESCRIBES",
            RelationshipType::DependsOn => "DEPENDS_ON",
            RelationshipType::HasPrerequisite => "HAS_PREREQUISITE",
            RelationshipType::OptionalDependencyOf => "OPTIONAL_DEPENDENCY_OF",
            RelationshipType::DevDependencyOf => "DEV_DEPENDENCY_OF",
        }
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxRelationship {
    pub spdx_element_id: String,
    pub related_spdx_element: String,
    pub relationship_type: RelationshipType,
}

impl SpdxRelationship {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        relationship_type: RelationshipType,
    ) -> Self {
        Self {
            spdx_element_id: from.into(),
            related_spdx_element: to.into(),
            relationship_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRef {
    pub reference_category: String,
    pub reference_type: String,
    pub reference_locator: String,
}

impl ExternalRef {
    /// A `PACKAGE-MANAGER` / `purl` reference
    pub fn purl(locator: impl Into<String>) -> Self {
        Self {
            reference_category: "PACKAGE-MANAGER".to_string(),
            reference_type: "purl".to_string(),
            reference_locator: locator.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checksum {
    pub algorithm: String,
    pub checksum_value: String,
}

/// One `packages[]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxPackage {
    pub name: String,
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub version_info: String,
    pub package_file_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub primary_package_purpose: Option<String>,
    pub download_location: String,
    pub files_analyzed: bool,
    pub homepage: String,
    pub license_declared: String,
    pub external_refs: Vec<ExternalRef>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub checksums: Option<Vec<Checksum>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationInfo {
    pub created: String,
    pub creators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxDocument {
    pub spdx_version: String,
    pub data_license: String,
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub name: String,
    pub document_namespace: String,
    pub creation_info: CreationInfo,
    pub document_describes: Vec<String>,
    pub packages: Vec<SpdxPackage>,
    pub relationships: Vec<SpdxRelationship>,
}

impl SpdxDocument {
    pub fn package(&self, spdx_id: &str) -> Option<&SpdxPackage> {
        self.packages.iter().find(|p| p.spdx_id == spdx_id)
    }
}
