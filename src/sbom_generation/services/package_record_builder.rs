use super::{IdentifierSanitizer, LocatorBuilder};
use crate::ports::outbound::{IntegrityParser, ManifestNormalizer, PackageSpecParser};
use crate::sbom_generation::domain::{
    Checksum, GraphNode, PackageMetadata, SpdxPackage, NO_ASSERTION,
};
use crate::sbom_generation::policies::LicensePriority;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// Per-package options for [`PackageRecordBuilder::build`]
#[derive(Debug, Clone, Default)]
pub struct PackageOptions {
    /// Free-text package type, e.g. "application". Upper-cased into
    /// `primaryPackagePurpose`.
    pub package_type: Option<String>,
}

impl PackageOptions {
    pub fn with_package_type(package_type: Option<&str>) -> Self {
        Self {
            package_type: package_type.map(String::from),
        }
    }
}

/// PackageRecordBuilder service mapping one graph node to an SPDX package entry
pub struct PackageRecordBuilder<'a> {
    locator: LocatorBuilder<'a>,
    integrity_parser: &'a dyn IntegrityParser,
    normalizer: &'a dyn ManifestNormalizer,
}

impl<'a> PackageRecordBuilder<'a> {
    pub fn new(
        spec_parser: &'a dyn PackageSpecParser,
        integrity_parser: &'a dyn IntegrityParser,
        normalizer: &'a dyn ManifestNormalizer,
    ) -> Self {
        Self {
            locator: LocatorBuilder::new(spec_parser),
            integrity_parser,
            normalizer,
        }
    }

    /// Builds the package record for `node`
    ///
    /// # Errors
    /// - [`SbomError::InvalidPackageIdentifier`] if the identifier has no purl form
    /// - [`SbomError::MalformedChecksum`] if the integrity string cannot be decoded
    pub fn build(&self, node: &GraphNode, options: &PackageOptions) -> Result<SpdxPackage> {
        let manifest = self.normalizer.normalize(node);
        let license = self.declared_license(&manifest);

        Ok(SpdxPackage {
            name: node.name().to_string(),
            spdx_id: IdentifierSanitizer::sanitize(node.identifier()),
            version_info: node.version().to_string(),
            package_file_name: node.location().to_string(),
            description: non_empty(manifest.description),
            primary_package_purpose: options
                .package_type
                .as_deref()
                .map(str::to_uppercase),
            download_location: self.locator.download_location(node),
            files_analyzed: false,
            homepage: or_no_assertion(manifest.homepage),
            license_declared: or_no_assertion(license),
            external_refs: self.locator.external_refs(node)?,
            checksums: self.checksums(node)?,
        })
    }

    fn declared_license(&self, manifest: &PackageMetadata) -> Option<String> {
        LicensePriority::select_license(manifest.license.as_ref(), &manifest.licenses)
    }

    /// One checksum for nodes with an integrity value, None (no field) otherwise
    fn checksums(&self, node: &GraphNode) -> Result<Option<Vec<Checksum>>> {
        let Some(integrity) = node.integrity() else {
            return Ok(None);
        };

        let digest = self
            .integrity_parser
            .select(integrity)
            .map_err(|e| SbomError::MalformedChecksum {
                identifier: node.identifier().to_string(),
                details: e.to_string(),
            })?;

        Ok(Some(vec![Checksum {
            algorithm: digest.algorithm().as_str().to_uppercase(),
            checksum_value: digest.hex_digest(),
        }]))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn or_no_assertion(value: Option<String>) -> String {
    non_empty(value).unwrap_or_else(|| NO_ASSERTION.to_string())
}
