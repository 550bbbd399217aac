use crate::ports::outbound::IntegrityParser;
use crate::sbom_generation::domain::{HashAlgorithm, IntegrityDigest};
use crate::sbom_generation::policies::ChecksumPriority;
use crate::shared::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// SsriIntegrityParser adapter for Subresource Integrity strings
///
/// An integrity string is a whitespace-separated list of `<algo>-<base64>`
/// entries, each optionally followed by `?<options>`. Entries with an
/// unknown algorithm or an undecodable digest are skipped the way ssri
/// skips them; the strongest remaining entry is selected.
#[derive(Debug, Clone, Copy, Default)]
pub struct SsriIntegrityParser;

impl SsriIntegrityParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_entry(entry: &str) -> Option<IntegrityDigest> {
        let (algorithm, rest) = entry.split_once('-')?;
        let algorithm = HashAlgorithm::from_name(algorithm)?;
        let encoded = rest.split('?').next().unwrap_or(rest);

        let digest = STANDARD.decode(encoded).ok()?;
        if digest.len() != algorithm.digest_len() {
            return None;
        }

        Some(IntegrityDigest::new(algorithm, digest))
    }
}

impl IntegrityParser for SsriIntegrityParser {
    fn select(&self, integrity: &str) -> Result<IntegrityDigest> {
        if integrity.trim().is_empty() {
            anyhow::bail!("integrity string is empty");
        }

        let candidates: Vec<IntegrityDigest> = integrity
            .split_whitespace()
            .filter_map(Self::parse_entry)
            .collect();

        ChecksumPriority::select(candidates).ok_or_else(|| {
            anyhow::anyhow!(
                "no entry with a supported algorithm and a valid digest in '{}'",
                integrity
            )
        })
    }
}
