use crate::sbom_generation::domain::IntegrityDigest;

/// ChecksumPriority policy for picking one digest out of a multi-hash integrity string
///
/// Priority order:
/// 1. strongest algorithm (sha512 > sha384 > sha256 > sha1)
/// 2. for the same algorithm, the entry that appears first
pub struct ChecksumPriority;

impl ChecksumPriority {
    /// Selects the preferred digest, or None when there are no candidates
    pub fn select(candidates: Vec<IntegrityDigest>) -> Option<IntegrityDigest> {
        let mut selected: Option<IntegrityDigest> = None;
        for candidate in candidates {
            match &selected {
                Some(current) if current.algorithm() >= candidate.algorithm() => {}
                _ => selected = Some(candidate),
            }
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::HashAlgorithm;

    #[test]
    fn test_select_strongest() {
        let candidates = vec![
            IntegrityDigest::new(HashAlgorithm::Sha1, vec![1; 20]),
            IntegrityDigest::new(HashAlgorithm::Sha512, vec![2; 64]),
            IntegrityDigest::new(HashAlgorithm::Sha256, vec![3; 32]),
        ];
        let selected = ChecksumPriority::select(candidates).unwrap();
        assert_eq!(selected.algorithm(), HashAlgorithm::Sha512);
    }

    #[test]
    fn test_select_first_of_same_algorithm() {
        let candidates = vec![
            IntegrityDigest::new(HashAlgorithm::Sha512, vec![0xaa; 64]),
            IntegrityDigest::new(HashAlgorithm::Sha512, vec![0xbb; 64]),
        ];
        let selected = ChecksumPriority::select(candidates).unwrap();
        assert_eq!(selected.digest()[0], 0xaa);
    }

    #[test]
    fn test_select_empty() {
        assert!(ChecksumPriority::select(vec![]).is_none());
    }
}
