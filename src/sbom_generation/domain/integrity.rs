/// Hash algorithms understood in integrity strings, ordered weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sha1" => Some(HashAlgorithm::Sha1),
            "sha256" => Some(HashAlgorithm::Sha256),
            "sha384" => Some(HashAlgorithm::Sha384),
            "sha512" => Some(HashAlgorithm::Sha512),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Digest length in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }
}

/// One decoded algorithm/digest pair from an integrity string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityDigest {
    algorithm: HashAlgorithm,
    digest: Vec<u8>,
}

impl IntegrityDigest {
    pub fn new(algorithm: HashAlgorithm, digest: Vec<u8>) -> Self {
        Self { algorithm, digest }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Lowercase hex rendering of the digest
    pub fn hex_digest(&self) -> String {
        hex::encode(&self.digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_ordering() {
        assert!(HashAlgorithm::Sha512 > HashAlgorithm::Sha384);
        assert!(HashAlgorithm::Sha384 > HashAlgorithm::Sha256);
        assert!(HashAlgorithm::Sha256 > HashAlgorithm::Sha1);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(HashAlgorithm::from_name("sha512"), Some(HashAlgorithm::Sha512));
        assert_eq!(HashAlgorithm::from_name("SHA512"), None);
        assert_eq!(HashAlgorithm::from_name("md5"), None);
    }

    #[test]
    fn test_hex_digest_lowercase() {
        let digest = IntegrityDigest::new(HashAlgorithm::Sha1, vec![0xAB, 0x01, 0xFF]);
        assert_eq!(digest.hex_digest(), "ab01ff");
    }
}
