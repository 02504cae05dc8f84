//! String hashing with BLAKE3 or the std `DefaultHasher`.

use std::collections::hash_map::DefaultHasher;
use std::ffi::CStr;
use std::fmt;
use std::hash::Hasher;

use tracing::debug;

use crate::error::{AlgoError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgoType {
    Default,
    Blake3,
}

impl AlgoType {
    /// Resolve a user-facing name. Only the exact name "blake3" selects
    /// `Blake3`; anything else, including "", selects `Default`.
    pub fn from_name(name: &str) -> Self {
        if name == "blake3" {
            AlgoType::Blake3
        } else {
            AlgoType::Default
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AlgoType::Default => "Default",
            AlgoType::Blake3 => "Blake3",
        }
    }

    /// Wire code accepted by `TryFrom<u8>`.
    pub fn code(self) -> u8 {
        match self {
            AlgoType::Default => 0,
            AlgoType::Blake3 => 1,
        }
    }

    /// Static name for handing out across the C boundary.
    pub(crate) fn c_name(self) -> &'static CStr {
        match self {
            AlgoType::Default => c"Default",
            AlgoType::Blake3 => c"Blake3",
        }
    }
}

impl TryFrom<u8> for AlgoType {
    type Error = AlgoError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(AlgoType::Default),
            1 => Ok(AlgoType::Blake3),
            other => Err(AlgoError::invalid(format!("unknown hash algorithm {other}"))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Algo {
    kind: AlgoType,
}

impl Algo {
    pub fn new(kind: AlgoType) -> Self {
        Self { kind }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Hash `data` and render the digest as text.
    ///
    /// Blake3 yields 64 lowercase hex characters. Default yields the decimal
    /// `u64` of `DefaultHasher` fed the bytes and a trailing `0xff`, the same
    /// sequence `str`'s `Hash` impl writes.
    pub fn hash(&self, data: &[u8]) -> String {
        debug!(algo = self.name(), len = data.len(), "hash");
        match self.kind {
            AlgoType::Blake3 => blake3::hash(data).to_hex().to_string(),
            AlgoType::Default => {
                let mut hasher = DefaultHasher::new();
                hasher.write(data);
                hasher.write_u8(0xff);
                hasher.finish().to_string()
            }
        }
    }
}

impl fmt::Display for Algo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Algo:{}>", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blake3_known_digest() {
        let algo = Algo::new(AlgoType::Blake3);
        assert_eq!(
            algo.hash(b"hello world"),
            "d74981efa70a0c880b8d8c1985d075dbcbf679b99a5f9914e5aaf96b831a9e24"
        );
    }

    #[test]
    fn test_default_known_digest() {
        let algo = Algo::new(AlgoType::Default);
        assert_eq!(algo.hash(b"hello world"), "8170069951894177743");
        assert_ne!(algo.hash(b"hello world"), algo.hash(b"hello world!"));
    }

    #[test]
    fn test_default_matches_str_hash() {
        use std::hash::Hash;

        let mut hasher = DefaultHasher::new();
        "hello world".hash(&mut hasher);
        assert_eq!(
            Algo::new(AlgoType::Default).hash(b"hello world"),
            hasher.finish().to_string()
        );
    }

    #[test]
    fn test_from_name() {
        assert_eq!(AlgoType::from_name("blake3"), AlgoType::Blake3);
        assert_eq!(AlgoType::from_name("BLAKE3"), AlgoType::Default);
        assert_eq!(AlgoType::from_name("Blake3"), AlgoType::Default);
        assert_eq!(AlgoType::from_name(""), AlgoType::Default);
        assert_eq!(AlgoType::from_name("sha256"), AlgoType::Default);
    }

    #[test]
    fn test_try_from_code() {
        assert_eq!(AlgoType::try_from(0), Ok(AlgoType::Default));
        assert_eq!(AlgoType::try_from(1), Ok(AlgoType::Blake3));
        for kind in [AlgoType::Default, AlgoType::Blake3] {
            assert_eq!(AlgoType::try_from(kind.code()), Ok(kind));
        }
        assert!(matches!(
            AlgoType::try_from(7),
            Err(AlgoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Algo::new(AlgoType::Blake3).to_string(), "<Algo:Blake3>");
        assert_eq!(Algo::new(AlgoType::Default).name(), "Default");
    }
}
