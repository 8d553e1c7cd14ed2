use std::fmt;
use std::str::FromStr;

/// A 20-byte account address.
///
/// Stored as raw bytes so two spellings of the same address compare equal
/// regardless of hex casing. `Display` renders `0x` + lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

/// Error type for address parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AddressParseError {
    /// The string does not start with `0x`.
    #[error("address must start with 0x")]
    MissingPrefix,
    /// Wrong number of hex digits after the prefix.
    #[error("address must be 40 hex digits, got {0}")]
    BadLength(usize),
    /// A non-hex character appeared in the digit run.
    #[error("address contains non-hex characters")]
    InvalidHex,
}

impl Address {
    /// Parse a `0x`-prefixed, 40-hex-digit address string.
    ///
    /// Syntactic validation only; mixed-case input is accepted and no
    /// checksum is required.
    pub fn parse(s: &str) -> Result<Self, AddressParseError> {
        let digits = s
            .strip_prefix("0x")
            .ok_or(AddressParseError::MissingPrefix)?;
        if digits.len() != 40 {
            return Err(AddressParseError::BadLength(digits.len()));
        }

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| AddressParseError::InvalidHex)?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
