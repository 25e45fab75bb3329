//! # Public Key Module
//!
//! Defines the 32 byte [`PublicKey`] used both for real account keys and for
//! program derived addresses, together with the helpers that turn boundary
//! input (raw bytes, hex text, Base58 text) into one.
//!
//! The `*_lossy` constructors never fail on length: shorter input is
//! left-padded with zeros and longer input is truncated. Callers handing in
//! malformed data get a different key back without an error, so prefer the
//! strict [`core::str::FromStr`] implementation wherever input is untrusted.

use core::fmt;
use core::str::FromStr;

use crate::curve::{CurveMembership, Ed25519Curve};
use crate::error::PublicKeyError;

/// Number of bytes in a public key.
pub const PUBKEY_BYTES: usize = 32;

/// Represents an account address: an Ed25519 public key or a program derived address.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct PublicKey([u8; PUBKEY_BYTES]);

impl PublicKey {
    /// The all-zero key.
    pub const ZERO: Self = Self([0; PUBKEY_BYTES]);

    /// Wraps raw key bytes.
    #[must_use]
    pub const fn new_from_array(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }

    /// Returns the raw key bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; PUBKEY_BYTES] {
        self.0
    }

    /// Borrows the raw key bytes.
    #[must_use]
    pub const fn as_array(&self) -> &[u8; PUBKEY_BYTES] {
        &self.0
    }

    /// Builds a key from an arbitrary byte slice.
    ///
    /// Keeps the first 32 bytes of longer input and left-pads shorter input
    /// with zeros.
    #[must_use]
    pub fn from_bytes_lossy(bytes: &[u8]) -> Self {
        let bytes = bytes.get(..PUBKEY_BYTES).unwrap_or(bytes);
        let mut key = [0_u8; PUBKEY_BYTES];
        let (_, tail) = key.split_at_mut(PUBKEY_BYTES.saturating_sub(bytes.len()));
        tail.copy_from_slice(bytes);
        Self(key)
    }

    /// Builds a key from hex text, with or without a `0x` prefix.
    ///
    /// An odd number of digits is read as if it had a leading `0`. Values
    /// longer than 32 bytes keep their last 32 bytes, shorter values are
    /// left-padded with zeros.
    ///
    /// # Errors
    /// - the text contains a character that is not a hex digit
    pub fn from_hex_lossy(text: &str) -> Result<Self, PublicKeyError> {
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        let decoded = if digits.len() & 1 == 1 {
            hex::decode(format!("0{digits}"))?
        } else {
            hex::decode(digits)?
        };
        let tail = decoded
            .len()
            .checked_sub(PUBKEY_BYTES)
            .and_then(|start| decoded.get(start..))
            .unwrap_or(decoded.as_slice());
        Ok(Self::from_bytes_lossy(tail))
    }

    /// Builds a key from Base58 text, padding or truncating like
    /// [`PublicKey::from_bytes_lossy`].
    ///
    /// # Errors
    /// - the text is not valid Base58
    pub fn from_base58_lossy(text: &str) -> Result<Self, PublicKeyError> {
        let decoded = bs58::decode(text).into_vec()?;
        Ok(Self::from_bytes_lossy(&decoded))
    }

    /// Encodes the key as Base58 text.
    #[must_use]
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// Whether the key decodes to a point on the Ed25519 curve.
    ///
    /// Program derived addresses never do.
    #[must_use]
    pub fn is_on_curve(&self) -> bool {
        Ed25519Curve::is_on_curve(&self.0)
    }
}

impl From<[u8; PUBKEY_BYTES]> for PublicKey {
    fn from(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }
}

impl From<PublicKey> for [u8; PUBKEY_BYTES] {
    fn from(key: PublicKey) -> Self {
        key.0
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = PublicKeyError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; PUBKEY_BYTES]>::try_from(bytes)
            .map(Self)
            .map_err(|_| PublicKeyError::WrongSize {
                expected: PUBKEY_BYTES,
                actual: bytes.len(),
            })
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for PublicKey {
    type Err = PublicKeyError;

    /// Strict Base58 parse: the text must decode to exactly 32 bytes.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let decoded = bs58::decode(text).into_vec()?;
        Self::try_from(decoded.as_slice())
    }
}

#[allow(clippy::min_ident_chars)]
impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

#[allow(clippy::min_ident_chars)]
impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}
