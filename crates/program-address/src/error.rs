//! Error types returned by address derivation and key parsing.

/// Failure of a single derivation attempt or of the canonical bump search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DerivationError {
    /// More seeds were supplied than a derivation accepts.
    #[error("too many seeds for address derivation: got {count}, at most {max} allowed")]
    SeedCountExceeded {
        /// Number of seeds supplied, including the bump seed during a search.
        count: usize,
        /// Upper bound on the number of seeds.
        max: usize,
    },

    /// One of the seeds is longer than a single seed may be.
    #[error("seed {index} is {len} bytes long, at most {max} bytes allowed")]
    SeedTooLong {
        /// Position of the offending seed.
        index: usize,
        /// Its length in bytes.
        len: usize,
        /// Upper bound on a seed's length.
        max: usize,
    },

    /// The candidate address is a valid curve point and could have a private key.
    #[error("invalid seeds, address must fall off the curve")]
    OnCurve,

    /// Every bump from 255 down to 1 produced an on-curve candidate.
    #[error("unable to find a viable program address")]
    NoViableAddress,
}

/// Failure to turn text or bytes into a [`crate::PublicKey`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PublicKeyError {
    /// The input is not valid hexadecimal.
    #[error("invalid hex public key: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The input is not valid Base58.
    #[error("invalid base58 public key: {0}")]
    InvalidBase58(#[from] bs58::decode::Error),

    /// The decoded value does not have the length of a public key.
    #[error("public key must be {expected} bytes, got {actual}")]
    WrongSize {
        /// Required length.
        expected: usize,
        /// Decoded length.
        actual: usize,
    },
}
