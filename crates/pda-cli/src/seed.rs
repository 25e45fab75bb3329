use core::str::FromStr;

/// A seed given on the command line.
///
/// Accepts `hex:<digits>`, `b58:<base58>` and `utf8:<text>`; anything
/// without a known prefix is taken as UTF-8 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Seed(pub(crate) Vec<u8>);

#[derive(Debug, thiserror::Error)]
pub(crate) enum SeedError {
    #[error("invalid hex seed: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid base58 seed: {0}")]
    Base58(#[from] bs58::decode::Error),
}

impl FromStr for Seed {
    type Err = SeedError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let bytes = if let Some(digits) = text.strip_prefix("hex:") {
            hex::decode(digits.strip_prefix("0x").unwrap_or(digits))?
        } else if let Some(encoded) = text.strip_prefix("b58:") {
            bs58::decode(encoded).into_vec()?
        } else {
            text.strip_prefix("utf8:")
                .unwrap_or(text)
                .as_bytes()
                .to_vec()
        };
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
