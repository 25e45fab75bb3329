//! Curve membership test for address candidates.

use ed25519_dalek::VerifyingKey;

/// Decides whether 32 bytes are the compressed encoding of a curve point.
///
/// This is the only curve operation address derivation needs. A candidate
/// for which this returns `true` could be a public key with a known private
/// key and must never be used as a program derived address.
pub trait CurveMembership {
    /// Returns `true` if `candidate` decodes to a valid point.
    fn is_on_curve(candidate: &[u8; 32]) -> bool;
}

/// The Ed25519 curve used for account signing keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Curve;

impl CurveMembership for Ed25519Curve {
    fn is_on_curve(candidate: &[u8; 32]) -> bool {
        // decoding a verifying key only decompresses the Edwards Y point
        VerifyingKey::from_bytes(candidate).is_ok()
    }
}
