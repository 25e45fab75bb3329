//! Single-attempt derivation of a program address.

use sha2::{Digest, Sha256};

use crate::curve::{CurveMembership, Ed25519Curve};
use crate::error::DerivationError;
use crate::{PublicKey, MAX_SEEDS, MAX_SEED_LEN, PDA_MARKER};

/// Derives the program address for `seeds` under `program_id`.
///
/// The address is the SHA-256 digest of the seeds, concatenated in order,
/// followed by the program id and the `"ProgramDerivedAddress"` marker.
///
/// # Errors
/// - [`DerivationError::SeedCountExceeded`] for more than [`MAX_SEEDS`] seeds
/// - [`DerivationError::SeedTooLong`] for a seed longer than [`MAX_SEED_LEN`]
/// - [`DerivationError::OnCurve`] when the digest is a valid Ed25519 point
pub fn create_program_address(
    seeds: &[&[u8]],
    program_id: &PublicKey,
) -> Result<PublicKey, DerivationError> {
    create_program_address_with::<Ed25519Curve>(seeds, program_id)
}

/// [`create_program_address`] with a caller-chosen curve membership test.
///
/// # Errors
/// Same as [`create_program_address`].
pub fn create_program_address_with<C: CurveMembership>(
    seeds: &[&[u8]],
    program_id: &PublicKey,
) -> Result<PublicKey, DerivationError> {
    validate_seeds(seeds)?;

    let mut hasher = Sha256::new();
    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update(program_id.as_ref());
    hasher.update(PDA_MARKER);
    let candidate: [u8; 32] = hasher.finalize().into();

    if C::is_on_curve(&candidate) {
        return Err(DerivationError::OnCurve);
    }
    Ok(PublicKey::new_from_array(candidate))
}

fn validate_seeds(seeds: &[&[u8]]) -> Result<(), DerivationError> {
    if seeds.len() > MAX_SEEDS {
        return Err(DerivationError::SeedCountExceeded {
            count: seeds.len(),
            max: MAX_SEEDS,
        });
    }
    if let Some((index, seed)) = seeds
        .iter()
        .enumerate()
        .find(|(_, seed)| seed.len() > MAX_SEED_LEN)
    {
        return Err(DerivationError::SeedTooLong {
            index,
            len: seed.len(),
            max: MAX_SEED_LEN,
        });
    }
    Ok(())
}
