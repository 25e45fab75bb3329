//! Canonical bump search.

use crate::curve::{CurveMembership, Ed25519Curve};
use crate::derive::create_program_address_with;
use crate::error::DerivationError;
use crate::PublicKey;

/// The trailing seed byte that moves a candidate off the curve.
pub type Bump = u8;

/// Finds the canonical program address for `seeds` under `program_id`.
///
/// Appends a single bump byte to the seeds and tries bumps from 255 down to
/// 1, returning the first off-curve address together with its bump. Bump 0
/// is never tried.
///
/// # Errors
/// - [`DerivationError::SeedCountExceeded`] if the seeds plus the bump exceed [`crate::MAX_SEEDS`]
/// - [`DerivationError::SeedTooLong`] for any seed longer than [`crate::MAX_SEED_LEN`]
/// - [`DerivationError::NoViableAddress`] if every bump lands on the curve
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &PublicKey,
) -> Result<(PublicKey, Bump), DerivationError> {
    find_program_address_with::<Ed25519Curve>(seeds, program_id)
}

/// [`find_program_address`] with a caller-chosen curve membership test.
///
/// # Errors
/// Same as [`find_program_address`].
pub fn find_program_address_with<C: CurveMembership>(
    seeds: &[&[u8]],
    program_id: &PublicKey,
) -> Result<(PublicKey, Bump), DerivationError> {
    let mut bump = Bump::MAX;
    while bump != 0 {
        let bump_seed = [bump];
        let mut seeds_with_bump = seeds.to_vec();
        seeds_with_bump.push(&bump_seed);
        let attempt = create_program_address_with::<C>(&seeds_with_bump, program_id);

        match attempt {
            Ok(address) => {
                tracing::debug!(%address, bump, %program_id, "found canonical program address");
                return Ok((address, bump));
            }
            Err(DerivationError::OnCurve) => {
                tracing::trace!(bump, "candidate on curve, trying next bump");
            }
            Err(err) => return Err(err),
        }
        bump -= 1;
    }

    tracing::warn!(%program_id, "exhausted all bumps without an off-curve address");
    Err(DerivationError::NoViableAddress)
}
