//! Associated token account addresses.
//!
//! An associated token account is the canonical program address of the
//! associated token account program for the seeds
//! `[wallet, token program, mint]`.

use crate::error::DerivationError;
use crate::search::{find_program_address, Bump};
use crate::PublicKey;

/// The classic token program, `TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`.
pub const TOKEN_PROGRAM_ID: PublicKey = PublicKey::new_from_array([
    6, 221, 246, 225, 215, 101, 161, 147, 217, 203, 225, 70, 206, 235, 121, 172, 28, 180, 133, 237,
    95, 91, 55, 145, 58, 140, 245, 133, 126, 255, 0, 169,
]);

/// The associated token account program, `ATokenGPvbdGVxr1b2hvZbsiqW5xWJ8Anuj8VotK7P1`.
pub const ASSOCIATED_TOKEN_PROGRAM_ID: PublicKey = PublicKey::new_from_array([
    2, 108, 137, 121, 164, 168, 90, 167, 122, 102, 145, 239, 13, 152, 132, 165, 145, 217, 212, 51,
    52, 83, 236, 58, 126, 69, 161, 73, 11, 214, 30, 20,
]);

/// Finds the associated token account of `wallet` for `mint` under the
/// classic token program.
///
/// # Errors
/// - [`DerivationError::NoViableAddress`] if no bump yields an off-curve address
pub fn find_associated_token_address(
    wallet: &PublicKey,
    mint: &PublicKey,
) -> Result<(PublicKey, Bump), DerivationError> {
    find_associated_token_address_with_program_id(wallet, mint, &TOKEN_PROGRAM_ID)
}

/// Finds the associated token account of `wallet` for `mint` owned by
/// `token_program_id`.
///
/// # Errors
/// - [`DerivationError::NoViableAddress`] if no bump yields an off-curve address
pub fn find_associated_token_address_with_program_id(
    wallet: &PublicKey,
    mint: &PublicKey,
    token_program_id: &PublicKey,
) -> Result<(PublicKey, Bump), DerivationError> {
    find_program_address(
        &[wallet.as_ref(), token_program_id.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
}
