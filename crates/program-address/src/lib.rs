//! Derivation of program derived addresses.
//!
//! # Overview
//!
//! A program derived address is an account address computed from a program
//! id and a list of seeds. It is the SHA-256 digest of the seeds, the program
//! id and a fixed marker, and it is only accepted when the digest does not
//! decode to an Ed25519 point, so no private key can ever sign for it.
//!
//! # Usage
//!
//! - [`create_program_address`] performs a single derivation and fails with
//!   [`DerivationError::OnCurve`] when the digest lands on the curve.
//! - [`find_program_address`] appends a bump byte and searches from 255
//!   downward for the canonical off-curve address.
//! - [`find_associated_token_address`] derives the associated token account
//!   of a wallet for a mint.

pub mod associated;
pub mod curve;
pub mod derive;
pub mod error;
pub mod pubkey;
pub mod search;

pub use associated::{
    find_associated_token_address, find_associated_token_address_with_program_id,
    ASSOCIATED_TOKEN_PROGRAM_ID, TOKEN_PROGRAM_ID,
};
pub use curve::{CurveMembership, Ed25519Curve};
pub use derive::{create_program_address, create_program_address_with};
pub use error::{DerivationError, PublicKeyError};
pub use pubkey::{PublicKey, PUBKEY_BYTES};
pub use search::{find_program_address, find_program_address_with, Bump};

/// Maximum length of a single seed in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// Maximum number of seeds in a single derivation, bump included.
pub const MAX_SEEDS: usize = 16;

/// Domain separation marker hashed after the program id.
pub const PDA_MARKER: &[u8; 21] = b"ProgramDerivedAddress";
