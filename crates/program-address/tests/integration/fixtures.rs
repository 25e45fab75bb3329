//! Addresses pinned against a reference derivation.

use pretty_assertions::assert_eq;
use program_address::{
    create_program_address, find_associated_token_address, find_program_address, PublicKey,
    ASSOCIATED_TOKEN_PROGRAM_ID, TOKEN_PROGRAM_ID,
};

const WALLET: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";
const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
const TOKEN_METADATA_PROGRAM: &str = "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s";
const UPGRADEABLE_LOADER: &str = "BPFLoaderUpgradeab1e11111111111111111111111";

fn key(text: &str) -> PublicKey {
    text.parse().unwrap()
}

#[test_log::test]
fn metadata_address_for_wallet() {
    let wallet = key(WALLET);
    let (address, bump) =
        find_program_address(&[b"metadata", wallet.as_ref()], &key(TOKEN_METADATA_PROGRAM))
            .unwrap();

    assert_eq!(
        address.to_string(),
        "2JfyT6E2eCMvkuBykbCu8UeP8sTFn1XXHTFE8wSXRWhd"
    );
    assert_eq!(bump, 255);
}

#[test_log::test]
fn associated_token_address_for_wallet_and_mint() {
    let (address, bump) = find_associated_token_address(&key(WALLET), &key(USDC_MINT)).unwrap();

    assert_eq!(
        address.to_string(),
        "EpyWJy59xzkR67c6CyLktQX7opkNJkVipTvi8pNqPZVR"
    );
    assert_eq!(bump, 253);
}

#[test]
fn associated_token_address_is_plain_canonical_search() {
    let wallet = key(WALLET);
    let mint = key(USDC_MINT);

    let composed = find_associated_token_address(&wallet, &mint).unwrap();
    let explicit = find_program_address(
        &[wallet.as_ref(), TOKEN_PROGRAM_ID.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
    .unwrap();

    assert_eq!(composed, explicit);
}

#[test]
fn published_talking_squirrels_vector() {
    let address =
        create_program_address(&[b"Talking", b"Squirrels"], &key(UPGRADEABLE_LOADER)).unwrap();
    assert_eq!(
        address.to_string(),
        "2fnQrngrQT4SeLcdToJAD96phoEjNL2man2kfRLCASVk"
    );
}

#[test]
fn maximum_seed_count_and_length_vector() {
    let seeds: Vec<[u8; 32]> = (0..16_u8).map(|i| [i; 32]).collect();
    let seeds: Vec<&[u8]> = seeds.iter().map(|seed| seed.as_slice()).collect();

    let address = create_program_address(&seeds, &key(UPGRADEABLE_LOADER)).unwrap();
    assert_eq!(
        address.to_string(),
        "Es7S5gvey7znAVU5P9whX7NipnNzkY5qySYvqnYKPoXo"
    );
}

#[test]
fn canonical_search_with_bump_below_max() {
    let (address, bump) =
        find_program_address(&[b"Lil'", b"Bits"], &key(UPGRADEABLE_LOADER)).unwrap();

    assert_eq!(
        address.to_string(),
        "H4feCuM8B43jxwbHAsUHDasw1raRkvWF6py4Fx7suB8N"
    );
    assert_eq!(bump, 254);
}
