//! Properties that hold for arbitrary seeds and program ids.

use pretty_assertions::assert_eq;
use program_address::{
    create_program_address, find_associated_token_address, find_program_address, DerivationError,
    PublicKey, ASSOCIATED_TOKEN_PROGRAM_ID, MAX_SEED_LEN, TOKEN_PROGRAM_ID,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

fn random_seeds(rng: &mut StdRng) -> Vec<Vec<u8>> {
    let count = rng.gen_range(0..=15);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..=MAX_SEED_LEN);
            (0..len).map(|_| rng.gen()).collect()
        })
        .collect()
}

fn random_key(rng: &mut StdRng) -> PublicKey {
    PublicKey::new_from_array(rng.gen())
}

fn as_slices(seeds: &[Vec<u8>]) -> Vec<&[u8]> {
    seeds.iter().map(Vec::as_slice).collect()
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn derivation_is_deterministic(#[case] rng_seed: u64) {
    let mut rng = StdRng::seed_from_u64(rng_seed);
    for _ in 0..32 {
        let seeds = random_seeds(&mut rng);
        let seeds = as_slices(&seeds);
        let program_id = random_key(&mut rng);

        assert_eq!(
            create_program_address(&seeds, &program_id),
            create_program_address(&seeds, &program_id)
        );
        assert_eq!(
            find_program_address(&seeds, &program_id),
            find_program_address(&seeds, &program_id)
        );
    }
}

#[test]
fn program_id_separates_domains() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..32 {
        let seeds = random_seeds(&mut rng);
        let seeds = as_slices(&seeds);
        let first = find_program_address(&seeds, &random_key(&mut rng)).unwrap();
        let second = find_program_address(&seeds, &random_key(&mut rng)).unwrap();
        assert_ne!(first.0, second.0);
    }
}

#[test]
fn returned_addresses_are_off_curve() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut single_attempt_successes = 0;
    for _ in 0..128 {
        let seeds = random_seeds(&mut rng);
        let seeds = as_slices(&seeds);
        let program_id = random_key(&mut rng);

        match create_program_address(&seeds, &program_id) {
            Ok(address) => {
                assert!(!address.is_on_curve());
                single_attempt_successes += 1;
            }
            Err(err) => assert_eq!(err, DerivationError::OnCurve),
        }
        let (address, _) = find_program_address(&seeds, &program_id).unwrap();
        assert!(!address.is_on_curve());
    }
    // roughly half of all digests land on the curve
    assert!(single_attempt_successes > 0);
    assert!(single_attempt_successes < 128);
}

#[test]
fn no_higher_bump_succeeds() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..32 {
        let seeds = random_seeds(&mut rng);
        let program_id = random_key(&mut rng);
        let prefix = as_slices(&seeds);
        let (address, bump) = find_program_address(&prefix, &program_id).unwrap();
        assert_ne!(bump, 0);

        let canonical = [bump];
        let mut with_bump = prefix.clone();
        with_bump.push(&canonical);
        assert_eq!(create_program_address(&with_bump, &program_id), Ok(address));

        for higher in (bump..=u8::MAX).skip(1) {
            let higher = [higher];
            let mut with_bump = prefix.clone();
            with_bump.push(&higher);
            assert_eq!(
                create_program_address(&with_bump, &program_id),
                Err(DerivationError::OnCurve)
            );
        }
    }
}

#[test]
fn associated_address_composes_canonical_search() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..16 {
        let wallet = random_key(&mut rng);
        let mint = random_key(&mut rng);
        assert_eq!(
            find_associated_token_address(&wallet, &mint),
            find_program_address(
                &[wallet.as_ref(), TOKEN_PROGRAM_ID.as_ref(), mint.as_ref()],
                &ASSOCIATED_TOKEN_PROGRAM_ID,
            )
        );
    }
}
