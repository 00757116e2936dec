use msgforge::generator;
use msgforge::template::substitute_with;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_number_between_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let value: i64 = generator::number_between(&mut rng, 10, 20).parse().unwrap();
        assert!((10..=20).contains(&value));
    }
}

#[test]
fn test_number_between_swaps_reversed_bounds() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let value: i64 = generator::number_between(&mut rng, 20, 10).parse().unwrap();
        assert!((10..=20).contains(&value));
    }
}

#[test]
fn test_amount_between_samples_whole_cents() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let result = generator::amount_between(&mut rng, 0.0, 100.0);
        let value: f64 = result.parse().unwrap();
        assert!((0.0..100.0).contains(&value), "got: {}", result);
        let fraction = result.split_once('.').map(|(_, f)| f).unwrap();
        assert_eq!(fraction.len(), 2);
    }
}

#[test]
fn test_amount_between_degenerate_range() {
    let mut rng = StdRng::seed_from_u64(42);
    assert_eq!(generator::amount_between(&mut rng, 5.5, 5.5), "5.50");
}

#[test]
fn test_alphanumeric_length_and_charset() {
    let mut rng = StdRng::seed_from_u64(42);

    assert_eq!(generator::alphanumeric(&mut rng, 0), "");
    assert_eq!(generator::alphanumeric(&mut rng, -1), "");
    assert_eq!(generator::alphanumeric(&mut rng, 5000).len(), 1000);

    let value = generator::alphanumeric(&mut rng, 32);
    assert_eq!(value.len(), 32);
    assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_name_pools_are_large_enough() {
    assert!(generator::FIRST_NAMES.len() >= 24);
    assert!(generator::LAST_NAMES.len() >= 24);
}

#[test]
fn test_email_uses_pool_names() {
    let mut rng = StdRng::seed_from_u64(7);

    let email = generator::email(&mut rng);
    let (local, domain) = email.split_once('@').unwrap();
    let (first, last) = local.split_once('.').unwrap();

    assert!(generator::FIRST_NAMES.iter().any(|n| n.to_lowercase() == first));
    assert!(generator::LAST_NAMES.iter().any(|n| n.to_lowercase() == last));
    assert!(generator::EMAIL_DOMAINS.contains(&domain));
}

#[test]
fn test_seeded_substitution_is_reproducible() {
    let template = "${ID} ${NUMBER:1-100} ${AMOUNT:10-1000} ${NAME} ${EMAIL} ${PHONE} ${STRING:12}";

    let mut a = StdRng::seed_from_u64(1234);
    let mut b = StdRng::seed_from_u64(1234);
    assert_eq!(substitute_with(&mut a, template), substitute_with(&mut b, template));
}

#[test]
fn test_different_seeds_diverge() {
    let template = "${ID}-${STRING:24}";

    let mut a = StdRng::seed_from_u64(1);
    let mut b = StdRng::seed_from_u64(2);
    assert_ne!(substitute_with(&mut a, template), substitute_with(&mut b, template));
}

#[test]
fn test_consecutive_seeded_calls_are_independent() {
    let mut rng = StdRng::seed_from_u64(99);
    let first = substitute_with(&mut rng, "${ID}");
    let second = substitute_with(&mut rng, "${ID}");
    assert_ne!(first, second);
}
