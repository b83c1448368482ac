mod common;

use common::assert_components;
use keymint_activation::{
    ActivationKeyGenerator, ActivationKeyProperties, ActivationKeySeed, ActivationKeySequence,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[test]
fn fresh_sequence_has_no_last_seed() {
    let sequence = ActivationKeySequence::new(&ActivationKeyProperties::default());
    assert_eq!(sequence.last_seed().unwrap(), None);
}

#[test]
fn issue_advances_by_one() {
    let properties = ActivationKeyProperties::default();
    let sequence = ActivationKeySequence::with_rng(&properties, StdRng::seed_from_u64(1));

    let first = sequence.issue().unwrap();
    let second = sequence.issue().unwrap();
    let third = sequence.issue().unwrap();

    assert_eq!(second.seed().value(), first.seed().value() + 1);
    assert_eq!(third.seed().value(), second.seed().value() + 1);
    assert_eq!(sequence.last_seed().unwrap(), Some(*third.seed()));
}

#[test]
fn resume_continues_after_stored_seed() {
    let properties = ActivationKeyProperties::default();
    let stored = ActivationKeySeed::parse("1000000000").unwrap();
    let sequence = ActivationKeySequence::new(&properties).resume_from(stored);

    assert_eq!(sequence.last_seed().unwrap(), Some(stored));
    let key = sequence.issue().unwrap();
    assert_eq!(key.seed().value(), 1_000_000_001);
}

#[test]
fn issue_with_prefix() {
    let properties = ActivationKeyProperties::default();
    let sequence = ActivationKeySequence::with_rng(&properties, StdRng::seed_from_u64(3));
    let key = sequence.issue_with_prefix("PROD").unwrap();
    assert!(key.value().starts_with("PROD-"));
    assert_components(&key.value()[5..], '-', 4, 4);
}

#[test]
fn failed_issue_keeps_last_seed() {
    let properties = ActivationKeyProperties::default();
    let sequence = ActivationKeySequence::with_rng(&properties, StdRng::seed_from_u64(3));
    let key = sequence.issue().unwrap();

    assert!(sequence.issue_with_prefix("TOOLONG").unwrap_err().is_range_error());
    assert_eq!(sequence.last_seed().unwrap(), Some(*key.seed()));
}

#[test]
fn from_generator_uses_its_shape() {
    let properties = ActivationKeyProperties::new('_', 3, 5).unwrap();
    let generator = ActivationKeyGenerator::with_rng(&properties, StdRng::seed_from_u64(9));
    let sequence = ActivationKeySequence::from_generator(generator);
    let key = sequence.issue().unwrap();
    assert_components(key.value(), '_', 3, 5);
}

#[test]
fn concurrent_issue_is_serialized() {
    let properties = ActivationKeyProperties::default();
    let sequence = Arc::new(
        ActivationKeySequence::new(&properties).resume_from(ActivationKeySeed::new(50_000_000)),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let sequence = Arc::clone(&sequence);
            thread::spawn(move || {
                (0..25)
                    .map(|_| sequence.issue().unwrap().seed().value())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let seeds: HashSet<u128> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();

    assert_eq!(seeds.len(), 200);
    assert_eq!(seeds.iter().min(), Some(&50_000_001));
    assert_eq!(seeds.iter().max(), Some(&50_000_200));
    assert_eq!(
        sequence.last_seed().unwrap(),
        Some(ActivationKeySeed::new(50_000_200))
    );
}
