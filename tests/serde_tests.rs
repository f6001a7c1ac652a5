#![cfg(feature = "serde")]
//! Serde support tests for MagicalContainer.

use magical_container::MagicalContainer;
use rstest::rstest;

#[rstest]
fn test_serialize_as_sorted_sequence() {
    let container: MagicalContainer = [7, 2, 9, 4, 3].into_iter().collect();
    let json = serde_json::to_string(&container).unwrap();
    assert_eq!(json, "[2,3,4,7,9]");
}

#[rstest]
fn test_serialize_empty() {
    let json = serde_json::to_string(&MagicalContainer::new()).unwrap();
    assert_eq!(json, "[]");
}

#[rstest]
fn test_deserialize_rebuilds_prime_view() {
    let container: MagicalContainer = serde_json::from_str("[1, 2, 3, 4, 5, 6, 7]").unwrap();
    assert_eq!(container.primes(), &[2, 3, 5, 7]);
}

#[rstest]
fn test_deserialize_sorts_and_deduplicates() {
    let container: MagicalContainer = serde_json::from_str("[9, 3, 9, -1, 3]").unwrap();
    assert_eq!(container.elements(), &[-1, 3, 9]);
    assert_eq!(container.primes(), &[3]);
}

#[rstest]
fn test_round_trip_preserves_container() {
    let container: MagicalContainer = (-5..30).collect();
    let json = serde_json::to_string(&container).unwrap();
    let restored: MagicalContainer = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, container);
}

#[rstest]
#[case("{\"elements\": [1]}")]
#[case("[1, \"two\"]")]
#[case("[2147483648]")]
fn test_deserialize_rejects_invalid_input(#[case] json: &str) {
    assert!(serde_json::from_str::<MagicalContainer>(json).is_err());
}
