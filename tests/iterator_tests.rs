//! Integration tests for the iterator family.
//!
//! Exercises the cursor contract of every variant through the public API,
//! including generic traversal over `AnyIterator`.

use std::cmp::Ordering;

use magical_container::{
    AnyIterator, ContainerError, ContainerIterator, IteratorKind, MagicalContainer, traverse,
};
use rstest::rstest;

fn container_of(values: &[i32]) -> MagicalContainer {
    values.iter().copied().collect()
}

/// Runs a pass with the raw cursor operations, the way generic code would.
fn cursor_pass<'a, I: ContainerIterator<'a> + PartialEq>(iterator: I) -> Vec<i32> {
    let mut cursor = iterator.begin();
    let end = iterator.end();
    let mut values = Vec::new();
    while cursor != end {
        values.push(cursor.current().unwrap());
        cursor.advance().unwrap();
    }
    values
}

// =============================================================================
// Traversal orders
// =============================================================================

#[rstest]
fn test_ascending_order() {
    let container = container_of(&[5, 1, 3]);
    assert_eq!(cursor_pass(container.ascending()), vec![1, 3, 5]);
    assert_eq!(container.ascending().collect::<Vec<_>>(), vec![1, 3, 5]);
}

#[rstest]
#[case(&[1, 2, 3, 4], &[1, 4, 2, 3])]
#[case(&[1, 2, 3, 4, 5], &[1, 5, 2, 4, 3])]
#[case(&[10, 30, 20], &[10, 30, 20])]
#[case(&[42], &[42])]
fn test_side_cross_order(#[case] values: &[i32], #[case] expected: &[i32]) {
    let container = container_of(values);
    assert_eq!(cursor_pass(container.side_cross()), expected);
    assert_eq!(container.side_cross().collect::<Vec<_>>(), expected);
}

#[rstest]
fn test_prime_order() {
    let container = container_of(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(cursor_pass(container.prime()), vec![2, 3, 5, 7]);
    assert_eq!(container.prime().collect::<Vec<_>>(), vec![2, 3, 5, 7]);
}

#[rstest]
fn test_traverse_over_any_iterator() {
    let container = container_of(&[1, 2, 3, 4, 5, 6, 7]);
    let iterators = [
        AnyIterator::from(container.ascending()),
        AnyIterator::from(container.side_cross()),
        AnyIterator::from(container.prime()),
    ];

    let passes: Vec<Vec<i32>> = iterators
        .iter()
        .map(|iterator| traverse(iterator).unwrap())
        .collect();

    assert_eq!(passes[0], vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(passes[1], vec![1, 7, 2, 6, 3, 5, 4]);
    assert_eq!(passes[2], vec![2, 3, 5, 7]);
}

// =============================================================================
// End of range
// =============================================================================

#[rstest]
#[case(IteratorKind::Ascending)]
#[case(IteratorKind::SideCross)]
#[case(IteratorKind::Prime)]
fn test_advance_at_end_fails(#[case] kind: IteratorKind) {
    let container = container_of(&[1, 2, 3, 4, 5]);
    let iterator = match kind {
        IteratorKind::Ascending => AnyIterator::from(container.ascending()),
        IteratorKind::SideCross => AnyIterator::from(container.side_cross()),
        IteratorKind::Prime => AnyIterator::from(container.prime()),
    };
    let mut end = iterator.end();

    assert_eq!(end.advance(), Err(ContainerError::EndOfRange { kind }));
    assert_eq!(end.current(), Err(ContainerError::EndOfRange { kind }));
    assert_eq!(end.index(), iterator.end().index());
}

#[rstest]
fn test_std_iterator_is_fused() {
    let container = container_of(&[2]);
    let mut iterator = container.prime();
    assert_eq!(iterator.next(), Some(2));
    assert_eq!(iterator.next(), None);
    assert_eq!(iterator.next(), None);
}

// =============================================================================
// Comparison
// =============================================================================

#[rstest]
fn test_ascending_and_prime_are_incompatible() {
    let container = container_of(&[2, 3, 5]);
    let ascending = AnyIterator::from(container.ascending());
    let prime = AnyIterator::from(container.prime());

    assert_eq!(ascending.index(), prime.index());
    assert_eq!(
        ascending.try_eq(&prime),
        Err(ContainerError::IncompatibleIterator {
            left: IteratorKind::Ascending,
            right: IteratorKind::Prime,
        })
    );
    assert_eq!(
        prime.try_cmp(&ascending),
        Err(ContainerError::IncompatibleIterator {
            left: IteratorKind::Prime,
            right: IteratorKind::Ascending,
        })
    );
}

#[rstest]
fn test_equal_positions_on_opposite_sides_order_front_first() {
    let container = container_of(&[1, 2, 3, 4, 5, 6]);
    let mut front = container.side_cross();
    front.advance().unwrap();
    front.advance().unwrap();
    let mut back = front;
    back.advance().unwrap();

    assert_eq!((front.index(), front.is_front_side()), (1, true));
    assert_eq!((back.index(), back.is_front_side()), (1, false));
    assert!(front < back);
    assert_eq!(Ord::cmp(&back, &front), Ordering::Greater);
    assert_ne!(front, back);
}

#[rstest]
fn test_iterators_over_different_containers_compare_by_position() {
    let first = container_of(&[1, 2, 3]);
    let second = container_of(&[7, 8, 9]);
    assert_eq!(first.ascending(), second.ascending());
}

// =============================================================================
// Assignment
// =============================================================================

#[rstest]
fn test_assign_within_same_container_copies_position() {
    let container = container_of(&[1, 2, 3, 4]);
    let mut target = container.ascending();
    let mut source = container.ascending();
    source.advance().unwrap();
    source.advance().unwrap();

    target.assign_from(&source).unwrap();
    assert_eq!(target.current(), Ok(3));
    assert_eq!(target, source);
}

#[rstest]
fn test_assign_side_cross_copies_position_but_not_side() {
    let container = container_of(&[1, 2, 3, 4]);
    let mut target = container.side_cross();
    let mut source = container.side_cross();
    source.advance().unwrap();
    source.advance().unwrap();
    source.advance().unwrap();

    target.assign_from(&source).unwrap();
    assert_eq!(target.index(), 1);
    assert!(target.is_front_side());
    assert_eq!(target.current(), Ok(2));
}

#[rstest]
fn test_assign_across_containers_fails() {
    let first = container_of(&[1, 2, 3]);
    let second = container_of(&[1, 2, 3]);
    let mut target = first.ascending();
    let mut source = second.ascending();
    source.advance().unwrap();

    assert_eq!(
        target.assign_from(&source),
        Err(ContainerError::IncompatibleIterator {
            left: IteratorKind::Ascending,
            right: IteratorKind::Ascending,
        })
    );
    assert_eq!(target.index(), 0);
}

#[rstest]
fn test_iterator_reports_its_container() {
    let container = container_of(&[1, 2]);
    let iterator = container.side_cross();
    assert!(std::ptr::eq(iterator.container(), &container));
    assert_eq!(iterator.kind(), IteratorKind::SideCross);
}
