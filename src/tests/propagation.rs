use std::{
    panic::{AssertUnwindSafe, catch_unwind},
    rc::Rc,
};

use super::{Counts, Fixed, Travelling};
use crate::Vector;

#[test]
fn clone_keeps_the_allocator() {
    let vec = Vector::from_iter_in([1, 2, 3], Fixed::new(4));
    let copy = vec.clone();

    assert_eq!(copy, [1, 2, 3]);
    assert_eq!(copy.allocator().id, 4);
    assert_ne!(copy.as_ptr(), vec.as_ptr());
}

#[test]
fn clone_from_without_propagation() {
    let mut target = Vector::from_iter_in([0; 4], Fixed::new(1));
    let source = Vector::from_iter_in([5, 6], Fixed::new(2));
    let ptr = target.as_ptr();

    target.clone_from(&source);

    assert_eq!(target, [5, 6]);
    assert_eq!(target.allocator().id, 1);
    assert_eq!(target.as_ptr(), ptr);
}

#[test]
fn clone_from_with_propagation() {
    let counts = Rc::new(Counts::default());
    let mut target = Vector::from_iter_in([0; 4], Travelling::with_counts(1, counts.clone()));
    let source = Vector::from_iter_in([5, 6], Travelling::with_counts(2, counts.clone()));

    target.clone_from(&source);

    assert_eq!(target, [5, 6]);
    assert_eq!(target.allocator().id, 2);
    assert_eq!(counts.live_blocks(), 2);
}

#[test]
fn clone_from_with_propagation_and_equal_allocators() {
    let mut target = Vector::from_iter_in([0; 4], Travelling::new(3));
    let source = Vector::from_iter_in([5, 6], Travelling::new(3));
    let ptr = target.as_ptr();

    target.clone_from(&source);

    assert_eq!(target, [5, 6]);
    assert_eq!(target.as_ptr(), ptr);
}

#[test]
fn take_from_equal_allocators_steals_the_block() {
    let counts = Rc::new(Counts::default());
    let mut target = Vector::from_iter_in([1], Fixed::with_counts(1, counts.clone()));
    let mut source = Vector::from_iter_in([7, 8, 9], Fixed::with_counts(1, counts.clone()));
    let ptr = source.as_ptr();

    target.take_from(&mut source);

    assert_eq!(target, [7, 8, 9]);
    assert_eq!(target.as_ptr(), ptr);
    assert_eq!((source.len(), source.capacity()), (0, 0));
    assert_eq!(counts.live_blocks(), 1);
    assert_eq!(counts.destroyed.get(), 1);
}

#[test]
fn take_from_unequal_allocators_relocates() {
    let target_counts = Rc::new(Counts::default());
    let source_counts = Rc::new(Counts::default());
    let mut target = Vector::new_in(Fixed::with_counts(1, target_counts.clone()));
    let mut source = Vector::from_iter_in([7, 8, 9], Fixed::with_counts(2, source_counts.clone()));
    let ptr = source.as_ptr();

    target.take_from(&mut source);

    assert_eq!(target, [7, 8, 9]);
    assert_ne!(target.as_ptr(), ptr);
    assert_eq!(target.allocator().id, 1);
    assert_eq!(target_counts.live_blocks(), 1);

    assert_eq!((source.len(), source.capacity()), (0, 0));
    assert_eq!(source_counts.live_blocks(), 0);
    assert_eq!(source_counts.destroyed.get(), 0);
}

#[test]
fn take_from_unequal_allocators_reuses_capacity() {
    let mut target = Vector::with_capacity_in(8, Fixed::new(1));
    let mut source = Vector::from_iter_in([7, 8], Fixed::new(2));
    let ptr = target.as_ptr();

    target.take_from(&mut source);

    assert_eq!(target, [7, 8]);
    assert_eq!(target.as_ptr(), ptr);
    assert_eq!(target.capacity(), 8);
}

#[test]
fn take_from_with_propagation_adopts_the_allocator() {
    let mut target = Vector::from_iter_in([1, 2], Travelling::new(1));
    let mut source = Vector::from_iter_in([3], Travelling::new(2));
    let ptr = source.as_ptr();

    target.take_from(&mut source);

    assert_eq!(target, [3]);
    assert_eq!(target.as_ptr(), ptr);
    assert_eq!(target.allocator().id, 2);
    assert!(source.is_empty());
}

#[test]
fn swap_with_propagation() {
    let mut a = Vector::from_iter_in([1, 2], Travelling::new(1));
    let mut b = Vector::from_iter_in([3], Travelling::new(2));

    a.swap_with(&mut b);

    assert_eq!((a.as_slice(), a.allocator().id), (&[3][..], 2));
    assert_eq!((b.as_slice(), b.allocator().id), (&[1, 2][..], 1));
}

#[test]
fn swap_with_equal_allocators() {
    let mut a = Vector::from_iter_in([1, 2], Fixed::new(5));
    let mut b = Vector::from_iter_in([3], Fixed::new(5));

    a.swap_with(&mut b);

    assert_eq!(a, [3]);
    assert_eq!(b, [1, 2]);
}

#[test]
fn swap_with_unequal_allocators_panics() {
    let mut a = Vector::from_iter_in([1, 2], Fixed::new(1));
    let mut b = Vector::from_iter_in([3], Fixed::new(2));

    let result = catch_unwind(AssertUnwindSafe(|| a.swap_with(&mut b)));
    assert!(result.is_err());

    assert_eq!((a.as_slice(), a.allocator().id), (&[1, 2][..], 1));
    assert_eq!((b.as_slice(), b.allocator().id), (&[3][..], 2));
}
