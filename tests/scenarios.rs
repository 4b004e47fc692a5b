#![cfg(all(feature = "std", feature = "panic-on-alloc"))]

use std::{
    panic::{AssertUnwindSafe, catch_unwind},
    string::String,
    vec::Vec,
};

use strong_vec::{Standard, Vector};

mod common;

use common::{InstrumentedAllocator, expect_no_panic, panic_payload_string};

#[test]
fn push_insert_scenario() {
    let mut vec = Vector::new();
    let mut capacities = Vec::new();

    for (i, value) in [1, 3, -2, 8, 2, -12, 17, 5].into_iter().enumerate() {
        vec.push(value);
        capacities.push(vec.capacity());

        assert_eq!(vec.len(), i + 1);
        assert_eq!(*vec.back(), value);
    }

    assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8]);

    vec.insert(vec.cend(), 10);
    assert_eq!((vec.len(), *vec.back()), (9, 10));

    vec.insert(vec.cbegin(), -7);
    assert_eq!((vec.len(), *vec.front()), (10, -7));

    vec.insert(vec.cbegin() + 5, 1010);
    assert_eq!((vec.len(), vec[5]), (11, 1010));

    assert_eq!(vec, [-7, 1, 3, -2, 8, 1010, 2, -12, 17, 5, 10]);
}

#[test]
fn erase_scenario() {
    let mut vec = Vector::from([-7, 1, 3, -2, 8, 1010, 2, -12, 17, 5, 10]);

    let next = vec.erase_range(vec.cbegin() + 4, vec.cend() - 4);

    assert_eq!(vec.len(), 8);
    assert_eq!(vec, [-7, 1, 3, -2, -12, 17, 5, 10]);
    assert_eq!(next.offset_from(vec.cbegin()), 4);

    let again = vec.erase_range(next, next);
    assert_eq!(again, next);
    assert_eq!(vec.len(), 8);
}

#[test]
fn pushed_prefixes_match() {
    let mut vec = Vector::new();

    for k in 0..100usize {
        vec.push(k * 3);

        assert_eq!(vec.len(), k + 1);
        assert!(vec.iter().enumerate().all(|(i, value)| *value == i * 3));
    }
}

#[test]
fn reserved_appends_stay_in_place() {
    let mut vec: Vector<String> = Vector::new();
    vec.reserve(32);

    let ptr = vec.as_ptr();

    for i in 0..32 {
        vec.push(i.to_string());
        assert_eq!(vec.as_ptr(), ptr);
        assert!(vec.capacity() >= 32);
    }
}

#[test]
fn range_constructor_round_trip() {
    let vec: Vector<String> = ["alpha", "beta", "gamma"].into_iter().map(String::from).collect();

    let copy = unsafe { Vector::from_range_in(vec.cbegin(), vec.cend(), Standard::new()) };

    assert_eq!(copy.len(), vec.len());
    assert_eq!(copy, vec);
}

#[test]
fn self_referential_insert() {
    let mut vec: Vector<String> = ["a", "b", "c"].into_iter().map(String::from).collect();

    let at = vec.cbegin() + 1;
    unsafe { vec.insert_range(0, at, at + 1) };
    assert_eq!(vec, ["b", "a", "b", "c"]);

    vec.insert_from_within(vec.cend(), 3..);
    assert_eq!(vec, ["b", "a", "b", "c", "c"]);
}

#[derive(Debug, PartialEq)]
struct Fragile(u32);

impl Clone for Fragile {
    fn clone(&self) -> Self {
        assert!(self.0 != 0, "cannot clone a zero");
        Fragile(self.0)
    }
}

#[test]
fn failed_growth_leaves_everything_untouched() {
    let alloc = InstrumentedAllocator::new();
    let ledger = alloc.ledger();

    let mut vec = Vector::new_in(alloc);
    vec.push(Fragile(1));
    vec.push(Fragile(2));
    let before = (vec.len(), vec.capacity(), vec.as_ptr());

    let slice = [Fragile(3), Fragile(0), Fragile(4)];
    let payload = catch_unwind(AssertUnwindSafe(|| vec.insert_slice(1, &slice))).unwrap_err();

    assert_eq!(panic_payload_string(payload).unwrap(), "cannot clone a zero");
    assert_eq!((vec.len(), vec.capacity(), vec.as_ptr()), before);
    assert_eq!(vec, [Fragile(1), Fragile(2)]);
    assert_eq!(ledger.live_values(), 2);
    assert_eq!(ledger.leaks().len(), 1);

    drop(vec);
    assert_eq!(ledger.live_values(), 0);
    assert!(ledger.leaks().is_empty());
}

#[test]
fn successful_operations_do_not_leak() {
    let alloc = InstrumentedAllocator::new();
    let ledger = alloc.ledger();

    expect_no_panic(catch_unwind(AssertUnwindSafe(|| {
        let mut vec = Vector::new_in(alloc);

        vec.extend((0..20).map(|i| i.to_string()));
        vec.erase_range(3, 9);
        vec.insert_n(2, 5, String::from("x"));
        vec.resize(40, String::from("y"));
        vec.shrink_to_fit();
        vec.assign_n(3, String::from("z"));

        let copy = vec.clone();
        let mut other = Vector::new_in(copy.allocator().clone());
        other.take_from(&mut vec);

        assert_eq!(other, ["z", "z", "z"]);
        assert_eq!(copy, other);
        assert!(vec.is_empty());
    })));

    assert_eq!(ledger.live_values(), 0);
    assert!(ledger.leaks().is_empty());
}
