use std::vec::Vec;

use crate::{Bidirectional, ConstCursor, RandomAccess, Reverse, Vector};

#[test]
fn walks_backwards() {
    let vec = Vector::from([1, 2, 3, 4]);
    let mut values = Vec::new();

    let mut cursor = vec.crbegin();
    while cursor != vec.crend() {
        values.push(unsafe { *cursor.get() });
        cursor += 1;
    }

    assert_eq!(values, [4, 3, 2, 1]);
}

#[test]
fn base_is_one_past_the_element() {
    let vec = Vector::from(['a', 'b', 'c']);
    let reverse = vec.crbegin() + 1;

    assert_eq!(unsafe { *reverse.get() }, 'b');
    assert_eq!(unsafe { *reverse.base().get() }, 'c');
    assert_eq!(reverse.base(), vec.cend() - 1);
    assert_eq!(Reverse::new(vec.cend()), vec.crbegin());
}

#[test]
fn ordering_is_reversed() {
    let vec = Vector::from([1, 2, 3]);
    let first = vec.crbegin();
    let later = first + 2;

    assert!(first < later);
    assert!(later < vec.crend());
    assert!(first.base() > later.base());
    assert_eq!(later.distance_from(&first), 2);
    assert_eq!(vec.crend().distance_from(&vec.crbegin()), 3);
    assert_eq!(later - 2, first);
}

#[test]
fn steps_mirror_the_base() {
    let vec = Vector::from([1, 2, 3]);
    let mut cursor = vec.crend();

    cursor.decrement();
    assert_eq!(unsafe { *cursor.get() }, 1);

    cursor.advance(-1);
    assert_eq!(unsafe { *cursor.get() }, 2);

    cursor -= 1;
    assert_eq!(cursor, vec.crbegin());
}

#[test]
fn write_through_reverse() {
    let mut vec = Vector::from([1, 2, 3]);
    let mut cursor = vec.rbegin();
    let mut next = 10;

    while cursor != vec.rend() {
        unsafe { *cursor.get_mut() = next };
        next += 10;
        cursor.increment();
    }

    assert_eq!(vec, [30, 20, 10]);
}

#[test]
fn widen_to_const() {
    let mut vec = Vector::from([1, 2]);
    let reverse = vec.rbegin();
    let widened: Reverse<ConstCursor<i32>> = reverse.into();

    assert_eq!(widened, vec.crbegin());
    assert_eq!(unsafe { *widened.get() }, 2);
}

#[test]
fn reversed_iteration_of_empty_vector() {
    let vec: Vector<i32> = Vector::new();
    assert_eq!(vec.crbegin(), vec.crend());
}
