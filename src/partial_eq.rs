use crate::{Allocator, Vector};

macro_rules! impl_slice_eq {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool { self[..] == other[..] }
            #[inline]
            fn ne(&self, other: &$rhs) -> bool { self[..] != other[..] }
        }
    }
}

impl_slice_eq! { [A1: Allocator<Value = T>, A2: Allocator<Value = U>] Vector<T, A1>, Vector<U, A2> }
impl_slice_eq! { [A: Allocator<Value = T>] Vector<T, A>, [U] }
impl_slice_eq! { [A: Allocator<Value = T>] Vector<T, A>, &[U] }
impl_slice_eq! { [A: Allocator<Value = T>] Vector<T, A>, &mut [U] }
impl_slice_eq! { [A: Allocator<Value = U>] [T], Vector<U, A> }
impl_slice_eq! { [A: Allocator<Value = U>] &[T], Vector<U, A> }
impl_slice_eq! { [A: Allocator<Value = U>] &mut [T], Vector<U, A> }
impl_slice_eq! { [A: Allocator<Value = T>, const N: usize] Vector<T, A>, [U; N] }
impl_slice_eq! { [A: Allocator<Value = T>, const N: usize] Vector<T, A>, &[U; N] }
impl_slice_eq! { [A: Allocator<Value = T>, const N: usize] Vector<T, A>, &mut [U; N] }
