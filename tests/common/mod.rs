#![cfg(all(feature = "std", feature = "panic-on-alloc"))]
#![allow(unused)]

mod instrumented_allocator;
mod limited_allocator;

use std::{any::Any, boxed::Box, string::String};

pub(crate) use instrumented_allocator::InstrumentedAllocator;
pub(crate) use limited_allocator::Limited;

pub(crate) fn expect_no_panic<T>(result: Result<T, Box<dyn Any + Send>>) -> T {
    match result {
        Ok(value) => value,
        Err(payload) => unexpected_panic(payload),
    }
}

#[expect(clippy::match_wild_err_arm)]
fn unexpected_panic(payload: Box<dyn Any + Send>) -> ! {
    match panic_payload_string(payload) {
        Ok(msg) => panic!("unexpected panic: {msg}"),
        Err(_) => panic!("unexpected panic (no message)"),
    }
}

pub(crate) fn panic_payload_string(payload: Box<dyn Any + Send>) -> Result<String, Box<dyn Any + Send>> {
    let payload = match payload.downcast::<&'static str>() {
        Ok(string) => return Ok((*string).into()),
        Err(payload) => payload,
    };

    let payload = match payload.downcast::<String>() {
        Ok(string) => return Ok(*string),
        Err(payload) => payload,
    };

    Err(payload)
}
