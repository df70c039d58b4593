//! Logged assertion helpers.
//!
//! Each helper logs the values it compares before asserting, so failures in CI
//! come with context.

#![allow(dead_code)]

use std::fmt::Debug;

#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(
        context = context,
        expected = ?expected,
        actual = ?actual,
        "asserting equality"
    );

    if actual != expected {
        tracing::error!(
            context = context,
            expected = ?expected,
            actual = ?actual,
            "assertion failed: values not equal"
        );
    }

    assert_eq!(
        actual, expected,
        "{context}: expected {expected:?}, got {actual:?}"
    );
}

#[track_caller]
pub fn assert_ne_logged<T: PartialEq + Debug>(context: &str, left: T, right: T) {
    tracing::debug!(context = context, left = ?left, right = ?right, "asserting inequality");

    if left == right {
        tracing::error!(context = context, value = ?left, "assertion failed: values equal");
    }

    assert_ne!(left, right, "{context}: both sides were {left:?}");
}

/// Assert that a Result is Ok, returning the value.
#[track_caller]
pub fn assert_ok_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> T {
    tracing::debug!(context = context, result = ?result, "asserting Ok");

    match result {
        Ok(value) => value,
        Err(ref e) => {
            tracing::error!(context = context, error = ?e, "assertion failed: expected Ok, got Err");
            panic!("{context}: expected Ok, got Err({e:?})");
        }
    }
}

/// Assert that a Result is Err, returning the error.
#[track_caller]
pub fn assert_err_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> E {
    tracing::debug!(context = context, result = ?result, "asserting Err");

    match result {
        Err(e) => e,
        Ok(ref value) => {
            tracing::error!(context = context, value = ?value, "assertion failed: expected Err, got Ok");
            panic!("{context}: expected Err, got Ok({value:?})");
        }
    }
}
