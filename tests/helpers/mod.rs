//! Shared fixtures and helpers for integration tests.

#![allow(dead_code)]

pub mod injection_helpers;
pub mod source_fixtures;
