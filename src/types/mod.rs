//! Common types used across the Torn client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
