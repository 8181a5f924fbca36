//! Validation module
//!
//! Default implementations of the input validation capabilities the store
//! consumes through traits in [`crate::core::traits`].

pub mod contact;

pub use contact::{validate_email, validate_phone, ContactCheck, RuleContactValidator};
