//! Core traits for the capabilities the store consumes from outside
//!
//! This module defines the trait abstractions that allow boundary
//! collaborators (contact validation, the time source) to be swapped
//! without touching the business components.

use crate::validation::ContactCheck;
use chrono::{DateTime, Utc};
use std::fmt;

/// Trait for validating customer contact fields
///
/// Each check returns every reason the value was rejected; an empty list
/// means the value is acceptable.
pub trait ContactValidator: fmt::Debug {
    /// Check a phone number
    fn check_phone(&self, phone: &str) -> ContactCheck;

    /// Check an email address
    fn check_email(&self, email: &str) -> ContactCheck;
}

/// Trait for reading the current time
///
/// Used to stamp order creation and status updates.
pub trait Clock: fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
