//! Contact field validation
//!
//! Phone numbers and email addresses are checked against a fixed set of
//! rules. Rather than stopping at the first problem, every rule is evaluated
//! so the user sees all reasons at once.
//!
//! # Phone rules
//!
//! - Must start with `+`
//! - Must contain between 10 and 15 digits
//!
//! # Email rules
//!
//! - Exactly one `@`
//! - Non-empty local part (before `@`) and domain part (after `@`)
//! - No spaces
//! - Local part limited to `A-Z a-z 0-9 . _ -`
//! - Domain contains a `.` and its last segment is 2 to 6 characters long

use crate::core::traits::ContactValidator;

const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;
const MIN_TLD_LEN: usize = 2;
const MAX_TLD_LEN: usize = 6;

/// Outcome of validating one contact field
///
/// An empty reason list means the value passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactCheck {
    pub reasons: Vec<String>,
}

impl ContactCheck {
    pub fn is_valid(&self) -> bool {
        self.reasons.is_empty()
    }

    fn fail(&mut self, reason: &str) {
        self.reasons.push(reason.to_string());
    }
}

/// Validate a phone number
pub fn validate_phone(phone: &str) -> ContactCheck {
    let mut check = ContactCheck::default();

    if !phone.starts_with('+') {
        check.fail("phone number must start with '+'");
    }

    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        check.fail("phone number must contain 10 to 15 digits");
    }

    check
}

/// Validate an email address
pub fn validate_email(email: &str) -> ContactCheck {
    let mut check = ContactCheck::default();

    match email.matches('@').count() {
        0 => check.fail("no '@' symbol"),
        1 => {}
        _ => check.fail("more than one '@' symbol"),
    }

    // Remaining rules only make sense once the address can be split
    let Some((local, domain)) = email.split_once('@') else {
        return check;
    };

    if local.is_empty() {
        check.fail("empty local part (before '@')");
    }
    if domain.is_empty() {
        check.fail("empty domain part (after '@')");
    }
    if email.contains(' ') {
        check.fail("address contains spaces");
    }
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        check.fail("local part contains disallowed characters");
    }
    match domain.rsplit_once('.') {
        None => check.fail("domain part has no '.'"),
        Some((_, tld)) => {
            if !(MIN_TLD_LEN..=MAX_TLD_LEN).contains(&tld.chars().count()) {
                check.fail("top-level domain must be 2 to 6 characters long");
            }
        }
    }

    check
}

/// Contact validator applying the fixed phone and email rules
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleContactValidator;

impl ContactValidator for RuleContactValidator {
    fn check_phone(&self, phone: &str) -> ContactCheck {
        validate_phone(phone)
    }

    fn check_email(&self, email: &str) -> ContactCheck {
        validate_email(email)
    }
}
