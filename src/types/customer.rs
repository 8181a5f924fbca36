//! Customer-related types for the store engine

use super::product::non_blank;
use super::CustomerId;

/// A registered customer
///
/// Customers are never deleted. Phone and email have passed contact
/// validation at registration time.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Delivery address, copied into each order's shipping record
    pub address: String,
}

/// Input for registering a customer
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Partial update for a customer's contact fields
///
/// Blank values mean "no change".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl CustomerUpdate {
    /// New phone number, if one was supplied
    pub fn phone(&self) -> Option<String> {
        non_blank(&self.phone)
    }

    /// New email address, if one was supplied
    pub fn email(&self) -> Option<String> {
        non_blank(&self.email)
    }

    /// Apply the non-blank fields to a customer
    ///
    /// Returns the number of fields that were actually changed.
    pub fn apply_to(&self, customer: &mut Customer) -> usize {
        let mut changed = 0;
        let fields = [
            (non_blank(&self.name), &mut customer.name),
            (self.phone(), &mut customer.phone),
            (self.email(), &mut customer.email),
            (non_blank(&self.address), &mut customer.address),
        ];

        for (value, target) in fields {
            if let Some(value) = value {
                *target = value;
                changed += 1;
            }
        }

        changed
    }
}
