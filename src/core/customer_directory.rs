//! Customer directory
//!
//! Owns every registered customer. Phone numbers and email addresses must
//! pass the injected [`ContactValidator`] both at registration and when they
//! are later changed.

use crate::core::traits::ContactValidator;
use crate::types::{Customer, CustomerId, CustomerUpdate, NewCustomer, StoreError};
use crate::validation::RuleContactValidator;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Owns the set of customers
#[derive(Debug)]
pub struct CustomerDirectory {
    customers: BTreeMap<CustomerId, Customer>,
    last_id: CustomerId,
    validator: Box<dyn ContactValidator>,
}

impl CustomerDirectory {
    /// Create an empty directory using the default contact rules
    pub fn new() -> Self {
        Self::with_validator(Box::new(RuleContactValidator))
    }

    /// Create an empty directory with a custom contact validator
    pub fn with_validator(validator: Box<dyn ContactValidator>) -> Self {
        CustomerDirectory {
            customers: BTreeMap::new(),
            last_id: 0,
            validator,
        }
    }

    /// Register a new customer
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any field is blank
    /// - The phone number fails contact validation
    /// - The email address fails contact validation
    ///
    /// Registration is all-or-nothing: on failure no customer is stored and
    /// no identifier is consumed.
    pub fn register(&mut self, input: NewCustomer) -> Result<&Customer, StoreError> {
        let name = required("name", &input.name)?;
        let phone = required("phone", &input.phone)?;
        let email = required("email", &input.email)?;
        let address = required("address", &input.address)?;

        self.check_phone(&phone)?;
        self.check_email(&email)?;

        self.last_id += 1;
        let id = self.last_id;
        let customer = Customer {
            id,
            name,
            phone,
            email,
            address,
        };

        info!(customer = id, name = %customer.name, "customer registered");
        Ok(self.customers.entry(id).or_insert(customer))
    }

    pub fn find(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(&id)
    }

    /// Find a customer, failing with `CustomerNotFound`
    pub fn require(&self, id: CustomerId) -> Result<&Customer, StoreError> {
        self.find(id)
            .ok_or(StoreError::CustomerNotFound { customer: id })
    }

    /// All customers in identifier order
    pub fn list(&self) -> Vec<&Customer> {
        self.customers.values().collect()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Apply a partial update to a customer's contact fields
    ///
    /// Blank fields are skipped. A supplied phone or email must pass the
    /// same contact validation as registration, which is stricter than a
    /// plain field overwrite: if either fails, nothing is changed.
    pub fn update(
        &mut self,
        id: CustomerId,
        update: &CustomerUpdate,
    ) -> Result<&Customer, StoreError> {
        if !self.customers.contains_key(&id) {
            return Err(StoreError::CustomerNotFound { customer: id });
        }
        if let Some(phone) = update.phone() {
            self.check_phone(&phone)?;
        }
        if let Some(email) = update.email() {
            self.check_email(&email)?;
        }

        let customer = self
            .customers
            .get_mut(&id)
            .ok_or(StoreError::CustomerNotFound { customer: id })?;
        let changed = update.apply_to(customer);
        debug!(customer = id, changed, "customer updated");
        Ok(customer)
    }

    fn check_phone(&self, phone: &str) -> Result<(), StoreError> {
        let check = self.validator.check_phone(phone);
        if check.is_valid() {
            Ok(())
        } else {
            Err(StoreError::invalid_contact("phone", check.reasons))
        }
    }

    fn check_email(&self, email: &str) -> Result<(), StoreError> {
        let check = self.validator.check_email(email);
        if check.is_valid() {
            Ok(())
        } else {
            Err(StoreError::invalid_contact("email", check.reasons))
        }
    }
}

impl Default for CustomerDirectory {
    fn default() -> Self {
        Self::new()
    }
}

fn required(field: &str, value: &str) -> Result<String, StoreError> {
    let value = value.trim();
    if value.is_empty() {
        Err(StoreError::required(field))
    } else {
        Ok(value.to_string())
    }
}
