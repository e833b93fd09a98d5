//! Customer number validation and lookup.

mod checksum;
mod directory;
pub mod error;

pub use checksum::*;
pub use directory::*;
pub use error::*;

use tracing::{debug, info, instrument, warn};

use crate::domain::Customer;

/// Resolves customer numbers to customers. Holds no state besides the
/// read-only directory.
#[derive(Debug, Clone)]
pub struct IdentityValidator {
    directory: CustomerDirectory,
}

impl IdentityValidator {
    pub fn new(directory: CustomerDirectory) -> Self {
        Self { directory }
    }

    /// Validates `identifier` and looks it up.
    ///
    /// Non-digit characters are discarded before the length check, so
    /// `"3842-9730"` resolves the same as `"38429730"`.
    ///
    /// # Errors
    /// - `MalformedInput` unless exactly eight digits remain
    /// - `InvalidChecksum` if the eighth digit is not the check digit
    /// - `CustomerNotFound` if the number is valid but unknown
    pub fn validate(&self, identifier: &str) -> Result<Customer, IdentityError> {
        let number = CustomerNumber::parse_lenient(identifier)?;
        self.resolve(number)
    }

    /// Looks up an already parsed number, verifying its checksum first.
    #[instrument(skip(self, number), fields(customer_number = %number))]
    pub fn resolve(&self, number: CustomerNumber) -> Result<Customer, IdentityError> {
        if !number.has_valid_checksum() {
            warn!("Checksum mismatch");
            return Err(IdentityError::InvalidChecksum(number.to_string()));
        }

        let key = number.to_string();
        match self.directory.get(&key) {
            Some(customer) => {
                info!(customer_name = %customer.name, "Customer resolved");
                Ok(customer.clone())
            }
            None => {
                debug!("No customer for number");
                Err(IdentityError::CustomerNotFound(key))
            }
        }
    }
}

impl Default for IdentityValidator {
    fn default() -> Self {
        Self::new(CustomerDirectory::demo())
    }
}

/// Validates `identifier` against the default customer directory.
pub fn validate(identifier: &str) -> Result<Customer, IdentityError> {
    IdentityValidator::default().validate(identifier)
}
