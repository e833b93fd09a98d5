//! Weighted mod-10 check digit used by 8-digit customer numbers.

use std::fmt;

use super::error::IdentityError;

pub const CUSTOMER_NUMBER_LEN: usize = 8;

/// Computes the check digit for the first seven digits of a customer number.
///
/// Digits at even positions weigh 1, odd positions weigh 3; the check digit
/// brings the weighted sum up to the next multiple of ten.
pub fn check_digit(prefix: &[u8; CUSTOMER_NUMBER_LEN - 1]) -> u8 {
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, &digit)| u32::from(digit) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// An 8-digit customer number that has passed structural checks, though not
/// necessarily the checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomerNumber([u8; CUSTOMER_NUMBER_LEN]);

impl CustomerNumber {
    /// Keeps only the ASCII digits of `input` and requires exactly eight of
    /// them. Separators such as `3842-9730` are accepted, and so is any other
    /// embedded non-digit character.
    pub fn parse_lenient(input: &str) -> Result<Self, IdentityError> {
        let digits: Vec<u8> = input
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d as u8)
            .collect();
        Self::from_digits(&digits).ok_or_else(|| IdentityError::MalformedInput(input.to_string()))
    }

    /// Trims surrounding whitespace and requires exactly eight ASCII digits
    /// with nothing in between.
    pub fn parse_strict(input: &str) -> Result<Self, IdentityError> {
        let trimmed = input.trim();
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdentityError::MalformedInput(input.to_string()));
        }
        let digits: Vec<u8> = trimmed.bytes().map(|b| b - b'0').collect();
        Self::from_digits(&digits).ok_or_else(|| IdentityError::MalformedInput(input.to_string()))
    }

    fn from_digits(digits: &[u8]) -> Option<Self> {
        <[u8; CUSTOMER_NUMBER_LEN]>::try_from(digits).ok().map(Self)
    }

    pub fn has_valid_checksum(&self) -> bool {
        let mut prefix = [0u8; CUSTOMER_NUMBER_LEN - 1];
        prefix.copy_from_slice(&self.0[..CUSTOMER_NUMBER_LEN - 1]);
        check_digit(&prefix) == self.0[CUSTOMER_NUMBER_LEN - 1]
    }
}

impl fmt::Display for CustomerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_numbers() {
        assert!(CustomerNumber::parse_lenient("38429730").unwrap().has_valid_checksum());
        assert!(CustomerNumber::parse_lenient("12345678").unwrap().has_valid_checksum());
        assert!(!CustomerNumber::parse_lenient("38429734").unwrap().has_valid_checksum());
    }

    #[test]
    fn test_check_digit() {
        // 3 + 24 + 4 + 6 + 9 + 21 + 3 = 70
        assert_eq!(check_digit(&[3, 8, 4, 2, 9, 7, 3]), 0);
        // 1 + 6 + 3 + 12 + 5 + 18 + 7 = 52
        assert_eq!(check_digit(&[1, 2, 3, 4, 5, 6, 7]), 8);
    }

    #[test]
    fn test_lenient_parse_strips_non_digits() {
        let number = CustomerNumber::parse_lenient(" 3842-9730 ").unwrap();
        assert_eq!(number.to_string(), "38429730");
        let number = CustomerNumber::parse_lenient("3842a9730").unwrap();
        assert_eq!(number.to_string(), "38429730");
    }

    #[test]
    fn test_wrong_length_is_malformed() {
        assert_eq!(
            CustomerNumber::parse_lenient("1234567"),
            Err(IdentityError::MalformedInput("1234567".to_string()))
        );
        assert!(CustomerNumber::parse_lenient("123456789").is_err());
        assert!(CustomerNumber::parse_lenient("").is_err());
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!(
            CustomerNumber::parse_strict(" 38429730\n").unwrap().to_string(),
            "38429730"
        );
        assert!(CustomerNumber::parse_strict("3842-9730").is_err());
        assert!(CustomerNumber::parse_strict("3842 9730").is_err());
        assert!(CustomerNumber::parse_strict("١٢٣٤٥٦٧٨").is_err());
    }

    proptest! {
        #[test]
        fn accepts_iff_check_digit_matches(
            prefix in prop::array::uniform7(0u8..10),
            last in 0u8..10,
        ) {
            let input: String = prefix
                .iter()
                .chain(std::iter::once(&last))
                .map(|d| char::from(b'0' + d))
                .collect();
            let number = CustomerNumber::parse_lenient(&input).unwrap();
            prop_assert_eq!(number.has_valid_checksum(), check_digit(&prefix) == last);
        }
    }
}
