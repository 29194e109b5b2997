// src/generators/policy.rs
use serde::{Deserialize, Serialize};

use crate::generators::alphabet::{self, CharClass, RequiredAlphabet};
use crate::generators::error::PolicyError;

/// Requirements a password must satisfy.
///
/// Policies are plain values: build one with [`Policy::new`] or
/// [`Policy::strong`] and share it freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    min_length: usize,
    max_length: usize,
    require_lowercase: bool,
    require_uppercase: bool,
    require_digit: bool,
    require_symbol: bool,
}

impl Policy {
    pub fn new(
        min_length: usize,
        max_length: usize,
        require_lowercase: bool,
        require_uppercase: bool,
        require_digit: bool,
        require_symbol: bool,
    ) -> Self {
        Self {
            min_length,
            max_length,
            require_lowercase,
            require_uppercase,
            require_digit,
            require_symbol,
        }
    }

    /// A policy requiring every character class.
    pub fn strong(min_length: usize, max_length: usize) -> Self {
        Self::new(min_length, max_length, true, true, true, true)
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn requires(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.require_lowercase,
            CharClass::Uppercase => self.require_uppercase,
            CharClass::Digit => self.require_digit,
            CharClass::Symbol => self.require_symbol,
        }
    }

    pub fn required_class_count(&self) -> usize {
        CharClass::ALL.iter().filter(|class| self.requires(**class)).count()
    }

    /// Alphabets of the required classes, lowercase first and symbols last.
    /// Classes that are not required are left out.
    pub fn required_alphabets(&self) -> Vec<RequiredAlphabet> {
        CharClass::ALL
            .iter()
            .copied()
            .filter(|class| self.requires(*class))
            .map(RequiredAlphabet::from)
            .collect()
    }

    pub fn full_alphabet(&self) -> Vec<u8> {
        alphabet::full_alphabet()
    }

    /// Checks that every required class can get a position of its own.
    ///
    /// `min_length <= max_length` is not checked here; callers that need it
    /// must enforce it themselves.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let required = self.required_class_count();

        if self.min_length < required {
            return Err(PolicyError::TooShort {
                min_length: self.min_length,
                required,
            });
        }

        Ok(())
    }

    /// Checks a candidate password against this policy.
    ///
    /// The length, counted in characters, must lie within
    /// `[min_length, max_length]`, and every required class must appear at
    /// least once. The first missing class in fixed order is reported.
    pub fn validate_password(&self, password: &str) -> Result<(), PolicyError> {
        let length = password.chars().count();

        if length < self.min_length || length > self.max_length {
            return Err(PolicyError::Length {
                length,
                min_length: self.min_length,
                max_length: self.max_length,
            });
        }

        for required in self.required_alphabets() {
            if !password.chars().any(|c| required.class.contains(c)) {
                return Err(PolicyError::MissingClass(required.class));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_requires_everything() {
        let policy = Policy::strong(8, 12);
        assert_eq!(policy.required_class_count(), 4);
        assert!(CharClass::ALL.iter().all(|c| policy.requires(*c)));
        assert_eq!(policy.min_length(), 8);
        assert_eq!(policy.max_length(), 12);
    }

    #[test]
    fn test_validate_fails_iff_too_short() {
        assert_eq!(
            Policy::strong(2, 10).validate(),
            Err(PolicyError::TooShort { min_length: 2, required: 4 })
        );
        assert!(Policy::strong(3, 3).validate().is_err());
        assert!(Policy::strong(4, 4).validate().is_ok());
        assert!(Policy::new(2, 2, true, false, true, false).validate().is_ok());
        assert!(Policy::new(1, 1, true, false, true, false).validate().is_err());
        assert!(Policy::new(0, 0, false, false, false, false).validate().is_ok());
    }

    #[test]
    fn test_required_alphabets_order_and_omission() {
        let policy = Policy::new(4, 4, false, true, false, true);
        let classes: Vec<CharClass> = policy.required_alphabets().iter().map(|r| r.class).collect();
        assert_eq!(classes, vec![CharClass::Uppercase, CharClass::Symbol]);

        let all: Vec<CharClass> = Policy::strong(4, 4).required_alphabets().iter().map(|r| r.class).collect();
        assert_eq!(all, CharClass::ALL.to_vec());

        assert!(Policy::new(4, 4, false, false, false, false).required_alphabets().is_empty());
    }

    #[test]
    fn test_full_alphabet_ignores_flags() {
        let none = Policy::new(4, 4, false, false, false, false);
        assert_eq!(none.full_alphabet(), Policy::strong(4, 4).full_alphabet());
        assert_eq!(none.full_alphabet(), alphabet::full_alphabet());
    }

    #[test]
    fn test_validate_password_length_range() {
        let policy = Policy::new(8, 12, false, false, false, false);
        assert!(policy.validate_password("abcdefgh").is_ok());
        assert!(policy.validate_password("abcdefghij").is_ok());
        assert!(policy.validate_password("abcdefghijkl").is_ok());
        assert_eq!(
            policy.validate_password("abc"),
            Err(PolicyError::Length { length: 3, min_length: 8, max_length: 12 })
        );
        assert!(matches!(
            policy.validate_password("abcdefghijklm"),
            Err(PolicyError::Length { length: 13, .. })
        ));
    }

    #[test]
    fn test_validate_password_reports_first_missing_class() {
        let policy = Policy::strong(4, 16);
        assert!(policy.validate_password("aB3$").is_ok());
        assert_eq!(
            policy.validate_password("abcd3$"),
            Err(PolicyError::MissingClass(CharClass::Uppercase))
        );
        assert_eq!(
            policy.validate_password("ABCDabcd"),
            Err(PolicyError::MissingClass(CharClass::Digit))
        );
        assert_eq!(
            policy.validate_password("aB3;xyz"),
            Err(PolicyError::MissingClass(CharClass::Symbol))
        );
    }

    #[test]
    fn test_policy_serializes() {
        let policy = Policy::new(6, 10, true, false, true, false);
        let json = serde_json::to_string(&policy).unwrap();
        assert!(json.contains("\"min_length\":6"));
        let back: Policy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, policy);
    }
}
