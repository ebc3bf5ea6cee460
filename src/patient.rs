//! Patient profile collected at the start of a session.

use std::fmt;

use thiserror::Error;

/// Youngest accepted age in years.
pub const MIN_AGE: i64 = 0;
/// Oldest accepted age in years.
pub const MAX_AGE: i64 = 120;

/// Profile validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Age must be a whole number between 0 and 120 (got {0})")]
    AgeOutOfRange(i64),
    #[error("Age must be a whole number between 0 and 120 (got '{0}')")]
    AgeNotANumber(String),
}

/// Patient age in whole years, always within `MIN_AGE..=MAX_AGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(u8);

impl Age {
    pub fn new(years: i64) -> Result<Self, ProfileError> {
        if (MIN_AGE..=MAX_AGE).contains(&years) {
            Ok(Self(years as u8))
        } else {
            Err(ProfileError::AgeOutOfRange(years))
        }
    }

    /// Parses user input such as `" 42 "`.
    pub fn parse(input: &str) -> Result<Self, ProfileError> {
        let trimmed = input.trim();
        let years = trimmed
            .parse::<i64>()
            .map_err(|_| ProfileError::AgeNotANumber(trimmed.to_string()))?;
        Self::new(years)
    }

    pub const fn years(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// General information about the patient under care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientProfile {
    pub name: String,
    pub age: Age,
    pub gender: Option<String>,
    pub allergies: Option<String>,
    pub other: Option<String>,
}

impl PatientProfile {
    /// Creates a profile with only the required fields.
    pub fn new(name: impl Into<String>, age: Age) -> Self {
        Self {
            name: name.into(),
            age,
            gender: None,
            allergies: None,
            other: None,
        }
    }

    #[must_use]
    pub fn with_gender(mut self, gender: &str) -> Self {
        self.gender = non_blank(gender);
        self
    }

    #[must_use]
    pub fn with_allergies(mut self, allergies: &str) -> Self {
        self.allergies = non_blank(allergies);
        self
    }

    #[must_use]
    pub fn with_other(mut self, other: &str) -> Self {
        self.other = non_blank(other);
        self
    }

    /// Label/value pairs for display, skipping empty optional fields.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![("name", self.name.clone()), ("age", self.age.to_string())];
        if let Some(gender) = &self.gender {
            rows.push(("gender", gender.clone()));
        }
        if let Some(allergies) = &self.allergies {
            rows.push(("allergies", allergies.clone()));
        }
        if let Some(other) = &self.other {
            rows.push(("other", other.clone()));
        }
        rows
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
