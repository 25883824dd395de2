use std::sync::Arc;

use tracing::debug;

use super::domain::{CountryData, ValidationMode};

/// Source of the country an identity validator operates in.
#[cfg_attr(test, mockall::automock)]
pub trait CountryDataProvider: Send + Sync {
    fn country_data(&self) -> CountryData;
}

/// Collaborator consulted by the evaluator for identity checks and office-country lookups.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityValidator {
    fn is_valid(&self, identity_number: &str) -> bool;
    fn country_data_provider(&self) -> Arc<dyn CountryDataProvider>;
    fn validation_mode(&self) -> ValidationMode;
    fn set_validation_mode(&mut self, mode: ValidationMode);
}

impl<T> IdentityValidator for &mut T
where
    T: IdentityValidator + ?Sized,
{
    fn is_valid(&self, identity_number: &str) -> bool {
        (**self).is_valid(identity_number)
    }

    fn country_data_provider(&self) -> Arc<dyn CountryDataProvider> {
        (**self).country_data_provider()
    }

    fn validation_mode(&self) -> ValidationMode {
        (**self).validation_mode()
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        (**self).set_validation_mode(mode)
    }
}

/// Provider that always reports the same configured country.
#[derive(Debug, Clone)]
pub struct StaticCountryDataProvider {
    country: String,
}

impl StaticCountryDataProvider {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
        }
    }
}

impl CountryDataProvider for StaticCountryDataProvider {
    fn country_data(&self) -> CountryData {
        CountryData::new(self.country.clone())
    }
}

const IDENTITY_NUMBER_LENGTH: usize = 11;

/// Validator for 11-digit national identity numbers carrying two trailing check digits.
///
/// `Quick` mode only checks the shape of the number; `Detailed` mode also verifies both check
/// digits.
pub struct ChecksumIdentityValidator {
    countries: Arc<dyn CountryDataProvider>,
    mode: ValidationMode,
}

impl ChecksumIdentityValidator {
    pub fn new(countries: Arc<dyn CountryDataProvider>) -> Self {
        Self {
            countries,
            mode: ValidationMode::default(),
        }
    }

    pub fn for_country(country: impl Into<String>) -> Self {
        Self::new(Arc::new(StaticCountryDataProvider::new(country)))
    }
}

impl IdentityValidator for ChecksumIdentityValidator {
    fn is_valid(&self, identity_number: &str) -> bool {
        let Some(digits) = parse_digits(identity_number) else {
            debug!(mode = self.mode.label(), "identity number is malformed");
            return false;
        };

        match self.mode {
            ValidationMode::Quick => true,
            ValidationMode::Detailed => check_digits_match(&digits),
        }
    }

    fn country_data_provider(&self) -> Arc<dyn CountryDataProvider> {
        Arc::clone(&self.countries)
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
    }
}

fn parse_digits(raw: &str) -> Option<[u32; IDENTITY_NUMBER_LENGTH]> {
    let raw = raw.trim();
    if raw.len() != IDENTITY_NUMBER_LENGTH {
        return None;
    }

    let mut digits = [0u32; IDENTITY_NUMBER_LENGTH];
    for (slot, ch) in digits.iter_mut().zip(raw.chars()) {
        *slot = ch.to_digit(10)?;
    }

    if digits[0] == 0 {
        return None;
    }
    Some(digits)
}

fn check_digits_match(digits: &[u32; IDENTITY_NUMBER_LENGTH]) -> bool {
    let odd: i32 = digits[..9].iter().step_by(2).map(|d| *d as i32).sum();
    let even: i32 = digits[1..9].iter().step_by(2).map(|d| *d as i32).sum();
    let tenth = (odd * 7 - even).rem_euclid(10) as u32;
    if digits[9] != tenth {
        return false;
    }

    let eleventh = digits[..10].iter().sum::<u32>() % 10;
    digits[10] == eleventh
}
