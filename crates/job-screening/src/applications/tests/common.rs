use std::sync::Arc;

use crate::applications::domain::{Applicant, CountryData, JobApplication};
use crate::applications::evaluation::{ApplicationEvaluator, EvaluationConfig};
use crate::applications::identity::{
    CountryDataProvider, MockCountryDataProvider, MockIdentityValidator,
};

pub(super) const HOME_COUNTRY: &str = "TURKEY";
pub(super) const VALID_IDENTITY_NUMBER: &str = "10000000146";

pub(super) fn evaluation_config() -> EvaluationConfig {
    EvaluationConfig::default()
}

pub(super) fn country_provider(country: &str) -> Arc<dyn CountryDataProvider> {
    let mut provider = MockCountryDataProvider::new();
    provider
        .expect_country_data()
        .return_const(CountryData::new(country));
    Arc::new(provider)
}

/// Validator double that answers every call; tests tighten expectations on top of it.
pub(super) fn lenient_validator(country: &str, identity_valid: bool) -> MockIdentityValidator {
    let provider = country_provider(country);
    let mut validator = MockIdentityValidator::new();
    validator.expect_set_validation_mode().return_const(());
    validator.expect_is_valid().return_const(identity_valid);
    validator
        .expect_country_data_provider()
        .returning(move || Arc::clone(&provider));
    validator
}

pub(super) fn evaluator(
    validator: MockIdentityValidator,
) -> ApplicationEvaluator<MockIdentityValidator> {
    ApplicationEvaluator::new(validator, evaluation_config())
}

pub(super) fn full_stack() -> Vec<&'static str> {
    vec!["C#", "RabbitMQ", "Microservice", "Visual Studio"]
}

pub(super) fn application(age: i32) -> JobApplication {
    JobApplication::for_applicant(Applicant::new(age).with_identity_number(VALID_IDENTITY_NUMBER))
}
