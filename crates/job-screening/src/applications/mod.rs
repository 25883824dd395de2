//! Job application intake types, identity validation, and the routing evaluator.

pub mod domain;
pub mod evaluation;
pub mod identity;

#[cfg(test)]
mod tests;

pub use domain::{Applicant, ApplicationResult, CountryData, JobApplication, ValidationMode};
pub use evaluation::{
    ApplicationEvaluator, Assessment, EvaluationConfig, EvaluationError, RoutingReason,
};
pub use identity::{
    ChecksumIdentityValidator, CountryDataProvider, IdentityValidator, StaticCountryDataProvider,
};
