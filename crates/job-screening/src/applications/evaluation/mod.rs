mod config;
mod policy;
mod rules;

pub use config::{EvaluationConfig, DEFAULT_HOME_COUNTRY, DEFAULT_REQUIRED_TECH_STACK};
pub use policy::{Assessment, RoutingReason};

use super::domain::{ApplicationResult, JobApplication};
use super::identity::IdentityValidator;
use policy::{route_by_stack, validation_mode_for};
use rules::{is_home_country, tech_stack_similarity};
use tracing::{debug, info};

/// Error raised when an application cannot be evaluated at all.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("job application has no applicant")]
    MissingApplicant,
}

/// Routes job applications using an injected identity validator.
pub struct ApplicationEvaluator<V> {
    validator: V,
    config: EvaluationConfig,
}

impl<V> ApplicationEvaluator<V>
where
    V: IdentityValidator,
{
    pub fn new(validator: V, config: EvaluationConfig) -> Self {
        Self { validator, config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn into_validator(self) -> V {
        self.validator
    }

    pub fn evaluate(
        &mut self,
        application: &JobApplication,
    ) -> Result<ApplicationResult, EvaluationError> {
        self.assess(application).map(|assessment| assessment.result)
    }

    /// Run the decision tree and keep the reason behind the result.
    pub fn assess(&mut self, application: &JobApplication) -> Result<Assessment, EvaluationError> {
        let applicant = application
            .applicant
            .as_ref()
            .ok_or(EvaluationError::MissingApplicant)?;

        if applicant.age < self.config.minimum_age {
            debug!(age = applicant.age, "applicant below minimum age");
            return Ok(self.finish(
                application,
                Assessment::new(
                    RoutingReason::UnderMinimumAge {
                        age: applicant.age,
                        minimum_age: self.config.minimum_age,
                    },
                    None,
                    None,
                ),
            ));
        }

        // Mode must be in place before the identity check runs.
        let mode = validation_mode_for(applicant.age, &self.config);
        self.validator.set_validation_mode(mode);

        let identity_valid = self
            .validator
            .is_valid(applicant.identity_number.as_deref().unwrap_or_default());
        let country = self
            .validator
            .country_data_provider()
            .country_data()
            .country;
        debug!(
            identity_valid,
            %country,
            mode = mode.label(),
            "identity validator consulted"
        );

        if !is_home_country(&country, &self.config.home_country) {
            let reason = RoutingReason::OutsideHomeCountry {
                country,
                home_country: self.config.home_country.clone(),
            };
            return Ok(self.finish(application, Assessment::new(reason, Some(mode), None)));
        }

        if !identity_valid {
            return Ok(self.finish(
                application,
                Assessment::new(RoutingReason::InvalidIdentity, Some(mode), None),
            ));
        }

        let similarity = tech_stack_similarity(
            &self.config.required_tech_stack,
            &application.tech_stack,
        );
        let reason = route_by_stack(similarity, application.years_of_experience, &self.config);

        Ok(self.finish(application, Assessment::new(reason, Some(mode), similarity)))
    }

    fn finish(&self, application: &JobApplication, assessment: Assessment) -> Assessment {
        info!(
            result = assessment.result.label(),
            years_of_experience = application.years_of_experience,
            reason = %assessment.reason.summary(),
            "job application routed"
        );
        assessment
    }
}
