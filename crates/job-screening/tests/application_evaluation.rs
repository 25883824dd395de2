//! End-to-end routing scenarios exercised through the public evaluator API with a recording
//! identity validator standing in for the real one.

mod common {
    use std::sync::{Arc, Mutex};

    use job_screening::applications::{
        CountryDataProvider, IdentityValidator, StaticCountryDataProvider, ValidationMode,
    };

    #[derive(Clone)]
    pub(super) struct RecordingValidator {
        identity_valid: bool,
        countries: Arc<dyn CountryDataProvider>,
        mode: ValidationMode,
        checked: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingValidator {
        pub(super) fn new(country: &str, identity_valid: bool) -> Self {
            Self {
                identity_valid,
                countries: Arc::new(StaticCountryDataProvider::new(country)),
                mode: ValidationMode::Quick,
                checked: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub(super) fn checked(&self) -> Vec<String> {
            self.checked.lock().expect("validator mutex poisoned").clone()
        }
    }

    impl IdentityValidator for RecordingValidator {
        fn is_valid(&self, identity_number: &str) -> bool {
            self.checked
                .lock()
                .expect("validator mutex poisoned")
                .push(identity_number.to_string());
            self.identity_valid
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
}

use common::RecordingValidator;
use job_screening::applications::{
    Applicant, ApplicationEvaluator, ApplicationResult, ChecksumIdentityValidator,
    EvaluationConfig, EvaluationError, IdentityValidator, JobApplication, ValidationMode,
};

fn applicant(age: i32) -> Applicant {
    Applicant::new(age).with_identity_number("10000000146")
}

#[test]
fn under_age_applicants_never_reach_identity_validation() {
    let mut validator = RecordingValidator::new("TURKEY", true);
    let form = JobApplication::for_applicant(applicant(17))
        .with_tech_stack(["C#", "RabbitMQ", "Microservice", "Visual Studio"])
        .with_years_of_experience(20);

    let result = ApplicationEvaluator::new(&mut validator, EvaluationConfig::default())
        .evaluate(&form)
        .expect("application evaluates");

    assert_eq!(result, ApplicationResult::AutoRejected);
    assert!(validator.checked().is_empty());
}

#[test]
fn missing_applicant_is_reported() {
    let mut evaluator = ApplicationEvaluator::new(
        RecordingValidator::new("TURKEY", true),
        EvaluationConfig::default(),
    );

    let error = evaluator
        .evaluate(&JobApplication::default())
        .expect_err("missing applicant fails");

    assert!(matches!(error, EvaluationError::MissingApplicant));
    assert_eq!(error.to_string(), "job application has no applicant");
}

#[test]
fn routes_each_scenario_to_expected_outcome() {
    let scenarios = [
        (
            "accepted",
            RecordingValidator::new("TURKEY", true),
            JobApplication::for_applicant(applicant(19))
                .with_tech_stack(["C#", "RabbitMQ", "Microservice", "Visual Studio"])
                .with_years_of_experience(16),
            ApplicationResult::AutoAccepted,
        ),
        (
            "invalid identity",
            RecordingValidator::new("TURKEY", false),
            JobApplication::for_applicant(applicant(19)),
            ApplicationResult::TransferredToHR,
        ),
        (
            "foreign office",
            RecordingValidator::new("SPAIN", true),
            JobApplication::for_applicant(applicant(19)),
            ApplicationResult::TransferredToCTO,
        ),
        (
            "blank stack",
            RecordingValidator::new("TURKEY", true),
            JobApplication::for_applicant(applicant(19)).with_tech_stack([""]),
            ApplicationResult::AutoRejected,
        ),
    ];

    for (name, validator, form, expected) in scenarios {
        let mut evaluator = ApplicationEvaluator::new(validator, EvaluationConfig::default());
        let result = evaluator.evaluate(&form).expect("application evaluates");
        assert_eq!(result, expected, "scenario '{name}'");
        assert_eq!(
            evaluator.validator().checked(),
            vec!["10000000146".to_string()],
            "scenario '{name}' validates identity once"
        );
    }
}

#[test]
fn applicants_over_fifty_leave_validator_in_detailed_mode() {
    let mut evaluator = ApplicationEvaluator::new(
        RecordingValidator::new("SPAIN", true),
        EvaluationConfig::default(),
    );

    evaluator
        .evaluate(&JobApplication::for_applicant(applicant(51)))
        .expect("application evaluates");

    assert_eq!(
        evaluator.into_validator().validation_mode(),
        ValidationMode::Detailed
    );
}

#[test]
fn evaluates_json_payload_with_checksum_validator() {
    let payload = r#"{
        "applicant": { "age": 55, "identity_number": "12345678950" },
        "tech_stack": ["c#", "rabbitmq", "microservice", "visual studio", "docker"],
        "years_of_experience": 22
    }"#;
    let form: JobApplication = serde_json::from_str(payload).expect("payload parses");

    let mut evaluator = ApplicationEvaluator::new(
        ChecksumIdentityValidator::for_country("turkey"),
        EvaluationConfig::default(),
    );
    let assessment = evaluator.assess(&form).expect("application evaluates");

    assert_eq!(assessment.result, ApplicationResult::AutoAccepted);
    assert_eq!(assessment.validation_mode, Some(ValidationMode::Detailed));
    assert_eq!(assessment.tech_stack_similarity, Some(100.0));

    let rendered = serde_json::to_value(&assessment).expect("assessment serializes");
    assert_eq!(rendered["result"], "auto_accepted");
    assert_eq!(rendered["reason"]["kind"], "meets_auto_accept_criteria");
}

#[test]
fn null_tech_stack_is_treated_as_empty() {
    let payload = r#"{
        "applicant": { "age": 30, "identity_number": "10000000146" },
        "tech_stack": null,
        "years_of_experience": 10
    }"#;
    let form: JobApplication = serde_json::from_str(payload).expect("payload parses");
    assert!(form.tech_stack.is_empty());

    let mut evaluator = ApplicationEvaluator::new(
        RecordingValidator::new("TURKEY", true),
        EvaluationConfig::default(),
    );

    assert_eq!(
        evaluator.evaluate(&form).expect("application evaluates"),
        ApplicationResult::AutoRejected
    );
}

#[test]
fn ages_beyond_byte_range_are_routed() {
    let form: JobApplication =
        serde_json::from_str(r#"{"applicant":{"age":300,"identity_number":"10000000146"}}"#)
            .expect("payload parses");

    let mut evaluator = ApplicationEvaluator::new(
        RecordingValidator::new("SPAIN", true),
        EvaluationConfig::default(),
    );
    let result = evaluator.evaluate(&form).expect("application evaluates");

    assert_eq!(result, ApplicationResult::TransferredToCTO);
    assert_eq!(
        evaluator.into_validator().validation_mode(),
        ValidationMode::Detailed
    );
}

#[test]
fn detailed_mode_rejects_bad_check_digits_for_older_applicants() {
    let form = JobApplication::for_applicant(Applicant::new(60).with_identity_number("12345678901"))
        .with_tech_stack(["C#", "RabbitMQ", "Microservice"])
        .with_years_of_experience(30);

    let mut evaluator = ApplicationEvaluator::new(
        ChecksumIdentityValidator::for_country("TURKEY"),
        EvaluationConfig::default(),
    );

    assert_eq!(
        evaluator.evaluate(&form).expect("application evaluates"),
        ApplicationResult::TransferredToHR
    );
}
