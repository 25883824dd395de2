use crate::cli::{CheckIdentityArgs, EvaluateArgs};
use job_screening::applications::{
    ApplicationEvaluator, Assessment, ChecksumIdentityValidator, EvaluationConfig,
    IdentityValidator, JobApplication, ValidationMode,
};
use job_screening::config::AppConfig;
use job_screening::error::AppError;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize)]
struct ConfigView<'a> {
    office_country: &'a str,
    evaluation: &'a EvaluationConfig,
}

pub(crate) fn run_evaluate(config: &AppConfig, args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        input,
        office_country,
        json,
    } = args;

    let form = read_application(input.as_deref())?;
    let office_country = office_country.unwrap_or_else(|| config.office_country.clone());
    let assessment = evaluate_application(&form, &office_country, config.evaluation.clone())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        render_assessment(&assessment);
    }
    Ok(())
}

pub(crate) fn run_check_identity(
    config: &AppConfig,
    args: CheckIdentityArgs,
) -> Result<(), AppError> {
    let mode = if args.detailed {
        ValidationMode::Detailed
    } else {
        ValidationMode::Quick
    };

    let valid = check_identity(&config.office_country, &args.identity_number, mode);
    info!(mode = mode.label(), valid, "identity number checked");
    println!(
        "{} ({} validation)",
        if valid { "valid" } else { "invalid" },
        mode.label()
    );
    Ok(())
}

pub(crate) fn run_show_config(config: &AppConfig) -> Result<(), AppError> {
    let view = ConfigView {
        office_country: &config.office_country,
        evaluation: &config.evaluation,
    };
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn read_application(path: Option<&Path>) -> Result<JobApplication, AppError> {
    match path {
        Some(path) => parse_application(BufReader::new(File::open(path)?)),
        None => parse_application(io::stdin().lock()),
    }
}

pub(crate) fn parse_application<R: Read>(reader: R) -> Result<JobApplication, AppError> {
    Ok(serde_json::from_reader(reader)?)
}

pub(crate) fn evaluate_application(
    form: &JobApplication,
    office_country: &str,
    evaluation: EvaluationConfig,
) -> Result<Assessment, AppError> {
    let validator = ChecksumIdentityValidator::for_country(office_country);
    let mut evaluator = ApplicationEvaluator::new(validator, evaluation);
    Ok(evaluator.assess(form)?)
}

pub(crate) fn check_identity(
    office_country: &str,
    identity_number: &str,
    mode: ValidationMode,
) -> bool {
    let mut validator = ChecksumIdentityValidator::for_country(office_country);
    validator.set_validation_mode(mode);
    validator.is_valid(identity_number)
}

fn render_assessment(assessment: &Assessment) {
    println!("Result: {}", assessment.result.label());
    println!("Reason: {}", assessment.reason.summary());
    if let Some(mode) = assessment.validation_mode {
        println!("Identity validation: {}", mode.label());
    }
    if let Some(similarity) = assessment.tech_stack_similarity {
        println!("Tech stack match: {similarity:.0}%");
    }
}
