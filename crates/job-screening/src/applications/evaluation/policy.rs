use super::super::domain::{ApplicationResult, ValidationMode};
use super::config::EvaluationConfig;
use serde::{Deserialize, Serialize};

/// Why an application ended up with its result, kept for audits and CLI output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoutingReason {
    UnderMinimumAge {
        age: i32,
        minimum_age: i32,
    },
    OutsideHomeCountry {
        country: String,
        home_country: String,
    },
    InvalidIdentity,
    EmptyTechStack,
    InsufficientTechStack {
        similarity: f32,
        minimum: f32,
    },
    MeetsAutoAcceptCriteria {
        similarity: f32,
        years_of_experience: u32,
    },
    RequiresReview {
        similarity: f32,
        years_of_experience: u32,
    },
}

impl RoutingReason {
    pub fn result(&self) -> ApplicationResult {
        match self {
            RoutingReason::UnderMinimumAge { .. }
            | RoutingReason::EmptyTechStack
            | RoutingReason::InsufficientTechStack { .. } => ApplicationResult::AutoRejected,
            RoutingReason::OutsideHomeCountry { .. } => ApplicationResult::TransferredToCTO,
            RoutingReason::MeetsAutoAcceptCriteria { .. } => ApplicationResult::AutoAccepted,
            RoutingReason::InvalidIdentity | RoutingReason::RequiresReview { .. } => {
                ApplicationResult::TransferredToHR
            }
        }
    }

    pub fn summary(&self) -> String {
        match self {
            RoutingReason::UnderMinimumAge { age, minimum_age } => {
                format!("applicant is {age}, below the minimum age of {minimum_age}")
            }
            RoutingReason::OutsideHomeCountry {
                country,
                home_country,
            } => format!("office country {country} is outside {home_country}"),
            RoutingReason::InvalidIdentity => "identity number failed validation".to_string(),
            RoutingReason::EmptyTechStack => "no tech stack provided".to_string(),
            RoutingReason::InsufficientTechStack {
                similarity,
                minimum,
            } => format!("tech stack match {similarity:.0}% below minimum {minimum:.0}%"),
            RoutingReason::MeetsAutoAcceptCriteria {
                similarity,
                years_of_experience,
            } => format!(
                "tech stack match {similarity:.0}% with {years_of_experience} years of experience"
            ),
            RoutingReason::RequiresReview {
                similarity,
                years_of_experience,
            } => format!(
                "manual review: tech stack match {similarity:.0}%, {years_of_experience} years of experience"
            ),
        }
    }
}

/// Audit trail for a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub result: ApplicationResult,
    pub reason: RoutingReason,
    /// Mode pushed to the validator; absent when the validator was never consulted.
    pub validation_mode: Option<ValidationMode>,
    pub tech_stack_similarity: Option<f32>,
}

impl Assessment {
    pub(crate) fn new(
        reason: RoutingReason,
        validation_mode: Option<ValidationMode>,
        tech_stack_similarity: Option<f32>,
    ) -> Self {
        Self {
            result: reason.result(),
            reason,
            validation_mode,
            tech_stack_similarity,
        }
    }
}

pub(crate) fn validation_mode_for(age: i32, config: &EvaluationConfig) -> ValidationMode {
    if age > config.detailed_validation_age {
        ValidationMode::Detailed
    } else {
        ValidationMode::Quick
    }
}

pub(crate) fn route_by_stack(
    similarity: Option<f32>,
    years_of_experience: u32,
    config: &EvaluationConfig,
) -> RoutingReason {
    let Some(similarity) = similarity else {
        return RoutingReason::EmptyTechStack;
    };

    if similarity < config.minimum_tech_stack_similarity {
        return RoutingReason::InsufficientTechStack {
            similarity,
            minimum: config.minimum_tech_stack_similarity,
        };
    }

    if similarity >= config.auto_accept_tech_stack_similarity
        && years_of_experience >= config.auto_accept_years_of_experience
    {
        return RoutingReason::MeetsAutoAcceptCriteria {
            similarity,
            years_of_experience,
        };
    }

    RoutingReason::RequiresReview {
        similarity,
        years_of_experience,
    }
}
