use serde::{Deserialize, Serialize};

pub const DEFAULT_HOME_COUNTRY: &str = "TURKEY";
pub const DEFAULT_REQUIRED_TECH_STACK: [&str; 4] = ["C#", "RabbitMQ", "Microservice", "Visual Studio"];

/// Thresholds driving the routing decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub minimum_age: i32,
    pub detailed_validation_age: i32,
    pub home_country: String,
    pub required_tech_stack: Vec<String>,
    /// Percentage below which a stack is rejected outright.
    pub minimum_tech_stack_similarity: f32,
    /// Percentage at or above which an experienced applicant is accepted.
    pub auto_accept_tech_stack_similarity: f32,
    pub auto_accept_years_of_experience: u32,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            minimum_age: 18,
            detailed_validation_age: 50,
            home_country: DEFAULT_HOME_COUNTRY.to_string(),
            required_tech_stack: DEFAULT_REQUIRED_TECH_STACK
                .iter()
                .map(|item| item.to_string())
                .collect(),
            minimum_tech_stack_similarity: 25.0,
            auto_accept_tech_stack_similarity: 75.0,
            auto_accept_years_of_experience: 15,
        }
    }
}
