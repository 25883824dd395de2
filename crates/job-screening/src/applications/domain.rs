use serde::{Deserialize, Deserializer, Serialize};

/// Person behind a job application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub age: i32,
    #[serde(default)]
    pub identity_number: Option<String>,
}

impl Applicant {
    pub fn new(age: i32) -> Self {
        Self {
            age,
            identity_number: None,
        }
    }

    pub fn with_identity_number(mut self, identity_number: impl Into<String>) -> Self {
        self.identity_number = Some(identity_number.into());
        self
    }
}

/// Submitted application form.
///
/// `applicant` is optional on the wire so that an incomplete form can be reported instead of
/// rejected at deserialization time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    #[serde(default)]
    pub applicant: Option<Applicant>,
    #[serde(default, deserialize_with = "deserialize_optional_list")]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub years_of_experience: u32,
}

impl JobApplication {
    pub fn for_applicant(applicant: Applicant) -> Self {
        Self {
            applicant: Some(applicant),
            ..Self::default()
        }
    }

    pub fn with_tech_stack<I, S>(mut self, tech_stack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_stack = tech_stack.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_years_of_experience(mut self, years: u32) -> Self {
        self.years_of_experience = years;
        self
    }
}

fn deserialize_optional_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let list = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(list.unwrap_or_default())
}

/// Terminal routing outcome of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationResult {
    AutoRejected,
    AutoAccepted,
    #[serde(rename = "transferred_to_hr")]
    TransferredToHR,
    #[serde(rename = "transferred_to_cto")]
    TransferredToCTO,
}

impl ApplicationResult {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationResult::AutoRejected => "auto_rejected",
            ApplicationResult::AutoAccepted => "auto_accepted",
            ApplicationResult::TransferredToHR => "transferred_to_hr",
            ApplicationResult::TransferredToCTO => "transferred_to_cto",
        }
    }
}

/// Strictness applied by an identity validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    Quick,
    Detailed,
}

impl ValidationMode {
    pub const fn label(self) -> &'static str {
        match self {
            ValidationMode::Quick => "quick",
            ValidationMode::Detailed => "detailed",
        }
    }
}

/// Country the validator's data source resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryData {
    pub country: String,
}

impl CountryData {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
        }
    }
}
