//! Project entity type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::ValidationError;

/// The six research stages tracked per project, in pipeline order
pub const STAGES: [&str; 6] = [
    "Problem Formulation",
    "Literature Review",
    "Research Design",
    "Data Collection",
    "Analysis",
    "Reporting",
];

/// Kebab-case stage keys accepted on the command line, in [`STAGES`] order
pub const STAGE_KEYS: [&str; 6] = [
    "problem-formulation",
    "literature-review",
    "research-design",
    "data-collection",
    "analysis",
    "reporting",
];

/// A research project.
///
/// The title is the record's key by convention only; the store never
/// enforces uniqueness. Field order matches the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project title (conventional key)
    pub title: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Status label, e.g. "Active"
    pub status: String,

    /// Creation date
    pub created_date: NaiveDate,

    pub problem_formulation_progress: f64,
    pub literature_review_progress: f64,
    pub research_design_progress: f64,
    pub data_collection_progress: f64,
    pub analysis_progress: f64,
    pub reporting_progress: f64,

    /// Composed research problem statement
    #[serde(default)]
    pub problem_statement: Option<String>,

    /// Ordered research questions, stored in one CSV field
    #[serde(default, with = "question_list")]
    pub research_questions: Vec<String>,

    /// Methodology text for the report
    #[serde(default)]
    pub methodology: Option<String>,

    /// Results text for the report
    #[serde(default)]
    pub results: Option<String>,
}

impl Project {
    /// CSV column schema, in struct field order
    pub const HEADERS: &'static [&'static str] = &[
        "title",
        "description",
        "status",
        "created_date",
        "problem_formulation_progress",
        "literature_review_progress",
        "research_design_progress",
        "data_collection_progress",
        "analysis_progress",
        "reporting_progress",
        "problem_statement",
        "research_questions",
        "methodology",
        "results",
    ];

    /// Separator for the research-questions CSV field
    pub const QUESTION_SEP: &'static str = "|";

    /// Create a new active project dated today, all stages at zero progress
    pub fn new(title: String, description: String) -> Result<Self, ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }

        Ok(Self {
            title,
            description,
            status: "Active".to_string(),
            created_date: chrono::Local::now().date_naive(),
            problem_formulation_progress: 0.0,
            literature_review_progress: 0.0,
            research_design_progress: 0.0,
            data_collection_progress: 0.0,
            analysis_progress: 0.0,
            reporting_progress: 0.0,
            problem_statement: None,
            research_questions: Vec::new(),
            methodology: None,
            results: None,
        })
    }

    /// Stage progress fractions in [`STAGES`] order
    pub fn progress(&self) -> [f64; 6] {
        [
            self.problem_formulation_progress,
            self.literature_review_progress,
            self.research_design_progress,
            self.data_collection_progress,
            self.analysis_progress,
            self.reporting_progress,
        ]
    }

    /// Overall progress as the mean of the six stage fractions
    pub fn overall_progress(&self) -> f64 {
        self.progress().iter().sum::<f64>() / STAGES.len() as f64
    }

    /// Set one stage's progress by its [`STAGE_KEYS`] key.
    /// Validates the key and that the fraction lies in [0, 1].
    pub fn set_progress(&mut self, key: &str, fraction: f64) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(ValidationError::ProgressOutOfRange(fraction));
        }
        let field = match key {
            "problem-formulation" => &mut self.problem_formulation_progress,
            "literature-review" => &mut self.literature_review_progress,
            "research-design" => &mut self.research_design_progress,
            "data-collection" => &mut self.data_collection_progress,
            "analysis" => &mut self.analysis_progress,
            "reporting" => &mut self.reporting_progress,
            _ => return Err(ValidationError::UnknownStage(key.to_string())),
        };
        *field = fraction;
        Ok(())
    }
}

/// CSV codec for the research-questions list: one cell, `|`-separated.
/// Questions containing the separator are not representable.
mod question_list {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Project;

    pub fn serialize<S: Serializer>(questions: &[String], ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&questions.join(Project::QUESTION_SEP))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
        let raw = String::deserialize(de)?;
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        Ok(raw.split(Project::QUESTION_SEP).map(str::to_string).collect())
    }
}
