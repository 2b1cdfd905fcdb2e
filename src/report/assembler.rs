//! Report assembler
//!
//! Deterministic string composition: five fixed sections in fixed order
//! (Introduction, Research Questions, Methodology, Results, References).
//! User text is embedded verbatim; there is no escaping or length limit.

use chrono::NaiveDate;

use crate::entities::citation::Citation;
use crate::entities::project::Project;

pub const NO_PROBLEM_STATEMENT: &str = "No problem statement provided";
pub const NO_RESEARCH_QUESTIONS: &str = "No research questions defined";
pub const NO_METHODOLOGY: &str = "Methodology not specified";
pub const NO_RESULTS: &str = "No analysis results available";
pub const NO_CITATIONS: &str = "No citations";

/// Assemble a plain-text research report.
///
/// `analysis_results` is an ordered key/value mapping dumped in insertion
/// order. The date is a parameter so the output is a pure function of its
/// inputs; callers pass today's date.
pub fn assemble(
    project: &Project,
    analysis_results: &[(String, String)],
    citations: &[Citation],
    date: NaiveDate,
) -> String {
    format!(
        "\nResearch Report\n{rule}\n\n\
         Title: {title}\n\
         Date: {date}\n\n\
         1. Introduction\n{section_rule}\n{introduction}\n\n\
         2. Research Questions\n{section_rule}\n{questions}\n\n\
         3. Methodology\n{section_rule}\n{methodology}\n\n\
         4. Results\n{section_rule}\n{results}\n\n\
         5. References\n{section_rule}\n{references}\n",
        rule = "-".repeat(50),
        section_rule = "-".repeat(20),
        title = project.title,
        date = date.format("%Y-%m-%d"),
        introduction = project
            .problem_statement
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(NO_PROBLEM_STATEMENT),
        questions = format_research_questions(&project.research_questions),
        methodology = project
            .methodology
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(NO_METHODOLOGY),
        results = format_analysis_results(analysis_results),
        references = format_citations(citations),
    )
}

fn format_research_questions(questions: &[String]) -> String {
    if questions.is_empty() {
        return NO_RESEARCH_QUESTIONS.to_string();
    }

    let mut formatted = String::from("Research Questions:\n");
    for (i, question) in questions.iter().enumerate() {
        formatted.push_str(&format!("{}. {}\n", i + 1, question));
    }
    formatted
}

fn format_analysis_results(results: &[(String, String)]) -> String {
    if results.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut formatted = String::from("Analysis Results:\n");
    for (key, value) in results {
        formatted.push_str(&format!("\n{}:\n{}\n", key, value));
    }
    formatted
}

fn format_citations(citations: &[Citation]) -> String {
    if citations.is_empty() {
        return NO_CITATIONS.to_string();
    }

    let mut formatted = String::from("References:\n");
    for citation in citations {
        formatted.push_str(&format!("\n{}", citation.reference_line()));
    }
    formatted
}
