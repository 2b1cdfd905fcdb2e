//! Problem-statement composer
//!
//! Pure text templating: same inputs always produce the same output, and
//! empty inputs still render with empty sections.

/// Compose a structured research problem statement from three free-text
/// fields.
pub fn compose_problem_statement(context: &str, focus: &str, significance: &str) -> String {
    format!(
        "Research Problem Statement:\n\
         \n\
         Context: {context}\n\
         \n\
         Focus: {focus}\n\
         \n\
         Significance: {significance}\n\
         \n\
         This research aims to address {focus} within the context of {context}, \n\
         which is significant because {significance}."
    )
}

/// Suggested starting research questions, at most `n`.
///
/// Fixed template questions; the user picks the ones worth keeping.
pub fn suggest_research_questions(n: usize) -> Vec<String> {
    [
        "What are the primary factors affecting the research problem?",
        "How do these factors interact with each other?",
        "What are the potential solutions to address this problem?",
    ]
    .iter()
    .take(n)
    .map(|q| q.to_string())
    .collect()
}
