//! Report pipeline - problem statements and assembled research reports

pub mod assembler;
pub mod composer;

pub use assembler::assemble;
pub use composer::{compose_problem_statement, suggest_research_questions};
