//! Citation entity type

use serde::{Deserialize, Serialize};

use crate::entities::ValidationError;

/// Sentinel project value for citations not linked to any project
pub const UNLINKED: &str = "None";

/// A bibliography entry.
///
/// `project` is a soft reference to a [`super::Project`] title, or the
/// `"None"` sentinel. Nothing checks that the referenced project exists;
/// dangling references are tolerated. Field order matches the CSV columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub title: String,

    /// Comma-separated author list, as entered
    pub authors: String,

    /// Publication year, kept as a string
    pub year: String,

    pub journal: String,

    #[serde(default)]
    pub doi: Option<String>,

    /// Title of the associated project, or `"None"`
    pub project: String,
}

impl Citation {
    /// CSV column schema, in struct field order
    pub const HEADERS: &'static [&'static str] =
        &["title", "authors", "year", "journal", "doi", "project"];

    /// Create a citation. Title, authors, and year are required.
    pub fn new(
        title: String,
        authors: String,
        year: String,
        journal: String,
        doi: Option<String>,
        project: String,
    ) -> Result<Self, ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if authors.trim().is_empty() {
            return Err(ValidationError::MissingField("authors"));
        }
        if year.trim().is_empty() {
            return Err(ValidationError::MissingField("year"));
        }

        Ok(Self {
            title,
            authors,
            year,
            journal,
            doi,
            project,
        })
    }

    /// Whether this citation references a project (rather than the sentinel)
    pub fn is_linked(&self) -> bool {
        self.project != UNLINKED
    }

    /// APA-style reference line: `Authors (Year). Title. Journal.`
    pub fn reference_line(&self) -> String {
        format!(
            "{} ({}). {}. {}.",
            self.authors, self.year, self.title, self.journal
        )
    }

    /// APA reference line with a DOI URL suffix when a DOI is present
    pub fn export_line(&self) -> String {
        let mut line = self.reference_line();
        if let Some(ref doi) = self.doi {
            if !doi.is_empty() {
                line.push_str(&format!(" https://doi.org/{}", doi));
            }
        }
        line
    }
}
