//! Record store - flat-file persistence for projects and citations
//!
//! All records live in a `data/` directory of plain, human-editable files:
//! two CSV tables (`projects.csv`, `citations.csv`) and two JSON documents
//! (`profile.json`, `settings.json`). There is no in-memory cache: every
//! read re-parses the file and every append reloads the full table, appends
//! one row, and rewrites the file. Correctness depends on a single-writer
//! assumption; there is no locking.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::entities::citation::Citation;
use crate::entities::profile::Profile;
use crate::entities::project::Project;
use crate::entities::settings::Settings;

/// Handle to a research workspace (parent of `data/`)
#[derive(Debug)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Find the workspace root by walking up from the current directory
    pub fn discover() -> Result<Self, StoreError> {
        let current = std::env::current_dir().map_err(|e| StoreError::Io(e.to_string()))?;
        Self::discover_from(&current)
    }

    /// Find the workspace root by walking up from the given directory
    pub fn discover_from(start: &Path) -> Result<Self, StoreError> {
        let mut current = start
            .canonicalize()
            .map_err(|e| StoreError::Io(e.to_string()))?;

        loop {
            if current.join("data").join("projects.csv").is_file() {
                return Ok(Self { root: current });
            }

            if !current.pop() {
                return Err(StoreError::NotFound {
                    searched_from: start.to_path_buf(),
                });
            }
        }
    }

    /// Open a workspace at the given root without discovery
    pub fn open(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Initialize the storage layout at the given path.
    ///
    /// Idempotent: directories are created if missing and each table file is
    /// written with its header row and zero records only if it does not
    /// already exist. An existing file is never overwritten, so running
    /// `init` twice leaves the schema files byte-identical.
    pub fn init(path: &Path) -> Result<Self, StoreError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        for dir in ["data", "data/reports"] {
            std::fs::create_dir_all(root.join(dir)).map_err(|e| StoreError::Io(e.to_string()))?;
        }

        let store = Self { root };

        if !store.projects_path().exists() {
            store.write_projects(&[])?;
        }
        if !store.citations_path().exists() {
            store.write_citations(&[])?;
        }

        Ok(store)
    }

    /// Get the workspace root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    /// Get the directory where generated reports are written
    pub fn reports_dir(&self) -> PathBuf {
        self.root.join("data").join("reports")
    }

    pub fn projects_path(&self) -> PathBuf {
        self.root.join("data").join("projects.csv")
    }

    pub fn citations_path(&self) -> PathBuf {
        self.root.join("data").join("citations.csv")
    }

    pub fn profile_path(&self) -> PathBuf {
        self.root.join("data").join("profile.json")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join("data").join("settings.json")
    }

    /// Load all projects in file order. A missing file yields an empty list.
    pub fn load_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.load_table(&self.projects_path())
    }

    /// Load all citations in file order. A missing file yields an empty list.
    pub fn load_citations(&self) -> Result<Vec<Citation>, StoreError> {
        self.load_table(&self.citations_path())
    }

    /// Append one project: load the full table, push, rewrite the file.
    ///
    /// Not atomic. Duplicate titles are tolerated; uniqueness is by
    /// convention only.
    pub fn append_project(&self, project: &Project) -> Result<(), StoreError> {
        let mut projects = self.load_projects()?;
        projects.push(project.clone());
        self.write_projects(&projects)
    }

    /// Append one citation. Citations are append-only; nothing ever updates
    /// or deletes a row.
    pub fn append_citation(&self, citation: &Citation) -> Result<(), StoreError> {
        let mut citations = self.load_citations()?;
        citations.push(citation.clone());
        self.write_citations(&citations)
    }

    /// Find a project by exact title. Returns the first match in file order.
    pub fn find_project(&self, title: &str) -> Result<Option<Project>, StoreError> {
        Ok(self.load_projects()?.into_iter().find(|p| p.title == title))
    }

    /// Update the first project with the given title in place and rewrite
    /// the table. Returns the updated record, or None when no title matches.
    pub fn update_project(
        &self,
        title: &str,
        update: impl FnOnce(&mut Project),
    ) -> Result<Option<Project>, StoreError> {
        let mut projects = self.load_projects()?;
        let Some(project) = projects.iter_mut().find(|p| p.title == title) else {
            return Ok(None);
        };
        update(project);
        let updated = project.clone();
        self.write_projects(&projects)?;
        Ok(Some(updated))
    }

    /// Load the profile document, or defaults if the file does not exist
    pub fn load_profile(&self) -> Result<Profile, StoreError> {
        let path = self.profile_path();
        if !path.exists() {
            return Ok(Profile::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| StoreError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| StoreError::Malformed {
            path: path.clone(),
            reason: e.to_string(),
        })
    }

    pub fn save_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        let json =
            serde_json::to_string_pretty(profile).map_err(|e| StoreError::Io(e.to_string()))?;
        std::fs::write(self.profile_path(), json).map_err(|e| StoreError::Io(e.to_string()))
    }

    /// Load the settings document, or defaults if the file does not exist
    pub fn load_settings(&self) -> Result<Settings, StoreError> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| StoreError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| StoreError::Malformed {
            path: path.clone(),
            reason: e.to_string(),
        })
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), StoreError> {
        let json =
            serde_json::to_string_pretty(settings).map_err(|e| StoreError::Io(e.to_string()))?;
        std::fs::write(self.settings_path(), json).map_err(|e| StoreError::Io(e.to_string()))
    }

    fn load_table<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>, StoreError> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let mut reader =
            csv::Reader::from_path(path).map_err(|e| StoreError::Io(e.to_string()))?;

        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: T = result.map_err(|e| StoreError::Malformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
            records.push(record);
        }
        Ok(records)
    }

    fn write_projects(&self, projects: &[Project]) -> Result<(), StoreError> {
        Self::write_table(&self.projects_path(), Project::HEADERS, projects)
    }

    fn write_citations(&self, citations: &[Citation]) -> Result<(), StoreError> {
        Self::write_table(&self.citations_path(), Citation::HEADERS, citations)
    }

    // The header row is written explicitly so an empty table still carries
    // its schema (serde-based writers emit no header for zero records).
    fn write_table<T: serde::Serialize>(
        path: &Path,
        headers: &[&str],
        records: &[T],
    ) -> Result<(), StoreError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(|e| StoreError::Io(e.to_string()))?;

        writer
            .write_record(headers)
            .map_err(|e| StoreError::Io(e.to_string()))?;
        for record in records {
            writer
                .serialize(record)
                .map_err(|e| StoreError::Io(e.to_string()))?;
        }
        writer.flush().map_err(|e| StoreError::Io(e.to_string()))
    }
}

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not a research workspace (searched from {searched_from:?}). Run 'mrt init' to create one.")]
    NotFound { searched_from: PathBuf },

    #[error("malformed file {path:?}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(String),
}
