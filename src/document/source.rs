use super::{Workflow, WorkflowSummary, WorkflowUpdate};
use crate::error::FetchError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Where workflow documents come from.
///
/// This is the boundary to the automation service. The rendering engine only
/// ever receives completed documents from it; retries belong to implementors.
pub trait WorkflowSource {
    /// Fetches one complete workflow document.
    fn fetch_workflow(&self, id: &str) -> Result<Workflow, FetchError>;

    /// Fetches all workflows as summaries.
    fn fetch_workflow_list(&self) -> Result<Vec<WorkflowSummary>, FetchError>;

    /// Applies an update and returns the resulting document.
    fn update_workflow(&self, id: &str, update: &WorkflowUpdate) -> Result<Workflow, FetchError>;

    fn activate_workflow(&self, id: &str) -> Result<Workflow, FetchError> {
        self.fetch_workflow(id)?;
        self.update_workflow(id, &WorkflowUpdate::activation(true))
    }

    fn deactivate_workflow(&self, id: &str) -> Result<Workflow, FetchError> {
        self.fetch_workflow(id)?;
        self.update_workflow(id, &WorkflowUpdate::activation(false))
    }
}

/// A `WorkflowSource` backed by a directory of `<id>.json` files.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, FetchError> {
        // Ids address files directly, so anything that could leave the directory is unknown.
        if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
            return Err(FetchError::NotFound { id: id.to_string() });
        }
        Ok(self.root.join(format!("{}.json", id)))
    }

    fn read(&self, id: &str, path: &Path) -> Result<Workflow, FetchError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FetchError::NotFound { id: id.to_string() },
            _ => FetchError::Io(e),
        })?;
        Workflow::from_json(&content).map_err(|source| FetchError::InvalidDocument {
            id: id.to_string(),
            source,
        })
    }
}

impl WorkflowSource for DirectorySource {
    fn fetch_workflow(&self, id: &str) -> Result<Workflow, FetchError> {
        let path = self.path_for(id)?;
        log::debug!("Loading workflow '{}' from '{}'", id, path.display());
        self.read(id, &path)
    }

    fn fetch_workflow_list(&self) -> Result<Vec<WorkflowSummary>, FetchError> {
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.root)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut summaries = Vec::with_capacity(paths.len());
        for path in paths {
            let id = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            match self.read(&id, &path) {
                Ok(workflow) => summaries.push(WorkflowSummary::from(&workflow)),
                Err(e) => log::warn!("Skipping '{}': {}", path.display(), e),
            }
        }
        Ok(summaries)
    }

    fn update_workflow(&self, id: &str, update: &WorkflowUpdate) -> Result<Workflow, FetchError> {
        let path = self.path_for(id)?;
        let mut raw = self.read(id, &path)?.into_raw();
        update.apply_to(&mut raw);

        let updated = Workflow::from_value(raw).map_err(|source| FetchError::InvalidDocument {
            id: id.to_string(),
            source,
        })?;
        fs::write(&path, updated.raw_json())?;
        log::info!(
            "Updated workflow '{}' ({} field(s))",
            id,
            update.fields().len()
        );
        Ok(updated)
    }
}
