//! In-memory project store.
//!
//! ## Identifier assignment
//!
//! Identifiers come from a monotonic counter that only moves forward. A new
//! project always gets an id strictly greater than every id the store has
//! ever handed out, so deleting the newest project never lets its id be
//! reused. Deletes leave gaps; remaining projects are never renumbered.

use crate::{Result as StoreResult, StoreError};

use pf_core::{NewProject, Project, ProjectPatch};

use std::collections::BTreeMap;
use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use error_location::ErrorLocation;
use log::debug;
use tokio::sync::RwLock;

/// Shared handle to the project collection. Clones see the same data.
#[derive(Clone, Default)]
pub struct ProjectStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    /// Keyed by id; ids are monotonic so key order is insertion order
    projects: BTreeMap<u64, Project>,
    /// Highest id ever assigned
    last_id: u64,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with existing projects.
    /// The counter continues after the highest id given.
    pub fn with_projects(projects: Vec<Project>) -> Self {
        let last_id = projects.iter().map(|p| p.id).max().unwrap_or(0);
        let projects = projects.into_iter().map(|p| (p.id, p)).collect();

        Self {
            inner: Arc::new(RwLock::new(StoreInner { projects, last_id })),
        }
    }

    /// All projects, newest first. Equal timestamps keep insertion order.
    pub async fn find_all(&self) -> Vec<Project> {
        let inner = self.inner.read().await;

        let mut projects: Vec<Project> = inner.projects.values().cloned().collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        projects
    }

    pub async fn find_by_id(&self, id: u64) -> Option<Project> {
        self.inner.read().await.projects.get(&id).cloned()
    }

    /// Assign the next id, stamp the creation time and store the project
    pub async fn create(&self, input: NewProject) -> Project {
        let mut inner = self.inner.write().await;

        inner.last_id += 1;
        let project = Project::new(inner.last_id, input, Utc::now());
        inner.projects.insert(project.id, project.clone());

        debug!(
            "Stored project {} ({} total)",
            project.id,
            inner.projects.len()
        );

        project
    }

    /// Merge a patch into an existing project and return the result
    pub async fn update(&self, id: u64, patch: ProjectPatch) -> StoreResult<Project> {
        let mut inner = self.inner.write().await;

        let project = inner
            .projects
            .get_mut(&id)
            .ok_or_else(|| StoreError::ProjectNotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            })?;

        project.apply(patch, Utc::now());

        Ok(project.clone())
    }

    /// Remove a project, returning what was removed
    pub async fn delete(&self, id: u64) -> StoreResult<Project> {
        let mut inner = self.inner.write().await;

        inner
            .projects
            .remove(&id)
            .ok_or_else(|| StoreError::ProjectNotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.projects.len()
    }
}
