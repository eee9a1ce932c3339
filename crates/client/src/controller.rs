//! Controller owning the view-model state and driving every remote
//! operation.
//!
//! [`PortfolioController`] is the single owner of the
//! [`ClientState`]; each operation issues at most one HTTP call,
//! applies the matching state transition, posts a notice, and returns
//! a reference to the state after the transition so the caller decides
//! how to present it. Operations take `&mut self`, so mutations are
//! serialized by construction.

use vitrine_core::state::ClientState;
use vitrine_core::types::DbId;

use crate::api::{ApiError, PortfolioApi};
use crate::notice::NoticeBoard;

/// Fixed notice copy. Error messages from a 4xx body take precedence
/// over these where the contract defines one.
pub mod messages {
    pub const LOAD_FAILED: &str = "failed to load projects";
    pub const CONNECTION_ERROR: &str = "connection error";
    pub const REQUIRED_FIELDS: &str = "title, description and image are required";
    pub const PROJECT_ADDED: &str = "project added";
    pub const PROJECT_UPDATED: &str = "project updated";
    pub const PROJECT_DELETED: &str = "project deleted";
}

/// Outcome of the destructive-action confirmation gate shown before a
/// delete. Declined means no network call and no state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// Owns the view model and the API client.
pub struct PortfolioController {
    api: PortfolioApi,
    state: ClientState,
    notices: NoticeBoard,
}

impl PortfolioController {
    pub fn new(api: PortfolioApi, notices: NoticeBoard) -> Self {
        Self {
            api,
            state: ClientState::default(),
            notices,
        }
    }

    /// Current view-model state.
    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// Mutable access to the state for UI intents (dialog toggles,
    /// draft edits, admin toggle). Remote reconciliation goes through
    /// the operations below, never through this.
    pub fn state_mut(&mut self) -> &mut ClientState {
        &mut self.state
    }

    /// The notice board this controller posts to.
    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// One-shot startup sync: site configuration first, then the
    /// project collection. Clears the loading gate regardless of
    /// outcome.
    pub async fn startup(&mut self) -> &ClientState {
        self.load_config().await;
        self.load_projects().await
    }

    /// Fetch the site configuration. Failure is silent: the
    /// default-seeded config stays and only a diagnostic is logged,
    /// since the configuration is non-critical.
    pub async fn load_config(&mut self) -> &ClientState {
        match self.api.fetch_config().await {
            Ok(config) => self.state.adopt_config(config),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load site configuration, keeping defaults");
            }
        }
        &self.state
    }

    /// Fetch the project collection and replace the local one
    /// wholesale. Always clears the loading gate on completion.
    pub async fn load_projects(&mut self) -> &ClientState {
        match self.api.list_projects().await {
            Ok(projects) => {
                tracing::debug!(count = projects.len(), "Loaded project collection");
                self.state.adopt_projects(projects);
            }
            Err(ApiError::Rejected { status, .. }) => {
                tracing::warn!(status, "Server rejected project list request");
                self.notices.set_error(messages::LOAD_FAILED);
            }
            Err(ApiError::Request(e)) => {
                tracing::warn!(error = %e, "Project list request failed");
                self.notices.set_error(messages::CONNECTION_ERROR);
            }
        }
        self.state.finish_loading();
        &self.state
    }

    /// Submit the add dialog's draft.
    ///
    /// Validates required fields locally first; a violation posts an
    /// error notice and issues no network call. On success the created
    /// project is prepended, the draft reset and the dialog closed; on
    /// rejection the draft and dialog stay so the user can correct and
    /// resubmit.
    pub async fn create_project(&mut self) -> &ClientState {
        if self.state.new_draft.validate().is_err() {
            self.notices.set_error(messages::REQUIRED_FIELDS);
            return &self.state;
        }

        match self.api.create_project(&self.state.new_draft).await {
            Ok(created) => {
                tracing::info!(id = created.id, title = %created.title, "Project created");
                self.state.project_created(created);
                self.notices.set_success(messages::PROJECT_ADDED);
            }
            Err(e) => self.report_mutation_failure(e, "create"),
        }
        &self.state
    }

    /// Submit the edit dialog's draft.
    ///
    /// No-op when nothing is staged for editing. Validation and
    /// failure behavior match [`create_project`](Self::create_project);
    /// on success the matching entry is replaced in place.
    pub async fn update_project(&mut self) -> &ClientState {
        let Some(editing) = self.state.editing.clone() else {
            return &self.state;
        };

        if editing.validate().is_err() {
            self.notices.set_error(messages::REQUIRED_FIELDS);
            return &self.state;
        }

        match self.api.update_project(&editing).await {
            Ok(updated) => {
                tracing::info!(id = updated.id, "Project updated");
                self.state.project_updated(updated);
                self.notices.set_success(messages::PROJECT_UPDATED);
            }
            Err(e) => self.report_mutation_failure(e, "update"),
        }
        &self.state
    }

    /// Delete a project after the destructive-action confirmation
    /// gate. A declined confirmation is a complete no-op.
    pub async fn delete_project(&mut self, id: DbId, confirmation: Confirmation) -> &ClientState {
        if confirmation == Confirmation::Declined {
            return &self.state;
        }

        match self.api.delete_project(id).await {
            Ok(()) => {
                tracing::info!(id, "Project deleted");
                self.state.project_removed(id);
                self.notices.set_success(messages::PROJECT_DELETED);
            }
            Err(e) => self.report_mutation_failure(e, "delete"),
        }
        &self.state
    }

    // ---- private helpers ----

    /// Map a failed mutation onto the notice board: server rejections
    /// surface the decoded message, transport failures the generic
    /// connection-error copy. Local state is left at the pre-request
    /// baseline either way.
    fn report_mutation_failure(&self, error: ApiError, operation: &'static str) {
        match error {
            ApiError::Rejected { status, message } => {
                tracing::warn!(status, operation, "Server rejected project mutation");
                self.notices.set_error(message);
            }
            ApiError::Request(e) => {
                tracing::warn!(error = %e, operation, "Project mutation request failed");
                self.notices.set_error(messages::CONNECTION_ERROR);
            }
        }
    }
}
