//! View-model state for the portfolio page and its transitions.
//!
//! One [`ClientState`] is owned by the controller in `vitrine-client`.
//! Every transition is a plain method on the struct so the sequencing
//! (network call, then transition, then notice) stays in one place and
//! is testable without any I/O.

use crate::collection;
use crate::project::{Project, ProjectDraft};
use crate::site::SiteConfig;
use crate::types::DbId;

/// Everything the page renders, plus the dialog and admin flags.
#[derive(Debug, Clone)]
pub struct ClientState {
    /// Ordered project collection, newest first.
    pub projects: Vec<Project>,
    /// Singleton site configuration, default-seeded until fetched.
    pub site_config: SiteConfig,
    /// One-way gate on initial render: `true` until the first project
    /// fetch completes (success or failure).
    pub loading: bool,
    /// Client-only toggle revealing the mutating controls. Carries no
    /// authorization semantics whatsoever.
    pub admin: bool,
    pub add_dialog_open: bool,
    pub edit_dialog_open: bool,
    /// Draft staged in the add dialog.
    pub new_draft: ProjectDraft,
    /// Project staged in the edit dialog, if any.
    pub editing: Option<Project>,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            site_config: SiteConfig::default(),
            loading: true,
            admin: false,
            add_dialog_open: false,
            edit_dialog_open: false,
            new_draft: ProjectDraft::seeded(),
            editing: None,
        }
    }
}

impl ClientState {
    /// Clear the loading gate. One-way; set once at startup.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Adopt a freshly fetched site configuration wholesale.
    pub fn adopt_config(&mut self, config: SiteConfig) {
        self.site_config = config;
    }

    /// Replace the collection wholesale with the server's sequence.
    pub fn adopt_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    /// Reconcile a confirmed create: prepend the server's project,
    /// reset the add draft and close the add dialog.
    pub fn project_created(&mut self, created: Project) {
        collection::prepend(&mut self.projects, created);
        self.new_draft = ProjectDraft::seeded();
        self.add_dialog_open = false;
    }

    /// Reconcile a confirmed update: replace the matching entry in
    /// place, clear the editing draft and close the edit dialog.
    pub fn project_updated(&mut self, updated: Project) {
        collection::replace_by_id(&mut self.projects, updated);
        self.editing = None;
        self.edit_dialog_open = false;
    }

    /// Reconcile a confirmed delete.
    pub fn project_removed(&mut self, id: DbId) {
        collection::remove_by_id(&mut self.projects, id);
    }

    pub fn toggle_admin(&mut self) {
        self.admin = !self.admin;
    }

    pub fn open_add_dialog(&mut self) {
        self.add_dialog_open = true;
    }

    pub fn close_add_dialog(&mut self) {
        self.add_dialog_open = false;
    }

    /// Stage a copy of an existing project in the edit dialog.
    pub fn begin_edit(&mut self, project: Project) {
        self.editing = Some(project);
        self.edit_dialog_open = true;
    }

    /// Discard the editing draft without submitting.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.edit_dialog_open = false;
    }
}
