//! `vitrine-client` -- startup synchronization runner.
//!
//! Loads the site configuration and project collection from the
//! backend and logs the resulting view model. Useful as a smoke test
//! against a running backend and as the reference wiring for embedding
//! the controller in a UI shell.
//!
//! # Environment variables
//!
//! | Variable       | Required | Default                     | Description            |
//! |----------------|----------|-----------------------------|------------------------|
//! | `API_BASE_URL` | no       | `http://localhost:5001/api` | Backend base URL       |

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine_client::api::PortfolioApi;
use vitrine_client::config::ClientConfig;
use vitrine_client::controller::PortfolioController;
use vitrine_client::notice::NoticeBoard;
use vitrine_core::site::SKILLS;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrine_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(api_base_url = %config.api_base_url, "Starting portfolio client");

    let api = PortfolioApi::new(config.api_base_url);
    let notices = NoticeBoard::new();
    let mut controller = PortfolioController::new(api, notices);

    let state = controller.startup().await;

    tracing::info!(
        designer = %state.site_config.designer_name,
        title = %state.site_config.designer_title,
        projects = state.projects.len(),
        skills = SKILLS.len(),
        loading = state.loading,
        "Startup sync complete",
    );

    for project in &state.projects {
        tracing::info!(
            id = project.id,
            title = %project.title,
            category = %project.category,
            year = %project.year,
            "Project",
        );
    }

    if let Some(error) = controller.notices().error() {
        tracing::warn!(%error, "Startup finished with an error notice");
    }
}
