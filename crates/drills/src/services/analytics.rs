//! Page rendering with page-view tracking

use async_trait::async_trait;

/// Path recorded for every home page render
pub const HOME_PATH: &str = "/home";

/// Page-view tracking sink
#[async_trait]
pub trait Analytics: Send + Sync {
    /// Record a view of `path`. Failures are the sink's problem.
    async fn track_page_view(&self, path: &str);
}

/// Render the home page, tracking the view first.
pub async fn render_page(analytics: &dyn Analytics) -> String {
    analytics.track_page_view(HOME_PATH).await;
    "<div>content</div>".to_string()
}
