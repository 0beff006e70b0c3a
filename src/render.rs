//! Server-side rendering of the landing page to an HTML string.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use portfolio::app::{ShellAssets, shell};
use portfolio::state::content::SiteContent;
use portfolio::state::render_env::RenderEnv;

/// Render the complete document in one synchronous pass.
pub fn render_document(content: &SiteContent, env: RenderEnv, assets: &ShellAssets) -> String {
    let owner = Owner::new();
    let html = owner.with(|| shell(content.clone(), env, assets.clone()).to_html());
    tracing::debug!(
        bytes = html.len(),
        publications = content.publications.len(),
        reduced_motion = env.reduced_motion,
        year = env.year,
        "rendered landing page"
    );
    html
}
