//! Build configuration resolved from CLI flags and environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use portfolio::app::ShellAssets;
use portfolio::state::render_env::RenderEnv;

pub const DEFAULT_OUT_DIR: &str = "dist";
pub const INDEX_FILE: &str = "index.html";
pub const STYLESHEET_FILE: &str = "style.css";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub out_dir: PathBuf,
    /// Force the reduced-motion branch. Unset means the preference is unknown
    /// at export time.
    pub reduced_motion: bool,
    /// wasm-bindgen output prefix for the browser build, e.g. `pkg/portfolio`.
    pub wasm_pkg: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR), reduced_motion: false, wasm_pkg: None }
    }
}

impl SiteConfig {
    /// Environment snapshot for a static render.
    ///
    /// No viewer exists at export time, so the preference is only known when
    /// forced; otherwise it is reported unavailable.
    pub fn render_env(&self) -> RenderEnv {
        let preference = self.reduced_motion.then_some(true);
        if preference.is_none() {
            tracing::debug!("reduced-motion preference unavailable at export; using full motion");
        }
        RenderEnv::with_preference(preference)
    }

    pub fn shell_assets(&self) -> ShellAssets {
        ShellAssets {
            stylesheet_href: STYLESHEET_FILE.to_owned(),
            wasm_pkg: self
                .wasm_pkg
                .as_deref()
                .map(|pkg| pkg.trim().trim_end_matches(".js").to_owned())
                .filter(|pkg| !pkg.is_empty()),
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.out_dir.join(INDEX_FILE)
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.out_dir.join(STYLESHEET_FILE)
    }
}
