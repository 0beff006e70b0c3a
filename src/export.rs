//! Writes the rendered site to disk.
//!
//! DESIGN
//! ======
//! Content is checked before anything is written, so a bad literal link fails
//! the build instead of shipping.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use std::fs;
use std::path::{Path, PathBuf};

use portfolio::state::content::SiteContent;

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::render::render_document;

/// Stylesheet shipped next to `index.html`.
pub const STYLESHEET: &str = include_str!("../client/style/portfolio.css");

/// What a build wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub index_path: PathBuf,
    pub stylesheet_path: PathBuf,
    pub index_bytes: usize,
    pub publications: usize,
}

/// Validate, render and write `index.html` plus the stylesheet.
///
/// # Errors
///
/// Returns [`SiteError::Content`] for invalid content (nothing is written) and
/// [`SiteError::Io`] when the output directory or files cannot be written.
pub fn export_site(content: &SiteContent, config: &SiteConfig) -> Result<ExportSummary, SiteError> {
    content.validate()?;

    fs::create_dir_all(&config.out_dir).map_err(|source| SiteError::Io { path: config.out_dir.clone(), source })?;

    let html = render_document(content, config.render_env(), &config.shell_assets());
    let index_path = config.index_path();
    write_file(&index_path, &html)?;

    let stylesheet_path = config.stylesheet_path();
    write_file(&stylesheet_path, STYLESHEET)?;

    tracing::info!(
        out_dir = %config.out_dir.display(),
        bytes = html.len(),
        publications = content.publications.len(),
        "site exported"
    );

    Ok(ExportSummary { index_path, stylesheet_path, index_bytes: html.len(), publications: content.publications.len() })
}

fn write_file(path: &Path, contents: &str) -> Result<(), SiteError> {
    fs::write(path, contents).map_err(|source| SiteError::Io { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}
