//! # portfolio
//!
//! Leptos components for a single-page personal portfolio: profile header,
//! highlighted publications, about and contact sections.
//!
//! The page is a pure function of a compiled-in [`state::content::SiteContent`]
//! and a [`state::render_env::RenderEnv`] captured once per render pass. The
//! `ssr` feature renders it to a static HTML string for the host binary; the
//! `csr` feature builds the browser entry point, which re-renders the page
//! after reading the viewer's reduced-motion preference.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
///
/// Replaces the statically exported body with a client-side render so the
/// hero transition honours the viewer's reduced-motion preference.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        body.set_inner_html("");
    }
    log::info!("mounting portfolio landing page");
    leptos::mount::mount_to_body(app::App);
}
