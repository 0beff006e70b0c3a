//! Document shell and browser root component.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use crate::pages::landing::LandingPage;
use crate::state::content::SiteContent;
use crate::state::render_env::RenderEnv;

/// Asset locations referenced from the document head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellAssets {
    pub stylesheet_href: String,
    /// Path prefix of the wasm-bindgen output (without `.js`). `None` exports
    /// a script-free page.
    pub wasm_pkg: Option<String>,
}

impl Default for ShellAssets {
    fn default() -> Self {
        Self { stylesheet_href: "style.css".to_owned(), wasm_pkg: None }
    }
}

/// Document `<title>`.
pub fn page_title(content: &SiteContent) -> String {
    format!("{} · {}", content.profile.name, content.profile.title)
}

/// Module script that loads the browser build and mounts it.
pub fn module_boot_script(wasm_pkg: &str) -> String {
    format!("import init, {{ mount }} from '{wasm_pkg}.js';\ninit().then(mount);")
}

/// Full HTML document for static export.
pub fn shell(content: SiteContent, env: RenderEnv, assets: ShellAssets) -> impl IntoView {
    let title = page_title(&content);
    let description = content.profile.tagline.clone();
    let boot = assets.wasm_pkg.as_deref().map(module_boot_script);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=description/>
                <title>{title}</title>
                <link rel="stylesheet" href=assets.stylesheet_href/>
                {boot.map(|script| view! { <script type="module" inner_html=script></script> })}
            </head>
            <body>
                <LandingPage content=content env=env/>
            </body>
        </html>
    }
}

/// Browser root: compiled-in content plus a fresh environment read.
#[component]
pub fn App() -> impl IntoView {
    view! { <LandingPage content=SiteContent::default() env=RenderEnv::capture()/> }
}
