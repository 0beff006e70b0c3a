//! Page footer with copyright year and name.

#[cfg(test)]
#[path = "site_footer_test.rs"]
mod site_footer_test;

use leptos::prelude::*;

pub fn footer_text(year: i32, name: &str) -> String {
    format!("© {year} {name}")
}

#[component]
pub fn SiteFooter(year: i32, name: String) -> impl IntoView {
    view! { <footer class="site-footer">{footer_text(year, &name)}</footer> }
}
