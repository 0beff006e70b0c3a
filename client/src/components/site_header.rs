//! Sticky top bar with the subject's name and in-page navigation.

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};

/// One entry in the top navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
    pub icon: Option<IconKind>,
}

/// Navigation entries, left to right.
pub fn nav_links(full_publications_url: &str) -> Vec<NavLink> {
    vec![
        NavLink { label: "Projects", href: "#work".to_owned(), icon: None },
        NavLink {
            label: "All Publications",
            href: full_publications_url.to_owned(),
            icon: Some(IconKind::BookOpen),
        },
        NavLink { label: "About", href: "#about".to_owned(), icon: None },
        NavLink { label: "Contact", href: "#contact".to_owned(), icon: None },
    ]
}

#[component]
pub fn SiteHeader(name: String, full_publications_url: String) -> impl IntoView {
    let links = nav_links(&full_publications_url);

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <div class="site-header__name">{name}</div>
                <nav class="site-header__nav" aria-label="Primary">
                    {links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a class="site-header__link" href=link.href>
                                    {link.icon.map(|kind| view! { <Icon kind=kind class="icon icon--sm"/> })}
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
