//! Inline SVG line icons.
//!
//! Paths are 24×24 stroke outlines so icons inherit `currentColor` and size
//! from CSS without shipping an icon font.

use leptos::prelude::*;

/// Icons used on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Github,
    Linkedin,
    Mail,
    Download,
    ChevronRight,
    Award,
    BookOpen,
}

impl IconKind {
    /// SVG path data, drawn in order.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 \
                 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 \
                 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Self::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
            ],
            Self::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Self::Download => &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "m7 10 5 5 5-5", "M12 15V3"],
            Self::ChevronRight => &["m9 18 6-6-6-6"],
            Self::Award => &["M12 2a6 6 0 1 0 0 12a6 6 0 1 0 0-12z", "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"],
            Self::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
        }
    }
}

/// Decorative icon; hidden from assistive technology.
#[component]
pub fn Icon(kind: IconKind, #[prop(default = "icon")] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
        >
            {kind.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
