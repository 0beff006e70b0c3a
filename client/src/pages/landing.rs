//! The portfolio landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes the five page regions (header, hero, publications, about, contact
//! with footer) from one [`SiteContent`] and one [`RenderEnv`]. Rendering is a
//! single synchronous pass; the environment is read by the caller beforehand.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::about_section::AboutSection;
use crate::components::contact_section::ContactSection;
use crate::components::hero::Hero;
use crate::components::publications_grid::PublicationsGrid;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::state::content::SiteContent;
use crate::state::render_env::RenderEnv;

#[component]
pub fn LandingPage(content: SiteContent, env: RenderEnv) -> impl IntoView {
    let SiteContent { profile, publications, full_publications_url, about, contact } = content;
    let mailto = profile.mailto();
    let name = profile.name.clone();

    view! {
        <div class="page">
            <SiteHeader name=name.clone() full_publications_url=full_publications_url.clone()/>
            <main>
                <Hero profile=profile appearance=env.hero_appearance()/>
                <PublicationsGrid publications=publications full_publications_url=full_publications_url/>
                <AboutSection text=about/>
                <ContactSection copy=contact mailto=mailto/>
            </main>
            <SiteFooter year=env.year name=name/>
        </div>
    }
}
