//! Hero block: headshot, headline, tagline and contact actions.
//!
//! DESIGN
//! ======
//! The headshot wrapper is the only animated element on the page. Its class and
//! inline style come from [`HeroAppearance`], so the reduced-motion branch
//! renders the final frame directly.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::icon::{Icon, IconKind};
use crate::state::content::Profile;
use crate::state::motion::HeroAppearance;

#[component]
pub fn Hero(profile: Profile, appearance: HeroAppearance) -> impl IntoView {
    let mailto = profile.mailto();
    let alt = profile.image_alt();
    let portrait = match profile.image_src() {
        Some(src) => view! { <img class="hero__portrait-img" src=src.to_owned() alt=alt/> }.into_any(),
        None => view! {
            <div class="hero__portrait-placeholder" role="img" aria-label=alt>
                {profile.initials()}
            </div>
        }
        .into_any(),
    };
    let Profile { title, tagline, location, links, .. } = profile;

    view! {
        <section class="hero" aria-labelledby="hero-title">
            <div class="hero__grid">
                <div class=appearance.class() style=appearance.style()>
                    <div class="hero__portrait">
                        {portrait}
                        <div class="hero__portrait-shade"></div>
                    </div>
                </div>
                <div class="hero__copy">
                    <h1 id="hero-title" class="hero__title">{title}</h1>
                    <p class="hero__tagline">{tagline}</p>
                    <div class="hero__actions">
                        <a class="button button--primary" href=mailto>
                            <Icon kind=IconKind::Mail class="icon icon--sm"/>
                            "Contact"
                        </a>
                        <a class="button button--secondary" href=links.resume target="_blank" rel="noreferrer">
                            <Icon kind=IconKind::Download class="icon icon--sm"/>
                            "Résumé"
                        </a>
                        <div class="hero__socials">
                            <a class="hero__social" href=links.github aria-label="GitHub">
                                <Icon kind=IconKind::Github/>
                            </a>
                            <a class="hero__social" href=links.linkedin aria-label="LinkedIn">
                                <Icon kind=IconKind::Linkedin/>
                            </a>
                        </div>
                    </div>
                    <div class="hero__location">{format!("Based in {location}")}</div>
                </div>
            </div>
        </section>
    }
}
