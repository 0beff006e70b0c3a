//! Highlighted publications section.
//!
//! Cards render in the order given; an empty list renders an empty grid.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::publication_card::PublicationCard;
use crate::state::content::Publication;

#[component]
pub fn PublicationsGrid(publications: Vec<Publication>, full_publications_url: String) -> impl IntoView {
    let count = publications.len().to_string();

    view! {
        <section id="work" class="publications" aria-labelledby="publications">
            <div class="publications__header">
                <h2 id="publications" class="section-title">"Highlighted Publications"</h2>
                <a class="publications__all" href=full_publications_url>
                    <Icon kind=IconKind::BookOpen class="icon icon--sm"/>
                    "View All Publications"
                </a>
            </div>
            <div class="publications__grid" data-count=count>
                {publications
                    .into_iter()
                    .map(|publication| view! { <PublicationCard publication=publication/> })
                    .collect_view()}
            </div>
        </section>
    }
}
