//! Card for one highlighted publication.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::state::content::{INDEXED_BADGE_LABEL, Publication};

#[component]
pub fn PublicationCard(publication: Publication) -> impl IntoView {
    let Publication { title, journal, link, description, indexed } = publication;
    let link_label = format!("Read paper: {title}");

    view! {
        <article class="publication-card">
            <div class="publication-card__media" aria-hidden="true"></div>
            <div class="publication-card__body">
                <h3 class="publication-card__title">
                    <span>{title}</span>
                    {indexed
                        .then(|| {
                            view! {
                                <span class="publication-card__badge">
                                    <Icon kind=IconKind::Award class="icon icon--xs"/>
                                    {INDEXED_BADGE_LABEL}
                                </span>
                            }
                        })}
                </h3>
                <p class="publication-card__journal">{journal}</p>
                <p class="publication-card__desc">{description}</p>
                <a
                    class="publication-card__link"
                    href=link
                    target="_blank"
                    rel="noreferrer"
                    aria-label=link_label
                >
                    "Read paper"
                    <Icon kind=IconKind::ChevronRight class="icon icon--sm publication-card__chevron"/>
                </a>
            </div>
        </article>
    }
}
