//! Contact call-to-action card.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::state::content::ContactCopy;

#[component]
pub fn ContactSection(copy: ContactCopy, mailto: String) -> impl IntoView {
    let ContactCopy { heading, blurb, button_label } = copy;

    view! {
        <section id="contact" class="contact" aria-labelledby="contact-title">
            <div class="contact__card">
                <div class="contact__copy">
                    <h3 id="contact-title" class="contact__heading">{heading}</h3>
                    <p class="contact__blurb">{blurb}</p>
                </div>
                <a class="button button--primary contact__button" href=mailto>
                    <Icon kind=IconKind::Mail class="icon icon--sm"/>
                    {button_label}
                </a>
            </div>
        </section>
    }
}
