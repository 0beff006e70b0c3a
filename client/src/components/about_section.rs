//! Static about paragraph.

use leptos::prelude::*;

#[component]
pub fn AboutSection(text: String) -> impl IntoView {
    view! {
        <section id="about" class="about" aria-labelledby="about-title">
            <h2 id="about-title" class="section-title">"About"</h2>
            <p class="about__text">{text}</p>
        </section>
    }
}
