use leptos::prelude::*;

use crate::reveal::Reveal;

/// Editorial two-column block: copy on the left, two offset images on
/// the right, all revealed once on first viewport entry. Carries the
/// `#collection` anchor the hero call-to-action points at.
#[component]
pub fn FeaturedSection() -> impl IntoView {
    view! {
        <section id="collection" class="featured">
            <div class="featured-inner">
                <Reveal class="featured-copy" from="left">
                    <span class="section-eyebrow">"O Editorial"</span>
                    <h3 class="section-title">"Texturas Curadas para a Mulher Moderna"</h3>
                    <p class="section-text">
                        "Nossa última coleção foca na experiência tátil do tricot premium. "
                        "Cada peça é um testemunho de nossa herança artesanal, desenhada para "
                        "elevar o cotidiano com sofisticação sem esforço."
                    </p>
                    <button class="link-underline">"Ver Editorial"</button>
                </Reveal>

                <div class="featured-images">
                    <Reveal class="featured-image" from="scale">
                        <img
                            src="https://picsum.photos/seed/detail1/800/1200"
                            alt="Detalhe 1"
                            referrerpolicy="no-referrer"
                        />
                    </Reveal>
                    <Reveal class="featured-image offset" from="scale" delay_ms=200>
                        <img
                            src="https://picsum.photos/seed/detail2/800/1200"
                            alt="Detalhe 2"
                            referrerpolicy="no-referrer"
                        />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
