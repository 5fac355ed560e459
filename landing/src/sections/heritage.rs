use leptos::prelude::*;

use crate::icons::IconArrowRight;
use crate::reveal::Reveal;

/// Brand-story block on charcoal: grayscale image sliding in from the
/// left, narrative copy from the right, each firing once.
#[component]
pub fn HeritageSection() -> impl IntoView {
    view! {
        <section class="heritage">
            <div class="heritage-inner">
                <Reveal class="heritage-media" from="left">
                    <img
                        src="https://picsum.photos/seed/heritage/1200/800"
                        alt="Legado"
                        referrerpolicy="no-referrer"
                    />
                </Reveal>

                <Reveal class="heritage-copy" from="right">
                    <span class="section-eyebrow">"Nosso Legado"</span>
                    <h2 class="heritage-title">"Criando Elegância Desde 1984"</h2>
                    <p class="heritage-text">
                        "Fundada no coração do Brasil, a Malhas Irma começou com uma única máquina de tricô "
                        "e a visão de redefinir o tricot de luxo. Hoje, continuamos a misturar técnicas "
                        "tradicionais com design contemporâneo, garantindo que cada ponto conte uma "
                        "história de qualidade e paixão."
                    </p>
                    <div class="heritage-actions">
                        <button class="heritage-cta">
                            <span>"Descubra Nossa História"</span>
                            <IconArrowRight />
                        </button>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
