// Malhas Irma Landing Page — Leptos 0.8 Edition

mod dom;
mod icons;
mod reveal;
mod sections;
mod styles;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // Single window scroll signal, handed to the navbar explicitly so
    // the scrolled treatment can also be driven by synthetic offsets.
    let scroll_y = dom::window_scroll_signal();

    view! {
        <style>{styles::PAGE_CSS}</style>
        <Nav scroll_y=scroll_y />
        <main>
            <Hero />
            <FeaturedSection />
            <ProductGrid />
            <HeritageSection />
        </main>
        <Footer />
    }
}
