//! Fire-once entrance-animation wrapper.

use leptos::html::Div;
use leptos::prelude::*;

use crate::dom;

/// Wraps children in a container that gains the `visible` class the
/// first time it enters the viewport.
///
/// The actual fade/slide/scale is pure CSS (see `styles.rs`); this
/// component only owns the trigger. `delay_ms` becomes a
/// `transition-delay`, which is how the product grid staggers cards by
/// index.
#[component]
pub fn Reveal(
    /// Extra classes on the wrapper (layout hooks like grid cells).
    #[prop(default = "")]
    class: &'static str,
    /// Direction variant: "up", "left", "right" or "scale".
    #[prop(default = "up")]
    from: &'static str,
    /// Transition delay in milliseconds.
    #[prop(default = 0)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let revealed = dom::reveal_on_enter(node);

    let delay_style = (delay_ms > 0).then(|| format!("transition-delay: {delay_ms}ms"));

    view! {
        <div
            node_ref=node
            class=move || {
                if revealed.get() {
                    format!("reveal reveal-{from} visible {class}")
                } else {
                    format!("reveal reveal-{from} {class}")
                }
            }
            style=delay_style
        >
            {children()}
        </div>
    }
}
