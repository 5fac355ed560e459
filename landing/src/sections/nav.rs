use irma_core::view_state::{MenuState, is_scrolled};
use leptos::prelude::*;

use crate::icons::{IconBag, IconClose, IconMenu, IconSearch, IconUser};

/// Fixed top navigation: brand mark centered, primary links on the
/// left (desktop), utility icons on the right.
///
/// `scroll_y` is injected rather than read from the window so the
/// scrolled treatment is a pure function of whatever offset the caller
/// provides. The mobile overlay renders under `<Show>`, so it is gone
/// from the tree entirely while closed.
#[component]
pub fn Nav(
    /// Current vertical scroll offset of the page.
    scroll_y: Signal<f64>,
) -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    view! {
        <nav class=move || if is_scrolled(scroll_y.get()) { "nav scrolled" } else { "nav" }>
            <div class="nav-links desktop-only">
                <a href="#" class="nav-link">"Loja"</a>
                <a href="#" class="nav-link">"Coleções"</a>
                <a href="#" class="nav-link">"Legado"</a>
            </div>

            <button class="nav-menu-btn mobile-only" on:click=move |_| menu.update(MenuState::open)>
                <IconMenu />
            </button>

            <div class="nav-brand">
                <h1 class="nav-title">"MALHAS IRMA"</h1>
            </div>

            <div class="nav-utils">
                <button class="nav-icon-btn desktop-only">
                    <IconSearch />
                </button>
                <button class="nav-icon-btn">
                    <IconUser />
                </button>
                <button class="nav-icon-btn nav-bag">
                    <IconBag />
                    <span class="nav-bag-count">"0"</span>
                </button>
            </div>

            // Full-screen overlay, sliding in from the leading edge.
            // Any link selection closes it, whichever destination.
            <Show when=move || menu.get().is_open()>
                <div class="nav-overlay">
                    <div class="nav-overlay-close">
                        <button on:click=move |_| menu.update(MenuState::close)>
                            <IconClose size="32" />
                        </button>
                    </div>
                    <div class="nav-overlay-links">
                        <a href="#" on:click=move |_| menu.update(MenuState::select_link)>"Loja"</a>
                        <a href="#" on:click=move |_| menu.update(MenuState::select_link)>"Coleções"</a>
                        <a href="#" on:click=move |_| menu.update(MenuState::select_link)>"Legado"</a>
                        <a href="#" on:click=move |_| menu.update(MenuState::select_link)>"Sustentabilidade"</a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
