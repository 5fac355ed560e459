use irma_core::catalog::{CardView, grid_cards};
use leptos::prelude::*;

use crate::reveal::Reveal;

/// The "Lançamentos" grid: one card per catalog entry, in catalog
/// order, entrance staggered by card index.
///
/// The filter row is presentational — "Tudo" is fixed active and the
/// other labels carry no behavior, so the rendered set is always the
/// full catalog.
#[component]
pub fn ProductGrid() -> impl IntoView {
    view! {
        <section class="products">
            <div class="products-inner">
                <div class="products-header">
                    <div>
                        <h2 class="products-title">"Lançamentos"</h2>
                        <p class="products-subtitle">"Compre as últimas peças"</p>
                    </div>
                    <div class="products-filters">
                        <button class="filter active">"Tudo"</button>
                        <button class="filter">"Tricot"</button>
                        <button class="filter">"Alfaiataria"</button>
                        <button class="filter">"Acessórios"</button>
                    </div>
                </div>

                <div class="products-grid">
                    {grid_cards()
                        .into_iter()
                        .map(|card| view! { <ProductCard card=card /> })
                        .collect_view()}
                </div>

                <div class="products-more">
                    <button class="btn-outline">"Ver Todos os Produtos"</button>
                </div>
            </div>
        </section>
    }
}

/// One product card: image with hover-revealed "Adicionar" affordance,
/// then category, name and price reproduced verbatim from the catalog.
#[component]
fn ProductCard(card: CardView) -> impl IntoView {
    let CardView { product, delay_ms } = card;

    view! {
        <Reveal class="product-card" delay_ms=delay_ms>
            <div class="product-media">
                <img src=product.image alt=product.name referrerpolicy="no-referrer" />
                <button class="product-add">"Adicionar"</button>
            </div>
            <div class="product-info">
                <p class="product-category">{product.category}</p>
                <h4 class="product-name">{product.name}</h4>
                <p class="product-price">{product.price}</p>
            </div>
        </Reveal>
    }
}
