//! The product catalog shown in the "Lançamentos" grid.
//!
//! The catalog is a fixed, ordered, compile-time list. Nothing is
//! created, mutated, or destroyed while the page is mounted, and the
//! grid renders exactly one card per entry, in this order.

use serde::Serialize;

/// A single catalog entry.
///
/// `price` is a pre-formatted display string ("R$ 890,00"). No currency
/// parsing or arithmetic happens anywhere on the page; the string is
/// reproduced verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Unique, stable identity within the catalog.
    pub id: u32,
    /// Display title.
    pub name: &'static str,
    /// Pre-formatted display price.
    pub price: &'static str,
    /// Remote image URI. Broken images fall back to browser defaults.
    pub image: &'static str,
    /// Display category label (open set).
    pub category: &'static str,
}

/// The full catalog, in rendering order.
pub const PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        name: "Cardigan de Tricot Marfim",
        price: "R$ 890,00",
        image: "https://picsum.photos/seed/knit1/800/1200",
        category: "Essenciais",
    },
    Product {
        id: 2,
        name: "Blazer Camel Estruturado",
        price: "R$ 1.250,00",
        image: "https://picsum.photos/seed/blazer1/800/1200",
        category: "Alfaiataria",
    },
    Product {
        id: 3,
        name: "Gola Alta em Mix de Seda",
        price: "R$ 640,00",
        image: "https://picsum.photos/seed/silk1/800/1200",
        category: "Essenciais",
    },
    Product {
        id: 4,
        name: "Conjunto Lounge de Cashmere",
        price: "R$ 2.100,00",
        image: "https://picsum.photos/seed/cashmere1/800/1200",
        category: "Luxo",
    },
];

/// Entrance-animation stagger between adjacent cards, in milliseconds.
pub const CARD_STAGGER_MS: u32 = 100;

/// A product card ready for the grid: the entry plus the entrance delay
/// derived from its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardView {
    /// The catalog entry backing this card.
    pub product: &'static Product,
    /// Entrance-animation delay, proportional to grid position.
    pub delay_ms: u32,
}

/// One card per catalog entry, in catalog order.
#[must_use]
pub fn grid_cards() -> Vec<CardView> {
    PRODUCTS
        .iter()
        .enumerate()
        .map(|(idx, product)| CardView {
            product,
            delay_ms: idx as u32 * CARD_STAGGER_MS,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_ids_are_unique_and_positive() {
        let mut ids: Vec<u32> = PRODUCTS.iter().map(|p| p.id).collect();
        assert!(ids.iter().all(|&id| id > 0));
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PRODUCTS.len());
    }

    #[test]
    fn grid_renders_one_card_per_product_in_catalog_order() {
        let cards = grid_cards();
        assert_eq!(cards.len(), PRODUCTS.len());
        for (card, product) in cards.iter().zip(PRODUCTS) {
            assert_eq!(card.product, product);
        }
    }

    #[test]
    fn card_delays_follow_catalog_order() {
        let delays: Vec<u32> = grid_cards().iter().map(|c| c.delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
    }

    #[test]
    fn silk_turtleneck_card_reproduces_strings_verbatim() {
        // End-to-end scenario: four cards, and the id-3 entry must carry
        // its display strings untouched.
        let cards = grid_cards();
        assert_eq!(cards.len(), 4);

        let card = cards[2];
        assert_eq!(card.product.id, 3);
        assert_eq!(card.product.name, "Gola Alta em Mix de Seda");
        assert_eq!(card.product.price, "R$ 640,00");
        assert_eq!(card.product.category, "Essenciais");
    }

    #[test]
    fn json_export_keeps_price_as_opaque_string() {
        let json = serde_json::to_value(PRODUCTS[2]).unwrap();
        assert_eq!(json["price"], "R$ 640,00");
        assert_eq!(json["id"], 3);
    }
}
