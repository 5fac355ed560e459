//! # irma-core
//!
//! Catalog data and view-state logic for the Malhas Irma landing page.
//!
//! The landing page itself is a Leptos CSR app (see the `landing`
//! crate); everything that can be expressed without a DOM lives here so
//! it can be exercised with synthetic inputs:
//!
//! - [`catalog`] - the fixed product list and the grid card view-model
//! - [`view_state`] - navbar scroll treatment, mobile menu transitions,
//!   and the fire-once reveal latch used by entrance animations
//!
//! There is deliberately no I/O, no error type, and no mutation of the
//! catalog: the page renders a compile-time list and never changes it.

pub mod catalog;
pub mod view_state;
