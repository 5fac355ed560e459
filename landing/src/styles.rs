//! CSS for the landing page.
//!
//! Injected as a single `<style>` block by the root component. The
//! palette and type treatment follow the brand book: bone background,
//! charcoal ink, taupe accents, serif display faces.
//!
//! Animation classes come in two families:
//!
//! - `hero-*` entrance keyframes run once on mount with fixed delays
//! - `reveal reveal-{up,left,right,scale}` transitions are triggered by
//!   the `visible` class, added on first viewport entry and never
//!   removed (fire-once)

/// Complete CSS for the page.
pub const PAGE_CSS: &str = r#"
:root {
    --bone: #f5f1ea;
    --charcoal: #2b2b28;
    --taupe: #a89b8c;
    --white: #ffffff;
    --serif: 'Playfair Display', Georgia, 'Times New Roman', serif;
    --sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--sans);
    background: var(--bone);
    color: var(--charcoal);
    -webkit-font-smoothing: antialiased;
}

::selection {
    background: var(--taupe);
    color: var(--bone);
}

button {
    font-family: inherit;
    background: none;
    border: none;
    color: inherit;
    cursor: pointer;
}

a {
    color: inherit;
    text-decoration: none;
}

img {
    display: block;
}

/* ============================================
   Navigation
   ============================================ */
.nav {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 24px 48px;
    background: transparent;
    transition: background 0.5s ease, padding 0.5s ease, box-shadow 0.5s ease;
}

.nav.scrolled {
    background: rgba(245, 241, 234, 0.9);
    backdrop-filter: blur(12px);
    -webkit-backdrop-filter: blur(12px);
    padding: 16px 48px;
    box-shadow: 0 1px 2px rgba(43, 43, 40, 0.06);
}

.nav-links {
    display: flex;
    align-items: center;
    gap: 32px;
}

.nav-link {
    font-size: 11px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-weight: 500;
    transition: color 0.3s ease;
}

.nav-link:hover {
    color: var(--taupe);
}

.nav-brand {
    position: absolute;
    left: 50%;
    transform: translateX(-50%);
}

.nav-title {
    font-family: var(--serif);
    font-size: 26px;
    font-weight: 600;
    letter-spacing: -0.04em;
}

.nav-utils {
    display: flex;
    align-items: center;
    gap: 24px;
}

.nav-icon-btn {
    display: inline-flex;
    transition: color 0.3s ease;
}

.nav-icon-btn:hover {
    color: var(--taupe);
}

.nav-bag {
    position: relative;
}

.nav-bag-count {
    position: absolute;
    top: -4px;
    right: -6px;
    background: var(--taupe);
    color: var(--bone);
    font-size: 10px;
    width: 16px;
    height: 16px;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 50%;
}

.nav-menu-btn {
    display: inline-flex;
}

/* Mobile menu overlay slides in from the leading edge */
.nav-overlay {
    position: fixed;
    inset: 0;
    background: var(--bone);
    z-index: 60;
    display: flex;
    flex-direction: column;
    padding: 32px;
    animation: slide-in-left 0.4s cubic-bezier(0.25, 0.8, 0.35, 1);
}

.nav-overlay-close {
    display: flex;
    justify-content: flex-end;
}

.nav-overlay-links {
    display: flex;
    flex-direction: column;
    gap: 32px;
    margin-top: 48px;
    font-family: var(--serif);
    font-size: 30px;
}

@keyframes slide-in-left {
    from { transform: translateX(-100%); }
    to   { transform: translateX(0); }
}

/* Responsive visibility helpers (breakpoint at 768px) */
.mobile-only { display: inline-flex; }
.desktop-only { display: none; }

@media (min-width: 768px) {
    .mobile-only { display: none; }
    .desktop-only { display: inline-flex; }
    .nav-links.desktop-only { display: flex; }
}

/* ============================================
   Hero
   ============================================ */
.hero {
    position: relative;
    height: 100vh;
    width: 100%;
    overflow: hidden;
    display: flex;
    align-items: center;
    justify-content: center;
}

.hero-backdrop {
    position: absolute;
    inset: 0;
}

.hero-backdrop img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transform: scale(1.05);
}

.hero-shade {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.2);
}

.hero-content {
    position: relative;
    z-index: 10;
    text-align: center;
    color: var(--bone);
    max-width: 900px;
    padding: 0 24px;
}

.hero-eyebrow {
    display: block;
    font-size: 13px;
    text-transform: uppercase;
    letter-spacing: 0.4em;
    font-weight: 500;
    margin-bottom: 24px;
    opacity: 0;
    animation: fade-up 0.8s ease forwards;
}

.hero-title {
    font-family: var(--serif);
    font-style: italic;
    font-weight: 400;
    font-size: clamp(44px, 9vw, 92px);
    line-height: 1.15;
    margin-bottom: 40px;
    opacity: 0;
    animation: fade-up 0.8s ease 0.2s forwards;
}

.hero-actions {
    opacity: 0;
    animation: fade-in-scale 0.8s ease 0.4s forwards;
}

.hero-cta {
    display: inline-flex;
    align-items: center;
    gap: 16px;
    border: 1px solid var(--bone);
    padding: 16px 40px;
    font-size: 13px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    transition: background 0.5s ease, color 0.5s ease;
}

.hero-cta:hover {
    background: var(--bone);
    color: var(--charcoal);
}

.hero-cta-arrow {
    transition: transform 0.3s ease;
}

.hero-cta:hover .hero-cta-arrow {
    transform: translateX(4px);
}

@keyframes fade-up {
    from { opacity: 0; transform: translateY(24px); }
    to   { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in-scale {
    from { opacity: 0; transform: scale(0.9); }
    to   { opacity: 1; transform: scale(1); }
}

/* Looping scroll indicator */
.hero-scroll-hint {
    position: absolute;
    bottom: 40px;
    left: 50%;
    transform: translateX(-50%);
    color: var(--bone);
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 8px;
    animation: bob 2s ease-in-out infinite;
}

.hero-scroll-label {
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    opacity: 0.7;
}

.scroll-line {
    width: 1px;
    height: 48px;
    background: rgba(245, 241, 234, 0.3);
    position: relative;
    overflow: hidden;
}

.scroll-line-fill {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 50%;
    background: var(--bone);
    animation: scroll-line 1.6s ease-in-out infinite;
}

@keyframes bob {
    0%, 100% { transform: translate(-50%, 0); }
    50%      { transform: translate(-50%, 10px); }
}

@keyframes scroll-line {
    from { transform: translateY(-100%); }
    to   { transform: translateY(200%); }
}

/* ============================================
   Fire-once reveal transitions
   ============================================ */
.reveal {
    opacity: 0;
    transition: opacity 0.8s ease, transform 0.8s ease;
    will-change: opacity, transform;
}

.reveal-up    { transform: translateY(20px); }
.reveal-left  { transform: translateX(-50px); }
.reveal-right { transform: translateX(50px); }
.reveal-scale { transform: scale(0.95); }

.reveal.visible {
    opacity: 1;
    transform: none;
}

/* ============================================
   Featured editorial
   ============================================ */
.featured {
    padding: 96px 24px;
    background: var(--bone);
}

.featured-inner {
    max-width: 1280px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 1fr;
    gap: 48px;
    align-items: center;
}

.section-eyebrow {
    display: block;
    color: var(--taupe);
    font-size: 11px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-weight: 600;
    margin-bottom: 16px;
}

.section-title {
    font-family: var(--serif);
    font-weight: 400;
    font-size: clamp(34px, 5vw, 56px);
    line-height: 1.2;
    margin-bottom: 32px;
}

.section-text {
    color: rgba(43, 43, 40, 0.7);
    line-height: 1.7;
    margin-bottom: 40px;
    max-width: 440px;
}

.link-underline {
    font-size: 13px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-weight: 600;
    border-bottom: 1px solid var(--charcoal);
    padding-bottom: 8px;
    transition: color 0.3s ease, border-color 0.3s ease;
}

.link-underline:hover {
    color: var(--taupe);
    border-color: var(--taupe);
}

.featured-images {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 16px;
}

.featured-image {
    aspect-ratio: 3 / 4;
    overflow: hidden;
}

.featured-image.offset {
    margin-top: 48px;
}

.featured-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.7s ease;
}

.featured-image:hover img {
    transform: scale(1.05);
}

@media (min-width: 768px) {
    .featured {
        padding: 96px 48px;
    }
    .featured-inner {
        grid-template-columns: 5fr 7fr;
    }
}

/* ============================================
   Product grid
   ============================================ */
.products {
    padding: 96px 24px;
    background: var(--white);
}

.products-inner {
    max-width: 1280px;
    margin: 0 auto;
}

.products-header {
    display: flex;
    flex-direction: column;
    gap: 16px;
    margin-bottom: 64px;
}

.products-title {
    font-family: var(--serif);
    font-weight: 400;
    font-size: clamp(34px, 4vw, 48px);
}

.products-subtitle {
    color: var(--taupe);
    margin-top: 8px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-size: 11px;
    font-weight: 500;
}

.products-filters {
    display: flex;
    gap: 32px;
    font-size: 11px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-weight: 500;
}

.filter {
    color: rgba(43, 43, 40, 0.4);
    padding-bottom: 4px;
    transition: color 0.3s ease;
}

.filter:hover {
    color: var(--charcoal);
}

.filter.active {
    color: var(--charcoal);
    border-bottom: 1px solid var(--charcoal);
}

.products-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 48px 24px;
}

.product-card {
    cursor: pointer;
}

.product-media {
    position: relative;
    aspect-ratio: 3 / 4;
    overflow: hidden;
    margin-bottom: 24px;
    background: var(--bone);
}

.product-media img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.7s ease;
}

.product-card:hover .product-media img {
    transform: scale(1.05);
}

.product-add {
    position: absolute;
    bottom: 24px;
    left: 50%;
    transform: translate(-50%, 16px);
    background: var(--bone);
    color: var(--charcoal);
    padding: 12px 24px;
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-weight: 600;
    opacity: 0;
    transition: opacity 0.3s ease, transform 0.3s ease;
}

.product-card:hover .product-add {
    opacity: 1;
    transform: translate(-50%, 0);
}

.product-info {
    display: flex;
    flex-direction: column;
    gap: 4px;
}

.product-category {
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    color: var(--taupe);
    font-weight: 700;
}

.product-name {
    font-family: var(--serif);
    font-weight: 400;
    font-size: 18px;
    transition: color 0.3s ease;
}

.product-card:hover .product-name {
    color: var(--taupe);
}

.product-price {
    font-size: 14px;
    font-weight: 300;
}

.products-more {
    margin-top: 80px;
    text-align: center;
}

.btn-outline {
    border: 1px solid var(--charcoal);
    padding: 16px 48px;
    font-size: 11px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    transition: background 0.5s ease, color 0.5s ease;
}

.btn-outline:hover {
    background: var(--charcoal);
    color: var(--bone);
}

@media (min-width: 640px) {
    .products-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (min-width: 768px) {
    .products {
        padding: 96px 48px;
    }
    .products-header {
        flex-direction: row;
        align-items: flex-end;
        justify-content: space-between;
    }
}

@media (min-width: 1024px) {
    .products-grid {
        grid-template-columns: repeat(4, 1fr);
    }
}

/* ============================================
   Heritage
   ============================================ */
.heritage {
    padding: 96px 0;
    background: var(--charcoal);
    color: var(--bone);
    overflow: hidden;
}

.heritage-inner {
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 24px;
    display: grid;
    grid-template-columns: 1fr;
    gap: 64px;
    align-items: center;
}

.heritage-media img {
    width: 100%;
    aspect-ratio: 4 / 3;
    object-fit: cover;
    filter: grayscale(1);
    opacity: 0.8;
}

.heritage-copy .section-eyebrow {
    letter-spacing: 0.3em;
}

.heritage-title {
    font-family: var(--serif);
    font-style: italic;
    font-weight: 400;
    font-size: clamp(34px, 5vw, 56px);
    line-height: 1.2;
    margin-bottom: 32px;
}

.heritage-text {
    color: rgba(245, 241, 234, 0.6);
    line-height: 1.7;
    font-weight: 300;
}

.heritage-actions {
    padding-top: 32px;
}

.heritage-cta {
    display: inline-flex;
    align-items: center;
    gap: 16px;
    font-size: 13px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    border-bottom: 1px solid rgba(245, 241, 234, 0.3);
    padding-bottom: 8px;
    transition: border-color 0.3s ease;
}

.heritage-cta:hover {
    border-color: var(--bone);
}

@media (min-width: 768px) {
    .heritage-inner {
        padding: 0 48px;
        grid-template-columns: 1fr 1fr;
    }
}

/* ============================================
   Footer
   ============================================ */
.footer {
    background: var(--bone);
    padding: 96px 24px 48px;
    border-top: 1px solid rgba(43, 43, 40, 0.05);
}

.footer-inner {
    max-width: 1280px;
    margin: 0 auto;
}

.footer-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 48px;
    margin-bottom: 80px;
}

.footer-title {
    font-family: var(--serif);
    font-size: 22px;
    font-weight: 700;
    letter-spacing: -0.04em;
    margin-bottom: 32px;
}

.footer-tagline {
    font-size: 14px;
    color: rgba(43, 43, 40, 0.6);
    line-height: 1.7;
    margin-bottom: 32px;
}

.footer-social {
    display: flex;
    gap: 24px;
}

.footer-social-btn {
    display: inline-flex;
    transition: color 0.3s ease;
}

.footer-social-btn:hover {
    color: var(--taupe);
}

.footer-heading {
    font-size: 11px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-weight: 700;
    margin-bottom: 32px;
}

.footer-list {
    list-style: none;
    display: flex;
    flex-direction: column;
    gap: 16px;
    font-size: 14px;
    color: rgba(43, 43, 40, 0.6);
    font-weight: 300;
}

.footer-list li {
    cursor: pointer;
    transition: color 0.3s ease;
}

.footer-list li:hover {
    color: var(--charcoal);
}

.footer-newsletter-text {
    font-size: 14px;
    color: rgba(43, 43, 40, 0.6);
    margin-bottom: 24px;
    font-weight: 300;
}

.footer-newsletter {
    position: relative;
}

.footer-input {
    width: 100%;
    background: transparent;
    border: none;
    border-bottom: 1px solid rgba(43, 43, 40, 0.2);
    padding: 12px 64px 12px 0;
    font-size: 14px;
    font-family: inherit;
    color: var(--charcoal);
    transition: border-color 0.3s ease;
}

.footer-input:focus {
    outline: none;
    border-color: var(--charcoal);
}

.footer-subscribe {
    position: absolute;
    right: 0;
    bottom: 12px;
    font-size: 11px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-weight: 700;
}

.footer-legal {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 16px;
    padding-top: 48px;
    border-top: 1px solid rgba(43, 43, 40, 0.05);
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    color: rgba(43, 43, 40, 0.4);
}

.footer-legal-links {
    display: flex;
    gap: 32px;
}

.footer-legal-links span {
    cursor: pointer;
    transition: color 0.3s ease;
}

.footer-legal-links span:hover {
    color: var(--charcoal);
}

@media (min-width: 768px) {
    .footer {
        padding: 96px 48px 48px;
    }
    .footer-grid {
        grid-template-columns: repeat(4, 1fr);
    }
    .footer-legal {
        flex-direction: row;
        justify-content: space-between;
    }
}
"#;
