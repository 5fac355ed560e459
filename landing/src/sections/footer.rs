use leptos::prelude::*;

use crate::icons::{IconFacebook, IconInstagram, IconTwitter};

/// Brand recap, link columns, newsletter capture and legal boilerplate.
///
/// The newsletter input is uncontrolled and "Assinar" has no submit
/// handler; the social icons likewise carry no behavior.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3 class="footer-title">"MALHAS IRMA"</h3>
                        <p class="footer-tagline">
                            "Elevando a arte do tricot através de design atemporal e artesanato excepcional."
                        </p>
                        <div class="footer-social">
                            <button class="footer-social-btn"><IconInstagram /></button>
                            <button class="footer-social-btn"><IconFacebook /></button>
                            <button class="footer-social-btn"><IconTwitter /></button>
                        </div>
                    </div>

                    <div class="footer-col">
                        <h4 class="footer-heading">"Loja"</h4>
                        <ul class="footer-list">
                            <li>"Lançamentos"</li>
                            <li>"Coleções"</li>
                            <li>"Mais Vendidos"</li>
                            <li>"Sale"</li>
                        </ul>
                    </div>

                    <div class="footer-col">
                        <h4 class="footer-heading">"Empresa"</h4>
                        <ul class="footer-list">
                            <li>"Nossa História"</li>
                            <li>"Sustentabilidade"</li>
                            <li>"Carreiras"</li>
                            <li>"Imprensa"</li>
                        </ul>
                    </div>

                    <div class="footer-col">
                        <h4 class="footer-heading">"Newsletter"</h4>
                        <p class="footer-newsletter-text">
                            "Assine nossa lista para prévias exclusivas e conteúdo editorial."
                        </p>
                        <div class="footer-newsletter">
                            <input type="email" placeholder="Endereço de E-mail" class="footer-input" />
                            <button class="footer-subscribe">"Assinar"</button>
                        </div>
                    </div>
                </div>

                <div class="footer-legal">
                    <p class="footer-copyright">
                        "© 2024 Malhas Irma. Todos os direitos reservados."
                    </p>
                    <div class="footer-legal-links">
                        <span>"Política de Privacidade"</span>
                        <span>"Termos de Serviço"</span>
                        <span>"Cookies"</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
