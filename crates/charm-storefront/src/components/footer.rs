//! Site footer: about blurb, quick links, service links, contact.

use charm_commerce::prelude::*;
use leptos::prelude::*;

use crate::state::{use_store, Page};

#[component]
pub fn Footer() -> impl IntoView {
    let store = use_store();

    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-about">
                    <div class="logo">
                        <span class="logo-mark">"🦊"</span>
                        <span class="logo-text">"3D PŘÍVĚSKY"</span>
                    </div>
                    <p>
                        "Originální 3D tištěné přívěsky. Precizní design, česká výroba, jednotná cena 59 Kč."
                    </p>
                </div>
                <div class="footer-links">
                    <h3>"Rychlé Odkazy"</h3>
                    <nav>
                        <button on:click=move |_| store.navigate(Page::Home, None)>"Domů"</button>
                        <button on:click=move |_| {
                            store.navigate(Page::Product, Some(Variant::Fox))
                        }>"Kolekce"</button>
                        <button on:click=move |_| store.navigate(Page::Printing, None)>
                            "3D Tisk & Kvalita"
                        </button>
                        <button on:click=move |_| store.navigate(Page::Contact, None)>
                            "Kontakt"
                        </button>
                    </nav>
                </div>
                <div class="footer-links">
                    <h3>"Zákaznický Servis"</h3>
                    <nav>
                        <a href="#">"Často kladené dotazy"</a>
                        <a href="#">"Doprava a platba"</a>
                        <a href="#">"Reklamace a vrácení zboží"</a>
                        <a href="#">"Obchodní podmínky"</a>
                    </nav>
                </div>
                <div class="footer-contact">
                    <h3>"Kontaktujte Nás"</h3>
                    <p>
                        "Email: "
                        <a href="mailto:sf.simonflorian@gmail.com">"sf.simonflorian@gmail.com"</a>
                    </p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>"© 2025 3D Přívěsky. Všechna práva vyhrazena."</p>
            </div>
        </footer>
    }
}
