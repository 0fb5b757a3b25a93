//! Sticky header: free-shipping banner, logo, navigation, cart badge.

use charm_commerce::prelude::*;
use leptos::prelude::*;

use crate::state::{use_store, Page};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_store();
    let count = move || store.cart.with(|cart| cart.item_count());

    view! {
        <header class="site-header">
            <div class="banner">"🚚 Doprava ZDARMA nad 1000 Kč!"</div>
            <div class="header-main">
                <button class="logo" on:click=move |_| store.navigate(Page::Home, None)>
                    <span class="logo-mark">"🦊"</span>
                    <span class="logo-text">"3D PŘÍVĚSKY"</span>
                </button>
                <nav class="main-nav">
                    <button on:click=move |_| store.navigate(Page::Home, None)>"Domů"</button>
                    <button on:click=move |_| store.navigate(Page::Product, Some(Variant::Fox))>
                        "Kolekce"
                    </button>
                    <button on:click=move |_| store.navigate(Page::Printing, None)>
                        "3D Tisk & Kvalita"
                    </button>
                    <button on:click=move |_| store.navigate(Page::Contact, None)>"Kontakt"</button>
                </nav>
                <button class="cart-button" on:click=move |_| store.navigate(Page::Cart, None)>
                    "🛍"
                    {move || {
                        (count() > 0).then(|| view! { <span class="cart-badge">{count()}</span> })
                    }}
                </button>
            </div>
        </header>
    }
}
