//! Catalog card shown on the home page and in related products.

use charm_commerce::prelude::*;
use leptos::prelude::*;

use crate::state::{use_store, Page};

#[component]
pub fn ProductCard(variant: Variant) -> impl IntoView {
    let store = use_store();
    let info = variant.info();

    view! {
        <div class="product-card" on:click=move |_| store.navigate(Page::Product, Some(variant))>
            <div class="product-card-image">
                <img src=variant.primary_image() alt=info.name/>
            </div>
            <div class="product-card-body">
                <h3>{info.name}</h3>
                <p class="subtitle">{info.subtitle}</p>
                <p class="price">{unit_price().display()}</p>
                <button
                    class="btn btn-dark"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        store.add_to_cart(variant, 1);
                    }
                >
                    "Přidat do košíku"
                </button>
            </div>
        </div>
    }
}
