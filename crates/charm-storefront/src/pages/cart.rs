//! Cart page: line list with steppers, free-shipping progress, summary.

use charm_commerce::prelude::*;
use leptos::prelude::*;

use crate::state::{use_store, Page};

#[component]
pub fn CartPage() -> impl IntoView {
    let store = use_store();

    view! {
        <div class="page page-cart">
            <section class="page-hero">
                <h1>"Nákupní Košík"</h1>
            </section>
            <section class="cart-content">
                {move || {
                    if store.cart.with(|cart| cart.is_empty()) {
                        view! { <EmptyCart/> }.into_any()
                    } else {
                        view! {
                            <div class="cart-grid">
                                <CartLines/>
                                <CartSummaryPanel/>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </section>
        </div>
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    let store = use_store();

    view! {
        <div class="cart-empty">
            <div class="cart-empty-icon">"🛍"</div>
            <h2>"Váš košík je prázdný"</h2>
            <p>"Přidejte si nějaké krásné 3D tištěné přívěsky do košíku!"</p>
            <button class="btn btn-dark" on:click=move |_| store.navigate(Page::Home, None)>
                "Prozkoumat Kolekci"
            </button>
        </div>
    }
}

#[component]
fn CartLines() -> impl IntoView {
    let store = use_store();

    view! {
        <div class="cart-lines">
            <h2>
                {move || {
                    format!("Produkty v košíku ({})", store.cart.with(|cart| cart.line_count()))
                }}
            </h2>
            {move || {
                store
                    .cart
                    .with(|cart| cart.lines().to_vec())
                    .into_iter()
                    .map(|line| {
                        let variant = line.variant;
                        let info = variant.info();
                        view! {
                            <div class="cart-line">
                                <button
                                    class="cart-line-image"
                                    on:click=move |_| store.navigate(Page::Product, Some(variant))
                                >
                                    <img src=variant.primary_image() alt=info.name/>
                                </button>
                                <div class="cart-line-body">
                                    <button
                                        class="cart-line-title"
                                        on:click=move |_| {
                                            store.navigate(Page::Product, Some(variant))
                                        }
                                    >
                                        <h3>{info.name}</h3>
                                        <p class="subtitle">{info.subtitle}</p>
                                    </button>
                                    <div class="cart-line-controls">
                                        <div class="stepper">
                                            <button on:click=move |_| {
                                                store.update_quantity(variant, line.quantity - 1)
                                            }>"−"</button>
                                            <span>{line.quantity}</span>
                                            <button on:click=move |_| {
                                                store.update_quantity(variant, line.quantity + 1)
                                            }>"+"</button>
                                        </div>
                                        <div class="cart-line-price">
                                            <p class="unit">
                                                {format!(
                                                    "{} × {}",
                                                    line.quantity,
                                                    unit_price().display(),
                                                )}
                                            </p>
                                            <p class="total">{line.line_total().display()}</p>
                                        </div>
                                        <button
                                            class="remove"
                                            on:click=move |_| store.remove_from_cart(variant)
                                        >
                                            "🗑"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn CartSummaryPanel() -> impl IntoView {
    let store = use_store();
    let summary = move || store.cart.with(|cart| cart_summary(cart));

    let progress_message = move || {
        let progress = summary().free_shipping;
        if progress.qualified {
            "Gratulujeme! Doprava zdarma!".to_string()
        } else if progress.remaining.amount_minor > Money::from_crowns(150).amount_minor {
            format!("Zbývá {} do dopravy zdarma!", progress.remaining.display())
        } else {
            format!("Zbývá jen {} do dopravy zdarma!", progress.remaining.display())
        }
    };

    view! {
        <div class="cart-summary">
            <h2>"Souhrn objednávky"</h2>

            <div class="shipping-progress">
                <p class:qualified=move || summary().free_shipping.qualified>
                    "🚚 " {progress_message}
                </p>
                <div class="progress-track">
                    <div
                        class="progress-fill"
                        class:qualified=move || summary().free_shipping.qualified
                        style:width=move || format!("{}%", summary().free_shipping.percent)
                    ></div>
                </div>
            </div>

            <div class="price-rows">
                <div class="price-row">
                    <span>"Mezisoučet"</span>
                    <span>{move || summary().subtotal.display()}</span>
                </div>
                <div class="price-row">
                    <span>"Doprava"</span>
                    <span>
                        {move || {
                            let s = summary();
                            if s.free_shipping.qualified {
                                view! { <span class="free">"ZDARMA"</span> }.into_any()
                            } else {
                                view! { <span>{s.shipping.display()}</span> }.into_any()
                            }
                        }}
                    </span>
                </div>
            </div>

            <div class="price-row price-total">
                <span>"Celkem"</span>
                <span>{move || summary().grand_total.display()}</span>
            </div>

            <button
                class="btn btn-dark btn-wide"
                on:click=move |_| store.navigate(Page::Checkout, None)
            >
                "Pokračovat k dopravě a platbě"
            </button>
            <button
                class="btn btn-outline btn-wide"
                on:click=move |_| store.navigate(Page::Home, None)
            >
                "Pokračovat v nákupu"
            </button>
        </div>
    }
}
