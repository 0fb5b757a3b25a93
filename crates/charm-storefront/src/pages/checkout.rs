//! Checkout page: shipping options, address form or pickup selector,
//! order summary with the carrier price.

use charm_commerce::prelude::*;
use leptos::prelude::*;

use crate::state::{use_store, Page};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let store = use_store();
    let checkout = RwSignal::new(Checkout::new());

    let on_continue = move |_| match checkout.with_untracked(|c| c.validate()) {
        Ok(()) => store.toasts.success("Pokračování k platbě..."),
        Err(err) => store.toasts.error(err.user_message()),
    };

    let is_address = move || checkout.with(|c| c.shipping.mode()) == DeliveryMode::Address;
    let is_box = move || checkout.with(|c| c.shipping.mode()) == DeliveryMode::Box;

    view! {
        <div class="page page-checkout">
            <section class="page-hero">
                <h1>"Doprava a Platba"</h1>
            </section>

            <section class="checkout-grid">
                <div class="checkout-main">
                    <h2>"Vyberte způsob dopravy"</h2>
                    <div class="shipping-options">
                        {ShippingOption::ALL
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <div
                                        class="shipping-option"
                                        class:selected=move || {
                                            checkout.with(|c| c.shipping == option)
                                        }
                                        on:click=move |_| {
                                            checkout.update(|c| c.set_shipping(option))
                                        }
                                    >
                                        <span class="service-icon">{option.service_icon()}</span>
                                        <span class="option-name">{option.name()}</span>
                                        <span class="option-price">{option.price().display()}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    {move || is_address().then(|| view! { <AddressForm checkout=checkout/> })}
                    {move || is_box().then(|| view! { <PickupSelector checkout=checkout/> })}
                </div>

                <OrderSummary checkout=checkout on_continue=on_continue/>
            </section>
        </div>
    }
}

#[component]
fn AddressForm(checkout: RwSignal<Checkout>) -> impl IntoView {
    view! {
        <div class="address-form">
            <h3>"Doručovací adresa"</h3>
            <div class="form-grid">
                <label>
                    "Město"
                    <input
                        placeholder="Praha"
                        prop:value=move || checkout.with(|c| c.address.city.clone())
                        on:input=move |ev| {
                            checkout.update(|c| c.address.city = event_target_value(&ev))
                        }
                    />
                </label>
                <label>
                    "PSČ"
                    <input
                        placeholder="110 00"
                        prop:value=move || checkout.with(|c| c.address.postal_code.clone())
                        on:input=move |ev| {
                            checkout.update(|c| c.address.postal_code = event_target_value(&ev))
                        }
                    />
                </label>
                <label class="span-2">
                    "Ulice"
                    <input
                        placeholder="Václavské náměstí"
                        prop:value=move || checkout.with(|c| c.address.street.clone())
                        on:input=move |ev| {
                            checkout.update(|c| c.address.street = event_target_value(&ev))
                        }
                    />
                </label>
                <label>
                    "Číslo popisné"
                    <input
                        placeholder="123"
                        prop:value=move || checkout.with(|c| c.address.house_number.clone())
                        on:input=move |ev| {
                            checkout.update(|c| c.address.house_number = event_target_value(&ev))
                        }
                    />
                </label>
            </div>
        </div>
    }
}

#[component]
fn PickupSelector(checkout: RwSignal<Checkout>) -> impl IntoView {
    let results_shown = move || checkout.with(|c| c.results_shown);

    view! {
        <div class="pickup-selector">
            <h3>"Vyberte výdejní místo"</h3>
            <div class="pickup-grid">
                <div class="pickup-list-column">
                    <p class="field-label">"Vyhledat adresu nebo místo"</p>
                    <div class="pickup-search">
                        <input
                            placeholder="Zadejte adresu nebo název boxu..."
                            prop:value=move || checkout.with(|c| c.search_query.clone())
                            on:input=move |ev| {
                                checkout.update(|c| c.search_query = event_target_value(&ev))
                            }
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    checkout.update(|c| c.submit_search());
                                }
                            }
                        />
                        <button
                            class="btn btn-dark"
                            on:click=move |_| checkout.update(|c| c.submit_search())
                        >
                            "🔍"
                        </button>
                    </div>

                    {move || {
                        results_shown()
                            .then(|| {
                                view! {
                                    <div class="service-box">
                                        <span class="service-icon">
                                            {move || checkout.with(|c| c.shipping.service_icon())}
                                        </span>
                                        <div>
                                            <p>"Vybraná služba"</p>
                                            <p class="service-name">
                                                {move || checkout.with(|c| c.shipping.name())}
                                            </p>
                                        </div>
                                    </div>
                                    <div class="sort-buttons">
                                        <button
                                            class:active=move || {
                                                checkout.with(|c| c.sort == SortMode::Nearest)
                                            }
                                            on:click=move |_| {
                                                checkout.update(|c| c.sort = SortMode::Nearest)
                                            }
                                        >
                                            "Od nejbližšího"
                                        </button>
                                        <button
                                            class:active=move || {
                                                checkout.with(|c| c.sort == SortMode::List)
                                            }
                                            on:click=move |_| {
                                                checkout.update(|c| c.sort = SortMode::List)
                                            }
                                        >
                                            "Seznam boxů"
                                        </button>
                                    </div>
                                    <PickupList checkout=checkout/>
                                }
                            })
                    }}
                </div>

                <div class="pickup-map-column">
                    <p class="field-label">"Mapa výdejních míst"</p>
                    {move || {
                        if results_shown() {
                            view! { <PickupMap checkout=checkout/> }.into_any()
                        } else {
                            view! {
                                <div class="map-placeholder">
                                    <p>"📍 Zadejte adresu pro zobrazení mapy"</p>
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn PickupList(checkout: RwSignal<Checkout>) -> impl IntoView {
    view! {
        <div class="pickup-list">
            <p class="result-count">
                {move || {
                    format!(
                        "Nalezená výdejní místa ({})",
                        checkout.with(|c| c.visible_points().len()),
                    )
                }}
            </p>
            {move || {
                checkout
                    .with(|c| c.visible_points())
                    .into_iter()
                    .map(|point| {
                        let selected = move || checkout.with(|c| c.is_selected(point.id));
                        view! {
                            <button
                                class="pickup-point"
                                class:selected=selected
                                class:hovered=move || checkout.with(|c| c.is_hovered(point.id))
                                on:click=move |_| checkout.update(|c| c.select_point(point.id))
                                on:mouseenter=move |_| {
                                    checkout.update(|c| c.set_hovered(Some(point.id)))
                                }
                                on:mouseleave=move |_| checkout.update(|c| c.set_hovered(None))
                            >
                                <div class="pickup-point-info">
                                    <p class="pickup-point-name">{point.name}</p>
                                    <p class="pickup-point-address">{point.address}</p>
                                    <p class="pickup-point-distance">
                                        {format!("📍 {}", point.distance)}
                                    </p>
                                </div>
                                {move || {
                                    if selected() {
                                        view! { <span class="badge badge-selected">"VYBRÁNO"</span> }
                                            .into_any()
                                    } else {
                                        view! { <span class="badge badge-free">"ZDARMA"</span> }
                                            .into_any()
                                    }
                                }}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn PickupMap(checkout: RwSignal<Checkout>) -> impl IntoView {
    view! {
        <div class="pickup-map">
            {move || {
                checkout
                    .with(|c| c.visible_points())
                    .into_iter()
                    .enumerate()
                    .map(|(index, point)| {
                        let selected = move || checkout.with(|c| c.is_selected(point.id));
                        let hovered = move || checkout.with(|c| c.is_hovered(point.id));
                        view! {
                            <div class="map-marker" style:top=point.map_top style:left=point.map_left>
                                <button
                                    class="marker-pin"
                                    class:selected=selected
                                    class:hovered=hovered
                                    on:click=move |_| checkout.update(|c| c.select_point(point.id))
                                    on:mouseenter=move |_| {
                                        checkout.update(|c| c.set_hovered(Some(point.id)))
                                    }
                                    on:mouseleave=move |_| {
                                        checkout.update(|c| c.set_hovered(None))
                                    }
                                >
                                    {index + 1}
                                </button>
                                {move || {
                                    (selected() || hovered())
                                        .then(|| {
                                            view! {
                                                <div class="marker-bubble">
                                                    <p class="pickup-point-name">{point.name}</p>
                                                    <p class="pickup-point-address">{point.address}</p>
                                                    <div class="marker-bubble-foot">
                                                        <span>{format!("📍 {}", point.distance)}</span>
                                                        {move || {
                                                            if selected() {
                                                                view! {
                                                                    <span class="badge badge-selected">
                                                                        "✓ Vybráno"
                                                                    </span>
                                                                }
                                                                .into_any()
                                                            } else {
                                                                view! {
                                                                    <button
                                                                        class="btn btn-dark btn-small"
                                                                        on:click=move |_| {
                                                                            checkout
                                                                                .update(|c| c.select_point(point.id))
                                                                        }
                                                                    >
                                                                        "Vybrat"
                                                                    </button>
                                                                }
                                                                .into_any()
                                                            }
                                                        }}
                                                    </div>
                                                </div>
                                            }
                                        })
                                }}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn OrderSummary<F>(checkout: RwSignal<Checkout>, on_continue: F) -> impl IntoView
where
    F: Fn(leptos::ev::MouseEvent) + Copy + 'static,
{
    let store = use_store();
    let summary = move || store.cart.with(|cart| checkout.with(|c| c.summary(cart)));

    view! {
        <div class="checkout-summary">
            <h2>"Souhrn objednávky"</h2>

            <div class="summary-lines">
                {move || {
                    store
                        .cart
                        .with(|cart| cart.lines().to_vec())
                        .into_iter()
                        .map(|line| {
                            let info = line.variant.info();
                            view! {
                                <div class="summary-line">
                                    <img src=line.variant.primary_image() alt=info.name/>
                                    <div class="summary-line-info">
                                        <p>{info.name}</p>
                                        <p class="unit">
                                            {format!(
                                                "{}× {}",
                                                line.quantity,
                                                unit_price().display(),
                                            )}
                                        </p>
                                    </div>
                                    <p class="total">{line.line_total().display()}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="price-rows">
                <div class="price-row">
                    <span>"Mezisoučet"</span>
                    <span>{move || summary().subtotal.display()}</span>
                </div>
                <div class="price-row">
                    <span>"Doprava"</span>
                    <span>{move || summary().shipping.display()}</span>
                </div>
            </div>

            <div class="price-row price-total">
                <span>"Celkem"</span>
                <span>{move || summary().grand_total.display()}</span>
            </div>

            <button class="btn btn-dark btn-wide" on:click=on_continue>
                "Pokračovat k platbě"
            </button>
            <button
                class="btn btn-outline btn-wide"
                on:click=move |_| store.navigate(Page::Cart, None)
            >
                "Zpět do košíku"
            </button>
        </div>
    }
}
